//! Holder data types, geometry formulas and the layout pipeline.

pub mod formulas;
pub mod pipeline;
pub mod request;
pub mod types;

pub use pipeline::*;
pub use request::*;
pub use types::*;

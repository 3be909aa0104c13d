pub mod compiler;
pub mod emit;
pub mod error;
pub mod lut;

pub use compiler::{CompiledScore, Compiler};
pub use error::Error;

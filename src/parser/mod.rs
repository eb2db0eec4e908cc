pub mod abi;
pub mod error;
pub mod parser;
pub mod types;

pub use abi::*;
pub use error::*;
pub use parser::*;
pub use types::*;

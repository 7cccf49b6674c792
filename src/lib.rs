pub mod core;
pub use crate::core::*;

pub mod error;
pub use crate::error::*;

pub mod parser;
pub use crate::parser::*;

pub mod transaction;
pub use crate::transaction::*;

pub mod instruction;
pub mod query;

pub use query::*;

pub mod catalog;
pub mod errors;

pub mod budget;
pub(crate) mod common;
pub mod expense;
pub mod insights;

pub mod catalog;
pub mod mock;
pub mod reporting;

pub mod config;
pub mod recommender;
pub mod validation;

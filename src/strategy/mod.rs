pub mod geo;
pub mod implementations;
pub mod scoring;
pub mod traits;

pub mod recommendation;
pub mod shortage;
pub mod supplier;

pub mod export;
pub mod location;

//! Civ Unit Export - analyzer unit statistics to front-end unit data

pub mod analyzer;
pub mod core;
pub mod export;

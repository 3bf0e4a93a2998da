pub mod error;
pub mod logger;
pub mod standard;
pub mod validation;

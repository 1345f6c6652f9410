pub mod error;
pub mod file_age;
pub mod logger;
pub mod validation;

pub mod excel;
pub mod json;
pub mod types;

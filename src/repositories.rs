pub mod records;
pub mod settings;

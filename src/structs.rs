pub mod advisor;
pub mod gemini;
pub mod prediction;
pub mod records;
pub mod settings;
pub mod stats;

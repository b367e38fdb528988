pub mod advisor;
pub mod gemini;
pub mod predictor;
pub mod stats;

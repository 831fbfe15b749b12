// Pothole classification — remote LLM judgment behind a trait.

pub mod gemini;
pub mod traits;

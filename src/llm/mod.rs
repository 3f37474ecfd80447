pub mod together;

pub use together::TogetherClient;

pub const STOP_MARKER: &str = "Término:";

/// Sampling parameters for one generation call. The stop sequence is always
/// the term-label marker, so the model cannot run on into a new entry.
#[derive(Debug, Clone)]
pub struct GenerationParams {
    pub max_tokens: u32,
    pub temperature: f32,
    pub top_p: f32,
    pub top_k: u32,
    pub repetition_penalty: f32,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            max_tokens: 2048,
            temperature: 0.0,
            top_p: 0.7,
            top_k: 50,
            repetition_penalty: 1.0,
        }
    }
}

impl GenerationParams {
    pub fn with_temperature(temperature: f32) -> Self {
        Self {
            temperature,
            ..Self::default()
        }
    }
}

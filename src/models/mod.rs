mod generation;
mod options;
mod stats;

pub use generation::{
    ContentType, Customization, EvolutionScore, GenerateResponse, GenerationRequest,
    GenerationResult,
};
pub use options::CustomizationOptions;
pub use stats::{EvolutionStats, StatsDisplay, UNKNOWN_PREFERENCE};

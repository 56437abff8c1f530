use async_trait::async_trait;
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;

use super::{ApiError, EvolutionApi};
use crate::models::{
    Customization, CustomizationOptions, EvolutionScore, EvolutionStats, GenerateResponse,
    GenerationRequest, GenerationResult,
};

/// Scripted stand-in for the generation service.
///
/// Each call pops the next queued answer; an empty queue answers with a
/// network error.
#[derive(Default)]
pub struct MockApi {
    generate_replies: RefCell<VecDeque<Result<GenerateResponse, ApiError>>>,
    stats_replies: RefCell<VecDeque<Result<EvolutionStats, ApiError>>>,
    options_replies: RefCell<VecDeque<Result<CustomizationOptions, ApiError>>>,
    pub generate_requests: RefCell<Vec<GenerationRequest>>,
    pub stats_calls: Cell<usize>,
}

impl MockApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_generate(self, reply: Result<GenerateResponse, ApiError>) -> Self {
        self.generate_replies.borrow_mut().push_back(reply);
        self
    }

    pub fn with_stats(self, reply: Result<EvolutionStats, ApiError>) -> Self {
        self.stats_replies.borrow_mut().push_back(reply);
        self
    }

    pub fn with_options(self, reply: Result<CustomizationOptions, ApiError>) -> Self {
        self.options_replies.borrow_mut().push_back(reply);
        self
    }

    pub fn generate_calls(&self) -> usize {
        self.generate_requests.borrow().len()
    }
}

fn exhausted() -> ApiError {
    ApiError::Network("no scripted reply".to_string())
}

#[async_trait(?Send)]
impl EvolutionApi for MockApi {
    async fn generate(&self, request: &GenerationRequest) -> Result<GenerateResponse, ApiError> {
        self.generate_requests.borrow_mut().push(request.clone());
        self.generate_replies
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(exhausted()))
    }

    async fn evolution_stats(&self) -> Result<EvolutionStats, ApiError> {
        self.stats_calls.set(self.stats_calls.get() + 1);
        self.stats_replies
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(exhausted()))
    }

    async fn customization_options(&self) -> Result<CustomizationOptions, ApiError> {
        self.options_replies
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(exhausted()))
    }
}

pub fn sample_result(artist: &str, genre: &str, mood: &str) -> GenerationResult {
    GenerationResult {
        artist: Some(artist.to_string()),
        customization: Customization {
            genre: genre.to_string(),
            mood: mood.to_string(),
            ..Customization::default()
        },
        ..GenerationResult::default()
    }
}

pub fn generated(results: Vec<GenerationResult>, score: i64) -> GenerateResponse {
    GenerateResponse::Generated {
        results,
        evolution_score: Some(EvolutionScore::Number(score.into())),
    }
}

pub fn sample_stats(total: u64, genre: &str, mood: &str, score: i64) -> EvolutionStats {
    EvolutionStats {
        total_generations: total,
        preferred_genre: genre.to_string(),
        preferred_mood: mood.to_string(),
        evolution_score: EvolutionScore::Number(score.into()),
        ..EvolutionStats::default()
    }
}

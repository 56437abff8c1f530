//! Request lifecycle of the generation form.
//!
//! The controller owns the "one request in flight" guard and the
//! trigger/loading state; everything it shows goes through
//! [`GenerationView`], so the flow runs the same against the page and
//! against a recording view in tests.

use std::cell::Cell;
use thiserror::Error;

use crate::api::{ApiError, EvolutionApi};
use crate::components::ResultCard;
use crate::config::ClientConfig;
use crate::models::{
    CustomizationOptions, Customization, GenerateResponse, GenerationRequest, StatsDisplay,
};
use crate::text::parse_quantity;

pub const NO_CONTENT_TYPE_ALERT: &str = "Please select at least one content type!";
pub const TRANSPORT_ALERT: &str = "Error generating content. Please try again.";

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("no content type selected")]
    NoContentType,

    #[error("a generation request is already in flight")]
    Busy,
}

/// Trigger control and loading indicator, as one value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ControlState {
    pub trigger_disabled: bool,
    pub loading_visible: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Lifecycle {
    Started,
    Finished,
}

impl ControlState {
    pub fn transition(self, event: Lifecycle) -> Self {
        match event {
            Lifecycle::Started => ControlState {
                trigger_disabled: true,
                loading_visible: true,
            },
            Lifecycle::Finished => ControlState {
                trigger_disabled: false,
                loading_visible: false,
            },
        }
    }
}

/// Raw control values read from the form when the trigger fires.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FormSnapshot {
    pub quantity: String,
    pub content_types: Vec<String>,
    pub customization: Customization,
}

impl FormSnapshot {
    /// Only the content-type selection is validated; the rest passes through.
    pub fn into_request(self) -> Result<GenerationRequest, SubmitError> {
        if self.content_types.is_empty() {
            return Err(SubmitError::NoContentType);
        }

        Ok(GenerationRequest {
            quantity: parse_quantity(&self.quantity),
            content_types: self.content_types,
            customization: self.customization,
        })
    }
}

/// How a submitted request ended.
#[derive(Clone, Debug, PartialEq)]
pub enum GenerationOutcome {
    Rendered { cards: usize },
    Rejected(String),
    Failed(ApiError),
}

/// What the controller may change on the page.
pub trait GenerationView {
    fn set_controls(&self, state: ControlState);
    fn show_results(&self, cards: Vec<ResultCard>);
    fn set_evolution_score(&self, score: String);
    fn show_stats(&self, stats: StatsDisplay);
    fn show_options(&self, options: CustomizationOptions);
    fn alert(&self, message: &str);
    /// Start a stats refresh the caller does not wait for.
    fn schedule_stats_refresh(&self);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct RequestToken(u64);

pub struct GenerationController<A> {
    api: A,
    config: ClientConfig,
    controls: Cell<ControlState>,
    in_flight: Cell<Option<RequestToken>>,
    next_token: Cell<u64>,
}

impl<A: EvolutionApi> GenerationController<A> {
    pub fn new(api: A, config: ClientConfig) -> Self {
        Self {
            api,
            config,
            controls: Cell::new(ControlState::default()),
            in_flight: Cell::new(None),
            next_token: Cell::new(0),
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn controls(&self) -> ControlState {
        self.controls.get()
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight.get().is_some()
    }

    fn apply<V: GenerationView>(&self, event: Lifecycle, view: &V) {
        let next = self.controls.get().transition(event);
        self.controls.set(next);
        view.set_controls(next);
    }

    fn begin(&self) -> Result<RequestToken, SubmitError> {
        if self.in_flight.get().is_some() {
            return Err(SubmitError::Busy);
        }
        let token = RequestToken(self.next_token.get());
        self.next_token.set(token.0 + 1);
        self.in_flight.set(Some(token));
        Ok(token)
    }

    fn end(&self, token: RequestToken) {
        if self.in_flight.get() == Some(token) {
            self.in_flight.set(None);
        }
    }

    /// Validate, send one generation request and render its outcome.
    ///
    /// Returns `Err` only when nothing was sent. Whenever a request was
    /// sent, the controls are restored before this returns.
    pub async fn submit<V: GenerationView>(
        &self,
        form: FormSnapshot,
        view: &V,
    ) -> Result<GenerationOutcome, SubmitError> {
        let request = match form.into_request() {
            Ok(request) => request,
            Err(e) => {
                view.alert(NO_CONTENT_TYPE_ALERT);
                return Err(e);
            }
        };

        let token = match self.begin() {
            Ok(token) => token,
            Err(e) => {
                log::debug!("Ignoring submit: {}", e);
                return Err(e);
            }
        };

        self.apply(Lifecycle::Started, view);
        log::debug!(
            "Generating {:?} item(s) of {:?}",
            request.quantity,
            request.content_types
        );

        let outcome = match self.api.generate(&request).await {
            Ok(GenerateResponse::Generated {
                results,
                evolution_score,
            }) => {
                let cards: Vec<ResultCard> = results
                    .iter()
                    .enumerate()
                    .map(|(index, result)| ResultCard::build(index, result, &self.config))
                    .collect();
                let count = cards.len();

                view.show_results(cards);
                if let Some(score) = evolution_score {
                    view.set_evolution_score(score.to_string());
                }
                view.schedule_stats_refresh();

                GenerationOutcome::Rendered { cards: count }
            }
            Ok(GenerateResponse::Rejected { error }) => {
                log::warn!("Generation rejected: {}", error);
                view.alert(&format!("Error generating content: {}", error));
                GenerationOutcome::Rejected(error)
            }
            Err(e) => {
                log::error!("Generation request failed: {}", e);
                view.alert(TRANSPORT_ALERT);
                GenerationOutcome::Failed(e)
            }
        };

        self.end(token);
        self.apply(Lifecycle::Finished, view);

        Ok(outcome)
    }

    pub async fn refresh_stats<V: GenerationView>(&self, view: &V) {
        refresh_stats(&self.api, view).await;
    }

    pub async fn load_options<V: GenerationView>(&self, view: &V) {
        match self.api.customization_options().await {
            Ok(options) => view.show_options(options),
            Err(e) => log::warn!("Using built-in customization options: {}", e),
        }
    }
}

/// Best-effort stats reload. Failures are logged and the display is left
/// as it was.
pub async fn refresh_stats<A: EvolutionApi, V: GenerationView>(api: &A, view: &V) {
    match api.evolution_stats().await {
        Ok(stats) => view.show_stats(StatsDisplay::from(&stats)),
        Err(e) => log::warn!("Error loading stats: {}", e),
    }
}

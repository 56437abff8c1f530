use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::ApiClient;
use crate::components::{GenerationForm, Header, LoadingSpinner, ResultCard, ResultCardView, StatsPanel};
use crate::config::ClientConfig;
use crate::controller::{
    refresh_stats, ControlState, FormSnapshot, GenerationController, GenerationView,
};
use crate::models::{CustomizationOptions, StatsDisplay};

/// Signals the controller writes to.
#[derive(Clone)]
struct StudioView {
    api: ApiClient,
    set_controls: WriteSignal<ControlState>,
    set_cards: WriteSignal<Vec<ResultCard>>,
    set_score: WriteSignal<String>,
    set_stats: WriteSignal<StatsDisplay>,
    set_options: WriteSignal<CustomizationOptions>,
}

impl GenerationView for StudioView {
    fn set_controls(&self, state: ControlState) {
        self.set_controls.set(state);
    }

    fn show_results(&self, cards: Vec<ResultCard>) {
        self.set_cards.set(cards);
    }

    fn set_evolution_score(&self, score: String) {
        self.set_score.set(score);
    }

    fn show_stats(&self, stats: StatsDisplay) {
        self.set_score.set(stats.evolution_score.clone());
        self.set_stats.set(stats);
    }

    fn show_options(&self, options: CustomizationOptions) {
        self.set_options.set(options);
    }

    fn alert(&self, message: &str) {
        let Some(window) = web_sys::window() else {
            log::error!("No window to alert: {}", message);
            return;
        };
        if let Err(e) = window.alert_with_message(message) {
            log::error!("Alert failed: {:?}", e);
        }
    }

    fn schedule_stats_refresh(&self) {
        let view = self.clone();
        spawn_local(async move {
            refresh_stats(&view.api, &view).await;
        });
    }
}

#[component]
pub fn StudioPage() -> impl IntoView {
    let config = use_context::<ClientConfig>().unwrap_or_default();
    let api = ApiClient::new(config.clone());

    let (controls, set_controls) = signal(ControlState::default());
    let (cards, set_cards) = signal(Vec::<ResultCard>::new());
    let (score, set_score) = signal("0".to_string());
    let (stats, set_stats) = signal(StatsDisplay::placeholder());
    let (options, set_options) = signal(CustomizationOptions::default());

    let view_handle = StudioView {
        api: api.clone(),
        set_controls,
        set_cards,
        set_score,
        set_stats,
        set_options,
    };

    let controller = StoredValue::new_local(Rc::new(GenerationController::new(api, config)));

    // Page-load work: stats and selector choices
    {
        let controller = controller.get_value();
        let view = view_handle.clone();
        spawn_local(async move {
            controller.refresh_stats(&view).await;
            controller.load_options(&view).await;
        });
    }

    let on_submit = {
        let view = view_handle.clone();
        Callback::new(move |form: FormSnapshot| {
            let controller = controller.get_value();
            let view = view.clone();
            spawn_local(async move {
                if let Err(e) = controller.submit(form, &view).await {
                    log::debug!("Submission not sent: {}", e);
                }
            });
        })
    };

    view! {
        <Header evolution_score=score />
        <main class="container-wide py-10 animate-fade-in">
            <section class="text-center mb-10">
                <h1 class="text-display-xl font-display font-semibold text-ink-900 mb-4">
                    "Music AI"
                    <span class="block text-gradient-gold">"Studio"</span>
                </h1>
                <p class="text-body-lg text-ink-500 max-w-xl mx-auto leading-relaxed">
                    "Generate songs, lyrics, artist names and album art. "
                    "The AI evolves with every generation."
                </p>
            </section>

            <div class="grid lg:grid-cols-3 gap-8">
                <div class="lg:col-span-2 space-y-6">
                    <GenerationForm
                        options=options
                        disabled=Signal::derive(move || controls.get().trigger_disabled)
                        on_submit=on_submit
                    />

                    <LoadingSpinner
                        visible=Signal::derive(move || controls.get().loading_visible)
                        message="Generating your music...".to_string()
                    />

                    <section aria-labelledby="results-heading">
                        <h2 id="results-heading" class="sr-only">"Results"</h2>
                        <div id="results" class="grid md:grid-cols-2 gap-6">
                            {move || cards.get().into_iter().map(|card| view! {
                                <ResultCardView card=card />
                            }).collect_view()}
                        </div>
                    </section>
                </div>

                <aside>
                    <StatsPanel stats=stats />
                </aside>
            </div>
        </main>
    }
}

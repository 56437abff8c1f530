use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::config::ClientConfig;
use crate::pages::StudioPage;

#[component]
pub fn App(config: ClientConfig) -> impl IntoView {
    provide_context(config);

    view! {
        <Router>
            <div class="min-h-screen bg-paper-50">
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=StudioPage />
                </Routes>
                <Footer />
            </div>
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="text-center py-20">
            <h1 class="text-6xl font-bold text-ink-200 mb-4">"404"</h1>
            <h2 class="text-2xl font-display text-ink-900 mb-4">"Page Not Found"</h2>
            <p class="text-ink-500 mb-6">"The page you're looking for doesn't exist."</p>
            <a href="/" class="btn-primary">
                "Back to the Studio"
            </a>
        </div>
    }
}

#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="border-t border-paper-200 mt-20">
            <div class="container mx-auto px-4 py-8 text-center">
                <p class="text-ink-400 text-sm">
                    "Built with Leptos + Rust."
                </p>
                <p class="text-ink-300 text-xs mt-2">
                    "Music AI - an AI that evolves after use"
                </p>
            </div>
        </footer>
    }
}

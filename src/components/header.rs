use leptos::prelude::*;

/// Top bar; also carries the second evolution-score readout.
#[component]
pub fn Header(#[prop(into)] evolution_score: Signal<String>) -> impl IntoView {
    view! {
        <header class="sticky top-0 z-50 bg-paper-50/95 backdrop-blur-sm border-b border-paper-300">
            <div class="container-wide">
                <div class="flex items-center justify-between h-16">
                    // Logo and brand
                    <a
                        href="/"
                        class="group flex items-center gap-3 text-ink-800 hover:text-clay-600 transition-colors duration-200"
                        aria-label="Music AI Home"
                    >
                        <div class="w-10 h-10 rounded-md bg-clay-100 flex items-center justify-center transition-transform duration-200 group-hover:scale-105">
                            <svg class="w-5 h-5 text-clay-600" fill="none" stroke="currentColor" stroke-width="2" viewBox="0 0 24 24" aria-hidden="true">
                                <path stroke-linecap="round" stroke-linejoin="round" d="M9 19V6l12-3v13M9 19c0 1.105-1.343 2-3 2s-3-.895-3-2 1.343-2 3-2 3 .895 3 2zm12-3c0 1.105-1.343 2-3 2s-3-.895-3-2 1.343-2 3-2 3 .895 3 2zM9 10l12-3" />
                            </svg>
                        </div>
                        <span class="hidden sm:block font-display text-xl font-medium tracking-tight text-ink-900">
                            "Music AI"
                        </span>
                    </a>

                    <div class="flex items-center gap-2 text-body-sm text-ink-500">
                        <span class="uppercase tracking-wider text-label-sm">"Evolution Score"</span>
                        <span id="evolution-score" class="badge-gold font-semibold">
                            {move || evolution_score.get()}
                        </span>
                    </div>
                </div>
            </div>
        </header>
    }
}

use leptos::prelude::*;

use crate::models::StatsDisplay;

/// Evolution statistics block.
#[component]
pub fn StatsPanel(#[prop(into)] stats: Signal<StatsDisplay>) -> impl IntoView {
    view! {
        <section class="card p-6" aria-labelledby="stats-heading">
            <h3 id="stats-heading" class="font-display text-heading-lg text-ink-900 mb-4">
                "AI Evolution"
            </h3>

            <dl class="grid grid-cols-2 gap-4">
                <StatItem label="Total Generations" id="stat-total" value=Signal::derive(move || stats.get().total) />
                <StatItem label="Preferred Genre" id="stat-genre" value=Signal::derive(move || stats.get().genre) />
                <StatItem label="Preferred Mood" id="stat-mood" value=Signal::derive(move || stats.get().mood) />
                <StatItem label="Evolution Score" id="stat-evolution" value=Signal::derive(move || stats.get().evolution_score) />
            </dl>

            <Distribution title="Genre Distribution" entries=Signal::derive(move || stats.get().genre_distribution) />
            <Distribution title="Mood Distribution" entries=Signal::derive(move || stats.get().mood_distribution) />
            <Distribution title="Tempo Distribution" entries=Signal::derive(move || stats.get().tempo_distribution) />
        </section>
    }
}

#[component]
fn StatItem(label: &'static str, id: &'static str, value: Signal<String>) -> impl IntoView {
    view! {
        <div>
            <dt class="text-label-sm uppercase tracking-wider text-ink-400">{label}</dt>
            <dd id=id class="font-display text-display-sm text-gold-600 font-semibold">
                {move || value.get()}
            </dd>
        </div>
    }
}

#[component]
fn Distribution(title: &'static str, entries: Signal<Vec<(String, u64)>>) -> impl IntoView {
    view! {
        <Show when=move || !entries.get().is_empty()>
            <div class="mt-5 pt-4 border-t border-paper-200">
                <h4 class="text-label-md uppercase tracking-wider text-ink-500 mb-2">{title}</h4>
                <ul class="space-y-1">
                    {move || entries.get().into_iter().map(|(name, count)| view! {
                        <li class="flex justify-between text-body-sm text-ink-600">
                            <span>{name}</span>
                            <span class="text-ink-400">{count}</span>
                        </li>
                    }).collect_view()}
                </ul>
            </div>
        </Show>
    }
}

use leptos::prelude::*;

use crate::controller::FormSnapshot;
use crate::models::{ContentType, Customization, CustomizationOptions};

/// Quantity, content types and the five customization selectors.
#[component]
pub fn GenerationForm(
    #[prop(into)] options: Signal<CustomizationOptions>,
    /// Trigger control state, driven by the controller
    #[prop(into)]
    disabled: Signal<bool>,
    /// Receives the raw control values when the trigger fires
    #[prop(into)]
    on_submit: Callback<FormSnapshot>,
) -> impl IntoView {
    let quantity = RwSignal::new("1".to_string());
    let selected = RwSignal::new(
        ContentType::ALL
            .into_iter()
            .filter(ContentType::checked_by_default)
            .collect::<Vec<_>>(),
    );

    let genre = RwSignal::new(String::new());
    let mood = RwSignal::new(String::new());
    let tempo = RwSignal::new(String::new());
    let key = RwSignal::new(String::new());
    let style = RwSignal::new(String::new());

    let toggle = move |content_type: ContentType, checked: bool| {
        selected.update(|current| {
            if checked {
                if !current.contains(&content_type) {
                    current.push(content_type);
                }
            } else {
                current.retain(|c| *c != content_type);
            }
        });
    };

    let submit = move |_| {
        // Checked boxes in document order
        let content_types = ContentType::ALL
            .into_iter()
            .filter(|c| selected.with(|s| s.contains(c)))
            .map(|c| c.as_str().to_string())
            .collect();

        on_submit.run(FormSnapshot {
            quantity: quantity.get(),
            content_types,
            customization: Customization {
                genre: genre.get(),
                mood: mood.get(),
                tempo: tempo.get(),
                key: key.get(),
                style: style.get(),
            },
        });
    };

    view! {
        <section class="card p-6 space-y-6" aria-labelledby="form-heading">
            <h2 id="form-heading" class="font-display text-display-sm text-ink-900">
                "Create"
            </h2>

            <div>
                <label for="quantity" class="block text-label-md uppercase tracking-wider text-ink-500 mb-2">
                    "Quantity"
                </label>
                <input
                    id="quantity"
                    type="number"
                    min="1"
                    class="w-24 px-3 py-2 border border-paper-300 rounded-md text-body-md"
                    prop:value=move || quantity.get()
                    on:input=move |ev| quantity.set(event_target_value(&ev))
                />
            </div>

            <fieldset>
                <legend class="text-label-md uppercase tracking-wider text-ink-500 mb-2">
                    "Content Types"
                </legend>
                <div class="flex flex-wrap gap-4">
                    {ContentType::ALL.into_iter().map(|content_type| view! {
                        <label class="inline-flex items-center gap-2 text-body-sm text-ink-700">
                            <input
                                type="checkbox"
                                name="content_type"
                                value=content_type.as_str()
                                prop:checked=move || selected.with(|s| s.contains(&content_type))
                                on:change=move |ev| toggle(content_type, event_target_checked(&ev))
                            />
                            {content_type.label()}
                        </label>
                    }).collect_view()}
                </div>
            </fieldset>

            <div class="grid grid-cols-2 md:grid-cols-5 gap-4">
                <Selector id="genre" label="Genre" value=genre choices=Signal::derive(move || options.get().genres) />
                <Selector id="mood" label="Mood" value=mood choices=Signal::derive(move || options.get().moods) />
                <Selector id="tempo" label="Tempo" value=tempo choices=Signal::derive(move || options.get().tempos) />
                <Selector id="key" label="Key" value=key choices=Signal::derive(move || options.get().keys) />
                <Selector id="style" label="Style" value=style choices=Signal::derive(move || options.get().styles) />
            </div>

            <button
                id="generate-btn"
                type="button"
                class="btn-primary px-8 py-3 text-body-md"
                disabled=move || disabled.get()
                on:click=submit
            >
                "Generate"
            </button>
        </section>
    }
}

/// A select whose value snaps to the first choice whenever the current one
/// is not offered.
#[component]
fn Selector(
    id: &'static str,
    label: &'static str,
    value: RwSignal<String>,
    choices: Signal<Vec<String>>,
) -> impl IntoView {
    Effect::new(move |_| {
        let choices = choices.get();
        let current = value.get_untracked();
        if !choices.contains(&current) {
            value.set(choices.first().cloned().unwrap_or_default());
        }
    });

    view! {
        <div>
            <label for=id class="block text-label-md uppercase tracking-wider text-ink-500 mb-2">
                {label}
            </label>
            <select
                id=id
                class="w-full px-3 py-2 border border-paper-300 rounded-md text-body-md bg-white"
                prop:value=move || value.get()
                on:change=move |ev| value.set(event_target_value(&ev))
            >
                {move || choices.get().into_iter().map(|choice| {
                    let text = choice.clone();
                    view! { <option value=choice>{text}</option> }
                }).collect_view()}
            </select>
        </div>
    }
}

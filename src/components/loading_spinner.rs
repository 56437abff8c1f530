use leptos::prelude::*;

#[component]
pub fn LoadingSpinner(
    #[prop(into)] visible: Signal<bool>,
    #[prop(into)] message: Signal<String>,
) -> impl IntoView {
    view! {
        <div
            id="loading"
            class="card p-10 flex flex-col items-center justify-center text-center"
            style:display=move || display_style(visible.get())
            role="status"
            aria-live="polite"
            aria-busy=move || visible.get().to_string()
        >
            <div class="flex justify-center mb-6">
                <div class="w-12 h-12 border-4 border-gold-200 border-t-gold-500 rounded-full animate-spin"></div>
            </div>

            <p class="text-body-md text-stone-600 max-w-sm mx-auto mb-4">
                {move || message.get()}
            </p>

            <div class="flex justify-center gap-1.5" aria-hidden="true">
                <div class="w-2 h-2 rounded-full bg-gold-400 animate-bounce" style="animation-delay: 0ms"></div>
                <div class="w-2 h-2 rounded-full bg-gold-500 animate-bounce" style="animation-delay: 150ms"></div>
                <div class="w-2 h-2 rounded-full bg-gold-600 animate-bounce" style="animation-delay: 300ms"></div>
            </div>

            <span class="sr-only">{move || format!("Loading: {}", message.get())}</span>
        </div>
    }
}

/// The card lays out as flex; hiding it must not drop back to block.
fn display_style(visible: bool) -> &'static str {
    if visible {
        "flex"
    } else {
        "none"
    }
}

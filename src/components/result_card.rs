use leptos::prelude::*;

use crate::config::ClientConfig;
use crate::models::GenerationResult;
use crate::text::lyrics_preview;

#[derive(Clone, Debug, PartialEq)]
pub struct DownloadLink {
    pub label: &'static str,
    pub href: String,
}

/// Display data for one generated item.
#[derive(Clone, Debug, PartialEq)]
pub struct ResultCard {
    pub title: String,
    pub artist: Option<String>,
    pub meta: String,
    pub image_src: Option<String>,
    /// Already escaped; inserted as HTML.
    pub lyrics_html: Option<String>,
    pub downloads: Vec<DownloadLink>,
}

impl ResultCard {
    /// `index` is the zero-based position in the server's result list.
    pub fn build(index: usize, result: &GenerationResult, config: &ClientConfig) -> Self {
        let link = |label: &'static str, file: &Option<String>| {
            present(file).map(|f| DownloadLink {
                label,
                href: config.output_url(f),
            })
        };

        let downloads = [
            link("⬇ Download Song", &result.song),
            link("⬇ Download Lyrics", &result.lyrics_file),
            link("⬇ Download Video", &result.video),
            link("⬇ Download Art", &result.picture),
        ]
        .into_iter()
        .flatten()
        .collect();

        Self {
            title: format!("Generation {}", index + 1),
            artist: present(&result.artist).map(|a| format!("🎤 {}", a)),
            meta: format!(
                "Genre: {} | Mood: {}",
                result.customization.genre, result.customization.mood
            ),
            image_src: present(&result.picture).map(|p| config.output_url(p)),
            lyrics_html: present(&result.lyrics)
                .map(|l| lyrics_preview(l, config.lyrics_preview_chars)),
            downloads,
        }
    }
}

/// Empty strings count as absent.
fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

#[component]
pub fn ResultCardView(card: ResultCard) -> impl IntoView {
    view! {
        <article class="result-card card p-5 animate-fade-in">
            <h4 class="font-display text-heading-md text-ink-900 mb-2">{card.title}</h4>

            {card.artist.map(|artist| view! {
                <div class="artist-name text-body-md font-medium text-clay-600 mb-1">{artist}</div>
            })}

            <div class="meta text-label-sm uppercase tracking-wide text-ink-400 mb-4">
                {card.meta}
            </div>

            {card.image_src.map(|src| view! {
                <div class="content mb-4">
                    <img src=src alt="Album Art" class="w-full rounded-md shadow-elevation-2" />
                </div>
            })}

            {card.lyrics_html.map(|html| view! {
                <div class="content mb-4">
                    <div
                        class="lyrics-preview whitespace-pre-line text-body-sm text-ink-600"
                        inner_html=html
                    ></div>
                </div>
            })}

            <div class="content flex flex-wrap gap-2">
                {card.downloads.into_iter().map(|link| view! {
                    <a href=link.href class="download-link btn-secondary text-label-sm" download="">
                        {link.label}
                    </a>
                }).collect_view()}
            </div>
        </article>
    }
}

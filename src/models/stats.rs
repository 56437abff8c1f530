use serde::Deserialize;
use std::collections::BTreeMap;

use super::EvolutionScore;

/// Sentinel the backend reports before any preference has been learned.
pub const UNKNOWN_PREFERENCE: &str = "unknown";

const PLACEHOLDER: &str = "-";

fn unknown() -> String {
    UNKNOWN_PREFERENCE.to_string()
}

/// Body of `GET /api/evolution-stats`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct EvolutionStats {
    #[serde(default)]
    pub total_generations: u64,
    #[serde(default = "unknown")]
    pub preferred_genre: String,
    #[serde(default = "unknown")]
    pub preferred_mood: String,
    #[serde(default)]
    pub evolution_score: EvolutionScore,
    #[serde(default)]
    pub genre_counts: BTreeMap<String, u64>,
    #[serde(default)]
    pub mood_counts: BTreeMap<String, u64>,
    #[serde(default)]
    pub tempo_counts: BTreeMap<String, u64>,
}

/// Stats as they appear on the page.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StatsDisplay {
    pub total: String,
    pub genre: String,
    pub mood: String,
    pub evolution_score: String,
    pub genre_distribution: Vec<(String, u64)>,
    pub mood_distribution: Vec<(String, u64)>,
    pub tempo_distribution: Vec<(String, u64)>,
}

impl StatsDisplay {
    /// Placeholder shown before the first stats response arrives.
    pub fn placeholder() -> Self {
        Self {
            total: "0".to_string(),
            genre: PLACEHOLDER.to_string(),
            mood: PLACEHOLDER.to_string(),
            evolution_score: "0".to_string(),
            genre_distribution: Vec::new(),
            mood_distribution: Vec::new(),
            tempo_distribution: Vec::new(),
        }
    }
}

impl From<&EvolutionStats> for StatsDisplay {
    fn from(stats: &EvolutionStats) -> Self {
        Self {
            total: stats.total_generations.to_string(),
            genre: preference_label(&stats.preferred_genre),
            mood: preference_label(&stats.preferred_mood),
            evolution_score: stats.evolution_score.to_string(),
            genre_distribution: distribution(&stats.genre_counts),
            mood_distribution: distribution(&stats.mood_counts),
            tempo_distribution: distribution(&stats.tempo_counts),
        }
    }
}

fn preference_label(value: &str) -> String {
    if value == UNKNOWN_PREFERENCE {
        PLACEHOLDER.to_string()
    } else {
        value.to_string()
    }
}

/// Most used first; ties broken by name.
fn distribution(counts: &BTreeMap<String, u64>) -> Vec<(String, u64)> {
    let mut entries: Vec<(String, u64)> = counts
        .iter()
        .map(|(name, count)| (name.clone(), *count))
        .collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    entries
}

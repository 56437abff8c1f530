use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Output kinds the generation service can produce per item.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ContentType {
    Song,
    Lyrics,
    Artist,
    Picture,
    Video,
}

impl ContentType {
    pub const ALL: [ContentType; 5] = [
        ContentType::Song,
        ContentType::Lyrics,
        ContentType::Artist,
        ContentType::Picture,
        ContentType::Video,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Song => "song",
            ContentType::Lyrics => "lyrics",
            ContentType::Artist => "artist",
            ContentType::Picture => "picture",
            ContentType::Video => "video",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ContentType::Song => "Song",
            ContentType::Lyrics => "Lyrics",
            ContentType::Artist => "Artist Name",
            ContentType::Picture => "Album Art",
            ContentType::Video => "Video",
        }
    }

    /// Selection the form starts with; matches the server's fallback set.
    pub fn checked_by_default(&self) -> bool {
        matches!(self, ContentType::Song | ContentType::Lyrics | ContentType::Artist)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Customization {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub genre: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub mood: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub tempo: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub key: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub style: String,
}

/// Echo fields may come back as `null`; they render as empty text.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Body of `POST /api/generate`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GenerationRequest {
    /// `None` serializes as `null`, which is what an unparseable field produces.
    pub quantity: Option<i64>,
    pub content_types: Vec<String>,
    pub customization: Customization,
}

/// One generated item, in the order the server returned it.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct GenerationResult {
    #[serde(default)]
    pub artist: Option<String>,
    #[serde(default)]
    pub picture: Option<String>,
    #[serde(default)]
    pub lyrics: Option<String>,
    #[serde(default)]
    pub song: Option<String>,
    #[serde(default)]
    pub lyrics_file: Option<String>,
    #[serde(default)]
    pub video: Option<String>,
    #[serde(default)]
    pub customization: Customization,
}

/// Opaque score reported by the backend, either a JSON number or a string.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum EvolutionScore {
    Number(serde_json::Number),
    Text(String),
}

impl Default for EvolutionScore {
    fn default() -> Self {
        EvolutionScore::Number(serde_json::Number::from(0))
    }
}

impl fmt::Display for EvolutionScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvolutionScore::Number(n) => write!(f, "{}", n),
            EvolutionScore::Text(s) => write!(f, "{}", s),
        }
    }
}

/// Decoded body of `POST /api/generate`, branched on its `success` flag.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(from = "RawGenerateResponse")]
pub enum GenerateResponse {
    Generated {
        results: Vec<GenerationResult>,
        evolution_score: Option<EvolutionScore>,
    },
    Rejected {
        error: String,
    },
}

#[derive(Deserialize)]
struct RawGenerateResponse {
    success: bool,
    #[serde(default)]
    results: Vec<GenerationResult>,
    #[serde(default)]
    evolution_score: Option<EvolutionScore>,
    #[serde(default)]
    error: Option<String>,
}

impl From<RawGenerateResponse> for GenerateResponse {
    fn from(raw: RawGenerateResponse) -> Self {
        if raw.success {
            GenerateResponse::Generated {
                results: raw.results,
                evolution_score: raw.evolution_score,
            }
        } else {
            GenerateResponse::Rejected {
                error: raw.error.unwrap_or_else(|| "Unknown error".to_string()),
            }
        }
    }
}

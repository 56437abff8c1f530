use serde::Deserialize;

/// Choices offered by the five customization selectors.
///
/// Fetched from `GET /api/customization-options`; the built-in catalogue
/// mirrors what the service publishes so the form stays usable when the
/// fetch fails.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct CustomizationOptions {
    pub genres: Vec<String>,
    pub moods: Vec<String>,
    pub tempos: Vec<String>,
    pub keys: Vec<String>,
    pub styles: Vec<String>,
}

fn owned(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

impl Default for CustomizationOptions {
    fn default() -> Self {
        Self {
            genres: owned(&[
                "pop", "rock", "jazz", "classical", "electronic", "hip-hop", "country", "blues",
            ]),
            moods: owned(&[
                "happy", "sad", "energetic", "calm", "romantic", "dark", "uplifting",
            ]),
            tempos: owned(&["slow", "medium", "fast", "variable"]),
            keys: owned(&[
                "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
            ]),
            styles: owned(&["acoustic", "electric", "orchestral", "synthetic", "mixed"]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalogue() {
        let options = CustomizationOptions::default();
        assert_eq!(options.genres.len(), 8);
        assert_eq!(options.moods.len(), 7);
        assert_eq!(options.tempos, vec!["slow", "medium", "fast", "variable"]);
        assert_eq!(options.keys.len(), 12);
        assert_eq!(options.styles[0], "acoustic");
    }

    #[test]
    fn test_decode() {
        let options: CustomizationOptions = serde_json::from_str(
            r#"{"genres":["ambient"],"moods":["dreamy"],"tempos":["slow"],"keys":["D"],"styles":["mixed"]}"#,
        )
        .unwrap();
        assert_eq!(options.genres, vec!["ambient"]);
        assert_eq!(options.keys, vec!["D"]);
    }
}

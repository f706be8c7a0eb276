//! Configuration structures for the extraction pipeline.

use serde::{Deserialize, Serialize};

/// Main configuration for the cardex pipeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CardexConfig {
    /// Upload validation configuration.
    pub input: InputConfig,

    /// Image preprocessing configuration.
    pub preprocess: PreprocessConfig,

    /// Text recognition configuration.
    pub recognizer: RecognizerConfig,

    /// Field extraction configuration.
    pub extraction: ExtractionConfig,
}

/// Upload validation configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Maximum upload size in bytes.
    pub max_file_size: usize,

    /// Accepted MIME types.
    pub allowed_types: Vec<String>,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            max_file_size: 5 * 1024 * 1024,
            allowed_types: vec![
                "image/jpeg".to_string(),
                "image/png".to_string(),
                "image/jpg".to_string(),
            ],
        }
    }
}

/// Image preprocessing configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PreprocessConfig {
    /// Linear contrast multiplier applied per channel.
    pub contrast: f32,

    /// Brightness offset applied per channel.
    pub brightness: f32,

    /// Quality factor used when re-encoding JPEG output (0-100).
    pub jpeg_quality: u8,

    /// Luminance threshold for the binarization pass (0-255).
    pub binarize_threshold: u8,
}

impl Default for PreprocessConfig {
    fn default() -> Self {
        Self {
            contrast: 1.2,
            brightness: 10.0,
            jpeg_quality: 90,
            binarize_threshold: 128,
        }
    }
}

/// Text recognition configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RecognizerConfig {
    /// Language hint passed to the recognition engine, e.g. `eng` or
    /// `eng+ben`.
    pub languages: String,

    /// Whether to try the engine-backed recognizer before the simulated
    /// fallback.
    pub prefer_engine: bool,

    /// Deadline for a single engine call, in milliseconds. On expiry the
    /// pipeline falls back to the simulated recognizer.
    pub engine_timeout_ms: u64,
}

impl Default for RecognizerConfig {
    fn default() -> Self {
        Self {
            languages: "eng".to_string(),
            prefer_engine: true,
            engine_timeout_ms: 15_000,
        }
    }
}

/// Field extraction configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Minimum accepted first-name length.
    pub min_first_name_len: usize,

    /// Minimum accepted ID-number length.
    pub min_id_number_len: usize,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            min_first_name_len: 2,
            min_id_number_len: 5,
        }
    }
}

impl CardexConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> Result<(), std::io::Error> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))?;
        std::fs::write(path, content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_upload_contract() {
        let config = CardexConfig::default();

        assert_eq!(config.input.max_file_size, 5 * 1024 * 1024);
        assert_eq!(config.input.allowed_types.len(), 3);
        assert_eq!(config.preprocess.binarize_threshold, 128);
        assert_eq!(config.extraction.min_id_number_len, 5);
    }

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let config: CardexConfig =
            serde_json::from_str(r#"{"recognizer": {"languages": "eng+ben"}}"#).unwrap();

        assert_eq!(config.recognizer.languages, "eng+ben");
        assert!(config.recognizer.prefer_engine);
        assert_eq!(config.input.max_file_size, 5 * 1024 * 1024);
    }
}

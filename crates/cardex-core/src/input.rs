//! Upload validation for document images.

use tracing::debug;

use crate::error::InputError;
use crate::models::config::InputConfig;
use crate::models::document::DocumentImage;

/// Gate on declared media type and byte size before any processing starts.
pub struct InputValidator {
    config: InputConfig,
}

impl InputValidator {
    /// Create a validator with the default limits (JPEG/PNG, 5 MiB).
    pub fn new() -> Self {
        Self::with_config(InputConfig::default())
    }

    /// Create a validator with explicit limits.
    pub fn with_config(config: InputConfig) -> Self {
        Self { config }
    }

    /// Check the upload against the configured limits.
    ///
    /// The size ceiling applies regardless of the declared media type.
    pub fn validate(&self, image: &DocumentImage<'_>) -> Result<(), InputError> {
        if image.bytes().is_empty() {
            return Err(InputError::Empty);
        }

        if image.byte_size() > self.config.max_file_size {
            return Err(InputError::TooLarge {
                size: image.byte_size(),
                limit: self.config.max_file_size,
            });
        }

        if !self
            .config
            .allowed_types
            .iter()
            .any(|t| t.eq_ignore_ascii_case(image.mime_type()))
        {
            return Err(InputError::UnsupportedFormat(image.mime_type().to_string()));
        }

        debug!(
            "accepted {} upload of {} bytes",
            image.mime_type(),
            image.byte_size()
        );
        Ok(())
    }
}

impl Default for InputValidator {
    fn default() -> Self {
        Self::new()
    }
}

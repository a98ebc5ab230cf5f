//! Decoder configuration types.

/// Field holding the error envelope in management API replies.
pub const DEFAULT_ERROR_FIELD: &str = "error";

/// Configuration for the response decoder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecoderConfig {
    /// Name of the root field holding the error envelope.
    pub error_field: String,
    /// Largest accepted buffer, in bytes. `None` accepts any size.
    pub max_payload_size: Option<usize>,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            error_field: DEFAULT_ERROR_FIELD.to_string(),
            max_payload_size: None,
        }
    }
}

impl DecoderConfig {
    /// Create a new configuration builder.
    #[must_use]
    pub fn builder() -> DecoderConfigBuilder {
        DecoderConfigBuilder::default()
    }
}

/// Builder for [`DecoderConfig`].
#[derive(Debug, Clone, Default)]
pub struct DecoderConfigBuilder {
    error_field: Option<String>,
    max_payload_size: Option<usize>,
}

impl DecoderConfigBuilder {
    /// Set the name of the error envelope field.
    #[must_use]
    pub fn error_field(mut self, field: impl Into<String>) -> Self {
        self.error_field = Some(field.into());
        self
    }

    /// Set the largest accepted buffer, in bytes.
    #[must_use]
    pub const fn max_payload_size(mut self, size: usize) -> Self {
        self.max_payload_size = Some(size);
        self
    }

    /// Build the configuration.
    #[must_use]
    pub fn build(self) -> DecoderConfig {
        let defaults = DecoderConfig::default();
        DecoderConfig {
            error_field: self.error_field.unwrap_or(defaults.error_field),
            max_payload_size: self.max_payload_size.or(defaults.max_payload_size),
        }
    }
}

//! Gateway error types

/// Gateway error types
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    // Request errors
    #[error("unsupported analysis type '{0}' (expected one of: sentiment, classification, keywords)")]
    UnsupportedAnalysisType(String),

    #[error("unsupported language '{0}' (expected one of: fr, mg)")]
    UnsupportedLanguage(String),

    // Provider errors
    /// Provider cannot handle this request (wrong language, model not loaded, etc.)
    /// The registry should try the next provider in the fallback chain.
    #[error("model not available from this provider")]
    ModelNotAvailable,

    #[error("no provider configured for {0}")]
    NoProvider(&'static str),

    #[error("internal processing error: {0}")]
    Internal(String),

    // Configuration errors
    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl GatewayError {
    /// Whether the error was caused by the caller's input.
    ///
    /// Client errors are safe to echo back; everything else is reported
    /// with a fixed message and the cause stays in the logs.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            GatewayError::UnsupportedAnalysisType(_)
                | GatewayError::UnsupportedLanguage(_)
        )
    }
}

/// Result type alias for gateway operations
pub type Result<T> = std::result::Result<T, GatewayError>;

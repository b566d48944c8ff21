use thiserror::Error;

/// Main error type for the trip planner
#[derive(Error, Debug)]
pub enum PlannerError {
    #[error("Configuration error: {0}")]
    Config(String),

    /// Client input that failed validation; the message is shown to the user verbatim.
    #[error("{0}")]
    Validation(String),

    #[error("HTTP request failed: {0}")]
    Http(String),

    #[error("API error: {0}")]
    Api(String),

    #[error("No response received from API")]
    EmptyResponse,

    #[error("Error generating recommendations: {0}")]
    Generation(#[source] Box<PlannerError>),

    /// The rendered export could not be turned into a response.
    #[error("Export error: {0}")]
    Export(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, PlannerError>;

impl PlannerError {
    /// Wrap a failure raised while producing a travel plan.
    pub fn generation(cause: PlannerError) -> Self {
        PlannerError::Generation(Box::new(cause))
    }

    /// True when the caller sent something we refuse to process.
    pub fn is_client_error(&self) -> bool {
        matches!(self, PlannerError::Validation(_))
    }

    /// Get the error code used in logs
    pub fn error_code(&self) -> &'static str {
        match self {
            PlannerError::Config(_) => "CONFIG_ERROR",
            PlannerError::Validation(_) => "VALIDATION_ERROR",
            PlannerError::Http(_) => "HTTP_ERROR",
            PlannerError::Api(_) => "API_ERROR",
            PlannerError::EmptyResponse => "EMPTY_RESPONSE",
            PlannerError::Generation(_) => "GENERATION_ERROR",
            PlannerError::Export(_) => "EXPORT_ERROR",
            PlannerError::Io(_) => "IO_ERROR",
        }
    }
}

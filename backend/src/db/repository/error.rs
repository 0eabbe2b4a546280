//! Error types for dataset repository operations.
//!
//! Every failure to obtain or decode a dataset surfaces as a [`RepositoryError`] carrying an
//! [`ErrorContext`] that names the dataset and the operation that failed.

use std::fmt;

/// Result type for repository operations
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Structured context for repository errors.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// The operation being performed (e.g., "fetch_venues")
    pub operation: Option<String>,
    /// The dataset involved ("venues" or "artists")
    pub dataset: Option<String>,
    /// Where the data came from (URL or file path)
    pub source: Option<String>,
    /// Additional details about the error
    pub details: Option<String>,
    /// Whether this error is retryable
    pub retryable: bool,
}

impl ErrorContext {
    /// Create a new error context with an operation name.
    pub fn new(operation: impl Into<String>) -> Self {
        Self {
            operation: Some(operation.into()),
            ..Default::default()
        }
    }

    pub fn with_dataset(mut self, dataset: impl Into<String>) -> Self {
        self.dataset = Some(dataset.into());
        self
    }

    pub fn with_source(mut self, source: impl ToString) -> Self {
        self.source = Some(source.to_string());
        self
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Mark this error as retryable.
    pub fn retryable(mut self) -> Self {
        self.retryable = true;
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();
        if let Some(ref op) = self.operation {
            parts.push(format!("operation={}", op));
        }
        if let Some(ref dataset) = self.dataset {
            parts.push(format!("dataset={}", dataset));
        }
        if let Some(ref source) = self.source {
            parts.push(format!("source={}", source));
        }
        if let Some(ref details) = self.details {
            parts.push(format!("details={}", details));
        }
        if self.retryable {
            parts.push("retryable=true".to_string());
        }
        write!(f, "[{}]", parts.join(", "))
    }
}

/// Error type for repository operations
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    /// The remote resource could not be reached or answered with an error status.
    #[error("Connection error: {message} {context}")]
    ConnectionError {
        message: String,
        context: ErrorContext,
    },

    /// The request did not complete within the configured timeout.
    #[error("Timeout error: {message} {context}")]
    TimeoutError {
        message: String,
        context: ErrorContext,
    },

    /// The resource was fetched but is not a usable CSV table.
    #[error("Malformed data: {message} {context}")]
    MalformedData {
        message: String,
        context: ErrorContext,
    },

    /// Configuration or initialization error.
    #[error("Configuration error: {message} {context}")]
    ConfigurationError {
        message: String,
        context: ErrorContext,
    },
}

impl RepositoryError {
    pub fn connection(message: impl Into<String>) -> Self {
        Self::ConnectionError {
            message: message.into(),
            context: ErrorContext::default().retryable(),
        }
    }

    pub fn connection_with_context(message: impl Into<String>, context: ErrorContext) -> Self {
        Self::ConnectionError {
            message: message.into(),
            context: context.retryable(),
        }
    }

    pub fn timeout_with_context(message: impl Into<String>, context: ErrorContext) -> Self {
        Self::TimeoutError {
            message: message.into(),
            context: context.retryable(),
        }
    }

    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedData {
            message: message.into(),
            context: ErrorContext::default(),
        }
    }

    pub fn malformed_with_context(message: impl Into<String>, context: ErrorContext) -> Self {
        Self::MalformedData {
            message: message.into(),
            context,
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::ConfigurationError {
            message: message.into(),
            context: ErrorContext::default(),
        }
    }

    /// Check if this error is retryable.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::ConnectionError { context, .. } => context.retryable,
            Self::TimeoutError { context, .. } => context.retryable,
            _ => false,
        }
    }

    /// Whether the dataset itself could not be obtained or decoded, as opposed to a
    /// misconfiguration of this process.
    pub fn is_data_fetch(&self) -> bool {
        matches!(
            self,
            Self::ConnectionError { .. } | Self::TimeoutError { .. } | Self::MalformedData { .. }
        )
    }

    /// Get the error context.
    pub fn context(&self) -> &ErrorContext {
        match self {
            Self::ConnectionError { context, .. }
            | Self::TimeoutError { context, .. }
            | Self::MalformedData { context, .. }
            | Self::ConfigurationError { context, .. } => context,
        }
    }

    /// Add or update the operation and dataset in the error context.
    pub fn within(mut self, operation: &str, dataset: &str) -> Self {
        match &mut self {
            Self::ConnectionError { context, .. }
            | Self::TimeoutError { context, .. }
            | Self::MalformedData { context, .. }
            | Self::ConfigurationError { context, .. } => {
                context.operation = Some(operation.to_string());
                context.dataset = Some(dataset.to_string());
            }
        }
        self
    }
}

impl From<csv::Error> for RepositoryError {
    fn from(err: csv::Error) -> Self {
        let details = err
            .position()
            .map(|pos| format!("line={}", pos.line()))
            .unwrap_or_else(|| "line=unknown".to_string());
        RepositoryError::malformed_with_context(
            err.to_string(),
            ErrorContext::default().with_details(details),
        )
    }
}

#[cfg(feature = "remote-repo")]
impl From<reqwest::Error> for RepositoryError {
    fn from(err: reqwest::Error) -> Self {
        let mut context = ErrorContext::default();
        if let Some(url) = err.url() {
            context = context.with_source(url);
        }
        if let Some(status) = err.status() {
            context = context.with_details(format!("status={}", status));
        }

        if err.is_timeout() {
            RepositoryError::timeout_with_context(err.to_string(), context)
        } else if err.is_decode() {
            RepositoryError::malformed_with_context(err.to_string(), context)
        } else {
            RepositoryError::connection_with_context(err.to_string(), context)
        }
    }
}

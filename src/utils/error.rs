use thiserror::Error;

#[derive(Error, Debug)]
pub enum CartError {
    #[error("Price list is empty")]
    EmptyPriceList,

    #[error("Factorial of {n} does not fit in u128")]
    FactorialOverflow { n: u32 },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Calculation,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    /// Process exit code for a run that failed with this severity.
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorSeverity::High => 1,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::Critical => 3,
        }
    }
}

impl CartError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            CartError::EmptyPriceList | CartError::FactorialOverflow { .. } => {
                ErrorCategory::Calculation
            }
            CartError::ConfigValidationError { .. } | CartError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            CartError::IoError(_) | CartError::SerializationError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Calculation => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            CartError::EmptyPriceList => "The cart has no items to total".to_string(),
            CartError::FactorialOverflow { n } => {
                format!("The cart has too many items ({}) to compute a factorial", n)
            }
            CartError::IoError(e) => format!("Could not read or write a file: {}", e),
            CartError::SerializationError(e) => format!("Could not produce JSON output: {}", e),
            CartError::ConfigValidationError { field, message } => {
                format!("Configuration problem in '{}': {}", field, message)
            }
            CartError::InvalidConfigValueError {
                field,
                value,
                reason,
            } => format!("'{}' is not a valid {}: {}", value, field, reason),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            CartError::EmptyPriceList => "Add at least one price with --prices or in the cart file",
            CartError::FactorialOverflow { .. } => "Use a cart with 34 items or fewer",
            CartError::IoError(_) => "Check that the cart file exists and is readable",
            CartError::SerializationError(_) => "Retry with --format text",
            CartError::ConfigValidationError { .. } => {
                "Check the cart file is valid TOML with a [cart] section"
            }
            CartError::InvalidConfigValueError { .. } => {
                "Rates must be between 0 and 1 and prices must be non-negative"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, CartError>;

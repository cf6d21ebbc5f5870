//! Configuration errors
//!
//! Everything that stops a generation before a request is sent ends up here:
//! unreadable or malformed files, unset environment variables and settings
//! that fail validation.

use std::fmt;
use thiserror::Error;

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Cannot access '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed settings in '{path}'{}: {message}", location(.line, .column))]
    Parse {
        path: String,
        line: Option<usize>,
        column: Option<usize>,
        message: String,
    },

    #[error("Invalid settings: {0}")]
    Invalid(#[from] ValidationError),

    #[error("Environment variable '{var}' is referenced but not set")]
    MissingEnvVar { var: String },
}

fn location(line: &Option<usize>, column: &Option<usize>) -> String {
    match (*line, *column) {
        (Some(line), Some(column)) => format!(" (line {}, column {})", line, column),
        (Some(line), None) => format!(" (line {})", line),
        _ => String::new(),
    }
}

/// A settings field that failed validation
#[derive(Debug, Error)]
pub struct ValidationError {
    /// Dotted path of the offending field, e.g. `base_url` or `base_urls.google`
    pub field_path: String,
    pub kind: ValidationErrorKind,
    /// Hint for the user, shown in parentheses
    pub context: Option<String>,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field_path, self.kind)?;
        if let Some(ctx) = &self.context {
            write!(f, " ({})", ctx)?;
        }
        Ok(())
    }
}

#[derive(Debug, Error)]
pub enum ValidationErrorKind {
    #[error("is required")]
    Required,

    #[error("expected {expected}, got '{actual}'")]
    InvalidValue { expected: String, actual: String },

    #[error("must be greater than 0")]
    NotPositive,

    /// Message length bounds with `min >= max`
    #[error("minimum length {min} must be less than maximum length {max}")]
    LengthBounds { min: u32, max: u32 },

    #[error("invalid URL: {message}")]
    InvalidUrl { message: String },

    #[error("unresolved environment placeholder {placeholder}")]
    UnresolvedPlaceholder { placeholder: String },
}

impl ValidationError {
    fn new(field_path: impl Into<String>, kind: ValidationErrorKind) -> Self {
        Self {
            field_path: field_path.into(),
            kind,
            context: None,
        }
    }

    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    pub fn required(field_path: impl Into<String>) -> Self {
        Self::new(field_path, ValidationErrorKind::Required)
    }

    pub fn invalid_value(
        field_path: impl Into<String>,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        Self::new(
            field_path,
            ValidationErrorKind::InvalidValue {
                expected: expected.into(),
                actual: actual.into(),
            },
        )
    }

    pub fn not_positive(field_path: impl Into<String>) -> Self {
        Self::new(field_path, ValidationErrorKind::NotPositive)
    }

    /// Check `0 < min < max` for a pair of message length bounds
    pub fn check_length_bounds(min: u32, max: u32) -> Result<(), Self> {
        if min == 0 {
            return Err(Self::not_positive("min_length"));
        }
        if min >= max {
            return Err(Self::new(
                "min_length",
                ValidationErrorKind::LengthBounds { min, max },
            ));
        }
        Ok(())
    }

    pub fn invalid_url(field_path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(
            field_path,
            ValidationErrorKind::InvalidUrl {
                message: message.into(),
            },
        )
    }

    pub fn unresolved_placeholder(field_path: impl Into<String>, placeholder: String) -> Self {
        Self::new(
            field_path,
            ValidationErrorKind::UnresolvedPlaceholder { placeholder },
        )
    }
}

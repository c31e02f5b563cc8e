//! Argument validation errors.
//!
//! Messages name the offending field and, where possible, how to fix it, so an
//! MCP client (usually a model) can correct the call on its own.

use std::fmt;

/// Validation error for a single argument.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Path of the argument, e.g. `textOptions.amount` or `folderIds[1]`
    pub field: String,
    pub message: String,
    pub suggestion: Option<String>,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            suggestion: None,
        }
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    pub fn missing(field: &str) -> Self {
        Self::new(field, "is required").with_suggestion(format!("Provide a value for '{field}'"))
    }

    pub fn empty(field: &str) -> Self {
        Self::new(field, "must not be empty")
    }

    pub fn wrong_type(field: &str, expected: &str) -> Self {
        Self::new(field, format!("must be of type {expected}"))
    }

    pub fn not_allowed(field: &str, value: &str, allowed: &[String]) -> Self {
        Self::new(field, format!("'{value}' is not an allowed value"))
            .with_suggestion(format!("Use one of: {}", allowed.join(", ")))
    }

    pub fn below_minimum(field: &str, minimum: f64) -> Self {
        Self::new(field, format!("must be at least {minimum}"))
    }

    pub fn above_maximum(field: &str, maximum: f64) -> Self {
        Self::new(field, format!("must be at most {maximum}"))
    }

    pub fn too_short(field: &str, min_length: u64) -> Self {
        Self::new(field, format!("must be at least {min_length} characters long"))
    }

    pub fn too_long(field: &str, max_length: u64) -> Self {
        Self::new(field, format!("must be at most {max_length} characters long"))
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.field, self.message)?;
        if let Some(ref suggestion) = self.suggestion {
            write!(f, ". {}", suggestion)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

/// Collection of validation errors with formatted output.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationErrors {
    errors: Vec<ValidationError>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self { errors: Vec::new() }
    }

    pub fn add(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ValidationError> {
        self.errors.iter()
    }

    /// Ok if no errors were collected.
    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }

    /// Formatted message suitable for an MCP error result.
    pub fn to_mcp_message(&self) -> String {
        if self.errors.is_empty() {
            return String::new();
        }

        let mut parts = vec![format!(
            "Invalid arguments: {} problem(s) found",
            self.errors.len()
        )];
        for (i, error) in self.errors.iter().enumerate() {
            parts.push(format!("{}. {}", i + 1, error));
        }
        parts.join("\n")
    }
}

impl From<ValidationError> for ValidationErrors {
    fn from(error: ValidationError) -> Self {
        Self {
            errors: vec![error],
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_mcp_message())
    }
}

impl std::error::Error for ValidationErrors {}

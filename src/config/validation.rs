//! Configuration validation for api-compat.
//!
//! Provides validation traits and implementations for all configuration types.

use super::types::{AppConfig, BehaviorConfig, DiffConfig, FilterConfig, OutputConfig};
use crate::analysis::RiskPolicy;
use crate::diff::EngineConfig;
use crate::model::Severity;
use thiserror::Error;

// ============================================================================
// Configuration Error
// ============================================================================

/// Error type for configuration validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {message}")]
pub struct ConfigError {
    /// The field that failed validation
    pub field: String,
    /// Description of the validation error
    pub message: String,
}

impl ConfigError {
    fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

// ============================================================================
// Validation Trait
// ============================================================================

/// Trait for validatable configuration types.
pub trait Validatable {
    /// Validate the configuration, returning any errors found.
    fn validate(&self) -> Vec<ConfigError>;

    /// Check if the configuration is valid.
    fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

// ============================================================================
// Validation Implementations
// ============================================================================

impl Validatable for AppConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        errors.extend(self.filtering.validate());
        errors.extend(self.output.validate());
        errors.extend(self.behavior.validate());
        errors.extend(self.engine.validate());
        errors.extend(self.scoring.validate());
        errors
    }
}

impl Validatable for FilterConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        if let Some(ref severity) = self.min_severity {
            if Severity::parse(severity).is_none() {
                let valid: Vec<String> = Severity::all()
                    .iter()
                    .map(|s| s.as_str().to_lowercase())
                    .collect();
                errors.push(ConfigError::new(
                    "filtering.min_severity",
                    format!(
                        "Invalid severity '{}'. Valid options: {}",
                        severity,
                        valid.join(", ")
                    ),
                ));
            }
        }
        errors
    }
}

impl Validatable for OutputConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        if let Some(ref file_path) = self.file {
            if let Some(parent) = file_path.parent() {
                if !parent.as_os_str().is_empty() && !parent.exists() {
                    errors.push(ConfigError::new(
                        "output.file",
                        format!("Parent directory does not exist: {}", parent.display()),
                    ));
                }
            }
        }

        if self.max_items == Some(0) {
            errors.push(ConfigError::new(
                "output.max_items",
                "max_items must be at least 1 (omit it for no limit)",
            ));
        }

        errors
    }
}

impl Validatable for BehaviorConfig {
    fn validate(&self) -> Vec<ConfigError> {
        // All combinations of the flags are meaningful
        Vec::new()
    }
}

impl Validatable for EngineConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        if self.parallel_threshold == 0 {
            errors.push(ConfigError::new(
                "engine.parallel_threshold",
                "parallel_threshold must be greater than 0",
            ));
        }
        errors
    }
}

impl Validatable for RiskPolicy {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        let bands = [
            ("scoring.low_max", self.low_max),
            ("scoring.medium_max", self.medium_max),
            ("scoring.high_max", self.high_max),
        ];
        for (field, value) in bands {
            if value > 100 {
                errors.push(ConfigError::new(
                    field,
                    format!("Band bound must be within 0..=100, got {value}"),
                ));
            }
        }
        if !(self.low_max < self.medium_max && self.medium_max < self.high_max) {
            errors.push(ConfigError::new(
                "scoring",
                format!(
                    "Band bounds must increase: low_max ({}) < medium_max ({}) < high_max ({})",
                    self.low_max, self.medium_max, self.high_max
                ),
            ));
        }
        errors
    }
}

impl Validatable for DiffConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        for (field, path) in [("paths.old", &self.paths.old), ("paths.new", &self.paths.new)] {
            if !path.exists() {
                errors.push(ConfigError::new(
                    field,
                    format!("File not found: {}", path.display()),
                ));
            }
        }

        errors.extend(self.output.validate());
        errors.extend(self.filtering.validate());
        errors.extend(self.behavior.validate());
        errors.extend(self.engine.validate());
        errors.extend(self.scoring.validate());
        errors
    }
}

// ============================================================================
// Tests
// ============================================================================

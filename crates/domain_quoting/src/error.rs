//! Quoting domain errors
//!
//! This module defines all error types that can occur while building
//! a recommendation or pricing a quote.

use thiserror::Error;

use core_kernel::MoneyError;

use crate::plan::PlanCode;

/// Errors that can occur in the quoting domain
#[derive(Debug, Error)]
pub enum QuoteError {
    /// Request input failed validation
    #[error("Validation error: {0}")]
    Validation(String),

    /// Age exceeds the plan's entry ceiling and no continuity applies
    #[error("Plan {plan} is not available at age {age} without continuity (limit is {max_age})")]
    Ineligible {
        plan: PlanCode,
        age: u8,
        max_age: u8,
    },

    /// The injected tables are unusable: missing plan column, duplicate
    /// band rows, or an exhausted fallback list
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The loading collaborator handed over malformed table data
    #[error("Data source error: {0}")]
    DataSource(String),

    /// Monetary arithmetic error
    #[error("Money error: {0}")]
    Money(#[from] MoneyError),
}

impl QuoteError {
    /// Creates a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        QuoteError::Validation(message.into())
    }

    /// Creates a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        QuoteError::Configuration(message.into())
    }

    /// Creates a data source error
    pub fn data_source(message: impl Into<String>) -> Self {
        QuoteError::DataSource(message.into())
    }
}

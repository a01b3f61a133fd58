//! Error types for input normalization and profile assembly.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors raised at the normalization boundary. The engines downstream
/// assume valid instants and never revalidate.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ProfileError {
    /// Birth date string does not parse as YYYY-MM-DD or names no real day.
    InvalidDate(String),
    /// Birth time string does not parse as HH:MM.
    InvalidTime(String),
    /// UTC offset in minutes falls outside the representable range.
    InvalidOffset(i32),
    /// Result could not be rendered to structured data.
    Serialization(String),
}

impl Display for ProfileError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDate(s) => write!(f, "invalid birth date: {s}"),
            Self::InvalidTime(s) => write!(f, "invalid birth time: {s}"),
            Self::InvalidOffset(minutes) => write!(f, "invalid UTC offset: {minutes} minutes"),
            Self::Serialization(msg) => write!(f, "serialization failure: {msg}"),
        }
    }
}

impl Error for ProfileError {}

impl From<serde_json::Error> for ProfileError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serialization(e.to_string())
    }
}

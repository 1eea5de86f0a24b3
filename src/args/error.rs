//! Error types for argument processing.
//!
//! User input errors abort the whole pass. Everything else is a wiring
//! defect between the registry, the compiled command and the model.

use std::num::ParseIntError;

use thiserror::Error;

use crate::args::registry::OptionArity;
use crate::config::{KindMismatch, ValueKind};

/// Errors that can occur while turning arguments into configuration.
#[derive(Debug, Error)]
pub enum CliError {
    /// An integer option received a value that does not parse.
    #[error("Unexpected value for argument {option}:{value}. Expected type to be integer")]
    InvalidArgumentValue {
        option: String,
        value: String,
        #[source]
        source: ParseIntError,
    },

    /// A present option has no registry entry.
    #[error("Option '--{option}' is not registered")]
    UnknownOption { option: String },

    /// A slot was written with a value of the wrong kind.
    #[error(transparent)]
    KindMismatch(#[from] KindMismatch),

    /// No assignment strategy exists for this arity and slot kind.
    #[error("Option '--{option}' declares {arity:?} arity, which cannot populate a {kind} slot")]
    UnsupportedArity {
        option: String,
        arity: OptionArity,
        kind: ValueKind,
    },

    /// A single-value option reached dispatch without a value.
    #[error("Option '--{option}' was reported present without a value")]
    MissingValue { option: String },

    /// An optional-value option is missing from the pairing table.
    #[error("Option '--{option}' takes an optional value but has no companion slot")]
    MissingCompanion { option: String },

    /// Syntax error reported by the tokenizer.
    #[error(transparent)]
    Tokenizer(#[from] clap::Error),
}

impl CliError {
    /// True for errors caused by what the user typed, false for defects.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            CliError::InvalidArgumentValue { .. } | CliError::Tokenizer(_)
        )
    }
}

//! Argument handling pipeline.
//!
//! ```text
//! Registry → Compile → Tokenize → Bootstrap → Dispatch (+ Coupling) → ConfigModel
//! ```
//!
//! The registry is the single source of truth: the same specs are compiled
//! into tokenizer flags and consulted again when dispatching values.

mod bootstrap;
mod compiler;
mod coupling;
mod dispatcher;
mod error;
mod pipeline;
mod registry;
mod tokenizer;

pub use bootstrap::{Bootstrap, InitRequest, DEFAULT_CONFIG_FILE};
pub use compiler::{build_command, compile, render_options, to_arg, FlagSyntax};
pub use coupling::CouplingTable;
pub use dispatcher::{assign_single, Dispatcher};
pub use error::CliError;
pub use pipeline::{CliPipeline, ParsedInvocation};
pub use registry::{
    cli_only_options, input_options, option_registry, OptionArity, OptionRegistry, OptionSpec,
    CONFIG_FILE, INIT,
};
pub use tokenizer::{ParsedArgs, PresentOption, Tokenizer};

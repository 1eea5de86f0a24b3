//! Pipeline — ties all argument processing stages together.

use clap::Command;
use serde::Serialize;
use tracing::debug;

use crate::args::bootstrap::Bootstrap;
use crate::args::coupling::CouplingTable;
use crate::args::dispatcher::Dispatcher;
use crate::args::error::CliError;
use crate::args::registry::{option_registry, OptionRegistry};
use crate::args::tokenizer::Tokenizer;
use crate::config::ConfigModel;

/// Everything one invocation resolved from its arguments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedInvocation {
    /// CLI-only options.
    #[serde(flatten)]
    pub bootstrap: Bootstrap,
    /// Populated configuration model.
    #[serde(rename = "inputs")]
    pub model: ConfigModel,
}

/// Registry, pairing table and compiled command for one invocation.
#[derive(Debug, Clone)]
pub struct CliPipeline {
    registry: OptionRegistry,
    coupling: CouplingTable,
    tokenizer: Tokenizer,
}

impl CliPipeline {
    /// The standard option set and pairings.
    pub fn new() -> Self {
        Self::with_parts(option_registry(), CouplingTable::standard())
    }

    /// Compile a custom registry.
    pub fn with_parts(registry: OptionRegistry, coupling: CouplingTable) -> Self {
        let tokenizer = Tokenizer::new(&registry);
        Self {
            registry,
            coupling,
            tokenizer,
        }
    }

    /// The compiled tokenizer command (for help rendering).
    pub fn command(&self) -> &Command {
        self.tokenizer.command()
    }

    /// Tokenize, bootstrap and dispatch `args` (without the binary name).
    ///
    /// # Errors
    ///
    /// Returns `CliError` for:
    /// - Tokenizer syntax errors (including help requests)
    /// - Integer options with non-numeric values
    /// - Wiring defects between registry, pairings and model
    pub fn run<I, T>(&self, args: I) -> Result<ParsedInvocation, CliError>
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        // Stage 1: Tokenize
        let parsed = self.tokenizer.parse(&self.registry, args)?;
        debug!(present = parsed.options.len(), "arguments tokenized");

        // Stage 2: Bootstrap options
        let bootstrap = Bootstrap::from_parsed(&parsed);

        // Stage 3: Dispatch into a fresh model
        let mut model = ConfigModel::new();
        Dispatcher::new(&self.registry, &self.coupling).dispatch(&mut model, &parsed.options)?;
        debug!(supplied = model.supplied().count(), "configuration populated");

        Ok(ParsedInvocation { bootstrap, model })
    }
}

impl Default for CliPipeline {
    fn default() -> Self {
        Self::new()
    }
}

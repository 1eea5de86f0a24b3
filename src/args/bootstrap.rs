//! Bootstrap options — read before the configuration model exists.

use std::path::PathBuf;

use serde::Serialize;

use crate::args::registry::{CONFIG_FILE, INIT};
use crate::args::tokenizer::ParsedArgs;

/// Config file used when `--config-file` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "stryker-config.json";

/// `--init` was given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InitRequest {
    /// Path attached with `--init:<file-path>`, if any.
    pub output_path: Option<PathBuf>,
}

/// Values of the CLI-only options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Bootstrap {
    pub config_file: PathBuf,
    pub init: Option<InitRequest>,
}

impl Bootstrap {
    pub fn from_parsed(parsed: &ParsedArgs) -> Self {
        let config_file = parsed
            .get(CONFIG_FILE)
            .and_then(|o| o.value())
            .unwrap_or(DEFAULT_CONFIG_FILE)
            .into();

        let init = parsed.get(INIT).map(|o| InitRequest {
            output_path: o.value().map(PathBuf::from),
        });

        Self { config_file, init }
    }

    /// Whether a config file should be generated.
    pub fn generate_config_file(&self) -> bool {
        self.init.is_some()
    }
}

impl Default for Bootstrap {
    fn default() -> Self {
        Self::from_parsed(&ParsedArgs::default())
    }
}

use std::io::{self, Write};

use anyhow::Context;
use tracing::{debug, info};

use stryker_cli::args::{CliError, CliPipeline};
use stryker_cli::logging::init_tracing;

fn main() -> anyhow::Result<()> {
    init_tracing();

    let pipeline = CliPipeline::new();
    let invocation = match pipeline.run(std::env::args().skip(1)) {
        Ok(invocation) => invocation,
        // Help and syntax errors are rendered by the tokenizer itself.
        Err(CliError::Tokenizer(err)) => err.exit(),
        Err(err) => return Err(err.into()),
    };

    debug!(config_file = %invocation.bootstrap.config_file.display(), "bootstrap resolved");
    if invocation.bootstrap.generate_config_file() {
        info!("config file generation requested");
    }

    let snapshot =
        serde_json::to_string_pretty(&invocation).context("failed to serialize configuration")?;
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{snapshot}")?;
    Ok(())
}

//! Tokenizer adapter — raw args → present options with raw values.
//!
//! Wraps the compiled `clap` command so the rest of the pipeline only sees
//! long names and strings.

use clap::parser::ValueSource;
use clap::{ArgMatches, Command};

use crate::args::compiler::build_command;
use crate::args::error::CliError;
use crate::args::registry::{OptionArity, OptionRegistry};

/// An option given on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresentOption {
    /// Canonical long name.
    pub long: String,
    /// Raw values in command-line order. Empty for bare flags.
    pub values: Vec<String>,
}

impl PresentOption {
    pub fn new(long: impl Into<String>, values: Vec<String>) -> Self {
        Self {
            long: long.into(),
            values,
        }
    }

    /// Bare flag, no values.
    pub fn flag(long: impl Into<String>) -> Self {
        Self::new(long, Vec::new())
    }

    /// The single (last) value, if any.
    pub fn value(&self) -> Option<&str> {
        self.values.last().map(String::as_str)
    }
}

/// Result of tokenizing one invocation.
#[derive(Debug, Clone, Default)]
pub struct ParsedArgs {
    /// Present options, ordered by their last occurrence.
    pub options: Vec<PresentOption>,
}

impl ParsedArgs {
    pub fn get(&self, long: &str) -> Option<&PresentOption> {
        self.options.iter().find(|o| o.long == long)
    }

    pub fn is_present(&self, long: &str) -> bool {
        self.get(long).is_some()
    }
}

/// The compiled command plus the names that take a value.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    command: Command,
    valued_longs: Vec<&'static str>,
    valued_shorts: Vec<char>,
}

impl Tokenizer {
    /// Compile every registered spec into one command.
    pub fn new(registry: &OptionRegistry) -> Self {
        let valued: Vec<_> = registry
            .iter()
            .filter(|s| s.arity != OptionArity::NoValue)
            .collect();

        Self {
            command: build_command(registry.iter()),
            valued_longs: valued.iter().map(|s| s.long).collect(),
            valued_shorts: valued.iter().filter_map(|s| s.short).collect(),
        }
    }

    pub fn command(&self) -> &Command {
        &self.command
    }

    /// Rewrite `--name:value` to `--name=value` and `-n:value` to `-n=value`
    /// for options that take a value. Everything else is left alone.
    pub fn normalize<I, T>(&self, args: I) -> Vec<String>
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        args.into_iter()
            .map(|arg| {
                let arg: String = arg.into();
                self.rewrite_colon(&arg).unwrap_or(arg)
            })
            .collect()
    }

    fn rewrite_colon(&self, arg: &str) -> Option<String> {
        if let Some(rest) = arg.strip_prefix("--") {
            let (name, value) = rest.split_once(':')?;
            return self
                .valued_longs
                .iter()
                .any(|long| *long == name)
                .then(|| format!("--{name}={value}"));
        }

        let mut chars = arg.strip_prefix('-')?.chars();
        let short = chars.next()?;
        let value = chars.as_str().strip_prefix(':')?;
        self.valued_shorts
            .contains(&short)
            .then(|| format!("-{short}={value}"))
    }

    /// Tokenize `args` (without the binary name).
    pub fn parse<I, T>(&self, registry: &OptionRegistry, args: I) -> Result<ParsedArgs, CliError>
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let args = self.normalize(args);
        let matches = self.command.clone().try_get_matches_from(args)?;
        Ok(collect_present(registry, &matches))
    }
}

fn collect_present(registry: &OptionRegistry, matches: &ArgMatches) -> ParsedArgs {
    let mut present: Vec<(usize, PresentOption)> = registry
        .iter()
        .filter(|spec| matches.value_source(spec.long) == Some(ValueSource::CommandLine))
        .map(|spec| {
            let values = match spec.arity {
                OptionArity::NoValue => Vec::new(),
                _ => matches
                    .get_many::<String>(spec.long)
                    .map(|values| values.cloned().collect())
                    .unwrap_or_default(),
            };
            let position = matches
                .indices_of(spec.long)
                .and_then(|indices| indices.last())
                .unwrap_or(0);
            (position, PresentOption::new(spec.long, values))
        })
        .collect();

    present.sort_by_key(|(position, _)| *position);

    ParsedArgs {
        options: present.into_iter().map(|(_, option)| option).collect(),
    }
}

//! Option registry — single source of truth for every command-line option.
//!
//! The same table drives flag compilation and value dispatch, so a flag the
//! tokenizer accepts always resolves back to its spec here.

use indexmap::IndexMap;

use crate::args::error::CliError;
use crate::config::SlotId;

/// Long name of the configuration file bootstrap option.
pub const CONFIG_FILE: &str = "config-file";
/// Long name of the config generation bootstrap option.
pub const INIT: &str = "init";

/// How many values an option takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionArity {
    /// Presence-only flag (e.g., --dev-mode).
    NoValue,
    /// Exactly one value (e.g., --concurrency <number>).
    SingleValue,
    /// Any number of values, collected in order (e.g., --reporter <name>...).
    MultipleValue,
    /// Bare, or with one attached value (e.g., --since[:<comittish>]).
    SingleOrNoValue,
}

/// A single option definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionSpec {
    /// Canonical long name, without dashes (e.g., "concurrency").
    pub long: &'static str,
    /// Optional short form (e.g., 'c').
    pub short: Option<char>,
    /// Human-readable description (for help text).
    pub description: &'static str,
    /// Does it take a value?
    pub arity: OptionArity,
    /// Value hint shown in help (e.g., "file-path").
    pub hint: Option<&'static str>,
    /// Slot populated by dispatch. `None` for bootstrap-only options.
    pub slot: Option<SlotId>,
}

impl OptionSpec {
    /// Option backed by a configuration slot. Single-valued unless changed;
    /// the description is the slot's help text.
    pub fn input(slot: SlotId, long: &'static str, short: Option<char>) -> Self {
        Self {
            long,
            short,
            description: slot.help(),
            arity: OptionArity::SingleValue,
            hint: None,
            slot: Some(slot),
        }
    }

    /// Option consumed by the bootstrap phase, with no slot.
    pub fn cli_only(long: &'static str, short: Option<char>, description: &'static str) -> Self {
        Self {
            long,
            short,
            description,
            arity: OptionArity::SingleValue,
            hint: None,
            slot: None,
        }
    }

    pub fn with_arity(mut self, arity: OptionArity) -> Self {
        self.arity = arity;
        self
    }

    pub fn with_hint(mut self, hint: &'static str) -> Self {
        self.hint = Some(hint);
        self
    }

    /// The declared hint, or the long name when none was given.
    pub fn value_hint(&self) -> &'static str {
        self.hint.unwrap_or(self.long)
    }

    /// Whether dispatch skips this option.
    pub fn is_cli_only(&self) -> bool {
        self.slot.is_none()
    }
}

/// Options keyed by long name, in registration order.
#[derive(Debug, Clone, Default)]
pub struct OptionRegistry {
    specs: IndexMap<&'static str, OptionSpec>,
}

impl OptionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert by long name. A spec with the same name is replaced whole and
    /// returned; it keeps its original position.
    pub fn register(&mut self, spec: OptionSpec) -> Option<OptionSpec> {
        self.specs.insert(spec.long, spec)
    }

    pub fn lookup(&self, long: &str) -> Result<&OptionSpec, CliError> {
        self.specs.get(long).ok_or_else(|| CliError::UnknownOption {
            option: long.to_string(),
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = &OptionSpec> {
        self.specs.values()
    }
}

impl FromIterator<OptionSpec> for OptionRegistry {
    fn from_iter<I: IntoIterator<Item = OptionSpec>>(iter: I) -> Self {
        let mut registry = Self::new();
        for spec in iter {
            registry.register(spec);
        }
        registry
    }
}

/// Options resolved before the configuration model exists.
pub fn cli_only_options() -> Vec<OptionSpec> {
    vec![
        OptionSpec::cli_only(
            CONFIG_FILE,
            Some('f'),
            "Choose the file containing your configuration relative to current working directory. | default: stryker-config.json",
        )
        .with_hint("file-path"),
        OptionSpec::cli_only(
            INIT,
            None,
            "Generate a config file with selected plus default options where no option is selected.",
        )
        .with_arity(OptionArity::SingleOrNoValue)
        .with_hint("file-path"),
    ]
}

/// Options that populate configuration slots.
pub fn input_options() -> Vec<OptionSpec> {
    use OptionArity::*;

    vec![
        OptionSpec::input(SlotId::DevMode, "dev-mode", None).with_arity(NoValue),
        OptionSpec::input(SlotId::Concurrency, "concurrency", Some('c')).with_hint("number"),
        OptionSpec::input(SlotId::SolutionPath, "solution", Some('s')).with_hint("file-path"),
        OptionSpec::input(SlotId::Reporters, "reporter", Some('r')).with_arity(MultipleValue),
        OptionSpec::input(SlotId::Mutate, "mutate", Some('m'))
            .with_arity(MultipleValue)
            .with_hint("glob-pattern"),
        OptionSpec::input(SlotId::ThresholdBreak, "break-at", Some('b')).with_hint("0-100"),
        OptionSpec::input(SlotId::ProjectUnderTestName, "project", Some('p'))
            .with_hint("project-name.csproj"),
        OptionSpec::input(SlotId::MutationLevel, "mutation-level", Some('l')),
        OptionSpec::input(SlotId::LogToFile, "log-to-file", Some('L')).with_arity(NoValue),
        OptionSpec::input(SlotId::Verbosity, "verbosity", Some('V')),
        OptionSpec::input(SlotId::Since, "since", None)
            .with_arity(SingleOrNoValue)
            .with_hint("comittish"),
        OptionSpec::input(SlotId::WithBaseline, "with-baseline", None)
            .with_arity(SingleOrNoValue)
            .with_hint("comittish"),
        OptionSpec::input(SlotId::DashboardApiKey, "dashboard-api-key", None),
        OptionSpec::input(SlotId::AzureFileStorageSas, "azure-fileshare-sas", None),
        OptionSpec::input(SlotId::ProjectVersion, "version", Some('v')),
    ]
}

/// Build the complete registry: bootstrap options first, then inputs.
pub fn option_registry() -> OptionRegistry {
    cli_only_options()
        .into_iter()
        .chain(input_options())
        .collect()
}

//! Flag compiler — option specs → tokenizer flag definitions.

use std::fmt;

use clap::{Arg, ArgAction, Command};

use crate::args::registry::{OptionArity, OptionSpec};

/// Command-line syntax of one flag, e.g. `-c|--concurrency <number>`.
///
/// This is what the tokenizer is built from and what help displays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlagSyntax {
    pub long: &'static str,
    pub short: Option<char>,
    pub arity: OptionArity,
    pub hint: &'static str,
    pub description: &'static str,
    /// Value hint appended after the names; empty for bare flags.
    pub suffix: String,
}

impl fmt::Display for FlagSyntax {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(short) = self.short {
            write!(f, "-{short}|")?;
        }
        write!(f, "--{}{}", self.long, self.suffix)
    }
}

/// Derive the flag syntax from the declared arity.
pub fn compile(spec: &OptionSpec) -> FlagSyntax {
    let hint = spec.value_hint();
    let suffix = match spec.arity {
        OptionArity::NoValue => String::new(),
        OptionArity::SingleOrNoValue => format!("[:<{hint}>]"),
        OptionArity::SingleValue | OptionArity::MultipleValue => format!(" <{hint}>"),
    };

    FlagSyntax {
        long: spec.long,
        short: spec.short,
        arity: spec.arity,
        hint,
        description: spec.description,
        suffix,
    }
}

/// Build the tokenizer argument for a compiled flag.
///
/// Optional values must be attached (`--since=abc`); the tokenizer adapter
/// rewrites the `--since:abc` form before parsing.
pub fn to_arg(syntax: &FlagSyntax) -> Arg {
    let mut arg = Arg::new(syntax.long)
        .long(syntax.long)
        .help(syntax.description);
    if let Some(short) = syntax.short {
        arg = arg.short(short);
    }

    match syntax.arity {
        OptionArity::NoValue => arg.action(ArgAction::SetTrue),
        OptionArity::SingleValue => arg
            .action(ArgAction::Set)
            .num_args(1)
            .value_name(syntax.hint),
        OptionArity::MultipleValue => arg
            .action(ArgAction::Append)
            .num_args(1..)
            .value_name(syntax.hint),
        OptionArity::SingleOrNoValue => arg
            .action(ArgAction::Set)
            .num_args(0..=1)
            .require_equals(true)
            .value_name(syntax.hint),
    }
}

/// Options section of the help output, one compiled flag per line.
pub fn render_options(syntaxes: &[FlagSyntax]) -> String {
    let help = FlagSyntax {
        long: "help",
        short: Some('h'),
        arity: OptionArity::NoValue,
        hint: "help",
        description: "Print help",
        suffix: String::new(),
    };
    let lines: Vec<(String, &str)> = syntaxes
        .iter()
        .chain(std::iter::once(&help))
        .map(|s| (s.to_string(), s.description))
        .collect();
    let width = lines.iter().map(|(flag, _)| flag.len()).max().unwrap_or(0);

    lines
        .iter()
        .map(|(flag, description)| format!("  {flag:<width$}  {description}\n"))
        .collect()
}

/// Compile every spec and register it on a fresh command. Arguments are
/// parsed without a leading binary name.
pub fn build_command<'a>(specs: impl IntoIterator<Item = &'a OptionSpec>) -> Command {
    let syntaxes: Vec<FlagSyntax> = specs.into_iter().map(compile).collect();
    let template = format!(
        "{{about-with-newline}}\n{{usage-heading}} {{usage}}\n\nOptions:\n{}",
        render_options(&syntaxes)
    );

    Command::new("stryker")
        .about("Mutation testing for your projects")
        .no_binary_name(true)
        .disable_version_flag(true)
        .help_template(template)
        .args(syntaxes.iter().map(to_arg))
}

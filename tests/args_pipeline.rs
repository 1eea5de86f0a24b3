//! Integration tests for the args pipeline module.

use stryker_cli::args::{
    compile, option_registry, CliError, CliPipeline, CouplingTable, OptionArity, OptionRegistry,
    OptionSpec, Tokenizer, DEFAULT_CONFIG_FILE,
};
use stryker_cli::config::{ConfigModel, SlotId, ValueKind};

fn run(args: &[&str]) -> Result<stryker_cli::args::ParsedInvocation, CliError> {
    CliPipeline::new().run(args.iter().copied())
}

fn model(args: &[&str]) -> ConfigModel {
    run(args).expect("arguments should dispatch").model
}

// =============================================================================
// NO VALUE
// =============================================================================

#[test]
fn no_value_flag_present_sets_presence() {
    let m = model(&["--dev-mode", "-L"]);
    assert!(m.slot(SlotId::DevMode).is_supplied());
    assert!(m.slot(SlotId::DevMode).bool());
    assert!(m.slot(SlotId::LogToFile).bool());
}

#[test]
fn no_value_flag_absent_stays_unsupplied() {
    let m = model(&["--log-to-file"]);
    assert!(!m.slot(SlotId::DevMode).is_supplied());
    assert!(!m.slot(SlotId::DevMode).bool());
}

// =============================================================================
// MULTIPLE VALUE
// =============================================================================

#[test]
fn multiple_values_keep_order() {
    let m = model(&["-r", "html", "-r", "json", "-r", "progress"]);
    assert_eq!(m.slot(SlotId::Reporters).list(), ["html", "json", "progress"]);
    assert!(m.slot(SlotId::Reporters).is_supplied());
}

#[test]
fn multiple_values_in_one_occurrence() {
    let m = model(&["--mutate", "**/*.cs", "!**/Generated/*.cs"]);
    assert_eq!(m.slot(SlotId::Mutate).list(), ["**/*.cs", "!**/Generated/*.cs"]);
}

// =============================================================================
// SINGLE VALUE
// =============================================================================

#[test]
fn integer_value_is_coerced() {
    let m = model(&["--concurrency", "42"]);
    assert_eq!(m.slot(SlotId::Concurrency).int(), Some(42));
    assert!(m.slot(SlotId::Concurrency).is_supplied());
}

#[test]
fn negative_integer_with_equals() {
    let m = model(&["--break-at=-1"]);
    assert_eq!(m.slot(SlotId::ThresholdBreak).int(), Some(-1));
}

#[test]
fn non_numeric_integer_aborts_whole_pass() {
    let err = run(&["--dev-mode", "-c", "abc", "--verbosity", "debug"]).unwrap_err();
    match err {
        CliError::InvalidArgumentValue { option, value, .. } => {
            assert_eq!(option, "concurrency");
            assert_eq!(value, "abc");
        }
        other => panic!("Expected InvalidArgumentValue, got {other:?}"),
    }
}

#[test]
fn string_values_by_short_name() {
    let m = model(&["-s", "App.sln", "-p", "App.csproj", "-l", "Complete", "-V", "trace", "-v", "1.2.3"]);
    assert_eq!(m.slot(SlotId::SolutionPath).string(), Some("App.sln"));
    assert_eq!(m.slot(SlotId::ProjectUnderTestName).string(), Some("App.csproj"));
    assert_eq!(m.slot(SlotId::MutationLevel).string(), Some("Complete"));
    assert_eq!(m.slot(SlotId::Verbosity).string(), Some("trace"));
    assert_eq!(m.slot(SlotId::ProjectVersion).string(), Some("1.2.3"));
}

#[test]
fn long_only_string_options() {
    let m = model(&["--dashboard-api-key", "secret", "--azure-fileshare-sas", "sv=2020"]);
    assert_eq!(m.slot(SlotId::DashboardApiKey).string(), Some("secret"));
    assert_eq!(m.slot(SlotId::AzureFileStorageSas).string(), Some("sv=2020"));
}

// =============================================================================
// COUPLING
// =============================================================================

#[test]
fn bare_since_leaves_target_unsupplied() {
    let m = model(&["--since"]);
    assert!(m.slot(SlotId::Since).bool());
    assert!(!m.slot(SlotId::SinceTarget).is_supplied());
}

#[test]
fn since_with_attached_commitish() {
    let m = model(&["--since:abc123"]);
    assert!(m.slot(SlotId::Since).bool());
    assert_eq!(m.slot(SlotId::SinceTarget).string(), Some("abc123"));
    assert!(m.slot(SlotId::SinceTarget).is_supplied());
}

#[test]
fn since_with_empty_attached_value_supplies_empty_target() {
    let m = model(&["--since:"]);
    assert!(m.slot(SlotId::Since).bool());
    assert!(m.slot(SlotId::SinceTarget).is_supplied());
    assert_eq!(m.slot(SlotId::SinceTarget).string(), Some(""));
}

#[test]
fn with_baseline_populates_provider() {
    let m = model(&["--with-baseline:origin/main"]);
    assert!(m.slot(SlotId::WithBaseline).bool());
    assert_eq!(m.slot(SlotId::BaselineProvider).string(), Some("origin/main"));
}

#[test]
fn shared_companion_follows_command_line_order() {
    let coupling = CouplingTable::new()
        .pair("since", SlotId::SinceTarget)
        .pair("with-baseline", SlotId::SinceTarget);
    let pipeline = CliPipeline::with_parts(option_registry(), coupling);

    let m = pipeline
        .run(["--with-baseline:first", "--since:second"])
        .unwrap()
        .model;
    assert_eq!(m.slot(SlotId::SinceTarget).string(), Some("second"));

    let m = pipeline
        .run(["--since:first", "--with-baseline:second"])
        .unwrap()
        .model;
    assert_eq!(m.slot(SlotId::SinceTarget).string(), Some("second"));
}

// =============================================================================
// BOOTSTRAP
// =============================================================================

#[test]
fn bootstrap_defaults() {
    let invocation = run(&[]).unwrap();
    assert_eq!(invocation.bootstrap.config_file.to_str(), Some(DEFAULT_CONFIG_FILE));
    assert!(!invocation.bootstrap.generate_config_file());
}

#[test]
fn bootstrap_options_do_not_touch_model() {
    let invocation = run(&["-f", "ci-config.json", "--init:out.json"]).unwrap();
    assert_eq!(invocation.bootstrap.config_file.to_str(), Some("ci-config.json"));
    assert_eq!(
        invocation
            .bootstrap
            .init
            .and_then(|i| i.output_path)
            .and_then(|p| p.to_str().map(String::from)),
        Some("out.json".to_string())
    );
    assert_eq!(invocation.model.supplied().count(), 0);
}

// =============================================================================
// REGISTRY / COMPILER
// =============================================================================

#[test]
fn reregistered_option_replaces_previous_spec() {
    let mut registry = option_registry();
    registry.register(
        OptionSpec::input(SlotId::Reporters, "verbosity", None).with_arity(OptionArity::MultipleValue),
    );
    let pipeline = CliPipeline::with_parts(registry, CouplingTable::standard());

    let m = pipeline.run(["--verbosity", "a", "b"]).unwrap().model;
    assert_eq!(m.slot(SlotId::Reporters).list(), ["a", "b"]);
    assert!(!m.slot(SlotId::Verbosity).is_supplied());
    assert!(pipeline.run(["-V", "info"]).is_err());
}

#[test]
fn every_compiled_flag_round_trips_through_tokenizer() {
    let registry = option_registry();
    let tokenizer = Tokenizer::new(&registry);

    for spec in registry.iter() {
        let syntax = compile(spec);
        let flag = format!("--{}", syntax.long);
        let args: Vec<String> = match spec.arity {
            OptionArity::NoValue => vec![flag],
            OptionArity::SingleValue | OptionArity::MultipleValue => vec![flag, "1".into()],
            OptionArity::SingleOrNoValue => vec![format!("{flag}:1")],
        };

        let parsed = tokenizer
            .parse(&registry, args)
            .unwrap_or_else(|e| panic!("{syntax} failed to parse: {e}"));
        assert!(parsed.is_present(spec.long), "{syntax} not reported present");
    }
}

#[test]
fn custom_registry_dispatches_by_kind() {
    let registry: OptionRegistry = [
        OptionSpec::input(SlotId::ThresholdHigh, "high", None),
        OptionSpec::input(SlotId::TestProjects, "test-project", Some('t'))
            .with_arity(OptionArity::MultipleValue),
    ]
    .into_iter()
    .collect();
    let pipeline = CliPipeline::with_parts(registry, CouplingTable::new());

    let m = pipeline.run(["--high", "80", "-t", "A.csproj", "-t", "B.csproj"]).unwrap().model;
    assert_eq!(m.slot(SlotId::ThresholdHigh).int(), Some(80));
    assert_eq!(m.slot(SlotId::TestProjects).list(), ["A.csproj", "B.csproj"]);
}

// =============================================================================
// DEFAULTS
// =============================================================================

#[test]
fn unsupplied_slots_report_defaults() {
    let m = model(&["--dev-mode", "-c", "3", "-r", "html", "--since:main"]);
    let touched = [
        SlotId::DevMode,
        SlotId::Concurrency,
        SlotId::Reporters,
        SlotId::Since,
        SlotId::SinceTarget,
    ];

    for slot in m.iter().filter(|s| !touched.contains(&s.id())) {
        assert!(!slot.is_supplied(), "{} reported supplied", slot.id());
        match slot.kind() {
            ValueKind::Bool => assert!(!slot.bool()),
            ValueKind::String => assert_eq!(slot.string(), None),
            ValueKind::Int => assert_eq!(slot.int(), None),
            ValueKind::StringList => assert!(slot.list().is_empty()),
        }
    }
}

#[test]
fn help_is_reported_as_tokenizer_error() {
    let err = run(&["--help"]).unwrap_err();
    match err {
        CliError::Tokenizer(e) => {
            assert_eq!(e.kind(), clap::error::ErrorKind::DisplayHelp);
            let rendered = e.to_string();
            assert!(rendered.contains("--concurrency <number>"));
            assert!(rendered.contains(SlotId::Concurrency.help()));
        }
        other => panic!("Expected Tokenizer error, got {other:?}"),
    }
}

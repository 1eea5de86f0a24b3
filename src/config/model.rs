//! The configuration model: every input the tool understands, one slot each.

use std::fmt;

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::config::slot::{ConfigSlot, ValueKind};

/// Unique identifier for each configuration input.
///
/// Adding an input: add a variant here and extend `all()`, `key()`, `kind()`
/// and `help()`. The `key()` value appears in snapshots, do not rename.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SlotId {
    AdditionalTimeout,
    AzureFileStorageSas,
    AzureFileStorageUrl,
    BaselineProvider,
    BasePath,
    Concurrency,
    CoverageAnalysis,
    DashboardApiKey,
    DashboardUrl,
    DevMode,
    DiffIgnoreChanges,
    DisableBail,
    DisableMixMutants,
    FallbackVersion,
    IgnoreMethods,
    IgnoreMutations,
    LanguageVersion,
    LogToFile,
    ModuleName,
    Mutate,
    MutationLevel,
    OutputPath,
    ProjectName,
    ProjectUnderTestName,
    ProjectVersion,
    Reporters,
    Since,
    SinceTarget,
    SolutionPath,
    TestProjects,
    ThresholdBreak,
    ThresholdHigh,
    ThresholdLow,
    Verbosity,
    WithBaseline,
}

impl SlotId {
    /// All variants, in declaration order.
    pub fn all() -> &'static [SlotId] {
        &[
            Self::AdditionalTimeout,
            Self::AzureFileStorageSas,
            Self::AzureFileStorageUrl,
            Self::BaselineProvider,
            Self::BasePath,
            Self::Concurrency,
            Self::CoverageAnalysis,
            Self::DashboardApiKey,
            Self::DashboardUrl,
            Self::DevMode,
            Self::DiffIgnoreChanges,
            Self::DisableBail,
            Self::DisableMixMutants,
            Self::FallbackVersion,
            Self::IgnoreMethods,
            Self::IgnoreMutations,
            Self::LanguageVersion,
            Self::LogToFile,
            Self::ModuleName,
            Self::Mutate,
            Self::MutationLevel,
            Self::OutputPath,
            Self::ProjectName,
            Self::ProjectUnderTestName,
            Self::ProjectVersion,
            Self::Reporters,
            Self::Since,
            Self::SinceTarget,
            Self::SolutionPath,
            Self::TestProjects,
            Self::ThresholdBreak,
            Self::ThresholdHigh,
            Self::ThresholdLow,
            Self::Verbosity,
            Self::WithBaseline,
        ]
    }

    /// Stable key used in snapshots.
    pub fn key(&self) -> &'static str {
        match self {
            Self::AdditionalTimeout => "additional-timeout",
            Self::AzureFileStorageSas => "azure-fileshare-sas",
            Self::AzureFileStorageUrl => "azure-fileshare-url",
            Self::BaselineProvider => "baseline-provider",
            Self::BasePath => "base-path",
            Self::Concurrency => "concurrency",
            Self::CoverageAnalysis => "coverage-analysis",
            Self::DashboardApiKey => "dashboard-api-key",
            Self::DashboardUrl => "dashboard-url",
            Self::DevMode => "dev-mode",
            Self::DiffIgnoreChanges => "diff-ignore-changes",
            Self::DisableBail => "disable-bail",
            Self::DisableMixMutants => "disable-mix-mutants",
            Self::FallbackVersion => "fallback-version",
            Self::IgnoreMethods => "ignore-methods",
            Self::IgnoreMutations => "ignore-mutations",
            Self::LanguageVersion => "language-version",
            Self::LogToFile => "log-to-file",
            Self::ModuleName => "module-name",
            Self::Mutate => "mutate",
            Self::MutationLevel => "mutation-level",
            Self::OutputPath => "output-path",
            Self::ProjectName => "project-name",
            Self::ProjectUnderTestName => "project",
            Self::ProjectVersion => "project-version",
            Self::Reporters => "reporters",
            Self::Since => "since",
            Self::SinceTarget => "since-target",
            Self::SolutionPath => "solution",
            Self::TestProjects => "test-projects",
            Self::ThresholdBreak => "break-at",
            Self::ThresholdHigh => "threshold-high",
            Self::ThresholdLow => "threshold-low",
            Self::Verbosity => "verbosity",
            Self::WithBaseline => "with-baseline",
        }
    }

    /// Value kind the slot holds for its whole lifetime.
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::DevMode
            | Self::DisableBail
            | Self::DisableMixMutants
            | Self::LogToFile
            | Self::Since
            | Self::WithBaseline => ValueKind::Bool,

            Self::AdditionalTimeout
            | Self::Concurrency
            | Self::ThresholdBreak
            | Self::ThresholdHigh
            | Self::ThresholdLow => ValueKind::Int,

            Self::DiffIgnoreChanges
            | Self::IgnoreMethods
            | Self::IgnoreMutations
            | Self::Mutate
            | Self::Reporters
            | Self::TestProjects => ValueKind::StringList,

            Self::AzureFileStorageSas
            | Self::AzureFileStorageUrl
            | Self::BaselineProvider
            | Self::BasePath
            | Self::CoverageAnalysis
            | Self::DashboardApiKey
            | Self::DashboardUrl
            | Self::FallbackVersion
            | Self::LanguageVersion
            | Self::ModuleName
            | Self::MutationLevel
            | Self::OutputPath
            | Self::ProjectName
            | Self::ProjectUnderTestName
            | Self::ProjectVersion
            | Self::SinceTarget
            | Self::SolutionPath
            | Self::Verbosity => ValueKind::String,
        }
    }

    /// One-line help text, also used as the option description.
    pub fn help(&self) -> &'static str {
        match self {
            Self::AdditionalTimeout => "Milliseconds added to the initial test run time before a mutant counts as timed out.",
            Self::AzureFileStorageSas => "Shared access signature for the Azure file share used as baseline storage.",
            Self::AzureFileStorageUrl => "URL of the Azure file share used as baseline storage.",
            Self::BaselineProvider => "Where baseline reports are stored (disk, dashboard, azurefilestorage).",
            Self::BasePath => "Directory the tool runs from.",
            Self::Concurrency => "Maximum number of parallel test runners.",
            Self::CoverageAnalysis => "How coverage is used to select tests per mutant.",
            Self::DashboardApiKey => "API key for the dashboard reporter.",
            Self::DashboardUrl => "Base URL of the dashboard.",
            Self::DevMode => "Print internal errors and stack traces.",
            Self::DiffIgnoreChanges => "Glob patterns of changed files ignored by the diff filter.",
            Self::DisableBail => "Keep running tests for a mutant after the first failure.",
            Self::DisableMixMutants => "Test each mutant in its own run.",
            Self::FallbackVersion => "Commitish used as baseline when none exists for the current version.",
            Self::IgnoreMethods => "Method names whose invocations are never mutated.",
            Self::IgnoreMutations => "Mutator kinds that are skipped.",
            Self::LanguageVersion => "Language version used to compile mutated code.",
            Self::LogToFile => "Write a debug log file next to the reports.",
            Self::ModuleName => "Module name reported to the dashboard.",
            Self::Mutate => "Glob patterns selecting the files to mutate; prefix with ! to exclude.",
            Self::MutationLevel => "How aggressive mutation is (basic, standard, advanced, complete).",
            Self::OutputPath => "Directory reports and logs are written to.",
            Self::ProjectName => "Project name reported to the dashboard.",
            Self::ProjectUnderTestName => "Project to mutate when the test project references several.",
            Self::ProjectVersion => "Project version reported to the dashboard and used for baselines.",
            Self::Reporters => "Reporters to enable (html, progress, cleartext, json, dashboard, ...).",
            Self::Since => "Only mutate code changed since a commitish (default: master).",
            Self::SinceTarget => "Commitish compared against when --since is enabled.",
            Self::SolutionPath => "Solution file used to build the project under test.",
            Self::TestProjects => "Test projects to run against the mutated code.",
            Self::ThresholdBreak => "Mutation score below which the run exits with an error (0-100).",
            Self::ThresholdHigh => "Mutation score at or above which the result is reported as good (0-100).",
            Self::ThresholdLow => "Mutation score below which the result is reported as poor (0-100).",
            Self::Verbosity => "Console log level (error, warning, info, debug, trace).",
            Self::WithBaseline => "Reuse results from a stored baseline for unchanged code.",
        }
    }
}

impl fmt::Display for SlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl Serialize for SlotId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.key())
    }
}

/// Every configuration slot of one invocation.
///
/// Created with all slots unsupplied, populated during dispatch, then handed
/// to downstream code read-only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigModel {
    // Indexed by `SlotId as usize`; `SlotId::all()` is in declaration order.
    slots: Vec<ConfigSlot>,
}

impl ConfigModel {
    pub fn new() -> Self {
        Self {
            slots: SlotId::all().iter().map(|&id| ConfigSlot::new(id)).collect(),
        }
    }

    pub fn slot(&self, id: SlotId) -> &ConfigSlot {
        &self.slots[id as usize]
    }

    pub fn slot_mut(&mut self, id: SlotId) -> &mut ConfigSlot {
        &mut self.slots[id as usize]
    }

    /// All slots, in `SlotId` order.
    pub fn iter(&self) -> impl Iterator<Item = &ConfigSlot> {
        self.slots.iter()
    }

    /// Only the slots the user supplied.
    pub fn supplied(&self) -> impl Iterator<Item = &ConfigSlot> {
        self.slots.iter().filter(|s| s.is_supplied())
    }
}

impl Default for ConfigModel {
    fn default() -> Self {
        Self::new()
    }
}

impl Serialize for ConfigModel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.slots.len()))?;
        for slot in &self.slots {
            map.serialize_entry(&slot.id(), slot)?;
        }
        map.end()
    }
}

//! Coupling resolver — optional-value options that feed a companion slot.
//!
//! `--since` sets its own presence flag; `--since:<comittish>` additionally
//! writes the commitish into `since-target`. Pairings live in a table, so a
//! new coupled option needs only a new entry.

use indexmap::IndexMap;
use tracing::{debug, warn};

use crate::args::error::CliError;
use crate::args::registry::OptionSpec;
use crate::config::{ConfigModel, SlotId};

/// Owning option long name → companion slot.
#[derive(Debug, Clone, Default)]
pub struct CouplingTable {
    companions: IndexMap<&'static str, SlotId>,
}

impl CouplingTable {
    /// Empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// `since` → `since-target`, `with-baseline` → `baseline-provider`.
    pub fn standard() -> Self {
        Self::new()
            .pair("since", SlotId::SinceTarget)
            .pair("with-baseline", SlotId::BaselineProvider)
    }

    /// Add or replace a pairing.
    pub fn pair(mut self, owner: &'static str, companion: SlotId) -> Self {
        self.companions.insert(owner, companion);
        self
    }

    pub fn companion(&self, owner: &str) -> Option<SlotId> {
        self.companions.get(owner).copied()
    }

    /// Apply one present optional-value option.
    ///
    /// The owner's slot is marked present whether or not a value was
    /// attached. An attached value goes verbatim into the companion slot.
    /// When several owners share a companion, the last one resolved wins.
    pub fn resolve(
        &self,
        model: &mut ConfigModel,
        spec: &OptionSpec,
        value: Option<&str>,
    ) -> Result<(), CliError> {
        let companion = self
            .companion(spec.long)
            .ok_or_else(|| CliError::MissingCompanion {
                option: spec.long.to_string(),
            })?;

        if let Some(owner) = spec.slot {
            model.slot_mut(owner).set_bool(true)?;
        }

        let Some(value) = value else {
            debug!(option = spec.long, "optional value absent, companion untouched");
            return Ok(());
        };

        let target = model.slot_mut(companion);
        if let Some(previous) = target.string() {
            warn!(
                option = spec.long,
                companion = %companion,
                previous,
                "companion slot already supplied, overwriting"
            );
        }
        target.set_string(value)?;
        debug!(option = spec.long, companion = %companion, value, "companion slot populated");
        Ok(())
    }
}

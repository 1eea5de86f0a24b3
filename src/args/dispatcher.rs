//! Value dispatcher — present options → typed configuration slots.
//!
//! Routing happens on two explicit axes: the option's arity first, then,
//! for single values, the target slot's value kind.

use tracing::{debug, trace};

use crate::args::coupling::CouplingTable;
use crate::args::error::CliError;
use crate::args::registry::{OptionArity, OptionRegistry, OptionSpec};
use crate::args::tokenizer::PresentOption;
use crate::config::{ConfigModel, ConfigSlot, ValueKind};

/// Routes present options into a [`ConfigModel`].
#[derive(Debug, Clone, Copy)]
pub struct Dispatcher<'a> {
    registry: &'a OptionRegistry,
    coupling: &'a CouplingTable,
}

impl<'a> Dispatcher<'a> {
    pub fn new(registry: &'a OptionRegistry, coupling: &'a CouplingTable) -> Self {
        Self { registry, coupling }
    }

    /// Apply every option, in the given order.
    ///
    /// All-or-nothing: on error `model` is left exactly as it was and the
    /// first failure is returned.
    pub fn dispatch(
        &self,
        model: &mut ConfigModel,
        options: &[PresentOption],
    ) -> Result<(), CliError> {
        let mut staged = model.clone();
        for option in options {
            self.apply(&mut staged, option)?;
        }
        *model = staged;
        Ok(())
    }

    fn apply(&self, model: &mut ConfigModel, option: &PresentOption) -> Result<(), CliError> {
        let spec = self.registry.lookup(&option.long)?;
        let Some(slot_id) = spec.slot else {
            trace!(option = spec.long, "bootstrap option, skipped");
            return Ok(());
        };

        match spec.arity {
            OptionArity::NoValue => model.slot_mut(slot_id).set_bool(true)?,
            OptionArity::MultipleValue => model.slot_mut(slot_id).set_list(option.values.clone())?,
            OptionArity::SingleOrNoValue => {
                return self.coupling.resolve(model, spec, option.value());
            }
            OptionArity::SingleValue => {
                let raw = option.value().ok_or_else(|| CliError::MissingValue {
                    option: spec.long.to_string(),
                })?;
                assign_single(model.slot_mut(slot_id), spec, raw)?
            }
        }

        debug!(option = spec.long, slot = %slot_id, "option dispatched");
        Ok(())
    }
}

/// Coerce one raw value according to the slot's kind.
///
/// Integer values may carry a sign and surrounding whitespace. A parse
/// failure names the option and the raw value.
pub fn assign_single(slot: &mut ConfigSlot, spec: &OptionSpec, raw: &str) -> Result<(), CliError> {
    match slot.kind() {
        ValueKind::String => slot.set_string(raw)?,
        ValueKind::Int => {
            let parsed = raw
                .trim()
                .parse::<i32>()
                .map_err(|source| CliError::InvalidArgumentValue {
                    option: spec.long.to_string(),
                    value: raw.to_string(),
                    source,
                })?;
            slot.set_int(parsed)?
        }
        kind @ (ValueKind::Bool | ValueKind::StringList) => {
            return Err(CliError::UnsupportedArity {
                option: spec.long.to_string(),
                arity: spec.arity,
                kind,
            });
        }
    }
    Ok(())
}

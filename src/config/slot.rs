//! Typed configuration slots.
//!
//! A slot holds exactly one value kind, fixed when the slot is created.
//! Dispatch switches on [`ValueKind`]; nothing inspects types at runtime.

use std::fmt;

use serde::ser::{Serialize, SerializeStruct, Serializer};
use thiserror::Error;

use crate::config::model::SlotId;

/// The closed set of value kinds a slot can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// Presence flag (`--dev-mode`).
    Bool,
    /// Single string (`--solution <file-path>`).
    String,
    /// Single integer (`--concurrency <number>`).
    Int,
    /// Ordered list of strings (`--reporter html --reporter json`).
    StringList,
}

impl ValueKind {
    /// Stable name used in snapshots and error messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::String => "string",
            Self::Int => "int",
            Self::StringList => "string-list",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A slot's value. `None` means the user never supplied one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlotValue {
    Bool(Option<bool>),
    String(Option<String>),
    Int(Option<i32>),
    StringList(Option<Vec<String>>),
}

impl SlotValue {
    /// Unsupplied value of the given kind.
    pub fn empty(kind: ValueKind) -> Self {
        match kind {
            ValueKind::Bool => Self::Bool(None),
            ValueKind::String => Self::String(None),
            ValueKind::Int => Self::Int(None),
            ValueKind::StringList => Self::StringList(None),
        }
    }

    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Bool(_) => ValueKind::Bool,
            Self::String(_) => ValueKind::String,
            Self::Int(_) => ValueKind::Int,
            Self::StringList(_) => ValueKind::StringList,
        }
    }

    pub fn is_supplied(&self) -> bool {
        match self {
            Self::Bool(v) => v.is_some(),
            Self::String(v) => v.is_some(),
            Self::Int(v) => v.is_some(),
            Self::StringList(v) => v.is_some(),
        }
    }
}

/// A value of one kind was written into a slot of another kind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("slot '{slot}' holds {expected} values, cannot assign {actual}")]
pub struct KindMismatch {
    pub slot: SlotId,
    pub expected: ValueKind,
    pub actual: ValueKind,
}

/// A single named, typed configuration destination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigSlot {
    id: SlotId,
    value: SlotValue,
}

impl ConfigSlot {
    /// Create an unsupplied slot with the kind declared by `id`.
    pub fn new(id: SlotId) -> Self {
        Self {
            id,
            value: SlotValue::empty(id.kind()),
        }
    }

    pub fn id(&self) -> SlotId {
        self.id
    }

    /// Human-readable help text.
    pub fn help(&self) -> &'static str {
        self.id.help()
    }

    pub fn kind(&self) -> ValueKind {
        self.value.kind()
    }

    /// Whether a setter has run on this slot.
    pub fn is_supplied(&self) -> bool {
        self.value.is_supplied()
    }

    pub fn value(&self) -> &SlotValue {
        &self.value
    }

    /// Boolean value, `false` when unsupplied or not a bool slot.
    pub fn bool(&self) -> bool {
        matches!(self.value, SlotValue::Bool(Some(true)))
    }

    /// String value, `None` when unsupplied or not a string slot.
    pub fn string(&self) -> Option<&str> {
        match &self.value {
            SlotValue::String(v) => v.as_deref(),
            _ => None,
        }
    }

    /// Integer value, `None` when unsupplied or not an int slot.
    pub fn int(&self) -> Option<i32> {
        match self.value {
            SlotValue::Int(v) => v,
            _ => None,
        }
    }

    /// List value, empty when unsupplied or not a list slot.
    pub fn list(&self) -> &[String] {
        match &self.value {
            SlotValue::StringList(Some(v)) => v,
            _ => &[],
        }
    }

    pub fn set_bool(&mut self, value: bool) -> Result<(), KindMismatch> {
        match &mut self.value {
            SlotValue::Bool(v) => {
                *v = Some(value);
                Ok(())
            }
            _ => Err(self.mismatch(ValueKind::Bool)),
        }
    }

    pub fn set_string(&mut self, value: impl Into<String>) -> Result<(), KindMismatch> {
        match &mut self.value {
            SlotValue::String(v) => {
                *v = Some(value.into());
                Ok(())
            }
            _ => Err(self.mismatch(ValueKind::String)),
        }
    }

    pub fn set_int(&mut self, value: i32) -> Result<(), KindMismatch> {
        match &mut self.value {
            SlotValue::Int(v) => {
                *v = Some(value);
                Ok(())
            }
            _ => Err(self.mismatch(ValueKind::Int)),
        }
    }

    pub fn set_list(&mut self, values: Vec<String>) -> Result<(), KindMismatch> {
        match &mut self.value {
            SlotValue::StringList(v) => {
                *v = Some(values);
                Ok(())
            }
            _ => Err(self.mismatch(ValueKind::StringList)),
        }
    }

    fn mismatch(&self, actual: ValueKind) -> KindMismatch {
        KindMismatch {
            slot: self.id,
            expected: self.kind(),
            actual,
        }
    }
}

impl Serialize for ConfigSlot {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ConfigSlot", 3)?;
        state.serialize_field("kind", self.kind().as_str())?;
        state.serialize_field("supplied", &self.is_supplied())?;
        match &self.value {
            SlotValue::Bool(v) => state.serialize_field("value", v)?,
            SlotValue::String(v) => state.serialize_field("value", v)?,
            SlotValue::Int(v) => state.serialize_field("value", v)?,
            SlotValue::StringList(v) => state.serialize_field("value", v)?,
        }
        state.end()
    }
}

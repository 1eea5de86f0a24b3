//! Strongly-typed configuration model populated from the command line.

mod model;
mod slot;

pub use model::{ConfigModel, SlotId};
pub use slot::{ConfigSlot, KindMismatch, SlotValue, ValueKind};

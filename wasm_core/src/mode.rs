//! Which field group currently accepts input.
//!
//! Byte mode and number mode exclude each other: the group that is not live is
//! either cleared (number mode) or repurposed as read-only per-byte views (byte
//! mode). The mode is inferred from the content of each edit, never toggled.

use serde::Serialize;

use crate::field::{Engine, Field};

#[derive(Serialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum Mode {
    #[default]
    Empty,
    ByteMode,
    NumberMode,
}

/// Inputs to the mode machine. `empty` means the edit left its engine with no content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeEvent {
    ByteEdit { empty: bool },
    NumberEdit { empty: bool },
    ClearAll,
}

impl Mode {
    /// The transition table. Events aimed at the non-live group leave the mode unchanged.
    pub fn transition(self, event: ModeEvent) -> Mode {
        use Mode::*;
        use ModeEvent::*;
        match (self, event) {
            (_, ClearAll) => Empty,
            (Empty | ByteMode, ByteEdit { empty: false }) => ByteMode,
            (Empty | ByteMode, ByteEdit { empty: true }) => Empty,
            (Empty | NumberMode, NumberEdit { empty: false }) => NumberMode,
            (Empty | NumberMode, NumberEdit { empty: true }) => Empty,
            (ByteMode, NumberEdit { .. }) => ByteMode,
            (NumberMode, ByteEdit { .. }) => NumberMode,
        }
    }

    pub fn live_engine(self) -> Option<Engine> {
        match self {
            Mode::Empty => None,
            Mode::ByteMode => Some(Engine::Bytes),
            Mode::NumberMode => Some(Engine::Number),
        }
    }

    /// The engine allowed to write `field` from user input in this mode.
    pub fn owner_of(self, field: Field) -> Option<Engine> {
        let engine = field.input_engine()?;
        match self.live_engine() {
            None => Some(engine),
            Some(live) if live == engine => Some(engine),
            Some(_) => None,
        }
    }

    pub fn is_editable(self, field: Field) -> bool {
        self.owner_of(field).is_some()
    }
}

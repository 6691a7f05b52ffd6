//! Immutable converter snapshot and the reducer that applies one edit to it.
//!
//! Each edit names the field it came from. The owning engine parses it into
//! its canonical value and every other view is re-derived from that value; the
//! edited field keeps the literal input so partial typing is never rewritten.

use serde::Serialize;

use crate::bytes::{self, ByteSequence};
use crate::config::ConverterConfig;
use crate::error::{DecodeError, ErrorReport, FieldError};
use crate::field::{Engine, Field};
use crate::history::{self, HistoryEntry};
use crate::integer::{self, UnboundedInteger};
use crate::mode::{Mode, ModeEvent};

/// Raw user input for a single field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edit<'a> {
    pub field: Field,
    pub raw: &'a str,
}

impl<'a> Edit<'a> {
    pub fn new(field: Field, raw: &'a str) -> Self {
        Self { field, raw }
    }

    /// Whether the edit leaves its engine without content. Text counts every
    /// character, including spaces; the other fields ignore whitespace.
    pub fn is_blank(&self) -> bool {
        match self.field {
            Field::Text => self.raw.is_empty(),
            _ => self.raw.trim().is_empty(),
        }
    }
}

/// The displayed string of every field.
#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Fields {
    pub text: String,
    pub base64: String,
    pub hex_bytes: String,
    pub ascii: String,
    pub decimal: String,
    pub binary: String,
    pub hex: String,
}

impl Fields {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Text => &self.text,
            Field::Base64 => &self.base64,
            Field::HexBytes => &self.hex_bytes,
            Field::Ascii => &self.ascii,
            Field::Decimal => &self.decimal,
            Field::Binary => &self.binary,
            Field::Hex => &self.hex,
        }
    }

    fn set(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::Text => &mut self.text,
            Field::Base64 => &mut self.base64,
            Field::HexBytes => &mut self.hex_bytes,
            Field::Ascii => &mut self.ascii,
            Field::Decimal => &mut self.decimal,
            Field::Binary => &mut self.binary,
            Field::Hex => &mut self.hex,
        };
        *slot = value;
    }
}

/// At most one live error per engine, plus the non-fatal text decode failure.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Errors {
    pub bytes: Option<FieldError>,
    pub number: Option<FieldError>,
    pub text: Option<DecodeError>,
}

impl Errors {
    pub fn for_field(&self, field: Field) -> Option<ErrorReport> {
        let engine_error = [&self.bytes, &self.number]
            .into_iter()
            .flatten()
            .find(|err| err.field() == field)
            .map(FieldError::report);
        engine_error.or_else(|| {
            self.text
                .as_ref()
                .filter(|_| field == Field::Text)
                .map(DecodeError::report)
        })
    }

    pub fn reports(&self) -> Vec<ErrorReport> {
        let mut out: Vec<ErrorReport> = [&self.bytes, &self.number]
            .into_iter()
            .flatten()
            .map(FieldError::report)
            .collect();
        out.extend(self.text.as_ref().map(DecodeError::report));
        out
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_none() && self.number.is_none() && self.text.is_none()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot {
    mode: Mode,
    bytes: ByteSequence,
    integer: Option<UnboundedInteger>,
    fields: Fields,
    errors: Errors,
}

enum Parsed {
    Bytes(Result<ByteSequence, FieldError>),
    Number(Result<UnboundedInteger, FieldError>),
}

fn parse(edit: Edit<'_>) -> Option<Parsed> {
    let parsed = match edit.field {
        Field::Text => Parsed::Bytes(Ok(bytes::from_text(edit.raw))),
        Field::Base64 => Parsed::Bytes(bytes::from_base64(edit.raw)),
        Field::HexBytes => Parsed::Bytes(bytes::from_hex_bytes(edit.raw)),
        Field::Decimal => Parsed::Number(integer::from_decimal(edit.raw)),
        Field::Binary => Parsed::Number(integer::from_binary(edit.raw)),
        Field::Hex => Parsed::Number(integer::from_hex(edit.raw)),
        Field::Ascii => return None,
    };
    Some(parsed)
}

impl Snapshot {
    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn bytes(&self) -> &ByteSequence {
        &self.bytes
    }

    pub fn integer(&self) -> Option<&UnboundedInteger> {
        self.integer.as_ref()
    }

    pub fn fields(&self) -> &Fields {
        &self.fields
    }

    pub fn field(&self, field: Field) -> &str {
        self.fields.get(field)
    }

    pub fn errors(&self) -> &Errors {
        &self.errors
    }

    pub fn is_editable(&self, field: Field) -> bool {
        self.mode.is_editable(field)
    }

    /// The string handed to a clipboard sink for `field`.
    pub fn copy(&self, field: Field) -> String {
        self.fields.get(field).to_owned()
    }

    pub fn history_entry(&self, config: &ConverterConfig) -> Option<HistoryEntry> {
        history::summarize(self, config)
    }

    /// Applies one edit and returns the next snapshot. Never fails: rejected
    /// input is recorded as a field error and read-only fields ignore edits.
    pub fn apply(&self, edit: Edit<'_>, config: &ConverterConfig) -> Snapshot {
        let Some(engine) = self.mode.owner_of(edit.field) else {
            tracing::debug!(field = %edit.field, mode = ?self.mode, "ignored edit to read-only field");
            return self.clone();
        };
        let blank = edit.is_blank();
        let event = match engine {
            Engine::Bytes => ModeEvent::ByteEdit { empty: blank },
            Engine::Number => ModeEvent::NumberEdit { empty: blank },
        };
        let mode = self.mode.transition(event);

        let next = if blank {
            Snapshot {
                mode,
                ..Snapshot::default()
            }
        } else {
            match parse(edit) {
                Some(Parsed::Bytes(Ok(bytes))) => Self::from_bytes(mode, bytes, edit, config),
                Some(Parsed::Number(Ok(value))) => Self::from_integer(mode, value, edit),
                Some(Parsed::Bytes(Err(err))) | Some(Parsed::Number(Err(err))) => {
                    self.rejected(mode, edit, err)
                }
                None => self.clone(),
            }
        };

        if next.mode != self.mode {
            tracing::debug!(from = ?self.mode, to = ?next.mode, field = %edit.field, "mode transition");
        }
        next
    }

    /// Resets both engines, their errors and the mode in one step.
    pub fn clear_all(&self) -> Snapshot {
        Snapshot {
            mode: self.mode.transition(ModeEvent::ClearAll),
            ..Snapshot::default()
        }
    }

    /// Fields whose displayed string differs from `prev`, in display order.
    pub fn changed_fields(&self, prev: &Snapshot) -> Vec<Field> {
        Field::ALL
            .into_iter()
            .filter(|field| self.fields.get(*field) != prev.fields.get(*field))
            .collect()
    }

    pub fn view(&self) -> SnapshotView {
        SnapshotView {
            mode: self.mode,
            fields: self.fields.clone(),
            editable: Field::ALL
                .into_iter()
                .filter(|field| self.is_editable(*field))
                .collect(),
            errors: self.errors.reports(),
        }
    }

    fn from_bytes(
        mode: Mode,
        bytes: ByteSequence,
        edit: Edit<'_>,
        config: &ConverterConfig,
    ) -> Snapshot {
        let (mut fields, text_error) = derive_byte_fields(&bytes, config);
        fields.set(edit.field, edit.raw.to_owned());
        Snapshot {
            mode,
            bytes,
            integer: None,
            fields,
            errors: Errors {
                text: text_error,
                ..Errors::default()
            },
        }
    }

    fn from_integer(mode: Mode, value: UnboundedInteger, edit: Edit<'_>) -> Snapshot {
        let mut fields = derive_integer_fields(&value);
        fields.set(edit.field, edit.raw.to_owned());
        Snapshot {
            mode,
            bytes: ByteSequence::default(),
            integer: Some(value),
            fields,
            errors: Errors::default(),
        }
    }

    fn rejected(&self, mode: Mode, edit: Edit<'_>, err: FieldError) -> Snapshot {
        tracing::debug!(field = %edit.field, code = err.code(), "rejected input");
        let mut next = self.clone();
        next.mode = mode;
        next.fields.set(edit.field, edit.raw.to_owned());
        match err.engine() {
            Engine::Bytes => next.errors.bytes = Some(err),
            Engine::Number => next.errors.number = Some(err),
        }
        next
    }
}

/// Every field a byte sequence determines: text, Base64, hex bytes and the
/// per-byte views shown in the numeric fields.
pub fn derive_byte_fields(
    bytes: &ByteSequence,
    config: &ConverterConfig,
) -> (Fields, Option<DecodeError>) {
    let views = bytes::to_per_byte_views(bytes, config.ascii_placeholder);
    let (text, text_error) = match bytes::to_text(bytes) {
        Ok(text) => (text, None),
        Err(err) => (config.utf8_placeholder.clone(), Some(err)),
    };
    let fields = Fields {
        text,
        base64: bytes::to_base64(bytes),
        hex_bytes: bytes::to_hex_bytes(bytes),
        ascii: views.ascii,
        decimal: views.decimal,
        binary: views.binary,
        hex: views.hex,
    };
    (fields, text_error)
}

pub fn derive_integer_fields(value: &UnboundedInteger) -> Fields {
    Fields {
        decimal: integer::to_decimal(value),
        binary: integer::to_binary(value),
        hex: integer::to_hex(value),
        ..Fields::default()
    }
}

/// Serialized form handed to the host after every edit.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotView {
    pub mode: Mode,
    #[serde(flatten)]
    pub fields: Fields,
    pub editable: Vec<Field>,
    pub errors: Vec<ErrorReport>,
}

use console_error_panic_hook::set_once as set_panic_hook;
use serde::Serialize;
use wasm_bindgen::prelude::*;

pub mod bytes;
pub mod config;
pub mod error;
pub mod field;
pub mod format;
pub mod history;
pub mod integer;
pub mod mode;
pub mod state;

pub use bytes::ByteSequence;
pub use config::ConverterConfig;
pub use error::{Base64Reason, DecodeError, ErrorReport, FieldError, HexReason};
pub use field::{Engine, Field};
pub use history::HistoryEntry;
pub use integer::UnboundedInteger;
pub use mode::{Mode, ModeEvent};
pub use state::{Edit, Snapshot, SnapshotView};

#[wasm_bindgen(start)]
pub fn wasm_start() {
    set_panic_hook();
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|err| JsValue::from_str(&err.to_string()))
}

/// One interactive converter session. Every edit goes through `&mut self`, so
/// edits are applied one at a time and each returns a consistent snapshot.
#[wasm_bindgen]
pub struct BaseConverter {
    config: ConverterConfig,
    snapshot: Snapshot,
}

#[wasm_bindgen]
impl BaseConverter {
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<BaseConverter, JsValue> {
        let config = if config.is_undefined() || config.is_null() {
            ConverterConfig::default()
        } else {
            serde_wasm_bindgen::from_value(config)
                .map_err(|err| JsValue::from_str(&format!("invalid config: {}", err)))?
        };
        Ok(Self::with_config(config))
    }

    pub fn edit(&mut self, field: &str, value: &str) -> Result<JsValue, JsValue> {
        let view = self
            .edit_internal(field, value)
            .map_err(|err| JsValue::from_str(&err))?;
        to_js(&view)
    }

    #[wasm_bindgen(js_name = clearAll)]
    pub fn clear_all(&mut self) -> Result<JsValue, JsValue> {
        to_js(&self.clear_all_internal())
    }

    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        to_js(&self.snapshot.view())
    }

    pub fn copy(&self, field: &str) -> Result<String, JsValue> {
        self.copy_internal(field).map_err(|err| JsValue::from_str(&err))
    }

    /// The history entry for the current content, `undefined` when nothing is entered.
    pub fn save(&self) -> Result<JsValue, JsValue> {
        to_js(&self.snapshot.history_entry(&self.config))
    }

    #[wasm_bindgen(js_name = isEditable)]
    pub fn is_editable(&self, field: &str) -> Result<bool, JsValue> {
        let field: Field = field.parse().map_err(|err: String| JsValue::from_str(&err))?;
        Ok(self.snapshot.is_editable(field))
    }
}

impl BaseConverter {
    pub fn with_config(config: ConverterConfig) -> Self {
        Self {
            config,
            snapshot: Snapshot::default(),
        }
    }

    pub fn current(&self) -> &Snapshot {
        &self.snapshot
    }

    pub(crate) fn edit_internal(&mut self, field: &str, value: &str) -> Result<SnapshotView, String> {
        let field: Field = field.parse()?;
        self.snapshot = self.snapshot.apply(Edit::new(field, value), &self.config);
        Ok(self.snapshot.view())
    }

    pub(crate) fn clear_all_internal(&mut self) -> SnapshotView {
        self.snapshot = self.snapshot.clear_all();
        self.snapshot.view()
    }

    pub(crate) fn copy_internal(&self, field: &str) -> Result<String, String> {
        let field: Field = field.parse()?;
        Ok(self.snapshot.copy(field))
    }
}

impl Default for BaseConverter {
    fn default() -> Self {
        Self::with_config(ConverterConfig::default())
    }
}

#[derive(Serialize, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
struct ByteConversion {
    text: String,
    text_error: Option<String>,
    base64: String,
    hex_bytes: String,
    decimal: String,
    binary: String,
    hex: String,
    ascii: String,
}

/// One-shot conversion of a `text`, `base64` or `hexBytes` input into every byte view.
#[wasm_bindgen]
pub fn bytes_to_views(kind: &str, input: &str) -> Result<JsValue, JsValue> {
    bytes_to_views_internal(kind, input)
        .map_err(|err| JsValue::from_str(&err))
        .and_then(|res| to_js(&res))
}

fn bytes_to_views_internal(kind: &str, input: &str) -> Result<ByteConversion, String> {
    let field: Field = kind.parse()?;
    let parsed = match field {
        Field::Text => Ok(bytes::from_text(input)),
        Field::Base64 => bytes::from_base64(input),
        Field::HexBytes => bytes::from_hex_bytes(input),
        other => return Err(format!("unsupported byte input {}", other)),
    };
    let data = parsed.map_err(|err| err.to_string())?;
    let (fields, text_error) = state::derive_byte_fields(&data, &ConverterConfig::default());
    Ok(ByteConversion {
        text: fields.text,
        text_error: text_error.map(|err| err.to_string()),
        base64: fields.base64,
        hex_bytes: fields.hex_bytes,
        decimal: fields.decimal,
        binary: fields.binary,
        hex: fields.hex,
        ascii: fields.ascii,
    })
}

#[derive(Serialize, Debug, Default, PartialEq, Eq)]
struct IntegerBases {
    decimal: String,
    binary: String,
    hex: String,
}

/// One-shot conversion of a non-negative integer given in `decimal`, `binary` or `hex`.
#[wasm_bindgen]
pub fn convert_integer(base: &str, value: &str) -> Result<JsValue, JsValue> {
    convert_integer_internal(base, value)
        .map_err(|err| JsValue::from_str(&err))
        .and_then(|res| to_js(&res))
}

fn convert_integer_internal(base: &str, value: &str) -> Result<IntegerBases, String> {
    if value.trim().is_empty() {
        return Err("value is empty".into());
    }
    let parsed = match base {
        "decimal" => integer::from_decimal(value),
        "binary" => integer::from_binary(value),
        "hex" => integer::from_hex(value),
        _ => return Err(format!("unsupported base {}", base)),
    };
    let num = parsed.map_err(|err| err.to_string())?;
    let fields = state::derive_integer_fields(&num);
    Ok(IntegerBases {
        decimal: fields.decimal,
        binary: fields.binary,
        hex: fields.hex,
    })
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;

use serde::Serialize;

use crate::config::ConverterConfig;
use crate::format::truncate_chars;
use crate::mode::Mode;
use crate::state::Snapshot;

/// A conversion summary for the host's history log. The core only builds it;
/// storing it is the caller's job.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub tool: String,
    pub details: String,
    pub input: String,
    pub output: String,
}

/// Summarizes the live group of `snapshot`, or `None` when nothing is entered.
pub fn summarize(snapshot: &Snapshot, config: &ConverterConfig) -> Option<HistoryEntry> {
    let fields = snapshot.fields();
    let short = |value: &str| format!("{}...", truncate_chars(value, config.summary_len));
    match snapshot.mode() {
        Mode::Empty => None,
        Mode::ByteMode => {
            let input = if fields.text.is_empty() {
                short(&fields.base64)
            } else {
                fields.text.clone()
            };
            Some(HistoryEntry {
                tool: config.history_tool_bytes.clone(),
                details: "Text/bytes conversion".into(),
                input,
                output: format!(
                    "Hex: {} | B64: {}",
                    short(&fields.hex_bytes),
                    short(&fields.base64)
                ),
            })
        }
        Mode::NumberMode => {
            let input = [
                ("Dec", &fields.decimal),
                ("Bin", &fields.binary),
                ("Hex", &fields.hex),
            ]
            .into_iter()
            .find(|(_, value)| !value.is_empty())
            .map(|(label, value)| format!("{}: {}", label, value))
            .unwrap_or_default();
            Some(HistoryEntry {
                tool: config.history_tool_number.clone(),
                details: "Numeric conversion".into(),
                input,
                output: format!(
                    "Dec: {} | Hex: {} | Bin: {}",
                    fields.decimal, fields.hex, fields.binary
                ),
            })
        }
    }
}

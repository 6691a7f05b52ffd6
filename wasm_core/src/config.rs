use serde::Deserialize;

/// Host-tunable presentation settings. Missing keys fall back to the defaults,
/// so a JS caller can pass `{}` or only the keys it cares about.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct ConverterConfig {
    /// Shown in the text field when the bytes are not valid UTF-8.
    pub utf8_placeholder: String,
    /// Stands in for non-printable bytes in the ASCII view.
    pub ascii_placeholder: char,
    /// Characters kept from each field in a history summary.
    pub summary_len: usize,
    pub history_tool_bytes: String,
    pub history_tool_number: String,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            utf8_placeholder: "Error: invalid UTF-8 byte sequence".into(),
            ascii_placeholder: '.',
            summary_len: 20,
            history_tool_bytes: "Base converter (text)".into(),
            history_tool_number: "Base converter (number)".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let config: ConverterConfig =
            serde_json::from_str(r#"{"asciiPlaceholder":"?","summaryLen":8}"#).unwrap();
        assert_eq!(config.ascii_placeholder, '?');
        assert_eq!(config.summary_len, 8);
        assert_eq!(config.utf8_placeholder, ConverterConfig::default().utf8_placeholder);
    }

    #[test]
    fn empty_object_is_default() {
        let config: ConverterConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, ConverterConfig::default());
    }
}

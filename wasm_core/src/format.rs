// Formatting helpers shared by the byte views, the integer renderings and history summaries.

/// Renders each byte with `render` and joins the pieces with a single space.
pub fn join_bytes(bytes: &[u8], render: impl Fn(u8) -> String) -> String {
    let mut out = String::with_capacity(bytes.len() * 3);
    for (idx, byte) in bytes.iter().enumerate() {
        if idx > 0 {
            out.push(' ');
        }
        out.push_str(&render(*byte));
    }
    out
}

pub fn byte_decimal(byte: u8) -> String {
    byte.to_string()
}

/// Zero-padded to the full 8 bits.
pub fn byte_binary(byte: u8) -> String {
    format!("{:08b}", byte)
}

/// Two uppercase digits.
pub fn byte_hex(byte: u8) -> String {
    format!("{:02X}", byte)
}

/// Printable ASCII (0x20..=0x7E) verbatim, anything else as `placeholder`.
pub fn ascii_char(byte: u8, placeholder: char) -> char {
    if (0x20..=0x7E).contains(&byte) {
        byte as char
    } else {
        placeholder
    }
}

/// Removes every whitespace character, including interior ones.
pub fn strip_whitespace(input: &str) -> String {
    input.chars().filter(|ch| !ch.is_whitespace()).collect()
}

/// Returns at most `max_chars` characters of `input`, cut on a char boundary.
pub fn truncate_chars(input: &str, max_chars: usize) -> &str {
    match input.char_indices().nth(max_chars) {
        Some((idx, _)) => &input[..idx],
        None => input,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_bytes_uses_single_spaces() {
        assert_eq!(join_bytes(&[1, 2, 255], byte_decimal), "1 2 255");
        assert_eq!(join_bytes(&[], byte_decimal), "");
        assert_eq!(join_bytes(&[0x0A, 0xFF], byte_hex), "0A FF");
    }

    #[test]
    fn binary_is_padded_to_eight_bits() {
        assert_eq!(byte_binary(0), "00000000");
        assert_eq!(byte_binary(5), "00000101");
        assert_eq!(byte_binary(255), "11111111");
    }

    #[test]
    fn ascii_char_masks_non_printable() {
        assert_eq!(ascii_char(b'A', '.'), 'A');
        assert_eq!(ascii_char(b' ', '.'), ' ');
        assert_eq!(ascii_char(b'~', '.'), '~');
        assert_eq!(ascii_char(0x7F, '.'), '.');
        assert_eq!(ascii_char(0x1F, '?'), '?');
        assert_eq!(ascii_char(0xC3, '.'), '.');
    }

    #[test]
    fn truncate_chars_respects_multibyte_boundaries() {
        assert_eq!(truncate_chars("héllo", 2), "hé");
        assert_eq!(truncate_chars("abc", 10), "abc");
        assert_eq!(truncate_chars("", 3), "");
    }

    #[test]
    fn strip_whitespace_removes_interior_runs() {
        assert_eq!(strip_whitespace(" 48 69\n\t6A "), "48696A");
    }
}

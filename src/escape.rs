//! Quoting of macro values for embedding in a C string literal.
//!
//! Values are written as JSON string literals with the same escaping as
//! Python's `json.dumps`: every character outside `[ -~]` becomes a `\uXXXX`
//! escape, so the generated header is always plain ASCII. These are not
//! always valid C/C++ literals: C and C++ reject universal character names
//! for control characters and for the surrogate halves used above the BMP.

use std::io;

use serde::Serialize as _;

use crate::error::Result;

/// JSON formatter that escapes every character outside printable ASCII.
///
/// `serde_json` already escapes quotes, backslashes, and control characters
/// through `write_char_escape`; this only changes how the unescaped runs
/// between them are written.
#[derive(Debug, Default, Clone, Copy)]
struct AsciiFormatter;

impl serde_json::ser::Formatter for AsciiFormatter {
    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        let mut start = 0;
        for (idx, c) in fragment.char_indices() {
            // DEL is ASCII but not printable; serde_json passes it through.
            if c.is_ascii() && c != '\u{7f}' {
                continue;
            }
            writer.write_all(&fragment.as_bytes()[start..idx])?;
            let mut units = [0u16; 2];
            for unit in c.encode_utf16(&mut units) {
                write!(writer, "\\u{unit:04x}")?;
            }
            start = idx + c.len_utf8();
        }
        writer.write_all(&fragment.as_bytes()[start..])
    }
}

/// Quotes a value as a double-quoted, ASCII-only JSON string literal.
///
/// ```
/// use alusus_defs_gen::escape::quote_value;
///
/// assert_eq!(quote_value(r#"say "hi""#).unwrap(), r#""say \"hi\"""#);
/// ```
pub fn quote_value(value: &str) -> Result<String> {
    // Two quotes plus a little headroom for escapes.
    let mut out = Vec::with_capacity(value.len() + 8);
    let mut ser = serde_json::Serializer::with_formatter(&mut out, AsciiFormatter);
    value.serialize(&mut ser)?;
    Ok(String::from_utf8_lossy(&out).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_value() {
        assert_eq!(quote_value("1.0.0").unwrap(), "\"1.0.0\"");
        assert_eq!(quote_value("").unwrap(), "\"\"");
    }

    #[test]
    fn test_quotes_and_backslashes() {
        assert_eq!(
            quote_value(r"C:\Program Files\x").unwrap(),
            r#""C:\\Program Files\\x""#
        );
        assert_eq!(quote_value(r#"a"b"#).unwrap(), r#""a\"b""#);
    }

    #[test]
    fn test_control_characters() {
        assert_eq!(quote_value("a\nb\tc").unwrap(), r#""a\nb\tc""#);
        assert_eq!(quote_value("\u{1}").unwrap(), r#""\u0001""#);
    }

    #[test]
    fn test_delete_character_is_escaped() {
        assert_eq!(quote_value("a\u{7f}b").unwrap(), r#""a\u007fb""#);
        assert!(quote_value("\u{7f}").unwrap().bytes().all(|b| b != 0x7f));
    }

    #[test]
    fn test_slash_is_not_escaped() {
        assert_eq!(quote_value("lib/x86_64").unwrap(), "\"lib/x86_64\"");
    }

    #[test]
    fn test_non_ascii_is_escaped() {
        // Arabic "bin" directory name.
        let quoted = quote_value("ثنائي").unwrap();
        assert!(quoted.is_ascii());
        assert_eq!(quoted, r#""\u062b\u0646\u0627\u0626\u064a""#);
    }

    #[test]
    fn test_astral_plane_uses_surrogate_pair() {
        assert_eq!(quote_value("x😀y").unwrap(), r#""x\ud83d\ude00y""#);
    }

    #[test]
    fn test_unescape_recovers_original() {
        for value in [
            "1444-06-07",
            "quote \" and \\ backslash",
            "tab\there\r\n",
            "مرحبا 😀 bin",
            "",
        ] {
            let quoted = quote_value(value).unwrap();
            let back: String = serde_json::from_str(&quoted).expect("valid JSON literal");
            assert_eq!(back, value);
        }
    }
}

//! Deterministic JSON formatting for the registry file.
//!
//! Output uses four-space indentation, `": "` between keys and values, and escapes
//! every character outside printable ASCII as `\uXXXX` (UTF-16 code units, lowercase
//! hex). This matches the files the bot has always written, so loading and saving
//! an untouched registry reproduces it byte for byte and git sees no change.

use std::io;

use serde::Serialize;
use serde_json::ser::{Formatter, PrettyFormatter};

const INDENT: &[u8] = b"    ";

/// Pretty formatter that escapes non-ASCII characters.
///
/// Layout is delegated to `PrettyFormatter`; only string fragments are
/// rewritten.
pub struct AsciiPrettyFormatter<'a> {
    inner: PrettyFormatter<'a>,
}

impl<'a> AsciiPrettyFormatter<'a> {
    pub fn new() -> Self {
        Self {
            inner: PrettyFormatter::with_indent(INDENT),
        }
    }
}

impl Default for AsciiPrettyFormatter<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl Formatter for AsciiPrettyFormatter<'_> {
    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        let mut start = 0;
        for (index, ch) in fragment.char_indices() {
            if (' '..='~').contains(&ch) {
                continue;
            }
            writer.write_all(&fragment.as_bytes()[start..index])?;
            let mut units = [0u16; 2];
            for unit in ch.encode_utf16(&mut units) {
                write!(writer, "\\u{:04x}", unit)?;
            }
            start = index + ch.len_utf8();
        }
        writer.write_all(&fragment.as_bytes()[start..])
    }

    fn begin_array<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.inner.begin_array(writer)
    }

    fn end_array<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.inner.end_array(writer)
    }

    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.inner.begin_array_value(writer, first)
    }

    fn end_array_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.inner.end_array_value(writer)
    }

    fn begin_object<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.inner.begin_object(writer)
    }

    fn end_object<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.inner.end_object(writer)
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.inner.begin_object_key(writer, first)
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.inner.begin_object_value(writer)
    }

    fn end_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.inner.end_object_value(writer)
    }
}

/// Serializes a value with `AsciiPrettyFormatter`.
///
/// # Returns
/// - `Ok(Vec<u8>)` - Formatted JSON without a trailing newline
/// - `Err(serde_json::Error)` - Value could not be serialized
pub fn to_vec_pretty_ascii<T>(value: &T) -> Result<Vec<u8>, serde_json::Error>
where
    T: ?Sized + Serialize,
{
    let mut out = Vec::with_capacity(128);
    let mut serializer = serde_json::Serializer::with_formatter(&mut out, AsciiPrettyFormatter::new());
    value.serialize(&mut serializer)?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn render(value: serde_json::Value) -> String {
        String::from_utf8(to_vec_pretty_ascii(&value).unwrap()).unwrap()
    }

    #[test]
    fn indents_with_four_spaces() {
        let out = render(json!([{"discord_id": "1", "roles": [5, 6]}]));
        assert_eq!(
            out,
            "[\n    {\n        \"discord_id\": \"1\",\n        \"roles\": [\n            5,\n            6\n        ]\n    }\n]"
        );
    }

    #[test]
    fn empty_array_stays_on_one_line() {
        assert_eq!(render(json!([])), "[]");
        assert_eq!(render(json!([{"roles": []}])), "[\n    {\n        \"roles\": []\n    }\n]");
    }

    #[test]
    fn escapes_non_ascii_as_utf16_units() {
        assert_eq!(render(json!("Zoë")), "\"Zo\\u00eb\"");
        assert_eq!(render(json!("a😀b")), "\"a\\ud83d\\ude00b\"");
        assert_eq!(render(json!("\u{7f}")), "\"\\u007f\"");
    }

    #[test]
    fn keeps_standard_escapes() {
        assert_eq!(render(json!("a\"b\\c\n")), "\"a\\\"b\\\\c\\n\"");
    }
}

//! ANVL (A Name-Value List) codec
//!
//! The registry speaks a line-oriented format: one `key: value` field per
//! line, `\n` terminated, UTF-8 on the wire. There is no escaping, no
//! multi-line values and no comments.
//!
//! Decoding is tolerant: registry responses mix status lines and
//! diagnostics with ANVL fields, so lines that cannot be parsed are skipped
//! rather than reported.

use std::collections::BTreeMap;

use tracing::debug;

use crate::models::MetadataField;

/// Separator between key and value
pub const SEPARATOR: &str = ": ";

/// Decoded metadata, keyed by field name
///
/// A `BTreeMap` iterates in lexicographic key order, which is the order the
/// relationship classifier reports fields in.
pub type Metadata = BTreeMap<String, String>;

/// Encode fields in order as `key: value\n` lines
///
/// Values are written verbatim. Callers guarantee they contain no line
/// terminators.
pub fn encode(fields: &[MetadataField]) -> Vec<u8> {
    encode_to_string(fields).into_bytes()
}

/// Same as [`encode`], as text
pub fn encode_to_string(fields: &[MetadataField]) -> String {
    let mut output = String::new();
    for field in fields {
        output.push_str(&field.key);
        output.push_str(SEPARATOR);
        output.push_str(&field.value);
        output.push('\n');
    }
    output
}

/// Re-encode a decoded mapping, in key order
pub fn encode_metadata(metadata: &Metadata) -> Vec<u8> {
    let fields: Vec<MetadataField> = metadata
        .iter()
        .map(|(key, value)| MetadataField::new(key.as_str(), value.as_str()))
        .collect();
    encode(&fields)
}

/// Split one line on the first separator, trimming key and value
///
/// Returns `None` for lines without a separator or with an empty key.
pub fn parse_line(line: &str) -> Option<(&str, &str)> {
    let (key, value) = line.split_once(SEPARATOR)?;
    let key = key.trim();
    if key.is_empty() {
        return None;
    }
    Some((key, value.trim()))
}

/// Decode a response body into a key/value mapping
///
/// Lines end at `\r\n`, `\n` or a bare `\r`. Later duplicates of a key
/// overwrite earlier ones. Blank and malformed lines are skipped.
pub fn decode(body: &str) -> Metadata {
    let mut metadata = Metadata::new();
    let mut skipped = 0usize;

    for line in body.split(['\r', '\n']) {
        if line.trim().is_empty() {
            continue;
        }
        match parse_line(line) {
            Some((key, value)) => {
                metadata.insert(key.to_string(), value.to_string());
            }
            None => skipped += 1,
        }
    }

    if skipped > 0 {
        debug!("Skipped {} malformed ANVL line(s)", skipped);
    }

    metadata
}

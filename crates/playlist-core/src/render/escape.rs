//! Escaping for values injected into the page script

use super::RenderError;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Characters left alone by `encodeURIComponent`
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode every `/`-separated segment of a media path
pub fn encode_path(path: &str) -> String {
    path.split('/')
        .map(|segment| utf8_percent_encode(segment, URI_COMPONENT).to_string())
        .collect::<Vec<_>>()
        .join("/")
}

/// Quoted string literal safe as script source and inside `<script>`
pub fn string_literal(value: &str) -> Result<String, RenderError> {
    let json = serde_json::to_string(value)?;

    let mut out = String::with_capacity(json.len());
    for c in json.chars() {
        match c {
            '<' => out.push_str("\\u003c"),
            '>' => out.push_str("\\u003e"),
            '&' => out.push_str("\\u0026"),
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            _ => out.push(c),
        }
    }
    Ok(out)
}

/// Array literal of encoded, quoted media paths
pub fn path_array_literal(paths: &[String], separator: &str) -> Result<String, RenderError> {
    let entries = paths
        .iter()
        .map(|path| string_literal(&encode_path(path)))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(format!("[{}]", entries.join(separator)))
}

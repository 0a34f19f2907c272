// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! HTML form-fragment rendering for the API explorer.
//!
//! The explorer shows each key at the current payload level as a label and
//! an editable text input pre-filled with the value. Keys and values are
//! escaped before interpolation so a fact value containing markup cannot
//! break out of the attribute it is rendered into.

/// Render one `key:<input ...>` control per entry.
///
/// Every entry produces exactly one control; the iterator's order is
/// whatever the caller's payload yields.
pub(crate) fn form_fragment<'a, I>(entries: I) -> String
where
    I: Iterator<Item = (&'a str, String)>,
{
    let mut snippet = String::new();
    for (key, value) in entries {
        let key = escape(key);
        let value = escape(&value);
        snippet.push_str(&key);
        snippet.push(':');
        snippet.push_str(&format!(
            "<input type=\"text\" name=\"{}\" value=\"{}\">",
            key, value
        ));
    }
    snippet
}

/// Escape the characters significant in HTML text and attribute contexts.
fn escape(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

//! Review/Export
//!
//! Checklist text rendering and the shortcut deep link built from it.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::models::CartItem;

/// Characters escaped by JavaScript's `encodeURIComponent`
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

/// `[ ] <qty> <unit> <name>[ - Note: <note>]`
pub fn list_line(entry: &CartItem) -> String {
    let mut line = format!("[ ] {} {} {}", entry.qty, entry.selected_unit, entry.item.name);
    if entry.trimmed_note().is_some() {
        line.push_str(" - Note: ");
        line.push_str(&entry.note);
    }
    line
}

/// One line per entry with a positive quantity, in iteration order
pub fn list_text<'a>(entries: impl IntoIterator<Item = &'a CartItem>) -> String {
    entries
        .into_iter()
        .filter(|e| e.qty > 0)
        .map(list_line)
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn encode_component(text: &str) -> String {
    utf8_percent_encode(text, URI_COMPONENT).to_string()
}

/// `<scheme>://run-shortcut?name=<name>&input=text&text=<text>`
pub fn shortcut_link(scheme: &str, shortcut_name: &str, text: &str) -> String {
    format!(
        "{}://run-shortcut?name={}&input=text&text={}",
        scheme,
        encode_component(shortcut_name),
        encode_component(text)
    )
}

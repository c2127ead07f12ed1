//! Rendering a scope into export text.
//!
//! Both functions are total: a scope without entries yields the wrapping syntax only,
//! and `None` stands for the empty scope so callers can compose before data exists.
//!
//! Two policies are fixed here:
//!
//! - **Local ids.** The message module keys each entry by its id with the
//!   `"<full scope string>."` prefix removed. An id without that prefix (or a scope with
//!   an empty full scope string) keeps its raw id as the key, and its `id` field is written
//!   as a literal of the raw id instead of an interpolation of `scope`.
//! - **Escaping.** [`ComposeStyle::Escaped`] escapes every interpolated string for the
//!   target syntax. [`ComposeStyle::Raw`] interpolates values untouched; values containing
//!   a quote or backslash then produce broken output.

use crate::model::Scope;

pub const RESOURCE_FILENAME: &str = "en.json";
pub const MESSAGES_FILENAME: &str = "messages.js";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ComposeStyle {
    #[default]
    Escaped,
    Raw,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// `en.json` resource bundle.
    ResourceJson,
    /// `messages.js` message-definition module.
    MessageModule,
}

impl ExportFormat {
    pub fn filename(&self) -> &'static str {
        match self {
            ExportFormat::ResourceJson => RESOURCE_FILENAME,
            ExportFormat::MessageModule => MESSAGES_FILENAME,
        }
    }

    pub fn compose(&self, scope: Option<&Scope>, style: ComposeStyle) -> String {
        match self {
            ExportFormat::ResourceJson => resource_json(scope, style),
            ExportFormat::MessageModule => {
                let scope = scope.unwrap_or_else(|| Scope::empty());
                message_module(&scope.full_scope_string, Some(scope), style)
            }
        }
    }
}

/// `{ "<id>" : "<defaultValue>", ... }`, one entry per line.
pub fn resource_json(scope: Option<&Scope>, style: ComposeStyle) -> String {
    let scope = scope.unwrap_or_else(|| Scope::empty());

    let mut out = String::from("{\n");
    for entry in scope.entries() {
        out.push_str(&format!(
            "  {} : {},\n",
            json_string(&entry.id, style),
            json_string(&entry.default_value, style)
        ));
    }
    out.push_str("}\n");
    out
}

/// A `defineMessages` module binding `scope` to `full_scope_string`.
pub fn message_module(
    full_scope_string: &str,
    scope: Option<&Scope>,
    style: ComposeStyle,
) -> String {
    let scope = scope.unwrap_or_else(|| Scope::empty());

    let mut out = String::new();
    out.push_str("import { defineMessages } from 'react-intl'\n\n");
    out.push_str(&format!(
        "export const scope = {}\n\n",
        js_string(full_scope_string, style)
    ));
    out.push_str("export default defineMessages({\n");

    for entry in scope.entries() {
        let (key, id_field) = match local_id(full_scope_string, &entry.id) {
            Some(local) => (
                local,
                format!("`${{scope}}.{}`", template_text(local, style)),
            ),
            None => (entry.id.as_str(), js_string(&entry.id, style)),
        };
        out.push_str(&format!("  {}: {{\n", property_key(key, style)));
        out.push_str(&format!("    id: {},\n", id_field));
        out.push_str(&format!(
            "    defaultMessage: {},\n",
            js_string(&entry.default_value, style)
        ));
        out.push_str("  },\n");
    }

    out.push_str("})\n");
    out
}

/// The id with `"<full_scope_string>."` removed, if it has that prefix.
pub fn local_id<'a>(full_scope_string: &str, id: &'a str) -> Option<&'a str> {
    if full_scope_string.is_empty() {
        return None;
    }
    id.strip_prefix(full_scope_string)
        .and_then(|rest| rest.strip_prefix('.'))
        .filter(|rest| !rest.is_empty())
}

fn json_string(value: &str, style: ComposeStyle) -> String {
    match style {
        ComposeStyle::Escaped => {
            serde_json::to_string(value).unwrap_or_else(|_| format!("\"{}\"", value))
        }
        ComposeStyle::Raw => format!("\"{}\"", value),
    }
}

fn js_string(value: &str, style: ComposeStyle) -> String {
    match style {
        ComposeStyle::Escaped => format!("'{}'", escape_js(value, '\'')),
        ComposeStyle::Raw => format!("'{}'", value),
    }
}

fn template_text(value: &str, style: ComposeStyle) -> String {
    match style {
        ComposeStyle::Escaped => escape_js(value, '`').replace("${", "\\${"),
        ComposeStyle::Raw => value.to_string(),
    }
}

fn property_key(key: &str, style: ComposeStyle) -> String {
    if style == ComposeStyle::Raw || is_identifier(key) {
        key.to_string()
    } else {
        js_string(key, style)
    }
}

fn is_identifier(key: &str) -> bool {
    let mut chars = key.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$')
}

fn escape_js(value: &str, quote: char) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c => out.push(c),
        }
    }
    out
}

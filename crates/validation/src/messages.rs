//! Turning message codes into human-readable text.

use std::collections::HashMap;

use crate::error::{ErrorArgument, ValidationError};

/// Message used when no candidate code matches and the error has no default.
pub const FALLBACK_MESSAGE: &str = "invalid value";

const DEFAULT_PROPERTIES: &str = include_str!("../messages/errors.properties");

/// Source of message templates keyed by message code.
pub trait MessageSource {
    fn lookup(&self, code: &str) -> Option<&str>;

    /// Resolve the first configured candidate, formatting `{n}` placeholders.
    ///
    /// Falls back to `default_message`, then to [`FALLBACK_MESSAGE`].
    fn resolve(
        &self,
        codes: &[String],
        arguments: &[ErrorArgument],
        default_message: Option<&str>,
    ) -> String {
        codes
            .iter()
            .find_map(|code| self.lookup(code))
            .or(default_message)
            .map(|template| format_message(template, arguments))
            .unwrap_or_else(|| FALLBACK_MESSAGE.to_string())
    }

    fn resolve_error(&self, error: &ValidationError) -> String {
        self.resolve(error.codes(), error.arguments(), error.default_message())
    }
}

/// In-memory message table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageBundle {
    messages: HashMap<String, String>,
}

impl MessageBundle {
    pub fn new() -> Self {
        Self::default()
    }

    /// The bundled `errors.properties` messages.
    pub fn defaults() -> Self {
        Self::from_properties(DEFAULT_PROPERTIES)
    }

    /// Parse `key=value` lines. Blank lines and `#`/`!` comments are skipped;
    /// lines without `=` are ignored.
    pub fn from_properties(text: &str) -> Self {
        let messages = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#') && !line.starts_with('!'))
            .filter_map(|line| line.split_once('='))
            .map(|(key, value)| (key.trim().to_string(), value.trim().to_string()))
            .collect();
        Self { messages }
    }

    pub fn insert(&mut self, code: impl Into<String>, template: impl Into<String>) {
        self.messages.insert(code.into(), template.into());
    }

    /// Overlay `other` on top of this bundle.
    pub fn merge(mut self, other: MessageBundle) -> Self {
        self.messages.extend(other.messages);
        self
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

impl MessageSource for MessageBundle {
    fn lookup(&self, code: &str) -> Option<&str> {
        self.messages.get(code).map(String::as_str)
    }
}

/// Replace `{0}`, `{1}`, ... with the matching argument.
///
/// Placeholders without a matching argument are left untouched.
pub fn format_message(template: &str, arguments: &[ErrorArgument]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let substituted = after.find('}').and_then(|close| {
            let index: usize = after[..close].parse().ok()?;
            let arg = arguments.get(index)?;
            Some((arg.to_string(), close))
        });
        match substituted {
            Some((value, close)) => {
                out.push_str(&value);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}

// SPDX-FileCopyrightText: 2026 Plinth Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Lexical key tokens and their classification.
//!
//! Every keyed entry carries the tokens the upstream parser saw for its keys.
//! Plugin declarations accept only quoted strings and bare identifiers as
//! keys; other classifications exist so malformed documents can still be
//! represented and reported with their original spelling.

/// Lexical classification of a key token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyKind {
    /// A double-quoted string key, e.g. `"NodeAttestor"`.
    QuotedString,
    /// An unquoted identifier key, e.g. `plugin_cmd`.
    BareIdentifier,
    /// A numeric literal in key position. Never a valid plugin key.
    Number,
    /// A boolean literal in key position. Never a valid plugin key.
    Bool,
}

/// A classified textual key on a document entry.
///
/// `text` is the decoded key value (quotes already stripped for
/// [`KeyKind::QuotedString`]); [`KeyToken::raw`] reproduces the source
/// spelling for error messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyToken {
    pub kind: KeyKind,
    pub text: String,
}

impl KeyToken {
    /// A quoted-string key.
    pub fn quoted(text: impl Into<String>) -> Self {
        Self {
            kind: KeyKind::QuotedString,
            text: text.into(),
        }
    }

    /// A bare-identifier key.
    pub fn bare(text: impl Into<String>) -> Self {
        Self {
            kind: KeyKind::BareIdentifier,
            text: text.into(),
        }
    }

    /// A numeric literal in key position.
    pub fn number(text: impl Into<String>) -> Self {
        Self {
            kind: KeyKind::Number,
            text: text.into(),
        }
    }

    /// A boolean literal in key position.
    pub fn boolean(text: impl Into<String>) -> Self {
        Self {
            kind: KeyKind::Bool,
            text: text.into(),
        }
    }

    /// The key's string value, if the token is a valid key classification.
    ///
    /// Returns `Some` exactly for [`KeyKind::QuotedString`] and
    /// [`KeyKind::BareIdentifier`].
    pub fn value(&self) -> Option<&str> {
        match self.kind {
            KeyKind::QuotedString | KeyKind::BareIdentifier => Some(&self.text),
            KeyKind::Number | KeyKind::Bool => None,
        }
    }

    /// The source-ish spelling of the token, for diagnostics.
    pub fn raw(&self) -> String {
        match self.kind {
            KeyKind::QuotedString => format!("\"{}\"", self.text),
            _ => self.text.clone(),
        }
    }
}

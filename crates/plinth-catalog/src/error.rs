// SPDX-FileCopyrightText: 2026 Plinth Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Diagnostic error type for plugin declaration extraction.
//!
//! All variants are non-retryable structural faults in the authored
//! configuration. Each carries the type key, name key, raw spelling, or key
//! count needed to locate the faulty declaration without re-reading the
//! whole document.

use miette::Diagnostic;
use thiserror::Error;

/// An error raised while extracting plugin declarations from a document.
#[derive(Debug, Error, Diagnostic)]
pub enum CatalogError {
    /// The plugins root node is missing or has the wrong shape.
    #[error("plugins node is {found}, expected an object list")]
    #[diagnostic(
        code(plinth::catalog::invalid_root),
        help("the plugins section must be a sequence of plugin declaration blocks")
    )]
    InvalidRoot {
        /// What was found in place of the object list.
        found: &'static str,
    },

    /// A plugin entry has the wrong lexical shape.
    #[error("malformed plugin entry `{plugin_type}`: {detail}")]
    #[diagnostic(
        code(plinth::catalog::malformed_entry),
        help("declare plugins as `Type \"name\" {{ ... }}` or `Type {{ \"name\" = {{ ... }} }}`")
    )]
    MalformedEntry {
        /// The type key of the offending entry.
        plugin_type: String,
        /// What was wrong: the actual key count or the value's shape.
        detail: String,
    },

    /// A key token is not a quoted string or bare identifier.
    #[error("invalid plugin key `{raw}`")]
    #[diagnostic(
        code(plinth::catalog::invalid_key_token),
        help("plugin type and name keys must be quoted strings or bare identifiers")
    )]
    InvalidKeyToken {
        /// The offending token as it was spelled.
        raw: String,
    },

    /// The same plugin was declared more than once.
    #[error("plugin {plugin_type}/{plugin_name} declared more than once")]
    #[diagnostic(
        code(plinth::catalog::duplicate_plugin),
        help("remove or merge the duplicate declaration")
    )]
    DuplicatePlugin {
        plugin_type: String,
        plugin_name: String,
    },

    /// A plugin's settings failed to decode.
    #[error("failed to decode settings for plugin {plugin_type}/{plugin_name}")]
    #[diagnostic(code(plinth::catalog::decode))]
    Decode {
        plugin_type: String,
        plugin_name: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

// SPDX-FileCopyrightText: 2026 Plinth Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Plugin declaration extraction for the Plinth plugin catalog.
//!
//! Walks a parsed configuration document's plugins section and produces a
//! flat, duplicate-free collection of typed plugin descriptors. Each
//! descriptor carries identity (type and name), how to load the plugin
//! (built-in, or external via a command path), and the plugin's own
//! configuration payload rendered as opaque text.
//!
//! Extraction is synchronous, read-only, and side-effect-free; independent
//! documents can be processed concurrently. The catalog component that
//! matches descriptors against registered plugin kinds and delivers the
//! payload lives elsewhere.
//!
//! # Usage
//!
//! ```
//! use plinth_catalog::plugin_configs_from_node;
//! use plinth_document::{KeyToken, KeyedEntry, Node};
//!
//! let plugins = Node::body(vec![KeyedEntry::new(
//!     vec![KeyToken::quoted("NodeAttestor"), KeyToken::quoted("join_token")],
//!     Node::block(vec![]),
//! )]);
//!
//! let configs = plugin_configs_from_node(Some(&plugins)).unwrap();
//! assert_eq!(configs.len(), 1);
//! ```

pub mod config;
pub mod decode;
pub mod error;
pub mod parse;

pub use config::{PluginConfig, PluginConfigs};
pub use decode::decode_plugin;
pub use error::CatalogError;
pub use parse::plugin_configs_from_node;

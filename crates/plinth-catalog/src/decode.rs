// SPDX-FileCopyrightText: 2026 Plinth Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Per-plugin settings decoding.
//!
//! A settings block carries a small recognized vocabulary (`plugin_cmd`,
//! `plugin_args`, `plugin_checksum`, `enabled`) plus an optional opaque
//! `plugin_data` payload. Recognized fields decode generically through
//! serde; everything else is ignored so plugins can extend their own
//! settings without breaking extraction.

use plinth_document::{Node, ObjectList};
use serde::Deserialize;

use crate::config::PluginConfig;
use crate::error::CatalogError;

/// Settings key holding the plugin's own free-form payload.
const PLUGIN_DATA_KEY: &str = "plugin_data";

/// Recognized settings fields, decoded generically.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawSettings {
    plugin_cmd: String,
    plugin_args: Vec<String>,
    plugin_checksum: String,
    enabled: Option<bool>,
}

impl RawSettings {
    fn is_enabled(&self) -> bool {
        self.enabled.unwrap_or(true)
    }
}

/// Decode one plugin's settings node into a [`PluginConfig`].
///
/// The payload under `plugin_data`, if any, is rendered to canonical text
/// and stored verbatim; it is never interpreted here.
pub fn decode_plugin(
    plugin_type: &str,
    plugin_name: &str,
    settings: &Node,
) -> Result<PluginConfig, CatalogError> {
    let body = match settings {
        Node::ObjectType(list) | Node::ObjectList(list) => list,
        other => {
            return Err(decode_error(
                plugin_type,
                plugin_name,
                format!("settings must be a block, got {}", other.kind_name()),
            ));
        }
    };

    let mut payload: Option<&Node> = None;
    let mut recognized = Vec::new();
    for entry in &body.items {
        let is_payload =
            entry.keys.len() == 1 && entry.keys[0].value() == Some(PLUGIN_DATA_KEY);
        if is_payload {
            payload = Some(&entry.value);
        } else {
            recognized.push(entry.clone());
        }
    }

    let raw: RawSettings =
        serde_json::from_value(Node::ObjectList(ObjectList::new(recognized)).to_json())
            .map_err(|e| decode_error(plugin_type, plugin_name, e))?;

    let data = match payload {
        Some(node) => node
            .to_canonical_text()
            .map_err(|e| decode_error(plugin_type, plugin_name, e))?,
        None => String::new(),
    };

    Ok(PluginConfig {
        plugin_type: plugin_type.to_string(),
        name: plugin_name.to_string(),
        disabled: !raw.is_enabled(),
        path: raw.plugin_cmd,
        args: raw.plugin_args,
        checksum: raw.plugin_checksum,
        data,
    })
}

fn decode_error(
    plugin_type: &str,
    plugin_name: &str,
    source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
) -> CatalogError {
    CatalogError::Decode {
        plugin_type: plugin_type.to_string(),
        plugin_name: plugin_name.to_string(),
        source: source.into(),
    }
}

// SPDX-FileCopyrightText: 2026 Plinth Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Walks the plugins node and extracts every declaration.
//!
//! Two authoring shapes are accepted and may be mixed in one document.
//! The verbose form puts the type and name on one entry:
//!
//! ```text
//! plugins {
//!     NodeAttestor "foo" {
//!         ...
//!     }
//! }
//! ```
//!
//! The compact form groups named settings under a single type key:
//!
//! ```text
//! plugins {
//!     "NodeAttestor" = {
//!         "foo" = { ... }
//!     }
//! }
//! ```
//!
//! The walk either yields one descriptor per declaration, in document order,
//! or fails on the first fault. Partial results are never returned.

use std::collections::HashSet;

use plinth_document::{KeyToken, Node};
use tracing::debug;

use crate::config::PluginConfigs;
use crate::decode::decode_plugin;
use crate::error::CatalogError;

/// Extract plugin descriptors from the root plugins node.
///
/// `root` is `None` when the document has no plugins section at all; that is
/// an [`CatalogError::InvalidRoot`] fault, as is any root that is not an
/// object list. A (type, name) pair declared twice, through either shape,
/// fails with [`CatalogError::DuplicatePlugin`].
pub fn plugin_configs_from_node(root: Option<&Node>) -> Result<PluginConfigs, CatalogError> {
    let root = root.ok_or(CatalogError::InvalidRoot { found: "absent" })?;
    let Node::ObjectList(entries) = root else {
        return Err(CatalogError::InvalidRoot {
            found: root.kind_name(),
        });
    };

    let mut seen: HashSet<(String, String)> = HashSet::new();
    let mut configs = PluginConfigs::new();

    for entry in &entries.items {
        let Some(type_token) = entry.keys.first() else {
            return Err(CatalogError::MalformedEntry {
                plugin_type: "<unkeyed>".to_string(),
                detail: "expected one or two keys, got 0".to_string(),
            });
        };
        let plugin_type = key_string(type_token)?;

        match entry.keys.len() {
            1 => {
                // Compact form: the value groups settings blocks by name.
                let Some(body) = entry.value.as_block_body() else {
                    return Err(CatalogError::MalformedEntry {
                        plugin_type,
                        detail: format!(
                            "single-key entry must hold a block of named plugins, got {}",
                            entry.value.kind_name()
                        ),
                    });
                };
                for named in &body.items {
                    let Some(name_token) = named.keys.first() else {
                        return Err(CatalogError::MalformedEntry {
                            plugin_type,
                            detail: "named plugin entry has no key".to_string(),
                        });
                    };
                    let plugin_name = key_string(name_token)?;
                    append_plugin(
                        &mut seen,
                        &mut configs,
                        plugin_type.clone(),
                        plugin_name,
                        &named.value,
                    )?;
                }
            }
            2 => {
                // Verbose form: type and name keys on the entry itself.
                let plugin_name = key_string(&entry.keys[1])?;
                append_plugin(&mut seen, &mut configs, plugin_type, plugin_name, &entry.value)?;
            }
            count => {
                return Err(CatalogError::MalformedEntry {
                    plugin_type,
                    detail: format!("expected one or two keys, got {count}"),
                });
            }
        }
    }

    Ok(configs)
}

/// Decode one (type, name) declaration and append it, rejecting repeats.
fn append_plugin(
    seen: &mut HashSet<(String, String)>,
    configs: &mut PluginConfigs,
    plugin_type: String,
    plugin_name: String,
    settings: &Node,
) -> Result<(), CatalogError> {
    if !seen.insert((plugin_type.clone(), plugin_name.clone())) {
        return Err(CatalogError::DuplicatePlugin {
            plugin_type,
            plugin_name,
        });
    }

    let config = decode_plugin(&plugin_type, &plugin_name, settings)?;
    debug!(
        %plugin_type,
        %plugin_name,
        external = config.is_external(),
        disabled = config.disabled,
        "extracted plugin declaration"
    );
    configs.push(config);
    Ok(())
}

fn key_string(token: &KeyToken) -> Result<String, CatalogError> {
    token
        .value()
        .map(str::to_string)
        .ok_or_else(|| CatalogError::InvalidKeyToken { raw: token.raw() })
}

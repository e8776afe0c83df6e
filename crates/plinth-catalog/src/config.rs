// SPDX-FileCopyrightText: 2026 Plinth Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Plugin descriptor types produced by extraction.

use serde::{Deserialize, Serialize};

/// The normalized result of parsing one plugin declaration.
///
/// The (`plugin_type`, `name`) pair is unique across any [`PluginConfigs`]
/// collection returned by extraction. A non-empty `path` marks the plugin as
/// externally loaded; an empty one means it is built in.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PluginConfig {
    /// Plugin kind, e.g. "NodeAttestor".
    pub plugin_type: String,
    /// Declared plugin name, unique within its type.
    pub name: String,
    /// Command path of an external plugin binary; empty for built-ins.
    pub path: String,
    /// Arguments passed to an external plugin binary, in declaration order.
    pub args: Vec<String>,
    /// Expected checksum of an external plugin binary.
    pub checksum: String,
    /// The plugin's own configuration payload, rendered as canonical text.
    /// Never interpreted here; handed to the plugin for its own decoding.
    pub data: String,
    /// Whether the declaration was explicitly disabled.
    pub disabled: bool,
}

impl PluginConfig {
    /// Whether the plugin should be loaded.
    pub fn is_enabled(&self) -> bool {
        !self.disabled
    }

    /// Whether the plugin is loaded out-of-process from a command path.
    pub fn is_external(&self) -> bool {
        !self.path.is_empty()
    }
}

/// An ordered, duplicate-free collection of plugin descriptors.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PluginConfigs(Vec<PluginConfig>);

impl PluginConfigs {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub(crate) fn push(&mut self, config: PluginConfig) {
        self.0.push(config);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PluginConfig> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Split into the descriptors matching `plugin_type` and the rest,
    /// preserving order on both sides.
    pub fn filter_by_type(&self, plugin_type: &str) -> (PluginConfigs, PluginConfigs) {
        let (matching, remaining) = self
            .0
            .iter()
            .cloned()
            .partition(|c| c.plugin_type == plugin_type);
        (PluginConfigs(matching), PluginConfigs(remaining))
    }

    /// Look up a descriptor by type and name.
    pub fn find(&self, plugin_type: &str, name: &str) -> Option<&PluginConfig> {
        self.0
            .iter()
            .find(|c| c.plugin_type == plugin_type && c.name == name)
    }
}

impl IntoIterator for PluginConfigs {
    type Item = PluginConfig;
    type IntoIter = std::vec::IntoIter<PluginConfig>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a PluginConfigs {
    type Item = &'a PluginConfig;
    type IntoIter = std::slice::Iter<'a, PluginConfig>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<PluginConfig> for PluginConfigs {
    fn from_iter<T: IntoIterator<Item = PluginConfig>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

// SPDX-FileCopyrightText: 2026 Plinth Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration tests for plugin declaration extraction.

use plinth_catalog::{plugin_configs_from_node, CatalogError, PluginConfig};
use plinth_document::{KeyToken, KeyedEntry, Node};
use serde_json::json;

fn setting(key: &str, value: Node) -> KeyedEntry {
    KeyedEntry::new(vec![KeyToken::bare(key)], value)
}

fn verbose(plugin_type: &str, name: &str, settings: Node) -> KeyedEntry {
    KeyedEntry::new(
        vec![KeyToken::quoted(plugin_type), KeyToken::quoted(name)],
        settings,
    )
}

fn compact(plugin_type: &str, named: Vec<(&str, Node)>) -> KeyedEntry {
    KeyedEntry::new(
        vec![KeyToken::quoted(plugin_type)],
        Node::block(
            named
                .into_iter()
                .map(|(name, settings)| {
                    KeyedEntry::new(vec![KeyToken::quoted(name)], settings)
                })
                .collect(),
        ),
    )
}

/// The worked example: `NodeAttestor "foo" { plugin_cmd = "/bin/x",
/// plugin_args = ["--a"], enabled = false }`.
#[test]
fn verbose_declaration_extracts_full_descriptor() {
    let root = Node::body(vec![verbose(
        "NodeAttestor",
        "foo",
        Node::block(vec![
            setting("plugin_cmd", Node::string("/bin/x")),
            setting("plugin_args", Node::string_list(["--a"])),
            setting("enabled", Node::scalar(false)),
        ]),
    )]);

    let configs = plugin_configs_from_node(Some(&root)).unwrap();
    assert_eq!(configs.len(), 1);

    let config = configs.find("NodeAttestor", "foo").unwrap();
    assert_eq!(
        config,
        &PluginConfig {
            plugin_type: "NodeAttestor".to_string(),
            name: "foo".to_string(),
            path: "/bin/x".to_string(),
            args: vec!["--a".to_string()],
            checksum: String::new(),
            data: String::new(),
            disabled: true,
        }
    );
    assert!(config.is_external());
    assert!(!config.is_enabled());
}

#[test]
fn compact_declaration_extracts_one_descriptor_per_name() {
    let root = Node::body(vec![compact(
        "NodeAttestor",
        vec![
            ("join_token", Node::block(vec![])),
            ("x509pop", Node::block(vec![])),
        ],
    )]);

    let configs = plugin_configs_from_node(Some(&root)).unwrap();
    let pairs: Vec<(&str, &str)> = configs
        .iter()
        .map(|c| (c.plugin_type.as_str(), c.name.as_str()))
        .collect();
    assert_eq!(
        pairs,
        [("NodeAttestor", "join_token"), ("NodeAttestor", "x509pop")]
    );
}

#[test]
fn mixed_shapes_preserve_document_order() {
    let root = Node::body(vec![
        verbose("KeyManager", "memory", Node::block(vec![])),
        compact("NodeAttestor", vec![("join_token", Node::block(vec![]))]),
        verbose("Notifier", "k8sbundle", Node::block(vec![])),
    ]);

    let configs = plugin_configs_from_node(Some(&root)).unwrap();
    let types: Vec<&str> = configs.iter().map(|c| c.plugin_type.as_str()).collect();
    assert_eq!(types, ["KeyManager", "NodeAttestor", "Notifier"]);
}

#[test]
fn duplicate_across_mixed_shapes_is_rejected() {
    let root = Node::body(vec![
        compact("NodeAttestor", vec![("foo", Node::block(vec![]))]),
        verbose("NodeAttestor", "foo", Node::block(vec![])),
    ]);

    let err = plugin_configs_from_node(Some(&root)).unwrap_err();
    match err {
        CatalogError::DuplicatePlugin {
            plugin_type,
            plugin_name,
        } => {
            assert_eq!(plugin_type, "NodeAttestor");
            assert_eq!(plugin_name, "foo");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn bare_identifier_keys_work_in_both_positions() {
    let root = Node::body(vec![KeyedEntry::new(
        vec![KeyToken::bare("NodeAttestor"), KeyToken::bare("foo")],
        Node::block(vec![]),
    )]);

    let configs = plugin_configs_from_node(Some(&root)).unwrap();
    assert!(configs.find("NodeAttestor", "foo").is_some());
}

#[test]
fn absent_enabled_defaults_to_not_disabled() {
    let root = Node::body(vec![verbose("KeyManager", "disk", Node::block(vec![]))]);
    let configs = plugin_configs_from_node(Some(&root)).unwrap();
    assert!(!configs.find("KeyManager", "disk").unwrap().disabled);
}

/// Payload text must decode back to the structure that was declared.
#[test]
fn payload_round_trips_through_a_serde_decoder() {
    let payload = Node::block(vec![
        setting("trust_domain", Node::string("example.org")),
        setting("allowed_claims", Node::string_list(["sub", "aud"])),
        KeyedEntry::new(
            vec![KeyToken::bare("template"), KeyToken::quoted("leaf")],
            Node::block(vec![setting("ttl", Node::string("1h"))]),
        ),
    ]);
    let root = Node::body(vec![verbose(
        "NodeAttestor",
        "jwt",
        Node::block(vec![setting("plugin_data", payload)]),
    )]);

    let configs = plugin_configs_from_node(Some(&root)).unwrap();
    let data = &configs.find("NodeAttestor", "jwt").unwrap().data;

    let decoded: serde_json::Value = serde_json::from_str(data).unwrap();
    assert_eq!(
        decoded,
        json!({
            "trust_domain": "example.org",
            "allowed_claims": ["sub", "aud"],
            "template": {"leaf": {"ttl": "1h"}},
        })
    );
}

#[test]
fn three_key_entry_reports_key_count() {
    let root = Node::body(vec![KeyedEntry::new(
        vec![
            KeyToken::quoted("NodeAttestor"),
            KeyToken::quoted("foo"),
            KeyToken::quoted("bar"),
        ],
        Node::block(vec![]),
    )]);

    let err = plugin_configs_from_node(Some(&root)).unwrap_err();
    assert!(matches!(err, CatalogError::MalformedEntry { .. }));
    assert!(err.to_string().contains("got 3"));
    assert!(err.to_string().contains("NodeAttestor"));
}

#[test]
fn failure_returns_no_partial_results() {
    let root = Node::body(vec![
        verbose("KeyManager", "memory", Node::block(vec![])),
        verbose("KeyManager", "memory", Node::block(vec![])),
    ]);

    // The first declaration was valid, but the result is all-or-nothing.
    assert!(plugin_configs_from_node(Some(&root)).is_err());
}

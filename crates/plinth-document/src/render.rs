// SPDX-FileCopyrightText: 2026 Plinth Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Canonical text rendering of document subtrees.
//!
//! Opaque configuration payloads are carried through the catalog as text and
//! decoded later by the plugin they belong to. The canonical form is
//! pretty-printed JSON: multi-key entries nest (`template "x" { .. }` becomes
//! `{"template": {"x": { .. }}}`) and repeated object keys merge, matching
//! how block syntax maps onto structured data. Any serde deserializer can
//! reconstruct the structure from the rendered text.

use serde_json::{Map, Value};

use crate::node::{Node, ObjectList, Scalar};

impl Node {
    /// Convert this subtree into a structured [`serde_json::Value`].
    pub fn to_json(&self) -> Value {
        match self {
            Node::ObjectList(list) | Node::ObjectType(list) => {
                Value::Object(object_list_to_json(list))
            }
            Node::Scalar(scalar) => scalar_to_json(scalar),
            Node::List(items) => Value::Array(items.iter().map(Node::to_json).collect()),
        }
    }

    /// Render this subtree as canonical pretty-printed text.
    pub fn to_canonical_text(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.to_json())
    }
}

fn scalar_to_json(scalar: &Scalar) -> Value {
    match scalar {
        Scalar::String(s) => Value::String(s.clone()),
        Scalar::Int(i) => Value::Number((*i).into()),
        // Non-finite floats have no JSON representation and render as null.
        Scalar::Float(f) => serde_json::Number::from_f64(*f)
            .map(Value::Number)
            .unwrap_or(Value::Null),
        Scalar::Bool(b) => Value::Bool(*b),
    }
}

fn object_list_to_json(list: &ObjectList) -> Map<String, Value> {
    let mut map = Map::new();
    for entry in &list.items {
        let keys: Vec<&str> = entry.keys.iter().map(|k| k.text.as_str()).collect();
        if keys.is_empty() {
            continue;
        }
        insert_nested(&mut map, &keys, entry.value.to_json());
    }
    map
}

/// Insert `value` at the key path, wrapping trailing keys in nested objects.
fn insert_nested(map: &mut Map<String, Value>, keys: &[&str], value: Value) {
    let key = keys[0];
    if keys.len() == 1 {
        merge_insert(map, key, value);
        return;
    }
    let mut nested = Map::new();
    insert_nested(&mut nested, &keys[1..], value);
    merge_insert(map, key, Value::Object(nested));
}

/// Insert under `key`, merging when both old and new values are objects.
/// Anything else is replaced by the later declaration.
fn merge_insert(map: &mut Map<String, Value>, key: &str, value: Value) {
    match value {
        Value::Object(new) => match map.get_mut(key) {
            Some(Value::Object(existing)) => {
                for (k, v) in new {
                    merge_insert(existing, &k, v);
                }
            }
            _ => {
                map.insert(key.to_string(), Value::Object(new));
            }
        },
        other => {
            map.insert(key.to_string(), other);
        }
    }
}

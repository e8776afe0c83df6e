// SPDX-FileCopyrightText: 2026 Plinth Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Generic configuration-document node model for the Plinth plugin catalog.
//!
//! An upstream structured-config parser produces a tree of keyed blocks.
//! This crate holds the in-memory representation of that tree ([`Node`],
//! [`KeyedEntry`], [`KeyToken`]) plus canonical text rendering of arbitrary
//! subtrees, so consumers can pass free-form configuration payloads through
//! untouched. It performs no I/O and never parses raw text itself.

pub mod key;
pub mod node;
pub mod render;

pub use key::{KeyKind, KeyToken};
pub use node::{KeyedEntry, Node, ObjectList, Scalar};

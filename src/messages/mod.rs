// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Client/server messages emitted from management plugins.
//!
//! Many independent plugins report facts about managed nodes (power status,
//! attribute values). Everything they emit converges on one canonical shape
//! here so that clients, logs, and UI tooling consume a uniform model, and
//! so that secret-bearing values are redacted once, at construction, where
//! no downstream code path can forget to do it.
//!
//! A message starts out *keyed*: a mapping from node id to that node's
//! fact-set. A consumer may narrow it to a single node's fact-set with
//! [`Message::strip_node`], then render it either as canonical compact JSON
//! ([`Message::to_json`]) or as an editable HTML fragment for the API
//! explorer ([`Message::to_html`]).

mod markup;
mod value;

#[cfg(test)]
mod integration_tests;

pub use value::{FactSet, Value};

use std::collections::BTreeMap;

use serde::Serialize;

use crate::errors::MessageError;
use crate::observability::messages::message::{
    FactsetRedacted, NodeStripped, UnknownNodeRequested,
};

/// Placeholder stored in place of every value of a secret-bearing fact-set.
///
/// Substituted unconditionally at construction; the original values are
/// discarded and unrecoverable from the message.
pub const ENCRYPTED_VALUE: &str = "*****ENCRYPTEDVALUE*****";

/// The attribute name under which a power-state report stores its status.
pub const POWER_STATE_KEY: &str = "powerstate";

/// The two shapes a message payload can take over its lifetime.
///
/// Construction always produces `Keyed`; [`Message::strip_node`] is the
/// only transition to `Narrowed`, and there is no way back.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Payload {
    /// Node id mapped to that node's fact-set, as constructed.
    Keyed(BTreeMap<String, FactSet>),
    /// A single node's fact-set, after the node-keyed wrapper was stripped.
    Narrowed(FactSet),
}

/// A fact report about one or more managed nodes.
///
/// The payload field is private and every constructor establishes it, so
/// a message with no payload cannot be built. Producers pick the
/// constructor matching what they report:
///
/// * [`Message::power_state`] - a node's power status
/// * [`Message::attributes`] - a node's attribute values, stored verbatim
/// * [`Message::crypted_attributes`] - secret-bearing attribute values,
///   redacted before storage
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Message {
    payload: Payload,
}

impl Message {
    /// Build a power-state report: `{node: {"powerstate": state}}`.
    ///
    /// The state string is opaque pass-through. Validating it against the
    /// set of legal power states is the producing plugin's job, not this
    /// layer's.
    pub fn power_state(node: impl Into<String>, state: impl Into<String>) -> Self {
        let mut facts = FactSet::new();
        facts.insert(POWER_STATE_KEY.to_string(), Value::Text(state.into()));
        Self::keyed(node.into(), facts)
    }

    /// Build an attribute report: `{node: attributes}`.
    ///
    /// Takes ownership of the fact-set, so the caller cannot mutate what
    /// the message will later serialize.
    pub fn attributes(node: impl Into<String>, attributes: FactSet) -> Self {
        Self::keyed(node.into(), attributes)
    }

    /// Build an attribute report whose values are secrets.
    ///
    /// Every value in the fact-set is replaced with [`ENCRYPTED_VALUE`]
    /// before storage, whatever its original content or nesting. Only the
    /// attribute names survive. There is no selective redaction: callers
    /// route a fact-set through this constructor when any of it is secret.
    pub fn crypted_attributes(node: impl Into<String>, attributes: FactSet) -> Self {
        let node = node.into();
        let redacted: FactSet = attributes
            .into_keys()
            .map(|name| (name, Value::Text(ENCRYPTED_VALUE.to_string())))
            .collect();
        tracing::debug!(
            "{}",
            FactsetRedacted {
                node: &node,
                attribute_count: redacted.len(),
            }
        );
        Self::keyed(node, redacted)
    }

    fn keyed(node: String, facts: FactSet) -> Self {
        let mut nodes = BTreeMap::new();
        nodes.insert(node, facts);
        Message {
            payload: Payload::Keyed(nodes),
        }
    }

    /// The current payload shape, for consumers that need to inspect the
    /// stored facts rather than render them.
    pub fn payload(&self) -> &Payload {
        &self.payload
    }

    /// Canonical compact JSON encoding of the current payload level.
    ///
    /// No whitespace between tokens. Key order is not part of the
    /// contract; any standard JSON decoder reads the output back to equal
    /// key/value sets. Read-only: encoding twice on an unmutated message
    /// yields identical output.
    pub fn to_json(&self) -> Result<String, MessageError> {
        Ok(serde_json::to_string(&self.payload)?)
    }

    /// Narrow this message to `node`'s fact-set, discarding the node-keyed
    /// wrapper and any other nodes' data. Irreversible.
    ///
    /// # Errors
    ///
    /// * [`MessageError::UnknownNode`] if `node` is not a key in the keyed
    ///   payload.
    /// * [`MessageError::AlreadyNarrowed`] if the wrapper was already
    ///   stripped by an earlier call.
    pub fn strip_node(&mut self, node: &str) -> Result<(), MessageError> {
        match &mut self.payload {
            Payload::Keyed(nodes) => match nodes.remove(node) {
                Some(facts) => {
                    tracing::debug!(
                        "{}",
                        NodeStripped {
                            node,
                            fact_count: facts.len(),
                        }
                    );
                    self.payload = Payload::Narrowed(facts);
                    Ok(())
                }
                None => {
                    tracing::warn!("{}", UnknownNodeRequested { node });
                    Err(MessageError::UnknownNode {
                        node: node.to_string(),
                    })
                }
            },
            Payload::Narrowed(_) => Err(MessageError::AlreadyNarrowed),
        }
    }

    /// Render the current payload level as an editable HTML fragment for
    /// the API explorer.
    ///
    /// Emits `key:<input type="text" name="KEY" value="VALUE">` once per
    /// key, with keys and values escaped. A key whose value is a nested
    /// map (for example a node's whole fact-set on an un-narrowed message)
    /// gets that map's compact JSON in the value slot; no key is skipped.
    /// Never panics and touches no I/O.
    pub fn to_html(&self) -> String {
        match &self.payload {
            Payload::Keyed(nodes) => markup::form_fragment(
                nodes
                    .iter()
                    .map(|(node, facts)| (node.as_str(), Value::Map(facts.clone()).render_text())),
            ),
            Payload::Narrowed(facts) => markup::form_fragment(
                facts
                    .iter()
                    .map(|(name, value)| (name.as_str(), value.render_text())),
            ),
        }
    }
}

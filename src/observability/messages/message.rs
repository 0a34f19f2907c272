// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for message construction, redaction, and scoping events.
//!
//! This module contains message types for logging events related to:
//! * Secret-bearing fact-set redaction at construction
//! * Scoping a message down to a single node's fact-set
//! * Scoping requests for nodes the message does not carry

use std::fmt::{Display, Formatter};

/// A secret-bearing fact-set was redacted at construction.
///
/// # Log Level
/// `debug!` - Routine construction event
///
/// # Example
/// ```
/// use nodefacts::observability::messages::message::FactsetRedacted;
///
/// let msg = FactsetRedacted {
///     node: "n1",
///     attribute_count: 2,
/// };
///
/// tracing::debug!("{}", msg);
/// ```
pub struct FactsetRedacted<'a> {
    pub node: &'a str,
    pub attribute_count: usize,
}

impl Display for FactsetRedacted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Redacted {} attribute value(s) for node '{}'",
            self.attribute_count, self.node
        )
    }
}

/// A message was narrowed to a single node's fact-set.
///
/// # Log Level
/// `debug!` - Routine scoping event
///
/// # Example
/// ```
/// use nodefacts::observability::messages::message::NodeStripped;
///
/// let msg = NodeStripped {
///     node: "n1",
///     fact_count: 3,
/// };
///
/// tracing::debug!("{}", msg);
/// ```
pub struct NodeStripped<'a> {
    pub node: &'a str,
    pub fact_count: usize,
}

impl Display for NodeStripped<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Message narrowed to node '{}': {} fact(s) retained",
            self.node, self.fact_count
        )
    }
}

/// A scoping request named a node the message does not carry.
///
/// # Log Level
/// `warn!` - Caller error worth surfacing in logs
///
/// # Example
/// ```
/// use nodefacts::observability::messages::message::UnknownNodeRequested;
///
/// let msg = UnknownNodeRequested { node: "n404" };
///
/// tracing::warn!("{}", msg);
/// ```
pub struct UnknownNodeRequested<'a> {
    pub node: &'a str,
}

impl Display for UnknownNodeRequested<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Requested node '{}' is not present in message", self.node)
    }
}

// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Error types for message construction and rendering.
//!
//! All errors implement `std::error::Error` via the `thiserror` crate for
//! consistent error handling. Failures surface to the producing plugin or
//! the consuming API layer; nothing is retried inside the message layer.

use thiserror::Error;

/// Errors that can occur while scoping or encoding a message.
///
/// Direct construction of a message without going through one of the
/// concrete constructors has no error variant here: the payload field is
/// private, so that misuse does not compile.
#[derive(Error, Debug)]
pub enum MessageError {
    /// The requested node id is not a key in the message's keyed payload.
    #[error("node '{node}' is not present in this message")]
    UnknownNode { node: String },

    /// The message was already narrowed to a single node's fact-set, so
    /// there is no node-keyed level left to scope into.
    #[error("message is already narrowed to a single node's fact-set")]
    AlreadyNarrowed,

    /// The payload failed to encode as JSON. Unreachable for payloads built
    /// from [`Value`](crate::messages::Value), which only holds strings and
    /// string-keyed maps, but kept so encoder signatures stay honest.
    #[error("failed to encode message payload: {0}")]
    Encoding(#[from] serde_json::Error),
}

// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Observability module for structured logging.
//!
//! This module provides centralized message types for diagnostic logging
//! throughout the crate. Message types follow a struct-based pattern with
//! `Display` trait implementation to:
//!
//! * Eliminate magic strings scattered throughout the codebase
//! * Enable future internationalization without code changes
//! * Provide consistent, structured logging output
//!
//! # Usage
//!
//! ```rust
//! use nodefacts::observability::messages::message::NodeStripped;
//!
//! let msg = NodeStripped {
//!     node: "n1",
//!     fact_count: 3,
//! };
//!
//! tracing::debug!("{}", msg);
//! ```

pub mod messages;

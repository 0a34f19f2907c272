// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod errors;        // error handling
pub mod messages;      // plugin-emitted node state messages
pub mod observability; // structured log message types

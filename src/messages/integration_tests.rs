// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! End-to-end tests exercising the full message lifecycle: construction by
//! a producer, scoping to one node, and rendering in both output forms.

use super::*;

/// Helper to build a fact-set from string pairs.
fn factset(pairs: &[(&str, &str)]) -> FactSet {
    pairs
        .iter()
        .map(|(name, value)| (name.to_string(), Value::from(*value)))
        .collect()
}

#[test]
fn test_power_state_report_lifecycle() {
    let mut message = Message::power_state("compute-04", "reset");

    // Canonical form first, as a client would receive it.
    let decoded: serde_json::Value = serde_json::from_str(&message.to_json().unwrap()).unwrap();
    assert_eq!(decoded, serde_json::json!({"compute-04": {"powerstate": "reset"}}));

    // Narrow for the per-node API explorer view.
    message.strip_node("compute-04").unwrap();
    let snippet = message.to_html();
    assert_eq!(
        snippet,
        r#"powerstate:<input type="text" name="powerstate" value="reset">"#
    );
}

#[test]
fn test_attribute_report_lifecycle() {
    let mut message = Message::attributes(
        "compute-05",
        factset(&[("console.method", "ipmi"), ("hardwaremanagement.port", "623")]),
    );

    let decoded: serde_json::Value = serde_json::from_str(&message.to_json().unwrap()).unwrap();
    assert_eq!(
        decoded,
        serde_json::json!({
            "compute-05": {
                "console.method": "ipmi",
                "hardwaremanagement.port": "623",
            }
        })
    );

    message.strip_node("compute-05").unwrap();
    let snippet = message.to_html();
    assert_eq!(snippet.matches("<input").count(), 2);
    assert!(snippet
        .contains(r#"console.method:<input type="text" name="console.method" value="ipmi">"#));
}

#[test]
fn test_secret_values_never_reach_either_rendering() {
    let mut message = Message::crypted_attributes(
        "compute-06",
        factset(&[("bmcpass", "s3cret"), ("snmpcommunity", "internal")]),
    );

    assert!(!message.to_json().unwrap().contains("s3cret"));
    assert!(!message.to_html().contains("s3cret"));

    message.strip_node("compute-06").unwrap();
    assert!(!message.to_json().unwrap().contains("s3cret"));
    let snippet = message.to_html();
    assert!(!snippet.contains("internal"));
    assert_eq!(snippet.matches(ENCRYPTED_VALUE).count(), 2);
}

#[test]
fn test_markup_injection_is_neutralized() {
    let mut message = Message::attributes(
        "compute-07",
        factset(&[("motd", r#""><script>alert(1)</script>"#)]),
    );
    message.strip_node("compute-07").unwrap();

    let snippet = message.to_html();
    assert!(!snippet.contains("<script>"));
    assert_eq!(snippet.matches("<input").count(), 1);
}

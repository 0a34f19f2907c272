// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::env;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use nodefacts::messages::{FactSet, Message, Value};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 3 {
        eprintln!("Usage: {} <node> <powerstate> [name=value ...]", args[0]);
        eprintln!("Example: {} compute-04 on console.method=ipmi bmcpass=s3cret", args[0]);
        std::process::exit(1);
    }

    let node = &args[1];
    let state = &args[2];
    let attributes: FactSet = args[3..]
        .iter()
        .map(|pair| match pair.split_once('=') {
            Some((name, value)) => (name.to_string(), Value::from(value)),
            None => (pair.clone(), Value::from("")),
        })
        .collect();

    let power = Message::power_state(node, state);
    println!("power state report");
    println!("  json: {}", power.to_json()?);
    println!("  html: {}", power.to_html());

    if !attributes.is_empty() {
        let plain = Message::attributes(node, attributes.clone());
        println!("attribute report");
        println!("  json: {}", plain.to_json()?);
        println!("  html: {}", plain.to_html());

        let crypted = Message::crypted_attributes(node, attributes);
        println!("crypted attribute report");
        println!("  json: {}", crypted.to_json()?);
        println!("  html: {}", crypted.to_html());
    }

    // The per-node view a client sees after scoping.
    let mut scoped = Message::power_state(node, state);
    scoped.strip_node(node)?;
    println!("scoped to '{}'", node);
    println!("  json: {}", scoped.to_json()?);
    println!("  html: {}", scoped.to_html());

    Ok(())
}

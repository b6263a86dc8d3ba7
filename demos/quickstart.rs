/// Quickstart example - each transform on a small data set
///
/// Run with `RUST_LOG=reshape=trace cargo run --example quickstart` to see
/// normalization and cache tracing.
use reshape::{
    array_to_object_deep, count_tree_leaf_nodes, get_cached_value, get_tree_depth,
    normalize_object, pairs_from_value, to_array, Record, TreeNode,
};
use serde_json::json;
use std::collections::HashMap;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Reshape Quick Start ===\n");

    // Step 1: Normalize a nested record
    let user: Record = serde_json::from_value(json!({
        "id": 1,
        "name": "John",
        "car": {
            "id": 33,
            "manufacturer": "Ford",
            "engine": {"id": 7, "cylinders": 8}
        }
    }))?;

    let normalized = normalize_object(&user)?;
    println!("Normalized:");
    println!("{}\n", serde_json::to_string_pretty(&normalized)?);

    // Step 2: Record of records to a keyed list
    let catalog: Record = serde_json::from_value(json!({
        "a": {"name": "X"},
        "b": {"name": "Y"}
    }))?;
    println!("to_array:");
    println!("{}\n", serde_json::to_string_pretty(&to_array(&catalog)?)?);

    // Step 3: Nested pairs to nested records
    let pairs = pairs_from_value(&json!([
        ["name", "John"],
        ["address", [["city", "Rome"], ["zip", "00100"]]]
    ]))?;
    println!("array_to_object_deep:");
    println!("{}\n", serde_json::to_string_pretty(&array_to_object_deep(pairs))?);

    // Step 4: Memoize an expensive lookup
    let mut cache = HashMap::new();
    let mut lookups = 0;
    for _ in 0..3 {
        get_cached_value(
            "answer",
            |_| {
                lookups += 1;
                json!(42)
            },
            &mut cache,
        );
    }
    println!("Cached lookups: 3 requests, {} computation(s)\n", lookups);

    // Step 5: Tree queries
    let tree = TreeNode::from_value(json!({
        "value": "A",
        "children": [
            {"value": "B", "children": [{"value": "E"}, {"value": "F"}]},
            {"value": "C"},
            {"value": "D"}
        ]
    }))?;
    println!(
        "Tree depth: {}, leaves: {}",
        get_tree_depth(&tree),
        count_tree_leaf_nodes(&tree)
    );

    Ok(())
}

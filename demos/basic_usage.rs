//! Basic usage example for cityradius
//!
//! This example demonstrates how to:
//! - Load the bundled city data
//! - Check names before querying
//! - Run a radius query and read the result

use cityradius_rs::prelude::*;

fn main() -> Result<()> {
    println!("=== cityradius Basic Usage Example ===\n");

    println!("Loading city data...");
    let store = PointStore::load_from_path(PointStore::default_dataset_path())?;
    let stats = store.stats();
    println!("✓ Loaded {} cities", stats.cities);
    if let Some(extent) = stats.extent {
        println!(
            "  Extent: ({}, {}) .. ({}, {})\n",
            extent.min.x, extent.min.y, extent.max.x, extent.max.y
        );
    }

    // Example 1: Name checks
    println!("--- Example 1: Name lookup ---");
    for name in ["Ashford", "Atlantis"] {
        match store.locate(name) {
            Ok(p) => println!("  {name} is at ({}, {})", p.x, p.y),
            Err(e) => println!("  {e}"),
        }
    }
    println!();

    // Example 2: Radius query with a numeric metric id
    println!("--- Example 2: Cities within 6 of Ashford (euclidean) ---");
    let res = find_nearby(&store, "Ashford", 6.0, 0)?;
    println!("Found: {}, east of Ashford: {}", res.total_found, res.east_count);
    for n in &res {
        println!("  {:<10} {:.3}", n.name, n.distance);
    }
    println!();

    // Example 3: Substring search
    println!("--- Example 3: Names containing 'ford' ---");
    for c in store.find_by_substring("ford") {
        println!("  {} ({}, {})", c.name, c.x(), c.y());
    }

    Ok(())
}

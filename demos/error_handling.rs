//! Error handling example for cityradius
//!
//! Load-time errors are fatal to the store; query-time errors leave it
//! untouched.

use cityradius_rs::prelude::*;

fn main() -> Result<()> {
    println!("=== cityradius Error Handling Example ===\n");

    // Example 1: Load errors
    println!("--- Example 1: Loading broken sources ---");
    let sources: [(&str, &[u8]); 2] = [
        ("empty", b""),
        ("malformed", b"Alpha\n1 , 2\nBeta\n3 4\n"),
    ];
    for (label, bytes) in sources {
        match PointStore::load_from_reader(bytes) {
            Ok(store) => println!("  {label}: loaded {} cities", store.len()),
            Err(e) => println!("  {label}: ✗ {e}"),
        }
    }
    match PointStore::load_from_path("does/not/exist.txt") {
        Ok(_) => println!("  missing file: loaded?"),
        Err(e) => println!("  missing file: ✗ {e}"),
    }
    println!();

    let store = PointStore::load_from_path(PointStore::default_dataset_path())?;

    // Example 2: Query errors, each recoverable
    println!("--- Example 2: Invalid queries ---");
    let queries = [("Atlantis", 5.0, 0), ("Ashford", -1.0, 0), ("Ashford", 5.0, 3)];
    for (city, radius, metric) in queries {
        match find_nearby(&store, city, radius, metric) {
            Ok(res) => println!("  {city}: {} found", res.total_found),
            Err(QueryError::CityNotFound(name)) => println!("  unknown city {name:?}"),
            Err(e) => println!("  {city}: ✗ {e}"),
        }
    }
    println!();

    // Example 3: The store is still fine
    println!("--- Example 3: Retry with corrected input ---");
    let res = find_nearby(&store, "Ashford", 5.0, 2)?;
    println!("  Ashford: {} found, {} to the east", res.total_found, res.east_count);

    Ok(())
}

//! Compares the three distance metrics on the same query.
//!
//! The bounding square is the same for all of them; only its corners are
//! treated differently.

use cityradius_rs::prelude::*;

fn main() -> Result<()> {
    let store = PointStore::load_from_path(PointStore::default_dataset_path())?;
    let city = "Kingsbury";
    let radius = 12.0;

    let center = store.locate(city)?;
    let square = store.bounding_square(center, radius);
    println!("{city}: {} cities inside the bounding square (r = {radius})\n", square.len());

    for metric in Metric::ALL {
        let res = store.search_nearby(city, radius, metric)?;
        println!("{metric:>9}: {} found, {} to the east", res.total_found, res.east_count);
        for n in &res {
            println!("           {:<10} {:.3}", n.name, n.distance);
        }
    }

    Ok(())
}

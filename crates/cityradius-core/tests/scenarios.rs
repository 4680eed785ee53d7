use cityradius_core::prelude::*;

fn square() -> PointStore {
    let data = "A\n0 , 0\nB\n3 , 0\nC\n0 , 4\nD\n3 , 4\n";
    PointStore::load_from_reader(data.as_bytes()).unwrap()
}

fn distances(res: &QueryResult) -> Vec<(&str, f64)> {
    res.iter().map(|n| (n.name.as_str(), n.distance)).collect()
}

#[test]
fn euclidean_radius_five() {
    let res = find_nearby(&square(), "A", 5.0, 0).unwrap();

    assert_eq!(distances(&res), [("B", 3.0), ("C", 4.0), ("D", 5.0)]);
    assert_eq!(res.total_found, 3);
    assert_eq!(res.east_count, 2);
}

#[test]
fn chebyshev_radius_three() {
    let res = find_nearby(&square(), "A", 3.0, 1).unwrap();

    assert_eq!(distances(&res), [("B", 3.0)]);
    assert_eq!(res.total_found, 1);
    assert_eq!(res.east_count, 1);
}

#[test]
fn manhattan_excludes_far_corner() {
    let res = find_nearby(&square(), "A", 5.0, 2).unwrap();

    assert_eq!(distances(&res), [("B", 3.0), ("C", 4.0)]);
    assert_eq!(res.east_count, 1);
}

#[test]
fn unknown_city_leaves_store_usable() {
    let store = square();

    let err = find_nearby(&store, "Z", 5.0, 0).unwrap_err();
    assert_eq!(err, QueryError::CityNotFound("Z".into()));

    let res = find_nearby(&store, "D", 3.0, 0).unwrap();
    assert_eq!(res.names(), ["C"]);
}

#[test]
fn validation_order() {
    let store = square();
    // name first, even with every other argument invalid
    assert_eq!(
        find_nearby(&store, "nope", -1.0, 9),
        Err(QueryError::CityNotFound("nope".into()))
    );
    assert_eq!(find_nearby(&store, "A", -1.0, 9), Err(QueryError::InvalidRadius(-1.0)));
    assert_eq!(find_nearby(&store, "A", 1.0, 9), Err(QueryError::InvalidMetric(9)));
    assert_eq!(find_nearby(&store, "A", 1.0, -1), Err(QueryError::InvalidMetric(-1)));
}

#[test]
fn empty_source_fails() {
    let err = PointStore::load_from_reader(&b""[..]).unwrap_err();
    assert!(matches!(err, IngestError::EmptySource));
}

#[test]
fn zero_radius_finds_only_coincident_cities() {
    let data = "A\n1 , 1\nTwin\n1 , 1\nB\n1 , 1.5\n";
    let store = PointStore::load_from_reader(data.as_bytes()).unwrap();

    for metric in Metric::ALL {
        let res = store.search_nearby("A", 0.0, metric).unwrap();
        assert_eq!(distances(&res), [("Twin", 0.0)]);
        assert_eq!(res.east_count, 0);
    }
}

#[test]
fn coincident_city_is_kept_and_self_is_dropped() {
    // "A" sorts after "0-twin", so dropping the first entry would lose the twin
    let data = "A\n2 , 2\n0-twin\n2 , 2\nB\n3 , 2\n";
    let store = PointStore::load_from_reader(data.as_bytes()).unwrap();

    let res = find_nearby(&store, "A", 1.0, 0).unwrap();
    assert_eq!(res.names(), ["0-twin", "B"]);
    assert!(!res.names().contains(&"A"));
    assert_eq!(res.total_found, 2);
}

#[test]
fn city_exactly_on_the_euclidean_radius_is_found() {
    let (dx, dy) = (24.3581381717623_f64, 74.992180462352_f64);
    let data = format!("Q\n0 , 0\nP\n{dx} , {dy}\n");
    let store = PointStore::load_from_reader(data.as_bytes()).unwrap();

    // sqrt of the squared sum; hypot rounds this pair one ulp higher
    let radius = (dx * dx + dy * dy).sqrt();

    let res = find_nearby(&store, "Q", radius, 0).unwrap();
    assert_eq!(res.names(), ["P"]);
    assert_eq!(res.cities[0].distance, radius);
    assert_eq!(res.east_count, 1);
}

#[test]
fn infinite_radius_returns_everyone_else() {
    let store = square();
    let res = store.search_nearby("C", f64::INFINITY, Metric::Manhattan).unwrap();
    assert_eq!(res.names(), ["D", "A", "B"]);
    assert_eq!(res.east_count, 2);
}

#[test]
fn equal_distances_are_ordered_by_name() {
    let data = "O\n0 , 0\nw\n-1 , 0\nn\n0 , 1\ne\n1 , 0\ns\n0 , -1\n";
    let store = PointStore::load_from_reader(data.as_bytes()).unwrap();

    let res = find_nearby(&store, "O", 1.0, 0).unwrap();
    assert_eq!(res.names(), ["e", "n", "s", "w"]);
    assert_eq!(res.east_count, 1);
}

#[test]
fn east_count_uses_x_not_y() {
    let data = "Q\n0 , 0\nNorth\n0 , 2\nEast\n2 , 0\nNorthEast\n1 , 1\n";
    let store = PointStore::load_from_reader(data.as_bytes()).unwrap();

    let res = find_nearby(&store, "Q", 2.0, 0).unwrap();
    assert_eq!(res.total_found, 3);
    assert_eq!(res.east_count, 2);
}

#[test]
fn bundled_dataset_loads() {
    let store = PointStore::load_from_path(PointStore::default_dataset_path()).unwrap();
    assert_eq!(store.len(), 20);

    let res = find_nearby(&store, "Ashford", 3.0, 1).unwrap();
    assert_eq!(res.names(), ["Marston", "Brindle"]);
    assert_eq!(res.east_count, 2);
}

#[test]
fn substring_search_is_folded() {
    let data = "Zürich\n0 , 0\nZug\n1 , 1\nBern\n2 , 2\n";
    let store = PointStore::load_from_reader(data.as_bytes()).unwrap();

    let hits: Vec<&str> = store.find_by_substring("zu").into_iter().map(City::name).collect();
    assert_eq!(hits, ["Zug", "Zürich"]);
    assert!(store.find_by_substring("   ").is_empty());
}

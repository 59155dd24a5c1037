//! Side-by-side comparison of the three search strategies on a small
//! reference fleet.
//!
//! Run with `cargo run --example compare`.

use fleetfind::{Config, Driver, DriverSearch, OrderLocation, SearchResult, all_strategies};

fn print_results(name: &str, results: &[SearchResult]) {
    println!("=== {name} ===");
    println!("id\t(x, y)\t\tdistance");
    println!("--------------------------------");
    for result in results {
        println!(
            "{}\t({}, {})\t{:.2}",
            result.driver.id(),
            result.driver.x(),
            result.driver.y(),
            result.distance
        );
    }
    println!();
}

fn main() -> fleetfind::Result<()> {
    env_logger::init();

    let drivers = vec![
        Driver::new(1, 10, 10),
        Driver::new(2, 20, 20),
        Driver::new(3, 5, 5),
        Driver::new(4, 100, 100),
        Driver::new(5, 15, 15),
        Driver::new(6, 30, 30),
        Driver::new(7, 1, 1),
    ];
    let order = OrderLocation::new(0, 0);

    let config = Config::default();
    println!("order at ({}, {}), {} drivers", order.x(), order.y(), drivers.len());
    println!(
        "grid cell size {}, quadtree region {}x{}\n",
        config.cell_size, config.region_width, config.region_height
    );

    let strategies = all_strategies(&config)?;
    let mut outcomes: Vec<(&str, Vec<SearchResult>)> = Vec::new();

    for strategy in &strategies {
        let results = strategy.find_nearest_default(&drivers, &order);
        print_results(strategy.name(), &results);
        outcomes.push((strategy.name(), results));
    }

    println!("=== agreement ===");
    let (baseline_name, baseline) = &outcomes[0];
    let baseline_ids: Vec<u64> = baseline.iter().map(|r| r.driver.id()).collect();
    for (name, results) in &outcomes[1..] {
        let ids: Vec<u64> = results.iter().map(|r| r.driver.id()).collect();
        println!(
            "{baseline_name} vs {name}: {}",
            if ids == baseline_ids { "same" } else { "different" }
        );
    }

    Ok(())
}

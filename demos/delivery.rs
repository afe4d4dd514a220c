//! Post-office delivery round.
//!
//! Prints the nearest-neighbor and brute-force routes for four addresses.
//! Run with `RUST_LOG=debug` to see search progress.

use u_delivery::{Point, RouteError, RouteSearcher, SearchStrategy};

fn main() -> Result<(), RouteError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut searcher = RouteSearcher::new(Point::new(0, 2, "Post office"));
    let addresses = [
        (2, 5, "Griboyedov St. 104/25"),
        (5, 2, "Baker St. 221b"),
        (6, 6, "Bolshaya Sadovaya St. 302-bis"),
        (8, 3, "Evergreen Terrace 742"),
    ];
    for (x, y, label) in addresses {
        searcher.add_destination(Point::new(x, y, label))?;
    }
    log::info!(
        "planning a round from {} over {} addresses",
        searcher.base(),
        searcher.destination_count()
    );

    println!("{}", searcher.format_route(SearchStrategy::default())?);
    println!("{}", searcher.format_route(SearchStrategy::BruteForce)?);
    Ok(())
}

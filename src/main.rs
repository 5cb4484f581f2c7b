use anyhow::Result;

use trader_queries::{sample_transactions, QueryEngine};

fn main() -> Result<()> {
    let engine = QueryEngine::new(sample_transactions());

    // All transactions in 2011, sorted by value (small to high).
    // Computed but never printed.
    let _sorted_2011 = engine.transactions_in_year_by_value(2011);

    // What are all the unique cities where the traders work?
    for city in engine.distinct_cities() {
        println!("{}", city);
    }

    // Find all traders from Cambridge and sort them by name
    for trader in engine.traders_in_city_by_name("Cambridge") {
        println!("{}", trader);
    }

    // A string of all traders' names sorted alphabetically
    println!("{}", engine.distinct_names_joined());

    // Are any traders based in Milan?
    println!("{}", engine.any_trader_in("Milan"));

    // All transaction values from the traders living in Cambridge
    for value in engine.values_in_city("Cambridge") {
        println!("{}", value);
    }

    // The highest value of all the transactions; fails the run with a
    // non-zero exit when the sequence is empty
    println!("{}", engine.max_value()?);

    Ok(())
}

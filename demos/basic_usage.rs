//! Basic usage of the Bloom filter.
//!
//! Run with:
//! ```bash
//! cargo run --example basic_usage
//! ```

use bloomlite::{calc_optimal_mk, BloomFilter, BloomFilterBuilder};

fn main() -> bloomlite::Result<()> {
    println!("=== bloomlite basic usage ===\n");

    // Expect 100 elements with a 1% false positive rate.
    let mut filter = BloomFilter::new(100, 0.01);
    println!(
        "sized for 100 items at 1%: m = {} bits, k = {}",
        filter.bit_count(),
        filter.hash_count()
    );

    filter.add_str("value1");
    if filter.contains_str("value1") {
        println!("The set now has 'value1'.");
    }

    let some_id = 123u64;
    filter.add_u64(some_id);
    if filter.contains_u64(some_id) {
        println!("The set now has ID {}.", some_id);
    }

    if !filter.contains_str("value2") {
        println!("'value2' is definitely not in the set.");
    }

    println!("\n--- sizing ---");
    let (m, k) = calc_optimal_mk(216_553, 0.01);
    println!("216553 items at 1%: m = {}, k = {}", m, k);

    let explicit = BloomFilter::new_mk(1024, 3);
    println!(
        "explicit filter: m = {}, k = {}",
        explicit.bit_count(),
        explicit.hash_count()
    );

    println!("\n--- builder ---");
    let mut built = BloomFilterBuilder::new()
        .expected_items(10_000)
        .false_positive_rate(0.001)
        .strict()
        .build()?;
    built.add_batch(["apple", "banana", "cherry"]);
    println!(
        "contains all fruit: {}",
        built.contains_all(["apple", "banana", "cherry"])
    );
    println!("fill rate: {:.6}", built.fill_rate());
    println!("estimated items: {}", built.estimate_cardinality());

    match BloomFilter::try_new(10, 1.5) {
        Ok(_) => println!("unexpectedly accepted rate 1.5"),
        Err(e) => println!("rejected: {}", e),
    }

    Ok(())
}

//! Capacity planning: what a filter costs for a given load.
//!
//! Run with: cargo run --example capacity_planning

use saltbloom::builder::StandardBloomFilterBuilder;
use saltbloom::{FilterParams, HashStrategy};

fn main() {
    println!("Bloom filter capacity planning\n");

    let workloads = [
        ("Session dedup", 10_000, 0.01),
        ("Crawler URL set", 1_000_000, 0.001),
        ("Cache admission", 100_000, 0.05),
        ("Tiny allow-list", 10, 0.5),
    ];

    println!(
        "{:<18} {:>10} {:>8} {:>10} {:>4} {:>10} {:>10}",
        "workload", "n", "target", "m", "k", "true fpr", "bytes"
    );
    for (name, n, p) in workloads {
        match FilterParams::derive(n, p) {
            Ok(params) => println!(
                "{:<18} {:>10} {:>8} {:>10} {:>4} {:>10.6} {:>10}",
                name,
                params.capacity,
                params.target_fpr,
                params.bit_count,
                params.hash_count,
                params.true_fpr,
                params.memory_bytes()
            ),
            Err(e) => println!("{:<18} error: {}", name, e),
        }
    }

    println!("\nBuilt through the builder:");
    let built = StandardBloomFilterBuilder::new()
        .expected_items(50_000)
        .false_positive_rate(0.001)
        .hash_strategy(HashStrategy::EnhancedDouble)
        .build_with_metadata::<str>();

    match built {
        Ok((mut filter, meta)) => {
            println!("  {}", meta.params);
            println!(
                "  {} via {}, {:.1} KiB, {:.2} bytes/item",
                meta.hash_strategy,
                meta.hasher,
                meta.memory_kb(),
                meta.bytes_per_item()
            );

            for i in 0..50_000 {
                filter.insert(&format!("user-{i}"));
            }
            println!(
                "  after {} inserts: fill {:.3}, estimated fpr {:.6}, estimated n {}",
                filter.capacity(),
                filter.fill_rate(),
                filter.estimate_fpr(),
                filter.estimate_cardinality()
            );
        }
        Err(e) => println!("  error: {}", e),
    }

    println!("\nRejected inputs:");
    for (n, p) in [(0, 0.01), (100, 0.0), (100, 1.0), (100, f64::NAN)] {
        if let Err(e) = FilterParams::derive(n, p) {
            println!("  n={n}, p={p}: {e}");
        }
    }
}

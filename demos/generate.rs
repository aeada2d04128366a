//! Test card generation example.
//!
//! Run with: `cargo run --example generate --features generate`

use cc_input::{catalog, format, generate::CardGenerator, is_valid_card_number, resolve};

fn main() {
    println!("=== Test Card Generation ===\n");

    // -------------------------------------------------------------------------
    // Generate cards for each network
    // -------------------------------------------------------------------------
    println!("--- Generate Cards by Network ---\n");

    for network in catalog::networks() {
        let card = CardGenerator::new(network).generate();
        println!(
            "  {:18}: {} (valid: {})",
            network.name(),
            format(&card, network),
            if is_valid_card_number(&card, network) { "yes" } else { "no" }
        );
    }
    println!();

    // -------------------------------------------------------------------------
    // Deterministic generation (for reproducible tests)
    // -------------------------------------------------------------------------
    println!("--- Deterministic Generation ---\n");

    let visa = resolve("4");
    println!("  Generating same card multiple times:");
    for i in 0..3 {
        let card = CardGenerator::new(visa).generate_deterministic();
        println!("    Run {}: {}", i + 1, card);
    }
    println!("  (All cards are identical - deterministic)\n");

    // -------------------------------------------------------------------------
    // Generate with custom prefix and length
    // -------------------------------------------------------------------------
    println!("--- Custom Prefix Generation ---\n");

    let prefixes = [
        ("411111", 16, "Visa with specific BIN"),
        ("4", 19, "Visa, 19 digits"),
        ("2221", 16, "Mastercard 2-series"),
        ("37", 15, "Amex"),
        ("650031", 16, "Elo"),
    ];

    for (prefix, length, description) in prefixes {
        let network = resolve(prefix);
        let card = CardGenerator::new(network)
            .length(length)
            .prefix(prefix)
            .generate();
        println!("  {} (prefix: {}, length: {})", description, prefix, length);
        println!("    Generated: {}", card);
        println!("    Resolves to: {}", resolve(&card).id());
        println!(
            "    Valid: {}",
            if is_valid_card_number(&card, network) { "yes" } else { "no" }
        );
        println!();
    }

    // -------------------------------------------------------------------------
    // Verify all generated cards are valid
    // -------------------------------------------------------------------------
    println!("--- Validation Check ---\n");

    let test_count = 1000;
    let mut all_valid = true;

    for network in catalog::networks() {
        let generator = CardGenerator::new(network);
        let valid_count = (0..test_count)
            .filter(|_| is_valid_card_number(&generator.generate(), network))
            .count();
        let success = valid_count == test_count;
        all_valid &= success;
        println!(
            "  {:18}: {}/{} valid ({})",
            network.name(),
            valid_count,
            test_count,
            if success { "PASS" } else { "FAIL" }
        );
    }
    println!();

    if all_valid {
        println!("  All generated cards pass validation!");
    } else {
        println!("  WARNING: Some generated cards failed validation!");
    }
}

//! Live card field example.
//!
//! Run with: `cargo run --example live_typing`

use cc_input::{catalog, cvv, resolve, CardEntry, CvvEntry};

/// Feeds keys into a field that is reformatted after every keystroke.
fn type_card(keys: &str) -> CardEntry {
    let mut field = String::new();
    let mut entry = CardEntry::default();

    for key in keys.chars() {
        field.push(key);
        entry = CardEntry::new(&field);
        println!(
            "  key {:>2}  ->  {:<24} icon: {:<12} complete: {}",
            key,
            format!("\"{}\"", entry.display()),
            entry.icon(),
            if entry.is_complete() { "yes" } else { "no" }
        );
        field = entry.display().to_string();
    }

    entry
}

fn main() {
    println!("=== Live Card Number Field ===\n");

    // -------------------------------------------------------------------------
    // Typing an Amex number one key at a time
    // -------------------------------------------------------------------------
    println!("--- Typing 378282246310005 (extra keys are ignored) ---\n");

    let entry = type_card("37828224631000599");
    println!();
    println!("  Value:   {}", entry.value());
    println!("  Network: {}", entry.network().name());
    match entry.validate() {
        Ok(()) => println!("  Valid:   yes"),
        Err(e) => println!("  Valid:   no ({})", e),
    }
    println!();

    // -------------------------------------------------------------------------
    // The icon follows the most specific prefix
    // -------------------------------------------------------------------------
    println!("--- Network changes as the prefix grows ---\n");

    for prefix in ["3", "30", "35", "4", "40117", "401178", "6", "60", "6011", "65003", "2", "220"] {
        let candidates: Vec<&str> = cc_input::resolve::matching_networks(prefix)
            .iter()
            .map(|n| n.id())
            .collect();
        println!(
            "  {:<8} -> {:<12} candidates: [{}]",
            prefix,
            resolve(prefix).id(),
            candidates.join(", ")
        );
    }
    println!();

    // -------------------------------------------------------------------------
    // Matching CVV field
    // -------------------------------------------------------------------------
    println!("--- CVV field for the card above ---\n");

    for input in ["12", "123", "1234", "12a4"] {
        let cvv_entry = CvvEntry::for_card(input, &entry);
        match cvv_entry.validate() {
            Ok(len) => println!("  {:<6} valid ({} digits)", input, len),
            Err(e) => println!("  {:<6} invalid: {}", input, e),
        }
    }
    println!();

    println!("  Without a card number: 3 or 4 digits");
    for input in ["123", "1234", "12345"] {
        println!(
            "    {:<6} {}",
            input,
            if cvv::is_valid_cvv_any(input) { "valid" } else { "invalid" }
        );
    }
    println!();

    // -------------------------------------------------------------------------
    // Catalog overview
    // -------------------------------------------------------------------------
    println!("--- Catalog ---\n");

    for network in catalog::networks() {
        let layout: Vec<String> = network.segment_layout().iter().map(|g| g.to_string()).collect();
        println!(
            "  {:<12} max {:>2} digits, layout {:<10} {} {}",
            network.id(),
            network.max_length(),
            layout.join("-"),
            network.cvv_name(),
            network.cvv_length()
        );
    }
}

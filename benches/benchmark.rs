//! Benchmarks for cc_input performance testing.
//!
//! Run with: cargo bench

use cc_input::{
    catalog, entry::CardEntry, format, is_valid_card_number, luhn, resolve,
    resolve::{matching_networks, resolve_digits},
};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

// Test card numbers
const VISA_16: &str = "4111111111111111";
const VISA_16_FORMATTED: &str = "4111-1111-1111-1111";
const MASTERCARD: &str = "5555555555554444";
const AMEX: &str = "378282246310005";
const ELO: &str = "6500310000000000";
const UNKNOWN: &str = "9999999999999995";

const VISA_DIGITS: [u8; 16] = [4, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1];
const AMEX_DIGITS: [u8; 15] = [3, 7, 8, 2, 8, 2, 2, 4, 6, 3, 1, 0, 0, 0, 5];

/// Benchmark network resolution
fn bench_resolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve");

    group.bench_function("visa_16_raw", |b| b.iter(|| resolve(black_box(VISA_16))));

    group.bench_function("visa_16_formatted", |b| {
        b.iter(|| resolve(black_box(VISA_16_FORMATTED)))
    });

    group.bench_function("amex_15", |b| b.iter(|| resolve(black_box(AMEX))));

    // Elo shares its leading digits with Discover and Maestro
    group.bench_function("elo_overlap", |b| b.iter(|| resolve(black_box(ELO))));

    group.bench_function("unknown_fallback", |b| b.iter(|| resolve(black_box(UNKNOWN))));

    group.bench_function("visa_digits", |b| {
        b.iter(|| resolve_digits(black_box(&VISA_DIGITS)))
    });

    group.bench_function("matching_networks", |b| {
        b.iter(|| matching_networks(black_box("3")))
    });

    group.finish();
}

/// Benchmark formatting
fn bench_format(c: &mut Criterion) {
    let mut group = c.benchmark_group("format");
    let visa = resolve(VISA_16);
    let amex = resolve(AMEX);

    group.bench_function("visa_16", |b| {
        b.iter(|| format(black_box(VISA_16), black_box(visa)))
    });

    group.bench_function("amex_15", |b| b.iter(|| format(black_box(AMEX), black_box(amex))));

    group.bench_function("resolve_and_format", |b| {
        b.iter(|| cc_input::format::format_card_number(black_box(VISA_16_FORMATTED)))
    });

    group.finish();
}

/// Benchmark full-number validation
fn bench_validation(c: &mut Criterion) {
    let mut group = c.benchmark_group("validation");

    for (name, card) in [("visa", VISA_16), ("mastercard", MASTERCARD), ("amex", AMEX)] {
        let network = resolve(card);
        group.bench_with_input(BenchmarkId::new("is_valid_card_number", name), card, |b, card| {
            b.iter(|| is_valid_card_number(black_box(card), black_box(network)))
        });
    }

    group.bench_function("validate_card", |b| {
        b.iter(|| cc_input::validate_card(black_box(VISA_16_FORMATTED)))
    });

    group.finish();
}

/// Benchmark Luhn algorithm specifically
fn bench_luhn(c: &mut Criterion) {
    let mut group = c.benchmark_group("luhn");

    group.bench_function("luhn_16", |b| b.iter(|| luhn::validate(black_box(&VISA_DIGITS))));

    group.bench_function("luhn_15", |b| b.iter(|| luhn::validate(black_box(&AMEX_DIGITS))));

    group.bench_function("check_digit", |b| {
        b.iter(|| luhn::generate_check_digit(black_box(&VISA_DIGITS[..15])))
    });

    group.finish();
}

/// Benchmark a field being typed one key at a time
fn bench_typing(c: &mut Criterion) {
    let mut group = c.benchmark_group("typing");

    for card in [VISA_16, AMEX] {
        group.throughput(Throughput::Elements(card.len() as u64));
        group.bench_with_input(BenchmarkId::new("keystrokes", card.len()), card, |b, card| {
            b.iter(|| {
                let mut field = String::new();
                for key in card.chars() {
                    field.push(key);
                    field = CardEntry::new(black_box(&field)).display().to_string();
                }
                field
            })
        });
    }

    group.finish();
}

/// Benchmark catalog lookups
fn bench_catalog(c: &mut Criterion) {
    let mut group = c.benchmark_group("catalog");

    group.bench_function("find_last", |b| b.iter(|| catalog::find(black_box("hipercard"))));

    group.bench_function("find_missing", |b| b.iter(|| catalog::find(black_box("nope"))));

    group.finish();
}

criterion_group!(
    benches,
    bench_resolve,
    bench_format,
    bench_validation,
    bench_luhn,
    bench_typing,
    bench_catalog,
);

criterion_main!(benches);

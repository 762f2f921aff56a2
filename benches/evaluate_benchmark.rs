// ============================================================================
// Operand Calculator Benchmarks
// ============================================================================
//
// Benchmark Categories:
// 1. Precision - 48-bit rounding and display formatting in isolation
// 2. Evaluation - Full evaluate() including sentinel handling
// 3. Entry - Operand text transitions
// 4. Widget - Input dispatch through each presentation adapter
// ============================================================================

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use operand_calc::engine::{append_digit, backspace, toggle_sign};
use operand_calc::numeric::{format_display, round_to_48_bits};
use operand_calc::prelude::*;
use std::hint::black_box;
use std::sync::Arc;

// ============================================================================
// Precision Benchmarks
// ============================================================================

fn benchmark_precision(c: &mut Criterion) {
    let mut group = c.benchmark_group("precision");

    let values = [0.1 + 0.2, 37.5, 1e12, 2.5e-8, -123456.789];

    group.bench_function("round_to_48_bits", |b| {
        b.iter(|| {
            for v in &values {
                black_box(round_to_48_bits(black_box(*v)));
            }
        });
    });

    group.bench_function("format_display", |b| {
        b.iter(|| {
            for v in &values {
                black_box(format_display(black_box(*v)));
            }
        });
    });

    group.finish();
}

// ============================================================================
// Evaluation Benchmarks
// ============================================================================

fn benchmark_evaluate(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluate");

    for op in OperationSymbol::ALL {
        group.bench_with_input(BenchmarkId::new("finite", op.glyph()), &op, |b, op| {
            b.iter(|| black_box(evaluate(*op, black_box(12.5), black_box(3.0))));
        });
    }

    group.bench_function("division_by_zero", |b| {
        b.iter(|| black_box(evaluate(OperationSymbol::Divide, black_box(7.0), black_box(0.0))));
    });

    group.finish();
}

// ============================================================================
// Entry Benchmarks
// ============================================================================

fn benchmark_entry(c: &mut Criterion) {
    let mut group = c.benchmark_group("entry");

    let digits: Vec<Digit> = "31415926535"
        .chars()
        .filter_map(|c| Digit::try_from(c).ok())
        .collect();

    group.bench_function("type_eleven_digits", |b| {
        b.iter(|| {
            let mut text = OperandText::new();
            for d in &digits {
                text = append_digit(&text, *d);
            }
            black_box(text)
        });
    });

    group.bench_function("sign_and_backspace", |b| {
        let seed: OperandText = "-12.75".parse().unwrap();
        b.iter(|| black_box(backspace(&toggle_sign(black_box(&seed)))));
    });

    group.finish();
}

// ============================================================================
// Widget Benchmarks
// ============================================================================

fn benchmark_widget(c: &mut Criterion) {
    let mut group = c.benchmark_group("widget_dispatch");

    let ring = |c: char| Key::from_label(c).unwrap();
    let session = [
        InputEvent::KeyPress(ring('1')),
        InputEvent::KeyEnter(ring('2')),
        InputEvent::KeyEnter(ring('.')),
        InputEvent::KeyEnter(ring('5')),
        InputEvent::GestureEnd,
        InputEvent::KeyPress(ring('3')),
        InputEvent::GestureEnd,
        InputEvent::SelectOperation(OperationSymbol::Divide),
    ];

    for kind in [
        AdapterKind::Dial,
        AdapterKind::Keypad,
        AdapterKind::Clock,
        AdapterKind::Orbital,
    ] {
        group.bench_with_input(BenchmarkId::new("session", kind.name()), &kind, |b, kind| {
            b.iter(|| {
                let config = CalculatorConfig::new("bench", *kind);
                let mut widget = create_from_config(config, Arc::new(NoOpEventHandler)).unwrap();
                black_box(widget.handle_inputs(&session))
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_precision,
    benchmark_evaluate,
    benchmark_entry,
    benchmark_widget
);
criterion_main!(benches);

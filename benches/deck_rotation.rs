// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for deck rotation and particle simulation.
//!
//! Both run inside the update loop at interactive rates, so regressions here
//! show up as dropped frames rather than failed tests.

use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use unboxed::effects::{BurstConfig, ParticleField};
use unboxed::ui::state::{CardDescriptor, CardKind, DeckState};

fn large_deck(n: u32) -> DeckState {
    DeckState::new((1..=n).map(|id| CardDescriptor {
        id,
        kind: CardKind::Message(id as u8),
        base_rotation: 0.0,
    }))
}

fn bench_advance(c: &mut Criterion) {
    let mut group = c.benchmark_group("deck");

    group.bench_function("advance_authored", |b| {
        let mut deck = DeckState::authored();
        b.iter(|| {
            deck.advance();
            black_box(deck.top());
        });
    });

    group.bench_function("advance_64_cards", |b| {
        let mut deck = large_deck(64);
        b.iter(|| {
            deck.advance();
            black_box(deck.top());
        });
    });

    group.finish();
}

fn bench_particle_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("particles");

    group.bench_function("step_150_particles", |b| {
        let mut field = ParticleField::default();
        b.iter(|| {
            if !field.is_active() {
                field.burst(&BurstConfig {
                    count: 150,
                    spread: 100.0,
                    origin: (0.5, 0.5),
                    colors: vec![iced::Color::WHITE, iced::Color::BLACK],
                });
            }
            field.step(0.016);
            black_box(field.len());
        });
    });

    group.finish();
}

criterion_group!(benches, bench_advance, bench_particle_step);
criterion_main!(benches);

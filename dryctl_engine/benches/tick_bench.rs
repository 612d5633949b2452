//! Tick latency benchmark.
//!
//! The engine is called once per second in production, but it shares the
//! caller's loop with telemetry handling — a tick should stay deep in the
//! sub-microsecond range.

use criterion::{criterion_group, criterion_main, Criterion};
use dryctl_common::io::Inputs;
use dryctl_common::params::Parameters;
use dryctl_engine::{tick, EngineState};
use std::hint::black_box;

fn bench_tick(c: &mut Criterion) {
    let params = Parameters {
        temp_setpoint: 25.0,
        ..Default::default()
    };
    let running = Inputs {
        run_enable: true,
        process_temperature: 20.0,
        valve_open_limit: true,
        valve_closed_limit: false,
        ..Default::default()
    };

    c.bench_function("tick_running", |b| {
        let mut state = EngineState::default();
        b.iter(|| {
            let (out, next) = tick(black_box(&running), black_box(&params), &state);
            state = next;
            black_box(out)
        });
    });

    c.bench_function("tick_power_loss", |b| {
        let dark = Inputs {
            power_ok: false,
            ..running
        };
        let mut state = EngineState::default();
        b.iter(|| {
            let (out, next) = tick(black_box(&dark), black_box(&params), &state);
            state = next;
            black_box(out)
        });
    });
}

criterion_group!(benches, bench_tick);
criterion_main!(benches);

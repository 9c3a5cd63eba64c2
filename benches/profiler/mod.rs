// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Anchorroute-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Anchorroute and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::str::FromStr;
use std::time::Duration;

use criterion::Criterion;

use pprof::criterion::{Output, PProfProfiler};

fn env_or<T: FromStr>(name: &str, default: T) -> T {
    std::env::var(name).ok().and_then(|raw| raw.trim().parse::<T>().ok()).unwrap_or(default)
}

/// Criterion config with a flamegraph profiler attached (`--profile-time <secs>`).
///
/// `ROUTE_PROFILE_FREQ`, `ROUTE_BENCH_SAMPLE_SIZE`, `ROUTE_BENCH_WARMUP_SECS` and
/// `ROUTE_BENCH_MEASUREMENT_SECS` tune the run without recompiling.
pub fn criterion() -> Criterion {
    let frequency = env_or("ROUTE_PROFILE_FREQ", 250i32).clamp(1, 1000);
    let sample_size = env_or("ROUTE_BENCH_SAMPLE_SIZE", 40usize).clamp(10, 200);
    let warmup = env_or("ROUTE_BENCH_WARMUP_SECS", 2u64).clamp(1, 60);
    let measurement = env_or("ROUTE_BENCH_MEASUREMENT_SECS", 5u64).clamp(1, 120);

    Criterion::default()
        .sample_size(sample_size)
        .warm_up_time(Duration::from_secs(warmup))
        .measurement_time(Duration::from_secs(measurement))
        .with_profiler(PProfProfiler::new(frequency, Output::Flamegraph(None)))
}

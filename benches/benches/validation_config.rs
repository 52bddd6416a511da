// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for `understory_validation_config`.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use understory_validation_config::{
    Registration, ValidationHtmlConfiguration, ValidationTrigger,
};

fn bench_register(c: &mut Criterion) {
    let config = ValidationHtmlConfiguration::new().customize(|options| {
        options.default_trigger = ValidationTrigger::ChangeOrBlur;
        options.use_subscriber_custom_element = false;
    });

    c.bench_function("validation_config/register", |b| {
        b.iter(|| {
            let mut container: Vec<Registration> = Vec::with_capacity(6);
            black_box(&config).register(&mut container);
            black_box(container)
        });
    });
}

criterion_group!(benches, bench_register);
criterion_main!(benches);

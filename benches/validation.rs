// SPDX-License-Identifier: MPL-2.0
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use toastbox::validation::is_valid_email;

fn email_validation_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("validation");

    let addresses = [
        "a@b.c",
        "ada.lovelace@example.com",
        "user+tag@mail.example.co.uk",
        "definitely not an address with spaces@nowhere",
        "",
    ];

    group.bench_function("is_valid_email", |b| {
        b.iter(|| {
            for address in &addresses {
                let _ = black_box(is_valid_email(black_box(address)));
            }
        });
    });

    group.finish();
}

criterion_group!(benches, email_validation_benchmark);
criterion_main!(benches);

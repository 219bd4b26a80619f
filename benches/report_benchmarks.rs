//! Performance benchmarks for grouping, accumulator merging and composed reports
//! Compares single-pass accumulators against split-and-combine and measures
//! report queries at scale

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rollup::aggregate::{Accumulator, Aggregator};
use rollup::grouping;
use rollup::testing::fixtures::date;
use rollup::testing::{EmployeeBuilder, OrderBuilder};
use rollup::{Employee, Order, ReportEngine};
use std::hint::black_box;
use stillwater::Semigroup;

const DEPARTMENTS: &[&str] = &["Engineering", "Sales", "HR", "Legal", "Support"];
const PRODUCTS: &[&str] = &["Laptop", "Mouse", "Keyboard", "Monitor", "Dock"];

fn employees(size: usize) -> Vec<Employee> {
    (0..size)
        .map(|i| {
            EmployeeBuilder::new(i as u64 + 1)
                .name(format!("Employee {i}"))
                .department(DEPARTMENTS[i % DEPARTMENTS.len()])
                .age(20 + (i % 45) as u32)
                .salary(40000.0 + (i % 97) as f64 * 500.0)
                .build()
        })
        .collect()
}

/// Orders spread over 2024; every tenth one points at no employee
fn orders(size: usize, employee_count: usize) -> Vec<Order> {
    (0..size)
        .map(|i| {
            let employee_id = if i % 10 == 9 {
                u64::MAX
            } else {
                (i % employee_count.max(1)) as u64 + 1
            };
            OrderBuilder::new(i as u64 + 1)
                .employee(employee_id)
                .product(PRODUCTS[i % PRODUCTS.len()])
                .quantity(1 + (i % 7) as u32)
                .price(10.0 + (i % 50) as f64)
                .on(date(2024, 1 + (i % 12) as u32, 1 + (i % 28) as u32))
                .build()
        })
        .collect()
}

/// Baseline: sort-then-pick median (pre-accumulator approach)
fn sorted_median(mut values: Vec<f64>) -> f64 {
    values.sort_by(f64::total_cmp);
    let mid = values.len() / 2;
    if values.is_empty() {
        0.0
    } else if values.len() % 2 == 0 {
        (values[mid - 1] + values[mid]) / 2.0
    } else {
        values[mid]
    }
}

/// Benchmark one accumulator over a whole slice vs chunks combined
fn bench_accumulator_combine(c: &mut Criterion) {
    let mut group = c.benchmark_group("accumulator_combine");

    for size in [100, 1000, 10000] {
        let values: Vec<f64> = (0..size).map(|i| (i % 1000) as f64).collect();

        for kind in [Aggregator::Sum, Aggregator::Average, Aggregator::Range] {
            group.bench_with_input(
                BenchmarkId::new(format!("{kind:?}_single_pass"), size),
                &values,
                |b, values| {
                    b.iter(|| {
                        black_box(Accumulator::from_values(kind, values.iter().copied()).finalize())
                    });
                },
            );

            group.bench_with_input(
                BenchmarkId::new(format!("{kind:?}_chunked"), size),
                &values,
                |b, values| {
                    b.iter(|| {
                        let merged = values
                            .chunks(64)
                            .map(|chunk| Accumulator::from_values(kind, chunk.iter().copied()))
                            .fold(Accumulator::empty(kind), Semigroup::combine);
                        black_box(merged.finalize())
                    });
                },
            );
        }
    }

    group.finish();
}

/// Benchmark median via accumulator vs a plain sort
fn bench_median(c: &mut Criterion) {
    let mut group = c.benchmark_group("median");

    for size in [100, 1000, 10000] {
        let values: Vec<f64> = (0..size).map(|i| ((i * 7919) % 10007) as f64).collect();

        group.bench_with_input(BenchmarkId::new("sorted", size), &values, |b, values| {
            b.iter(|| black_box(sorted_median(values.clone())));
        });

        group.bench_with_input(BenchmarkId::new("accumulator", size), &values, |b, values| {
            b.iter(|| {
                black_box(
                    Accumulator::from_values(Aggregator::Median, values.iter().copied())
                        .finalize(),
                )
            });
        });
    }

    group.finish();
}

/// Benchmark grouping primitives by department
fn bench_grouping(c: &mut Criterion) {
    let mut group = c.benchmark_group("grouping");

    for size in [100, 1000, 10000] {
        let staff = employees(size);

        group.bench_with_input(BenchmarkId::new("group_by", size), &staff, |b, staff| {
            b.iter(|| black_box(grouping::group_by(staff, |e| e.department.clone())));
        });

        group.bench_with_input(BenchmarkId::new("group_sum", size), &staff, |b, staff| {
            b.iter(|| {
                black_box(grouping::group_sum(
                    staff,
                    |e| e.department.clone(),
                    |e| e.salary,
                ))
            });
        });

        group.bench_with_input(BenchmarkId::new("group_median", size), &staff, |b, staff| {
            b.iter(|| {
                black_box(grouping::group_aggregate(
                    staff,
                    |e| e.department.clone(),
                    |e| e.salary,
                    Aggregator::Median,
                ))
            });
        });
    }

    group.finish();
}

/// Benchmark composed report queries
fn bench_reports(c: &mut Criterion) {
    let mut group = c.benchmark_group("reports");
    let engine = ReportEngine::default();

    for size in [1000, 10000] {
        let staff = employees(size / 10);
        let sales = orders(size, staff.len());

        group.bench_with_input(
            BenchmarkId::new("department_stats", size),
            &staff,
            |b, staff| {
                b.iter(|| black_box(engine.department_stats(staff)));
            },
        );

        group.bench_with_input(
            BenchmarkId::new("sales_summary", size),
            &(&staff, &sales),
            |b, (staff, sales)| {
                b.iter(|| black_box(engine.sales_summary(staff, sales)));
            },
        );

        group.bench_with_input(
            BenchmarkId::new("top_products_by_department", size),
            &(&staff, &sales),
            |b, (staff, sales)| {
                b.iter(|| black_box(engine.top_products_by_department(staff, sales, 5)));
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_accumulator_combine,
    bench_median,
    bench_grouping,
    bench_reports
);

criterion_main!(benches);

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use tempfile::tempdir;
use time::{Date, Month};
use tokio::runtime::Runtime;

use expense_tracker_server::store::ExpenseStore;

// Benchmark constants
const BENCH_EXPENSE_COUNT: usize = 1000;

async fn setup_benchmark_store() -> (ExpenseStore, tempfile::TempDir) {
    let temp_dir = tempdir().expect("Failed to create temporary directory");
    let data_path = temp_dir.path().to_str().unwrap().to_string();

    let store = ExpenseStore::open(&data_path).await.unwrap();

    (store, temp_dir)
}

fn bench_date(i: usize) -> Date {
    let month = Month::try_from((i % 12 + 1) as u8).unwrap();
    let day = (i % 28 + 1) as u8;
    Date::from_calendar_date(2024, month, day).unwrap()
}

async fn create_benchmark_expenses(store: &ExpenseStore, count: usize) {
    for i in 0..count {
        let description = format!("Benchmark Expense {}", i);
        let amount = 10.0 + (i % 100) as f64;
        let category = format!("category_{}", i % 10);

        store
            .create(&description, amount, bench_date(i), &category)
            .await
            .unwrap();
    }
}

async fn benchmark_list_all(store: &ExpenseStore) {
    let expenses = store.list_all().await.unwrap();
    black_box(expenses.len());
}

async fn benchmark_total_value(store: &ExpenseStore) {
    let total = store.total_value().await.unwrap();
    black_box(total);
}

fn criterion_benchmark(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();

    // Setup benchmark data once
    let (store, _temp_dir) = rt.block_on(setup_benchmark_store());
    rt.block_on(create_benchmark_expenses(&store, BENCH_EXPENSE_COUNT));

    c.bench_function("list_all_1000_expenses", |b| {
        b.iter(|| rt.block_on(benchmark_list_all(&store)));
    });

    c.bench_function("total_value_1000_expenses", |b| {
        b.iter(|| rt.block_on(benchmark_total_value(&store)));
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);

use expense_tracker_server::store::ExpenseStore;
use tempfile::{TempDir, tempdir};
use time::Date;

pub async fn setup_test_store() -> (ExpenseStore, TempDir) {
    let temp_dir = tempdir().expect("Failed to create temporary directory");
    let data_path = temp_dir
        .path()
        .to_str()
        .expect("Failed to convert path to string")
        .to_string();

    let store = ExpenseStore::open(&data_path)
        .await
        .unwrap_or_else(|e| panic!("Failed to open expense store at {}: {}", data_path, e));

    (store, temp_dir)
}

pub async fn create_test_expense(
    store: &ExpenseStore,
    description: &str,
    amount: f64,
    date: Date,
    category: &str,
) -> i64 {
    store
        .create(description, amount, date, category)
        .await
        .unwrap_or_else(|e| panic!("Failed to insert test expense '{}': {}", description, e))
}

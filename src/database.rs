use anyhow::Result;
use libsql::{Builder, Connection};
use std::path::Path;

const CREATE_EXPENSES_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS expenses (
    id            INTEGER PRIMARY KEY AUTOINCREMENT,
    description   TEXT    NOT NULL,
    amount        REAL    NOT NULL,
    expense_date  TEXT    NOT NULL,
    category      TEXT    NOT NULL
);
"#;

pub const DB_FILE_NAME: &str = "expenses.db";

/// Creates the data directory and the expenses table if missing (expenses.db)
pub async fn init_expense_db(data_dir: &str) -> Result<()> {
    tokio::fs::create_dir_all(data_dir).await?;
    let conn = open_expense_db(data_dir).await?;
    conn.execute(CREATE_EXPENSES_TABLE, ()).await?;
    Ok(())
}

/// Fresh connection scoped to a single store operation
pub async fn open_expense_db(data_dir: &str) -> Result<Connection, libsql::Error> {
    let path = Path::new(data_dir).join(DB_FILE_NAME);
    let db = Builder::new_local(path).build().await?;
    db.connect()
}

use libsql::Connection;
use time::Date;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

use crate::database;
use crate::models::Expense;

const INSERT_SQL: &str =
    "INSERT INTO expenses (description, amount, expense_date, category) VALUES (?, ?, ?, ?)";
const SELECT_ALL_SQL: &str = "SELECT id, description, amount, expense_date, category FROM expenses ORDER BY expense_date DESC, id DESC";
const UPDATE_SQL: &str =
    "UPDATE expenses SET description = ?, amount = ?, expense_date = ?, category = ? WHERE id = ?";
const DELETE_SQL: &str = "DELETE FROM expenses WHERE id = ?";
const TOTAL_SQL: &str = "SELECT CAST(COALESCE(SUM(amount), 0) AS REAL) FROM expenses";

// Dates are stored as ISO text so that DESC order matches calendar order.
const DATE_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

#[derive(Debug)]
pub enum StoreError {
    /// No expense row matches the requested id.
    NotFound(i64),
    /// The insert reported success but the database produced no rowid.
    MissingRowId,
    /// Failure between the store and the backing database.
    Database(libsql::Error),
    /// A stored value could not be read back as an expense field.
    Corrupt(String),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::NotFound(id) => write!(f, "expense {} not found", id),
            StoreError::MissingRowId => write!(f, "insert returned no generated id"),
            StoreError::Database(e) => write!(f, "database error: {}", e),
            StoreError::Corrupt(msg) => write!(f, "corrupt expense row: {}", msg),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StoreError::Database(e) => Some(e),
            _ => None,
        }
    }
}

impl From<libsql::Error> for StoreError {
    fn from(err: libsql::Error) -> Self {
        StoreError::Database(err)
    }
}

pub fn extract_expense_from_row(row: libsql::Row) -> Result<Expense, StoreError> {
    let id: i64 = row.get(0)?;
    let description: String = row.get(1)?;
    let amount: f64 = row.get(2)?;
    let date_text: String = row.get(3)?;
    let category: String = row.get(4)?;

    let date = Date::parse(&date_text, DATE_FORMAT).map_err(|e| {
        StoreError::Corrupt(format!("invalid expense_date {:?}: {}", date_text, e))
    })?;

    Ok(Expense {
        id,
        description,
        amount,
        date,
        category,
    })
}

/// Persistence contract for expense records.
///
/// Each operation opens its own connection, issues exactly one statement,
/// and releases the connection before returning. There is no pool, no
/// cross-operation transaction, and no retry policy; per-statement
/// auto-commit is left to the engine.
#[derive(Debug, Clone)]
pub struct ExpenseStore {
    data_dir: String,
}

impl ExpenseStore {
    /// Opens the store, creating the data directory and schema if missing.
    pub async fn open(data_dir: &str) -> anyhow::Result<Self> {
        database::init_expense_db(data_dir).await?;
        Ok(Self {
            data_dir: data_dir.to_string(),
        })
    }

    async fn connect(&self) -> Result<Connection, StoreError> {
        Ok(database::open_expense_db(&self.data_dir).await?)
    }

    fn format_date(date: Date) -> Result<String, StoreError> {
        date.format(DATE_FORMAT)
            .map_err(|e| StoreError::Corrupt(format!("unformattable date {}: {}", date, e)))
    }

    /// Persists a new record and returns the generated id.
    pub async fn create(
        &self,
        description: &str,
        amount: f64,
        date: Date,
        category: &str,
    ) -> Result<i64, StoreError> {
        let conn = self.connect().await?;
        let affected = conn
            .execute(
                INSERT_SQL,
                (description, amount, Self::format_date(date)?, category),
            )
            .await?;
        if affected == 0 {
            return Err(StoreError::MissingRowId);
        }

        let id = conn.last_insert_rowid();
        if id <= 0 {
            return Err(StoreError::MissingRowId);
        }
        Ok(id)
    }

    /// Every persisted record, newest expense date first. Equal dates are
    /// returned newest insert first.
    pub async fn list_all(&self) -> Result<Vec<Expense>, StoreError> {
        let conn = self.connect().await?;
        let mut rows = conn.query(SELECT_ALL_SQL, ()).await?;

        let mut expenses = Vec::new();
        while let Some(row) = rows.next().await? {
            expenses.push(extract_expense_from_row(row)?);
        }
        Ok(expenses)
    }

    /// Overwrites description, amount, date, and category for the row
    /// matching `expense.id`.
    pub async fn update(&self, expense: &Expense) -> Result<(), StoreError> {
        let conn = self.connect().await?;
        let affected = conn
            .execute(
                UPDATE_SQL,
                (
                    expense.description.as_str(),
                    expense.amount,
                    Self::format_date(expense.date)?,
                    expense.category.as_str(),
                    expense.id,
                ),
            )
            .await?;

        if affected == 0 {
            return Err(StoreError::NotFound(expense.id));
        }
        Ok(())
    }

    /// Removes the row with `id`. Returns false when no such row existed.
    pub async fn delete(&self, id: i64) -> Result<bool, StoreError> {
        let conn = self.connect().await?;
        let affected = conn.execute(DELETE_SQL, [id]).await?;
        Ok(affected > 0)
    }

    /// Sum of `amount` across all records; 0 when the store is empty.
    pub async fn total_value(&self) -> Result<f64, StoreError> {
        let conn = self.connect().await?;
        let mut rows = conn.query(TOTAL_SQL, ()).await?;

        match rows.next().await? {
            Some(row) => Ok(row.get(0)?),
            None => Ok(0.0),
        }
    }
}

use serde::{Deserialize, Serialize};
use time::Date;

/// A persisted expense record. `id` is assigned by the store on creation
/// and immutable afterward.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Expense {
    pub id: i64,
    pub description: String,
    pub amount: f64,
    pub date: Date,
    pub category: String,
}

/// Incoming expense fields. Used for create and for full-overwrite update;
/// the id always comes from the store or the request path, never the body.
#[derive(Deserialize, Debug, Clone)]
pub struct ExpensePayload {
    pub description: String,
    pub amount: f64,
    pub date: Date,
    pub category: String,
}

#[derive(Serialize, Debug)]
pub struct ListExpensesResponse {
    pub expenses: Vec<Expense>,
    pub total_count: u32,
}

#[derive(Serialize, Debug)]
pub struct TotalValueResponse {
    pub total: f64,
}

#[derive(Serialize, Debug)]
pub struct CategoriesResponse {
    pub categories: Vec<String>,
}

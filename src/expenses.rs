use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::constants::*;
use crate::models::{
    CategoriesResponse, Expense, ExpensePayload, ListExpensesResponse, TotalValueResponse,
};
use crate::store::ExpenseStore;
use crate::utils::{store_error_response, validate_string_length};

/// Shared state for the HTTP boundary: the store plus the configured
/// category labels.
#[derive(Clone)]
pub struct AppState {
    pub store: ExpenseStore,
    pub categories: Vec<String>,
}

pub fn validate_description(description: &str) -> Result<(), (StatusCode, String)> {
    validate_string_length(description, "Description", MAX_DESCRIPTION_LENGTH)
}

pub fn validate_category(category: &str) -> Result<(), (StatusCode, String)> {
    validate_string_length(category, "Category", MAX_CATEGORY_LENGTH)
}

pub fn validate_amount(amount: f64) -> Result<(), (StatusCode, String)> {
    if !amount.is_finite() {
        return Err((
            StatusCode::BAD_REQUEST,
            "Amount must be a finite number".to_string(),
        ));
    }
    Ok(())
}

fn validate_expense_payload(payload: &ExpensePayload) -> Result<(), (StatusCode, String)> {
    validate_description(&payload.description)?;
    validate_amount(payload.amount)?;
    validate_category(&payload.category)?;
    Ok(())
}

pub async fn create_expense(
    State(state): State<AppState>,
    Json(payload): Json<ExpensePayload>,
) -> Result<(StatusCode, Json<Expense>), (StatusCode, String)> {
    validate_expense_payload(&payload)?;

    let description = payload.description.trim();
    let category = payload.category.trim();

    let id = state
        .store
        .create(description, payload.amount, payload.date, category)
        .await
        .map_err(store_error_response)?;

    let expense = Expense {
        id,
        description: description.to_string(),
        amount: payload.amount,
        date: payload.date,
        category: category.to_string(),
    };

    Ok((StatusCode::CREATED, Json(expense)))
}

pub async fn list_expenses(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<ListExpensesResponse>), (StatusCode, String)> {
    let expenses = state.store.list_all().await.map_err(store_error_response)?;
    let total_count = expenses.len() as u32;

    Ok((
        StatusCode::OK,
        Json(ListExpensesResponse {
            expenses,
            total_count,
        }),
    ))
}

pub async fn update_expense(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<ExpensePayload>,
) -> Result<(StatusCode, Json<Expense>), (StatusCode, String)> {
    validate_expense_payload(&payload)?;

    // Full-record overwrite: every field comes from the payload, the id
    // from the path.
    let expense = Expense {
        id,
        description: payload.description.trim().to_string(),
        amount: payload.amount,
        date: payload.date,
        category: payload.category.trim().to_string(),
    };

    state
        .store
        .update(&expense)
        .await
        .map_err(store_error_response)?;

    Ok((StatusCode::OK, Json(expense)))
}

pub async fn delete_expense(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, (StatusCode, String)> {
    let removed = state.store.delete(id).await.map_err(store_error_response)?;

    if removed {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err((StatusCode::NOT_FOUND, format!("Expense {} not found", id)))
    }
}

pub async fn total_value(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<TotalValueResponse>), (StatusCode, String)> {
    let total = state
        .store
        .total_value()
        .await
        .map_err(store_error_response)?;

    Ok((StatusCode::OK, Json(TotalValueResponse { total })))
}

pub async fn list_categories(
    State(state): State<AppState>,
) -> (StatusCode, Json<CategoriesResponse>) {
    (
        StatusCode::OK,
        Json(CategoriesResponse {
            categories: state.categories.clone(),
        }),
    )
}

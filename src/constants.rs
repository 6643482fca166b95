// Server configuration
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: &str = "3000";
pub const DEFAULT_DATA_PATH: &str = "data";

// Category labels offered to clients when EXPENSE_CATEGORIES is unset.
// Presentation configuration only; the storage layer does not enforce them.
pub const DEFAULT_CATEGORIES: &[&str] = &[
    "Food",
    "Transport",
    "Leisure",
    "Housing",
    "Health",
    "Other",
];

// Validation limits
pub const MAX_DESCRIPTION_LENGTH: usize = 255;
pub const MAX_CATEGORY_LENGTH: usize = 100;

// Error messages
pub const ERR_DATABASE_OPERATION: &str = "Database operation failed";

use thiserror::Error;

/// Errors raised by the delivery service when a mutation violates the catalog rules
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeliveryError {
    #[error("Category already exists: {name}")]
    DuplicateCategory { name: String },

    #[error("Category not found: {name}")]
    UnknownCategory { name: String },

    #[error("Restaurant already exists: {name}")]
    DuplicateRestaurant { name: String },

    #[error("Restaurant not found: {name}")]
    UnknownRestaurant { name: String },

    #[error("Dish already exists: restaurant={restaurant}, dish={dish}")]
    DuplicateDish { restaurant: String, dish: String },

    #[error("Validation error: {message}")]
    Validation { message: String },
}

/// Validation errors for input data
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Required field missing: {field}")]
    RequiredField { field: String },

    #[error("Invalid field value: {field}={value}, reason={reason}")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },
}

impl From<ValidationError> for DeliveryError {
    fn from(err: ValidationError) -> Self {
        DeliveryError::Validation {
            message: err.to_string(),
        }
    }
}

impl DeliveryError {
    /// Short machine-friendly label, used for metric labels and log fields
    pub fn kind(&self) -> &'static str {
        match self {
            DeliveryError::DuplicateCategory { .. } => "duplicate_category",
            DeliveryError::UnknownCategory { .. } => "unknown_category",
            DeliveryError::DuplicateRestaurant { .. } => "duplicate_restaurant",
            DeliveryError::UnknownRestaurant { .. } => "unknown_restaurant",
            DeliveryError::DuplicateDish { .. } => "duplicate_dish",
            DeliveryError::Validation { .. } => "validation",
        }
    }
}

/// Result type alias for service operations
pub type DeliveryResult<T> = Result<T, DeliveryError>;

/// Result type alias for validation operations
pub type ValidationResult<T> = Result<T, ValidationError>;

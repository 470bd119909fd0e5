use crate::locale::Locale;

/// Domain validation failures, checked in declaration order; the first one
/// hit is reported.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("invalid product code format")]
    InvalidCodeFormat,

    #[error("intake date in the future")]
    FutureIntakeDate,

    #[error("quantity must be a positive integer")]
    InvalidQuantity,
}

impl ValidationError {
    pub fn message(&self, locale: Locale) -> &'static str {
        locale.validation_message(*self)
    }
}

#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Rejected: {0}")]
    Rejected(#[from] ValidationError),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// Message suitable for showing next to the form.
    pub fn user_message(&self, locale: Locale) -> String {
        match self {
            AppError::BadRequest(msg) => msg.clone(),
            AppError::Rejected(e) => e.message(locale).to_string(),
            AppError::Validation(e) => describe_field_errors(e),
            AppError::Internal(e) => {
                tracing::error!("Internal error: {:?}", e);
                "Internal error".into()
            }
        }
    }
}

/// `field: reason, reason; field: reason`, fields in name order. A failure
/// without a message is named by its rule code.
fn describe_field_errors(errors: &validator::ValidationErrors) -> String {
    let mut fields: Vec<String> = errors
        .field_errors()
        .into_iter()
        .map(|(field, failures)| {
            let reasons: Vec<&str> = failures
                .iter()
                .map(|f| f.message.as_deref().unwrap_or(&*f.code))
                .collect();
            format!("{}: {}", field, reasons.join(", "))
        })
        .collect();
    fields.sort();
    fields.join("; ")
}

pub type Result<T> = std::result::Result<T, AppError>;

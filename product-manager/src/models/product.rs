use std::str::FromStr;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;
use validator::Validate;

use crate::{error::AppError, locale::Locale};

/// Fixed product category set. Serialized by canonical name; display labels
/// come from the active [`Locale`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[default]
    Pharmaceutical,
    MedicalDevice,
    FunctionalFood,
}

impl Category {
    pub const ALL: [Category; 3] = [
        Category::Pharmaceutical,
        Category::MedicalDevice,
        Category::FunctionalFood,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Pharmaceutical => "Pharmaceutical",
            Category::MedicalDevice => "MedicalDevice",
            Category::FunctionalFood => "FunctionalFood",
        }
    }

    pub fn label(&self, locale: Locale) -> &'static str {
        locale.category_label(*self)
    }
}

/// Accepts the canonical name or a display label in any supported locale.
impl FromStr for Category {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| {
                c.as_str() == s || Locale::ALL.iter().any(|locale| c.label(*locale) == s)
            })
            .ok_or_else(|| AppError::BadRequest(format!("Unknown category: {}", s)))
    }
}

/// A validated, stored product entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductRecord {
    pub id: Uuid,
    pub sequence_number: usize,
    pub code: String,
    pub name: String,
    pub category: Category,
    pub quantity: i64,
    pub price: f64,
    /// `DD/MM/YYYY`
    pub intake_date: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

/// Draft entry as typed into the form. Every value is raw text except the
/// category, which comes from a fixed selector.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct CreateProductRequest {
    #[validate(length(min = 1, message = "product code is required"))]
    pub code: String,
    #[validate(length(min = 1, message = "product name is required"))]
    pub name: String,
    #[serde(default)]
    pub category: Category,
    #[validate(length(min = 1, message = "quantity is required"))]
    pub quantity: String,
    #[validate(length(min = 1, message = "price is required"))]
    pub price: String,
    /// `YYYY-MM-DD`, as produced by a date input.
    #[validate(length(min = 1, message = "intake date is required"))]
    pub intake_date: String,
}

/// Names accepted by `ProductManager::update_draft`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Code,
    Name,
    Category,
    Quantity,
    Price,
    IntakeDate,
}

impl FromStr for DraftField {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "code" => Ok(DraftField::Code),
            "name" => Ok(DraftField::Name),
            "category" => Ok(DraftField::Category),
            "quantity" => Ok(DraftField::Quantity),
            "price" => Ok(DraftField::Price),
            "intake_date" => Ok(DraftField::IntakeDate),
            other => Err(AppError::BadRequest(format!("Unknown draft field: {}", other))),
        }
    }
}

impl CreateProductRequest {
    pub fn set(&mut self, field: DraftField, value: String) -> Result<(), AppError> {
        match field {
            DraftField::Code => self.code = value,
            DraftField::Name => self.name = value,
            DraftField::Category => self.category = value.parse()?,
            DraftField::Quantity => self.quantity = value,
            DraftField::Price => self.price = value,
            DraftField::IntakeDate => self.intake_date = value,
        }
        Ok(())
    }
}

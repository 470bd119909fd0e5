use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{
    error::{AppError, ValidationError},
    models::product::Category,
};

/// Language of user-facing strings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Locale {
    #[default]
    Vi,
    En,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::Vi, Locale::En];

    pub fn validation_message(&self, err: ValidationError) -> &'static str {
        match (self, err) {
            (Locale::Vi, ValidationError::InvalidCodeFormat) => {
                "Mã sản phẩm không đúng định dạng (PROD-XXXX)."
            }
            (Locale::Vi, ValidationError::FutureIntakeDate) => {
                "Ngày nhập không được lớn hơn ngày hiện tại."
            }
            (Locale::Vi, ValidationError::InvalidQuantity) => {
                "Số lượng phải là số nguyên lớn hơn 0."
            }
            (Locale::En, ValidationError::InvalidCodeFormat) => {
                "Product code must have the format PROD-XXXX."
            }
            (Locale::En, ValidationError::FutureIntakeDate) => {
                "Intake date cannot be later than today."
            }
            (Locale::En, ValidationError::InvalidQuantity) => {
                "Quantity must be an integer greater than 0."
            }
        }
    }

    pub fn category_label(&self, category: Category) -> &'static str {
        match (self, category) {
            (Locale::Vi, Category::Pharmaceutical) => "Dược phẩm",
            (Locale::Vi, Category::MedicalDevice) => "Thiết bị y tế",
            (Locale::Vi, Category::FunctionalFood) => "Thực phẩm chức năng",
            (Locale::En, Category::Pharmaceutical) => "Pharmaceutical",
            (Locale::En, Category::MedicalDevice) => "Medical device",
            (Locale::En, Category::FunctionalFood) => "Functional food",
        }
    }

    pub fn all_categories_label(&self) -> &'static str {
        match self {
            Locale::Vi => "Tất cả thể loại",
            Locale::En => "All categories",
        }
    }

    /// Column headers of the product table, in display order.
    pub fn table_headers(&self) -> [&'static str; 7] {
        match self {
            Locale::Vi => [
                "STT",
                "Mã sản phẩm",
                "Tên sản phẩm",
                "Thể loại",
                "Số lượng",
                "Giá",
                "Ngày nhập",
            ],
            Locale::En => [
                "No.",
                "Product code",
                "Product name",
                "Category",
                "Quantity",
                "Price",
                "Intake date",
            ],
        }
    }

    pub fn empty_message(&self) -> &'static str {
        match self {
            Locale::Vi => "Không có kết quả",
            Locale::En => "No results",
        }
    }
}

impl FromStr for Locale {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "vi" => Ok(Locale::Vi),
            "en" => Ok(Locale::En),
            other => Err(AppError::BadRequest(format!("Unsupported locale: {}", other))),
        }
    }
}

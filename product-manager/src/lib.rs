//! In-memory product catalogue behind a product-management screen: a
//! validated entry form and a filterable product table.

pub mod clock;
pub mod config;
pub mod error;
pub mod locale;
pub mod logging;
pub mod manager;
pub mod models;
pub mod validation;
pub mod view;

pub use clock::{Clock, FixedClock, ZonedClock};
pub use error::{AppError, ValidationError};
pub use locale::Locale;
pub use manager::ProductManager;
pub use models::product::{Category, CreateProductRequest, ProductRecord};

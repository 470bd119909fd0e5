use time::OffsetDateTime;
use uuid::Uuid;
use validator::Validate;

use crate::{
    clock::{Clock, ZonedClock},
    config::Config,
    error::{Result, ValidationError},
    locale::Locale,
    models::{
        common::{FilterParams, Filters},
        product::{Category, CreateProductRequest, DraftField, ProductRecord},
    },
    validation,
    view::ProductTable,
};

/// Session state of the product screen: the stored records, the pending
/// draft, the last error message, the list filters and the entry panel flag.
///
/// Records are append-only. Nothing here outlives the value.
#[derive(Debug)]
pub struct ProductManager<C: Clock = ZonedClock> {
    clock: C,
    locale: Locale,
    records: Vec<ProductRecord>,
    draft: CreateProductRequest,
    error: String,
    filters: Filters,
    entry_open: bool,
}

impl ProductManager<ZonedClock> {
    pub fn from_config(cfg: &Config) -> Self {
        Self::new(ZonedClock::new(cfg.timezone), cfg.locale)
    }
}

impl<C: Clock> ProductManager<C> {
    pub fn new(clock: C, locale: Locale) -> Self {
        Self {
            clock,
            locale,
            records: Vec::new(),
            draft: CreateProductRequest::default(),
            error: String::new(),
            filters: Filters::default(),
            entry_open: false,
        }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn records(&self) -> &[ProductRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn draft(&self) -> &CreateProductRequest {
        &self.draft
    }

    /// Empty when the last submission succeeded or none was made.
    pub fn error_message(&self) -> &str {
        &self.error
    }

    pub fn filters(&self) -> &Filters {
        &self.filters
    }

    pub fn is_entry_open(&self) -> bool {
        self.entry_open
    }

    pub fn open_entry(&mut self) {
        self.entry_open = true;
    }

    pub fn close_entry(&mut self) {
        self.entry_open = false;
    }

    /// Edits one field of the pending draft, by form field name.
    pub fn update_draft(&mut self, field: &str, value: impl Into<String>) -> Result<()> {
        let field: DraftField = field.parse()?;
        self.draft.set(field, value.into())
    }

    /// Makes `draft` the pending draft and submits it.
    pub fn submit(
        &mut self,
        draft: CreateProductRequest,
    ) -> std::result::Result<ProductRecord, ValidationError> {
        self.draft = draft;
        self.submit_pending()
    }

    /// Validates the pending draft and appends it as a new record.
    ///
    /// On failure the store and the draft are left as they were and the
    /// localized message is kept in [`error_message`](Self::error_message).
    /// On success the draft is reset, the error cleared and the entry panel
    /// closed.
    pub fn submit_pending(&mut self) -> std::result::Result<ProductRecord, ValidationError> {
        self.error.clear();

        let product = match validation::validate_draft(&self.draft, self.clock.today()) {
            Ok(product) => product,
            Err(e) => {
                tracing::warn!(code = %self.draft.code, "Product rejected: {}", e);
                self.error = e.message(self.locale).to_string();
                return Err(e);
            }
        };

        let record = ProductRecord {
            id: Uuid::new_v4(),
            sequence_number: self.records.len() + 1,
            code: product.code,
            name: product.name,
            category: product.category,
            quantity: product.quantity,
            price: product.price,
            intake_date: validation::display_date(product.intake_date),
            created_at: OffsetDateTime::now_utc(),
        };
        self.records.push(record.clone());

        self.draft = CreateProductRequest::default();
        self.entry_open = false;

        tracing::info!(
            id = %record.id,
            sequence_number = record.sequence_number,
            "Product {} added",
            record.code
        );

        Ok(record)
    }

    /// Checks that every required field is filled in before submitting.
    /// A request with missing fields leaves the session untouched.
    pub fn create(&mut self, req: CreateProductRequest) -> Result<ProductRecord> {
        req.validate()?;
        Ok(self.submit(req)?)
    }

    pub fn set_filters(&mut self, search_term: impl Into<String>, category: Option<Category>) {
        self.filters = Filters {
            search_term: search_term.into(),
            category,
        };
        tracing::debug!(
            search = %self.filters.search_term,
            category = ?self.filters.category,
            "Filters updated"
        );
    }

    pub fn apply_filter_params(&mut self, params: &FilterParams) -> Result<()> {
        let category = params.category()?;
        self.set_filters(params.search_term(), category);
        Ok(())
    }

    /// Records matching the current filters, in insertion order.
    pub fn visible_records(&self) -> Vec<&ProductRecord> {
        self.records
            .iter()
            .filter(|r| self.filters.matches(r))
            .collect()
    }

    pub fn table(&self) -> ProductTable {
        ProductTable::build(self.visible_records(), self.locale)
    }
}

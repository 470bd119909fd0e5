use std::fmt;

use serde::Serialize;

use crate::{locale::Locale, models::product::ProductRecord};

/// One table row, already formatted for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductRow {
    pub sequence_number: usize,
    pub code: String,
    pub name: String,
    pub category: &'static str,
    pub quantity: i64,
    pub price: String,
    pub intake_date: String,
}

impl ProductRow {
    pub fn new(record: &ProductRecord, locale: Locale) -> Self {
        Self {
            sequence_number: record.sequence_number,
            code: record.code.clone(),
            name: record.name.clone(),
            category: record.category.label(locale),
            quantity: record.quantity,
            price: format_price(record.price),
            intake_date: record.intake_date.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductTable {
    pub headers: [&'static str; 7],
    pub rows: Vec<ProductRow>,
    /// Set only when there are no rows.
    pub empty_message: Option<&'static str>,
}

impl ProductTable {
    pub fn build<'a, I>(records: I, locale: Locale) -> Self
    where
        I: IntoIterator<Item = &'a ProductRecord>,
    {
        let rows: Vec<ProductRow> = records
            .into_iter()
            .map(|r| ProductRow::new(r, locale))
            .collect();
        let empty_message = rows.is_empty().then(|| locale.empty_message());
        Self {
            headers: locale.table_headers(),
            rows,
            empty_message,
        }
    }
}

impl fmt::Display for ProductTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(msg) = self.empty_message {
            return writeln!(f, "{}", msg);
        }
        writeln!(f, "{}", self.headers.join("\t"))?;
        for row in &self.rows {
            writeln!(
                f,
                "{}\t{}\t{}\t{}\t{}\t{}\t{}",
                row.sequence_number,
                row.code,
                row.name,
                row.category,
                row.quantity,
                row.price,
                row.intake_date
            )?;
        }
        Ok(())
    }
}

/// Shortest round-trip form: `5.5`, `10`. NaN renders as an empty cell.
pub fn format_price(price: f64) -> String {
    if price.is_nan() {
        String::new()
    } else {
        price.to_string()
    }
}

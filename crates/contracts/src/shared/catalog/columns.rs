//! Presentation-neutral description of what each column shows.
//!
//! A dataset shape declares its table columns and card rows as a
//! [`CatalogLayout`]; the frontend turns each [`CellValue`] into markup.

use super::record::{UnitPrice, PLACEHOLDER};

/// Content of one table cell or card row
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    /// Nothing to show; rendered as `-`
    Placeholder,
    /// Stacked sub-list (units, prices)
    Lines(Vec<String>),
    /// In-app route
    Link { href: String, label: String },
    /// External document, opened in a new browsing context
    Document { href: String, label: String },
}

impl CellValue {
    /// Text cell, or the placeholder when the value is missing or blank.
    pub fn text_or_placeholder(value: Option<&str>) -> Self {
        match value {
            Some(v) if !v.trim().is_empty() => CellValue::Text(v.to_string()),
            _ => CellValue::Placeholder,
        }
    }

    /// Sub-list, or the placeholder when it would be empty.
    pub fn lines_or_placeholder(lines: Vec<String>) -> Self {
        if lines.is_empty() {
            CellValue::Placeholder
        } else {
            CellValue::Lines(lines)
        }
    }

    pub fn document(href: Option<String>, label: &str) -> Self {
        match href {
            Some(href) if !href.trim().is_empty() => CellValue::Document {
                href,
                label: label.to_string(),
            },
            _ => CellValue::Placeholder,
        }
    }

    /// Flat text form, shown as the table cell tooltip.
    pub fn display_text(&self) -> String {
        match self {
            CellValue::Text(s) => s.clone(),
            CellValue::Placeholder => PLACEHOLDER.to_string(),
            CellValue::Lines(lines) => lines.join(", "),
            CellValue::Link { label, .. } | CellValue::Document { label, .. } => label.clone(),
        }
    }
}

/// One column of the desktop table or one row of the mobile card
pub struct ColumnDef<T> {
    pub key: &'static str,
    pub title: &'static str,
    pub value: fn(&T) -> CellValue,
}

impl<T> Clone for ColumnDef<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for ColumnDef<T> {}

impl<T> ColumnDef<T> {
    pub const fn new(key: &'static str, title: &'static str, value: fn(&T) -> CellValue) -> Self {
        Self { key, title, value }
    }

    pub fn cell(&self, record: &T) -> CellValue {
        (self.value)(record)
    }
}

/// Everything the generic list page needs to know about a dataset shape
pub struct CatalogLayout<T> {
    /// Entity key used for page ids, e.g. `a001_chemical`
    pub entity: &'static str,
    pub title: &'static str,
    pub search_placeholder: &'static str,
    pub table: Vec<ColumnDef<T>>,
    pub card: Vec<ColumnDef<T>>,
}

impl<T> Clone for CatalogLayout<T> {
    fn clone(&self) -> Self {
        Self {
            entity: self.entity,
            title: self.title,
            search_placeholder: self.search_placeholder,
            table: self.table.clone(),
            card: self.card.clone(),
        }
    }
}

/// Unit names of a price list, one per line.
pub fn unit_lines(prices: &[UnitPrice]) -> CellValue {
    CellValue::lines_or_placeholder(prices.iter().map(|p| p.unit.clone()).collect())
}

/// Prices of a price list, one per line, with the currency sign.
pub fn price_lines(prices: &[UnitPrice]) -> CellValue {
    CellValue::lines_or_placeholder(prices.iter().map(UnitPrice::price_label).collect())
}

/// `500GM - ₹1200` lines, used by the compact card view.
pub fn combined_lines(prices: &[UnitPrice]) -> CellValue {
    CellValue::lines_or_placeholder(prices.iter().map(UnitPrice::combined_label).collect())
}

/// Purity fraction as a percentage with at most two decimals.
/// Zero or a missing value shows the placeholder.
pub fn format_purity(purity: Option<f64>) -> CellValue {
    match purity {
        Some(p) if p != 0.0 && p.is_finite() => {
            let pct = format!("{:.2}", p * 100.0);
            let pct = pct.trim_end_matches('0').trim_end_matches('.');
            CellValue::Text(format!("{}%", pct))
        }
        _ => CellValue::Placeholder,
    }
}

/// Sentinel used by the price sheets for "not sold in this pack size"
pub const ABSENT_SENTINEL: &str = "-";

/// Display value for any field that has nothing to show
pub const PLACEHOLDER: &str = "-";

/// Currency sign prefixed to every price
pub const CURRENCY_SIGN: &str = "₹";

/// One pack size offered for a record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitPrice {
    pub unit: String,
    pub price: String,
}

impl UnitPrice {
    pub fn new(unit: impl Into<String>, price: impl Into<String>) -> Self {
        Self {
            unit: unit.into(),
            price: price.into(),
        }
    }

    /// `₹1200`
    pub fn price_label(&self) -> String {
        format!("{}{}", CURRENCY_SIGN, self.price)
    }

    /// `500GM - ₹1200`
    pub fn combined_label(&self) -> String {
        format!("{} - {}", self.unit, self.price_label())
    }
}

/// `true` when a sparse field carries a value: not missing, not empty, not `"-"`.
pub fn is_present(value: Option<&str>) -> bool {
    matches!(value, Some(v) if !v.is_empty() && v != ABSENT_SENTINEL)
}

/// Field accessors shared by every dataset shape.
///
/// The list page, the filter stage and the detail page only talk to records
/// through this trait, so a new dataset shape only needs an impl and a
/// column layout.
pub trait CatalogRecord: Clone + Send + Sync + 'static {
    /// Article / catalogue number.
    fn article_no(&self) -> Option<&str>;

    fn chemical_name(&self) -> Option<&str>;

    fn cas_number(&self) -> Option<&str>;

    /// Pack sizes with a price, in display order. Absent prices are skipped.
    fn unit_prices(&self) -> Vec<UnitPrice>;

    /// The three identity fields the search box looks at.
    fn search_fields(&self) -> [Option<&str>; 3] {
        [self.article_no(), self.chemical_name(), self.cas_number()]
    }

    /// `needle` must already be lowercase.
    fn matches_query(&self, needle: &str) -> bool {
        if needle.is_empty() {
            return true;
        }
        self.search_fields()
            .iter()
            .any(|field| field.unwrap_or("").to_lowercase().contains(needle))
    }
}

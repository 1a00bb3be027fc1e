use crate::shared::catalog::record::{is_present, CatalogRecord, UnitPrice};
use crate::shared::lenient::{opt_number, opt_text};
use serde::Deserialize;

/// Route prefix of the catalogue listing and its detail pages
pub const CHEMICALS_ROUTE: &str = "/chemicals";

/// Directory the certificates of analysis are published under
pub const COA_DIR: &str = "/pdfs/coa";

// ============================================================================
// Record
// ============================================================================

/// One product of the main catalogue (price-sheet export, PascalCase keys)
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Chemical {
    #[serde(rename = "Id", default, deserialize_with = "opt_text")]
    pub id: Option<String>,

    #[serde(rename = "CatalogueNumber", default, deserialize_with = "opt_text")]
    pub catalogue_number: Option<String>,

    #[serde(rename = "ChemicalName", default, deserialize_with = "opt_text")]
    pub chemical_name: Option<String>,

    #[serde(rename = "CASNumber", default, deserialize_with = "opt_text")]
    pub cas_number: Option<String>,

    /// Fraction in `[0, 1]`
    #[serde(rename = "Purity", default, deserialize_with = "opt_number")]
    pub purity: Option<f64>,

    #[serde(rename = "500GM Price", default, deserialize_with = "opt_text")]
    pub price_500gm: Option<String>,

    #[serde(rename = "100GM Price", default, deserialize_with = "opt_text")]
    pub price_100gm: Option<String>,
}

impl Chemical {
    /// `/chemicals/{CatalogueNumber}`, when the record has a catalogue number
    pub fn detail_href(&self) -> Option<String> {
        self.catalogue_number
            .as_deref()
            .filter(|n| !n.is_empty())
            .map(|n| format!("{}/{}", CHEMICALS_ROUTE, urlencoding::encode(n)))
    }

    /// `/pdfs/coa/{CatalogueNumber}.pdf`
    pub fn coa_href(&self) -> Option<String> {
        self.catalogue_number
            .as_deref()
            .filter(|n| !n.is_empty())
            .map(|n| format!("{}/{}.pdf", COA_DIR, urlencoding::encode(n)))
    }
}

impl CatalogRecord for Chemical {
    fn article_no(&self) -> Option<&str> {
        self.catalogue_number.as_deref()
    }

    fn chemical_name(&self) -> Option<&str> {
        self.chemical_name.as_deref()
    }

    fn cas_number(&self) -> Option<&str> {
        self.cas_number.as_deref()
    }

    fn unit_prices(&self) -> Vec<UnitPrice> {
        [("500GM", &self.price_500gm), ("100GM", &self.price_100gm)]
            .into_iter()
            .filter(|(_, price)| is_present(price.as_deref()))
            .filter_map(|(unit, price)| price.as_ref().map(|p| UnitPrice::new(unit, p.clone())))
            .collect()
    }
}

/// First record carrying exactly this catalogue number.
pub fn find_by_catalogue_number<'a>(
    records: &'a [Chemical],
    catalogue_number: &str,
) -> Option<&'a Chemical> {
    records
        .iter()
        .find(|c| c.catalogue_number.as_deref() == Some(catalogue_number))
}

/// Record behind a `/chemicals/:catalogue_number` route parameter.
///
/// The parameter is tried as given first, so a catalogue number that
/// contains `%` is not decoded a second time; the percent-decoded form is
/// only tried when the raw one has no match.
pub fn find_by_route_param<'a>(records: &'a [Chemical], param: &str) -> Option<&'a Chemical> {
    find_by_catalogue_number(records, param).or_else(|| {
        urlencoding::decode(param)
            .ok()
            .filter(|decoded| decoded != param)
            .and_then(|decoded| find_by_catalogue_number(records, &decoded))
    })
}

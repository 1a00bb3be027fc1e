use crate::shared::catalog::record::{is_present, CatalogRecord, UnitPrice};
use crate::shared::lenient::opt_text;
use serde::Deserialize;

/// Route of the article-numbered listing
pub const PRODUCTS_ROUTE: &str = "/products";

/// One pack size of an article-numbered product
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PackPrice {
    #[serde(default, deserialize_with = "opt_text")]
    pub unit: Option<String>,

    #[serde(default, deserialize_with = "opt_text")]
    pub price: Option<String>,
}

/// Product of the article-numbered catalog (camelCase keys, explicit units
/// and document links)
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SampleChemical {
    #[serde(default, deserialize_with = "opt_text")]
    pub article_no: Option<String>,

    #[serde(default, deserialize_with = "opt_text")]
    pub chemical_name: Option<String>,

    #[serde(default, deserialize_with = "opt_text")]
    pub category: Option<String>,

    #[serde(default, deserialize_with = "opt_text")]
    pub cas_number: Option<String>,

    #[serde(default)]
    pub units: Vec<PackPrice>,

    /// Absolute URL or site-relative path
    #[serde(default, deserialize_with = "opt_text")]
    pub msds: Option<String>,

    #[serde(default, deserialize_with = "opt_text")]
    pub coa: Option<String>,
}

impl CatalogRecord for SampleChemical {
    fn article_no(&self) -> Option<&str> {
        self.article_no.as_deref()
    }

    fn chemical_name(&self) -> Option<&str> {
        self.chemical_name.as_deref()
    }

    fn cas_number(&self) -> Option<&str> {
        self.cas_number.as_deref()
    }

    fn unit_prices(&self) -> Vec<UnitPrice> {
        self.units
            .iter()
            .filter(|p| is_present(p.price.as_deref()))
            .map(|p| {
                UnitPrice::new(
                    p.unit.clone().unwrap_or_default(),
                    p.price.clone().unwrap_or_default(),
                )
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decodes_article_record() {
        let c: SampleChemical = serde_json::from_str(
            r#"{"articleNo": "AR-2001", "chemicalName": "Toluene", "category": "Solvents",
                "casNumber": "108-88-3",
                "units": [{"unit": "500ml", "price": 420}, {"unit": "2.5L", "price": "-"}],
                "msds": "https://docs.example.com/msds/AR-2001.pdf"}"#,
        )
        .unwrap();
        assert_eq!(c.article_no(), Some("AR-2001"));
        assert_eq!(c.unit_prices(), vec![UnitPrice::new("500ml", "420")]);
        assert_eq!(c.coa, None);
    }

    #[test]
    fn test_missing_units_is_empty() {
        let c: SampleChemical = serde_json::from_str(r#"{"chemicalName": "Toluene"}"#).unwrap();
        assert!(c.unit_prices().is_empty());
        assert_eq!(c.cas_number(), None);
    }
}

use super::aggregate::SampleChemical;
use crate::shared::catalog::columns::{combined_lines, price_lines, unit_lines};
use crate::shared::catalog::{CatalogLayout, CatalogRecord, CellValue, ColumnDef};

pub const ENTITY: &str = "a002_sample_chemical";

fn article(c: &SampleChemical) -> CellValue {
    CellValue::text_or_placeholder(c.article_no.as_deref())
}

fn name(c: &SampleChemical) -> CellValue {
    CellValue::text_or_placeholder(c.chemical_name.as_deref())
}

fn category(c: &SampleChemical) -> CellValue {
    CellValue::text_or_placeholder(c.category.as_deref())
}

fn cas(c: &SampleChemical) -> CellValue {
    CellValue::text_or_placeholder(c.cas_number.as_deref())
}

fn units(c: &SampleChemical) -> CellValue {
    unit_lines(&c.unit_prices())
}

fn prices(c: &SampleChemical) -> CellValue {
    price_lines(&c.unit_prices())
}

fn units_with_prices(c: &SampleChemical) -> CellValue {
    combined_lines(&c.unit_prices())
}

fn msds(c: &SampleChemical) -> CellValue {
    CellValue::document(c.msds.clone(), "View")
}

fn coa(c: &SampleChemical) -> CellValue {
    CellValue::document(c.coa.clone(), "View")
}

/// The card swaps the split unit/price columns for one combined list and
/// adds the category.
pub fn layout() -> CatalogLayout<SampleChemical> {
    CatalogLayout {
        entity: ENTITY,
        title: "Products",
        search_placeholder: "Search by Article No, Name, or CAS Number",
        table: vec![
            ColumnDef::new("article_no", "Article No", article),
            ColumnDef::new("chemical_name", "Chemical Name", name),
            ColumnDef::new("cas_number", "CAS Number", cas),
            ColumnDef::new("units", "Units", units),
            ColumnDef::new("price", "Price (per unit)", prices),
            ColumnDef::new("msds", "MSDS", msds),
            ColumnDef::new("coa", "COA", coa),
        ],
        card: vec![
            ColumnDef::new("article_no", "Article No.", article),
            ColumnDef::new("chemical_name", "Chemical Name", name),
            ColumnDef::new("category", "Category", category),
            ColumnDef::new("cas_number", "CAS Number", cas),
            ColumnDef::new("units", "Units", units_with_prices),
            ColumnDef::new("msds", "MSDS", msds),
            ColumnDef::new("coa", "COA", coa),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> SampleChemical {
        serde_json::from_str(
            r#"{"articleNo": "AR-2001", "chemicalName": "Toluene", "category": "Solvents",
                "casNumber": "108-88-3",
                "units": [{"unit": "500ml", "price": 420}, {"unit": "2.5L", "price": 1650}],
                "msds": "/pdfs/msds/AR-2001.pdf", "coa": ""}"#,
        )
        .unwrap()
    }

    #[test]
    fn test_table_splits_units_and_prices() {
        let c = record();
        let cells: Vec<CellValue> = layout().table.iter().map(|col| col.cell(&c)).collect();
        assert_eq!(cells[3].display_text(), "500ml, 2.5L");
        assert_eq!(cells[4].display_text(), "₹420, ₹1650");
        assert_eq!(
            cells[5],
            CellValue::Document {
                href: "/pdfs/msds/AR-2001.pdf".into(),
                label: "View".into()
            }
        );
        assert_eq!(cells[6], CellValue::Placeholder);
    }

    #[test]
    fn test_card_combines_units_and_shows_category() {
        let c = record();
        let rows: Vec<(&str, String)> = layout()
            .card
            .iter()
            .map(|col| (col.title, col.cell(&c).display_text()))
            .collect();
        assert!(rows.contains(&("Category", "Solvents".to_string())));
        assert!(rows.contains(&("Units", "500ml - ₹420, 2.5L - ₹1650".to_string())));
    }

    #[test]
    fn test_column_keys_are_distinct_per_view() {
        let layout = layout();
        for cols in [&layout.table, &layout.card] {
            let mut keys: Vec<&str> = cols.iter().map(|c| c.key).collect();
            keys.sort_unstable();
            keys.dedup();
            assert_eq!(keys.len(), cols.len());
        }
    }
}

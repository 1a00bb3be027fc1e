use super::aggregate::Chemical;
use crate::shared::catalog::columns::{format_purity, price_lines, unit_lines};
use crate::shared::catalog::{CatalogLayout, CatalogRecord, CellValue, ColumnDef};

pub const ENTITY: &str = "a001_chemical";

fn id(c: &Chemical) -> CellValue {
    CellValue::text_or_placeholder(c.id.as_deref())
}

fn name(c: &Chemical) -> CellValue {
    let label = c.chemical_name.clone().unwrap_or_default();
    match c.detail_href() {
        Some(href) if !label.is_empty() => CellValue::Link { href, label },
        _ => CellValue::text_or_placeholder(c.chemical_name.as_deref()),
    }
}

fn purity(c: &Chemical) -> CellValue {
    format_purity(c.purity)
}

fn cas(c: &Chemical) -> CellValue {
    CellValue::text_or_placeholder(c.cas_number.as_deref())
}

fn units(c: &Chemical) -> CellValue {
    unit_lines(&c.unit_prices())
}

fn prices(c: &Chemical) -> CellValue {
    price_lines(&c.unit_prices())
}

fn coa(c: &Chemical) -> CellValue {
    CellValue::document(c.coa_href(), "Click to view")
}

fn columns() -> Vec<ColumnDef<Chemical>> {
    vec![
        ColumnDef::new("id", "ID", id),
        ColumnDef::new("chemical_name", "Chemical Name", name),
        ColumnDef::new("purity", "Purity", purity),
        ColumnDef::new("cas_number", "CAS Number", cas),
        ColumnDef::new("units", "Units", units),
        ColumnDef::new("price", "Price", prices),
        ColumnDef::new("coa", "COA", coa),
    ]
}

/// Table and card show the same fields for the catalogue.
pub fn layout() -> CatalogLayout<Chemical> {
    CatalogLayout {
        entity: ENTITY,
        title: "Chemicals",
        search_placeholder: "Search by Catalogue No, Name, or CAS Number",
        table: columns(),
        card: columns(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_for_full_record() {
        let c: Chemical = serde_json::from_str(
            r#"{"Id": 1, "CatalogueNumber": "LC-1001", "ChemicalName": "Acetone",
                "Purity": 0.99, "CASNumber": "67-64-1",
                "500GM Price": "640", "100GM Price": "180"}"#,
        )
        .unwrap();
        let cells: Vec<CellValue> = layout().table.iter().map(|col| col.cell(&c)).collect();
        assert_eq!(cells[0], CellValue::Text("1".into()));
        assert_eq!(
            cells[1],
            CellValue::Link {
                href: "/chemicals/LC-1001".into(),
                label: "Acetone".into()
            }
        );
        assert_eq!(cells[2].display_text(), "99%");
        assert_eq!(cells[4].display_text(), "500GM, 100GM");
        assert_eq!(cells[5].display_text(), "₹640, ₹180");
        assert_eq!(
            cells[6],
            CellValue::Document {
                href: "/pdfs/coa/LC-1001.pdf".into(),
                label: "Click to view".into()
            }
        );
    }

    #[test]
    fn test_row_for_sparse_record_degrades_to_placeholders() {
        let c: Chemical = serde_json::from_str(r#"{"ChemicalName": "Unknown"}"#).unwrap();
        let cells: Vec<CellValue> = layout().card.iter().map(|col| col.cell(&c)).collect();
        assert_eq!(cells[1], CellValue::Text("Unknown".into()));
        for idx in [0, 2, 3, 4, 5, 6] {
            assert_eq!(cells[idx], CellValue::Placeholder, "column {idx}");
        }
    }

    #[test]
    fn test_headers() {
        let titles: Vec<&str> = layout().table.iter().map(|c| c.title).collect();
        assert_eq!(
            titles,
            ["ID", "Chemical Name", "Purity", "CAS Number", "Units", "Price", "COA"]
        );
    }

    #[test]
    fn test_column_keys_are_distinct() {
        let keys: Vec<&str> = layout().table.iter().map(|c| c.key).collect();
        assert_eq!(
            keys,
            ["id", "chemical_name", "purity", "cas_number", "units", "price", "coa"]
        );
    }
}

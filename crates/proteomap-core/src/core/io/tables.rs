use crate::core::composition::table::CategoryTable;
use crate::core::models::protein::ComputedProtein;
use serde::Serialize;
use std::io::Write;

pub const SYMBOL_HEADER: &str = "amino_acid";

/// Writes `table` as CSV: a symbol column followed by one column per category.
pub fn write_category_table<W: Write>(table: &CategoryTable, writer: W) -> Result<(), csv::Error> {
    let mut writer = csv::Writer::from_writer(writer);

    let mut header = vec![SYMBOL_HEADER.to_string()];
    header.extend(table.categories().iter().map(|c| c.to_string()));
    writer.write_record(&header)?;

    for (symbol, row) in table.rows() {
        let mut record = Vec::with_capacity(row.len() + 1);
        record.push(symbol.to_string());
        record.extend(row.iter().map(|v| v.to_string()));
        writer.write_record(&record)?;
    }

    writer.flush()?;
    Ok(())
}

#[derive(Debug, Serialize)]
struct PropertyRow<'a> {
    name: &'a str,
    category: &'static str,
    length: usize,
    molecular_weight: f64,
    isoelectric_point: f64,
}

/// Writes one CSV row per protein, in input order.
pub fn write_protein_properties<W: Write>(
    proteins: &[ComputedProtein],
    writer: W,
) -> Result<(), csv::Error> {
    let mut writer = csv::Writer::from_writer(writer);
    for protein in proteins {
        writer.serialize(PropertyRow {
            name: &protein.display_name,
            category: protein.category.as_str(),
            length: protein.length,
            molecular_weight: protein.molecular_weight,
            isoelectric_point: protein.isoelectric_point,
        })?;
    }
    writer.flush()?;
    Ok(())
}

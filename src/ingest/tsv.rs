//! Header-first TSV decoding into generic JSON records.
//!
//! The upstream TSV columns become string-valued JSON object fields, exactly
//! as the downstream raw-model types expect them. Fields missing from a
//! short row are omitted rather than filled, matching the permissive
//! upstream export.

use serde_json::{Map, Value};

use crate::error::Result;

/// Decode a TSV document into one JSON object per row, keyed by the header
/// row. Returns an empty list for a header-only or empty document.
pub fn parse_tsv(text: &str) -> Result<Vec<Map<String, Value>>> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers = reader.headers()?.clone();
    let mut records = Vec::new();

    for row in reader.records() {
        let row = row?;
        let mut record = Map::new();
        for (header, field) in headers.iter().zip(row.iter()) {
            record.insert(header.to_string(), Value::String(field.to_string()));
        }
        records.push(record);
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tsv_basic() {
        let text = "Nom\tType\nLe Monde\tPresse (généraliste)\nFrance Inter\tRadio\n";
        let records = parse_tsv(text).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0]["Nom"], "Le Monde");
        assert_eq!(records[0]["Type"], "Presse (généraliste)");
        assert_eq!(records[1]["Nom"], "France Inter");
    }

    #[test]
    fn test_parse_tsv_short_row_omits_fields() {
        let text = "origine\tcible\tvaleur\nA\tB\n";
        let records = parse_tsv(text).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0]["origine"], "A");
        assert!(!records[0].contains_key("valeur"));
    }

    #[test]
    fn test_parse_tsv_empty_document() {
        assert!(parse_tsv("").unwrap().is_empty());
        assert!(parse_tsv("Nom\tType\n").unwrap().is_empty());
    }

    #[test]
    fn test_parsed_records_deserialize_as_relations() {
        let text = "id\torigine\tqualificatif\tvaleur\tcible\n1\tNJJ Presse\tégal à\t28.00%\tLe Monde libre\n";
        let records = parse_tsv(text).unwrap();
        let json = serde_json::to_string(&records).unwrap();
        let relations: Vec<crate::model::Relation> = serde_json::from_str(&json).unwrap();
        assert_eq!(relations[0].origin, "NJJ Presse");
        assert_eq!(relations[0].value, "28.00%");
    }
}

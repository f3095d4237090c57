use serde::{Deserialize, Deserializer, Serialize};

/// Table shape produced by a structured-data decoder.
///
/// Field names are matched exactly (`Headers`, `Rows`). A missing or `null` field decodes
/// as empty, and so does a `null` row or cell.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecodedTable {
    #[serde(rename = "Headers", default, deserialize_with = "nullable_cells")]
    pub headers: Vec<String>,
    #[serde(rename = "Rows", default, deserialize_with = "nullable_rows")]
    pub rows: Vec<Vec<String>>,
}

fn nullable_cells<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let cells: Option<Vec<Option<String>>> = Option::deserialize(deserializer)?;
    Ok(cells
        .unwrap_or_default()
        .into_iter()
        .map(Option::unwrap_or_default)
        .collect())
}

fn nullable_rows<'de, D>(deserializer: D) -> Result<Vec<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    let rows: Option<Vec<Option<Vec<Option<String>>>>> = Option::deserialize(deserializer)?;
    Ok(rows
        .unwrap_or_default()
        .into_iter()
        .map(|row| {
            row.unwrap_or_default()
                .into_iter()
                .map(Option::unwrap_or_default)
                .collect()
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_names_are_case_sensitive() {
        let decoded: DecodedTable =
            serde_json::from_str(r#"{"headers": ["a"], "rows": [["1"]]}"#).unwrap();
        assert!(decoded.headers.is_empty());
        assert!(decoded.rows.is_empty());

        let decoded: DecodedTable =
            serde_json::from_str(r#"{"Headers": ["a"], "Rows": [["1"]], "Extra": 1}"#).unwrap();
        assert_eq!(decoded.headers, vec!["a".to_string()]);
        assert_eq!(decoded.rows, vec![vec!["1".to_string()]]);
    }

    #[test]
    fn test_null_decodes_as_empty() {
        let decoded: DecodedTable =
            serde_json::from_str(r#"{"Headers": null, "Rows": null}"#).unwrap();
        assert_eq!(decoded, DecodedTable::default());

        let decoded: DecodedTable =
            serde_json::from_str(r#"{"Headers": ["a", null], "Rows": [null, ["1", null]]}"#)
                .unwrap();
        assert_eq!(decoded.headers, vec!["a", ""]);
        assert!(decoded.rows[0].is_empty());
        assert_eq!(decoded.rows[1], vec!["1", ""]);
    }

    #[test]
    fn test_serializes_with_exact_field_names() {
        let decoded = DecodedTable {
            headers: vec!["h".to_string()],
            rows: vec![Vec::new()],
        };
        let json = serde_json::to_string(&decoded).unwrap();
        assert_eq!(json, r#"{"Headers":["h"],"Rows":[[]]}"#);
    }
}

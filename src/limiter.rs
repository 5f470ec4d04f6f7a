use crate::model::Row;

/// Keeps the first `max` rows of a scrape, in document order.
pub fn truncate(mut rows: Vec<Row>, max: usize) -> Vec<Row> {
    rows.truncate(max);
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbered_rows(n: usize) -> Vec<Row> {
        (1..=n)
            .map(|i| Row {
                fields: vec![("#".to_string(), i.to_string())],
            })
            .collect()
    }

    #[test]
    fn caps_at_max_preserving_order() {
        let rows = truncate(numbered_rows(15), 10);
        assert_eq!(rows.len(), 10);
        for (i, row) in rows.iter().enumerate() {
            assert_eq!(row.get("#"), Some((i + 1).to_string().as_str()));
        }
    }

    #[test]
    fn shorter_input_is_untouched() {
        assert_eq!(truncate(numbered_rows(3), 10).len(), 3);
        assert!(truncate(Vec::new(), 10).is_empty());
    }
}

// IGP report-table extraction: first <table>, <th> texts as column names,
// every later <tr> zipped positionally against them.
use crate::model::{ExtractError, Row};
use scraper::{ElementRef, Html, Selector};

pub trait Extractor {
    fn extract(&self, html: &str) -> Result<Vec<Row>, ExtractError>;
}

pub struct TableExtractor;

impl TableExtractor {
    pub fn new() -> Self {
        Self
    }
}

fn selector(source: &str) -> Result<Selector, ExtractError> {
    Selector::parse(source).map_err(|e| ExtractError::Selector(e.to_string()))
}

fn cell_text(cell: ElementRef<'_>) -> String {
    cell.text().collect::<String>().trim().to_string()
}

impl Extractor for TableExtractor {
    fn extract(&self, html: &str) -> Result<Vec<Row>, ExtractError> {
        let document = Html::parse_document(html);

        let table_selector = selector("table")?;
        let th_selector = selector("th")?;
        let tr_selector = selector("tr")?;
        let td_selector = selector("td")?;

        let table = document
            .select(&table_selector)
            .next()
            .ok_or(ExtractError::TableNotFound)?;

        let headers: Vec<String> = table.select(&th_selector).map(cell_text).collect();
        if headers.is_empty() {
            return Err(ExtractError::NoHeaders);
        }

        let mut rows = Vec::new();
        // First <tr> is the header row; data starts after it.
        for tr in table.select(&tr_selector).skip(1) {
            let cells: Vec<String> = tr.select(&td_selector).map(cell_text).collect();
            if cells.is_empty() {
                continue;
            }

            // Positional zip: cells beyond the header count are dropped,
            // headers beyond the cell count stay absent from the row.
            let fields = headers
                .iter()
                .zip(cells)
                .map(|(name, value)| (name.clone(), value))
                .collect();
            rows.push(Row { fields });
        }

        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(html: &str) -> Result<Vec<Row>, ExtractError> {
        TableExtractor::new().extract(html)
    }

    const REPORT_TABLE: &str = r#"
        <html><body>
        <table>
            <tr><th>Fecha</th><th>Hora</th><th>Magnitud</th></tr>
            <tr><td>28/08/2026</td><td>04:12</td><td>4.5</td></tr>
            <tr><td>27/08/2026</td><td>22:03</td><td>3.9</td></tr>
            <tr><td>27/08/2026</td><td>13:41</td><td>5.1</td></tr>
        </table>
        </body></html>
    "#;

    #[test]
    fn extracts_rows_keyed_by_headers() {
        let rows = extract(REPORT_TABLE).unwrap();
        assert_eq!(rows.len(), 3);
        for row in &rows {
            let columns: Vec<&str> = row.columns().collect();
            assert_eq!(columns, vec!["Fecha", "Hora", "Magnitud"]);
        }
        assert_eq!(rows[0].get("Hora"), Some("04:12"));
        assert_eq!(rows[2].get("Magnitud"), Some("5.1"));
    }

    #[test]
    fn missing_table_is_reported() {
        let err = extract("<html><body><p>sin datos</p></body></html>").unwrap_err();
        assert!(matches!(err, ExtractError::TableNotFound));
    }

    #[test]
    fn table_without_headers_is_reported() {
        let html = "<table><tr><td>1</td></tr><tr><td>2</td></tr></table>";
        let err = extract(html).unwrap_err();
        assert!(matches!(err, ExtractError::NoHeaders));
    }

    #[test]
    fn short_row_omits_trailing_columns() {
        let html = r#"
            <table>
                <tr><th>A</th><th>B</th><th>C</th></tr>
                <tr><td>1</td><td>2</td></tr>
            </table>
        "#;
        let rows = extract(html).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].get("A"), Some("1"));
        assert_eq!(rows[0].get("B"), Some("2"));
        assert_eq!(rows[0].get("C"), None);
    }

    #[test]
    fn surplus_cells_are_dropped() {
        let html = r#"
            <table>
                <tr><th>A</th></tr>
                <tr><td>1</td><td>2</td></tr>
            </table>
        "#;
        let rows = extract(html).unwrap();
        assert_eq!(rows[0].fields, vec![("A".to_string(), "1".to_string())]);
    }

    #[test]
    fn rows_without_data_cells_are_skipped() {
        let html = r#"
            <table>
                <tr><th>A</th></tr>
                <tr></tr>
                <tr><td>1</td></tr>
                <tr><th>A</th></tr>
            </table>
        "#;
        let rows = extract(html).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].get("A"), Some("1"));
    }

    #[test]
    fn cell_text_is_trimmed() {
        let html = r#"
            <table>
                <tr><th> Fecha </th></tr>
                <tr><td>  28/08/2026
                </td></tr>
            </table>
        "#;
        let rows = extract(html).unwrap();
        assert_eq!(rows[0].get("Fecha"), Some("28/08/2026"));
    }

    #[test]
    fn thead_tbody_markup_is_handled() {
        let html = r#"
            <table>
                <thead><tr><th>Fecha</th><th>Magnitud</th></tr></thead>
                <tbody>
                    <tr><td>28/08/2026</td><td>4.5</td></tr>
                </tbody>
            </table>
        "#;
        let rows = extract(html).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].get("Magnitud"), Some("4.5"));
    }
}

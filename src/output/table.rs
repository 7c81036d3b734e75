//! Table output formatting

use tabled::{
    Table, Tabled,
    settings::{Alignment, Modify, Style, object::{Columns, Rows}},
};

/// Format rows as a table with right-aligned values
pub fn format_table<T: Tabled>(data: &[T]) -> String {
    if data.is_empty() {
        return "No counters to show.".to_string();
    }

    let mut table = Table::new(data);
    table
        .with(Style::rounded())
        .with(Modify::new(Columns::last()).with(Alignment::right()))
        .with(Modify::new(Rows::first()).with(Alignment::center()));

    table.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::StatRow;

    fn row(metric: &str, value: &str) -> StatRow {
        StatRow {
            metric: metric.to_string(),
            value: value.to_string(),
        }
    }

    #[test]
    fn test_format_table_empty() {
        let rows: Vec<StatRow> = vec![];
        assert_eq!(format_table(&rows), "No counters to show.");
    }

    #[test]
    fn test_format_table_rows() {
        let result = format_table(&[row("Today", "1,234"), row("Total", "98,765")]);

        assert!(result.contains("METRIC"));
        assert!(result.contains("VISITORS"));
        assert!(result.contains("1,234"));
        assert!(result.contains("98,765"));
    }

    #[test]
    fn test_format_table_uses_rounded_style() {
        let result = format_table(&[row("Today", "1")]);
        assert!(result.contains('╭'));
    }
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum TableError {
    #[error("file is not text")]
    NotText,
    #[error("file has no header row")]
    NoHeader,
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
}

/// Comma-separated numeric table: a header row naming the columns, then
/// float rows. Cells that do not parse as floats become NaN.
#[derive(Debug, Clone, Default)]
pub struct DataTable {
    names: Vec<String>,
    columns: Vec<Vec<f64>>,
}

impl DataTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn parse(bytes: &[u8]) -> Result<DataTable, TableError> {
        let text = std::str::from_utf8(bytes).map_err(|_| TableError::NotText)?;
        let mut lines = text.lines().filter(|line| !line.trim().is_empty());
        let header = lines.next().ok_or(TableError::NoHeader)?;
        let names: Vec<String> = header.split(',').map(|name| name.trim().to_string()).collect();
        let mut columns = vec![Vec::new(); names.len()];
        for (index, line) in lines.enumerate() {
            let cells: Vec<&str> = line.split(',').collect();
            if cells.len() != names.len() {
                return Err(TableError::RaggedRow {
                    row: index + 2,
                    expected: names.len(),
                    found: cells.len(),
                });
            }
            for (column, cell) in columns.iter_mut().zip(cells) {
                column.push(cell.trim().parse::<f64>().unwrap_or(f64::NAN));
            }
        }
        Ok(DataTable { names, columns })
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn row_count(&self) -> usize {
        self.columns.first().map(Vec::len).unwrap_or(0)
    }

    pub fn column(&self, name: &str) -> Option<&[f64]> {
        let index = self.names.iter().position(|candidate| candidate == name)?;
        Some(&self.columns[index])
    }

    /// The named column, or the first column when the name is absent.
    /// `None` only when the table has no columns at all.
    pub fn column_or_first(&self, name: &str) -> Option<&[f64]> {
        if let Some(values) = self.column(name) {
            return Some(values);
        }
        self.columns.first().map(Vec::as_slice)
    }

    pub fn value(&self, row: usize, column: usize) -> Option<f64> {
        self.columns.get(column)?.get(row).copied()
    }
}

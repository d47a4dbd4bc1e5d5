//! Table types.

use serde::Serialize;

/// Column headers of the conversion preset.
pub const CONVERSION_COLUMNS: [&str; 4] = [
    "conversion_from",
    "conversion_to",
    "description",
    "link to code/software",
];

/// Initial shape of a newly added table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TablePreset {
    /// One `Column 1` header and one empty data row
    #[default]
    Blank,
    /// The four conversion columns and one empty data row
    Conversion,
}

/// A table of text cells.
///
/// The first row holds the column names, every following row is data.
/// Rows are expected to be as wide as the header but this is not enforced
/// while editing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Table {
    /// Header row followed by data rows
    pub rows: Vec<Vec<String>>,
}

impl Table {
    /// Create a new table without any rows.
    pub fn new() -> Self {
        Self { rows: Vec::new() }
    }

    /// Create a table from rows of text values.
    pub fn from_rows<R, S>(rows: impl IntoIterator<Item = R>) -> Self
    where
        R: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            rows: rows
                .into_iter()
                .map(|row| row.into_iter().map(Into::into).collect())
                .collect(),
        }
    }

    /// Create a table in the given preset shape.
    pub fn from_preset(preset: TablePreset) -> Self {
        let header: Vec<String> = match preset {
            TablePreset::Blank => vec![column_name(1)],
            TablePreset::Conversion => CONVERSION_COLUMNS.iter().map(|c| c.to_string()).collect(),
        };
        let data = vec![String::new(); header.len()];
        Self {
            rows: vec![header, data],
        }
    }

    /// Get the number of rows, header included.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Get the number of columns (based on the header row).
    pub fn column_count(&self) -> usize {
        self.rows.first().map(|r| r.len()).unwrap_or(0)
    }

    /// Check if the table has no rows at all.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Get the header row.
    pub fn header(&self) -> Option<&[String]> {
        self.rows.first().map(|r| r.as_slice())
    }

    /// Get the data rows.
    pub fn body(&self) -> &[Vec<String>] {
        self.rows.get(1..).unwrap_or(&[])
    }

    /// Append a data row of empty cells sized to the header.
    ///
    /// A table without rows is given a blank header and one data row instead.
    pub fn add_row(&mut self) {
        if self.rows.is_empty() {
            *self = Self::from_preset(TablePreset::Blank);
            return;
        }
        let width = self.column_count();
        self.rows.push(vec![String::new(); width]);
    }

    /// Append a column to every row.
    ///
    /// The header cell is named after the new column's position, data cells
    /// start empty. Returns `false` for a table without rows.
    pub fn add_column(&mut self) -> bool {
        if self.rows.is_empty() {
            return false;
        }
        for (index, row) in self.rows.iter_mut().enumerate() {
            if index == 0 {
                let position = row.len() + 1;
                row.push(column_name(position));
            } else {
                row.push(String::new());
            }
        }
        true
    }

    /// Get a cell value.
    pub fn cell(&self, row: usize, column: usize) -> Option<&str> {
        self.rows.get(row)?.get(column).map(|c| c.as_str())
    }

    /// Overwrite a cell. Returns `false` if the cell does not exist.
    pub fn set_cell(&mut self, row: usize, column: usize, value: impl Into<String>) -> bool {
        match self.rows.get_mut(row).and_then(|r| r.get_mut(column)) {
            Some(cell) => {
                *cell = value.into();
                true
            }
            None => false,
        }
    }

    /// Check whether any data row differs in width from the header.
    pub fn is_ragged(&self) -> bool {
        let width = self.column_count();
        self.body().iter().any(|r| r.len() != width)
    }

    /// Check whether every cell (header included) is blank.
    pub fn is_blank(&self) -> bool {
        self.rows.iter().flatten().all(|c| c.trim().is_empty())
    }

    /// Get plain text representation of the table.
    pub fn plain_text(&self) -> String {
        self.rows
            .iter()
            .map(|row| row.join("\t"))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn column_name(position: usize) -> String {
    format!("Column {}", position)
}

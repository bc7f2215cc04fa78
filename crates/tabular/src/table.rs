use nalgebra::DMatrix;

use crate::{
    cell::{parse_cell, CellError, ValidationErrors},
    Error, LinearSystem, SystemSize,
};

/// Text cells of an augmented system `[A | b]`: `n` rows of `n` coefficients and one constant.
///
/// A `None` cell has not been filled in yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    rows: Vec<Vec<Option<String>>>,
}

impl Table {
    /// An empty table for `size` unknowns.
    pub fn new(size: SystemSize) -> Self {
        let n = size.get();
        Table {
            rows: vec![vec![None; n + 1]; n],
        }
    }

    /// Builds a table from rows of cell text. Blank cells count as not filled in.
    pub fn from_rows<R, C>(rows: R) -> Result<Self, Error>
    where
        R: IntoIterator<Item = C>,
        C: IntoIterator,
        C::Item: Into<String>,
    {
        let rows: Vec<Vec<Option<String>>> = rows
            .into_iter()
            .map(|row| {
                row.into_iter()
                    .map(|cell| {
                        let cell: String = cell.into();
                        if cell.trim().is_empty() {
                            None
                        } else {
                            Some(cell)
                        }
                    })
                    .collect()
            })
            .collect();

        if rows.is_empty() {
            return Err(Error::Empty);
        }

        let expected = rows.len() + 1;
        if let Some((row, cells)) = rows.iter().enumerate().find(|(_, r)| r.len() != expected) {
            return Err(Error::Shape {
                row: row + 1,
                expected,
                got: cells.len(),
            });
        }

        Ok(Table { rows })
    }

    /// Parses a plain-text table, one row per line.
    ///
    /// A line containing `,` or `;` is split on those separators only: cells are trimmed, an empty
    /// field is a blank cell, and a fraction may be written with spaces (`6 / 3`). Any other line
    /// is split on whitespace. Blank lines are skipped and `#` starts a comment that runs to the
    /// end of the line.
    pub fn parse(text: &str) -> Result<Self, Error> {
        let rows: Vec<Vec<&str>> = text
            .lines()
            .map(|line| line.split('#').next().unwrap_or_default())
            .filter(|line| !line.trim().is_empty())
            .map(|line| {
                let separator = |c: char| c == ',' || c == ';';
                if line.contains(separator) {
                    line.split(separator).map(str::trim).collect()
                } else {
                    line.split_whitespace().collect()
                }
            })
            .collect();

        Self::from_rows(rows)
    }

    /// Number of unknowns.
    pub fn size(&self) -> usize {
        self.rows.len()
    }

    /// Column headers: `v1 … vn` for the coefficients, then `C` for the constants.
    pub fn headers(&self) -> Vec<String> {
        (1..=self.size())
            .map(|i| format!("v{i}"))
            .chain(std::iter::once("C".to_string()))
            .collect()
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&str> {
        self.rows.get(row)?.get(col)?.as_deref()
    }

    /// Fills in one cell. Panics if `(row, col)` is outside the table.
    pub fn set(&mut self, row: usize, col: usize, text: impl Into<String>) {
        let text = text.into();
        self.rows[row][col] = if text.trim().is_empty() {
            None
        } else {
            Some(text)
        };
    }

    /// Empties every cell, keeping the table's size.
    pub fn clear(&mut self) {
        self.rows
            .iter_mut()
            .flat_map(|row| row.iter_mut())
            .for_each(|cell| *cell = None);
    }

    /// Parses every cell and splits the table into coefficients and constants.
    ///
    /// Every cell is checked; if any is rejected, all rejections are returned and no system is
    /// built.
    pub fn validate(&self) -> Result<LinearSystem, ValidationErrors> {
        let n = self.size();
        let mut values = Vec::with_capacity(n * (n + 1));
        let mut errors = Vec::new();

        for (row, cells) in self.rows.iter().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                match parse_cell(cell.as_deref().unwrap_or_default()) {
                    Ok(value) => values.push(value),
                    Err(kind) => errors.push(CellError { row, col, kind }),
                }
            }
        }

        if !errors.is_empty() {
            tracing::warn!(rejected = errors.len(), "table validation failed");
            return Err(ValidationErrors(errors));
        }

        tracing::debug!(n, "table validated");

        let augmented = DMatrix::from_row_slice(n, n + 1, &values);
        Ok(LinearSystem::from_augmented(augmented))
    }
}

#[cfg(test)]
mod tests {
    use nalgebra::{dmatrix, dvector};

    use super::*;
    use crate::CellErrorKind;

    fn size(n: usize) -> SystemSize {
        SystemSize::new(n).unwrap()
    }

    #[test]
    fn test_new_is_blank() {
        let table = Table::new(size(3));
        assert_eq!(table.size(), 3);
        assert_eq!(table.headers(), ["v1", "v2", "v3", "C"]);
        assert_eq!(table.get(2, 3), None);
        assert_eq!(table.get(3, 0), None);

        let errors = table.validate().unwrap_err();
        assert_eq!(errors.iter().count(), 12);
        assert!(errors.iter().all(|e| e.kind == CellErrorKind::Missing));
    }

    #[test]
    fn test_set_and_clear() {
        let mut table = Table::new(size(1));
        table.set(0, 0, "2");
        table.set(0, 1, " 1/2 ");
        assert_eq!(table.get(0, 1), Some(" 1/2 "));

        let system = table.validate().unwrap();
        assert_eq!(system.matrix(), &dmatrix![2.0]);
        assert_eq!(system.constants(), &dvector![0.5]);

        table.clear();
        assert_eq!(table, Table::new(size(1)));
    }

    #[test]
    fn test_parse() {
        let table = Table::parse(
            "# v1 v2 v3 C
             2, 1, -1, 8
             -3 -1 -2 -11

             -2; 1; 2; -3 # last row
            ",
        )
        .unwrap();

        let system = table.validate().unwrap();
        assert_eq!(
            system.matrix(),
            &dmatrix![
                2.0, 1.0, -1.0;
                -3.0, -1.0, -2.0;
                -2.0, 1.0, 2.0;
            ]
        );
        assert_eq!(system.constants(), &dvector![8.0, -11.0, -3.0]);
    }

    #[test]
    fn test_parse_separated_fields() {
        let table = Table::parse(
            "6 / 3, 1, 8
             1;; 9",
        )
        .unwrap();
        assert_eq!(table.get(0, 0), Some("6 / 3"));
        assert_eq!(table.get(1, 1), None);

        let errors = table.validate().unwrap_err();
        let found: Vec<_> = errors.iter().map(|e| (e.row, e.col, e.kind)).collect();
        assert_eq!(found, [(1, 1, CellErrorKind::Missing)]);

        let mut table = table;
        table.set(1, 1, "3");
        let system = table.validate().unwrap();
        assert_eq!(
            system.matrix(),
            &dmatrix![
                2.0, 1.0;
                1.0, 3.0;
            ]
        );
    }

    #[test]
    fn test_shape() {
        assert!(matches!(Table::parse("# nothing\n\n"), Err(Error::Empty)));

        assert!(matches!(
            Table::parse("1 2 3\n4 5"),
            Err(Error::Shape {
                row: 2,
                expected: 3,
                got: 2
            })
        ));

        // a 2x2 coefficient block without constants
        assert!(matches!(
            Table::from_rows([["1", "2"], ["3", "4"]]),
            Err(Error::Shape { row: 1, .. })
        ));
    }

    #[test]
    fn test_validate_reports_every_cell() {
        let table = Table::from_rows([
            vec!["1", "1/2/3", "x"],
            vec!["", "4", "5/0"],
        ])
        .unwrap();

        let errors = table.validate().unwrap_err();
        let found: Vec<_> = errors.iter().map(|e| (e.row, e.col, e.kind)).collect();
        assert_eq!(
            found,
            [
                (0, 1, CellErrorKind::InvalidFraction),
                (0, 2, CellErrorKind::InvalidNumber),
                (1, 0, CellErrorKind::Missing),
                (1, 2, CellErrorKind::InvalidFraction),
            ]
        );
    }
}

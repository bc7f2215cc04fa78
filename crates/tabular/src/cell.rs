use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellErrorKind {
    /// The cell is blank.
    Missing,
    /// Not a decimal number.
    InvalidNumber,
    /// Contains a `/` but is not `decimal/decimal` with a non-zero denominator.
    InvalidFraction,
    /// Parsed, but the value overflowed to infinity.
    NotFinite,
}

/// A rejected cell, with zero-based `row` and `col` positions in the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellError {
    pub row: usize,
    pub col: usize,
    pub kind: CellErrorKind,
}

impl fmt::Display for CellError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (r, c) = (self.row + 1, self.col + 1);
        match self.kind {
            CellErrorKind::Missing => write!(f, "Value at ({r}, {c}) not specified"),
            CellErrorKind::InvalidNumber => write!(f, "Value at ({r}, {c}) is not a valid number"),
            CellErrorKind::InvalidFraction => {
                write!(f, "Value at ({r}, {c}) is not a valid fraction")
            }
            CellErrorKind::NotFinite => write!(f, "Value at ({r}, {c}) is out of range"),
        }
    }
}

impl std::error::Error for CellError {}

/// Every cell rejected while validating a table, in row-major order. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors(pub(crate) Vec<CellError>);

impl ValidationErrors {
    pub fn iter(&self) -> std::slice::Iter<'_, CellError> {
        self.0.iter()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, e) in self.0.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{e}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a CellError;
    type IntoIter = std::slice::Iter<'a, CellError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Parses one table cell as a decimal (`-1.5`, `3`, `.25`) or a fraction (`1/3`, `-2.5/4`).
///
/// Exponents, `inf` and `nan` are not accepted.
pub fn parse_cell(text: &str) -> Result<f64, CellErrorKind> {
    let text = text.trim();
    if text.is_empty() {
        return Err(CellErrorKind::Missing);
    }

    let value = if text.contains('/') {
        let mut parts = text.split('/');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(num), Some(denom), None) => {
                let num = parse_decimal(num.trim()).ok_or(CellErrorKind::InvalidFraction)?;
                let denom = parse_decimal(denom.trim()).ok_or(CellErrorKind::InvalidFraction)?;
                if denom == 0.0 {
                    return Err(CellErrorKind::InvalidFraction);
                }
                num / denom
            }
            _ => return Err(CellErrorKind::InvalidFraction),
        }
    } else {
        parse_decimal(text).ok_or(CellErrorKind::InvalidNumber)?
    };

    if value.is_finite() {
        Ok(value)
    } else {
        Err(CellErrorKind::NotFinite)
    }
}

/// `[+-]digits[.digits]`, with at least one digit.
fn parse_decimal(text: &str) -> Option<f64> {
    let unsigned = text.strip_prefix(|c: char| c == '-' || c == '+').unwrap_or(text);

    let mut digits = 0;
    let mut dots = 0;
    for ch in unsigned.chars() {
        match ch {
            '0'..='9' => digits += 1,
            '.' => dots += 1,
            _ => return None,
        }
    }
    if digits == 0 || dots > 1 {
        return None;
    }

    text.parse().ok()
}

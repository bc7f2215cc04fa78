use std::fmt;

use nalgebra::DVector;

/// Values of the unknowns `v1 … vn`, in column order of the solved system.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    values: DVector<f64>,
}

impl Solution {
    pub fn values(&self) -> &DVector<f64> {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// `(name, value)` pairs, `v1` first.
    pub fn variables(&self) -> impl Iterator<Item = (String, f64)> + '_ {
        self.values
            .iter()
            .enumerate()
            .map(|(i, &value)| (format!("v{}", i + 1), value))
    }

    pub fn into_inner(self) -> DVector<f64> {
        self.values
    }
}

impl From<DVector<f64>> for Solution {
    fn from(values: DVector<f64>) -> Self {
        Solution { values }
    }
}

/// One `name = value` line per unknown, six decimal places.
impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (name, value)) in self.variables().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{name} = {value:.6}")?;
        }
        Ok(())
    }
}

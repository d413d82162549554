use serde::{Deserialize, Serialize};
use std::ops::Deref;
use std::sync::Arc;

/// A breakpoint: magnitudes at or above `threshold` are divided by it and
/// rendered with `suffix`
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Unit {
    /// Divisor and lower bound of this unit's range (must be > 0)
    pub threshold: f64,
    /// Text appended after the rendered number (e.g. "kB", "ms", "")
    #[serde(default)]
    pub suffix: String,
}

impl Unit {
    pub fn new(threshold: f64, suffix: impl Into<String>) -> Self {
        Self {
            threshold,
            suffix: suffix.into(),
        }
    }
}

/// Ordered collection of breakpoints for one quantity.
///
/// Entries may be in any order; formatting sorts a private copy. Clones share
/// the same storage, so alias tables cost nothing.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(from = "Vec<Unit>", into = "Vec<Unit>")]
pub struct UnitTable(Arc<[Unit]>);

impl UnitTable {
    pub fn new(units: Vec<Unit>) -> Self {
        Self(units.into())
    }

    /// Whether both tables point at the same entries (aliases do)
    pub fn shares_storage(&self, other: &UnitTable) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Deref for UnitTable {
    type Target = [Unit];

    fn deref(&self) -> &[Unit] {
        &self.0
    }
}

impl From<Vec<Unit>> for UnitTable {
    fn from(units: Vec<Unit>) -> Self {
        Self::new(units)
    }
}

impl From<UnitTable> for Vec<Unit> {
    fn from(table: UnitTable) -> Self {
        table.0.to_vec()
    }
}

impl FromIterator<Unit> for UnitTable {
    fn from_iter<I: IntoIterator<Item = Unit>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<S: Into<String>> FromIterator<(f64, S)> for UnitTable {
    fn from_iter<I: IntoIterator<Item = (f64, S)>>(iter: I) -> Self {
        iter.into_iter()
            .map(|(threshold, suffix)| Unit::new(threshold, suffix))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clone_shares_storage() {
        let table: UnitTable = [(1000.0, "K"), (1.0, "")].into_iter().collect();
        let alias = table.clone();
        assert!(table.shares_storage(&alias));

        let copy = UnitTable::new(table.to_vec());
        assert_eq!(table, copy);
        assert!(!table.shares_storage(&copy));
    }

    #[test]
    fn test_deserialize_from_json_array() {
        let table: UnitTable =
            serde_json::from_str(r#"[{"threshold": 1000, "suffix": "K"}, {"threshold": 1}]"#)
                .unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table[0], Unit::new(1000.0, "K"));
        assert_eq!(table[1], Unit::new(1.0, ""));
    }
}

use crate::units::error::UnitError;
use crate::units::types::{Unit, UnitTable};

/// A validated unit table: non-empty, every threshold > 0, sorted largest first.
/// Only [`normalize`] builds one.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedTable {
    units: Vec<Unit>,
}

impl NormalizedTable {
    pub fn units(&self) -> &[Unit] {
        &self.units
    }

    pub fn largest(&self) -> &Unit {
        &self.units[0]
    }

    pub fn smallest(&self) -> &Unit {
        &self.units[self.units.len() - 1]
    }

    /// Largest breakpoint not exceeding `magnitude`, or the smallest one when
    /// the magnitude sits below the whole table
    pub fn select(&self, magnitude: f64) -> &Unit {
        self.units
            .iter()
            .find(|unit| unit.threshold <= magnitude)
            .unwrap_or_else(|| self.smallest())
    }

    pub fn into_table(self) -> UnitTable {
        UnitTable::new(self.units)
    }
}

/// Validate `units` and return a copy sorted by threshold, largest first.
/// The sort is stable: equal thresholds keep their input order.
pub fn normalize(units: &[Unit]) -> Result<NormalizedTable, UnitError> {
    if units.is_empty() {
        return Err(UnitError::EmptyTable);
    }

    if let Some((index, unit)) = units
        .iter()
        .enumerate()
        .find(|(_, unit)| unit.threshold.is_nan() || unit.threshold <= 0.0)
    {
        return Err(UnitError::NonPositiveThreshold {
            index,
            suffix: unit.suffix.clone(),
            threshold: unit.threshold,
        });
    }

    let mut sorted = units.to_vec();
    sorted.sort_by(|a, b| b.threshold.total_cmp(&a.threshold));

    log::debug!("normalized unit table with {} entries", sorted.len());
    Ok(NormalizedTable { units: sorted })
}

/// Pick the unit used to render a value of absolute size `magnitude`
pub fn select_unit(magnitude: f64, table: &NormalizedTable) -> &Unit {
    table.select(magnitude)
}

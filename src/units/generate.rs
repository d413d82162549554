use crate::units::types::{Unit, UnitTable};

/// Prefix family used by [`generate_table`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrefixSystem {
    /// SI prefixes, exponent = power of ten (multiples of 3 only)
    Decimal,
    /// IEC prefixes, exponent = power of 1024
    Binary,
}

// (exponent, prefix, threshold); thresholds are literals so they are exact
const DECIMAL_PREFIXES: &[(i32, &str, f64)] = &[
    (-30, "q", 1e-30),
    (-27, "r", 1e-27),
    (-24, "y", 1e-24),
    (-21, "z", 1e-21),
    (-18, "a", 1e-18),
    (-15, "f", 1e-15),
    (-12, "p", 1e-12),
    (-9, "n", 1e-9),
    (-6, "µ", 1e-6),
    (-3, "m", 1e-3),
    (0, "", 1.0),
    (3, "k", 1e3),
    (6, "M", 1e6),
    (9, "G", 1e9),
    (12, "T", 1e12),
    (15, "P", 1e15),
    (18, "E", 1e18),
    (21, "Z", 1e21),
    (24, "Y", 1e24),
    (27, "R", 1e27),
    (30, "Q", 1e30),
];

const BINARY_PREFIXES: &[(i32, &str, f64)] = &[
    (0, "", 1.0),
    (1, "Ki", 1024.0),
    (2, "Mi", 1_048_576.0),
    (3, "Gi", 1_073_741_824.0),
    (4, "Ti", 1_099_511_627_776.0),
    (5, "Pi", 1_125_899_906_842_624.0),
    (6, "Ei", 1_152_921_504_606_846_976.0),
    (7, "Zi", 1_180_591_620_717_411_303_424.0),
    (8, "Yi", 1_208_925_819_614_629_174_706_176.0),
];

impl PrefixSystem {
    fn prefixes(self) -> &'static [(i32, &'static str, f64)] {
        match self {
            PrefixSystem::Decimal => DECIMAL_PREFIXES,
            PrefixSystem::Binary => BINARY_PREFIXES,
        }
    }
}

/// Build a table with one entry per prefix whose exponent lies in
/// `min_exp..=max_exp`, each suffixed with `prefix + suffix`.
///
/// `generate_table(PrefixSystem::Decimal, "B", 0, 9)` yields `GB, MB, kB, B`.
/// Entries come out largest first. A range containing no prefix gives an
/// empty table, which formatting rejects.
pub fn generate_table(
    system: PrefixSystem,
    suffix: &str,
    min_exp: i32,
    max_exp: i32,
) -> UnitTable {
    system
        .prefixes()
        .iter()
        .rev()
        .filter(|(exp, _, _)| (min_exp..=max_exp).contains(exp))
        .map(|(_, prefix, threshold)| Unit::new(*threshold, format!("{}{}", prefix, suffix)))
        .collect()
}

// Built-in unit tables and their name registry
//
// Alias tables (ENERGY, MASS, ...) are clones of the table they name and share
// its storage.

pub mod wrappers;

pub use wrappers::*;

use crate::units::{generate_table, PrefixSystem, UnitTable};
use lazy_static::lazy_static;

fn si(suffix: &str, min_exp: i32, max_exp: i32) -> UnitTable {
    generate_table(PrefixSystem::Decimal, suffix, min_exp, max_exp)
}

lazy_static! {
    /// General-purpose counts: 1.23K, 4.5M, 7B, 2T
    pub static ref NUMBERS: UnitTable =
        [(1e12, "T"), (1e9, "B"), (1e6, "M"), (1e3, "K"), (1.0, "")].into_iter().collect();

    pub static ref BYTES: UnitTable = si("B", 0, 24);
    pub static ref BIBYTES: UnitTable = generate_table(PrefixSystem::Binary, "B", 0, 8);
    pub static ref BITS: UnitTable = si("b", 0, 24);
    pub static ref BYTES_PER_SECOND: UnitTable = si("B/s", 0, 24);
    pub static ref BITS_PER_SECOND: UnitTable = si("b/s", 0, 24);

    /// Durations given in seconds
    pub static ref SECONDS: UnitTable = [
        (86_400.0, "d"),
        (3_600.0, "h"),
        (60.0, "min"),
        (1.0, "s"),
        (1e-3, "ms"),
        (1e-6, "µs"),
        (1e-9, "ns"),
    ]
    .into_iter()
    .collect();

    /// Durations given in milliseconds
    pub static ref MILLISECONDS: UnitTable = [
        (86_400_000.0, "d"),
        (3_600_000.0, "h"),
        (60_000.0, "min"),
        (1_000.0, "s"),
        (1.0, "ms"),
        (1e-3, "µs"),
        (1e-6, "ns"),
    ]
    .into_iter()
    .collect();

    pub static ref METERS: UnitTable = si("m", -9, 3);
    pub static ref GRAMS: UnitTable = si("g", -9, 6);
    pub static ref LITERS: UnitTable = si("L", -6, 3);
    pub static ref VOLTS: UnitTable = si("V", -9, 9);
    pub static ref AMPERES: UnitTable = si("A", -12, 3);
    pub static ref OHMS: UnitTable = si("Ω", -3, 12);
    pub static ref WATTS: UnitTable = si("W", -3, 15);
    pub static ref WATT_HOURS: UnitTable = si("Wh", 0, 15);
    pub static ref JOULES: UnitTable = si("J", -3, 18);
    pub static ref HERTZ: UnitTable = si("Hz", 0, 15);
    pub static ref PASCALS: UnitTable = si("Pa", 0, 12);
    pub static ref NEWTONS: UnitTable = si("N", -6, 9);
    pub static ref FARADS: UnitTable = si("F", -15, 0);
    pub static ref HENRIES: UnitTable = si("H", -9, 0);
    pub static ref COULOMBS: UnitTable = si("C", -12, 3);
    pub static ref SIEMENS: UnitTable = si("S", -9, 3);
    pub static ref TESLAS: UnitTable = si("T", -9, 0);
    pub static ref WEBERS: UnitTable = si("Wb", -9, 0);
    pub static ref LUMENS: UnitTable = si("lm", -3, 6);
    pub static ref LUX: UnitTable = si("lx", -3, 6);
    pub static ref CANDELAS: UnitTable = si("cd", -3, 3);
    pub static ref MOLES: UnitTable = si("mol", -12, 3);
    pub static ref BECQUERELS: UnitTable = si("Bq", 0, 18);
    pub static ref GRAYS: UnitTable = si("Gy", -9, 3);
    pub static ref SIEVERTS: UnitTable = si("Sv", -9, 3);
    pub static ref KATALS: UnitTable = si("kat", -9, 3);

    pub static ref DATA: UnitTable = BYTES.clone();
    pub static ref DURATION: UnitTable = SECONDS.clone();
    pub static ref DISTANCE: UnitTable = METERS.clone();
    pub static ref MASS: UnitTable = GRAMS.clone();
    pub static ref VOLUME: UnitTable = LITERS.clone();
    pub static ref ENERGY: UnitTable = JOULES.clone();
    pub static ref POWER: UnitTable = WATTS.clone();
    pub static ref FREQUENCY: UnitTable = HERTZ.clone();
    pub static ref PRESSURE: UnitTable = PASCALS.clone();
    pub static ref FORCE: UnitTable = NEWTONS.clone();
    pub static ref VOLTAGE: UnitTable = VOLTS.clone();
    pub static ref CURRENT: UnitTable = AMPERES.clone();
    pub static ref RESISTANCE: UnitTable = OHMS.clone();
    pub static ref CAPACITANCE: UnitTable = FARADS.clone();
    pub static ref INDUCTANCE: UnitTable = HENRIES.clone();
    pub static ref CHARGE: UnitTable = COULOMBS.clone();

    static ref REGISTRY: Vec<(&'static str, &'static UnitTable)> = vec![
        ("numbers", &*NUMBERS),
        ("bytes", &*BYTES),
        ("bibytes", &*BIBYTES),
        ("bits", &*BITS),
        ("bytes_per_second", &*BYTES_PER_SECOND),
        ("bits_per_second", &*BITS_PER_SECOND),
        ("seconds", &*SECONDS),
        ("milliseconds", &*MILLISECONDS),
        ("meters", &*METERS),
        ("grams", &*GRAMS),
        ("liters", &*LITERS),
        ("volts", &*VOLTS),
        ("amperes", &*AMPERES),
        ("ohms", &*OHMS),
        ("watts", &*WATTS),
        ("watt_hours", &*WATT_HOURS),
        ("joules", &*JOULES),
        ("hertz", &*HERTZ),
        ("pascals", &*PASCALS),
        ("newtons", &*NEWTONS),
        ("farads", &*FARADS),
        ("henries", &*HENRIES),
        ("coulombs", &*COULOMBS),
        ("siemens", &*SIEMENS),
        ("teslas", &*TESLAS),
        ("webers", &*WEBERS),
        ("lumens", &*LUMENS),
        ("lux", &*LUX),
        ("candelas", &*CANDELAS),
        ("moles", &*MOLES),
        ("becquerels", &*BECQUERELS),
        ("grays", &*GRAYS),
        ("sieverts", &*SIEVERTS),
        ("katals", &*KATALS),
        ("data", &*DATA),
        ("duration", &*DURATION),
        ("distance", &*DISTANCE),
        ("mass", &*MASS),
        ("volume", &*VOLUME),
        ("energy", &*ENERGY),
        ("power", &*POWER),
        ("frequency", &*FREQUENCY),
        ("pressure", &*PRESSURE),
        ("force", &*FORCE),
        ("voltage", &*VOLTAGE),
        ("current", &*CURRENT),
        ("resistance", &*RESISTANCE),
        ("capacitance", &*CAPACITANCE),
        ("inductance", &*INDUCTANCE),
        ("charge", &*CHARGE),
    ];
}

/// Whether two table names refer to the same table: surrounding whitespace
/// and ASCII case are ignored, '-' and '_' are interchangeable
pub fn same_name(a: &str, b: &str) -> bool {
    let canonical = |name: &str| name.trim().replace('-', "_").to_ascii_lowercase();
    canonical(a) == canonical(b)
}

/// Look up a built-in table by name, matched with [`same_name`]
pub fn lookup(name: &str) -> Option<UnitTable> {
    REGISTRY
        .iter()
        .find(|(entry, _)| same_name(entry, name))
        .map(|(_, table)| (*table).clone())
}

/// Names of all built-in tables, in registry order
pub fn names() -> impl Iterator<Item = &'static str> {
    REGISTRY.iter().map(|(name, _)| *name)
}

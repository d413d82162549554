pub mod catalog;
pub mod config;
pub mod format;
pub mod locale;
pub mod units;

#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use config::{Config, ConfigError, FormatSpec, TableSpec};
pub use format::{format, format_with_table, FormatOptions, NumberFormat, UnitFormatter};
pub use units::{
    generate_table, normalize, select_unit, NormalizedTable, PrefixSystem, Unit, UnitError,
    UnitTable,
};

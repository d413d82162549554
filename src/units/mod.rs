// Unit tables: breakpoint data model, validation and selection

pub mod error;
pub mod generate;
pub mod table;
pub mod types;

pub use error::UnitError;
pub use generate::{generate_table, PrefixSystem};
pub use table::{normalize, select_unit, NormalizedTable};
pub use types::{Unit, UnitTable};

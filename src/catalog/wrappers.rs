// format_<table>() shortcuts: same as `format`, with the catalog table bound

use super::*;
use crate::format::{format_with_table, FormatOptions};
use crate::units::UnitError;

macro_rules! bound_formatters {
    ($($name:ident => $table:ident),* $(,)?) => {
        $(
            #[doc = concat!("[`format`](crate::format::format) with the [`", stringify!($table), "`] table; `options.unit_table` is ignored")]
            pub fn $name(
                value: impl Into<Option<f64>>,
                options: &FormatOptions,
            ) -> Result<String, UnitError> {
                format_with_table(value, &$table, options)
            }
        )*
    };
}

bound_formatters! {
    format_numbers => NUMBERS,
    format_bytes => BYTES,
    format_bibytes => BIBYTES,
    format_bits => BITS,
    format_bytes_per_second => BYTES_PER_SECOND,
    format_bits_per_second => BITS_PER_SECOND,
    format_seconds => SECONDS,
    format_milliseconds => MILLISECONDS,
    format_meters => METERS,
    format_grams => GRAMS,
    format_liters => LITERS,
    format_volts => VOLTS,
    format_amperes => AMPERES,
    format_ohms => OHMS,
    format_watts => WATTS,
    format_watt_hours => WATT_HOURS,
    format_joules => JOULES,
    format_hertz => HERTZ,
    format_pascals => PASCALS,
    format_newtons => NEWTONS,
    format_farads => FARADS,
    format_henries => HENRIES,
    format_coulombs => COULOMBS,
    format_siemens => SIEMENS,
    format_teslas => TESLAS,
    format_webers => WEBERS,
    format_lumens => LUMENS,
    format_lux => LUX,
    format_candelas => CANDELAS,
    format_moles => MOLES,
    format_becquerels => BECQUERELS,
    format_grays => GRAYS,
    format_sieverts => SIEVERTS,
    format_katals => KATALS,
    format_data => DATA,
    format_duration => DURATION,
    format_distance => DISTANCE,
    format_mass => MASS,
    format_volume => VOLUME,
    format_energy => ENERGY,
    format_power => POWER,
    format_frequency => FREQUENCY,
    format_pressure => PRESSURE,
    format_force => FORCE,
    format_voltage => VOLTAGE,
    format_current => CURRENT,
    format_resistance => RESISTANCE,
    format_capacitance => CAPACITANCE,
    format_inductance => INDUCTANCE,
    format_charge => CHARGE,
}

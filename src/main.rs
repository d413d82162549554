use clap::{Parser, Subcommand};
use std::path::PathBuf;
use unitfmt::catalog;
use unitfmt::config::{Config, FormatSpec, TableSpec};
use unitfmt::units::normalize;
use unitfmt::UnitFormatter;

#[derive(Parser)]
#[command(name = "unitfmt")]
#[command(about = "Format numbers as short human-readable quantities", long_about = None)]
struct Cli {
    /// Config file with default options and custom tables
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Format one or more values
    Format {
        /// Values to format ("null" or "" for a missing value, NaN, inf).
        /// Give options before the values: anything starting with '-' after
        /// the first value is read as a value.
        #[arg(required = true, allow_hyphen_values = true)]
        values: Vec<String>,

        /// Unit table name (see `unitfmt tables`)
        #[arg(short, long)]
        table: Option<String>,

        /// Maximum significant digits
        #[arg(long = "max-digits")]
        max_digits: Option<usize>,

        /// Minimum significant digits
        #[arg(long = "min-digits")]
        min_digits: Option<usize>,

        /// BCP-47 locale tag (e.g. "de-DE")
        #[arg(short, long)]
        locale: Option<String>,

        /// Insert locale group separators
        #[arg(short, long)]
        grouping: bool,

        /// Text between number and unit suffix
        #[arg(short, long)]
        separator: Option<String>,

        /// Output for missing or NaN values
        #[arg(short, long)]
        empty: Option<String>,
    },

    /// List available unit tables
    Tables,

    /// Print the breakpoints of a unit table, largest first
    Show {
        /// Table name
        name: String,
    },
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let result = load_config(cli.config.as_ref()).and_then(|config| match cli.command {
        Commands::Format {
            values,
            table,
            max_digits,
            min_digits,
            locale,
            grouping,
            separator,
            empty,
        } => {
            let overrides = FormatSpec {
                unit_table: table.map(TableSpec::Named),
                max_significant_digits: max_digits,
                min_significant_digits: min_digits,
                locale,
                use_grouping: grouping.then_some(true),
                unit_separator: separator,
                empty_value: empty,
            };
            format_values(&config, &overrides, &values)
        }
        Commands::Tables => {
            list_tables(&config);
            Ok(())
        }
        Commands::Show { name } => show_table(&config, &name),
    });

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn load_config(path: Option<&PathBuf>) -> Result<Config, Box<dyn std::error::Error>> {
    match path {
        Some(path) => Ok(Config::load_from_file(path)?),
        None => Ok(Config::empty()),
    }
}

/// "null", "undefined" and "" are missing values; "_" digit separators are allowed
fn parse_value(raw: &str) -> Result<Option<f64>, String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("null") || trimmed == "undefined" {
        return Ok(None);
    }

    trimmed
        .replace('_', "")
        .parse::<f64>()
        .map(Some)
        .map_err(|e| format!("Invalid number '{}': {}", raw, e))
}

fn format_values(
    config: &Config,
    overrides: &FormatSpec,
    values: &[String],
) -> Result<(), Box<dyn std::error::Error>> {
    let options = overrides.apply(config.options()?, config)?;
    let formatter = UnitFormatter::new(options)?;

    for raw in values {
        let value = parse_value(raw)?;
        println!("{}", formatter.format(value));
    }

    Ok(())
}

fn list_tables(config: &Config) {
    println!("Built-in tables:");
    for name in catalog::names() {
        println!("  - {}", name);
    }

    let custom = config.table_names();
    if !custom.is_empty() {
        println!("\nConfig tables:");
        for name in custom {
            println!("  - {}", name);
        }
    }
}

fn show_table(config: &Config, name: &str) -> Result<(), Box<dyn std::error::Error>> {
    let table = normalize(&config.table(name)?)?;

    println!("Table: {} ({} units)", name, table.units().len());
    for unit in table.units() {
        let suffix = if unit.suffix.is_empty() {
            "(none)"
        } else {
            unit.suffix.as_str()
        };
        println!("  {:>12e}  {}", unit.threshold, suffix);
    }

    Ok(())
}

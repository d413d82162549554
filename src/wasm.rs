// WebAssembly bindings for JavaScript callers
use crate::catalog;
use crate::config::{Config, FormatSpec};
use crate::format::{format, FormatOptions};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct UnitFmtWasm {
    config: Config,
}

impl Default for UnitFmtWasm {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl UnitFmtWasm {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            config: Config::empty(),
        }
    }

    /// Create an instance with default options and custom tables from TOML
    /// config content
    #[wasm_bindgen]
    pub fn with_config(config_content: &str) -> Result<UnitFmtWasm, JsValue> {
        let config = Config::load_from_str(config_content)
            .map_err(|e| JsValue::from_str(&format!("Failed to load config: {}", e)))?;
        Ok(Self { config })
    }

    /// Format a value (null/undefined allowed)
    /// options_json: camelCase options, e.g. {"unitTable": "bytes", "unitSeparator": " "}
    #[wasm_bindgen]
    pub fn format(&self, value: Option<f64>, options_json: Option<String>) -> Result<String, JsValue> {
        let options = self.options(options_json.as_deref())?;
        format(value, &options).map_err(|e| JsValue::from_str(&format!("Format error: {}", e)))
    }

    /// Names of the built-in and config tables
    #[wasm_bindgen]
    pub fn table_names(&self) -> js_sys::Array {
        catalog::names()
            .map(JsValue::from_str)
            .chain(self.config.table_names().into_iter().map(JsValue::from_str))
            .collect()
    }

    /// Breakpoints of a table as a JSON array of {threshold, suffix}
    #[wasm_bindgen]
    pub fn table(&self, name: &str) -> Result<String, JsValue> {
        let table = self
            .config
            .table(name)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        serde_json::to_string(&table)
            .map_err(|e| JsValue::from_str(&format!("Failed to serialize table: {}", e)))
    }
}

impl UnitFmtWasm {
    fn options(&self, options_json: Option<&str>) -> Result<FormatOptions, JsValue> {
        let base = self
            .config
            .options()
            .map_err(|e| JsValue::from_str(&format!("Invalid config: {}", e)))?;

        match options_json {
            Some(json) => FormatSpec::from_json(json)
                .and_then(|spec| spec.apply(base, &self.config))
                .map_err(|e| JsValue::from_str(&format!("Invalid options: {}", e))),
            None => Ok(base),
        }
    }
}

// WebAssembly bindings so JS build scripts can run the generator on header text
use crate::emit::RenderOptions;
use crate::extract::InputFormat;
use crate::generate::{self, GeneratorConfig};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct UnitGenWasm {
    options: RenderOptions,
    format: InputFormat,
}

impl Default for UnitGenWasm {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl UnitGenWasm {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            options: RenderOptions::default(),
            format: InputFormat::Header,
        }
    }

    /// Build a generator from the contents of a `unitgen.toml`
    #[wasm_bindgen]
    pub fn with_config(config_content: &str) -> Result<UnitGenWasm, JsValue> {
        let config = GeneratorConfig::load_from_str(config_content)
            .map_err(|e| JsValue::from_str(&format!("Failed to load config: {}", e)))?;

        Ok(Self {
            options: config.render_options(),
            format: config.format,
        })
    }

    /// Run the generator on input text.
    /// Returns a JSON string with `files`, `diagnostics` and `summary`.
    #[wasm_bindgen]
    pub fn generate(&self, content: &str) -> Result<String, JsValue> {
        let generation = generate::generate(content, self.format, &self.options);

        serde_json::to_string(&generation)
            .map_err(|e| JsValue::from_str(&format!("Failed to serialize generation: {}", e)))
    }

    /// Extracted and classified units as JSON, grouped by dimension
    #[wasm_bindgen]
    pub fn list_units(&self, content: &str) -> Result<String, JsValue> {
        let generation = generate::generate(content, self.format, &self.options);

        serde_json::to_string(&generation.groups)
            .map_err(|e| JsValue::from_str(&format!("Failed to serialize units: {}", e)))
    }
}

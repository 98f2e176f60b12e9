use crate::emit::RenderOptions;
use crate::error::GenError;
use crate::extract::InputFormat;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Name of the config file picked up from the working directory
pub const DEFAULT_CONFIG_FILE: &str = "unitgen.toml";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneratorConfig {
    // Input file (header or unit table)
    #[serde(default)]
    pub input: Option<PathBuf>,

    // Directory receiving literals.hpp and units/
    #[serde(default)]
    pub output_dir: Option<PathBuf>,

    #[serde(default)]
    pub format: InputFormat,

    #[serde(default)]
    pub render: RenderConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RenderConfig {
    #[serde(default = "default_namespace")]
    pub namespace: String,

    #[serde(default = "default_core_include")]
    pub core_include: String,

    #[serde(default)]
    pub license_header: Vec<String>,

    #[serde(default = "default_emit_symbols")]
    pub emit_symbols: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            namespace: default_namespace(),
            core_include: default_core_include(),
            license_header: Vec::new(),
            emit_symbols: default_emit_symbols(),
        }
    }
}

fn default_namespace() -> String {
    "qtty".to_string()
}

fn default_core_include() -> String {
    "../ffi_core.hpp".to_string()
}

fn default_emit_symbols() -> bool {
    true
}

impl GeneratorConfig {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, GenError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| GenError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::load_from_str(&content).map_err(|source| GenError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn load_from_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn empty() -> Self {
        Self {
            input: None,
            output_dir: None,
            format: InputFormat::default(),
            render: RenderConfig::default(),
        }
    }

    /// Load `explicit` if given, else `unitgen.toml` when it exists, else defaults
    pub fn discover(explicit: Option<&Path>) -> Result<Self, GenError> {
        match explicit {
            Some(path) => Self::load_from_file(path),
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    Self::load_from_file(default_path)
                } else {
                    Ok(Self::empty())
                }
            }
        }
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            namespace: self.render.namespace.clone(),
            core_include: self.render.core_include.clone(),
            license_header: self.render.license_header.clone(),
            emit_symbols: self.render.emit_symbols,
        }
    }
}

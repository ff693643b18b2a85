//! XML bean configuration, mapping bean names to implementation type names. The configuration is
//! informational only: the [ComponentFactory](beanwire_di::factory::ComponentFactory) never
//! consults it when wiring components.
//!
//! Expected document layout:
//!
//! ```xml
//! <beansConfig>
//!     <beans>
//!         <entry>
//!             <key>dao</key>
//!             <value>beanwire::dao::DaoDataProvider</value>
//!         </entry>
//!     </beans>
//! </beansConfig>
//! ```

use fxhash::FxHashMap;
use quick_xml::DeError;
use serde::Deserialize;
use std::fs;
use std::io;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum ConfigParseError {
    #[error("Error reading bean configuration {path}: {source}")]
    Io { path: String, source: io::Error },
    #[error("Malformed bean configuration: {0}")]
    Xml(#[from] DeError),
}

/// Mapping from bean names to their type names.
#[derive(Clone, Default, Debug)]
pub struct BeanConfig {
    beans: FxHashMap<String, String>,
}

impl BeanConfig {
    #[inline]
    pub fn beans(&self) -> &FxHashMap<String, String> {
        &self.beans
    }

    /// Returns the type name registered for given bean.
    pub fn bean_type(&self, name: &str) -> Option<&str> {
        self.beans.get(name).map(String::as_str)
    }

    pub fn into_beans(self) -> FxHashMap<String, String> {
        self.beans
    }
}

impl From<RawBeansConfig> for BeanConfig {
    fn from(value: RawBeansConfig) -> Self {
        Self {
            beans: value
                .beans
                .entries
                .into_iter()
                .map(|entry| (entry.key, entry.value))
                .collect(),
        }
    }
}

/// Reads bean configuration from given file.
pub fn load_bean_config<P: AsRef<Path>>(path: P) -> Result<BeanConfig, ConfigParseError> {
    let path = path.as_ref();
    debug!(path = %path.display(), "Loading bean configuration...");

    let document = fs::read_to_string(path).map_err(|source| ConfigParseError::Io {
        path: path.display().to_string(),
        source,
    })?;

    parse_bean_config(&document)
}

/// Parses bean configuration from an XML document.
pub fn parse_bean_config(document: &str) -> Result<BeanConfig, ConfigParseError> {
    quick_xml::de::from_str::<RawBeansConfig>(document)
        .map(BeanConfig::from)
        .map_err(ConfigParseError::from)
}

#[derive(Deserialize)]
struct RawBeansConfig {
    #[serde(default)]
    beans: RawBeans,
}

#[derive(Deserialize, Default)]
struct RawBeans {
    #[serde(rename = "entry", default)]
    entries: Vec<RawBeanEntry>,
}

#[derive(Deserialize)]
struct RawBeanEntry {
    key: String,
    value: String,
}

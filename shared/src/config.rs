use serde::{Deserialize, Serialize};

use crate::error::{DialogError, Result};

/// How the portal container is created
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PortalConfig {
    /// Tag name of the container appended to the document body
    pub container_tag: String,
    /// Attribute set (empty) on the container so it can be found
    pub marker_attribute: String,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            container_tag: "div".to_string(),
            marker_attribute: "data-portal".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub enabled: bool,
    /// Messages below this level are dropped
    pub level: LogLevel,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            level: LogLevel::Info,
        }
    }
}

impl LogConfig {
    pub fn allows(&self, level: LogLevel) -> bool {
        self.enabled && level >= self.level
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DialogConfig {
    pub portal: PortalConfig,
    pub log: LogConfig,
}

impl DialogConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| DialogError::Config(e.to_string()))
    }
}

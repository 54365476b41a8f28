//! Serialization formats

/// On-disk format of a model snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModelFormat {
    /// JSON (`.json`)
    #[default]
    Json,
    /// YAML (`.yaml`, `.yml`)
    Yaml,
}

impl ModelFormat {
    /// Format for a file extension
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            _ => None,
        }
    }

    /// Canonical file extension
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Yaml => "yaml",
        }
    }
}

/// Options for [`save_model`](super::save_model)
#[derive(Debug, Clone)]
pub struct SaveConfig {
    pub format: ModelFormat,
    /// Indent JSON output
    pub pretty: bool,
}

impl SaveConfig {
    pub fn new(format: ModelFormat) -> Self {
        Self {
            format,
            pretty: true,
        }
    }

    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}

impl Default for SaveConfig {
    fn default() -> Self {
        Self::new(ModelFormat::Json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_extension() {
        assert_eq!(ModelFormat::from_extension("json"), Some(ModelFormat::Json));
        assert_eq!(ModelFormat::from_extension("YML"), Some(ModelFormat::Yaml));
        assert_eq!(ModelFormat::from_extension("bin"), None);
        assert_eq!(ModelFormat::Yaml.extension(), "yaml");
    }
}

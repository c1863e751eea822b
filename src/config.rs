use crate::scaffold::templates::{ClassTemplate, PLACEHOLDER};

/// Configuration for class scaffolding
///
/// There is no config file; the binary always runs with `Config::default()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Token replaced with the class name
    pub placeholder: String,
    /// Extension of the declaration file, without the dot
    pub declaration_ext: String,
    /// Extension of the definition file, without the dot
    pub definition_ext: String,
    /// Templates rendered for each class
    pub template: ClassTemplate,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            placeholder: PLACEHOLDER.to_string(),
            declaration_ext: "h".to_string(),
            definition_ext: "cpp".to_string(),
            template: ClassTemplate::default(),
        }
    }
}

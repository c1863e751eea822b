//! Class templates and placeholder rendering
//!
//! Templates are embedded at compile time from `resources/templates/`.
//! Each one carries a single placeholder token that is replaced with the
//! class name when a class is scaffolded.

/// Token replaced with the class name in every template
pub const PLACEHOLDER: &str = "{ClassName}";

// =============================================================================
// Embedded Templates - Euler::Vulkan
// =============================================================================

mod euler_templates {
    pub const CLASS_H: &str = include_str!("../../resources/templates/class.h");
    pub const CLASS_CPP: &str = include_str!("../../resources/templates/class.cpp");
}

/// Declaration/definition template pair for one class
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassTemplate {
    /// Header contents (`.h`)
    pub declaration: &'static str,
    /// Implementation contents (`.cpp`)
    pub definition: &'static str,
}

impl ClassTemplate {
    /// Class nested in `Euler::Vulkan`, exported with `EULER_API`
    pub const EULER_VULKAN: ClassTemplate = ClassTemplate {
        declaration: euler_templates::CLASS_H,
        definition: euler_templates::CLASS_CPP,
    };
}

impl Default for ClassTemplate {
    fn default() -> Self {
        Self::EULER_VULKAN
    }
}

/// Replace every occurrence of `placeholder` in `template` with `class_name`
pub fn render(template: &str, placeholder: &str, class_name: &str) -> String {
    template.replace(placeholder, class_name)
}

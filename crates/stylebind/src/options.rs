//! Pipeline configuration.
//!
//! Options arrive from host configuration (typically JSON) and use camelCase
//! wire names. Everything defaults to off except named-export emission.

use serde::{Deserialize, Serialize};

use stylebind_render::Dialect;

/// How original class names become candidate identifiers.
///
/// `AsIs` and "no mode specified" are equivalent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ClassnameTransform {
    /// Keep the original name only.
    #[default]
    AsIs,
    /// Original name plus its camel-cased form when they differ.
    CamelCase,
    /// Camel-cased form only.
    CamelCaseOnly,
    /// Original name plus its dash-cased form when they differ.
    Dashes,
    /// Dash-cased form only.
    DashesOnly,
}

/// Opaque per-dialect engine options, passed through to the registered
/// renderer for the matching dialect.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RendererOptions {
    pub less: Option<serde_json::Value>,
    pub sass: Option<serde_json::Value>,
    pub scss: Option<serde_json::Value>,
    pub styl: Option<serde_json::Value>,
}

impl RendererOptions {
    /// The option block for a dialect, if configured.
    ///
    /// The SCSS-family dialects have separate blocks; plain CSS never has
    /// one (identity normalization takes no options).
    pub fn for_dialect(&self, dialect: Dialect) -> Option<&serde_json::Value> {
        match dialect {
            Dialect::Css => None,
            Dialect::Less => self.less.as_ref(),
            Dialect::Sass => self.sass.as_ref(),
            Dialect::Scss => self.scss.as_ref(),
            Dialect::Styl => self.styl.as_ref(),
        }
    }
}

/// User-facing pipeline options.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Options {
    /// Identifier transform applied to original names (§ named exports).
    pub classname_transform: ClassnameTransform,
    /// Emit `export let` bindings for valid transformed identifiers.
    pub named_exports: bool,
    /// Mark aggregate properties as possibly absent (`'name'?: string;`).
    pub no_unchecked_indexed_access: bool,
    /// Add an open string-index signature so the checker accepts names the
    /// extractor cannot see statically.
    pub allow_unknown_classnames: bool,
    /// Produce position-accurate declarations when a source map is available.
    pub go_to_definition: bool,
    /// Regex source overriding the default module-file pattern.
    pub custom_matcher: Option<String>,
    /// Text prepended to every stylesheet before rendering.
    pub additional_data: Option<String>,
    /// Opaque per-dialect engine options.
    pub renderer_options: RendererOptions,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            classname_transform: ClassnameTransform::AsIs,
            named_exports: true,
            no_unchecked_indexed_access: false,
            allow_unknown_classnames: false,
            go_to_definition: false,
            custom_matcher: None,
            additional_data: None,
            renderer_options: RendererOptions::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = Options::default();
        assert_eq!(options.classname_transform, ClassnameTransform::AsIs);
        assert!(options.named_exports);
        assert!(!options.go_to_definition);
    }

    #[test]
    fn test_deserializes_camel_case_wire_names() {
        let options: Options = serde_json::from_str(
            r#"{
                "classnameTransform": "dashesOnly",
                "namedExports": false,
                "goToDefinition": true,
                "rendererOptions": { "scss": { "loadPaths": ["vendor"] } }
            }"#,
        )
        .unwrap();
        assert_eq!(options.classname_transform, ClassnameTransform::DashesOnly);
        assert!(!options.named_exports);
        assert!(options.go_to_definition);
        assert!(options
            .renderer_options
            .for_dialect(Dialect::Scss)
            .is_some());
        assert!(options.renderer_options.for_dialect(Dialect::Css).is_none());
    }

    #[test]
    fn test_empty_object_keeps_named_exports_on() {
        let options: Options = serde_json::from_str("{}").unwrap();
        assert!(options.named_exports);
    }
}

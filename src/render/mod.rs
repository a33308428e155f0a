//! Rendering of generated source
//!
//! The template lives in `data/static.rs.tera` and is compiled into the
//! binary. It renders a Rust module holding one `Resource` per record plus
//! `get_resource`/`get_resources` accessors.

use serde::Serialize;
use tera::{Context, Tera};

use crate::error::Result;
use crate::resource::ResourceRecord;

/// Name the template is registered under in Tera
pub const TEMPLATE_NAME: &str = "static.rs";

/// Source text of the bundled template
pub const TEMPLATE: &str = include_str!("../../data/static.rs.tera");

#[derive(Serialize)]
struct TemplateResource<'a> {
    /// Rust string literal, quotes included
    filename: String,
    contents: &'a str,
    length: usize,
}

#[derive(Serialize)]
struct TemplateData<'a> {
    package: &'a str,
    version: &'static str,
    resources: Vec<TemplateResource<'a>>,
}

/// Renders resource records into Rust source
pub struct Renderer {
    tera: Tera,
}

impl Renderer {
    /// Build a renderer around the bundled template
    pub fn new() -> Result<Self> {
        Self::with_template(TEMPLATE)
    }

    pub fn with_template(template: &str) -> Result<Self> {
        let mut tera = Tera::default();
        tera.add_raw_template(TEMPLATE_NAME, template)?;
        Ok(Self { tera })
    }

    pub fn render(&self, records: &[ResourceRecord], package: &str) -> Result<String> {
        let data = TemplateData {
            package,
            version: env!("CARGO_PKG_VERSION"),
            resources: records
                .iter()
                .map(|record| TemplateResource {
                    filename: format!("{:?}", record.path),
                    contents: &record.encoded_payload,
                    length: record.original_length,
                })
                .collect(),
        };

        let context = Context::from_serialize(&data)?;
        Ok(self.tera.render(TEMPLATE_NAME, &context)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ImplantError;
    use crate::resource::encoder::{encode_bytes, encode_file};
    use std::path::PathBuf;

    fn bundled_template_path() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("data")
            .join("static.rs.tera")
    }

    #[test]
    fn test_render_contains_package_and_resources() {
        let records = vec![
            encode_bytes("data/input", b"hello, world!\n").unwrap(),
            encode_bytes("data/sub/other", b"x").unwrap(),
        ];

        let output = Renderer::new().unwrap().render(&records, "main").unwrap();

        assert!(output.contains("pub mod main {"));
        assert!(output.contains("filename: \"data/input\","));
        assert!(output.contains("filename: \"data/sub/other\","));
        assert!(output.contains(&format!("contents: \"{}\",", records[0].encoded_payload)));
        assert!(output.contains("length: 14,"));
        assert!(output.contains(env!("CARGO_PKG_VERSION")));

        // Scan order is kept
        let first = output.find("data/input").unwrap();
        let second = output.find("data/sub/other").unwrap();
        assert!(first < second);
    }

    #[test]
    fn test_render_escapes_paths() {
        let records = vec![encode_bytes("dir\\with \"quotes\"", b"x").unwrap()];
        let output = Renderer::new().unwrap().render(&records, "assets").unwrap();

        assert!(output.contains(r#"filename: "dir\\with \"quotes\"","#));
    }

    #[test]
    fn test_render_is_deterministic() {
        let records = vec![encode_bytes("a", b"aaa").unwrap()];
        let renderer = Renderer::new().unwrap();
        assert_eq!(
            renderer.render(&records, "main").unwrap(),
            renderer.render(&records, "main").unwrap()
        );
    }

    #[test]
    fn test_broken_template_is_render_error() {
        let err = Renderer::with_template("{% if %}").err().unwrap();
        assert!(matches!(err, ImplantError::RenderFailed { .. }));
    }

    #[test]
    fn test_bundled_template_matches_source_file() {
        let master = std::fs::read_to_string(bundled_template_path()).unwrap();
        assert_eq!(master, TEMPLATE);
    }

    #[test]
    fn test_bundled_template_round_trips_as_resource() {
        let record = encode_file(&bundled_template_path()).unwrap();

        assert_eq!(record.original_length, TEMPLATE.len());
        assert_eq!(record.decode().unwrap(), TEMPLATE.as_bytes());
    }
}

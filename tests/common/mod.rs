//! Shared utilities for the integration and conformance tests

#![allow(dead_code)]

mod expectations;

pub use expectations::{Expectation, ExpectedMaterial, ExpectedObject};

use objmtl::{Document, OrphanPolicy, ParserConfig};

/// Three vertices and one triangle, the smallest useful OBJ file
pub const TRIANGLE_OBJ: &str = "v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 3\n";

/// Decode in-memory OBJ and MTL text with the default configuration
pub fn decode(obj: &str, mtl: &str) -> objmtl::Result<Document> {
    Document::from_readers(obj.as_bytes(), mtl.as_bytes())
}

/// Parser configuration for a fixture
pub fn fixture_config(expectation: &Expectation) -> ParserConfig {
    let config = ParserConfig::new().with_validation(expectation.error_code.is_none());
    if expectation.skip_orphans {
        config.with_orphan_material_directives(OrphanPolicy::Skip)
    } else {
        config
    }
}

/// Extract the `[Ennnn]` code from an error message
pub fn error_code(err: &objmtl::Error) -> String {
    let message = err.to_string();
    message
        .strip_prefix('[')
        .and_then(|rest| rest.split_once(']'))
        .map(|(code, _)| code.to_string())
        .unwrap_or(message)
}

/// Build an OBJ file for an `n`-sided polygon on the unit circle
pub fn polygon_obj(sides: usize) -> String {
    let mut obj = String::new();
    for i in 0..sides {
        let angle = i as f32 / sides as f32 * std::f32::consts::TAU;
        obj.push_str(&format!("v {} {} 0\n", angle.cos(), angle.sin()));
    }
    obj.push('f');
    for i in 1..=sides {
        obj.push_str(&format!(" {}", i));
    }
    obj.push('\n');
    obj
}

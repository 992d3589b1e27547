//! Expected decode results for fixture cases
//!
//! Each directory under `tests/fixtures/` holds a `model.obj`, an optional
//! `model.mtl` and an `expected.json` describing what decoding must produce:
//! either an error code (`"E2003"`, ...) or a summary of the document.

use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Expected decode result for one fixture
#[derive(Debug, Clone, Deserialize)]
pub struct Expectation {
    /// Error code the decode must fail with; `None` means it must succeed
    #[serde(default)]
    pub error_code: Option<String>,

    /// Line number reported by the error
    #[serde(default)]
    pub error_line: Option<usize>,

    /// Decode with orphan MTL directives skipped instead of rejected
    #[serde(default)]
    pub skip_orphans: bool,

    #[serde(default)]
    pub vertex_count: Option<usize>,

    #[serde(default)]
    pub normal_count: Option<usize>,

    #[serde(default)]
    pub uv_count: Option<usize>,

    /// Exact triangle index array
    #[serde(default)]
    pub indices: Option<Vec<u32>>,

    /// Objects in declaration order
    #[serde(default)]
    pub objects: Option<Vec<ExpectedObject>>,

    /// Materials by name
    #[serde(default)]
    pub materials: Option<BTreeMap<String, ExpectedMaterial>>,
}

/// Expected shape of a decoded object
#[derive(Debug, Clone, Deserialize)]
pub struct ExpectedObject {
    pub name: String,
    pub faces: usize,
    #[serde(default)]
    pub materials: Vec<String>,
}

/// Expected attributes of a decoded material; absent fields are not checked
#[derive(Debug, Clone, Deserialize)]
pub struct ExpectedMaterial {
    #[serde(default)]
    pub ambient: Option<[f32; 3]>,
    #[serde(default)]
    pub diffuse: Option<[f32; 3]>,
    #[serde(default)]
    pub specular: Option<[f32; 3]>,
    #[serde(default)]
    pub emission: Option<[f32; 3]>,
    #[serde(default)]
    pub opacity: Option<f32>,
    #[serde(default)]
    pub texture: Option<String>,
    #[serde(default)]
    pub stub: Option<bool>,
}

impl Expectation {
    /// Load `expected.json` from a fixture directory
    pub fn load(dir: &Path) -> Result<Self, String> {
        let path = dir.join("expected.json");
        let content = fs::read_to_string(&path)
            .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;
        serde_json::from_str(&content)
            .map_err(|e| format!("Failed to parse {}: {}", path.display(), e))
    }
}

//! Fixture conformance tests - each fixture directory is a separate test
//!
//! This test binary uses libtest-mimic to dynamically generate one test case
//! per directory under `tests/fixtures/`. Each directory holds `model.obj`,
//! an optional `model.mtl`, and `expected.json`.
//!
//! Run with: cargo test --test conformance_individual
//! Run a single fixture: cargo test --test conformance_individual forward_material

#[path = "../common/mod.rs"]
mod common;

use common::{Expectation, ExpectedMaterial};
use libtest_mimic::{Arguments, Failed, Trial};
use objmtl::Document;
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

const FIXTURE_ROOT: &str = "tests/fixtures";

/// Get all fixture directories, sorted by name
fn get_fixture_dirs() -> Vec<PathBuf> {
    if !Path::new(FIXTURE_ROOT).exists() {
        return Vec::new();
    }

    let mut dirs: Vec<PathBuf> = WalkDir::new(FIXTURE_ROOT)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_dir() && e.path().join("model.obj").exists())
        .map(|e| e.path().to_path_buf())
        .collect();

    dirs.sort();
    dirs
}

/// Decode a fixture; a missing MTL file decodes as an empty library
fn decode_fixture(dir: &Path, expectation: &Expectation) -> Result<objmtl::Result<Document>, Failed> {
    let obj = File::open(dir.join("model.obj"))
        .map_err(|e| format!("Failed to open model.obj: {}", e))?;
    let config = common::fixture_config(expectation);

    let mtl_path = dir.join("model.mtl");
    let result = if mtl_path.exists() {
        let mtl = File::open(&mtl_path).map_err(|e| format!("Failed to open model.mtl: {}", e))?;
        Document::from_readers_with_config(obj, mtl, config)
    } else {
        Document::from_readers_with_config(obj, io::empty(), config)
    };
    Ok(result)
}

fn check<T: PartialEq + std::fmt::Debug>(what: &str, actual: T, expected: T) -> Result<(), Failed> {
    if actual == expected {
        Ok(())
    } else {
        Err(format!("{}: expected {:?}, got {:?}", what, expected, actual).into())
    }
}

fn check_material(doc: &Document, name: &str, expected: &ExpectedMaterial) -> Result<(), Failed> {
    let material = doc
        .material(name)
        .ok_or_else(|| format!("Material '{}' missing from table", name))?;

    if let Some(ambient) = expected.ambient {
        check(&format!("{} ambient", name), material.ambient, ambient)?;
    }
    if let Some(diffuse) = expected.diffuse {
        check(&format!("{} diffuse", name), material.diffuse, diffuse)?;
    }
    if let Some(specular) = expected.specular {
        check(&format!("{} specular", name), material.specular, specular)?;
    }
    if let Some(emission) = expected.emission {
        check(&format!("{} emission", name), material.emission, emission)?;
    }
    if let Some(opacity) = expected.opacity {
        check(&format!("{} opacity", name), material.opacity, opacity)?;
    }
    if let Some(texture) = &expected.texture {
        check(
            &format!("{} texture", name),
            material.texture.as_deref(),
            Some(texture.as_str()),
        )?;
    }
    if let Some(stub) = expected.stub {
        check(&format!("{} stub", name), material.is_stub(), stub)?;
    }
    Ok(())
}

fn check_document(doc: &Document, expectation: &Expectation) -> Result<(), Failed> {
    if let Some(count) = expectation.vertex_count {
        check("vertex count", doc.vertex_count(), count)?;
    }
    if let Some(count) = expectation.normal_count {
        check("normal count", doc.normal_count(), count)?;
    }
    if let Some(count) = expectation.uv_count {
        check("uv count", doc.uv_count(), count)?;
    }
    if let Some(indices) = &expectation.indices {
        check("indices", &doc.indices, indices)?;
    }

    if let Some(objects) = &expectation.objects {
        check("object count", doc.objects.len(), objects.len())?;
        for (actual, expected) in doc.objects.iter().zip(objects) {
            check("object name", actual.name.as_str(), expected.name.as_str())?;
            check(
                &format!("'{}' face count", expected.name),
                actual.faces.len(),
                expected.faces,
            )?;
            check(
                &format!("'{}' materials", expected.name),
                &actual.materials,
                &expected.materials,
            )?;
        }
    }

    if let Some(materials) = &expectation.materials {
        check("material count", doc.materials.len(), materials.len())?;
        for (name, expected) in materials {
            check_material(doc, name, expected)?;
        }
    }
    Ok(())
}

/// Run one fixture against its expectation
fn test_fixture(dir: PathBuf) -> Result<(), Failed> {
    let expectation = Expectation::load(&dir)?;

    match (decode_fixture(&dir, &expectation)?, &expectation.error_code) {
        (Ok(doc), None) => check_document(&doc, &expectation),
        (Ok(_), Some(code)) => Err(format!("Expected {} but decoding succeeded", code).into()),
        (Err(e), None) => Err(format!("Failed to decode: {}", e).into()),
        (Err(e), Some(code)) => {
            check("error code", common::error_code(&e), code.clone())?;
            if let Some(line) = expectation.error_line {
                check("error line", e.line(), Some(line))?;
            }
            Ok(())
        }
    }
}

fn main() {
    let _ = env_logger::builder().is_test(true).try_init();
    let args = Arguments::from_args();

    let trials: Vec<Trial> = get_fixture_dirs()
        .into_iter()
        .map(|dir| {
            let name = dir
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or("unknown")
                .to_string();
            Trial::test(format!("fixtures::{}", name), move || test_fixture(dir))
        })
        .collect();

    libtest_mimic::run(&args, trials).exit();
}

#![no_main]

use libfuzzer_sys::fuzz_target;
use objmtl::{Document, OrphanPolicy, ParserConfig};

fuzz_target!(|data: &[u8]| {
    // Seed a few stubs so MTL records have materials to land on
    let obj = "usemtl a\nusemtl b\n";
    let config = ParserConfig::new()
        .with_orphan_material_directives(OrphanPolicy::Skip)
        .with_validation(true);

    if let Ok(doc) = Document::from_readers_with_config(obj.as_bytes(), data, config) {
        for material in doc.materials.iter() {
            let _ = doc.texture_path(material);
        }
    }
});

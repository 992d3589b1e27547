#![no_main]

use libfuzzer_sys::arbitrary::{Arbitrary, Result, Unstructured};
use libfuzzer_sys::fuzz_target;
use objmtl::validator::validate_document;

#[derive(Debug)]
struct FuzzObj {
    vertices: usize,
    faces: Vec<Vec<i32>>,
}

impl<'a> Arbitrary<'a> for FuzzObj {
    fn arbitrary(u: &mut Unstructured<'a>) -> Result<Self> {
        let vertices = u.int_in_range(0..=64)?;
        let face_count = u.int_in_range(0..=32)?;
        let mut faces = Vec::with_capacity(face_count);
        for _ in 0..face_count {
            let corners = u.int_in_range(0..=8)?;
            let mut face = Vec::with_capacity(corners);
            for _ in 0..corners {
                face.push(u.int_in_range(-80..=80)?);
            }
            faces.push(face);
        }
        Ok(FuzzObj { vertices, faces })
    }
}

fuzz_target!(|input: FuzzObj| {
    let mut obj = "v 0 0 0\n".repeat(input.vertices);
    for face in &input.faces {
        obj.push('f');
        for index in face {
            obj.push_str(&format!(" {}", index));
        }
        obj.push('\n');
    }

    // Any successfully decoded document keeps every triangle inside its face corners
    if let Ok(doc) = objmtl::Document::from_readers(obj.as_bytes(), &[][..]) {
        assert_eq!(doc.indices.len() % 3, 0);
        if validate_document(&doc).is_ok() {
            for triangle in doc.triangles() {
                assert!(triangle.iter().all(|&v| (v as usize) < doc.vertex_count()));
            }
        }
    }
});

//! Post-decode validation of documents
//!
//! The decoder resolves indices without bounds checks, exactly as the file
//! states them. This module checks that the result is safe to upload:
//! - Pool lengths are whole multiples of their component counts
//! - Every face corner references an existing vertex, UV and normal
//! - Every triangle index references an existing vertex
//! - Every material named by an object or face exists in the table

use crate::error::{Error, Result};
use crate::model::{Document, NORMAL_COMPONENTS, UV_COMPONENTS, VERTEX_COMPONENTS};

/// Validate a decoded document
///
/// # Example
///
/// ```
/// use objmtl::validator::validate_document;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let obj = "v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 3\n";
/// let doc = objmtl::Document::from_readers(obj.as_bytes(), "".as_bytes())?;
/// validate_document(&doc)?;
/// # Ok(())
/// # }
/// ```
pub fn validate_document(doc: &Document) -> Result<()> {
    validate_pool_lengths(doc)?;
    validate_face_indices(doc)?;
    validate_triangle_indices(doc)?;
    validate_material_references(doc)?;
    Ok(())
}

/// Validates that each pool holds whole elements
pub fn validate_pool_lengths(doc: &Document) -> Result<()> {
    let pools = [
        ("vertex", doc.vertices.len(), VERTEX_COMPONENTS),
        ("normal", doc.normals.len(), NORMAL_COMPONENTS),
        ("UV", doc.uvs.len(), UV_COMPONENTS),
    ];

    for (name, len, components) in pools {
        if len % components != 0 {
            return Err(Error::InvalidDocument(format!(
                "{} pool has {} components, not a multiple of {}",
                name, len, components
            )));
        }
    }
    Ok(())
}

/// Validates that face corners reference existing pool elements
pub fn validate_face_indices(doc: &Document) -> Result<()> {
    let vertices = doc.vertex_count();
    let uvs = doc.uv_count();
    let normals = doc.normal_count();

    for object in &doc.objects {
        for (face_idx, face) in object.faces.iter().enumerate() {
            for (corner_idx, corner) in face.corners.iter().enumerate() {
                let out_of_bounds = if corner.vertex >= vertices {
                    Some(("vertex", corner.vertex, vertices))
                } else if let Some(uv) = corner.uv.filter(|&uv| uv >= uvs) {
                    Some(("UV", uv, uvs))
                } else {
                    corner
                        .normal
                        .filter(|&n| n >= normals)
                        .map(|n| ("normal", n, normals))
                };

                if let Some((kind, index, count)) = out_of_bounds {
                    return Err(Error::InvalidDocument(format!(
                        "Object '{}': face {} corner {} {} index {} is out of bounds \
                         (pool has {} elements)",
                        object.name, face_idx, corner_idx, kind, index, count
                    )));
                }
            }
        }
    }
    Ok(())
}

/// Validates the flattened triangle index array
pub fn validate_triangle_indices(doc: &Document) -> Result<()> {
    if doc.indices.len() % 3 != 0 {
        return Err(Error::InvalidDocument(format!(
            "Triangle index array has {} entries, not a multiple of 3",
            doc.indices.len()
        )));
    }

    let vertices = doc.vertex_count();
    for (tri_idx, triangle) in doc.triangles().enumerate() {
        if let Some(&v) = triangle.iter().find(|&&v| v as usize >= vertices) {
            return Err(Error::InvalidDocument(format!(
                "Triangle {} vertex index {} is out of bounds (pool has {} vertices)",
                tri_idx, v, vertices
            )));
        }
    }
    Ok(())
}

/// Validates that referenced materials exist in the material table
pub fn validate_material_references(doc: &Document) -> Result<()> {
    for object in &doc.objects {
        let face_materials = object.faces.iter().filter_map(|f| f.material.as_deref());
        let names = object.materials.iter().map(String::as_str).chain(face_materials);

        for name in names {
            if !doc.materials.contains(name) {
                return Err(Error::InvalidDocument(format!(
                    "Object '{}' references unknown material '{}'",
                    object.name, name
                )));
            }
        }
    }
    Ok(())
}

//! OBJ record dispatch and handlers

use crate::error::Result;
use crate::model::{Document, Object};

use super::face::parse_face;
use super::fields::{parse_floats, parse_name};
use super::state::Cursor;

/// OBJ record kinds understood by the decoder
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjRecord {
    /// `mtllib`: material library file name
    MaterialLibrary,
    /// `o` or `g`: start a new object
    Object,
    /// `v`: vertex position
    Vertex,
    /// `vn`: vertex normal
    Normal,
    /// `vt`: texture coordinate
    TexCoord,
    /// `f`: polygonal face
    Face,
    /// `usemtl`: select the current material
    UseMaterial,
    /// `s`: smoothing group
    Smoothing,
}

impl ObjRecord {
    /// Map a record keyword to its kind
    ///
    /// `g` is treated exactly like `o`; group semantics are not modelled.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "mtllib" => Some(ObjRecord::MaterialLibrary),
            "o" | "g" => Some(ObjRecord::Object),
            "v" => Some(ObjRecord::Vertex),
            "vn" => Some(ObjRecord::Normal),
            "vt" => Some(ObjRecord::TexCoord),
            "f" => Some(ObjRecord::Face),
            "usemtl" => Some(ObjRecord::UseMaterial),
            "s" => Some(ObjRecord::Smoothing),
            _ => None,
        }
    }
}

/// Decode one trimmed OBJ line into the document
pub(crate) fn parse_obj_line(doc: &mut Document, cursor: &mut Cursor, text: &str) -> Result<()> {
    let fields: Vec<&str> = text.split_whitespace().collect();
    let Some((&keyword, args)) = fields.split_first() else {
        return Ok(());
    };
    if keyword.starts_with('#') {
        return Ok(());
    }

    let Some(record) = ObjRecord::from_keyword(keyword) else {
        log::warn!(
            "line {}: unsupported OBJ record '{}', skipping",
            cursor.line,
            keyword
        );
        return Ok(());
    };

    match record {
        ObjRecord::MaterialLibrary => {
            if let Some(name) = parse_name(keyword, args, cursor.line) {
                doc.material_library = Some(name);
            }
        }
        ObjRecord::Object => {
            if let Some(name) = parse_name(keyword, args, cursor.line) {
                cursor.start_object(doc, Object::new(name));
            }
        }
        ObjRecord::Vertex => {
            let v: [f32; 3] = parse_floats(keyword, args, cursor.line)?;
            doc.vertices.extend_from_slice(&v);
        }
        ObjRecord::Normal => {
            let n: [f32; 3] = parse_floats(keyword, args, cursor.line)?;
            doc.normals.extend_from_slice(&n);
        }
        ObjRecord::TexCoord => {
            let t: [f32; 2] = parse_floats(keyword, args, cursor.line)?;
            doc.uvs.extend_from_slice(&t);
        }
        ObjRecord::Face => parse_face(doc, cursor, args)?,
        ObjRecord::UseMaterial => parse_usemtl(doc, cursor, args),
        ObjRecord::Smoothing => {
            if let Some(&state) = args.first() {
                cursor.set_smooth(!matches!(state, "0" | "off"));
            } else {
                log::warn!("line {}: 's' record has no value, skipping", cursor.line);
            }
        }
    }

    Ok(())
}

/// Handle a `usemtl` record
fn parse_usemtl(doc: &mut Document, cursor: &mut Cursor, args: &[&str]) {
    let Some(name) = parse_name("usemtl", args, cursor.line) else {
        return;
    };

    let slot = cursor.ensure_object(doc);
    cursor.select_material(doc, &name);
    doc.objects[slot].materials.push(name);
}

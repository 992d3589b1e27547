//! Face record parsing, index resolution and fan triangulation
//!
//! OBJ addresses pool elements three ways: positive 1-based indices,
//! negative indices counted back from the most recent element, and omitted
//! slots. Everything is normalized to zero-based `usize` here, with omitted
//! UV/normal slots as `None`.

use std::cmp::Ordering;

use crate::error::{Error, IndexKind, Result};
use crate::model::{Document, Face, FaceCorner};

use super::state::Cursor;

/// Minimum number of corners in a face
const MIN_CORNERS: usize = 3;

/// Pool sizes at the point a face is parsed
#[derive(Debug, Clone, Copy)]
pub(crate) struct PoolCounts {
    pub vertices: usize,
    pub uvs: usize,
    pub normals: usize,
}

impl PoolCounts {
    pub fn of(doc: &Document) -> Self {
        Self {
            vertices: doc.vertex_count(),
            uvs: doc.uv_count(),
            normals: doc.normal_count(),
        }
    }
}

/// Resolve a raw OBJ index against a pool holding `count` elements
///
/// `n > 0` maps to `n - 1`; `n < 0` maps to `count + n`, so `-1` is the last
/// element. Zero, and negative indices reaching before the first element,
/// are rejected.
pub(crate) fn resolve_index(raw: i64, count: usize, kind: IndexKind, line: usize) -> Result<usize> {
    let invalid = || Error::InvalidIndex {
        line,
        kind,
        index: raw,
    };

    match raw.cmp(&0) {
        Ordering::Greater => usize::try_from(raw - 1).map_err(|_| invalid()),
        Ordering::Less => usize::try_from(raw.unsigned_abs())
            .ok()
            .filter(|&back| back <= count)
            .map(|back| count - back)
            .ok_or_else(invalid),
        Ordering::Equal => Err(invalid()),
    }
}

/// Parse the integer text of one index slot
fn parse_raw(text: &str, line: usize) -> Result<i64> {
    text.parse::<i64>()
        .map_err(|_| Error::malformed_number(line, "f", Some(text)))
}

/// Parse one `v`, `v/vt`, `v//vn` or `v/vt/vn` field
pub(crate) fn parse_corner(field: &str, counts: &PoolCounts, line: usize) -> Result<FaceCorner> {
    let mut parts = field.split('/');

    // split always yields at least one item
    let vertex_text = parts.next().unwrap_or_default();
    let vertex = resolve_index(
        parse_raw(vertex_text, line)?,
        counts.vertices,
        IndexKind::Vertex,
        line,
    )?;

    let uv = match parts.next() {
        Some(text) if !text.is_empty() => Some(resolve_index(
            parse_raw(text, line)?,
            counts.uvs,
            IndexKind::Uv,
            line,
        )?),
        _ => None,
    };

    let normal = match parts.next() {
        Some(text) if !text.is_empty() => {
            let raw = parse_raw(text, line)?;
            // A normal reference is meaningless before any vn record
            if counts.normals == 0 {
                None
            } else {
                Some(resolve_index(raw, counts.normals, IndexKind::Normal, line)?)
            }
        }
        _ => None,
    };

    Ok(FaceCorner { vertex, uv, normal })
}

/// Fan-triangulate around corner 0, appending vertex indices to `indices`
///
/// A polygon with `k` corners yields `k - 2` triangles. The polygon is
/// assumed convex and planar. Nothing is appended unless every corner fits
/// in a `u32`.
pub(crate) fn fan_triangulate(
    corners: &[FaceCorner],
    indices: &mut Vec<u32>,
    line: usize,
) -> Result<()> {
    let vertices = corners
        .iter()
        .map(|corner| {
            u32::try_from(corner.vertex).map_err(|_| Error::InvalidIndex {
                line,
                kind: IndexKind::Vertex,
                index: corner.vertex as i64 + 1,
            })
        })
        .collect::<Result<Vec<u32>>>()?;

    let Some((&anchor, rest)) = vertices.split_first() else {
        return Ok(());
    };

    indices.reserve(rest.len().saturating_sub(1) * 3);
    for pair in rest.windows(2) {
        indices.extend_from_slice(&[anchor, pair[0], pair[1]]);
    }
    Ok(())
}

/// Handle an `f` record
pub(crate) fn parse_face(doc: &mut Document, cursor: &mut Cursor, args: &[&str]) -> Result<()> {
    let line = cursor.line;
    let slot = cursor.ensure_object(doc);
    let material = cursor.material().map(str::to_owned);

    if let Some(name) = &material {
        let object = &mut doc.objects[slot];
        if object.materials.is_empty() {
            object.materials.push(name.clone());
        }
    }

    if args.len() < MIN_CORNERS {
        return Err(Error::DegenerateFace {
            line,
            corners: args.len(),
        });
    }

    let counts = PoolCounts::of(doc);
    let corners = args
        .iter()
        .map(|field| parse_corner(field, &counts, line))
        .collect::<Result<Vec<_>>>()?;

    fan_triangulate(&corners, &mut doc.indices, line)?;
    doc.objects[slot].faces.push(Face { corners, material });
    Ok(())
}

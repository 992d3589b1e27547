//! Line-oriented decoding of OBJ and MTL streams
//!
//! Decoding is two passes over two independent streams. The OBJ pass fills
//! the pools, objects and triangle indices and creates stub materials for
//! every `usemtl`; the MTL pass then fills in those stubs (or creates new
//! ones through `newmtl`). Both passes share a [`Decoder`], which owns the
//! document being built and the parse cursor.

mod face;
mod fields;
mod mtl;
mod obj;
mod state;

use crate::error::Result;
use crate::model::{Document, ParserConfig};
use crate::reader::LineReader;
use crate::validator;
use state::Cursor;
use std::io::{BufRead, BufReader, Read};
use std::path::PathBuf;

pub use mtl::{MaterialAttribute, MtlRecord};
pub use obj::ObjRecord;

/// Decode an OBJ stream and its MTL stream with the default configuration
pub fn decode<O: Read, M: Read>(obj: O, mtl: M) -> Result<Document> {
    decode_with_config(obj, mtl, ParserConfig::new())
}

/// Decode an OBJ stream and its MTL stream with a custom configuration
pub fn decode_with_config<O: Read, M: Read>(
    obj: O,
    mtl: M,
    config: ParserConfig,
) -> Result<Document> {
    Decoder::new(config)
        .read_obj(BufReader::new(obj))?
        .read_mtl(BufReader::new(mtl))?
        .finish()
}

/// Incremental two-pass decoder
///
/// Use this when the MTL stream is only known after the OBJ pass, e.g. when
/// it is located through the OBJ file's `mtllib` record. Each pass consumes
/// the decoder, so a fatal error drops the partially decoded document.
///
/// # Example
///
/// ```
/// use objmtl::parser::Decoder;
/// use objmtl::ParserConfig;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let decoder = Decoder::new(ParserConfig::new())
///     .read_obj("mtllib cube.mtl\nusemtl Red\n".as_bytes())?;
/// assert_eq!(decoder.document().material_library.as_deref(), Some("cube.mtl"));
///
/// let doc = decoder
///     .read_mtl("newmtl Red\nKa 1 0 0\n".as_bytes())?
///     .finish()?;
/// assert_eq!(doc.materials.get("Red").unwrap().ambient, [1.0, 0.0, 0.0]);
/// # Ok(())
/// # }
/// ```
pub struct Decoder {
    doc: Document,
    cursor: Cursor,
    config: ParserConfig,
}

impl Decoder {
    /// Create a decoder producing a fresh document
    pub fn new(config: ParserConfig) -> Self {
        Self {
            doc: Document::new(),
            cursor: Cursor::new(),
            config,
        }
    }

    /// Record the directory texture and library references resolve against
    pub fn set_base_dir(&mut self, dir: impl Into<PathBuf>) {
        self.doc.base_dir = Some(dir.into());
    }

    /// The document decoded so far
    pub fn document(&self) -> &Document {
        &self.doc
    }

    /// The configuration this decoder runs with
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Consume an OBJ stream
    pub fn read_obj<R: BufRead>(mut self, reader: R) -> Result<Self> {
        let Self { doc, cursor, .. } = &mut self;
        for_each_line(reader, cursor, |cursor, text| {
            obj::parse_obj_line(doc, cursor, text)
        })?;

        log::debug!(
            "OBJ pass: {} vertices, {} normals, {} uvs, {} triangles, {} objects",
            doc.vertex_count(),
            doc.normal_count(),
            doc.uv_count(),
            doc.triangle_count(),
            doc.objects.len()
        );
        Ok(self)
    }

    /// Consume an MTL stream
    ///
    /// The current material is cleared first; the OBJ pass's `usemtl`
    /// selection never carries into the library. The stream is ignored
    /// when the MTL pass is disabled in the configuration.
    pub fn read_mtl<R: BufRead>(mut self, reader: R) -> Result<Self> {
        if !self.config.read_mtl() {
            log::debug!("MTL pass disabled, skipping material library");
            return Ok(self);
        }

        let Self {
            doc,
            cursor,
            config,
        } = &mut self;
        cursor.clear_material();
        for_each_line(reader, cursor, |cursor, text| {
            mtl::parse_mtl_line(doc, cursor, config, text)
        })?;

        let stubs = doc.materials.iter().filter(|m| m.is_stub()).count();
        log::debug!(
            "MTL pass: {} materials, {} never defined",
            doc.materials.len(),
            stubs
        );
        Ok(self)
    }

    /// Finish decoding, validating the document if configured
    pub fn finish(self) -> Result<Document> {
        if self.config.validate() {
            validator::validate_document(&self.doc)?;
        }
        Ok(self.doc)
    }
}

/// Feed every line of `reader` to `handle`, keeping the cursor's line
/// number current
fn for_each_line<R, F>(reader: R, cursor: &mut Cursor, mut handle: F) -> Result<()>
where
    R: BufRead,
    F: FnMut(&mut Cursor, &str) -> Result<()>,
{
    for entry in LineReader::new(reader) {
        let (line, text) = entry?;
        cursor.line = line;
        handle(cursor, &text)?;
    }
    Ok(())
}

//! # objmtl
//!
//! A pure Rust decoder for Wavefront OBJ geometry and MTL material libraries.
//!
//! The decoder flattens an OBJ/MTL pair into upload-ready data: vertex,
//! normal and UV pools, a fan-triangulated index list, the named objects with
//! their faces, and a name-keyed material table.
//!
//! ## Features
//!
//! - Pure Rust implementation with no unsafe code
//! - Absolute, negative (relative) and omitted face indices
//! - Fan triangulation of n-gons
//! - Forward references from `usemtl` to materials defined later in the MTL file
//! - Unsupported records are logged through the `log` facade and skipped
//!
//! ## Example
//!
//! ```
//! use objmtl::Document;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let obj = "\
//! usemtl Red
//! v 0 0 0
//! v 1 0 0
//! v 1 1 0
//! v 0 1 0
//! f 1 2 3 4
//! ";
//! let mtl = "newmtl Red\nKa 1 0 0\n";
//!
//! let doc = Document::from_readers(obj.as_bytes(), mtl.as_bytes())?;
//! assert_eq!(doc.vertex_count(), 4);
//! assert_eq!(doc.indices, vec![0, 1, 2, 0, 2, 3]);
//! assert_eq!(doc.material("Red").unwrap().ambient, [1.0, 0.0, 0.0]);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod model;
pub mod parser;
pub mod reader;
pub mod validator;

pub use error::{Error, IndexKind, Result};
pub use model::{
    Document, Face, FaceCorner, Material, MaterialTable, Object, OrphanPolicy, ParserConfig, Rgb,
};

use parser::Decoder;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

impl Document {
    /// Decode an OBJ stream and an MTL stream
    ///
    /// This method uses the default parser configuration: orphan MTL
    /// directives are rejected and no post-decode validation runs.
    ///
    /// # Arguments
    ///
    /// * `obj` - A reader containing the OBJ geometry
    /// * `mtl` - A reader containing the MTL material library
    ///
    /// # Example
    ///
    /// ```no_run
    /// use objmtl::Document;
    /// use std::fs::File;
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let obj = File::open("cube.obj")?;
    /// let mtl = File::open("cube.mtl")?;
    /// let doc = Document::from_readers(obj, mtl)?;
    /// println!("{} triangles", doc.triangle_count());
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_readers<O: Read, M: Read>(obj: O, mtl: M) -> Result<Self> {
        Self::from_readers_with_config(obj, mtl, ParserConfig::new())
    }

    /// Decode an OBJ stream and an MTL stream with custom configuration
    ///
    /// # Example
    ///
    /// ```
    /// use objmtl::{Document, OrphanPolicy, ParserConfig};
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let config = ParserConfig::new().with_orphan_material_directives(OrphanPolicy::Skip);
    /// let doc = Document::from_readers_with_config(
    ///     "usemtl Red\n".as_bytes(),
    ///     "Ka 0 0 0\nnewmtl Red\nKa 1 0 0\n".as_bytes(),
    ///     config,
    /// )?;
    /// assert_eq!(doc.material("Red").unwrap().ambient, [1.0, 0.0, 0.0]);
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_readers_with_config<O: Read, M: Read>(
        obj: O,
        mtl: M,
        config: ParserConfig,
    ) -> Result<Self> {
        parser::decode_with_config(obj, mtl, config)
    }

    /// Decode an OBJ file and an MTL file
    ///
    /// The OBJ file's directory is recorded as [`Document::base_dir`] for
    /// resolving texture references.
    pub fn from_paths<P: AsRef<Path>, Q: AsRef<Path>>(obj_path: P, mtl_path: Q) -> Result<Self> {
        Self::from_paths_with_config(obj_path, mtl_path, ParserConfig::new())
    }

    /// Decode an OBJ file and an MTL file with custom configuration
    pub fn from_paths_with_config<P: AsRef<Path>, Q: AsRef<Path>>(
        obj_path: P,
        mtl_path: Q,
        config: ParserConfig,
    ) -> Result<Self> {
        let mtl_path = mtl_path.as_ref().to_path_buf();
        Self::decode_obj_file(obj_path.as_ref(), config, |_| Some(mtl_path))
    }

    /// Decode an OBJ file, locating its MTL file through `mtllib`
    ///
    /// The last `mtllib` record names the library, resolved relative to the
    /// OBJ file's directory. Without an `mtllib` record only the OBJ file is
    /// decoded and every material stays a stub.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use objmtl::Document;
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let doc = Document::from_obj_path("assets/teapot.obj")?;
    /// for material in doc.materials.iter() {
    ///     if let Some(texture) = doc.texture_path(material) {
    ///         println!("{} uses {}", material.name, texture.display());
    ///     }
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_obj_path<P: AsRef<Path>>(obj_path: P) -> Result<Self> {
        Self::from_obj_path_with_config(obj_path, ParserConfig::new())
    }

    /// Decode an OBJ file with custom configuration, locating its MTL file
    /// through `mtllib`
    pub fn from_obj_path_with_config<P: AsRef<Path>>(
        obj_path: P,
        config: ParserConfig,
    ) -> Result<Self> {
        Self::decode_obj_file(
            obj_path.as_ref(),
            config,
            Document::material_library_path,
        )
    }

    /// Decode an OBJ file, then the MTL file `locate_mtl` picks from the
    /// OBJ pass's result
    fn decode_obj_file<F>(obj_path: &Path, config: ParserConfig, locate_mtl: F) -> Result<Self>
    where
        F: FnOnce(&Document) -> Option<PathBuf>,
    {
        let obj = File::open(obj_path)?;

        let mut decoder = Decoder::new(config);
        if let Some(dir) = obj_path.parent() {
            decoder.set_base_dir(dir);
        }
        let decoder = decoder.read_obj(BufReader::new(obj))?;

        let library = locate_mtl(decoder.document());
        match library {
            Some(path) if decoder.config().read_mtl() => {
                log::debug!("reading material library {}", path.display());
                let mtl = File::open(&path)?;
                decoder.read_mtl(BufReader::new(mtl))?.finish()
            }
            _ => {
                log::debug!("no material library read for {}", obj_path.display());
                decoder.finish()
            }
        }
    }
}

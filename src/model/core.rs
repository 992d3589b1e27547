//! Core decoded types: the document, its objects and faces

use std::path::{Path, PathBuf};

use super::material::{Material, MaterialTable};

/// Number of `f32` components per position
pub const VERTEX_COMPONENTS: usize = 3;

/// Number of `f32` components per normal
pub const NORMAL_COMPONENTS: usize = 3;

/// Number of `f32` components per texture coordinate
pub const UV_COMPONENTS: usize = 2;

/// How MTL directives that appear before any `newmtl` are handled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OrphanPolicy {
    /// Fail with `Error::NoCurrentMaterial`
    #[default]
    Reject,
    /// Log a warning and ignore the directive
    Skip,
}

/// Configuration for decoding OBJ/MTL streams
///
/// # Example
///
/// ```
/// use objmtl::{OrphanPolicy, ParserConfig};
///
/// let config = ParserConfig::new()
///     .with_orphan_material_directives(OrphanPolicy::Skip)
///     .with_validation(true);
/// assert!(config.validate());
/// ```
#[derive(Debug, Clone)]
pub struct ParserConfig {
    orphan_policy: OrphanPolicy,
    validate: bool,
    read_mtl: bool,
}

impl ParserConfig {
    /// Create the default configuration
    ///
    /// Orphan material directives are rejected, the MTL stream is read, and
    /// no post-decode validation runs.
    pub fn new() -> Self {
        Self {
            orphan_policy: OrphanPolicy::Reject,
            validate: false,
            read_mtl: true,
        }
    }

    /// Choose how directives outside a `newmtl` block are treated
    pub fn with_orphan_material_directives(mut self, policy: OrphanPolicy) -> Self {
        self.orphan_policy = policy;
        self
    }

    /// Run `validator::validate_document` before returning the document
    pub fn with_validation(mut self, validate: bool) -> Self {
        self.validate = validate;
        self
    }

    /// Enable or disable the MTL pass
    ///
    /// With the pass disabled, materials named by `usemtl` stay stubs.
    pub fn with_mtl_pass(mut self, read_mtl: bool) -> Self {
        self.read_mtl = read_mtl;
        self
    }

    /// Current orphan directive policy
    pub fn orphan_policy(&self) -> OrphanPolicy {
        self.orphan_policy
    }

    /// Whether post-decode validation is enabled
    pub fn validate(&self) -> bool {
        self.validate
    }

    /// Whether the MTL stream is read
    pub fn read_mtl(&self) -> bool {
        self.read_mtl
    }
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// One corner of a face: resolved, zero-based pool indices
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaceCorner {
    /// Index into the vertex pool (in elements, not components)
    pub vertex: usize,
    /// Index into the UV pool, `None` when omitted
    pub uv: Option<usize>,
    /// Index into the normal pool, `None` when omitted or no normals exist yet
    pub normal: Option<usize>,
}

impl FaceCorner {
    /// Create a corner with only a position index
    pub fn new(vertex: usize) -> Self {
        Self {
            vertex,
            uv: None,
            normal: None,
        }
    }
}

/// A polygon as declared by an `f` record
#[derive(Debug, Clone, PartialEq)]
pub struct Face {
    /// Corners in declaration order (at least 3)
    pub corners: Vec<FaceCorner>,
    /// Material active when the face was declared
    pub material: Option<String>,
}

impl Face {
    /// Number of triangles the face contributes to the index array
    pub fn triangle_count(&self) -> usize {
        self.corners.len().saturating_sub(2)
    }
}

/// A named object (`o` or `g`) and the faces declared under it
#[derive(Debug, Clone, PartialEq)]
pub struct Object {
    /// Object name, `unnamed<line>` when created implicitly
    pub name: String,
    /// Faces in declaration order
    pub faces: Vec<Face>,
    /// Material names referenced by this object, in reference order
    pub materials: Vec<String>,
}

impl Object {
    /// Create a new empty object
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            faces: Vec::new(),
            materials: Vec::new(),
        }
    }

    /// Create an object for faces or materials that appear with no
    /// preceding `o`/`g` record
    pub fn unnamed(line: usize) -> Self {
        Self::new(format!("unnamed{}", line))
    }
}

/// A decoded OBJ/MTL pair
///
/// Pools are flat `f32` arrays ready for upload: three components per
/// vertex and normal, two per texture coordinate. `indices` holds the fan
/// triangulation of every face as vertex-pool indices.
#[derive(Debug, Clone, Default)]
pub struct Document {
    /// Vertex positions (`x y z` per element)
    pub vertices: Vec<f32>,
    /// Vertex normals (`x y z` per element)
    pub normals: Vec<f32>,
    /// Texture coordinates (`u v` per element)
    pub uvs: Vec<f32>,
    /// Flattened triangle list indexing the vertex pool
    pub indices: Vec<u32>,
    /// Objects in declaration order
    pub objects: Vec<Object>,
    /// Materials keyed by name
    pub materials: MaterialTable,
    /// File name from the last `mtllib` record
    pub material_library: Option<String>,
    /// Directory of the OBJ file when decoded from a path
    pub base_dir: Option<PathBuf>,
}

impl Document {
    /// Create a new empty document
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of positions in the vertex pool
    pub fn vertex_count(&self) -> usize {
        self.vertices.len() / VERTEX_COMPONENTS
    }

    /// Number of normals in the normal pool
    pub fn normal_count(&self) -> usize {
        self.normals.len() / NORMAL_COMPONENTS
    }

    /// Number of texture coordinates in the UV pool
    pub fn uv_count(&self) -> usize {
        self.uvs.len() / UV_COMPONENTS
    }

    /// Number of triangles in the flattened index array
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Iterate the index array as triangles
    pub fn triangles(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        self.indices.chunks_exact(3).map(|t| [t[0], t[1], t[2]])
    }

    /// Find the first object with the given name
    pub fn object(&self, name: &str) -> Option<&Object> {
        self.objects.iter().find(|o| o.name == name)
    }

    /// Look up a material by name
    pub fn material(&self, name: &str) -> Option<&Material> {
        self.materials.get(name)
    }

    /// Resolve a material's texture reference against the OBJ directory
    ///
    /// Returns the reference unchanged when the document was not decoded
    /// from a path, and `None` when the material has no texture.
    pub fn texture_path(&self, material: &Material) -> Option<PathBuf> {
        let texture = material.texture.as_deref()?;
        Some(match &self.base_dir {
            Some(dir) => dir.join(texture),
            None => Path::new(texture).to_path_buf(),
        })
    }

    /// Path of the `mtllib` file relative to the OBJ directory
    pub fn material_library_path(&self) -> Option<PathBuf> {
        let lib = self.material_library.as_deref()?;
        Some(match &self.base_dir {
            Some(dir) => dir.join(lib),
            None => Path::new(lib).to_path_buf(),
        })
    }
}

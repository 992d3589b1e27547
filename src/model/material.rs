//! Material types and the name-keyed material table

use std::collections::HashMap;

/// RGB colour triple
pub type Rgb = [f32; 3];

/// Material definition from an MTL library
///
/// A material may exist as a name-only stub: `usemtl` in the OBJ file creates
/// one before the MTL stream is read, and the MTL pass fills it in.
#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    /// Unique material name
    pub name: String,
    /// Opacity (`d`, or `1 - Tr`)
    pub opacity: f32,
    /// Metallic factor (`Pm`)
    pub metallic: f32,
    /// Specular exponent (`Ns`)
    pub shininess: f32,
    /// Ambient colour (`Ka`)
    pub ambient: Rgb,
    /// Diffuse colour (`Kd`)
    pub diffuse: Rgb,
    /// Specular colour (`Ks`)
    pub specular: Rgb,
    /// Emissive colour (`Ke`)
    pub emission: Rgb,
    /// Diffuse texture file name (`map_Kd`), relative to the OBJ directory
    pub texture: Option<String>,
    /// Whether a `newmtl` record declared this material
    pub defined: bool,
}

impl Material {
    /// Create a stub material with default attributes
    ///
    /// Stubs start fully opaque (`opacity` 1.0) so that a material named by
    /// `usemtl` but never defined renders as a solid surface. Colours and
    /// factors start at zero and there is no texture.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            opacity: 1.0,
            metallic: 0.0,
            shininess: 0.0,
            ambient: [0.0; 3],
            diffuse: [0.0; 3],
            specular: [0.0; 3],
            emission: [0.0; 3],
            texture: None,
            defined: false,
        }
    }

    /// Whether the material is still a name-only stub
    pub fn is_stub(&self) -> bool {
        !self.defined
    }
}

/// Materials keyed by unique name, kept in first-reference order
#[derive(Debug, Clone, Default)]
pub struct MaterialTable {
    materials: Vec<Material>,
    by_name: HashMap<String, usize>,
}

impl MaterialTable {
    /// Create a new empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the material with this name, creating a stub on first reference
    pub fn get_or_insert(&mut self, name: &str) -> &mut Material {
        let slot = match self.by_name.get(name) {
            Some(&slot) => slot,
            None => {
                log::trace!("creating material stub '{}'", name);
                self.materials.push(Material::new(name));
                let slot = self.materials.len() - 1;
                self.by_name.insert(name.to_string(), slot);
                slot
            }
        };
        &mut self.materials[slot]
    }

    /// Look up a material by name
    pub fn get(&self, name: &str) -> Option<&Material> {
        self.by_name.get(name).map(|&slot| &self.materials[slot])
    }

    /// Look up a material by name for modification
    pub fn get_mut(&mut self, name: &str) -> Option<&mut Material> {
        match self.by_name.get(name) {
            Some(&slot) => Some(&mut self.materials[slot]),
            None => None,
        }
    }

    /// Whether a material with this name exists
    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Number of materials
    pub fn len(&self) -> usize {
        self.materials.len()
    }

    /// Whether the table is empty
    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }

    /// Iterate materials in first-reference order
    pub fn iter(&self) -> impl Iterator<Item = &Material> {
        self.materials.iter()
    }
}

//! MTL record dispatch and material field handlers

use crate::error::{Error, Result};
use crate::model::{Document, Material, OrphanPolicy, ParserConfig};

use super::fields::{parse_floats, parse_name};
use super::state::Cursor;

/// MTL record kinds understood by the decoder
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MtlRecord {
    /// `newmtl`: declare or select a material
    NewMaterial,
    /// An attribute of the current material
    Attribute(MaterialAttribute),
}

/// Material attribute directives
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaterialAttribute {
    /// `d`: opacity
    Dissolve,
    /// `Tr`: transparency, the inverse of `d`
    Transparency,
    /// `Ka`: ambient colour
    Ambient,
    /// `Kd`: diffuse colour
    Diffuse,
    /// `Ks`: specular colour
    Specular,
    /// `Ke`: emissive colour
    Emission,
    /// `Ns`: specular exponent
    Shininess,
    /// `Pm`: metallic factor
    Metallic,
    /// `map_Kd`: diffuse texture
    DiffuseMap,
}

impl MtlRecord {
    /// Map a record keyword to its kind
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        let attribute = match keyword {
            "newmtl" => return Some(MtlRecord::NewMaterial),
            "d" => MaterialAttribute::Dissolve,
            "Tr" => MaterialAttribute::Transparency,
            "Ka" => MaterialAttribute::Ambient,
            "Kd" => MaterialAttribute::Diffuse,
            "Ks" => MaterialAttribute::Specular,
            "Ke" => MaterialAttribute::Emission,
            "Ns" => MaterialAttribute::Shininess,
            "Pm" => MaterialAttribute::Metallic,
            "map_Kd" => MaterialAttribute::DiffuseMap,
            _ => return None,
        };
        Some(MtlRecord::Attribute(attribute))
    }
}

/// Decode one trimmed MTL line into the document's material table
pub(crate) fn parse_mtl_line(
    doc: &mut Document,
    cursor: &mut Cursor,
    config: &ParserConfig,
    text: &str,
) -> Result<()> {
    let fields: Vec<&str> = text.split_whitespace().collect();
    let Some((&keyword, args)) = fields.split_first() else {
        return Ok(());
    };
    if keyword.starts_with('#') {
        return Ok(());
    }

    let Some(record) = MtlRecord::from_keyword(keyword) else {
        log::warn!(
            "line {}: unsupported MTL record '{}', skipping",
            cursor.line,
            keyword
        );
        return Ok(());
    };

    match record {
        MtlRecord::NewMaterial => {
            if let Some(name) = parse_name(keyword, args, cursor.line) {
                cursor.select_material(doc, &name);
                doc.materials.get_or_insert(&name).defined = true;
            }
        }
        MtlRecord::Attribute(attribute) => {
            let line = cursor.line;
            if let Some(material) = current_material(doc, cursor, config, keyword)? {
                apply_attribute(material, attribute, keyword, args, line)?;
            }
        }
    }

    Ok(())
}

/// Parse an attribute directive into the material it applies to
fn apply_attribute(
    material: &mut Material,
    attribute: MaterialAttribute,
    keyword: &str,
    args: &[&str],
    line: usize,
) -> Result<()> {
    match attribute {
        MaterialAttribute::Dissolve => {
            let [d] = parse_floats::<1>(keyword, args, line)?;
            material.opacity = d;
        }
        MaterialAttribute::Transparency => {
            let [tr] = parse_floats::<1>(keyword, args, line)?;
            material.opacity = 1.0 - tr;
        }
        MaterialAttribute::Ambient => material.ambient = parse_floats(keyword, args, line)?,
        MaterialAttribute::Diffuse => material.diffuse = parse_floats(keyword, args, line)?,
        MaterialAttribute::Specular => material.specular = parse_floats(keyword, args, line)?,
        MaterialAttribute::Emission => material.emission = parse_floats(keyword, args, line)?,
        MaterialAttribute::Shininess => {
            let [ns] = parse_floats::<1>(keyword, args, line)?;
            material.shininess = ns;
        }
        MaterialAttribute::Metallic => {
            let [pm] = parse_floats::<1>(keyword, args, line)?;
            material.metallic = pm;
        }
        MaterialAttribute::DiffuseMap => {
            if let Some(texture) = parse_name(keyword, args, line) {
                material.texture = Some(texture);
            }
        }
    }
    Ok(())
}

/// The material a directive applies to, honouring the orphan policy
fn current_material<'a>(
    doc: &'a mut Document,
    cursor: &Cursor,
    config: &ParserConfig,
    directive: &str,
) -> Result<Option<&'a mut Material>> {
    if let Some(name) = cursor.material() {
        return Ok(doc.materials.get_mut(name));
    }

    match config.orphan_policy() {
        OrphanPolicy::Reject => Err(Error::NoCurrentMaterial {
            line: cursor.line,
            directive: directive.to_string(),
        }),
        OrphanPolicy::Skip => {
            log::warn!(
                "line {}: '{}' outside any newmtl block, skipping",
                cursor.line,
                directive
            );
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(doc: &mut Document, config: &ParserConfig, lines: &[&str]) -> Result<()> {
        let mut cursor = Cursor::new();
        for (i, text) in lines.iter().enumerate() {
            cursor.line = i + 1;
            parse_mtl_line(doc, &mut cursor, config, text)?;
        }
        Ok(())
    }

    #[test]
    fn test_keyword_mapping() {
        assert_eq!(MtlRecord::from_keyword("newmtl"), Some(MtlRecord::NewMaterial));
        assert_eq!(
            MtlRecord::from_keyword("Tr"),
            Some(MtlRecord::Attribute(MaterialAttribute::Transparency))
        );
        assert_eq!(MtlRecord::from_keyword("illum"), None);
    }

    #[test]
    fn test_newmtl_never_hits_orphan_check() {
        let mut doc = Document::new();
        decode(&mut doc, &ParserConfig::new(), &["newmtl First", "newmtl Second"]).unwrap();

        assert_eq!(doc.materials.len(), 2);
        assert!(doc.materials.iter().all(|m| m.defined));
    }

    #[test]
    fn test_material_directives() {
        let mut doc = Document::new();
        decode(
            &mut doc,
            &ParserConfig::new(),
            &[
                "# exported",
                "newmtl Brass",
                "Ka 0.1 0.2 0.3",
                "Kd 0.4 0.5 0.6",
                "Ks 1 1 1",
                "Ke 0 0 0.5",
                "Ns 96",
                "Pm 0.8",
                "d 0.75",
                "map_Kd textures/brass.png",
                "illum 2",
            ],
        )
        .unwrap();

        let brass = doc.materials.get("Brass").unwrap();
        assert!(brass.defined);
        assert_eq!(brass.ambient, [0.1, 0.2, 0.3]);
        assert_eq!(brass.diffuse, [0.4, 0.5, 0.6]);
        assert_eq!(brass.specular, [1.0, 1.0, 1.0]);
        assert_eq!(brass.emission, [0.0, 0.0, 0.5]);
        assert_eq!(brass.shininess, 96.0);
        assert_eq!(brass.metallic, 0.8);
        assert_eq!(brass.opacity, 0.75);
        assert_eq!(brass.texture.as_deref(), Some("textures/brass.png"));
    }

    #[test]
    fn test_transparency_inverts_opacity() {
        let mut doc = Document::new();
        decode(&mut doc, &ParserConfig::new(), &["newmtl Glass", "Tr 0.25"]).unwrap();
        assert_eq!(doc.materials.get("Glass").unwrap().opacity, 0.75);
    }

    #[test]
    fn test_newmtl_fills_existing_stub() {
        let mut doc = Document::new();
        doc.materials.get_or_insert("Red");
        decode(&mut doc, &ParserConfig::new(), &["newmtl Red", "Ka 1 0 0"]).unwrap();

        assert_eq!(doc.materials.len(), 1);
        assert_eq!(doc.materials.get("Red").unwrap().ambient, [1.0, 0.0, 0.0]);
    }

    #[test]
    fn test_orphan_directive_rejected_by_default() {
        let mut doc = Document::new();
        let err = decode(&mut doc, &ParserConfig::new(), &["Ka 1 0 0"]).unwrap_err();
        assert!(matches!(
            err,
            Error::NoCurrentMaterial { line: 1, ref directive } if directive == "Ka"
        ));
    }

    #[test]
    fn test_orphan_directive_skipped_when_configured() {
        let mut doc = Document::new();
        let config = ParserConfig::new().with_orphan_material_directives(OrphanPolicy::Skip);
        decode(&mut doc, &config, &["d 0.5", "newmtl Red", "d 0.25"]).unwrap();

        assert_eq!(doc.materials.len(), 1);
        assert_eq!(doc.materials.get("Red").unwrap().opacity, 0.25);
    }

    #[test]
    fn test_malformed_colour() {
        let mut doc = Document::new();
        let err = decode(&mut doc, &ParserConfig::new(), &["newmtl Red", "Ks 1 x 0"]).unwrap_err();
        assert!(matches!(err, Error::MalformedNumber { line: 2, ref value, .. } if value == "x"));
    }
}

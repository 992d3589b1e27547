//! Parse-time cursor: current object, current material and line number
//!
//! The cursor lives only for the duration of one decode. It indexes into
//! the document it is decoding rather than holding references, so the
//! handlers can borrow the document freely.

use crate::model::{Document, Object};

/// Mutable parse state shared by the OBJ and MTL handlers
#[derive(Debug, Default)]
pub(crate) struct Cursor {
    /// Line currently being handled (1-based)
    pub line: usize,
    /// Slot of the current object in `Document::objects`
    object: Option<usize>,
    /// Name of the current material
    material: Option<String>,
    /// Last `s` record state
    smooth: bool,
}

impl Cursor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new object and make it current
    pub fn start_object(&mut self, doc: &mut Document, object: Object) -> usize {
        log::trace!("line {}: starting object '{}'", self.line, object.name);
        doc.objects.push(object);
        let slot = doc.objects.len() - 1;
        self.object = Some(slot);
        slot
    }

    /// Current object slot, creating `unnamed<line>` if none exists yet
    pub fn ensure_object(&mut self, doc: &mut Document) -> usize {
        match self.object {
            Some(slot) => slot,
            None => self.start_object(doc, Object::unnamed(self.line)),
        }
    }

    /// Select a material by name, creating a stub in the table if unseen
    pub fn select_material(&mut self, doc: &mut Document, name: &str) {
        doc.materials.get_or_insert(name);
        self.material = Some(name.to_string());
    }

    pub fn material(&self) -> Option<&str> {
        self.material.as_deref()
    }

    /// Forget the current material between the OBJ and MTL passes
    pub fn clear_material(&mut self) {
        self.material = None;
    }

    pub fn set_smooth(&mut self, smooth: bool) {
        self.smooth = smooth;
    }

    #[allow(dead_code)]
    pub fn smooth(&self) -> bool {
        self.smooth
    }
}

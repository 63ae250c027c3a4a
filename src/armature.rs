use crate::document::{Document, Node};
use crate::error::{Error, Result};
use crate::skeleton;

pub const VISUAL_SCENE_PATH: &[&str] = &["library_visual_scenes", "visual_scene"];

const SKIN_SOURCE_PATH: &[&str] = &["library_controllers", "controller", "skin", "source"];

/// Which attribute carries a node's identifier.
///
/// Exporters disagree: Blender-authored rigs put the readable bone name
/// in `name`, while some toolchains only fill in the machine `id`.
/// `Name` is the canonical mode; `Id` exists for the older assets.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum NameConvention {
    Name,
    Id,
}

impl Default for NameConvention {
    fn default() -> NameConvention {
        NameConvention::Name
    }
}

impl NameConvention {
    pub fn attribute(self) -> &'static str {
        match self {
            NameConvention::Name => "name",
            NameConvention::Id => "id",
        }
    }

    /// Identifier of `node` under this convention.  There is no fallback
    /// to the other attribute: a located node without the selected one is
    /// a malformed document.
    pub fn identifier<'a>(self, node: &'a Node, context: &str) -> Result<&'a str> {
        node.attr(self.attribute()).ok_or_else(|| Error::MalformedDocument {
            context: format!("{}: missing attribute {:?}", context, self.attribute()),
        })
    }
}

/// Display name of the armature: the identifier of the first
/// `visual_scene` element.
pub fn display_name(doc: &Document, convention: NameConvention) -> Result<String> {
    let scene = doc.find(VISUAL_SCENE_PATH)?;
    Ok(convention.identifier(scene, "visual_scene")?.to_owned())
}

/// Identifier of the first bone-tagged child of the visual scene.
///
/// `None` is a degenerate but legal skeleton, not an error.
pub fn root_bone(doc: &Document, convention: NameConvention) -> Result<Option<String>> {
    let scene = doc.find(VISUAL_SCENE_PATH)?;
    for child in scene.children() {
        if skeleton::is_bone_node(child) {
            let id = convention.identifier(child, "scene root node")?;
            return Ok(Some(id.to_owned()));
        }
    }
    Ok(None)
}

/// Bone names listed by the first skin controller's source, in skinning
/// order.  Not consulted by the skeleton conversion itself; exposed for
/// callers that need the skinning order.
pub fn bone_names(doc: &Document) -> Result<Vec<String>> {
    let source = doc.find(SKIN_SOURCE_PATH)?;
    Ok(source.text().split_whitespace().map(|s| s.to_owned()).collect())
}

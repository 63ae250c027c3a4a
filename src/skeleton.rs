use crate::armature::{self, NameConvention};
use crate::document::{Document, Node};
use crate::error::Result;

/// Separator used in exported identifiers.  Spaces in the armature's
/// display name map to this in ids, file names, and bone prefixes.
pub const SEPARATOR: char = '_';

/// Identifier substrings marking helper nodes that are never real bones.
/// Deliberately case-sensitive containment, matching the naming
/// convention of the source asset pipeline.
const EXCLUDED_MARKERS: &[&str] = &["prop", "IK"];

/// True for scene-graph elements that are armature joints.  Meshes,
/// cameras, and lights appear under `visual_scene` with other tags and
/// fall out of the skeleton automatically.
pub fn is_bone_node(node: &Node) -> bool {
    node.in_collada_ns() && node.tag() == "node"
}

fn is_excluded(identifier: &str) -> bool {
    EXCLUDED_MARKERS.iter().any(|m| identifier.contains(m))
}

/// Removes the leading armature prefix from a bone identifier.  A name
/// without the prefix passes through unchanged, so stripping twice is
/// the same as stripping once.
pub fn strip_armature_prefix<'a>(identifier: &'a str, prefix: &str) -> &'a str {
    identifier.strip_prefix(prefix).unwrap_or(identifier)
}

/// Prefix the exporter puts on every bone identifier: the display name
/// with spaces as separators, plus a trailing separator.
pub fn armature_prefix(display_name: &str) -> String {
    let mut prefix = display_name.replace(' ', "_");
    prefix.push(SEPARATOR);
    prefix
}

/// How a walked bone is rendered.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum BoneStyle {
    /// `<bone name="N">` children `</bone>`
    Standard,
    /// `<bone name="N"><target>N</target>` children `</bone>`
    Target,
}

impl BoneStyle {
    fn render(self, name: &str, children: &str) -> String {
        match self {
            BoneStyle::Standard => {
                format!("<bone name=\"{}\">{}</bone>", name, children)
            },
            BoneStyle::Target => {
                format!("<bone name=\"{}\"><target>{}</target>{}</bone>", name, name, children)
            },
        }
    }
}

/// Walks every immediate child of the visual scene and concatenates the
/// rendered bone subtrees, in document order.
pub fn walk_scene(
    scene: &Node,
    prefix: &str,
    convention: NameConvention,
    style: BoneStyle,
) -> Result<String> {
    let mut out = String::new();
    for child in scene.children() {
        out.push_str(&render_subtree(child, prefix, convention, style)?);
    }
    Ok(out)
}

/// Renders one scene-graph subtree.  A non-bone node, or one whose
/// identifier carries an exclusion marker, contributes nothing and is
/// pruned whole: bones nested beneath it never appear.
fn render_subtree(
    node: &Node,
    prefix: &str,
    convention: NameConvention,
    style: BoneStyle,
) -> Result<String> {
    if !is_bone_node(node) {
        return Ok(String::new());
    }
    let identifier = convention.identifier(node, "bone node")?;
    if is_excluded(identifier) {
        return Ok(String::new());
    }

    let name = strip_armature_prefix(identifier, prefix);
    let mut children = String::new();
    for child in node.children() {
        children.push_str(&render_subtree(child, prefix, convention, style)?);
    }
    Ok(style.render(name, &children))
}

/// Builds the two-section `<skeletons>` markup for one document: the
/// same bone tree walked once per `BoneStyle`.  The result is compact;
/// `output::write_pretty` reindents it.
pub fn build_skeleton_document(doc: &Document, convention: NameConvention) -> Result<String> {
    let display = armature::display_name(doc, convention)?;
    let title = display.replace('_', " ");
    let id = display.replace(' ', "_");
    let prefix = armature_prefix(&display);
    let scene = doc.find(armature::VISUAL_SCENE_PATH)?;

    let root = match armature::root_bone(doc, convention)? {
        Some(identifier) => strip_armature_prefix(&identifier, &prefix).to_owned(),
        None => String::new(),
    };

    let mut out = String::new();
    out.push_str("<skeletons>");
    out.push_str(&format!("<standard_skeleton title=\"{}\" id=\"{}\">", title, id));
    out.push_str(&walk_scene(scene, &prefix, convention, BoneStyle::Standard)?);
    out.push_str("</standard_skeleton>");
    out.push_str(&format!("<skeleton title=\"{}\" target=\"{}\">", title, id));
    out.push_str(&format!("<identifier><root>{}</root></identifier>", root));
    out.push_str(&walk_scene(scene, &prefix, convention, BoneStyle::Target)?);
    out.push_str("</skeleton>");
    out.push_str("</skeletons>");
    Ok(out)
}

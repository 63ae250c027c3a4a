use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use xml::reader::ParserConfig;
use xml::writer::EmitterConfig;
use crate::error::Result;

/// Re-parses compact builder markup and serializes it with an XML
/// declaration, two-space indentation, and self-closing empty elements.
pub fn write_pretty(markup: &str, w: impl Write) -> Result<()> {
    let reader = ParserConfig::new()
        .trim_whitespace(true)
        .ignore_comments(true)
        .create_reader(markup.as_bytes());
    let mut writer = EmitterConfig::new()
        .perform_indent(true)
        .create_writer(w);
    for evt in reader {
        let evt = evt?;
        if let Some(out) = evt.as_writer_event() {
            writer.write(out)?;
        }
    }
    Ok(())
}

/// Output file name for an armature: spaces become separators.
pub fn output_file_name(display_name: &str) -> String {
    format!("{}.xml", display_name.replace(' ', "_"))
}

/// Writes the skeleton markup under `dir`, overwriting any existing
/// file at that path.
pub fn write_skeleton_file(dir: &Path, display_name: &str, markup: &str) -> Result<PathBuf> {
    let path = dir.join(output_file_name(display_name));
    let f = File::create(&path)?;
    write_pretty(markup, BufWriter::new(f))?;
    Ok(path)
}

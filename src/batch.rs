use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use crate::armature::{self, NameConvention};
use crate::document::Document;
use crate::error::{Error, Result};
use crate::output;
use crate::skeleton;

/// Options for one batch run.
#[derive(Clone, Copy, Default)]
pub struct BatchOptions {
    /// Abort the batch on the first failed file instead of carrying on
    /// and reporting every failure at the end.
    pub fail_fast: bool,
    pub convention: NameConvention,
}

/// Outcome of a batch run.
#[derive(Debug, Default)]
pub struct BatchReport {
    /// Output files written, in input order.
    pub written: Vec<PathBuf>,
    /// Input files that failed, with the error that stopped each one.
    pub failures: Vec<(PathBuf, Error)>,
}

/// Converts one `.dae` file, returning the path of the written skeleton
/// file.  The output name comes from the armature's display name, not
/// the input file name.
pub fn convert_file(
    input: &Path,
    output_dir: &Path,
    convention: NameConvention,
) -> Result<PathBuf> {
    let doc = Document::open(input)?;
    let display = armature::display_name(&doc, convention)?;
    let markup = skeleton::build_skeleton_document(&doc, convention)?;
    output::write_skeleton_file(output_dir, &display, &markup)
}

/// The `.dae` files in `dir`, sorted by name.
pub fn dae_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if path.extension() == Some("dae".as_ref()) && path.is_file() {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Converts every `.dae` file in `input_dir` into `output_dir`.
///
/// Each file is processed to completion or abandoned at its first
/// error; there is no partial output for a failed file beyond whatever
/// `File::create` already truncated.
pub fn convert_dir(
    input_dir: &Path,
    output_dir: &Path,
    opts: BatchOptions,
) -> Result<BatchReport> {
    let mut report = BatchReport::default();
    for path in dae_files(input_dir)? {
        match convert_file(&path, output_dir, opts.convention) {
            Ok(out) => {
                info!("wrote {}", out.display());
                report.written.push(out);
            },
            Err(e) => {
                warn!("failed to convert {}: {}", path.display(), e);
                if opts.fail_fast {
                    return Err(e);
                }
                report.failures.push((path, e));
            },
        }
    }
    Ok(report)
}

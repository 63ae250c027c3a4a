use std::path::PathBuf;
use std::process;
use clap::Parser;
use tracing::error;
use skel_convert::armature::NameConvention;
use skel_convert::batch::{self, BatchOptions};

/// Convert COLLADA (.dae) armatures into game skeleton XML files.
#[derive(Parser)]
struct Opts {
    /// Directory containing the input .dae files.
    input_dir: PathBuf,
    /// Directory the skeleton .xml files are written into.
    output_dir: PathBuf,
    /// Abort the batch on the first failed file.
    #[arg(long)]
    fail_fast: bool,
    /// Read identifiers from the "id" attribute instead of "name".
    #[arg(long)]
    id_names: bool,
}

fn main() {
    tracing_subscriber::fmt().init();

    let opts = Opts::parse();
    let batch_opts = BatchOptions {
        fail_fast: opts.fail_fast,
        convention: if opts.id_names { NameConvention::Id } else { NameConvention::Name },
    };

    match batch::convert_dir(&opts.input_dir, &opts.output_dir, batch_opts) {
        Ok(report) => {
            println!("wrote {} skeleton file(s)", report.written.len());
            if !report.failures.is_empty() {
                for (path, e) in &report.failures {
                    error!("{}: {}", path.display(), e);
                }
                process::exit(1);
            }
        },
        Err(e) => {
            error!("{}", e);
            process::exit(1);
        },
    }
}

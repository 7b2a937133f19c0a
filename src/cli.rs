use clap::Parser;
use plunge::SyncConfig;
use std::path::PathBuf;

/// Synchronize (copy) newer files of corresponding names from SOURCE into DEST.
///
/// The relative pathnames of the files to synchronize are read from standard
/// input, one per line. A file is copied when it is missing from DEST or the
/// copy in SOURCE is newer; the source modification time is carried over.
#[derive(Parser, Debug)]
#[command(name = "plunge")]
#[command(version)]
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Don't actually copy files; just output messages
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Report files in destination directory to purge
    #[arg(short, long)]
    pub purge: bool,

    /// Output messages for all files, whether copied or skipped
    #[arg(short, long)]
    pub verbose: bool,

    /// Source directory
    #[arg(value_name = "SOURCE")]
    pub source: PathBuf,

    /// Destination directory
    #[arg(value_name = "DEST")]
    pub dest: PathBuf,
}

impl From<&Cli> for SyncConfig {
    fn from(cli: &Cli) -> Self {
        Self::new(cli.verbose, cli.dry_run, cli.purge)
    }
}

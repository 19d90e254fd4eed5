use clap::Parser;
use std::path::{Component, Path};

#[derive(Parser, Debug)]
#[command(name = "storezip")]
#[command(version)]
#[command(about = "Pack files into an uncompressed (stored) ZIP archive", long_about = None)]
#[command(after_help = "Examples:\n  \
  storezip export.zip students.csv incidents.csv   archive two CSV exports\n  \
  storezip -j out.zip reports/*.csv                store base names only\n  \
  storezip - a.txt > a.zip                         write the archive to stdout")]
pub struct Cli {
    /// Output ZIP path, or `-` for stdout
    #[arg(value_name = "ARCHIVE")]
    pub archive: String,

    /// Files to add, in archive order
    #[arg(value_name = "FILES", required = true)]
    pub files: Vec<String>,

    /// Junk paths (store only file names)
    #[arg(short = 'j')]
    pub junk_paths: bool,

    /// Never overwrite an existing archive
    #[arg(short = 'n')]
    pub never_overwrite: bool,

    /// Overwrite an existing archive WITHOUT prompting
    #[arg(short = 'o')]
    pub overwrite: bool,

    /// Verbose logging
    #[arg(short = 'v')]
    pub verbose: bool,

    /// Quiet mode (-qq => quieter)
    #[arg(short = 'q', action = clap::ArgAction::Count)]
    pub quiet: u8,
}

impl Cli {
    pub fn is_stdout(&self) -> bool {
        self.archive == "-"
    }

    pub fn is_quiet(&self) -> bool {
        self.quiet > 0 || self.is_stdout()
    }

    pub fn is_very_quiet(&self) -> bool {
        self.quiet > 1
    }

    /// Default log filter when `RUST_LOG` is unset.
    pub fn log_level(&self) -> &'static str {
        if self.is_very_quiet() {
            "error"
        } else if self.verbose {
            "info"
        } else {
            "warn"
        }
    }

    /// Name under which `path` is stored in the archive.
    ///
    /// With `-j` only the final component is kept. Otherwise the path is kept
    /// relative: root, prefix and `.` components are dropped and separators
    /// become `/`.
    pub fn entry_name(&self, path: &str) -> String {
        let path = path.replace('\\', "/");
        let path = Path::new(&path);

        if self.junk_paths {
            return path
                .file_name()
                .map(|s| s.to_string_lossy().to_string())
                .unwrap_or_else(|| path.to_string_lossy().to_string());
        }

        path.components()
            .filter_map(|c| match c {
                Component::Normal(s) => Some(s.to_string_lossy()),
                Component::ParentDir => Some("..".into()),
                Component::RootDir | Component::Prefix(_) | Component::CurDir => None,
            })
            .collect::<Vec<_>>()
            .join("/")
    }
}

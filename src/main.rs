//! dirlist - list directory contents.
//!
//! Usage:
//!   dirlist [PATH]           List entry names on one line
//!   dirlist -l [PATH]        Mode, size, modification time and name per line
//!   dirlist -R [PATH]        Also list every subdirectory, depth-first
//!   dirlist -a -r -t ...     Show hidden, reverse, sort by modification time
//!   dirlist --help           Show help

use std::io::{BufWriter, Write};
use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::{Context, Result};

use dirlist_lister::{DirectoryLister, ListingOptions};

#[allow(clippy::struct_excessive_bools)]
#[derive(Parser)]
#[command(
    name = "dirlist",
    version,
    about = "List directory contents",
    long_about = "dirlist prints the entries of a directory, optionally with \
                  mode, size and modification time, and optionally walks \
                  subdirectories.\n\n\
                  Unreadable directories and entries are reported inline and \
                  do not change the exit status."
)]
struct Cli {
    /// Directory to list (defaults to current directory)
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Show hidden entries (names starting with `.`)
    #[arg(short = 'a', long = "all")]
    all: bool,

    /// Show mode, size and modification time
    #[arg(short = 'l', long = "long")]
    long: bool,

    /// Reverse the sort order
    #[arg(short = 'r', long = "reverse")]
    reverse: bool,

    /// Sort by modification time, newest first
    #[arg(short = 't', long = "sort-time")]
    sort_time: bool,

    /// List subdirectories recursively
    #[arg(short = 'R', long = "recursive")]
    recursive: bool,
}

impl Cli {
    fn listing_options(&self) -> ListingOptions {
        ListingOptions {
            show_hidden: self.all,
            detailed: self.long,
            reverse_order: self.reverse,
            sort_by_mod_time: self.sort_time,
            recursive: self.recursive,
        }
    }
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    let lister = DirectoryLister::new(cli.listing_options());

    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    // Read and metadata failures are already in the output; only a broken
    // output stream ends up here.
    lister
        .list(&cli.path, &mut out)
        .with_context(|| format!("Failed to list {}", cli.path.display()))?;
    out.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_path_and_flags() {
        let cli = Cli::parse_from(["dirlist"]);
        assert_eq!(cli.path, PathBuf::from("."));
        assert_eq!(cli.listing_options(), ListingOptions::default());
    }

    #[test]
    fn test_combined_short_flags() {
        let cli = Cli::parse_from(["dirlist", "-lRa", "-t", "-r", "/tmp"]);
        let options = cli.listing_options();

        assert_eq!(cli.path, PathBuf::from("/tmp"));
        assert!(options.show_hidden);
        assert!(options.detailed);
        assert!(options.reverse_order);
        assert!(options.sort_by_mod_time);
        assert!(options.recursive);
    }

    #[test]
    fn test_long_flags() {
        let cli = Cli::parse_from(["dirlist", "--recursive", "--sort-time", "src"]);
        let options = cli.listing_options();

        assert!(options.recursive);
        assert!(options.sort_by_mod_time);
        assert!(!options.detailed);
    }

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}

use clap::Parser;
use grub_entry_ids::{Error, GrubConf, LoaderError, DEFAULT_GRUB_CFG};
use std::error::Error as _;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::exit;

/// Show GRUB menu entry id and name.
///
/// Useful for obtaining values for grub-set-default and grub-reboot.
#[derive(Debug, Parser)]
#[command(name = "grub-entry-ids", version)]
struct Cli {
    /// Path to GRUB configuration file
    #[arg(short, long, value_name = "PATH", default_value = DEFAULT_GRUB_CFG)]
    file: PathBuf,
}

pub fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let conf = match GrubConf::new(cli.file) {
        Ok(conf) => conf,
        Err(Error::Loader { source: LoaderError::NotFound(path), .. }) => {
            eprintln!("Error: File not found: {}", path.display());
            exit(1);
        }
        Err(why) => {
            eprint!("Error: {}", why);
            let mut source = why.source();
            while let Some(cause) = source {
                eprint!(": {}", cause);
                source = cause.source();
            }
            eprintln!();
            exit(1);
        }
    };

    let stdout = io::stdout();
    let mut stdout = stdout.lock();
    for entry in conf.entries() {
        if let Err(why) = writeln!(stdout, "{}", entry) {
            if why.kind() != io::ErrorKind::BrokenPipe {
                eprintln!("Error: failed to write entry: {}", why);
            }
            exit(1);
        }
    }
}

//! Rust crate for listing the menu entries of a GRUB configuration.
//!
//! Each entry is reported with the identifier that `grub-set-default` and
//! `grub-reboot` expect: `N` for a top-level entry, or `N>M` for the `M`th
//! entry of the submenu at top-level position `N`.

#[macro_use]
extern crate log;
#[macro_use]
extern crate thiserror;

pub mod entry;
pub mod loader;
pub mod scanner;

pub use self::entry::MenuEntry;
pub use self::loader::LoaderError;
pub use self::scanner::{scan, Scanner};

use std::path::{Path, PathBuf};
use std::slice;

/// Where GRUB keeps its generated configuration on most distributions.
pub const DEFAULT_GRUB_CFG: &str = "/boot/grub/grub.cfg";

#[derive(Debug, Error)]
pub enum Error {
    #[error("error loading grub config at {:?}", path)]
    Loader { path: PathBuf, source: LoaderError },
}

#[derive(Debug, Clone)]
pub struct GrubConf {
    pub path: Box<Path>,
    pub lines: Vec<String>,
}

impl GrubConf {
    pub fn new<P: Into<PathBuf>>(path: P) -> Result<Self, Error> {
        let path: PathBuf = path.into();
        info!("reading grub config from {}", path.display());

        let lines = loader::load_lines(&path).map_err(|source| Error::Loader {
            path: path.clone(),
            source,
        })?;

        debug!("{} candidate lines in {}", lines.len(), path.display());

        Ok(Self { path: path.into(), lines })
    }

    /// Builds a config from lines already in memory, applying the same filtering
    /// as when reading from a file.
    pub fn from_lines<I, S>(path: impl Into<PathBuf>, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let path: PathBuf = path.into();
        Self { path: path.into(), lines: loader::filter_lines(lines) }
    }

    /// Lazily iterates the menu entries of this config.
    pub fn entries(&self) -> Scanner<slice::Iter<'_, String>> {
        scan(&self.lines)
    }
}

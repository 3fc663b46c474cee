use itertools::process_results;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

#[derive(Debug, Error)]
pub enum LoaderError {
    #[error("error reading line in grub config")]
    Line(#[source] io::Error),
    #[error("File not found: {}", _0.display())]
    NotFound(PathBuf),
    #[error("grub config is not a file")]
    NotAFile,
    #[error("error opening grub config")]
    Open(#[source] io::Error),
}

/// Reads the lines of a GRUB configuration that may contain menu constructs.
///
/// Each line is trimmed, and blank lines or lines beginning with `#` are dropped.
pub fn load_lines<P: AsRef<Path>>(path: P) -> Result<Vec<String>, LoaderError> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(LoaderError::NotFound(path.to_path_buf()));
    }

    if !path.is_file() {
        return Err(LoaderError::NotAFile);
    }

    let file = File::open(path).map_err(LoaderError::Open)?;

    process_results(BufReader::new(file).lines(), |lines| filter_lines(lines))
        .map_err(LoaderError::Line)
}

/// Trims lines, discarding those which are empty or comments.
pub fn filter_lines<I, S>(lines: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    lines
        .into_iter()
        .filter_map(|line| {
            let line = line.as_ref().trim();
            if line.is_empty() || line.starts_with('#') {
                None
            } else {
                Some(line.to_owned())
            }
        })
        .collect()
}

// File: crates/ghg-core/src/source.rs
// Summary: Data sources the pipeline fetches its CSV text from.

use std::io;
use std::path::{Path, PathBuf};
use tracing::info;

/// Where the tabular resource comes from. `fetch` is the pipeline's only blocking call.
pub trait DataSource {
    /// Human-readable resource name used in error messages.
    fn name(&self) -> String;
    fn fetch(&self) -> io::Result<Vec<u8>>;
}

/// CSV file on disk.
#[derive(Clone, Debug)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl DataSource for FileSource {
    fn name(&self) -> String {
        self.path.display().to_string()
    }

    fn fetch(&self) -> io::Result<Vec<u8>> {
        std::fs::read(&self.path)
    }
}

/// CSV text held in memory.
#[derive(Clone, Debug)]
pub struct InlineSource {
    name: String,
    text: String,
}

impl InlineSource {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self { name: name.into(), text: text.into() }
    }
}

impl DataSource for InlineSource {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn fetch(&self) -> io::Result<Vec<u8>> {
        Ok(self.text.as_bytes().to_vec())
    }
}

/// Resolve an input path, trying the `.csv`/`.cvs` swap when it does not exist.
/// Returns `(actual_path, used_alt)`. A path that exists in neither form is returned
/// unchanged so the load reports it.
pub fn resolve_path(raw: impl AsRef<Path>) -> (PathBuf, bool) {
    let p = raw.as_ref();
    if p.exists() {
        return (p.to_path_buf(), false);
    }
    match swap_ext(p) {
        Some(alt) if alt.exists() => {
            info!(requested = %p.display(), using = %alt.display(), "extension swapped between .csv/.cvs");
            (alt, true)
        }
        _ => (p.to_path_buf(), false),
    }
}

fn swap_ext(p: &Path) -> Option<PathBuf> {
    let ext = p.extension()?.to_string_lossy().to_lowercase();
    let swapped = match ext.as_str() {
        "cvs" => "csv",
        "csv" => "cvs",
        _ => return None,
    };
    Some(p.with_extension(swapped))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("ghg-core-{name}-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn swaps_csv_and_cvs_extensions() {
        let dir = scratch_dir("resolve");
        let actual = dir.join("emissions.cvs");
        std::fs::write(&actual, "TIME_PERIOD\n").unwrap();

        assert_eq!(resolve_path(dir.join("emissions.csv")), (actual.clone(), true));
        assert_eq!(resolve_path(&actual), (actual.clone(), false));

        let missing = dir.join("missing.csv");
        assert_eq!(resolve_path(&missing), (missing, false));
        let other = dir.join("emissions.txt");
        assert_eq!(resolve_path(&other), (other, false));

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn inline_source_reports_its_name() {
        let src = InlineSource::new("inline", "a,b\n");
        assert_eq!(src.name(), "inline");
        assert_eq!(src.fetch().unwrap(), b"a,b\n".to_vec());
    }
}

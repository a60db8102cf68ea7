use std::fs;
use std::io;
use std::path::{Path, PathBuf};

const PREFIX: &str = "chain-";
const SUFFIX: &str = ".txt";

/// Lists the regular files of `dir` (not recursive) whose name matches `chain-*.txt`,
/// sorted by name. Symlinks are followed.
pub fn discover_chain_files(dir: &Path) -> io::Result<Vec<PathBuf>> {
    let mut files = vec![];
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let name = entry.file_name();
        if !name.to_str().map(is_chain_file_name).unwrap_or(false) {
            continue;
        }
        let path = entry.path();
        if path.is_file() {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

fn is_chain_file_name(name: &str) -> bool {
    name.len() >= PREFIX.len() + SUFFIX.len() && name.starts_with(PREFIX) && name.ends_with(SUFFIX)
}

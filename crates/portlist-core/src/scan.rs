//! Port tree traversal

use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::MANIFEST_FILE;
use crate::error::PortError;
use crate::port::Port;

/// Walk `ports_dir` and load every port found beneath it.
///
/// Any directory holding a `port.toml` is a port; its subdirectories are not
/// searched further. Hidden directories are skipped. Entries are visited in
/// file-name order, so the result is stable across runs, but callers that
/// need name order must sort it themselves.
///
/// # Errors
///
/// Returns an error if `ports_dir` does not exist, if any manifest fails to
/// load, or if two ports share a name.
pub fn scan_ports(ports_dir: &Path) -> Result<Vec<Port>, PortError> {
    if !ports_dir.is_dir() {
        return Err(PortError::io(
            ports_dir,
            io::Error::new(io::ErrorKind::NotFound, "ports directory not found"),
        ));
    }

    let mut ports = Vec::new();
    let mut seen: HashMap<String, PathBuf> = HashMap::new();
    let mut walker = WalkDir::new(ports_dir)
        .min_depth(1)
        .sort_by_file_name()
        .into_iter();

    while let Some(entry) = walker.next() {
        let entry = entry?;
        if !entry.file_type().is_dir() {
            continue;
        }
        if is_hidden(entry.path()) {
            walker.skip_current_dir();
            continue;
        }
        if !entry.path().join(MANIFEST_FILE).is_file() {
            continue;
        }

        let port = Port::load(entry.path())?;
        tracing::debug!("Found port {} {} in {}", port.name, port.version, entry.path().display());

        if let Some(first) = seen.get(&port.name) {
            return Err(PortError::Duplicate {
                name: port.name,
                first: first.clone(),
                second: port.root,
            });
        }
        seen.insert(port.name.clone(), port.root.clone());
        ports.push(port);
        walker.skip_current_dir();
    }

    tracing::debug!("Scanned {} ports under {}", ports.len(), ports_dir.display());
    Ok(ports)
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|n| n.starts_with('.'))
}

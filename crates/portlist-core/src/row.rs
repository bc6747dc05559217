//! Wiki table row formatting
//!
//! Each upstream port becomes one seven-column row:
//!
//! ```text
//! || [src/ports/zlib zlib] || 1.2.11 || [url zlib-1.2.11.tar.gz] || [src/ports/zlib/nacl.patch 3 KiB] || glibc-only || not arm || linux-only ||
//! ```
//!
//! The first three cells are left-padded to 70, 10 and 50 columns.

use std::fs;
use std::io;
use std::path::Path;

use crate::error::PortError;
use crate::port::Port;

/// Renders ports as wiki table rows with links into a source browser.
#[derive(Debug, Clone, Copy)]
pub struct RowFormatter<'a> {
    repo_root: &'a Path,
    src_url: &'a str,
}

impl<'a> RowFormatter<'a> {
    /// Create a formatter linking paths under `repo_root` to `src_url`.
    pub fn new(repo_root: &'a Path, src_url: &'a str) -> Self {
        Self {
            repo_root,
            src_url: src_url.trim_end_matches('/'),
        }
    }

    /// Link to the port's directory, labelled with its name.
    pub fn name_link(&self, port: &Port) -> String {
        format!("[{} {}]", self.source_url(&port.root), port.name)
    }

    /// Row for the upstream table, or `None` for a local-only port.
    ///
    /// # Errors
    ///
    /// Returns [`PortError::Io`] if the patch file exists but cannot be
    /// inspected.
    pub fn upstream_row(&self, port: &Port) -> Result<Option<String>, PortError> {
        let (Some(url), Some(archive)) = (port.url.as_deref(), port.archive_filename()) else {
            return Ok(None);
        };

        let name = self.name_link(port);
        let version = &port.version;
        let archive = format!("[{url} {archive}]");
        let patch = self.patch_cell(port)?;
        let libc = libc_cell(port);
        let arch = arch_cell(port);
        let host = host_cell(port);

        Ok(Some(format!(
            "|| {name:<70} || {version:<10} || {archive:<50} || {patch} || {libc} || {arch} || {host} ||"
        )))
    }

    /// Single-cell row for the local-only table.
    pub fn local_row(&self, port: &Port) -> String {
        format!("|| {:<70} ||", self.name_link(port))
    }

    fn patch_cell(&self, port: &Port) -> Result<String, PortError> {
        let patch = port.patch_path();
        match fs::metadata(&patch) {
            Ok(meta) => Ok(format!(
                "[{} {}]",
                self.source_url(&patch),
                format_patch_size(meta.len())
            )),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(String::new()),
            Err(e) => Err(PortError::io(patch, e)),
        }
    }

    fn source_url(&self, path: &Path) -> String {
        format!("{}/{}", self.src_url, relative_path(path, self.repo_root))
    }
}

/// Human-readable patch size: bytes below 1 KiB, whole KiB (truncated) above.
///
/// ```
/// use portlist_core::row::format_patch_size;
///
/// assert_eq!(format_patch_size(1023), "1023 B");
/// assert_eq!(format_patch_size(2047), "1 KiB");
/// ```
pub fn format_patch_size(size: u64) -> String {
    if size < 1024 {
        format!("{size} B")
    } else {
        format!("{} KiB", size / 1024)
    }
}

/// Libc cell: `<libc>-only`, `not a or b`, or empty.
pub fn libc_cell(port: &Port) -> String {
    match &port.libc {
        Some(libc) => format!("{libc}-only"),
        None => exclusion(&port.disabled_libc),
    }
}

/// Architecture cell: `not a or b`, or empty.
pub fn arch_cell(port: &Port) -> String {
    exclusion(&port.disabled_arch)
}

/// Build host cell: `<os>-only`, or empty.
pub fn host_cell(port: &Port) -> String {
    port.build_os
        .as_ref()
        .map(|os| format!("{os}-only"))
        .unwrap_or_default()
}

fn exclusion(values: &[String]) -> String {
    if values.is_empty() {
        String::new()
    } else {
        format!("not {}", values.join(" or "))
    }
}

/// `path` relative to `base`, always `/`-separated.
fn relative_path(path: &Path, base: &Path) -> String {
    let rel = path.strip_prefix(base).unwrap_or(path);
    rel.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

//! Port descriptor and `port.toml` parsing

use std::cmp::Ordering;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::PortError;
use crate::{MANIFEST_FILE, PATCH_FILE};

/// Top-level structure for `port.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct PortManifest {
    /// The `[package]` table.
    pub package: PortInfo,
}

/// Fields of the `[package]` table.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PortInfo {
    /// Unique port name (e.g. "zlib").
    pub name: String,
    /// Upstream or local version string.
    pub version: String,
    /// Upstream source archive. Absent for local-only ports.
    pub url: Option<String>,
    /// The single libc this port builds against.
    pub libc: Option<String>,
    /// Libc variants this port cannot build against.
    #[serde(default)]
    pub disabled_libc: Vec<String>,
    /// Architectures this port cannot build for.
    #[serde(default)]
    pub disabled_arch: Vec<String>,
    /// Host OS the port must be built on.
    pub build_os: Option<String>,
}

impl PortManifest {
    /// Parse a manifest from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns the TOML error if the content is malformed or lacks the
    /// required `name` and `version` keys.
    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}

/// One port, as found on disk.
///
/// Ports order by name, so sorting a list of them yields the listing order.
#[derive(Debug, Clone, Default)]
pub struct Port {
    /// Unique port name.
    pub name: String,
    /// Version string.
    pub version: String,
    /// Upstream archive URL; `None` marks a local-only port.
    pub url: Option<String>,
    /// Libc the port is restricted to. Takes precedence over `disabled_libc`.
    pub libc: Option<String>,
    /// Libc variants the port excludes.
    pub disabled_libc: Vec<String>,
    /// Architectures the port excludes.
    pub disabled_arch: Vec<String>,
    /// Required build host OS.
    pub build_os: Option<String>,
    /// Directory holding the manifest.
    pub root: PathBuf,
}

impl Port {
    /// Load and validate the port whose manifest lives in `dir`.
    ///
    /// # Errors
    ///
    /// Returns [`PortError::Io`] if the manifest cannot be read,
    /// [`PortError::Parse`] if it is not a valid manifest, or
    /// [`PortError::Invalid`] if it fails [`Port::validate`].
    pub fn load(dir: &Path) -> Result<Self, PortError> {
        let path = dir.join(MANIFEST_FILE);
        let content = fs::read_to_string(&path).map_err(|e| PortError::io(&path, e))?;
        let manifest =
            PortManifest::parse(&content).map_err(|source| PortError::Parse { path, source })?;
        let port = Self::from_manifest(manifest, dir);
        port.validate()?;
        Ok(port)
    }

    /// Build a port from an already parsed manifest.
    ///
    /// Empty strings in optional fields are treated as absent.
    pub fn from_manifest(manifest: PortManifest, root: impl Into<PathBuf>) -> Self {
        let info = manifest.package;
        Self {
            name: info.name,
            version: info.version,
            url: non_empty(info.url),
            libc: non_empty(info.libc),
            disabled_libc: info.disabled_libc,
            disabled_arch: info.disabled_arch,
            build_os: non_empty(info.build_os),
            root: root.into(),
        }
    }

    /// Check that the port can be listed at all.
    ///
    /// # Errors
    ///
    /// Returns [`PortError::Invalid`] when the name or version is empty.
    pub fn validate(&self) -> Result<(), PortError> {
        let invalid = |reason: &str| PortError::Invalid {
            path: self.manifest_path(),
            reason: reason.to_string(),
        };

        if self.name.is_empty() {
            return Err(invalid("name is empty"));
        }
        if self.version.is_empty() {
            return Err(invalid("version is empty"));
        }
        Ok(())
    }

    /// True when the port has no upstream archive.
    pub fn is_local(&self) -> bool {
        self.url.is_none()
    }

    /// Filename portion of the upstream URL, without query or fragment.
    ///
    /// A URL with no filename (ending in `/`) yields the whole URL.
    ///
    /// ```
    /// use portlist_core::Port;
    ///
    /// let port = Port {
    ///     url: Some("https://zlib.net/zlib-1.2.11.tar.gz?raw=1".to_string()),
    ///     ..Port::default()
    /// };
    /// assert_eq!(port.archive_filename(), Some("zlib-1.2.11.tar.gz"));
    /// ```
    pub fn archive_filename(&self) -> Option<&str> {
        let url = self.url.as_deref()?;
        let path = url.split(['?', '#']).next().unwrap_or(url);
        match path.rsplit('/').next() {
            Some(name) if !name.is_empty() => Some(name),
            _ => Some(url),
        }
    }

    /// Path of the manifest this port was loaded from.
    pub fn manifest_path(&self) -> PathBuf {
        self.root.join(MANIFEST_FILE)
    }

    /// Path where this port's patch lives, whether or not it exists.
    pub fn patch_path(&self) -> PathBuf {
        self.root.join(PATCH_FILE)
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

impl PartialEq for Port {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Port {}

impl PartialOrd for Port {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Port {
    fn cmp(&self, other: &Self) -> Ordering {
        self.name
            .cmp(&other.name)
            .then_with(|| self.version.cmp(&other.version))
    }
}

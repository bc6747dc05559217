//! portlist - port tree reporting
//!
//! Reads a tree of port directories, each described by a `port.toml`
//! manifest, and renders a wiki-markup table listing every port with its
//! version, upstream archive, patch size, and platform restrictions.
//!
//! # Layout
//!
//! ```text
//! <root>/
//! └── ports/
//!     ├── zlib/
//!     │   ├── port.toml
//!     │   └── nacl.patch   # optional
//!     └── devenv/
//!         └── port.toml    # no `url`: local-only port
//! ```

pub mod error;
pub mod port;
pub mod report;
pub mod row;
pub mod scan;

pub use error::{PortError, ReportError};
pub use port::{Port, PortManifest};
pub use report::{ReportConfig, ReportSummary};
pub use row::RowFormatter;
pub use scan::scan_ports;

/// Name of the per-port manifest file.
pub const MANIFEST_FILE: &str = "port.toml";

/// Name of the optional patch file stored next to the manifest.
pub const PATCH_FILE: &str = "nacl.patch";

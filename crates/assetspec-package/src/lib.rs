//! # assetspec-package
//!
//! **Tier 2 (Package Resolver)**
//!
//! Attributes referenced assets to the packages that supply them. Assets
//! under a managed root belong to the package directory directly below that
//! root; assets under a searched root belong to the nearest manifest found
//! walking upward, stopping at the root. Anything else under a searched root
//! is reported as an unattributed directory unless it sits inside the
//! product boundary.
//!
//! ## What belongs here
//! * Manifest access (`ManifestSource`) and parsing
//! * Upward search with per-directory memoisation
//! * Package / unattributed aggregation
//!
//! ## What does NOT belong here
//! * Graph traversal (use assetspec-graph)
//! * Counting (use assetspec-content)

mod manifest;
mod resolver;

pub use manifest::{FsManifestSource, ManifestInfo, ManifestSource, MemoryManifestSource};
pub use resolver::{
    Attribution, ManifestLookup, PackageResolution, PackageResolver, resolve_packages,
};

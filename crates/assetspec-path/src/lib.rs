//! # assetspec-path
//!
//! **Tier 0 (Utilities)**
//!
//! Storage path helpers shared by package attribution and the scan façade.
//! Storage paths are project-relative strings such as `Assets/Foo/bar.mat`;
//! every helper here works on `/`-separated text and never touches the disk.
//!
//! ## What belongs here
//! * Separator normalization
//! * Containing directory / parent directory arithmetic
//! * Segment-aware "is under" checks
//!
//! ## What does NOT belong here
//! * Filesystem probes (use assetspec-package or assetspec-product)
//! * Manifest parsing

/// Normalize path separators to `/`.
///
/// # Examples
///
/// ```
/// use assetspec_path::normalize_slashes;
///
/// assert_eq!(normalize_slashes(r"Assets\Models\body.fbx"), "Assets/Models/body.fbx");
/// assert_eq!(normalize_slashes("already/fine"), "already/fine");
/// ```
#[must_use]
pub fn normalize_slashes(path: &str) -> String {
    if path.contains('\\') {
        path.replace('\\', "/")
    } else {
        path.to_string()
    }
}

/// Normalize a relative file path for matching:
/// - converts `\` to `/`
/// - strips leading `./` segments
///
/// # Examples
///
/// ```
/// use assetspec_path::normalize_rel_path;
///
/// assert_eq!(normalize_rel_path("./Assets/x.fbx"), "Assets/x.fbx");
/// assert_eq!(normalize_rel_path(r"Assets\M\x.fbx"), "Assets/M/x.fbx");
/// ```
#[must_use]
pub fn normalize_rel_path(path: &str) -> String {
    let normalized = normalize_slashes(path);
    let mut stripped = normalized.as_str();
    while let Some(rest) = stripped.strip_prefix("./") {
        stripped = rest;
    }
    stripped.to_string()
}

/// Normalize a directory for comparisons:
/// - everything [`normalize_rel_path`] does
/// - strips trailing `/`
///
/// # Examples
///
/// ```
/// use assetspec_path::normalize_dir;
///
/// assert_eq!(normalize_dir("./Assets/Product/"), "Assets/Product");
/// assert_eq!(normalize_dir(r"Assets\Product"), "Assets/Product");
/// ```
#[must_use]
pub fn normalize_dir(path: &str) -> String {
    normalize_rel_path(path).trim_end_matches('/').to_string()
}

/// The directory portion of `path` (everything before the last `/`).
///
/// Returns `None` when the path has no directory component.
///
/// ```
/// use assetspec_path::parent;
///
/// assert_eq!(parent("Assets/Imported/T.png"), Some("Assets/Imported"));
/// assert_eq!(parent("Assets"), None);
/// ```
#[must_use]
pub fn parent(path: &str) -> Option<&str> {
    path.rfind('/').map(|idx| &path[..idx])
}

/// Append a single trailing `/` to a directory.
#[must_use]
pub fn with_trailing_slash(dir: &str) -> String {
    if dir.ends_with('/') {
        dir.to_string()
    } else {
        format!("{dir}/")
    }
}

/// Whether `path` equals `dir` or lies somewhere below it.
///
/// The check is segment-aware: `Assets/ProductX/a` is not under `Assets/Product`.
/// An empty `dir` contains nothing.
///
/// ```
/// use assetspec_path::is_under;
///
/// assert!(is_under("Assets/Product/Tex/a.png", "Assets/Product"));
/// assert!(is_under("Assets/Product/Tex/a.png", "Assets/Product/"));
/// assert!(!is_under("Assets/ProductX/a.png", "Assets/Product"));
/// ```
#[must_use]
pub fn is_under(path: &str, dir: &str) -> bool {
    let dir = dir.trim_end_matches('/');
    if dir.is_empty() {
        return false;
    }
    match path.strip_prefix(dir) {
        Some("") => true,
        Some(rest) => rest.starts_with('/'),
        None => false,
    }
}

/// The first path segment below `root`, provided something follows it.
///
/// `Packages/com.example.foo/Runtime/T.png` under `Packages` yields
/// `com.example.foo`. A path that ends at the segment (`Packages/foo`) has no
/// directory to attribute and yields `None`.
///
/// ```
/// use assetspec_path::first_segment_under;
///
/// assert_eq!(
///     first_segment_under("Packages/com.example.foo/Runtime/T.png", "Packages"),
///     Some("com.example.foo")
/// );
/// assert_eq!(first_segment_under("Packages/foo", "Packages"), None);
/// ```
#[must_use]
pub fn first_segment_under<'a>(path: &'a str, root: &str) -> Option<&'a str> {
    let root = root.trim_end_matches('/');
    let rest = path.strip_prefix(root)?.strip_prefix('/')?;
    let (segment, _) = rest.split_once('/')?;
    if segment.is_empty() {
        None
    } else {
        Some(segment)
    }
}

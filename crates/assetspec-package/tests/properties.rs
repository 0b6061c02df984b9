//! Property-based tests for resolver memoisation and attribution.

use std::cell::Cell;
use std::collections::BTreeSet;

use assetspec_package::{
    Attribution, ManifestSource, MemoryManifestSource, PackageResolver,
};
use assetspec_settings::LayoutSettings;
use proptest::prelude::*;

/// Counts every read that reaches the underlying source.
struct Counting<S> {
    inner: S,
    reads: Cell<usize>,
}

impl<S> Counting<S> {
    fn new(inner: S) -> Self {
        Self {
            inner,
            reads: Cell::new(0),
        }
    }
}

impl<S: ManifestSource> ManifestSource for Counting<S> {
    fn read_manifest(&self, rel_path: &str) -> std::io::Result<String> {
        self.reads.set(self.reads.get() + 1);
        self.inner.read_manifest(rel_path)
    }
}

fn arb_asset_path() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(vec!["a", "b", "c", "d"]), 1..5)
        .prop_map(|segs| format!("Assets/{}/file.png", segs.join("/")))
}

#[test]
fn deep_path_without_manifest_reads_once_per_level() {
    let src = Counting::new(MemoryManifestSource::new());
    let layout = LayoutSettings::default();
    let mut r = PackageResolver::new(&src, &layout, None);

    let got = r.resolve_path("Assets/a/b/c/T.png");

    assert_eq!(got, Attribution::Unattributed("Assets/a/b/c/".to_string()));
    assert_eq!(src.reads.get(), 4);
}

proptest! {
    #[test]
    fn each_manifest_location_is_read_at_most_once(paths in prop::collection::vec(arb_asset_path(), 1..30)) {
        let src = Counting::new(MemoryManifestSource::new().with("Assets/a/package.json", r#"{"name":"A","version":"1"}"#));
        let layout = LayoutSettings::default();
        let mut r = PackageResolver::new(&src, &layout, None);

        for p in &paths {
            r.resolve_path(p);
        }

        let dirs: BTreeSet<String> = paths
            .iter()
            .flat_map(|p| {
                let segs: Vec<&str> = p.split('/').collect();
                (1..segs.len()).map(move |n| segs[..n].join("/"))
            })
            .collect();
        prop_assert!(src.reads.get() <= dirs.len());
        prop_assert_eq!(src.reads.get(), r.probes());
    }

    #[test]
    fn attribution_is_independent_of_resolution_order(paths in prop::collection::vec(arb_asset_path(), 1..20)) {
        let make = || MemoryManifestSource::new()
            .with("Assets/b/package.json", r#"{"name":"B","version":"1"}"#)
            .with("Assets/c/d/package.json", r#"{"displayName":"CD","version":"2"}"#);
        let layout = LayoutSettings::default();

        let forward_src = make();
        let mut forward = PackageResolver::new(&forward_src, &layout, None);
        let a = forward.resolve_all(paths.iter().map(String::as_str));

        let backward_src = make();
        let mut backward = PackageResolver::new(&backward_src, &layout, None);
        let b = backward.resolve_all(paths.iter().rev().map(String::as_str));

        prop_assert_eq!(a, b);
    }

    #[test]
    fn paths_under_a_manifest_directory_never_unattributed(tail in prop::collection::vec("[a-z]{1,4}", 0..4)) {
        let src = MemoryManifestSource::new().with("Assets/Kit/package.json", r#"{"name":"Kit","version":"1"}"#);
        let layout = LayoutSettings::default();
        let mut r = PackageResolver::new(&src, &layout, None);
        let mut path = String::from("Assets/Kit");
        for seg in &tail {
            path.push('/');
            path.push_str(seg);
        }
        path.push_str("/x.png");

        let got = r.resolve_path(&path);
        prop_assert!(matches!(got, Attribution::Package(_)));
    }
}

//! BDD-style scenario tests for package attribution against a real project tree.

use std::fs;
use std::path::Path;

use assetspec_graph::{EditorOnly, Graph, GraphBuilder, Node, NodeKind, walk_excluding};
use assetspec_package::{FsManifestSource, PackageResolution, resolve_packages};
use assetspec_settings::LayoutSettings;
use assetspec_types::{PackageRecord, ScanTarget};
use tempfile::TempDir;

// ============================================================================
// Helpers
// ============================================================================

fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

/// Prefab root -> renderer -> material -> one texture per path.
fn prefab_using(textures: &[&str]) -> (Graph, ScanTarget) {
    let mut b = GraphBuilder::new();
    let root = b.add(Node::new("Avatar", NodeKind::Container).with_path("Assets/Avatar.prefab"));
    let mut mat = Node::new("Body", NodeKind::Material).with_path("Assets/Avatar/Body.mat");
    for (i, path) in textures.iter().enumerate() {
        let tex = b.add(Node::new(format!("T{i}"), NodeKind::Texture).with_path(*path));
        mat = mat.with_ref(format!("_Tex{i}"), tex);
    }
    let mat = b.add(mat);
    b.add(
        Node::new("Renderer", NodeKind::Renderer)
            .with_parent(root)
            .with_ref("m_Materials", mat),
    );
    (b.build().unwrap(), ScanTarget::Prefab { root })
}

fn resolve(project: &Path, graph: &Graph, target: &ScanTarget, boundary: Option<&str>) -> PackageResolution {
    let visited = walk_excluding(graph, &graph.seeds(target), &EditorOnly::default());
    resolve_packages(
        graph,
        &visited,
        &LayoutSettings::default(),
        boundary,
        &FsManifestSource::new(project),
    )
}

// ============================================================================
// Scenario: managed package
// ============================================================================

#[test]
fn given_texture_in_managed_package_when_resolved_then_package_reported_by_display_name() {
    let dir = TempDir::new().unwrap();
    write(
        dir.path(),
        "Packages/com.example.foo/package.json",
        r#"{"name":"com.example.foo","displayName":"Foo Package","version":"2.1.0"}"#,
    );
    let (graph, target) = prefab_using(&["Packages/com.example.foo/Runtime/T.png"]);

    let res = resolve(dir.path(), &graph, &target, Some("Assets/Avatar"));

    assert_eq!(
        res.packages.into_iter().collect::<Vec<_>>(),
        vec![PackageRecord::new("Foo Package", "2.1.0")]
    );
    assert!(res.unattributed.is_empty());
}

#[test]
fn given_manifest_without_display_name_when_resolved_then_name_is_used() {
    let dir = TempDir::new().unwrap();
    write(
        dir.path(),
        "Packages/com.example.bar/package.json",
        r#"{"name":"com.example.bar","version":"0.3.0"}"#,
    );
    let (graph, target) = prefab_using(&["Packages/com.example.bar/T.png"]);

    let res = resolve(dir.path(), &graph, &target, Some("Assets/Avatar"));

    assert!(res.packages.contains(&PackageRecord::new("com.example.bar", "0.3.0")));
}

// ============================================================================
// Scenario: searched root
// ============================================================================

#[test]
fn given_texture_without_any_manifest_when_resolved_then_directory_is_unattributed() {
    let dir = TempDir::new().unwrap();
    let (graph, target) = prefab_using(&["Assets/Imported/T.png"]);

    let res = resolve(dir.path(), &graph, &target, Some("Assets/Avatar"));

    assert!(res.packages.is_empty());
    assert_eq!(
        res.unattributed.into_iter().collect::<Vec<_>>(),
        vec!["Assets/Imported/".to_string()]
    );
}

#[test]
fn given_vendor_manifest_above_asset_when_resolved_then_vendor_package_reported() {
    let dir = TempDir::new().unwrap();
    write(
        dir.path(),
        "Assets/Vendor/Hair/package.json",
        r#"{"name":"vendor.hair","displayName":"Hair Kit","version":"1.0.0"}"#,
    );
    let (graph, target) = prefab_using(&[
        "Assets/Vendor/Hair/Textures/Strand.png",
        "Assets/Vendor/Hair/Textures/Mask/Alpha.png",
    ]);

    let res = resolve(dir.path(), &graph, &target, Some("Assets/Avatar"));

    assert_eq!(res.packages.len(), 1);
    assert!(res.packages.contains(&PackageRecord::new("Hair Kit", "1.0.0")));
    assert!(res.unattributed.is_empty());
}

#[test]
fn given_asset_inside_product_boundary_when_resolved_then_not_unattributed() {
    let dir = TempDir::new().unwrap();
    let (graph, target) = prefab_using(&["Assets/Avatar/Textures/Skin.png"]);

    let res = resolve(dir.path(), &graph, &target, Some("Assets/Avatar"));

    assert!(res.unattributed.is_empty());
}

#[test]
fn given_broken_manifest_when_resolved_then_search_continues_upward() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "Assets/Kit/Sub/package.json", "{ not json");
    write(
        dir.path(),
        "Assets/Kit/package.json",
        r#"{"name":"kit","version":"4.0.0"}"#,
    );
    let (graph, target) = prefab_using(&["Assets/Kit/Sub/T.png"]);

    let res = resolve(dir.path(), &graph, &target, Some("Assets/Avatar"));

    assert!(res.packages.contains(&PackageRecord::new("kit", "4.0.0")));
}

#[test]
fn given_nameless_manifest_when_resolved_then_neither_package_nor_unattributed() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "Assets/Tools/package.json", r#"{"version":"1.0.0"}"#);
    let (graph, target) = prefab_using(&["Assets/Tools/T.png"]);

    let res = resolve(dir.path(), &graph, &target, Some("Assets/Avatar"));

    assert!(res.packages.is_empty());
    assert!(res.unattributed.is_empty());
}

#[test]
fn given_backslash_paths_when_resolved_then_treated_like_forward_slashes() {
    let dir = TempDir::new().unwrap();
    write(
        dir.path(),
        "Packages/com.example.foo/package.json",
        r#"{"name":"com.example.foo","version":"1.0.0"}"#,
    );
    let (graph, target) = prefab_using(&["Packages\\com.example.foo\\T.png", "Assets\\Loose\\T.png"]);

    let res = resolve(dir.path(), &graph, &target, Some("Assets/Avatar"));

    assert!(res.packages.contains(&PackageRecord::new("com.example.foo", "1.0.0")));
    assert!(res.unattributed.contains("Assets/Loose/"));
}

//! BDD-style scenario tests for storage path helpers.

use assetspec_path::{first_segment_under, is_under, normalize_dir, parent, with_trailing_slash};

// ── parent ───────────────────────────────────────────────────────

mod parent_scenarios {
    use super::*;

    #[test]
    fn given_nested_asset_then_containing_directory() {
        assert_eq!(parent("Assets/Imported/T.png"), Some("Assets/Imported"));
    }

    #[test]
    fn given_directory_then_its_parent() {
        assert_eq!(parent("Assets/Imported"), Some("Assets"));
    }

    #[test]
    fn given_root_directory_then_none() {
        assert_eq!(parent("Assets"), None);
    }

    #[test]
    fn given_repeated_parent_calls_then_terminates_at_root() {
        let mut dir = "Assets/a/b/c/d";
        let mut steps = 0;
        while let Some(up) = parent(dir) {
            dir = up;
            steps += 1;
        }
        assert_eq!(dir, "Assets");
        assert_eq!(steps, 4);
    }
}

// ── is_under ─────────────────────────────────────────────────────

mod is_under_scenarios {
    use super::*;

    #[test]
    fn given_asset_inside_product_then_true() {
        assert!(is_under("Assets/Product/Materials/body.mat", "Assets/Product"));
    }

    #[test]
    fn given_sibling_with_common_prefix_then_false() {
        assert!(!is_under("Assets/Product2/body.mat", "Assets/Product"));
    }

    #[test]
    fn given_boundary_with_trailing_slash_then_same_answer() {
        assert_eq!(
            is_under("Assets/Product/a.mat", "Assets/Product/"),
            is_under("Assets/Product/a.mat", "Assets/Product")
        );
    }

    #[test]
    fn given_unrelated_root_then_false() {
        assert!(!is_under("Packages/com.foo/a.mat", "Assets"));
    }
}

// ── first_segment_under ──────────────────────────────────────────

mod first_segment_scenarios {
    use super::*;

    #[test]
    fn given_package_asset_then_package_directory() {
        assert_eq!(
            first_segment_under("Packages/com.example.foo/Runtime/T", "Packages/"),
            Some("com.example.foo")
        );
    }

    #[test]
    fn given_file_directly_in_package_then_package_directory() {
        assert_eq!(
            first_segment_under("Packages/com.example.foo/package.json", "Packages"),
            Some("com.example.foo")
        );
    }

    #[test]
    fn given_empty_segment_then_none() {
        assert_eq!(first_segment_under("Packages//x/y", "Packages"), None);
    }
}

// ── normalize_dir / with_trailing_slash ─────────────────────────

#[test]
fn given_windows_product_dir_then_normalized() {
    assert_eq!(normalize_dir(r"Assets\My Product\"), "Assets/My Product");
}

#[test]
fn given_unattributed_dir_then_reported_with_slash() {
    assert_eq!(
        with_trailing_slash(parent("Assets/Imported/T.png").unwrap()),
        "Assets/Imported/"
    );
}

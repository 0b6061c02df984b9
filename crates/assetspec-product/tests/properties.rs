//! Property-based tests for extension classification.

use std::path::PathBuf;

use assetspec_product::{asset_category, tally};
use proptest::prelude::*;

const KNOWN: &[&str] = &["mat", "png", "jpg", "tga", "psd", "exr", "anim", "fbx", "blend", "obj"];

proptest! {
    #[test]
    fn tally_total_matches_classified_files(
        exts in prop::collection::vec(prop::sample::select(vec!["mat", "png", "anim", "fbx", "txt", "meta", "cs"]), 0..40)
    ) {
        let files: Vec<PathBuf> = exts
            .iter()
            .enumerate()
            .map(|(i, e)| PathBuf::from(format!("f{i}.{e}")))
            .collect();
        let c = tally(&files);
        let expected = exts.iter().filter(|e| asset_category(e).is_some()).count();
        prop_assert_eq!(c.materials + c.textures + c.clips + c.meshes, expected);
    }

    #[test]
    fn classification_ignores_case(idx in 0..KNOWN.len(), upper in prop::collection::vec(any::<bool>(), 8)) {
        let ext = KNOWN[idx];
        let mixed: String = ext
            .chars()
            .zip(upper.iter().cycle())
            .map(|(c, u)| if *u { c.to_ascii_uppercase() } else { c })
            .collect();
        let files = vec![PathBuf::from(format!("x.{mixed}"))];
        let lower = vec![PathBuf::from(format!("x.{ext}"))];
        prop_assert_eq!(tally(&files), tally(&lower));
    }
}

//! Property-based tests for the lint engine.
//!
//! Random polygonal soups (including degenerate loops) drive the analyzer,
//! selection mapper, and diff, verifying the invariants that make the
//! incremental diff meaningful.

use mesh_lint::{
    analyze, apply_selection, diff_analyses, select_lint, Analysis, CheckOutcome, LintConfig,
};
use mesh_topology::{ElementType, PolyMesh};
use proptest::prelude::*;

/// Random face loops over a small vertex range; loop lengths 3..=6 cover
/// triangles, quads, and n-gons, and repeated indices exercise the
/// degenerate-loop handling.
fn arb_faces() -> impl Strategy<Value = Vec<Vec<u32>>> {
    prop::collection::vec(prop::collection::vec(0..24u32, 3..=6), 0..32)
}

proptest! {
    /// Analysis never panics, whatever the face soup looks like.
    #[test]
    fn analyzer_never_panics(faces in arb_faces()) {
        let mesh = PolyMesh::from_faces(24, faces);
        let _ = analyze(&mesh, &LintConfig::all_enabled());
    }

    /// Two runs over an unchanged mesh yield identical analyses.
    #[test]
    fn analyzer_is_deterministic(faces in arb_faces()) {
        let mesh = PolyMesh::from_faces(24, faces);
        let config = LintConfig::all_enabled();
        prop_assert_eq!(analyze(&mesh, &config), analyze(&mesh, &config));
    }

    /// Every evaluated check's count equals the sum of its per-type sets.
    #[test]
    fn found_counts_match_set_sizes(faces in arb_faces()) {
        let mesh = PolyMesh::from_faces(24, faces);
        let analysis = analyze(&mesh, &LintConfig::all_enabled());
        for result in analysis.results() {
            prop_assert_eq!(result.outcome, CheckOutcome::Found(result.elements.total()));
        }
    }

    /// Selecting twice leaves exactly the same selection as selecting once.
    #[test]
    fn selection_is_idempotent(faces in arb_faces()) {
        let mut mesh = PolyMesh::from_faces(24, faces);
        let analysis = select_lint(&mut mesh, &LintConfig::all_enabled()).unwrap();

        let once: Vec<Vec<u32>> = ElementType::ALL
            .iter()
            .map(|&element| mesh.selected(element))
            .collect();

        apply_selection(&mut mesh, &analysis);
        let twice: Vec<Vec<u32>> = ElementType::ALL
            .iter()
            .map(|&element| mesh.selected(element))
            .collect();

        prop_assert_eq!(once, twice);
    }

    /// An analysis diffed against itself reports nothing.
    #[test]
    fn self_diff_is_silent(faces in arb_faces()) {
        let mesh = PolyMesh::from_faces(24, faces);
        let analysis = analyze(&mesh, &LintConfig::all_enabled());
        prop_assert_eq!(diff_analyses(&analysis, &analysis), None);
    }

    /// Shrinking defect sets (diffing back to empty) reports nothing.
    #[test]
    fn decreases_are_silent(faces in arb_faces()) {
        let mesh = PolyMesh::from_faces(24, faces);
        let analysis = analyze(&mesh, &LintConfig::all_enabled());
        prop_assert_eq!(diff_analyses(&analysis, &Analysis::empty()), None);
    }

    /// Any defect at all yields a message against the empty baseline, and
    /// the message always starts with "Found ".
    #[test]
    fn regressions_from_zero_are_reported(faces in arb_faces()) {
        let mesh = PolyMesh::from_faces(24, faces);
        let analysis = analyze(&mesh, &LintConfig::all_enabled());
        let diff = diff_analyses(&Analysis::empty(), &analysis);
        if analysis.defect_total() > 0 {
            let text = diff.expect("defects must produce a message");
            prop_assert!(text.starts_with("Found "));
        } else {
            prop_assert_eq!(diff, None);
        }
    }
}

//! Projecting analysis results onto mesh selection state.

use mesh_topology::{ElementType, SelectMode, TopologyAdapter};
use tracing::debug;

use crate::analyzer::{analyze, Analysis};
use crate::config::LintConfig;
use crate::error::{LintError, LintResult};

/// Mark every flagged element in the analysis as selected.
///
/// Selection is a monotone union: the order of application across checks is
/// irrelevant and selecting the same index twice is idempotent. The caller
/// is expected to have cleared prior selection and switched the adapter to
/// a mode accepting all three element kinds; hidden elements are not
/// filtered (documented limitation).
pub fn apply_selection(mesh: &mut impl TopologyAdapter, analysis: &Analysis) {
    for result in analysis.results() {
        for element in ElementType::ALL {
            for &index in result.elements.get(element) {
                mesh.set_selected(element, index, true);
            }
        }
    }
}

/// Analyze the mesh and select exactly the flagged elements.
///
/// The on-demand user action: checks preconditions, enters edit mode,
/// enables vertex+edge+face selection, clears the existing selection, runs
/// the enabled checks, and applies the result. Returns the analysis so the
/// caller can also render per-check counts.
///
/// # Errors
///
/// Returns [`LintError::Precondition`] when the adapter is not editable;
/// nothing is mutated in that case.
pub fn select_lint(
    mesh: &mut impl TopologyAdapter,
    config: &LintConfig,
) -> LintResult<Analysis> {
    if !mesh.is_editable() {
        return Err(LintError::precondition("no editable mesh is active"));
    }

    mesh.ensure_edit_mode();
    mesh.set_select_mode(SelectMode::ALL);
    mesh.clear_selection();

    let analysis = analyze(mesh, config);
    apply_selection(mesh, &analysis);
    debug!(selected = analysis.defect_total(), "lint selection applied");
    Ok(analysis)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mesh_topology::PolyMesh;

    fn triangulated_quad() -> PolyMesh {
        PolyMesh::from_faces(4, vec![vec![0, 1, 2], vec![0, 2, 3]])
    }

    #[test]
    fn select_lint_selects_flagged_elements() {
        let mut mesh = triangulated_quad();
        let analysis = select_lint(&mut mesh, &LintConfig::default()).unwrap();

        // Both triangles are flagged and selected.
        assert_eq!(mesh.selected(ElementType::Face), vec![0, 1]);
        // The four boundary edges are nonmanifold; the shared diagonal is not.
        assert_eq!(mesh.selected(ElementType::Edge).len(), 4);
        assert!(mesh.in_edit_mode());
        assert_eq!(mesh.select_mode(), SelectMode::ALL);
        assert_eq!(analysis.defect_total(), 6);
    }

    #[test]
    fn select_lint_clears_previous_selection() {
        let mut mesh = triangulated_quad();
        mesh.set_selected(ElementType::Vertex, 3, true);

        select_lint(&mut mesh, &LintConfig::default()).unwrap();
        assert!(
            !mesh.is_selected(ElementType::Vertex, 3),
            "stale selection must be cleared"
        );
    }

    #[test]
    fn apply_selection_is_idempotent() {
        let mut mesh = triangulated_quad();
        let analysis = analyze(&mesh, &LintConfig::default());

        apply_selection(&mut mesh, &analysis);
        let once = (
            mesh.selected(ElementType::Vertex),
            mesh.selected(ElementType::Edge),
            mesh.selected(ElementType::Face),
        );
        apply_selection(&mut mesh, &analysis);
        let twice = (
            mesh.selected(ElementType::Vertex),
            mesh.selected(ElementType::Edge),
            mesh.selected(ElementType::Face),
        );
        assert_eq!(once, twice);
    }

    #[test]
    fn precondition_failure_mutates_nothing() {
        let mut mesh = triangulated_quad().with_editable(false);
        mesh.set_selected(ElementType::Face, 0, true);

        let result = select_lint(&mut mesh, &LintConfig::default());
        assert!(matches!(result, Err(LintError::Precondition { .. })));
        assert!(mesh.is_selected(ElementType::Face, 0), "selection untouched");
        assert!(!mesh.in_edit_mode());
    }
}

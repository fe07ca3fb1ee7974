//! Running the enabled checks and aggregating their results.

use mesh_topology::TopologyAdapter;
use tracing::{debug, warn};

use crate::checks::{evaluate, CheckKind, ElementSets};
use crate::config::LintConfig;

/// How a check fared in one analyzer run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckOutcome {
    /// Not yet evaluated (initial presentation state).
    Pending,
    /// Disabled for this run.
    NotApplicable,
    /// The predicate failed an adapter query and was skipped for this run.
    Skipped,
    /// Evaluated; the count equals the total flagged elements.
    Found(usize),
}

impl std::fmt::Display for CheckOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pending => write!(f, "..."),
            Self::NotApplicable => write!(f, "(N/A)"),
            Self::Skipped => write!(f, "(skipped)"),
            Self::Found(count) => write!(f, "{count}"),
        }
    }
}

/// One check's results from one analyzer run.
///
/// Immutable once constructed; a new run produces a new result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    /// Which check this is.
    pub kind: CheckKind,
    /// The flagged element indices, exactly as the predicate produced them.
    pub elements: ElementSets,
    /// Evaluation outcome; `Found(n)` always has `n == elements.total()`.
    pub outcome: CheckOutcome,
}

impl CheckResult {
    /// The check's display label.
    #[must_use]
    pub fn label(&self) -> &'static str {
        self.kind.label()
    }

    /// Render the panel row text for this result.
    ///
    /// `"... Tris"` while pending, `"(N/A) Tris"` when disabled,
    /// `"No Tris!"` at zero, `"4x Tris"` otherwise, with the label
    /// singularized at exactly one (`"1x Ngon"`).
    #[must_use]
    pub fn row_label(&self) -> String {
        let label = self.label();
        match self.outcome {
            CheckOutcome::Pending | CheckOutcome::NotApplicable | CheckOutcome::Skipped => {
                format!("{} {label}", self.outcome)
            }
            CheckOutcome::Found(0) => format!("No {label}!"),
            CheckOutcome::Found(1) => {
                format!("1x {}", label.strip_suffix('s').unwrap_or(label))
            }
            CheckOutcome::Found(count) => format!("{count}x {label}"),
        }
    }

    fn empty(kind: CheckKind, outcome: CheckOutcome) -> Self {
        Self {
            kind,
            elements: ElementSets::default(),
            outcome,
        }
    }
}

/// The aggregated results of one analyzer run.
///
/// Holds one [`CheckResult`] per registered check, in registry order,
/// including disabled ones (with empty sets) so every label stays
/// addressable for diffing. Immutable; superseded, never edited, by the
/// next run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Analysis {
    results: Vec<CheckResult>,
}

impl Analysis {
    /// The canonical zero-defect analysis: every check present and
    /// evaluated, all index sets empty.
    ///
    /// Used as the diff baseline when no prior analysis exists or the mesh
    /// identity changed.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            results: CheckKind::ALL
                .iter()
                .map(|&kind| CheckResult::empty(kind, CheckOutcome::Found(0)))
                .collect(),
        }
    }

    /// An analysis in which nothing has been evaluated yet.
    ///
    /// The initial presentation state before the first run.
    #[must_use]
    pub fn pending() -> Self {
        Self {
            results: CheckKind::ALL
                .iter()
                .map(|&kind| CheckResult::empty(kind, CheckOutcome::Pending))
                .collect(),
        }
    }

    /// Assemble an analysis from prebuilt results.
    ///
    /// Exists for presentation layers and tests that construct fixtures by
    /// hand; `analyze` is the normal constructor.
    #[must_use]
    pub fn from_results(results: Vec<CheckResult>) -> Self {
        Self { results }
    }

    /// All results, in registry order.
    #[must_use]
    pub fn results(&self) -> &[CheckResult] {
        &self.results
    }

    /// Look a result up by its check's display label.
    #[must_use]
    pub fn by_label(&self, label: &str) -> Option<&CheckResult> {
        self.results.iter().find(|result| result.label() == label)
    }

    /// Look a result up by check kind.
    #[must_use]
    pub fn by_kind(&self, kind: CheckKind) -> Option<&CheckResult> {
        self.results.iter().find(|result| result.kind == kind)
    }

    /// Total flagged elements across all evaluated checks.
    #[must_use]
    pub fn defect_total(&self) -> usize {
        self.results
            .iter()
            .map(|result| result.elements.total())
            .sum()
    }

    /// Checks that were skipped this run because an adapter query failed.
    #[must_use]
    pub fn skipped(&self) -> Vec<CheckKind> {
        self.results
            .iter()
            .filter(|result| result.outcome == CheckOutcome::Skipped)
            .map(|result| result.kind)
            .collect()
    }
}

/// Run every registered check against the mesh.
///
/// Disabled checks yield [`CheckOutcome::NotApplicable`] with no indices.
/// A check whose predicate fails an adapter query is degraded to
/// [`CheckOutcome::Skipped`] (logged, surfaced via [`Analysis::skipped`])
/// without aborting the rest of the pass. Reads the mesh; mutates nothing.
pub fn analyze(mesh: &impl TopologyAdapter, config: &LintConfig) -> Analysis {
    debug!(
        vertices = mesh.vertex_count(),
        edges = mesh.edge_count(),
        faces = mesh.face_count(),
        "starting lint analysis"
    );

    let mut results = Vec::with_capacity(CheckKind::COUNT);
    for kind in CheckKind::ALL {
        if !config.is_enabled(kind) {
            results.push(CheckResult::empty(kind, CheckOutcome::NotApplicable));
            continue;
        }
        match evaluate(kind, mesh) {
            Ok(elements) => {
                let outcome = CheckOutcome::Found(elements.total());
                results.push(CheckResult {
                    kind,
                    elements,
                    outcome,
                });
            }
            Err(error) => {
                warn!(check = kind.label(), %error, "check skipped");
                results.push(CheckResult::empty(kind, CheckOutcome::Skipped));
            }
        }
    }

    let analysis = Analysis { results };
    debug!(defects = analysis.defect_total(), "lint analysis finished");
    analysis
}

#[cfg(test)]
mod tests {
    use super::*;
    use mesh_topology::{unit_cube, ElementType, PolyMesh, SelectMode};

    fn triangulated_quad() -> PolyMesh {
        PolyMesh::from_faces(4, vec![vec![0, 1, 2], vec![0, 2, 3]])
    }

    #[test]
    fn analysis_covers_every_check_in_order() {
        let analysis = analyze(&unit_cube(), &LintConfig::default());
        let kinds: Vec<CheckKind> = analysis.results().iter().map(|r| r.kind).collect();
        assert_eq!(kinds, CheckKind::ALL);
    }

    #[test]
    fn found_count_matches_set_sizes() {
        let analysis = analyze(&triangulated_quad(), &LintConfig::all_enabled());
        for result in analysis.results() {
            assert_eq!(result.outcome, CheckOutcome::Found(result.elements.total()));
        }
    }

    #[test]
    fn disabled_checks_are_not_applicable() {
        let config = LintConfig::default().with_enabled(CheckKind::Triangles, false);
        let analysis = analyze(&triangulated_quad(), &config);
        let tris = analysis.by_kind(CheckKind::Triangles).unwrap();
        assert_eq!(tris.outcome, CheckOutcome::NotApplicable);
        assert!(tris.elements.is_empty());
    }

    #[test]
    fn analyzer_is_deterministic() {
        let mesh = triangulated_quad();
        let config = LintConfig::all_enabled();
        assert_eq!(analyze(&mesh, &config), analyze(&mesh, &config));
    }

    #[test]
    fn empty_analysis_has_no_defects() {
        let empty = Analysis::empty();
        assert_eq!(empty.defect_total(), 0);
        for result in empty.results() {
            assert_eq!(result.outcome, CheckOutcome::Found(0));
        }
    }

    #[test]
    fn lookup_by_label_and_kind() {
        let analysis = Analysis::empty();
        assert!(analysis.by_label("Tris").is_some());
        assert!(analysis.by_label("Nonmanifold Elements").is_some());
        assert!(analysis.by_label("No Such Check").is_none());
        assert!(analysis.by_kind(CheckKind::Ngons).is_some());
    }

    #[test]
    fn row_labels() {
        let pending = CheckResult::empty(CheckKind::Triangles, CheckOutcome::Pending);
        assert_eq!(pending.row_label(), "... Tris");

        let na = CheckResult::empty(CheckKind::Triangles, CheckOutcome::NotApplicable);
        assert_eq!(na.row_label(), "(N/A) Tris");

        let clean = CheckResult::empty(CheckKind::Ngons, CheckOutcome::Found(0));
        assert_eq!(clean.row_label(), "No Ngons!");

        let one = CheckResult::empty(CheckKind::Ngons, CheckOutcome::Found(1));
        assert_eq!(one.row_label(), "1x Ngon");

        let one_pole = CheckResult::empty(CheckKind::SixPlusPoles, CheckOutcome::Found(1));
        assert_eq!(one_pole.row_label(), "1x 6+-edge Pole");

        let many = CheckResult::empty(CheckKind::Triangles, CheckOutcome::Found(4));
        assert_eq!(many.row_label(), "4x Tris");
    }

    #[test]
    fn pending_analysis_rows() {
        let pending = Analysis::pending();
        assert!(pending
            .results()
            .iter()
            .all(|r| r.outcome == CheckOutcome::Pending));
    }

    #[test]
    fn no_checks_skipped_on_a_healthy_mesh() {
        let analysis = analyze(&unit_cube(), &LintConfig::all_enabled());
        assert!(analysis.skipped().is_empty());
    }

    /// Wraps a mesh and over-reports its face count, so every face scan
    /// eventually hits an index the adapter cannot answer for.
    struct PhantomFaceAdapter {
        inner: PolyMesh,
    }

    impl TopologyAdapter for PhantomFaceAdapter {
        fn mesh_id(&self) -> u64 {
            self.inner.mesh_id()
        }

        fn vertex_count(&self) -> usize {
            self.inner.vertex_count()
        }

        fn edge_count(&self) -> usize {
            self.inner.edge_count()
        }

        fn face_count(&self) -> usize {
            self.inner.face_count() + 1
        }

        fn vertex_is_manifold(&self, vertex: u32) -> Option<bool> {
            self.inner.vertex_is_manifold(vertex)
        }

        fn edge_is_manifold(&self, edge: u32) -> Option<bool> {
            self.inner.edge_is_manifold(edge)
        }

        fn vertex_edge_count(&self, vertex: u32) -> Option<usize> {
            self.inner.vertex_edge_count(vertex)
        }

        fn edge_face_count(&self, edge: u32) -> Option<usize> {
            self.inner.edge_face_count(edge)
        }

        fn face_vertex_count(&self, face: u32) -> Option<usize> {
            self.inner.face_vertex_count(face)
        }

        fn face_edges(&self, face: u32) -> Option<&[u32]> {
            self.inner.face_edges(face)
        }

        fn is_editable(&self) -> bool {
            self.inner.is_editable()
        }

        fn ensure_edit_mode(&mut self) {
            self.inner.ensure_edit_mode();
        }

        fn set_select_mode(&mut self, mode: SelectMode) {
            self.inner.set_select_mode(mode);
        }

        fn set_selected(&mut self, element: ElementType, index: u32, selected: bool) {
            self.inner.set_selected(element, index, selected);
        }

        fn clear_selection(&mut self) {
            self.inner.clear_selection();
        }
    }

    #[test]
    fn failed_face_queries_skip_only_the_affected_checks() {
        let mesh = PhantomFaceAdapter {
            inner: triangulated_quad(),
        };
        let analysis = analyze(&mesh, &LintConfig::all_enabled());

        // The phantom face index breaks every face-scanning predicate; the
        // pass keeps going instead of aborting.
        assert_eq!(
            analysis.skipped(),
            vec![
                CheckKind::Triangles,
                CheckKind::Ngons,
                CheckKind::InteriorFaces
            ]
        );
        for kind in analysis.skipped() {
            let result = analysis.by_kind(kind).unwrap();
            assert_eq!(result.outcome, CheckOutcome::Skipped);
            assert!(result.elements.is_empty());
            assert_eq!(result.row_label(), format!("(skipped) {}", kind.label()));
        }

        // Vertex- and edge-driven checks never touch faces and still report.
        let nonmanifold = analysis.by_kind(CheckKind::NonmanifoldElements).unwrap();
        assert_eq!(
            nonmanifold.outcome,
            CheckOutcome::Found(nonmanifold.elements.total())
        );
        assert!(!nonmanifold.elements.is_empty(), "open quad has boundary edges");
        let poles = analysis.by_kind(CheckKind::SixPlusPoles).unwrap();
        assert_eq!(poles.outcome, CheckOutcome::Found(0));
    }
}

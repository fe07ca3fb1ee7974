//! Continuous change detection between analyzer runs.
//!
//! A [`LintWatcher`] is ticked by the host while live checking is on. Each
//! tick re-fingerprints the mesh, re-analyzes only when the fingerprint
//! changed, and diffs the fresh analysis against the previous one into a
//! transient, human-readable regression message.

use std::time::{Duration, Instant};

use mesh_topology::{ElementType, TopologyAdapter};
use tracing::{debug, info};

use crate::analyzer::{analyze, Analysis};
use crate::config::LintConfig;
use crate::error::{LintError, LintResult};
use crate::snapshot::TopologySnapshot;

/// How long a change message stays visible after creation.
pub const MESSAGE_DISPLAY_DURATION: Duration = Duration::from_secs(3);

/// A transient message describing defect-count regressions.
///
/// Expiry is a data check against [`MESSAGE_DISPLAY_DURATION`], not a
/// scheduled cancellation: the message value itself never mutates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeMessage {
    text: String,
    created_at: Instant,
}

impl ChangeMessage {
    /// The message text, e.g. `"Found Tris: 2 faces"`.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// When the message was created.
    #[must_use]
    pub fn created_at(&self) -> Instant {
        self.created_at
    }

    /// Whether the display window has elapsed at `now`.
    ///
    /// Strictly after the display duration, not at it.
    #[must_use]
    pub fn is_expired(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.created_at) > MESSAGE_DISPLAY_DURATION
    }
}

/// One generation of watcher state: the snapshot and the analysis taken
/// from it. Stored and replaced as a unit so an interrupted run can never
/// leave a snapshot paired with an analysis from another generation.
#[derive(Debug, Clone)]
struct Observation {
    snapshot: TopologySnapshot,
    analysis: Analysis,
}

/// Detects topology changes across ticks and reports defect regressions.
///
/// Owns the single most-recent observation (overwritten, not logged) and
/// the currently visible message, if any.
///
/// # Example
///
/// ```
/// use std::time::Instant;
/// use mesh_lint::{LintConfig, LintWatcher};
/// use mesh_topology::unit_cube;
///
/// let mut watcher = LintWatcher::new();
/// let cube = unit_cube();
/// // A clean mesh produces no message on the first tick.
/// let message = watcher.tick(&cube, &LintConfig::default(), Instant::now()).unwrap();
/// assert!(message.is_none());
/// ```
#[derive(Debug, Default)]
pub struct LintWatcher {
    previous: Option<Observation>,
    message: Option<ChangeMessage>,
}

impl LintWatcher {
    /// Create a watcher with no prior state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the watcher by one host tick.
    ///
    /// Re-analyzes only when the topology fingerprint changed (or none was
    /// stored). When the mesh identity differs from the stored snapshot's,
    /// the diff baseline is the canonical empty analysis: element indices
    /// of unrelated meshes are never compared. Returns the currently
    /// visible message, if any.
    ///
    /// # Errors
    ///
    /// Returns [`LintError::Precondition`] when the adapter is not
    /// editable. Stored state is left untouched on error.
    pub fn tick(
        &mut self,
        mesh: &impl TopologyAdapter,
        config: &LintConfig,
        now: Instant,
    ) -> LintResult<Option<&ChangeMessage>> {
        if !mesh.is_editable() {
            return Err(LintError::precondition("no editable mesh is active"));
        }

        let snapshot = TopologySnapshot::capture(mesh);
        let changed = self
            .previous
            .as_ref()
            .is_none_or(|previous| previous.snapshot != snapshot);

        if changed {
            debug!(
                vertices = snapshot.vertices,
                edges = snapshot.edges,
                faces = snapshot.faces,
                "topology fingerprint changed, re-analyzing"
            );
            let analysis = analyze(mesh, config);

            let empty = Analysis::empty();
            let baseline = match &self.previous {
                Some(previous) if previous.snapshot.mesh_id == snapshot.mesh_id => {
                    &previous.analysis
                }
                _ => &empty,
            };

            if let Some(text) = diff_analyses(baseline, &analysis) {
                info!(message = %text, "lint regression detected");
                self.message = Some(ChangeMessage {
                    text,
                    created_at: now,
                });
            }
            // Swap the whole generation in one assignment.
            self.previous = Some(Observation { snapshot, analysis });
        }

        if self.message.as_ref().is_some_and(|m| m.is_expired(now)) {
            self.message = None;
        }
        Ok(self.message.as_ref())
    }

    /// The currently visible (unexpired) message, if any.
    #[must_use]
    pub fn message(&self, now: Instant) -> Option<&ChangeMessage> {
        self.message.as_ref().filter(|m| !m.is_expired(now))
    }

    /// The analysis from the most recent re-analysis, if any.
    #[must_use]
    pub fn last_analysis(&self) -> Option<&Analysis> {
        self.previous.as_ref().map(|previous| &previous.analysis)
    }

    /// Drop all stored state, as when live checking is toggled off.
    pub fn reset(&mut self) {
        self.previous = None;
        self.message = None;
    }
}

/// Summarize defect-count regressions between two analyses.
///
/// Analyses are joined by check label; a label missing from `before`
/// contributes empty sets, and labels present only in `before` are ignored.
/// For each check in `after` order and each element type in canonical
/// order, a fragment `"<delta> <verts|edges|faces>"` is emitted iff the
/// after-count exceeds the before-count, singular at a delta of exactly
/// one. Decreases never produce fragments. Returns `None` when no check
/// regressed.
#[must_use]
pub fn diff_analyses(before: &Analysis, after: &Analysis) -> Option<String> {
    let mut regressions: Vec<String> = Vec::new();

    for result in after.results() {
        let baseline = before.by_label(result.label());
        let mut fragments: Vec<String> = Vec::new();
        for element in ElementType::ALL {
            let after_count = result.elements.get(element).len();
            let before_count = baseline.map_or(0, |b| b.elements.get(element).len());
            if after_count > before_count {
                let delta = after_count - before_count;
                let noun = if delta == 1 {
                    element.singular()
                } else {
                    element.plural()
                };
                fragments.push(format!("{delta} {noun}"));
            }
        }
        if !fragments.is_empty() {
            regressions.push(format!("{}: {}", result.label(), fragments.join(", ")));
        }
    }

    if regressions.is_empty() {
        None
    } else {
        Some(format!("Found {}", regressions.join(", ")))
    }
}

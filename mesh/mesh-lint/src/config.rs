//! Per-session check configuration.
//!
//! Check definitions are pure data plus a pure predicate; which checks run
//! is user session state, carried in an explicit [`LintConfig`] passed into
//! the analyzer rather than stored on the checks themselves.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::checks::CheckKind;

/// Which checks are enabled for a run.
///
/// # Example
///
/// ```
/// use mesh_lint::{CheckKind, LintConfig};
///
/// let config = LintConfig::default();
/// assert!(config.is_enabled(CheckKind::Triangles));
/// assert!(!config.is_enabled(CheckKind::SixPlusPoles));
///
/// let config = config.with_enabled(CheckKind::SixPlusPoles, true);
/// assert!(config.is_enabled(CheckKind::SixPlusPoles));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LintConfig {
    enabled: [bool; CheckKind::COUNT],
}

impl Default for LintConfig {
    fn default() -> Self {
        let mut enabled = [false; CheckKind::COUNT];
        for kind in CheckKind::ALL {
            enabled[kind as usize] = kind.default_enabled();
        }
        Self { enabled }
    }
}

impl LintConfig {
    /// A configuration with every check enabled.
    #[must_use]
    pub fn all_enabled() -> Self {
        Self {
            enabled: [true; CheckKind::COUNT],
        }
    }

    /// Whether a check should run.
    #[must_use]
    pub fn is_enabled(&self, kind: CheckKind) -> bool {
        self.enabled[kind as usize]
    }

    /// Enable or disable a check in place.
    pub fn set_enabled(&mut self, kind: CheckKind, enabled: bool) {
        self.enabled[kind as usize] = enabled;
    }

    /// Builder form of [`set_enabled`](Self::set_enabled).
    #[must_use]
    pub fn with_enabled(mut self, kind: CheckKind, enabled: bool) -> Self {
        self.set_enabled(kind, enabled);
        self
    }

    /// Build a configuration from externally stored (symbol, enabled) pairs.
    ///
    /// Unknown symbols are logged and ignored. A registered check with no
    /// matching entry is a configuration inconsistency: it is logged and
    /// defaults to enabled. Never fatal.
    pub fn from_symbols<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, bool)>,
    {
        let mut seen: [Option<bool>; CheckKind::COUNT] = [None; CheckKind::COUNT];
        for (symbol, enabled) in pairs {
            match CheckKind::from_symbol(symbol) {
                Some(kind) => seen[kind as usize] = Some(enabled),
                None => warn!(symbol, "ignoring enabled flag for unknown check symbol"),
            }
        }

        let mut enabled = [false; CheckKind::COUNT];
        for kind in CheckKind::ALL {
            enabled[kind as usize] = seen[kind as usize].unwrap_or_else(|| {
                warn!(
                    check = kind.symbol(),
                    "check has no enabled flag entry, defaulting to enabled"
                );
                true
            });
        }
        Self { enabled }
    }
}

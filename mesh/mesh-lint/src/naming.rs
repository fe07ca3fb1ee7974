//! Default-object-name detection.

use std::sync::OnceLock;

use regex::Regex;

/// Generator-assigned default object names.
const DEFAULT_NAMES: [&str; 24] = [
    "BezierCircle",
    "BezierCurve",
    "Circle",
    "Cone",
    "Cube",
    "CurvePath",
    "Cylinder",
    "Grid",
    "Icosphere",
    "Mball",
    "Monkey",
    "NurbsCircle",
    "NurbsCurve",
    "NurbsPath",
    "Plane",
    "Sphere",
    "Surface",
    "SurfCircle",
    "SurfCurve",
    "SurfCylinder",
    "SurfPatch",
    "SurfSphere",
    "SurfTorus",
    "Text",
];

static DEFAULT_NAME_PATTERN: OnceLock<Option<Regex>> = OnceLock::new();

/// Whether `name` is a generator-assigned default name, optionally carrying
/// a dot-separated numeric suffix (`"Cube"`, `"Cube.001"`, `"Sphere.123"`).
///
/// A pure string predicate; keeping a default name is not a topological
/// defect, just a hint that the object was never deliberately named.
///
/// # Example
///
/// ```
/// use mesh_lint::has_default_name;
///
/// assert!(has_default_name("Cube"));
/// assert!(has_default_name("Cube.001"));
/// assert!(!has_default_name("LandingGear"));
/// ```
#[must_use]
pub fn has_default_name(name: &str) -> bool {
    let pattern = DEFAULT_NAME_PATTERN.get_or_init(|| {
        // Names are plain alphanumerics, safe to splice into the pattern.
        let alternation = DEFAULT_NAMES.join("|");
        Regex::new(&format!(r"^({alternation})\.?\d*$")).ok()
    });
    pattern.as_ref().is_some_and(|re| re.is_match(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_default_names_match() {
        assert!(has_default_name("Cube"));
        assert!(has_default_name("Sphere"));
        assert!(has_default_name("Monkey"));
        assert!(has_default_name("SurfTorus"));
    }

    #[test]
    fn numeric_suffixes_match() {
        assert!(has_default_name("Cube.001"));
        assert!(has_default_name("Sphere.123"));
        assert!(has_default_name("Plane.2"));
        // The separator is optional.
        assert!(has_default_name("Grid001"));
    }

    #[test]
    fn deliberate_names_do_not_match() {
        assert!(!has_default_name("Whatever"));
        assert!(!has_default_name("NumbersOkToo.001"));
        assert!(!has_default_name("LandingGear"));
        assert!(!has_default_name(""));
    }

    #[test]
    fn prefixes_and_extensions_do_not_match() {
        assert!(!has_default_name("Cubes"));
        assert!(!has_default_name("MyCube"));
        assert!(!has_default_name("Cube.001.002"));
    }
}

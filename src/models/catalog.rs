//! Skill vocabulary and proficiency scale.
//!
//! Entities are validated against a `Catalog`: a closed set of skill tags
//! and a finite ordered proficiency scale. The catalog is configuration,
//! not code — other domains swap in their own vocabulary without touching
//! the model layer.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// An ordinal proficiency level on the catalog's scale.
///
/// Levels are plain ordinals; their meaning (name) lives in the [`Catalog`].
/// Ordering is the usual integer ordering, so qualification checks are
/// simple comparisons.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Level(pub u8);

impl Level {
    /// No proficiency (ordinal 0 on the reference scale).
    pub const NONE: Level = Level(0);
    /// Basic proficiency.
    pub const BASIC: Level = Level(1);
    /// Intermediate proficiency.
    pub const INTERMEDIATE: Level = Level(2);
    /// Advanced proficiency.
    pub const ADVANCED: Level = Level(3);

    /// The raw ordinal.
    #[inline]
    pub fn ordinal(self) -> u8 {
        self.0
    }
}

/// The closed vocabulary of recognized skills and proficiency levels.
///
/// A catalog owns the skill tags an entity may carry and the ordered list
/// of level names defining the proficiency scale (index = ordinal).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    /// Recognized skill tags.
    skills: BTreeSet<String>,
    /// Level names, ordered from lowest to highest proficiency.
    level_names: Vec<String>,
}

impl Catalog {
    /// Creates a catalog from arbitrary skill tags and level names.
    pub fn new<S, L>(skills: S, level_names: L) -> Self
    where
        S: IntoIterator,
        S::Item: Into<String>,
        L: IntoIterator,
        L::Item: Into<String>,
    {
        Self {
            skills: skills.into_iter().map(Into::into).collect(),
            level_names: level_names.into_iter().map(Into::into).collect(),
        }
    }

    /// The reference catalog: skills `{APIs, Excel, SQL}` and the
    /// four-level scale None / Basic / Intermediate / Advanced.
    pub fn reference() -> Self {
        Self::new(
            ["APIs", "Excel", "SQL"],
            ["None", "Basic", "Intermediate", "Advanced"],
        )
    }

    /// Whether a skill tag belongs to the vocabulary.
    pub fn contains_skill(&self, skill: &str) -> bool {
        self.skills.contains(skill)
    }

    /// Whether a level lies on the scale.
    pub fn contains_level(&self, level: Level) -> bool {
        (level.ordinal() as usize) < self.level_names.len()
    }

    /// Highest ordinal on the scale, if the scale is non-empty.
    pub fn max_level(&self) -> Option<Level> {
        let n = self.level_names.len();
        if n == 0 {
            None
        } else {
            Some(Level((n - 1) as u8))
        }
    }

    /// Name of a level, if it lies on the scale.
    pub fn level_name(&self, level: Level) -> Option<&str> {
        self.level_names.get(level.ordinal() as usize).map(String::as_str)
    }

    /// The recognized skill tags, in sorted order.
    pub fn skills(&self) -> impl Iterator<Item = &str> {
        self.skills.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_catalog() {
        let cat = Catalog::reference();
        assert!(cat.contains_skill("APIs"));
        assert!(cat.contains_skill("Excel"));
        assert!(cat.contains_skill("SQL"));
        assert!(!cat.contains_skill("Java"));

        assert!(cat.contains_level(Level::NONE));
        assert!(cat.contains_level(Level::ADVANCED));
        assert!(!cat.contains_level(Level(4)));
        assert_eq!(cat.max_level(), Some(Level::ADVANCED));
    }

    #[test]
    fn test_level_names() {
        let cat = Catalog::reference();
        assert_eq!(cat.level_name(Level::NONE), Some("None"));
        assert_eq!(cat.level_name(Level::BASIC), Some("Basic"));
        assert_eq!(cat.level_name(Level::INTERMEDIATE), Some("Intermediate"));
        assert_eq!(cat.level_name(Level::ADVANCED), Some("Advanced"));
        assert_eq!(cat.level_name(Level(9)), None);
    }

    #[test]
    fn test_level_ordering() {
        assert!(Level::NONE < Level::BASIC);
        assert!(Level::INTERMEDIATE < Level::ADVANCED);
        assert!(Level::ADVANCED >= Level::ADVANCED);
    }

    #[test]
    fn test_custom_catalog() {
        let cat = Catalog::new(["welding", "milling"], ["novice", "expert"]);
        assert!(cat.contains_skill("welding"));
        assert!(!cat.contains_skill("SQL"));
        assert_eq!(cat.max_level(), Some(Level(1)));
    }

    #[test]
    fn test_empty_scale_rejects_all_levels() {
        let cat = Catalog::new(["a"], Vec::<String>::new());
        assert!(!cat.contains_level(Level::NONE));
        assert_eq!(cat.max_level(), None);
    }
}

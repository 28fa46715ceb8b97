//! Team member model.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::validate::{check_level, check_non_negative, check_skills};
use super::{Catalog, Level, Project, ValidationError};

/// A team member who can be staffed on projects.
///
/// Immutable value object. `capacity` is the total effort the member can
/// absorb over the planning horizon, in the same units as
/// [`Project::effort`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamMember {
    name: String,
    capacity: f64,
    skills: BTreeSet<String>,
    level: Level,
}

impl TeamMember {
    /// Creates a team member, validating every attribute against the catalog.
    pub fn new<S>(
        name: impl Into<String>,
        capacity: f64,
        skills: S,
        level: Level,
        catalog: &Catalog,
    ) -> Result<Self, ValidationError>
    where
        S: IntoIterator,
        S::Item: Into<String>,
    {
        let name = name.into();
        let skills: BTreeSet<String> = skills.into_iter().map(Into::into).collect();

        check_non_negative(&name, "capacity", capacity)?;
        check_skills(&name, &skills, catalog)?;
        check_level(&name, level, catalog)?;

        Ok(Self {
            name,
            capacity,
            skills,
            level,
        })
    }

    /// Unique member name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Total effort units available over the planning horizon.
    pub fn capacity(&self) -> f64 {
        self.capacity
    }

    /// Skills this member holds.
    pub fn skills(&self) -> &BTreeSet<String> {
        &self.skills
    }

    /// Proficiency level.
    pub fn level(&self) -> Level {
        self.level
    }

    /// Whether this member holds a given skill.
    pub fn has_skill(&self, skill: &str) -> bool {
        self.skills.contains(skill)
    }

    /// Qualification check: every required skill held, level at or above
    /// the project's bar.
    pub fn qualifies_for(&self, project: &Project) -> bool {
        self.level >= project.required_level()
            && project.required_skills().is_subset(&self.skills)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        Catalog::reference()
    }

    #[test]
    fn test_valid_member() {
        let m = TeamMember::new(
            "Alice",
            180.0,
            ["Excel", "SQL"],
            Level::ADVANCED,
            &catalog(),
        )
        .unwrap();

        assert_eq!(m.name(), "Alice");
        assert!((m.capacity() - 180.0).abs() < 1e-12);
        assert!(m.has_skill("SQL"));
        assert!(!m.has_skill("APIs"));
        assert_eq!(m.level(), Level::ADVANCED);
    }

    #[test]
    fn test_unknown_skill_rejected() {
        let err =
            TeamMember::new("bad", 10.0, ["COBOL"], Level::BASIC, &catalog()).unwrap_err();
        assert!(matches!(err, ValidationError::UnknownSkill { .. }));
    }

    #[test]
    fn test_negative_capacity_rejected() {
        let err = TeamMember::new("bad", -5.0, ["SQL"], Level::BASIC, &catalog()).unwrap_err();
        assert!(matches!(
            err,
            ValidationError::NegativeValue { field: "capacity", .. }
        ));
    }

    #[test]
    fn test_qualification() {
        let cat = catalog();
        let p = Project::new("P", 1.0, 10.0, ["Excel", "SQL"], Level::INTERMEDIATE, &cat)
            .unwrap();

        let qualified =
            TeamMember::new("q", 100.0, ["Excel", "SQL"], Level::INTERMEDIATE, &cat).unwrap();
        assert!(qualified.qualifies_for(&p));

        // Missing one required skill.
        let missing_skill =
            TeamMember::new("m", 100.0, ["Excel"], Level::ADVANCED, &cat).unwrap();
        assert!(!missing_skill.qualifies_for(&p));

        // Level below the bar.
        let too_junior =
            TeamMember::new("j", 100.0, ["Excel", "SQL"], Level::BASIC, &cat).unwrap();
        assert!(!too_junior.qualifies_for(&p));

        // Extra skills are fine.
        let overqualified =
            TeamMember::new("o", 100.0, ["APIs", "Excel", "SQL"], Level::ADVANCED, &cat)
                .unwrap();
        assert!(overqualified.qualifies_for(&p));
    }

    #[test]
    fn test_no_requirements_qualifies_everyone() {
        let cat = catalog();
        let p = Project::new("open", 1.0, 1.0, Vec::<String>::new(), Level::NONE, &cat)
            .unwrap();
        let m = TeamMember::new("m", 0.0, Vec::<String>::new(), Level::NONE, &cat).unwrap();
        assert!(m.qualifies_for(&p));
    }

    #[test]
    fn test_zero_capacity_constructs() {
        // Capacity 0 is valid data; the optimizer decides it can't be used.
        assert!(TeamMember::new("z", 0.0, ["SQL"], Level::BASIC, &catalog()).is_ok());
    }
}

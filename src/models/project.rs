//! Candidate project model.
//!
//! A project is a unit of work competing for selection: it yields a
//! recurring `benefit` if chosen and costs a one-time `effort`, payable
//! from the capacity of every member staffed on it.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::validate::{check_level, check_non_negative, check_skills};
use super::{Catalog, Level, ValidationError};

/// A candidate project.
///
/// Immutable value object; all invariants hold from construction onward.
/// `benefit` and `effort` share units with [`TeamMember::capacity`];
/// consumers define what one unit means (e.g., hours per period).
///
/// [`TeamMember::capacity`]: super::TeamMember::capacity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    name: String,
    benefit: f64,
    effort: f64,
    required_skills: BTreeSet<String>,
    required_level: Level,
}

impl Project {
    /// Creates a project, validating every attribute against the catalog.
    ///
    /// Fails with a [`ValidationError`] on an out-of-vocabulary skill, an
    /// off-scale level, or a negative `benefit`/`effort`. No partially
    /// constructed project is ever observable.
    pub fn new<S>(
        name: impl Into<String>,
        benefit: f64,
        effort: f64,
        required_skills: S,
        required_level: Level,
        catalog: &Catalog,
    ) -> Result<Self, ValidationError>
    where
        S: IntoIterator,
        S::Item: Into<String>,
    {
        let name = name.into();
        let required_skills: BTreeSet<String> =
            required_skills.into_iter().map(Into::into).collect();

        check_non_negative(&name, "benefit", benefit)?;
        check_non_negative(&name, "effort", effort)?;
        check_skills(&name, &required_skills, catalog)?;
        check_level(&name, required_level, catalog)?;

        Ok(Self {
            name,
            benefit,
            effort,
            required_skills,
            required_level,
        })
    }

    /// Unique project name (key for all variable indexing).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Recurring gain if the project is selected.
    pub fn benefit(&self) -> f64 {
        self.benefit
    }

    /// One-time implementation cost, in capacity units.
    pub fn effort(&self) -> f64 {
        self.effort
    }

    /// Skills an assignee must hold, all of them.
    pub fn required_skills(&self) -> &BTreeSet<String> {
        &self.required_skills
    }

    /// Minimum proficiency an assignee must hold.
    pub fn required_level(&self) -> Level {
        self.required_level
    }
}

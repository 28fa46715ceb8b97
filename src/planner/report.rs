//! Interpretation of a raw solver result back into domain terms.
//!
//! The interpreter trusts the solver for the *selection* but not for the
//! numbers: the aggregate benefit is recomputed from entity data, and the
//! qualification and linking invariants the model is supposed to enforce
//! are re-asserted defensively. A violation there is an adapter/model
//! contract breach, not a data problem.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::StaffingModel;
use crate::mip::{MipSolution, SolveStatus};
use crate::models::{Project, TeamMember};

/// The solver returned an assignment violating a constraint the model
/// builder emitted. Fatal: indicates a bug in the integration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConsistencyError {
    /// An assignment targets a project the solver did not select.
    #[error("'{member}' assigned to unselected project '{project}'")]
    AssignmentWithoutSelection { member: String, project: String },

    /// An assigned member does not qualify for the project.
    #[error("'{member}' does not qualify for assigned project '{project}'")]
    UnqualifiedAssignment { member: String, project: String },

    /// The solver claimed optimality but returned no variable values.
    #[error("optimal status with no variable values")]
    MissingValues,
}

/// One member-to-project staffing decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffAssignment {
    /// Member name.
    pub member: String,
    /// Project name.
    pub project: String,
}

/// The domain-level outcome of one build-solve-interpret cycle.
///
/// A non-`Optimal` status is a legitimate business outcome (e.g., the
/// instance is infeasible under a forced selection); the report then
/// carries only the status, with an empty selection and zero benefit —
/// nothing else is authoritative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionReport {
    /// Solve verdict.
    pub status: SolveStatus,
    /// Names of selected projects, in input order.
    pub selected_projects: Vec<String>,
    /// All staffing decisions, grouped by member in input order.
    pub assignments: Vec<StaffAssignment>,
    /// Sum of benefits over selected projects, recomputed from entity
    /// data rather than read from the raw objective.
    pub total_benefit: f64,
}

impl DecisionReport {
    fn status_only(status: SolveStatus) -> Self {
        Self {
            status,
            selected_projects: Vec::new(),
            assignments: Vec::new(),
            total_benefit: 0.0,
        }
    }

    /// Whether the report carries an authoritative selection.
    pub fn is_optimal(&self) -> bool {
        self.status == SolveStatus::Optimal
    }

    /// Members assigned to a given project.
    pub fn assignees_of<'a>(&'a self, project: &'a str) -> impl Iterator<Item = &'a str> {
        self.assignments
            .iter()
            .filter(move |a| a.project == project)
            .map(|a| a.member.as_str())
    }
}

/// Maps a raw solution back to a [`DecisionReport`].
///
/// `projects` and `members` must be the same collections, in the same
/// order, that produced `model`. Values are thresholded at 0.5; the
/// solver may return floating-point approximations of 0/1.
pub fn interpret(
    model: &StaffingModel,
    solution: &MipSolution,
    projects: &[Project],
    members: &[TeamMember],
) -> Result<DecisionReport, ConsistencyError> {
    if solution.status != SolveStatus::Optimal {
        return Ok(DecisionReport::status_only(solution.status));
    }
    if solution.values.is_none() {
        return Err(ConsistencyError::MissingValues);
    }

    let selected: Vec<bool> = (0..projects.len())
        .map(|p| solution.rounds_to_one(model.select_var(p)))
        .collect();

    let mut assignments = Vec::new();
    for (m, member) in members.iter().enumerate() {
        for (p, project) in projects.iter().enumerate() {
            if !solution.rounds_to_one(model.assign_var(m, p)) {
                continue;
            }
            if !selected[p] {
                return Err(ConsistencyError::AssignmentWithoutSelection {
                    member: member.name().to_string(),
                    project: project.name().to_string(),
                });
            }
            if !member.qualifies_for(project) {
                return Err(ConsistencyError::UnqualifiedAssignment {
                    member: member.name().to_string(),
                    project: project.name().to_string(),
                });
            }
            assignments.push(StaffAssignment {
                member: member.name().to_string(),
                project: project.name().to_string(),
            });
        }
    }

    let selected_projects: Vec<String> = projects
        .iter()
        .zip(&selected)
        .filter(|(_, &s)| s)
        .map(|(p, _)| p.name().to_string())
        .collect();

    let total_benefit = projects
        .iter()
        .zip(&selected)
        .filter(|(_, &s)| s)
        .map(|(p, _)| p.benefit())
        .sum();

    Ok(DecisionReport {
        status: SolveStatus::Optimal,
        selected_projects,
        assignments,
        total_benefit,
    })
}

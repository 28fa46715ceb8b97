//! Portfolio planning pipeline: build, solve, interpret.
//!
//! The single-period selection problem as one synchronous cycle:
//! entities → [`ModelBuilder`] → opaque instance → [`MipSolver`] → raw
//! solution → [`interpret`] → [`DecisionReport`]. Construction is a pure
//! transformation of the input collections; the only blocking operation
//! is the solver call. Independent cycles may run on separate threads —
//! nothing here shares mutable state.
//!
//! Non-optimal outcomes (infeasible, unbounded, not solved) are data in
//! the report, never errors: the caller decides whether to relax and
//! retry. This layer never auto-relaxes a constraint.

mod builder;
mod report;

pub use builder::{ConfigurationError, ModelBuilder, StaffingModel};
pub use report::{interpret, ConsistencyError, DecisionReport, StaffAssignment};

use thiserror::Error;
use tracing::info;

use crate::mip::{BranchAndBoundSolver, MipSolver};
use crate::models::{Project, TeamMember};

/// A planning cycle failed before or after the solve.
///
/// Solve outcomes are *not* represented here; they live in
/// [`DecisionReport::status`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlanError {
    /// Structurally invalid builder input.
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
    /// The solver broke the model contract.
    #[error(transparent)]
    Consistency(#[from] ConsistencyError),
}

/// Runs one build-solve-interpret cycle with the bundled exact solver.
///
/// `max_concurrent` caps the number of selected projects; `None` leaves
/// the selection unbounded.
pub fn build_and_solve(
    projects: &[Project],
    members: &[TeamMember],
    max_concurrent: Option<u32>,
) -> Result<DecisionReport, PlanError> {
    build_and_solve_with(&BranchAndBoundSolver::new(), projects, members, max_concurrent)
}

/// Runs one cycle with a caller-supplied solver adapter.
pub fn build_and_solve_with<S: MipSolver>(
    solver: &S,
    projects: &[Project],
    members: &[TeamMember],
    max_concurrent: Option<u32>,
) -> Result<DecisionReport, PlanError> {
    let mut builder = ModelBuilder::new(projects, members);
    if let Some(cap) = max_concurrent {
        builder = builder.with_max_concurrent(cap);
    }
    let model = builder.build()?;

    let solution = solver.solve(model.instance());
    let report = interpret(&model, &solution, projects, members)?;

    info!(
        status = ?report.status,
        selected = report.selected_projects.len(),
        total_benefit = report.total_benefit,
        "planning cycle finished"
    );
    Ok(report)
}

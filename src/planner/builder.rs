//! MIP model builder for the selection-and-staffing problem.
//!
//! Translates validated entities plus an optional concurrency cap into a
//! [`MipInstance`]: one `select` variable per project, one `assign`
//! variable per member×project pair, and the five-constraint family
//! described on [`ModelBuilder::build`].

use std::collections::HashSet;

use itertools::iproduct;
use thiserror::Error;
use tracing::debug;

use crate::mip::{LinearConstraint, MipInstance, VarId};
use crate::models::{Project, TeamMember};

/// The builder received structurally invalid input.
///
/// Raised before any constraint is emitted. Infeasibility is *not* a
/// configuration error — it is discovered at solve time and reported as a
/// status.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    /// Two projects share a name.
    #[error("duplicate project name '{0}'")]
    DuplicateProjectName(String),
    /// Two members share a name.
    #[error("duplicate member name '{0}'")]
    DuplicateMemberName(String),
}

/// A finalized instance plus the dense variable index that maps it back
/// to domain terms.
///
/// Variable ids are positional: `select_var(p)` for the `p`-th input
/// project, `assign_var(m, p)` for the `m`-th member on the `p`-th
/// project. Extra constraints (e.g., forcing a selection in a what-if
/// run) may be appended through [`StaffingModel::instance_mut`] before
/// solving.
#[derive(Debug, Clone)]
pub struct StaffingModel {
    instance: MipInstance,
    select: Vec<VarId>,
    assign: Vec<Vec<VarId>>,
}

impl StaffingModel {
    /// The opaque instance to hand to a solver.
    pub fn instance(&self) -> &MipInstance {
        &self.instance
    }

    /// Mutable access for appending scenario constraints before solving.
    pub fn instance_mut(&mut self) -> &mut MipInstance {
        &mut self.instance
    }

    /// Selection variable of the `p`-th project (input order).
    pub fn select_var(&self, project: usize) -> VarId {
        self.select[project]
    }

    /// Assignment variable of the `m`-th member to the `p`-th project.
    pub fn assign_var(&self, member: usize, project: usize) -> VarId {
        self.assign[member][project]
    }

    /// Number of projects in the model.
    pub fn project_count(&self) -> usize {
        self.select.len()
    }

    /// Number of members in the model.
    pub fn member_count(&self) -> usize {
        self.assign.len()
    }
}

/// Builds a [`StaffingModel`] from entity collections.
///
/// Pure and deterministic: the builder borrows its inputs, owns no entity
/// state, and each `build` call produces an independent instance.
pub struct ModelBuilder<'a> {
    projects: &'a [Project],
    members: &'a [TeamMember],
    max_concurrent: Option<u32>,
}

impl<'a> ModelBuilder<'a> {
    /// Creates a builder over the given entity collections.
    pub fn new(projects: &'a [Project], members: &'a [TeamMember]) -> Self {
        Self {
            projects,
            members,
            max_concurrent: None,
        }
    }

    /// Caps the number of simultaneously selected projects.
    ///
    /// Absent by default (unbounded). The unsigned type makes a negative
    /// cap unrepresentable; a cap of 0 is legal and forces the empty
    /// selection.
    pub fn with_max_concurrent(mut self, cap: u32) -> Self {
        self.max_concurrent = Some(cap);
        self
    }

    /// Builds the finalized instance.
    ///
    /// Emits, in order:
    /// 1. Concurrency cap (only when configured): `Σ select[p] ≤ cap`
    /// 2. Assignment implies selection: `assign[m,p] ≤ select[p]`
    /// 3. Qualification gating: `assign[m,p] = 0` for unqualified pairs
    ///    (the variable stays declared, pinned by an equality)
    /// 4. Capacity: `Σ_p assign[m,p]·effort[p] ≤ capacity[m]` — effort is
    ///    charged in full to every assignee, not split pro-rata
    /// 5. Staffing: `Σ_m assign[m,p] ≥ select[p]`
    ///
    /// Fails with [`ConfigurationError`] on duplicate names. Performs no
    /// feasibility pre-check: an unstaffable project is a solve-time
    /// outcome, not a build-time error.
    pub fn build(&self) -> Result<StaffingModel, ConfigurationError> {
        self.check_unique_names()?;

        let mut instance = MipInstance::new("portfolio-staffing");

        // Decision variables. Objective: maximize Σ select[p]·benefit[p].
        let select: Vec<VarId> = self
            .projects
            .iter()
            .map(|p| {
                let var = instance.add_binary(format!("select[{}]", p.name()));
                instance.set_objective(var, p.benefit());
                var
            })
            .collect();

        let assign: Vec<Vec<VarId>> = self
            .members
            .iter()
            .map(|m| {
                self.projects
                    .iter()
                    .map(|p| instance.add_binary(format!("assign[{},{}]", m.name(), p.name())))
                    .collect()
            })
            .collect();

        // 1. Concurrency cap.
        if let Some(cap) = self.max_concurrent {
            instance.add_constraint(LinearConstraint::le(
                select.iter().map(|&v| (v, 1.0)).collect(),
                f64::from(cap),
            ));
        }

        // 2. Assignment implies selection; 3. qualification gating.
        for (m, p) in iproduct!(0..self.members.len(), 0..self.projects.len()) {
            instance.add_constraint(LinearConstraint::le(
                vec![(assign[m][p], 1.0), (select[p], -1.0)],
                0.0,
            ));
            if !self.members[m].qualifies_for(&self.projects[p]) {
                instance.fix(assign[m][p], 0.0);
            }
        }

        // 4. Capacity per member.
        for (m, member) in self.members.iter().enumerate() {
            instance.add_constraint(LinearConstraint::le(
                self.projects
                    .iter()
                    .enumerate()
                    .map(|(p, project)| (assign[m][p], project.effort()))
                    .collect(),
                member.capacity(),
            ));
        }

        // 5. Staffing: a selected project needs at least one assignee.
        for (p, &select_var) in select.iter().enumerate() {
            let mut terms: Vec<(VarId, f64)> =
                (0..self.members.len()).map(|m| (assign[m][p], 1.0)).collect();
            terms.push((select_var, -1.0));
            instance.add_constraint(LinearConstraint::ge(terms, 0.0));
        }

        debug!(
            projects = self.projects.len(),
            members = self.members.len(),
            max_concurrent = self.max_concurrent,
            variables = instance.num_vars(),
            constraints = instance.constraint_count(),
            "staffing model built"
        );

        Ok(StaffingModel {
            instance,
            select,
            assign,
        })
    }

    fn check_unique_names(&self) -> Result<(), ConfigurationError> {
        let mut seen = HashSet::new();
        for p in self.projects {
            if !seen.insert(p.name()) {
                return Err(ConfigurationError::DuplicateProjectName(
                    p.name().to_string(),
                ));
            }
        }
        seen.clear();
        for m in self.members {
            if !seen.insert(m.name()) {
                return Err(ConfigurationError::DuplicateMemberName(
                    m.name().to_string(),
                ));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mip::Sense;
    use crate::models::{Catalog, Level};

    fn catalog() -> Catalog {
        Catalog::reference()
    }

    fn two_by_two() -> (Vec<Project>, Vec<TeamMember>) {
        let cat = catalog();
        let projects = vec![
            Project::new("P1", 10.0, 40.0, ["SQL"], Level::BASIC, &cat).unwrap(),
            Project::new("P2", 20.0, 60.0, ["APIs"], Level::ADVANCED, &cat).unwrap(),
        ];
        let members = vec![
            TeamMember::new("M1", 100.0, ["SQL"], Level::INTERMEDIATE, &cat).unwrap(),
            TeamMember::new("M2", 50.0, ["APIs"], Level::BASIC, &cat).unwrap(),
        ];
        (projects, members)
    }

    #[test]
    fn test_variable_scheme() {
        let (projects, members) = two_by_two();
        let model = ModelBuilder::new(&projects, &members).build().unwrap();

        // 2 select + 4 assign variables, all declared even for
        // unqualified pairs.
        assert_eq!(model.instance().num_vars(), 6);
        assert_eq!(model.project_count(), 2);
        assert_eq!(model.member_count(), 2);

        assert_eq!(model.instance().var_name(model.select_var(0)), "select[P1]");
        assert_eq!(
            model.instance().var_name(model.assign_var(1, 0)),
            "assign[M2,P1]"
        );

        // Objective carries the benefits on select variables only.
        let obj = model.instance().objective();
        assert!((obj[model.select_var(0)] - 10.0).abs() < 1e-12);
        assert!((obj[model.select_var(1)] - 20.0).abs() < 1e-12);
        assert!((obj[model.assign_var(0, 0)]).abs() < 1e-12);
    }

    #[test]
    fn test_constraint_counts_without_cap() {
        let (projects, members) = two_by_two();
        let model = ModelBuilder::new(&projects, &members).build().unwrap();

        // 4 linking + pins + 2 capacity + 2 staffing. Unqualified pairs:
        // M1/P2 (no APIs), M2/P1 (no SQL), M2/P2 (level too low) = 3 pins.
        assert_eq!(model.instance().constraint_count(), 4 + 3 + 2 + 2);
    }

    #[test]
    fn test_cap_emitted_only_when_configured() {
        let (projects, members) = two_by_two();
        let without = ModelBuilder::new(&projects, &members).build().unwrap();
        let with = ModelBuilder::new(&projects, &members)
            .with_max_concurrent(1)
            .build()
            .unwrap();

        assert_eq!(
            with.instance().constraint_count(),
            without.instance().constraint_count() + 1
        );

        // The cap is a ≤ over all select variables.
        let cap = &with.instance().constraints()[0];
        assert_eq!(cap.sense, Sense::Le);
        assert_eq!(cap.terms.len(), projects.len());
        assert!((cap.rhs - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_qualification_pins_are_equalities() {
        let (projects, members) = two_by_two();
        let model = ModelBuilder::new(&projects, &members).build().unwrap();

        let pinned = model.assign_var(1, 1); // M2 on P2: level too low
        let pin = model
            .instance()
            .constraints()
            .iter()
            .find(|c| c.sense == Sense::Eq && c.terms == vec![(pinned, 1.0)])
            .expect("pin constraint present");
        assert!((pin.rhs).abs() < 1e-12);
    }

    #[test]
    fn test_duplicate_project_name() {
        let cat = catalog();
        let projects = vec![
            Project::new("P", 1.0, 1.0, ["SQL"], Level::BASIC, &cat).unwrap(),
            Project::new("P", 2.0, 2.0, ["Excel"], Level::BASIC, &cat).unwrap(),
        ];
        let members =
            vec![TeamMember::new("M", 10.0, ["SQL"], Level::BASIC, &cat).unwrap()];

        let err = ModelBuilder::new(&projects, &members).build().unwrap_err();
        assert_eq!(err, ConfigurationError::DuplicateProjectName("P".into()));
    }

    #[test]
    fn test_duplicate_member_name() {
        let cat = catalog();
        let projects =
            vec![Project::new("P", 1.0, 1.0, ["SQL"], Level::BASIC, &cat).unwrap()];
        let members = vec![
            TeamMember::new("M", 10.0, ["SQL"], Level::BASIC, &cat).unwrap(),
            TeamMember::new("M", 20.0, ["Excel"], Level::BASIC, &cat).unwrap(),
        ];

        let err = ModelBuilder::new(&projects, &members).build().unwrap_err();
        assert_eq!(err, ConfigurationError::DuplicateMemberName("M".into()));
    }

    #[test]
    fn test_unstaffable_project_still_builds() {
        // No feasibility pre-check: a project nobody qualifies for builds
        // fine and is resolved at solve time.
        let cat = catalog();
        let projects =
            vec![Project::new("P", 1.0, 1.0, ["APIs"], Level::ADVANCED, &cat).unwrap()];
        let members =
            vec![TeamMember::new("M", 10.0, ["SQL"], Level::BASIC, &cat).unwrap()];

        assert!(ModelBuilder::new(&projects, &members).build().is_ok());
    }

    #[test]
    fn test_empty_collections() {
        let model = ModelBuilder::new(&[], &[]).build().unwrap();
        assert_eq!(model.instance().num_vars(), 0);
        assert_eq!(model.instance().constraint_count(), 0);
    }
}

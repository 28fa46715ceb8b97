//! Binary MIP instance and solver boundary.
//!
//! A [`MipInstance`] is the opaque handoff format between the model
//! builder and a solver: a table of binary decision variables, a linear
//! maximization objective, and a list of linear constraints. Instances
//! are accumulated once, then handed whole to a [`MipSolver`] — there is
//! no incremental re-solving.
//!
//! # Reference
//! - Wolsey (1998), "Integer Programming", Ch. 1
//! - Nemhauser & Wolsey (1988), "Integer and Combinatorial Optimization"

mod solver;

pub use solver::{BranchAndBoundSolver, MipSolver, SolverConfig};

use serde::{Deserialize, Serialize};

/// Identifier of a decision variable within one instance.
///
/// Dense index into the instance's variable table; valid only for the
/// instance that issued it.
pub type VarId = usize;

/// Comparison sense of a linear constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sense {
    /// `lhs ≤ rhs`
    Le,
    /// `lhs ≥ rhs`
    Ge,
    /// `lhs = rhs`
    Eq,
}

/// A linear constraint `Σ coeff·var  (≤ | ≥ | =)  rhs`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearConstraint {
    /// Left-hand-side terms as (variable, coefficient) pairs.
    pub terms: Vec<(VarId, f64)>,
    /// Comparison sense.
    pub sense: Sense,
    /// Right-hand-side constant.
    pub rhs: f64,
}

impl LinearConstraint {
    /// Creates a `≤` constraint.
    pub fn le(terms: Vec<(VarId, f64)>, rhs: f64) -> Self {
        Self { terms, sense: Sense::Le, rhs }
    }

    /// Creates a `≥` constraint.
    pub fn ge(terms: Vec<(VarId, f64)>, rhs: f64) -> Self {
        Self { terms, sense: Sense::Ge, rhs }
    }

    /// Creates a `=` constraint.
    pub fn eq(terms: Vec<(VarId, f64)>, rhs: f64) -> Self {
        Self { terms, sense: Sense::Eq, rhs }
    }
}

/// A pure-binary MIP instance with a maximization objective.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MipInstance {
    /// Instance label (diagnostics only).
    name: String,
    /// Debug name per variable; index = `VarId`.
    var_names: Vec<String>,
    /// Objective coefficient per variable (sense: maximize).
    objective: Vec<f64>,
    /// Constraint list.
    constraints: Vec<LinearConstraint>,
}

impl MipInstance {
    /// Creates an empty instance.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            var_names: Vec::new(),
            objective: Vec::new(),
            constraints: Vec::new(),
        }
    }

    /// Declares a binary variable and returns its id.
    ///
    /// The objective coefficient starts at 0.
    pub fn add_binary(&mut self, name: impl Into<String>) -> VarId {
        let id = self.var_names.len();
        self.var_names.push(name.into());
        self.objective.push(0.0);
        id
    }

    /// Sets the objective coefficient of a variable.
    pub fn set_objective(&mut self, var: VarId, coeff: f64) {
        self.objective[var] = coeff;
    }

    /// Appends a constraint.
    pub fn add_constraint(&mut self, constraint: LinearConstraint) {
        self.constraints.push(constraint);
    }

    /// Pins a variable to a value via an equality constraint.
    ///
    /// The variable stays declared; the instance remains structurally
    /// uniform regardless of how many variables are pinned.
    pub fn fix(&mut self, var: VarId, value: f64) {
        self.constraints.push(LinearConstraint::eq(vec![(var, 1.0)], value));
    }

    /// Instance label.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of declared variables.
    pub fn num_vars(&self) -> usize {
        self.var_names.len()
    }

    /// Number of constraints.
    pub fn constraint_count(&self) -> usize {
        self.constraints.len()
    }

    /// Debug name of a variable.
    pub fn var_name(&self, var: VarId) -> &str {
        &self.var_names[var]
    }

    /// Objective coefficients, dense by `VarId`.
    pub fn objective(&self) -> &[f64] {
        &self.objective
    }

    /// The constraint list.
    pub fn constraints(&self) -> &[LinearConstraint] {
        &self.constraints
    }
}

/// Terminal status of one solve invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SolveStatus {
    /// A provably optimal solution was found.
    Optimal,
    /// No feasible solution exists.
    Infeasible,
    /// The objective is unbounded above.
    Unbounded,
    /// The solver stopped without a verdict (e.g., node budget exhausted).
    NotSolved,
}

/// Raw result of a solve: status plus, when optimal, variable values.
///
/// Values are in `[0, 1]` but may carry floating-point noise; consumers
/// threshold at 0.5 via [`MipSolution::rounds_to_one`] rather than
/// comparing bit-exactly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MipSolution {
    /// Solve verdict.
    pub status: SolveStatus,
    /// Value per variable, dense by `VarId`. Present only when optimal.
    pub values: Option<Vec<f64>>,
    /// Raw objective value as reported by the solver.
    pub objective_value: Option<f64>,
}

impl MipSolution {
    /// A solution carrying only a non-optimal status.
    pub fn without_values(status: SolveStatus) -> Self {
        Self { status, values: None, objective_value: None }
    }

    /// An optimal solution with its variable values.
    pub fn optimal(values: Vec<f64>, objective_value: f64) -> Self {
        Self {
            status: SolveStatus::Optimal,
            values: Some(values),
            objective_value: Some(objective_value),
        }
    }

    /// Whether the verdict is `Optimal`.
    pub fn is_optimal(&self) -> bool {
        self.status == SolveStatus::Optimal
    }

    /// Resolved value of a variable, if values are present.
    pub fn value(&self, var: VarId) -> Option<f64> {
        self.values.as_ref().and_then(|v| v.get(var)).copied()
    }

    /// Whether a binary variable resolved to 1 (threshold at 0.5).
    pub fn rounds_to_one(&self, var: VarId) -> bool {
        self.value(var).is_some_and(|v| v >= 0.5)
    }
}

//! Solver boundary and the bundled exact solver.
//!
//! [`MipSolver`] is the adapter seam: the model-building layer assumes
//! nothing about the algorithm, numeric tolerance, or runtime behind it.
//! [`BranchAndBoundSolver`] is the crate's default adapter — an exact
//! depth-first branch and bound over binary variables, deterministic and
//! dependency-free, sized for portfolio-scale instances (tens of
//! variables).
//!
//! # Reference
//! - Land & Doig (1960), "An Automatic Method of Solving Discrete
//!   Programming Problems"
//! - Wolsey (1998), "Integer Programming", Ch. 7

use tracing::debug;

use super::{MipInstance, MipSolution, Sense, SolveStatus, VarId};

/// A solver capable of resolving a binary MIP instance.
///
/// Implementations must return `Optimal` only with a full set of variable
/// values; all other statuses carry none. Values may be floating-point
/// approximations of 0/1 within the implementation's own tolerance.
pub trait MipSolver {
    /// Solves the instance to proven optimality or a terminal status.
    fn solve(&self, instance: &MipInstance) -> MipSolution;
}

/// Tuning knobs for [`BranchAndBoundSolver`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverConfig {
    /// Maximum search-tree nodes before giving up with `NotSolved`.
    pub node_limit: usize,
    /// Numeric slack for constraint satisfaction and bound comparisons.
    pub tolerance: f64,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            node_limit: 2_000_000,
            tolerance: 1e-6,
        }
    }
}

/// Exact depth-first branch and bound over binary variables.
///
/// Branches on variables in descending objective-coefficient order,
/// trying the profitable value first. Subtrees are pruned when a
/// constraint can no longer be satisfied by any completion (interval
/// reachability per constraint) or when the optimistic objective bound
/// cannot beat the incumbent.
///
/// Never returns `Unbounded`: a pure-binary objective is always bounded.
#[derive(Debug, Default)]
pub struct BranchAndBoundSolver {
    config: SolverConfig,
}

impl BranchAndBoundSolver {
    /// Creates a solver with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a solver with an explicit configuration.
    pub fn with_config(config: SolverConfig) -> Self {
        Self { config }
    }
}

impl MipSolver for BranchAndBoundSolver {
    fn solve(&self, instance: &MipInstance) -> MipSolution {
        // Constraints with no terms have a fixed lhs of 0; an inconsistent
        // one makes the whole instance infeasible before any search.
        for c in instance.constraints() {
            if c.terms.is_empty() {
                let tol = self.config.tolerance;
                let ok = match c.sense {
                    Sense::Le => 0.0 <= c.rhs + tol,
                    Sense::Ge => 0.0 >= c.rhs - tol,
                    Sense::Eq => c.rhs.abs() <= tol,
                };
                if !ok {
                    return MipSolution::without_values(SolveStatus::Infeasible);
                }
            }
        }

        let problem = Problem::compile(instance);
        let mut state = State::init(&problem);
        let aborted = dfs(&problem, &mut state, &self.config, 0);

        debug!(
            instance = instance.name(),
            nodes = state.nodes,
            aborted,
            incumbent = state.best.as_ref().map(|(_, v)| *v),
            "branch and bound finished"
        );

        if aborted {
            return MipSolution::without_values(SolveStatus::NotSolved);
        }
        match state.best {
            Some((values, objective)) => MipSolution::optimal(values, objective),
            None => MipSolution::without_values(SolveStatus::Infeasible),
        }
    }
}

/// Immutable search data compiled from an instance.
struct Problem {
    objective: Vec<f64>,
    senses: Vec<Sense>,
    rhs: Vec<f64>,
    /// For each variable, the constraints it appears in with its coefficient.
    var_constraints: Vec<Vec<(usize, f64)>>,
    /// Branching order: descending objective coefficient.
    order: Vec<VarId>,
}

impl Problem {
    fn compile(instance: &MipInstance) -> Self {
        let n = instance.num_vars();
        let mut var_constraints: Vec<Vec<(usize, f64)>> = vec![Vec::new(); n];
        let mut senses = Vec::with_capacity(instance.constraint_count());
        let mut rhs = Vec::with_capacity(instance.constraint_count());

        for (ci, c) in instance.constraints().iter().enumerate() {
            senses.push(c.sense);
            rhs.push(c.rhs);
            for &(var, coeff) in &c.terms {
                var_constraints[var].push((ci, coeff));
            }
        }

        let objective = instance.objective().to_vec();
        let mut order: Vec<VarId> = (0..n).collect();
        order.sort_by(|&a, &b| {
            objective[b]
                .partial_cmp(&objective[a])
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        Self {
            objective,
            senses,
            rhs,
            var_constraints,
            order,
        }
    }
}

/// Mutable search state, updated and undone along the DFS path.
struct State {
    /// Tentative variable values (meaningful for decided depths only).
    values: Vec<f64>,
    /// Per constraint: lhs contribution of decided variables.
    fixed: Vec<f64>,
    /// Per constraint: sum of positive coefficients of undecided variables.
    pos_rem: Vec<f64>,
    /// Per constraint: sum of negative coefficients of undecided variables.
    neg_rem: Vec<f64>,
    /// Objective contribution of decided variables.
    obj_fixed: f64,
    /// Sum of positive objective coefficients of undecided variables.
    obj_pos_rem: f64,
    /// Best feasible solution so far: (values, objective).
    best: Option<(Vec<f64>, f64)>,
    nodes: usize,
}

impl State {
    fn init(problem: &Problem) -> Self {
        let m = problem.senses.len();
        let mut pos_rem = vec![0.0; m];
        let mut neg_rem = vec![0.0; m];
        for per_var in &problem.var_constraints {
            for &(ci, coeff) in per_var {
                if coeff > 0.0 {
                    pos_rem[ci] += coeff;
                } else {
                    neg_rem[ci] += coeff;
                }
            }
        }
        let obj_pos_rem = problem.objective.iter().filter(|c| **c > 0.0).sum();

        Self {
            values: vec![0.0; problem.objective.len()],
            fixed: vec![0.0; m],
            pos_rem,
            neg_rem,
            obj_fixed: 0.0,
            obj_pos_rem,
            best: None,
            nodes: 0,
        }
    }
}

/// Returns `true` if the node budget was exhausted.
fn dfs(problem: &Problem, state: &mut State, config: &SolverConfig, depth: usize) -> bool {
    if state.nodes >= config.node_limit {
        return true;
    }
    state.nodes += 1;

    if depth == problem.order.len() {
        // Every constraint is fully decided here; the reachability checks
        // along the path collapse to exact satisfaction at depth n.
        let improves = state
            .best
            .as_ref()
            .is_none_or(|(_, best)| state.obj_fixed > *best + config.tolerance);
        if improves {
            state.best = Some((state.values.clone(), state.obj_fixed));
        }
        return false;
    }

    let var = problem.order[depth];
    let branches = if problem.objective[var] > 0.0 {
        [1.0, 0.0]
    } else {
        [0.0, 1.0]
    };

    for value in branches {
        apply(problem, state, var, value);
        let viable = reachable(problem, state, var, config.tolerance)
            && can_improve(state, config.tolerance);
        let aborted = if viable {
            dfs(problem, state, config, depth + 1)
        } else {
            false
        };
        undo(problem, state, var, value);
        if aborted {
            return true;
        }
    }
    false
}

fn apply(problem: &Problem, state: &mut State, var: VarId, value: f64) {
    let c = problem.objective[var];
    if c > 0.0 {
        state.obj_pos_rem -= c;
    }
    state.obj_fixed += c * value;
    state.values[var] = value;

    for &(ci, coeff) in &problem.var_constraints[var] {
        if coeff > 0.0 {
            state.pos_rem[ci] -= coeff;
        } else {
            state.neg_rem[ci] -= coeff;
        }
        state.fixed[ci] += coeff * value;
    }
}

fn undo(problem: &Problem, state: &mut State, var: VarId, value: f64) {
    let c = problem.objective[var];
    if c > 0.0 {
        state.obj_pos_rem += c;
    }
    state.obj_fixed -= c * value;

    for &(ci, coeff) in &problem.var_constraints[var] {
        if coeff > 0.0 {
            state.pos_rem[ci] += coeff;
        } else {
            state.neg_rem[ci] += coeff;
        }
        state.fixed[ci] -= coeff * value;
    }
}

/// Interval reachability for the constraints touched by the last decision:
/// over all completions of the undecided variables, the lhs ranges over
/// `[fixed + neg_rem, fixed + pos_rem]`; prune when the target is outside.
fn reachable(problem: &Problem, state: &State, var: VarId, tol: f64) -> bool {
    for &(ci, _) in &problem.var_constraints[var] {
        let min = state.fixed[ci] + state.neg_rem[ci];
        let max = state.fixed[ci] + state.pos_rem[ci];
        let rhs = problem.rhs[ci];
        let ok = match problem.senses[ci] {
            Sense::Le => min <= rhs + tol,
            Sense::Ge => max >= rhs - tol,
            Sense::Eq => min <= rhs + tol && max >= rhs - tol,
        };
        if !ok {
            return false;
        }
    }
    true
}

/// Optimistic bound: decided objective plus every undecided positive
/// coefficient. Prunes once an incumbent exists that the bound cannot beat.
fn can_improve(state: &State, tol: f64) -> bool {
    match &state.best {
        None => true,
        Some((_, best)) => state.obj_fixed + state.obj_pos_rem > *best + tol,
    }
}

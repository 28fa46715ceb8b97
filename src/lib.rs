//! Project portfolio selection and staffing.
//!
//! Selects a subset of candidate projects and assigns qualified team
//! members to them so aggregate benefit is maximized, subject to
//! capacity, skill, and concurrency constraints. The problem is
//! formulated as a pure-binary MIP and handed to a solver behind a
//! trait boundary.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Project`, `TeamMember`, `Catalog`,
//!   `Level` — with construction-time validation
//! - **`mip`**: Opaque binary MIP instance, the `MipSolver` adapter
//!   trait, and the bundled exact `BranchAndBoundSolver`
//! - **`planner`**: `ModelBuilder` (entities → instance), result
//!   interpretation (`DecisionReport`), and the `build_and_solve`
//!   pipeline
//!
//! # Example
//!
//! ```
//! use portfolio_select::models::{Catalog, Level, Project, TeamMember};
//! use portfolio_select::planner::build_and_solve;
//!
//! let cat = Catalog::reference();
//! let projects = vec![
//!     Project::new("ISS", 5.0, 80.0, ["Excel"], Level::BASIC, &cat).unwrap(),
//! ];
//! let members = vec![
//!     TeamMember::new("Bob", 140.0, ["Excel"], Level::INTERMEDIATE, &cat).unwrap(),
//! ];
//!
//! let report = build_and_solve(&projects, &members, None).unwrap();
//! assert_eq!(report.selected_projects, vec!["ISS"]);
//! ```
//!
//! # References
//!
//! - Wolsey (1998), "Integer Programming"
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"

pub mod mip;
pub mod models;
pub mod planner;

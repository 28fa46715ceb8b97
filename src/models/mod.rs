//! Portfolio domain models.
//!
//! Provides the core data types for describing a single-period project
//! selection and staffing problem: candidate projects, team members, and
//! the catalog of recognized skills and proficiency levels both are
//! validated against at construction time.
//!
//! # Domain Mappings
//!
//! | portfolio-select | IT portfolio | Consulting | R&D |
//! |------------------|--------------|------------|-----|
//! | Project | Automation initiative | Engagement | Study |
//! | TeamMember | Developer/Analyst | Consultant | Researcher |
//! | Catalog | Skill taxonomy | Practice areas | Disciplines |

mod catalog;
mod member;
mod project;
mod validate;

pub use catalog::{Catalog, Level};
pub use member::TeamMember;
pub use project::Project;
pub use validate::ValidationError;

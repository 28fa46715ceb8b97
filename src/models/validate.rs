//! Construction-time validation for domain entities.
//!
//! Entities are total: either every attribute passes these checks and a
//! fully formed value is returned, or construction fails with a
//! [`ValidationError`] naming the offending field. Nothing is coerced.

use std::collections::BTreeSet;

use thiserror::Error;

use super::{Catalog, Level};

/// An entity attribute violates the data-model invariants.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// A skill tag is not in the catalog's vocabulary.
    #[error("'{entity}': skill tag '{skill}' is not in the recognized vocabulary")]
    UnknownSkill { entity: String, skill: String },

    /// A proficiency level lies outside the catalog's scale.
    #[error("'{entity}': level {level} is outside the recognized scale")]
    LevelOutOfRange { entity: String, level: u8 },

    /// A numeric attribute is negative (or not a number).
    #[error("'{entity}': {field} must be non-negative, got {value}")]
    NegativeValue {
        entity: String,
        field: &'static str,
        value: f64,
    },
}

/// Rejects negative and NaN values.
pub(crate) fn check_non_negative(
    entity: &str,
    field: &'static str,
    value: f64,
) -> Result<(), ValidationError> {
    if value >= 0.0 {
        Ok(())
    } else {
        Err(ValidationError::NegativeValue {
            entity: entity.to_string(),
            field,
            value,
        })
    }
}

pub(crate) fn check_skills(
    entity: &str,
    skills: &BTreeSet<String>,
    catalog: &Catalog,
) -> Result<(), ValidationError> {
    for skill in skills {
        if !catalog.contains_skill(skill) {
            return Err(ValidationError::UnknownSkill {
                entity: entity.to_string(),
                skill: skill.clone(),
            });
        }
    }
    Ok(())
}

pub(crate) fn check_level(
    entity: &str,
    level: Level,
    catalog: &Catalog,
) -> Result<(), ValidationError> {
    if catalog.contains_level(level) {
        Ok(())
    } else {
        Err(ValidationError::LevelOutOfRange {
            entity: entity.to_string(),
            level: level.ordinal(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_negative() {
        assert!(check_non_negative("e", "benefit", 0.0).is_ok());
        assert!(check_non_negative("e", "benefit", 12.5).is_ok());

        let err = check_non_negative("e", "benefit", -1.0).unwrap_err();
        assert!(matches!(err, ValidationError::NegativeValue { field: "benefit", .. }));
    }

    #[test]
    fn test_nan_rejected() {
        assert!(check_non_negative("e", "effort", f64::NAN).is_err());
    }

    #[test]
    fn test_skill_vocabulary() {
        let cat = Catalog::reference();
        let ok: BTreeSet<String> = ["SQL".to_string()].into();
        assert!(check_skills("e", &ok, &cat).is_ok());

        let bad: BTreeSet<String> = ["SQL".to_string(), "Java".to_string()].into();
        let err = check_skills("e", &bad, &cat).unwrap_err();
        assert_eq!(
            err,
            ValidationError::UnknownSkill {
                entity: "e".into(),
                skill: "Java".into()
            }
        );
    }

    #[test]
    fn test_level_range() {
        let cat = Catalog::reference();
        assert!(check_level("e", Level::ADVANCED, &cat).is_ok());
        assert!(matches!(
            check_level("e", Level(4), &cat),
            Err(ValidationError::LevelOutOfRange { level: 4, .. })
        ));
    }
}

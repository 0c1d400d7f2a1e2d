//! Submission gate
//!
//! Aggregates required-field, positivity and stored-verdict checks into a
//! single allow/deny decision.

use crate::state::{FormFields, RegistrationForm};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Reason a submission was refused. The display text is shown in the alert.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("Please fill in all fields")]
    MissingFields,
    #[error("Years of experience must be positive")]
    NonPositiveExperience,
    #[error("Fix the highlighted errors")]
    InvalidFields,
}

/// An accepted registration, as emitted to the sink
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub id: Uuid,
    pub submitted_at: DateTime<Utc>,
    #[serde(flatten)]
    pub fields: FormFields,
}

pub struct SubmitGate;

impl SubmitGate {
    /// Decide whether the form may be submitted.
    ///
    /// Checks run in order: required fields, years positivity, stored errors.
    pub fn check(form: &RegistrationForm) -> Result<Submission, SubmitError> {
        let values = form.values();

        let full_name = values.full_name.trim();
        let years = values.years_experience.trim();
        let Some(years_value) = parse_number(years) else {
            return Err(SubmitError::MissingFields);
        };

        if full_name.is_empty()
            || values.username.is_empty()
            || values.password.is_empty()
            || values.specialization.is_empty()
            || values.description.trim().is_empty()
        {
            return Err(SubmitError::MissingFields);
        }

        if years_value <= 0.0 {
            return Err(SubmitError::NonPositiveExperience);
        }

        if form.has_errors() {
            return Err(SubmitError::InvalidFields);
        }

        Ok(Submission {
            id: Uuid::new_v4(),
            submitted_at: Utc::now(),
            fields: FormFields {
                full_name: full_name.to_string(),
                years_experience: years.to_string(),
                ..values
            },
        })
    }
}

/// Value of a number field. Empty or malformed input has no value,
/// the same as a number input that reports "" for text it cannot parse.
fn parse_number(value: &str) -> Option<f64> {
    value.parse::<f64>().ok().filter(|n| n.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::FieldName;
    use pretty_assertions::assert_eq;

    fn valid_form() -> RegistrationForm {
        let mut form = RegistrationForm::new();
        form.set_value(FieldName::FullName, "  Ada Lovelace ");
        form.set_value(FieldName::Username, "ada1815");
        form.set_value(FieldName::Password, "Engine#42");
        form.set_value(FieldName::Specialization, "Backend");
        form.set_value(FieldName::YearsExperience, "3");
        form.set_value(FieldName::Description, &"a".repeat(150));
        form
    }

    #[test]
    fn test_valid_form_is_accepted_with_full_payload() {
        let form = valid_form();
        let submission = SubmitGate::check(&form).unwrap();
        assert_eq!(
            submission.fields,
            FormFields {
                full_name: "Ada Lovelace".to_string(),
                username: "ada1815".to_string(),
                password: "Engine#42".to_string(),
                specialization: "Backend".to_string(),
                years_experience: "3".to_string(),
                description: "a".repeat(150),
            }
        );
    }

    #[test]
    fn test_negative_years_rejected() {
        let mut form = valid_form();
        form.set_value(FieldName::YearsExperience, "-1");
        assert_eq!(
            SubmitGate::check(&form),
            Err(SubmitError::NonPositiveExperience)
        );
    }

    #[test]
    fn test_zero_years_rejected() {
        let mut form = valid_form();
        form.set_value(FieldName::YearsExperience, "0");
        assert_eq!(
            SubmitGate::check(&form),
            Err(SubmitError::NonPositiveExperience)
        );
    }

    #[test]
    fn test_unparseable_years_is_missing() {
        for years in ["1-2", "-", ".", "1.2.3"] {
            let mut form = valid_form();
            form.set_value(FieldName::YearsExperience, years);
            assert_eq!(
                SubmitGate::check(&form),
                Err(SubmitError::MissingFields),
                "years {years:?} should count as missing"
            );
        }
    }

    #[test]
    fn test_fractional_years_accepted() {
        let mut form = valid_form();
        form.set_value(FieldName::YearsExperience, "0.5");
        assert!(SubmitGate::check(&form).is_ok());
    }

    #[test]
    fn test_each_missing_field_rejected() {
        for name in FieldName::ALL {
            let mut form = valid_form();
            form.field_mut(name).clear();
            assert_eq!(
                SubmitGate::check(&form),
                Err(SubmitError::MissingFields),
                "clearing {} should block submission",
                name.key()
            );
        }
    }

    #[test]
    fn test_whitespace_only_name_is_missing() {
        let mut form = valid_form();
        form.set_value(FieldName::FullName, "   ");
        assert_eq!(SubmitGate::check(&form), Err(SubmitError::MissingFields));
    }

    #[test]
    fn test_whitespace_only_description_is_missing() {
        let mut form = valid_form();
        form.set_value(FieldName::Description, &" ".repeat(150));
        assert_eq!(SubmitGate::check(&form), Err(SubmitError::MissingFields));
    }

    #[test]
    fn test_missing_fields_checked_before_positivity() {
        let mut form = valid_form();
        form.set_value(FieldName::YearsExperience, "-1");
        form.set_value(FieldName::FullName, "");
        assert_eq!(SubmitGate::check(&form), Err(SubmitError::MissingFields));
    }

    #[test]
    fn test_stored_errors_block_submission() {
        let mut form = valid_form();
        form.set_value(FieldName::Password, "weakpass");
        assert_eq!(SubmitGate::check(&form), Err(SubmitError::InvalidFields));
    }

    #[test]
    fn test_short_description_blocks_submission() {
        let mut form = valid_form();
        form.set_value(FieldName::Description, "too short");
        assert_eq!(SubmitGate::check(&form), Err(SubmitError::InvalidFields));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            SubmitError::MissingFields.to_string(),
            "Please fill in all fields"
        );
        assert_eq!(
            SubmitError::NonPositiveExperience.to_string(),
            "Years of experience must be positive"
        );
        assert_eq!(
            SubmitError::InvalidFields.to_string(),
            "Fix the highlighted errors"
        );
    }

    #[test]
    fn test_submission_serializes_flat() {
        let submission = SubmitGate::check(&valid_form()).unwrap();
        let json = serde_json::to_value(&submission).unwrap();
        assert_eq!(json["username"], "ada1815");
        assert_eq!(json["specialization"], "Backend");
        assert!(json.get("submittedAt").is_some());
        assert!(json.get("id").is_some());
    }
}

//! Validation and normalization of raw form values.

use std::fmt;
use thiserror::Error;

use super::models::{AddSslCertificateDto, CertificateFormValues, NO_CHANNEL};

const WARNING_THRESHOLD_BOUNDS: (i32, i32) = (1, 365);
const EXPIRY_THRESHOLD_BOUNDS: (i32, i32) = (1, 30);
const CHECK_INTERVAL_BOUNDS: (i32, i32) = (1, 30);

/// A single field failing validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    #[error("This field is required")]
    Required,
    #[error("Must be an integer between {min} and {max}")]
    OutOfRange { min: i32, max: i32 },
}

/// Every failing field of one validation pass, in form order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationErrors {
    errors: Vec<(&'static str, FieldError)>,
}

impl ValidationErrors {
    fn push(&mut self, field: &'static str, error: FieldError) {
        self.errors.push((field, error));
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn field(&self, field: &str) -> Option<&FieldError> {
        self.errors
            .iter()
            .find(|(name, _)| *name == field)
            .map(|(_, error)| error)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &FieldError)> {
        self.errors.iter().map(|(field, error)| (*field, error))
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, (field, error)) in self.errors.iter().enumerate() {
            if index > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{field}: {error}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

fn bounded_int(raw: &str, (min, max): (i32, i32)) -> Result<i32, FieldError> {
    match raw.trim().parse::<i32>() {
        Ok(value) if (min..=max).contains(&value) => Ok(value),
        // Non-numeric input fails the same way as an out-of-bounds value.
        _ => Err(FieldError::OutOfRange { min, max }),
    }
}

impl CertificateFormValues {
    /// Checks every field and either returns the normalized creation payload
    /// or the full set of field errors.
    pub fn validate(&self) -> Result<AddSslCertificateDto, ValidationErrors> {
        let mut errors = ValidationErrors::default();

        let domain = self.domain.trim();
        if domain.is_empty() {
            errors.push("domain", FieldError::Required);
        }

        let warning_threshold =
            match bounded_int(&self.warning_threshold, WARNING_THRESHOLD_BOUNDS) {
                Ok(value) => Some(value),
                Err(error) => {
                    errors.push("warning_threshold", error);
                    None
                }
            };

        let expiry_threshold = match bounded_int(&self.expiry_threshold, EXPIRY_THRESHOLD_BOUNDS) {
            Ok(value) => Some(value),
            Err(error) => {
                errors.push("expiry_threshold", error);
                None
            }
        };

        let check_interval = if self.check_interval.trim().is_empty() {
            Some(None)
        } else {
            match bounded_int(&self.check_interval, CHECK_INTERVAL_BOUNDS) {
                Ok(value) => Some(Some(value)),
                Err(error) => {
                    errors.push("check_interval", error);
                    None
                }
            }
        };

        match (warning_threshold, expiry_threshold, check_interval) {
            (Some(warning_threshold), Some(expiry_threshold), Some(check_interval))
                if errors.is_empty() =>
            {
                Ok(AddSslCertificateDto {
                    domain: domain.to_string(),
                    warning_threshold,
                    expiry_threshold,
                    notification_channel: self.selected_channel().unwrap_or_default(),
                    check_interval,
                })
            }
            _ => Err(errors),
        }
    }

    /// The channel id chosen in the selector, with the "none" sentinel and
    /// blank input both meaning no selection.
    pub fn selected_channel(&self) -> Option<String> {
        let raw = self.notification_channel.trim();
        if raw.is_empty() || raw == NO_CHANNEL {
            None
        } else {
            Some(raw.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_values() -> CertificateFormValues {
        CertificateFormValues {
            domain: "example.com".to_string(),
            ..CertificateFormValues::default()
        }
    }

    #[test]
    fn default_values_with_a_domain_pass() {
        let dto = valid_values().validate().unwrap();

        assert_eq!(dto.domain, "example.com");
        assert_eq!(dto.warning_threshold, 30);
        assert_eq!(dto.expiry_threshold, 7);
        assert_eq!(dto.check_interval, Some(1));
        assert_eq!(dto.notification_channel, "");
    }

    #[test]
    fn empty_domain_is_required_regardless_of_other_fields() {
        let mut values = valid_values();
        values.domain = "   ".to_string();

        let errors = values.validate().unwrap_err();
        assert_eq!(errors.field("domain"), Some(&FieldError::Required));
    }

    #[test]
    fn warning_threshold_boundaries() {
        for raw in ["1", "365"] {
            let mut values = valid_values();
            values.warning_threshold = raw.to_string();
            assert!(values.validate().is_ok(), "{raw} should be accepted");
        }

        for raw in ["0", "366"] {
            let mut values = valid_values();
            values.warning_threshold = raw.to_string();
            let errors = values.validate().unwrap_err();
            assert_eq!(
                errors.field("warning_threshold"),
                Some(&FieldError::OutOfRange { min: 1, max: 365 }),
                "{raw} should be rejected"
            );
        }
    }

    #[test]
    fn expiry_threshold_boundaries() {
        for raw in ["1", "30"] {
            let mut values = valid_values();
            values.expiry_threshold = raw.to_string();
            assert!(values.validate().is_ok(), "{raw} should be accepted");
        }

        for raw in ["0", "31"] {
            let mut values = valid_values();
            values.expiry_threshold = raw.to_string();
            let errors = values.validate().unwrap_err();
            assert_eq!(
                errors.field("expiry_threshold"),
                Some(&FieldError::OutOfRange { min: 1, max: 30 }),
                "{raw} should be rejected"
            );
        }
    }

    #[test]
    fn non_numeric_threshold_fails_as_out_of_range() {
        let mut values = valid_values();
        values.warning_threshold = "soon".to_string();

        let errors = values.validate().unwrap_err();
        assert_eq!(
            errors.field("warning_threshold"),
            Some(&FieldError::OutOfRange { min: 1, max: 365 })
        );
    }

    #[test]
    fn empty_check_interval_submits_as_absent() {
        let mut values = valid_values();
        values.check_interval = String::new();

        let dto = values.validate().unwrap();
        assert_eq!(dto.check_interval, None);
    }

    #[test]
    fn check_interval_is_bounded_when_present() {
        let mut values = valid_values();
        values.check_interval = "31".to_string();

        let errors = values.validate().unwrap_err();
        assert_eq!(
            errors.field("check_interval"),
            Some(&FieldError::OutOfRange { min: 1, max: 30 })
        );
    }

    #[test]
    fn none_sentinel_normalizes_to_empty_channel_reference() {
        let mut values = valid_values();
        values.notification_channel = "none".to_string();
        assert_eq!(values.validate().unwrap().notification_channel, "");

        values.notification_channel = "ch_42".to_string();
        assert_eq!(values.validate().unwrap().notification_channel, "ch_42");
    }

    #[test]
    fn all_failing_fields_are_reported_together() {
        let values = CertificateFormValues {
            domain: String::new(),
            warning_threshold: "0".to_string(),
            expiry_threshold: "31".to_string(),
            notification_channel: "none".to_string(),
            check_interval: "daily".to_string(),
        };

        let errors = values.validate().unwrap_err();
        assert_eq!(errors.len(), 4);
        assert!(errors.field("domain").is_some());
        assert!(errors.field("warning_threshold").is_some());
        assert!(errors.field("expiry_threshold").is_some());
        assert!(errors.field("check_interval").is_some());
    }
}

//! Local signup validation.
//!
//! The signup form never reaches the network with an invalid payload: every
//! rule here runs before the request is built, and the first violation blocks
//! the submit entirely.

use crate::error::ApiError;
use crate::models::{Role, SignupRequest};

/// The professions a service provider can register under.
pub const VALID_PROFESSIONS: [&str; 8] = [
    "Fitness Instructor",
    "Yoga Instructor",
    "Chiropractor",
    "Boxing Trainer",
    "Dance Instructor",
    "Singing Coach",
    "Meditation Coach",
    "Nutrition Coach",
];

/// Raw signup form state, exactly as the user typed it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SignupForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub confirm_password: String,
    pub location: String,
    pub role: Option<Role>,
    pub profession: String,
    pub experience_years: i32,
    pub hourly_rate: f64,
    pub bio: String,
}

impl SignupForm {
    /// Validate and convert into the wire request.
    ///
    /// Identity fields are trimmed; the password is sent verbatim. Provider
    /// fields are included only for the service-provider role.
    pub fn into_request(self) -> Result<SignupRequest, ApiError> {
        if self.password != self.confirm_password {
            return Err(ApiError::validation("Passwords do not match"));
        }
        if self.password.len() < 8 {
            return Err(ApiError::validation(
                "Password must be at least 8 characters",
            ));
        }

        let required = [
            (self.first_name.trim(), "first name"),
            (self.last_name.trim(), "last name"),
            (self.email.trim(), "email"),
            (self.phone.trim(), "phone"),
            (self.location.trim(), "location"),
        ];
        for (value, label) in required {
            if value.is_empty() {
                return Err(ApiError::validation(format!("Please enter your {label}")));
            }
        }

        let role = self.role.unwrap_or(Role::User);
        let provider_fields = match role {
            Role::User => (None, None, None, None),
            Role::ServiceProvider => {
                let profession = self.profession.trim();
                if !VALID_PROFESSIONS.contains(&profession) {
                    return Err(ApiError::validation("Please select your profession"));
                }
                if self.experience_years < 0 {
                    return Err(ApiError::validation("Experience years cannot be negative"));
                }
                if self.hourly_rate <= 0.0 {
                    return Err(ApiError::validation("Hourly rate must be greater than 0"));
                }
                let bio = self.bio.trim();
                (
                    Some(profession.to_string()),
                    Some(self.experience_years as u32),
                    Some(self.hourly_rate),
                    (!bio.is_empty()).then(|| bio.to_string()),
                )
            }
        };
        let (profession, experience_years, hourly_rate, bio) = provider_fields;

        Ok(SignupRequest {
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            password: self.password,
            location: self.location.trim().to_string(),
            role,
            profession,
            experience_years,
            hourly_rate,
            bio,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn customer_form() -> SignupForm {
        SignupForm {
            first_name: "Nabila".into(),
            last_name: "Islam".into(),
            email: "nabila@example.com".into(),
            phone: "+880123".into(),
            password: "longenough".into(),
            confirm_password: "longenough".into(),
            location: "Dhaka".into(),
            role: Some(Role::User),
            ..Default::default()
        }
    }

    fn provider_form() -> SignupForm {
        SignupForm {
            role: Some(Role::ServiceProvider),
            profession: "Boxing Trainer".into(),
            experience_years: 3,
            hourly_rate: 20.0,
            bio: "  Ring-side coach  ".into(),
            ..customer_form()
        }
    }

    #[test]
    fn test_valid_customer_signup() {
        let request = customer_form().into_request().unwrap();
        assert_eq!(request.role, Role::User);
        assert!(request.profession.is_none());
        assert!(request.bio.is_none());
    }

    #[test]
    fn test_valid_provider_signup_trims_bio() {
        let request = provider_form().into_request().unwrap();
        assert_eq!(request.profession.as_deref(), Some("Boxing Trainer"));
        assert_eq!(request.experience_years, Some(3));
        assert_eq!(request.bio.as_deref(), Some("Ring-side coach"));
    }

    #[test]
    fn test_seven_char_password_is_rejected() {
        let mut form = customer_form();
        form.password = "short12".into();
        form.confirm_password = "short12".into();

        let err = form.into_request().unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));
        assert!(err.to_string().contains("at least 8"));
    }

    #[test]
    fn test_mismatched_confirmation_is_rejected() {
        let mut form = customer_form();
        form.confirm_password = "different1".into();

        let err = form.into_request().unwrap_err();
        assert!(err.to_string().contains("do not match"));
    }

    #[test]
    fn test_blank_identity_field_is_rejected() {
        let mut form = customer_form();
        form.phone = "   ".into();

        let err = form.into_request().unwrap_err();
        assert!(err.to_string().contains("phone"));
    }

    #[test]
    fn test_provider_without_profession_is_rejected() {
        let mut form = provider_form();
        form.profession = String::new();

        let err = form.into_request().unwrap_err();
        assert!(err.to_string().contains("profession"));
    }

    #[test]
    fn test_unknown_profession_is_rejected() {
        let mut form = provider_form();
        form.profession = "Juggling Mentor".into();

        assert!(form.into_request().is_err());
    }

    #[test]
    fn test_provider_zero_rate_is_rejected() {
        let mut form = provider_form();
        form.hourly_rate = 0.0;

        let err = form.into_request().unwrap_err();
        assert!(err.to_string().contains("Hourly rate"));
    }

    #[test]
    fn test_provider_negative_experience_is_rejected() {
        let mut form = provider_form();
        form.experience_years = -1;

        assert!(form.into_request().is_err());
    }

    #[test]
    fn test_customer_ignores_provider_rules() {
        // A customer signup with an untouched (zero) rate must pass.
        let mut form = customer_form();
        form.hourly_rate = 0.0;

        assert!(form.into_request().is_ok());
    }
}

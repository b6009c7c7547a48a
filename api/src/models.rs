//! Wire models for the TrainerHub REST backend.
//!
//! Every endpoint wraps its payload in the same envelope:
//!
//! ```json
//! { "success": true, "message": "...", "data": { ... } }
//! ```
//!
//! Field names follow the backend's camelCase convention; MongoDB-style ids
//! arrive as `_id`.

use serde::{Deserialize, Serialize};
use store::AuthTokens;

/// Standard backend response envelope.
#[derive(Clone, Debug, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Envelope<T> {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub data: Option<T>,
}

/// One ranked hit from the provider search endpoint. Immutable snapshot of a
/// single response; never mutated client-side.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderSummary {
    #[serde(rename = "_id")]
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub profession: String,
    /// Rate as formatted by the backend (it sends a string, not a number).
    pub hourly_rate: String,
    pub location: String,
}

impl ProviderSummary {
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Account role, as the backend spells it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "USER")]
    User,
    #[serde(rename = "SERVICE_PROVIDER")]
    ServiceProvider,
}

/// The authenticated user's profile, as returned by the login endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    #[serde(rename = "_id")]
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub role: Role,
}

impl UserInfo {
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Payload of a successful `/auth/login` response.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct LoginData {
    pub user: UserInfo,
    #[serde(flatten)]
    pub tokens: AuthTokens,
}

/// One entry from the categories endpoint.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Category {
    pub name: String,
    /// Number of providers registered under this category.
    pub total: u64,
}

/// Body of `POST /users/create`. Provider-only fields are omitted entirely
/// for customer signups.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub location: String,
    pub role: Role,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profession: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub experience_years: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hourly_rate: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_envelope_deserializes() {
        let raw = r#"{
            "success": true,
            "data": [{
                "_id": "65ab12",
                "firstName": "Rafi",
                "lastName": "Chowdhury",
                "profession": "Nutrition Coach",
                "hourlyRate": "25",
                "location": "Dhaka"
            }]
        }"#;

        let envelope: Envelope<Vec<ProviderSummary>> = serde_json::from_str(raw).unwrap();
        assert!(envelope.success);
        let hits = envelope.data.unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "65ab12");
        assert_eq!(hits[0].display_name(), "Rafi Chowdhury");
        assert_eq!(hits[0].hourly_rate, "25");
    }

    #[test]
    fn test_failure_envelope_without_data() {
        let raw = r#"{ "success": false, "message": "Invalid credentials" }"#;
        let envelope: Envelope<LoginData> = serde_json::from_str(raw).unwrap();
        assert!(!envelope.success);
        assert_eq!(envelope.message.as_deref(), Some("Invalid credentials"));
        assert!(envelope.data.is_none());
    }

    #[test]
    fn test_login_data_flattens_tokens() {
        let raw = r#"{
            "user": {
                "_id": "u1",
                "firstName": "Nabila",
                "lastName": "Islam",
                "email": "nabila@example.com",
                "phone": "+880123",
                "role": "USER"
            },
            "accessToken": "acc",
            "refreshToken": "ref"
        }"#;

        let data: LoginData = serde_json::from_str(raw).unwrap();
        assert_eq!(data.user.role, Role::User);
        assert_eq!(data.tokens.access_token, "acc");
        assert_eq!(data.tokens.refresh_token, "ref");
    }

    #[test]
    fn test_signup_request_skips_provider_fields_for_customers() {
        let request = SignupRequest {
            first_name: "Mithila".into(),
            last_name: "Roy".into(),
            email: "mithila@example.com".into(),
            phone: "+880456".into(),
            password: "longenough".into(),
            location: "Chittagong".into(),
            role: Role::User,
            profession: None,
            experience_years: None,
            hourly_rate: None,
            bio: None,
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["role"], "USER");
        assert_eq!(json["firstName"], "Mithila");
        assert!(json.get("profession").is_none());
        assert!(json.get("hourlyRate").is_none());
    }

    #[test]
    fn test_signup_request_includes_provider_fields() {
        let request = SignupRequest {
            first_name: "Arif".into(),
            last_name: "Hasan".into(),
            email: "arif@example.com".into(),
            phone: "+880789".into(),
            password: "longenough".into(),
            location: "Sylhet".into(),
            role: Role::ServiceProvider,
            profession: Some("Yoga Instructor".into()),
            experience_years: Some(4),
            hourly_rate: Some(18.5),
            bio: Some("Certified instructor".into()),
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["role"], "SERVICE_PROVIDER");
        assert_eq!(json["profession"], "Yoga Instructor");
        assert_eq!(json["experienceYears"], 4);
        assert_eq!(json["hourlyRate"], 18.5);
    }
}

use serde::{Deserialize, Serialize};

/// Authenticated user profile, persisted under the `user` storage key
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    #[serde(default)]
    pub roles: Vec<String>,
}

impl User {
    pub fn display_name(&self) -> String {
        let full = format!("{} {}", self.first_name, self.last_name);
        let full = full.trim();
        if full.is_empty() {
            self.username.clone()
        } else {
            full.to_string()
        }
    }
}

/// Body returned by /auth/login and /auth/register
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub token: String,
    #[serde(rename = "type", default)]
    pub token_type: Option<String>,
    pub id: i64,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub company_name: Option<String>,
    #[serde(default)]
    pub roles: Vec<String>,
}

impl AuthResponse {
    /// Split into (token, profile)
    pub fn into_parts(self) -> (String, User) {
        let user = User {
            id: self.id,
            username: self.username,
            email: self.email,
            first_name: self.first_name,
            last_name: self.last_name,
            company_name: self.company_name,
            roles: self.roles,
        };
        (self.token, user)
    }
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct ForgotPasswordRequest {
    pub email: String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ResetPasswordRequest {
    pub token: String,
    pub new_password: String,
}

/// `{"message": ..}` / `{"error": ..}` bodies of the password endpoints
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl MessageResponse {
    pub fn text(&self) -> Option<&str> {
        self.message.as_deref().or(self.error.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_response_split() {
        let json = r#"{
            "token": "eyJhbGciOi",
            "type": "Bearer",
            "id": 7,
            "username": "jdoe",
            "email": "jdoe@acme.test",
            "firstName": "John",
            "lastName": "Doe",
            "companyName": "Acme Corp",
            "roles": ["ROLE_USER"]
        }"#;
        let response: AuthResponse = serde_json::from_str(json).unwrap();
        let (token, user) = response.into_parts();
        assert_eq!(token, "eyJhbGciOi");
        assert_eq!(user.id, 7);
        assert_eq!(user.company_name.as_deref(), Some("Acme Corp"));
        assert_eq!(user.display_name(), "John Doe");
    }

    #[test]
    fn test_register_omits_empty_optionals() {
        let request = RegisterRequest {
            username: "jdoe".into(),
            email: "jdoe@acme.test".into(),
            password: "secret123".into(),
            first_name: "John".into(),
            last_name: "Doe".into(),
            phone_number: None,
            company_name: Some("Acme".into()),
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["firstName"], "John");
        assert_eq!(value["companyName"], "Acme");
        assert!(value.get("phoneNumber").is_none());
    }

    #[test]
    fn test_message_response_prefers_message() {
        let body: MessageResponse = serde_json::from_str(r#"{"error":"Invalid token"}"#).unwrap();
        assert_eq!(body.text(), Some("Invalid token"));
    }
}

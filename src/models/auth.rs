use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub token: String,
    #[serde(default)]
    pub cambio_password_requerido: bool,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    pub new_password: String,
    pub confirm_password: String,
}

/// Cuerpo de las respuestas no-2xx del API: `{ "error": "..." }`
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_response_flag_defaults_to_false() {
        let response: LoginResponse = serde_json::from_str(r#"{"token":"a.b.c"}"#).unwrap();
        assert_eq!(response.token, "a.b.c");
        assert!(!response.cambio_password_requerido);

        let response: LoginResponse =
            serde_json::from_str(r#"{"token":"a.b.c","cambioPasswordRequerido":true}"#).unwrap();
        assert!(response.cambio_password_requerido);
    }

    #[test]
    fn change_password_request_uses_camel_case() {
        let body = serde_json::to_value(ChangePasswordRequest {
            new_password: "nueva-clave".into(),
            confirm_password: "nueva-clave".into(),
        })
        .unwrap();
        assert_eq!(body["newPassword"], "nueva-clave");
        assert_eq!(body["confirmPassword"], "nueva-clave");
    }
}

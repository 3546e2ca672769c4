// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// NO tiene lógica de negocio: arma la URL, añade `Authorization: Bearer` si
// hay token y traduce respuestas no-2xx a ApiError.
// ============================================================================

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use crate::config::CONFIG;
use crate::models::auth::ApiErrorBody;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("Error de red: {0}")]
    Network(String),
    /// 401. El mensaje del backend, si lo hay
    #[error("No autorizado")]
    Unauthorized(Option<String>),
    #[error("HTTP {status}")]
    Http { status: u16, message: Option<String> },
    #[error("Respuesta inválida: {0}")]
    Parse(String),
}

impl ApiError {
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized(_))
    }

    /// Mensaje para mostrar en línea: el `error` del backend o `fallback`
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Unauthorized(Some(message)) | ApiError::Http { message: Some(message), .. } => {
                message.clone()
            }
            ApiError::Network(detail) => format!("{} ({})", fallback, detail),
            _ => fallback.to_string(),
        }
    }

    /// Construye el error a partir del status y el cuerpo crudo de la respuesta
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<ApiErrorBody>(body)
            .ok()
            .and_then(|b| b.error)
            .filter(|m| !m.trim().is_empty());
        if status == 401 {
            ApiError::Unauthorized(message)
        } else {
            ApiError::Http { status, message }
        }
    }
}

/// Cliente API - SOLO comunicación HTTP (stateless)
#[derive(Clone, Debug)]
pub struct ApiClient {
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    /// Cliente sin credencial (login, endpoints públicos)
    pub fn new() -> Self {
        Self {
            base_url: CONFIG.api_base_url.clone(),
            token: None,
        }
    }

    /// Cliente que envía `Authorization: Bearer <token>`
    pub fn with_token(token: &str) -> Self {
        Self {
            token: Some(token.to_string()),
            ..Self::new()
        }
    }

    pub fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
            None => builder,
        }
    }

    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let builder = self.authorize(Request::get(&self.url(path)));
        let response = builder
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::parse(Self::check(response).await?).await
    }

    pub async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let response = self.send_with_body(Request::post(&self.url(path)), body).await?;
        Self::parse(response).await
    }

    pub async fn put_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let response = self.send_with_body(Request::put(&self.url(path)), body).await?;
        Self::parse(response).await
    }

    /// POST cuyo cuerpo de respuesta no interesa
    pub async fn post_discard<B: Serialize>(&self, path: &str, body: &B) -> Result<(), ApiError> {
        self.send_with_body(Request::post(&self.url(path)), body)
            .await
            .map(|_| ())
    }

    /// PUT cuyo cuerpo de respuesta no interesa
    pub async fn put_discard<B: Serialize>(&self, path: &str, body: &B) -> Result<(), ApiError> {
        self.send_with_body(Request::put(&self.url(path)), body)
            .await
            .map(|_| ())
    }

    /// POST sin cuerpo (acciones como cancelar una entrada)
    pub async fn post_empty(&self, path: &str) -> Result<(), ApiError> {
        self.send_empty(Request::post(&self.url(path))).await
    }

    /// PUT sin cuerpo (confirmar un festival)
    pub async fn put_empty(&self, path: &str) -> Result<(), ApiError> {
        self.send_empty(Request::put(&self.url(path))).await
    }

    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.send_empty(Request::delete(&self.url(path))).await
    }

    async fn send_empty(&self, builder: RequestBuilder) -> Result<(), ApiError> {
        let response = self
            .authorize(builder)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::check(response).await.map(|_| ())
    }

    async fn send_with_body<B: Serialize>(
        &self,
        builder: RequestBuilder,
        body: &B,
    ) -> Result<Response, ApiError> {
        let request = self
            .authorize(builder)
            .json(body)
            .map_err(|e| ApiError::Parse(format!("Serialization error: {}", e)))?;
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::check(response).await
    }

    async fn check(response: Response) -> Result<Response, ApiError> {
        if response.ok() {
            return Ok(response);
        }
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        let error = ApiError::from_status(status, &body);
        log::warn!("⚠️ [API] {} {} -> {}", status, response.url(), error);
        Err(error)
    }

    async fn parse<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_error_message_is_preferred() {
        let error = ApiError::from_status(409, r#"{"error":"El festival ya está publicado"}"#);
        assert_eq!(
            error,
            ApiError::Http {
                status: 409,
                message: Some("El festival ya está publicado".into())
            }
        );
        assert_eq!(error.user_message("Error al guardar"), "El festival ya está publicado");
    }

    #[test]
    fn missing_or_invalid_body_falls_back() {
        for body in ["", "<html>502</html>", r#"{"error":""}"#, r#"{"mensaje":"x"}"#] {
            let error = ApiError::from_status(500, body);
            assert_eq!(error.user_message("Error al cargar"), "Error al cargar");
        }
    }

    #[test]
    fn status_401_is_unauthorized() {
        let error = ApiError::from_status(401, r#"{"error":"Token expirado"}"#);
        assert!(error.is_unauthorized());
        assert_eq!(error.user_message("x"), "Token expirado");
        assert!(!ApiError::from_status(403, "").is_unauthorized());
    }

    #[test]
    fn bearer_client_keeps_base_url() {
        let client = ApiClient::with_token("abc");
        assert_eq!(client.url("/promotor/festivales"), format!("{}/promotor/festivales", CONFIG.api_base_url));
        assert_eq!(client.token.as_deref(), Some("abc"));
        assert_eq!(ApiClient::new().token, None);
    }
}

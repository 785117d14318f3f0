use serde::de::DeserializeOwned;
use validator::ValidationError;

use crate::constants::{INVALID_RESPONSE_ERROR, UNKNOWN_ERROR};
use crate::shared_hangman_game::ErrorDetail;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClientError {
    /// Rejected locally, nothing was sent.
    #[error("{0}")]
    Validation(String),
    /// The server answered with a non-success status.
    #[error("{message}")]
    Remote { status: u16, message: String },
    /// The server could not be reached or its answer could not be read.
    #[error("{message}")]
    Transport { message: String },
}

impl ClientError {
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport { message: message.into() }
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport { .. })
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Remote { status: 404, .. })
    }
}

impl From<ValidationError> for ClientError {
    fn from(err: ValidationError) -> Self {
        let message = err
            .message
            .map(|m| m.into_owned())
            .unwrap_or_else(|| err.code.into_owned());
        Self::Validation(message)
    }
}

/// Raw HTTP answer handed back by a transport.
#[derive(Debug, Clone, PartialEq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Decodes a success body, or turns a failure body into a remote error.
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T, ClientError> {
        if !self.is_success() {
            let message = serde_json::from_str::<ErrorDetail>(&self.body)
                .ok()
                .and_then(ErrorDetail::into_message)
                .unwrap_or_else(|| UNKNOWN_ERROR.to_string());
            return Err(ClientError::Remote { status: self.status, message });
        }

        serde_json::from_str(&self.body).map_err(|e| {
            log::warn!("unparsable response body ({}): {}", self.status, e);
            ClientError::transport(INVALID_RESPONSE_ERROR)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared_hangman_game::GameSnapshot;

    fn response(status: u16, body: &str) -> RawResponse {
        RawResponse { status, body: body.to_string() }
    }

    #[test]
    fn test_remote_error_uses_detail() {
        let err = response(400, r#"{"detail":"Letra já foi tentada"}"#)
            .decode::<GameSnapshot>()
            .unwrap_err();
        assert_eq!(err, ClientError::Remote { status: 400, message: "Letra já foi tentada".to_string() });
        assert!(!err.is_transport());
    }

    #[test]
    fn test_remote_error_falls_back_to_generic_message() {
        let err = response(500, "<html>oops</html>").decode::<GameSnapshot>().unwrap_err();
        assert_eq!(err.to_string(), UNKNOWN_ERROR);

        let err = response(502, "{}").decode::<GameSnapshot>().unwrap_err();
        assert_eq!(err.to_string(), UNKNOWN_ERROR);
    }

    #[test]
    fn test_unparsable_success_is_transport() {
        let err = response(200, "not json").decode::<GameSnapshot>().unwrap_err();
        assert!(err.is_transport());
    }

    #[test]
    fn test_not_found_detection() {
        let err = response(404, r#"{"detail":"Jogo não encontrado"}"#).decode::<GameSnapshot>().unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "Jogo não encontrado");
    }

    #[test]
    fn test_validation_error_message() {
        let mut err = ValidationError::new("empty_word");
        assert_eq!(ClientError::from(err.clone()), ClientError::Validation("empty_word".to_string()));
        err.message = Some("Digite uma palavra!".into());
        assert_eq!(ClientError::from(err).to_string(), "Digite uma palavra!");
    }
}

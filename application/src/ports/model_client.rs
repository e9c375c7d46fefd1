//! Model client port
//!
//! Defines the interface for the hosted text-generation model.

use async_trait::async_trait;
use std::sync::Arc;
use textnext_domain::{GenerationConfig, Model, RawModelResponse, SafetySettings};
use thiserror::Error;

/// Error reported by the provider.
///
/// Only the message is exposed. Callers classify it with
/// [`textnext_domain::classify_error`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ProviderError {
    message: String,
}

impl ProviderError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Client for the external generation model
///
/// One call is in flight at a time. Retries, backoff and timeouts are not
/// part of this contract.
#[async_trait]
pub trait ModelClient: Send + Sync {
    /// The model this client talks to
    fn model(&self) -> &Model;

    /// Send one generation request
    async fn generate(
        &self,
        prompt: &str,
        config: &GenerationConfig,
        safety: &SafetySettings,
    ) -> Result<RawModelResponse, ProviderError>;
}

/// Result of the one-time model initialization.
///
/// Built once at startup and handed to the use case. `Unavailable` is
/// permanent for the process lifetime.
pub enum ModelHandle<C: ModelClient + ?Sized> {
    Ready(Arc<C>),
    Unavailable { reason: String },
}

impl<C: ModelClient + ?Sized> ModelHandle<C> {
    pub fn ready(client: Arc<C>) -> Self {
        ModelHandle::Ready(client)
    }

    pub fn unavailable(reason: impl Into<String>) -> Self {
        ModelHandle::Unavailable {
            reason: reason.into(),
        }
    }

    /// Build from an initialization result
    pub fn from_init<E: std::fmt::Display>(result: Result<C, E>) -> Self
    where
        C: Sized,
    {
        match result {
            Ok(client) => ModelHandle::Ready(Arc::new(client)),
            Err(e) => ModelHandle::unavailable(e.to_string()),
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, ModelHandle::Ready(_))
    }

    pub fn client(&self) -> Option<&Arc<C>> {
        match self {
            ModelHandle::Ready(client) => Some(client),
            ModelHandle::Unavailable { .. } => None,
        }
    }

    pub fn unavailable_reason(&self) -> Option<&str> {
        match self {
            ModelHandle::Ready(_) => None,
            ModelHandle::Unavailable { reason } => Some(reason),
        }
    }
}

impl<C: ModelClient + ?Sized> Clone for ModelHandle<C> {
    fn clone(&self) -> Self {
        match self {
            ModelHandle::Ready(client) => ModelHandle::Ready(Arc::clone(client)),
            ModelHandle::Unavailable { reason } => ModelHandle::Unavailable {
                reason: reason.clone(),
            },
        }
    }
}

impl<C: ModelClient + ?Sized> std::fmt::Debug for ModelHandle<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ModelHandle::Ready(client) => f
                .debug_tuple("Ready")
                .field(&client.model().as_str())
                .finish(),
            ModelHandle::Unavailable { reason } => f
                .debug_struct("Unavailable")
                .field("reason", reason)
                .finish(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct StaticClient(Model);

    #[async_trait]
    impl ModelClient for StaticClient {
        fn model(&self) -> &Model {
            &self.0
        }

        async fn generate(
            &self,
            _prompt: &str,
            _config: &GenerationConfig,
            _safety: &SafetySettings,
        ) -> Result<RawModelResponse, ProviderError> {
            Ok(RawModelResponse::from_text("ok"))
        }
    }

    #[test]
    fn test_provider_error_display() {
        let err = ProviderError::new("429 quota exceeded");
        assert_eq!(err.to_string(), "429 quota exceeded");
        assert_eq!(err.message(), "429 quota exceeded");
    }

    #[test]
    fn test_from_init_ok() {
        let handle = ModelHandle::from_init(Ok::<_, String>(StaticClient(Model::GeminiPro)));
        assert!(handle.is_ready());
        assert_eq!(handle.unavailable_reason(), None);
        assert_eq!(handle.client().unwrap().model(), &Model::GeminiPro);
    }

    #[test]
    fn test_from_init_err() {
        let handle: ModelHandle<StaticClient> =
            ModelHandle::from_init(Err("no candidate model answered"));
        assert!(!handle.is_ready());
        assert!(handle.client().is_none());
        assert_eq!(
            handle.unavailable_reason(),
            Some("no candidate model answered")
        );
    }

    #[test]
    fn test_dyn_handle() {
        let client: Arc<dyn ModelClient> = Arc::new(StaticClient(Model::Gemini10Pro));
        let handle: ModelHandle<dyn ModelClient> = ModelHandle::ready(client);
        assert!(format!("{:?}", handle).contains("gemini-1.0-pro"));
    }
}

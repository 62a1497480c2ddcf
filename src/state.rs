//! Global application state

use std::sync::Arc;

use leptos::prelude::*;

use crate::auth::Session;
use crate::generate::{GenerationService, MockGenerator};

/// Base URLs of the three document services. One value for the whole app;
/// every page reads the same configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Endpoints {
    pub doc_processor: String,
    pub embedder: String,
    pub rag: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            doc_processor: "http://localhost:8002".to_string(),
            embedder: "http://localhost:8003".to_string(),
            rag: "http://localhost:8004".to_string(),
        }
    }
}

impl Endpoints {
    pub fn process_url(&self) -> String {
        format!("{}/docprocessor/process", self.doc_processor)
    }

    pub fn embed_url(&self) -> String {
        format!("{}/embedder/embed", self.embedder)
    }

    pub fn rag_url(&self) -> String {
        format!("{}/rag-service/rag", self.rag)
    }
}

/// Global application state, provided as context at the root
#[derive(Clone)]
pub struct AppState {
    /// The client session (auth flag + stored user)
    pub session: Session,
    /// Document service base URLs
    pub endpoints: Endpoints,
    /// Generation backend for notes, questions, flashcards, and friends
    pub generator: Arc<dyn GenerationService>,
    /// Premium flag. There is no billing integration; this starts false
    /// and stays false until one exists.
    pub premium: RwSignal<bool>,
}

impl AppState {
    pub fn new() -> Self {
        Self::with_endpoints(Endpoints::default())
    }

    pub fn with_endpoints(endpoints: Endpoints) -> Self {
        Self {
            session: Session::browser(),
            endpoints,
            generator: Arc::new(MockGenerator::default()),
            premium: RwSignal::new(false),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_endpoints() {
        let endpoints = Endpoints::default();
        assert_eq!(
            endpoints.process_url(),
            "http://localhost:8002/docprocessor/process"
        );
        assert_eq!(endpoints.embed_url(), "http://localhost:8003/embedder/embed");
        assert_eq!(endpoints.rag_url(), "http://localhost:8004/rag-service/rag");
    }

    #[test]
    fn test_endpoints_are_overridable() {
        let endpoints = Endpoints {
            doc_processor: "https://docs.example.com".to_string(),
            embedder: "https://embed.example.com".to_string(),
            rag: "https://rag.example.com".to_string(),
        };
        assert_eq!(
            endpoints.rag_url(),
            "https://rag.example.com/rag-service/rag"
        );
    }
}

//! HTTP client for the document services
//!
//! Three calls, treated as fixed contracts: extract text from an uploaded
//! file, embed extracted text under a session id, and answer a query
//! against the embedded vectors. Failures are surfaced to the caller;
//! nothing here retries.

use gloo_net::http::Request;
use web_sys::FormData;

use crate::types::{EmbedRequest, EmbedResponse, ExtractResponse, RagRequest, RagResponse};

/// Error from any of the document service calls
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("network error reaching {service}: {message}")]
    Network {
        service: &'static str,
        message: String,
    },
    #[error("{service} request failed with status {status}")]
    Status { service: &'static str, status: u16 },
    #[error("failed to decode {service} response: {message}")]
    Decode {
        service: &'static str,
        message: String,
    },
}

async fn decode<T: serde::de::DeserializeOwned>(
    service: &'static str,
    resp: gloo_net::http::Response,
) -> Result<T, ApiError> {
    if !resp.ok() {
        return Err(ApiError::Status {
            service,
            status: resp.status(),
        });
    }
    resp.json::<T>().await.map_err(|e| ApiError::Decode {
        service,
        message: e.to_string(),
    })
}

/// Extract text from a document via multipart upload
pub async fn extract_text(url: &str, file: &web_sys::File) -> Result<String, ApiError> {
    let service = "document processor";

    let form = FormData::new().map_err(|_| ApiError::Network {
        service,
        message: "could not build form data".to_string(),
    })?;
    form.append_with_blob_and_filename("file", file, &file.name())
        .map_err(|_| ApiError::Network {
            service,
            message: "could not attach file".to_string(),
        })?;

    let resp = Request::post(url)
        .body(form)
        .map_err(|e| ApiError::Network {
            service,
            message: e.to_string(),
        })?
        .send()
        .await
        .map_err(|e| ApiError::Network {
            service,
            message: e.to_string(),
        })?;

    let extracted: ExtractResponse = decode(service, resp).await?;
    Ok(extracted.text)
}

/// Embed extracted text under a session id, returning the vector id
pub async fn embed_text(url: &str, text: &str, session_id: &str) -> Result<String, ApiError> {
    let service = "embedder";
    let body = EmbedRequest {
        text: text.to_string(),
        session_id: session_id.to_string(),
    };

    let resp = Request::post(url)
        .json(&body)
        .map_err(|e| ApiError::Network {
            service,
            message: e.to_string(),
        })?
        .send()
        .await
        .map_err(|e| ApiError::Network {
            service,
            message: e.to_string(),
        })?;

    let embedded: EmbedResponse = decode(service, resp).await?;
    Ok(embedded.vector_id)
}

/// Ask the RAG service a question against the collected vector ids
pub async fn retrieve_answer(
    url: &str,
    query: &str,
    session_ids: &[String],
) -> Result<RagResponse, ApiError> {
    let service = "RAG service";
    let body = RagRequest {
        query: query.to_string(),
        session_ids: session_ids.to_vec(),
    };

    let resp = Request::post(url)
        .json(&body)
        .map_err(|e| ApiError::Network {
            service,
            message: e.to_string(),
        })?
        .send()
        .await
        .map_err(|e| ApiError::Network {
            service,
            message: e.to_string(),
        })?;

    decode(service, resp).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_messages_name_the_service() {
        let err = ApiError::Status {
            service: "embedder",
            status: 502,
        };
        assert_eq!(err.to_string(), "embedder request failed with status 502");

        let err = ApiError::Network {
            service: "RAG service",
            message: "connection refused".to_string(),
        };
        assert!(err.to_string().contains("RAG service"));
        assert!(err.to_string().contains("connection refused"));
    }

    #[test]
    fn test_rag_request_serializes_expected_shape() {
        let body = RagRequest {
            query: "what is photosynthesis".to_string(),
            session_ids: vec!["vec-1".to_string(), "vec-2".to_string()],
        };
        let json = serde_json::to_value(&body).expect("should serialize");
        assert_eq!(json["query"], "what is photosynthesis");
        assert_eq!(json["session_ids"].as_array().map(|a| a.len()), Some(2));
    }

    #[test]
    fn test_embed_request_serializes_expected_shape() {
        let body = EmbedRequest {
            text: "chapter one".to_string(),
            session_id: "session-abc".to_string(),
        };
        let json = serde_json::to_value(&body).expect("should serialize");
        assert_eq!(json["text"], "chapter one");
        assert_eq!(json["session_id"], "session-abc");
    }
}

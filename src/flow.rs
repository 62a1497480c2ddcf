//! Wizard flow controller
//!
//! Every feature page drives the same forward-only machine:
//! intro -> input -> chat or result. One controller owns the stage, the
//! upload queue, the embedded documents, and the chat transcript; pages
//! contribute markup and settings. Going back means remounting the page,
//! which builds a fresh flow (and a fresh session id).

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::state::Endpoints;
use crate::types::{DocumentRef, Message, UploadItem};

/// Stage of a feature flow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Stage {
    #[default]
    Intro,
    Input,
    Chat,
    Result,
}

/// What the input stage of a page offers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Capabilities {
    pub upload: bool,
    pub text_input: bool,
    pub settings: bool,
    pub chat: bool,
}

/// Per-page flow configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlowConfig {
    pub capabilities: Capabilities,
    /// Documents required before chat unlocks
    pub min_documents: usize,
}

impl FlowConfig {
    /// Single-document chat: one upload, straight into chat
    pub fn single_doc() -> Self {
        Self {
            capabilities: Capabilities {
                upload: true,
                chat: true,
                ..Default::default()
            },
            min_documents: 1,
        }
    }

    /// Multi-document chat: chat unlocks at two embedded documents
    pub fn multi_doc() -> Self {
        Self {
            capabilities: Capabilities {
                upload: true,
                chat: true,
                ..Default::default()
            },
            min_documents: 2,
        }
    }
}

/// State machine for one page visit. Clone is cheap; signals are shared.
#[derive(Clone)]
pub struct DocFlow {
    config: FlowConfig,
    endpoints: Endpoints,
    /// Minted once per flow and reused for every embed call in it
    session_id: String,
    pub stage: RwSignal<Stage>,
    pub queue: RwSignal<Vec<UploadItem>>,
    pub documents: RwSignal<Vec<DocumentRef>>,
    pub messages: RwSignal<Vec<Message>>,
    pub analyzing: RwSignal<bool>,
}

impl DocFlow {
    pub fn new(endpoints: Endpoints, config: FlowConfig) -> Self {
        Self {
            config,
            endpoints,
            session_id: uuid::Uuid::new_v4().to_string(),
            stage: RwSignal::new(Stage::Intro),
            queue: RwSignal::new(vec![]),
            documents: RwSignal::new(vec![]),
            messages: RwSignal::new(vec![]),
            analyzing: RwSignal::new(false),
        }
    }

    pub fn config(&self) -> FlowConfig {
        self.config
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    /// Intro -> Input
    pub fn begin(&self) {
        self.stage.set(Stage::Input);
    }

    /// Input -> Result (generator pages)
    pub fn show_result(&self) {
        self.stage.set(Stage::Result);
    }

    /// True once enough documents are embedded for chat
    pub fn ready_for_chat(&self) -> bool {
        self.documents.with(|docs| docs.len() >= self.config.min_documents)
    }

    /// Input -> Chat, seeding the transcript with a welcome message.
    /// Ignored on flows whose capability set has no chat stage.
    pub fn start_chat(&self) {
        if !self.config.capabilities.chat {
            tracing::warn!("start_chat on a flow without chat capability");
            return;
        }
        let welcome = self.documents.with(|docs| match docs.as_slice() {
            [only] => format!(
                "\u{1F44B} Hi! I've processed {}. What would you like to know about it?",
                only.file_name
            ),
            many => format!(
                "\u{1F44B} Hi! I'm ready to help you analyze {} documents. What would you like to know?",
                many.len()
            ),
        });
        self.messages.set(vec![Message::bot(welcome)]);
        self.stage.set(Stage::Chat);
    }

    /// Vector ids to send with retrieval queries
    pub fn vector_ids(&self) -> Vec<String> {
        self.documents
            .with(|docs| docs.iter().map(|d| d.vector_id.clone()).collect())
    }

    /// Queue an upload entry at progress 0
    pub fn begin_upload(&self, file_name: &str) -> uuid::Uuid {
        let item = UploadItem::new(file_name);
        let id = item.id;
        self.queue.update(|q| q.push(item));
        id
    }

    /// Extraction finished; entry moves to 50%
    pub fn extraction_done(&self, id: uuid::Uuid) {
        self.queue.update(|q| {
            if let Some(item) = q.iter_mut().find(|i| i.id == id) {
                item.progress = 50;
            }
        });
    }

    /// Embedding finished; entry hits 100%, leaves the queue, and the
    /// document joins the ready list. Single-document flows go straight
    /// to chat.
    pub fn embedding_done(&self, id: uuid::Uuid, size_bytes: f64, vector_id: String) {
        let Some(item) = self.queue.with(|q| q.iter().find(|i| i.id == id).cloned()) else {
            tracing::warn!("embedding finished for unknown upload entry {}", id);
            return;
        };
        self.queue.update(|q| {
            if let Some(entry) = q.iter_mut().find(|i| i.id == id) {
                entry.progress = 100;
            }
        });
        self.documents.update(|docs| {
            docs.push(DocumentRef {
                file_name: item.file_name,
                size_bytes,
                vector_id,
            });
        });
        self.queue.update(|q| q.retain(|i| i.id != id));

        if self.config.capabilities.chat && self.config.min_documents == 1 && self.ready_for_chat()
        {
            self.start_chat();
        }
    }

    /// Extraction or embedding failed: drop the queue entry and append
    /// exactly one error message. The flow stays alive.
    pub fn upload_failed(&self, id: uuid::Uuid, detail: impl Into<String>) {
        self.queue.update(|q| q.retain(|i| i.id != id));
        let detail = detail.into();
        tracing::error!("upload failed: {}", detail);
        self.messages
            .update(|m| m.push(Message::error(format!("Error processing file: {}", detail))));
    }

    /// Remove a ready document; its vector id goes with it
    pub fn remove_document(&self, index: usize) {
        self.documents.update(|docs| {
            if index < docs.len() {
                docs.remove(index);
            }
        });
    }

    /// Run the extract/embed pipeline for one selected file. Flows
    /// without upload capability drop the file.
    pub fn ingest(&self, file: web_sys::File) {
        if !self.config.capabilities.upload {
            tracing::warn!("ingest on a flow without upload capability");
            return;
        }
        let flow = self.clone();
        let id = flow.begin_upload(&file.name());
        spawn_local(async move {
            let size = file.size();
            let text = match api::extract_text(&flow.endpoints.process_url(), &file).await {
                Ok(text) => text,
                Err(e) => {
                    flow.upload_failed(id, e.to_string());
                    return;
                }
            };
            flow.extraction_done(id);

            match api::embed_text(&flow.endpoints.embed_url(), &text, &flow.session_id).await {
                Ok(vector_id) => flow.embedding_done(id, size, vector_id),
                Err(e) => flow.upload_failed(id, e.to_string()),
            }
        });
    }

    /// Append the user's question and ask the RAG service. The analyzing
    /// flag disables the send control for the duration; there is no
    /// retry, cancellation, or timeout. Returns false when the query was
    /// not accepted (blank, or a request already in flight) so callers
    /// keep the typed text.
    pub fn send(&self, query: String) -> bool {
        if !self.config.capabilities.chat
            || query.trim().is_empty()
            || self.analyzing.get_untracked()
        {
            return false;
        }
        self.messages.update(|m| m.push(Message::user(&query)));
        self.analyzing.set(true);

        let flow = self.clone();
        spawn_local(async move {
            let ids = flow.vector_ids();
            match api::retrieve_answer(&flow.endpoints.rag_url(), &query, &ids).await {
                Ok(answer) => flow.messages.update(|m| m.push(Message::answer(answer))),
                Err(e) => {
                    tracing::error!("retrieval failed: {}", e);
                    flow.messages.update(|m| {
                        m.push(Message::error(format!(
                            "Error generating response: {}",
                            e
                        )))
                    });
                }
            }
            flow.analyzing.set(false);
        });
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::MessageKind;

    fn single_doc_flow() -> DocFlow {
        DocFlow::new(Endpoints::default(), FlowConfig::single_doc())
    }

    fn multi_doc_flow() -> DocFlow {
        DocFlow::new(Endpoints::default(), FlowConfig::multi_doc())
    }

    #[test]
    fn test_flow_starts_at_intro() {
        let flow = single_doc_flow();
        assert_eq!(flow.stage.get_untracked(), Stage::Intro);
        flow.begin();
        assert_eq!(flow.stage.get_untracked(), Stage::Input);
    }

    #[test]
    fn test_session_id_is_stable_for_the_flow() {
        let flow = multi_doc_flow();
        let id = flow.session_id().to_string();
        flow.begin_upload("a.pdf");
        flow.begin_upload("b.pdf");
        assert_eq!(flow.session_id(), id);
    }

    #[test]
    fn test_upload_progress_stages() {
        let flow = multi_doc_flow();
        let id = flow.begin_upload("report.pdf");
        assert_eq!(flow.queue.get_untracked()[0].progress, 0);

        flow.extraction_done(id);
        assert_eq!(flow.queue.get_untracked()[0].progress, 50);

        flow.embedding_done(id, 1024.0, "vec-1".to_string());
        // Entry leaves the queue; document is ready with its vector id
        assert!(flow.queue.get_untracked().is_empty());
        let docs = flow.documents.get_untracked();
        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0].file_name, "report.pdf");
        assert_eq!(docs[0].vector_id, "vec-1");
    }

    #[test]
    fn test_failure_removes_entry_and_appends_one_error() {
        let flow = multi_doc_flow();
        let id = flow.begin_upload("broken.pdf");
        flow.upload_failed(id, "embedder request failed with status 500");

        assert!(flow.queue.get_untracked().is_empty());
        let messages = flow.messages.get_untracked();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].kind, MessageKind::Error);
        // Other queued uploads are untouched
        assert!(flow.documents.get_untracked().is_empty());
    }

    #[test]
    fn test_single_doc_auto_starts_chat_with_welcome() {
        let flow = single_doc_flow();
        let id = flow.begin_upload("thesis.pdf");
        flow.extraction_done(id);
        flow.embedding_done(id, 2048.0, "vec-9".to_string());

        assert_eq!(flow.stage.get_untracked(), Stage::Chat);
        let messages = flow.messages.get_untracked();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].kind, MessageKind::Bot);
        assert!(messages[0].text().contains("thesis.pdf"));
    }

    #[test]
    fn test_multi_doc_requires_two_documents() {
        let flow = multi_doc_flow();
        let first = flow.begin_upload("a.pdf");
        flow.embedding_done(first, 10.0, "vec-a".to_string());
        assert!(!flow.ready_for_chat());
        assert_eq!(flow.stage.get_untracked(), Stage::Intro);

        let second = flow.begin_upload("b.pdf");
        flow.embedding_done(second, 20.0, "vec-b".to_string());
        assert!(flow.ready_for_chat());
        // Multi-doc waits for the explicit start button
        assert_ne!(flow.stage.get_untracked(), Stage::Chat);

        flow.start_chat();
        assert_eq!(flow.stage.get_untracked(), Stage::Chat);
        assert!(flow.messages.get_untracked()[0].text().contains("2 documents"));
    }

    #[test]
    fn test_remove_document_drops_paired_vector_id() {
        let flow = multi_doc_flow();
        for (name, vec) in [("a.pdf", "vec-a"), ("b.pdf", "vec-b"), ("c.pdf", "vec-c")] {
            let id = flow.begin_upload(name);
            flow.embedding_done(id, 1.0, vec.to_string());
        }
        flow.remove_document(1);

        assert_eq!(
            flow.vector_ids(),
            vec!["vec-a".to_string(), "vec-c".to_string()]
        );
    }

    #[test]
    fn test_send_ignores_empty_input() {
        let flow = single_doc_flow();
        assert!(!flow.send("   ".to_string()));
        assert!(flow.messages.get_untracked().is_empty());
        assert!(!flow.analyzing.get_untracked());
    }

    #[test]
    fn test_send_refused_while_request_in_flight() {
        let flow = single_doc_flow();
        flow.analyzing.set(true);
        // The caller keeps the typed text when this returns false
        assert!(!flow.send("what does chapter two cover?".to_string()));
        assert!(flow.messages.get_untracked().is_empty());
    }

    fn generator_flow() -> DocFlow {
        DocFlow::new(
            Endpoints::default(),
            FlowConfig {
                capabilities: Capabilities {
                    upload: true,
                    text_input: true,
                    settings: true,
                    chat: false,
                },
                min_documents: 1,
            },
        )
    }

    #[test]
    fn test_chatless_flow_refuses_chat_operations() {
        let flow = generator_flow();
        assert!(!flow.send("hello".to_string()));
        flow.start_chat();
        assert_eq!(flow.stage.get_untracked(), Stage::Intro);
        assert!(flow.messages.get_untracked().is_empty());
    }

    #[test]
    fn test_chatless_flow_stays_put_after_embedding() {
        let flow = generator_flow();
        let id = flow.begin_upload("doc.pdf");
        flow.embedding_done(id, 1.0, "vec-1".to_string());
        assert_eq!(flow.documents.get_untracked().len(), 1);
        assert_eq!(flow.stage.get_untracked(), Stage::Intro);
    }
}

//! Shared types for the AuroraDocs frontend and the document services it calls

use serde::{Deserialize, Serialize};

/// User record persisted alongside the session flag
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredUser {
    pub name: String,
    pub email: String,
}

/// Response from the document processor
#[derive(Debug, Clone, Deserialize)]
pub struct ExtractResponse {
    pub text: String,
}

/// Request body for the embedder
#[derive(Debug, Clone, Serialize)]
pub struct EmbedRequest {
    pub text: String,
    pub session_id: String,
}

/// Response from the embedder
#[derive(Debug, Clone, Deserialize)]
pub struct EmbedResponse {
    pub vector_id: String,
}

/// Request body for the RAG service
#[derive(Debug, Clone, Serialize)]
pub struct RagRequest {
    pub query: String,
    pub session_ids: Vec<String>,
}

/// Answer from the RAG service, with optional supporting snippets
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RagResponse {
    pub response: String,
    #[serde(default)]
    pub context_docs: Vec<String>,
}

/// Who (or what) produced a chat message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    User,
    Bot,
    Error,
}

/// Body of a chat message: plain text or a structured answer
#[derive(Debug, Clone, PartialEq)]
pub enum MessageBody {
    Text(String),
    Answer(RagResponse),
}

/// A single entry in a chat transcript. Append-only; render order is
/// append order.
#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub id: String,
    pub kind: MessageKind,
    pub body: MessageBody,
}

impl Message {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            kind: MessageKind::User,
            body: MessageBody::Text(content.into()),
        }
    }

    pub fn bot(content: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            kind: MessageKind::Bot,
            body: MessageBody::Text(content.into()),
        }
    }

    pub fn answer(answer: RagResponse) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            kind: MessageKind::Bot,
            body: MessageBody::Answer(answer),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            kind: MessageKind::Error,
            body: MessageBody::Text(content.into()),
        }
    }

    /// Response text for answers, raw text otherwise
    pub fn text(&self) -> &str {
        match &self.body {
            MessageBody::Text(t) => t,
            MessageBody::Answer(a) => &a.response,
        }
    }

    /// Supporting snippets, empty for plain messages
    pub fn sources(&self) -> &[String] {
        match &self.body {
            MessageBody::Text(_) => &[],
            MessageBody::Answer(a) => &a.context_docs,
        }
    }
}

/// A file moving through the extract/embed pipeline. Progress is staged:
/// 0 on selection, 50 after extraction, 100 after embedding. The entry is
/// removed from the queue on completion or failure.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadItem {
    pub id: uuid::Uuid,
    pub file_name: String,
    pub progress: u8,
}

impl UploadItem {
    pub fn new(file_name: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4(),
            file_name: file_name.into(),
            progress: 0,
        }
    }
}

/// An embedded document ready for retrieval
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentRef {
    pub file_name: String,
    pub size_bytes: f64,
    pub vector_id: String,
}

/// Summarization mode for the notes generator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NoteMode {
    #[default]
    Detailed,
    Executive,
    CheatSheet,
}

impl NoteMode {
    pub fn label(&self) -> &'static str {
        match self {
            NoteMode::Detailed => "Detailed",
            NoteMode::Executive => "Executive Summary",
            NoteMode::CheatSheet => "Cheat Sheet",
        }
    }

    pub fn from_value(value: &str) -> Self {
        match value {
            "executive" => NoteMode::Executive,
            "cheatsheet" => NoteMode::CheatSheet,
            _ => NoteMode::Detailed,
        }
    }

    pub fn value(&self) -> &'static str {
        match self {
            NoteMode::Detailed => "detailed",
            NoteMode::Executive => "executive",
            NoteMode::CheatSheet => "cheatsheet",
        }
    }
}

/// Settings for the notes generator
#[derive(Debug, Clone, PartialEq)]
pub struct NoteSettings {
    pub mode: NoteMode,
    pub include_headings: bool,
    pub include_bullet_points: bool,
    pub include_examples: bool,
}

impl Default for NoteSettings {
    fn default() -> Self {
        Self {
            mode: NoteMode::Detailed,
            include_headings: true,
            include_bullet_points: true,
            include_examples: true,
        }
    }
}

/// Generated study notes
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedNotes {
    pub mode: NoteMode,
    pub markdown: String,
}

/// Question difficulty
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }

    pub fn from_value(value: &str) -> Self {
        match value {
            "easy" => Difficulty::Easy,
            "hard" => Difficulty::Hard,
            _ => Difficulty::Medium,
        }
    }

    /// The form value; `from_value` is its inverse
    pub fn value(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

/// Question paper settings: which formats to include, how many questions,
/// and the percentage split between formats
#[derive(Debug, Clone, PartialEq)]
pub struct QuestionSettings {
    pub mcq: bool,
    pub fill_in_blanks: bool,
    pub descriptive: bool,
    pub difficulty: Difficulty,
    pub total_questions: u32,
    pub mcq_share: u32,
    pub fill_share: u32,
    pub descriptive_share: u32,
}

impl Default for QuestionSettings {
    fn default() -> Self {
        Self {
            mcq: true,
            fill_in_blanks: false,
            descriptive: false,
            difficulty: Difficulty::Medium,
            total_questions: 10,
            mcq_share: 60,
            fill_share: 20,
            descriptive_share: 20,
        }
    }
}

/// Question format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionKind {
    Mcq,
    FillInBlanks,
    Descriptive,
}

/// One generated question. `options` is empty for non-MCQ formats.
#[derive(Debug, Clone, PartialEq)]
pub struct Question {
    pub kind: QuestionKind,
    pub prompt: String,
    pub options: Vec<String>,
    pub answer: String,
}

/// Settings for the flashcard generator
#[derive(Debug, Clone, PartialEq)]
pub struct FlashcardSettings {
    pub card_count: u32,
}

impl Default for FlashcardSettings {
    fn default() -> Self {
        Self { card_count: 10 }
    }
}

/// One flashcard
#[derive(Debug, Clone, PartialEq)]
pub struct Flashcard {
    pub front: String,
    pub back: String,
}

/// A node in a generated mindmap
#[derive(Debug, Clone, PartialEq)]
pub struct MindmapNode {
    pub label: String,
    pub children: Vec<MindmapNode>,
}

/// A subscription tier shown in the pricing modal
#[derive(Debug, Clone, PartialEq)]
pub struct Plan {
    pub name: &'static str,
    pub price: &'static str,
    pub features: &'static [&'static str],
    pub popular: bool,
    pub button_text: &'static str,
    pub disabled: bool,
}

/// The three static tiers. Basic is the current plan and cannot be selected.
pub fn plan_catalog() -> Vec<Plan> {
    vec![
        Plan {
            name: "Basic",
            price: "Free",
            features: &[
                "Chat with single document",
                "Basic question generation",
                "Limited translations",
                "Basic flashcards",
            ],
            popular: false,
            button_text: "Current Plan",
            disabled: true,
        },
        Plan {
            name: "Pro",
            price: "$9.99/mo",
            features: &[
                "All Basic features",
                "Unlimited notes generation",
                "Advanced question papers",
                "Unlimited translations",
                "Advanced flashcards",
                "Priority support",
            ],
            popular: true,
            button_text: "Get Started",
            disabled: false,
        },
        Plan {
            name: "Team",
            price: "$24.99/mo",
            features: &[
                "All Pro features",
                "5 team members",
                "Team collaboration",
                "Custom branding",
                "Analytics dashboard",
                "24/7 support",
            ],
            popular: false,
            button_text: "Contact Sales",
            disabled: false,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_constructors_set_kind() {
        assert_eq!(Message::user("hi").kind, MessageKind::User);
        assert_eq!(Message::bot("hello").kind, MessageKind::Bot);
        assert_eq!(Message::error("boom").kind, MessageKind::Error);
    }

    #[test]
    fn test_answer_message_exposes_sources() {
        let msg = Message::answer(RagResponse {
            response: "The answer".to_string(),
            context_docs: vec!["snippet one".to_string(), "snippet two".to_string()],
        });

        assert_eq!(msg.kind, MessageKind::Bot);
        assert_eq!(msg.text(), "The answer");
        assert_eq!(msg.sources().len(), 2);
    }

    #[test]
    fn test_plain_message_has_no_sources() {
        let msg = Message::bot("just text");
        assert!(msg.sources().is_empty());
    }

    #[test]
    fn test_upload_item_starts_at_zero() {
        let item = UploadItem::new("report.pdf");
        assert_eq!(item.progress, 0);
        assert_eq!(item.file_name, "report.pdf");
    }

    #[test]
    fn test_rag_response_decodes_without_context_docs() {
        let parsed: RagResponse =
            serde_json::from_str(r#"{"response": "plain answer"}"#).expect("should decode");
        assert_eq!(parsed.response, "plain answer");
        assert!(parsed.context_docs.is_empty());
    }

    #[test]
    fn test_note_mode_round_trip() {
        for mode in [NoteMode::Detailed, NoteMode::Executive, NoteMode::CheatSheet] {
            assert_eq!(NoteMode::from_value(mode.value()), mode);
        }
        // Unknown values fall back to detailed
        assert_eq!(NoteMode::from_value("unknown"), NoteMode::Detailed);
    }

    #[test]
    fn test_difficulty_round_trip() {
        for level in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
            assert_eq!(Difficulty::from_value(level.value()), level);
        }
        assert_eq!(Difficulty::from_value("unknown"), Difficulty::Medium);
    }

    #[test]
    fn test_question_settings_distribution_sums_to_100() {
        let settings = QuestionSettings::default();
        assert_eq!(
            settings.mcq_share + settings.fill_share + settings.descriptive_share,
            100
        );
    }

    #[test]
    fn test_plan_catalog_shape() {
        let plans = plan_catalog();
        assert_eq!(plans.len(), 3);
        assert_eq!(plans.iter().filter(|p| p.popular).count(), 1);
        // Only the current plan is unselectable
        assert!(plans[0].disabled);
        assert!(!plans[1].disabled);
        assert!(!plans[2].disabled);
    }
}

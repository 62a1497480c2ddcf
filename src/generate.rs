//! Generation backend
//!
//! One interface for every "generate" action: notes, mindmaps, question
//! papers, flashcards, translations, and lesson plans. Pages depend on
//! the trait only; the mock backend pauses for a configurable delay and
//! returns structured placeholder output. A remote backend can slot in
//! without touching any page.

use async_trait::async_trait;

use crate::types::{
    Flashcard, FlashcardSettings, GeneratedNotes, MindmapNode, NoteSettings, Question,
    QuestionKind, QuestionSettings,
};

/// Pluggable generation capability, one method per content type
#[async_trait(?Send)]
pub trait GenerationService: Send + Sync {
    async fn notes(&self, content: &str, settings: &NoteSettings) -> GeneratedNotes;
    async fn mindmap(&self, content: &str) -> MindmapNode;
    async fn questions(&self, content: &str, settings: &QuestionSettings) -> Vec<Question>;
    async fn flashcards(&self, content: &str, settings: &FlashcardSettings) -> Vec<Flashcard>;
    async fn translate(&self, content: &str, target_language: &str) -> String;
    async fn lesson_plan(&self, topic: &str) -> String;
}

/// Mock backend: simulated latency, canned but structured results
#[derive(Debug, Clone)]
pub struct MockGenerator {
    delay_ms: u32,
}

impl Default for MockGenerator {
    fn default() -> Self {
        Self { delay_ms: 2_000 }
    }
}

impl MockGenerator {
    pub fn with_delay(delay_ms: u32) -> Self {
        Self { delay_ms }
    }

    async fn pause(&self) {
        if self.delay_ms > 0 {
            gloo_timers::future::TimeoutFuture::new(self.delay_ms).await;
        }
    }
}

#[async_trait(?Send)]
impl GenerationService for MockGenerator {
    async fn notes(&self, content: &str, settings: &NoteSettings) -> GeneratedNotes {
        self.pause().await;
        GeneratedNotes {
            mode: settings.mode,
            markdown: sample_notes(content, settings),
        }
    }

    async fn mindmap(&self, content: &str) -> MindmapNode {
        self.pause().await;
        sample_mindmap(content)
    }

    async fn questions(&self, _content: &str, settings: &QuestionSettings) -> Vec<Question> {
        self.pause().await;
        sample_questions(settings)
    }

    async fn flashcards(&self, content: &str, settings: &FlashcardSettings) -> Vec<Flashcard> {
        self.pause().await;
        sample_flashcards(content, settings)
    }

    async fn translate(&self, content: &str, target_language: &str) -> String {
        self.pause().await;
        sample_translation(content, target_language)
    }

    async fn lesson_plan(&self, topic: &str) -> String {
        self.pause().await;
        sample_lesson_plan(topic)
    }
}

fn sample_notes(content: &str, settings: &NoteSettings) -> String {
    let topic = summarize_topic(content);
    let mut out = String::new();

    if settings.include_headings {
        out.push_str(&format!("# Study Notes: {}\n\n", topic));
        out.push_str("## Key Concepts\n\n");
    }
    if settings.include_bullet_points {
        out.push_str("- The central idea and why it matters\n");
        out.push_str("- Supporting definitions and terminology\n");
        out.push_str("- How the pieces relate to each other\n\n");
    } else {
        out.push_str(
            "The central idea, its supporting definitions, and how the pieces relate.\n\n",
        );
    }
    if settings.include_examples {
        out.push_str("## Examples\n\n");
        out.push_str("1. A worked example applying the concept\n");
        out.push_str("2. A common pitfall and how to avoid it\n");
    }
    out
}

fn sample_mindmap(content: &str) -> MindmapNode {
    let leaf = |label: &str| MindmapNode {
        label: label.to_string(),
        children: vec![],
    };
    MindmapNode {
        label: summarize_topic(content),
        children: vec![
            MindmapNode {
                label: "Core Concepts".to_string(),
                children: vec![leaf("Definitions"), leaf("Principles")],
            },
            MindmapNode {
                label: "Applications".to_string(),
                children: vec![leaf("Examples"), leaf("Case Studies")],
            },
            MindmapNode {
                label: "Review".to_string(),
                children: vec![leaf("Summary"), leaf("Practice Questions")],
            },
        ],
    }
}

/// Build a question set honoring the requested total and the percentage
/// split between enabled formats. Rounding remainders go to the first
/// enabled format.
pub fn sample_questions(settings: &QuestionSettings) -> Vec<Question> {
    let enabled: Vec<(QuestionKind, u32)> = [
        (QuestionKind::Mcq, settings.mcq, settings.mcq_share),
        (
            QuestionKind::FillInBlanks,
            settings.fill_in_blanks,
            settings.fill_share,
        ),
        (
            QuestionKind::Descriptive,
            settings.descriptive,
            settings.descriptive_share,
        ),
    ]
    .into_iter()
    .filter_map(|(kind, on, share)| on.then_some((kind, share)))
    .collect();

    if enabled.is_empty() || settings.total_questions == 0 {
        return vec![];
    }

    let share_total: u32 = enabled.iter().map(|(_, s)| s).sum::<u32>().max(1);
    let mut counts: Vec<(QuestionKind, u32)> = enabled
        .iter()
        .map(|(kind, share)| (*kind, settings.total_questions * share / share_total))
        .collect();
    let assigned: u32 = counts.iter().map(|(_, n)| n).sum();
    counts[0].1 += settings.total_questions - assigned;

    let mut questions = vec![];
    for (kind, count) in counts {
        for i in 1..=count {
            questions.push(sample_question(kind, i, settings.difficulty.label()));
        }
    }
    questions
}

fn sample_question(kind: QuestionKind, number: u32, difficulty: &str) -> Question {
    match kind {
        QuestionKind::Mcq => Question {
            kind,
            prompt: format!(
                "({difficulty}) Which statement best describes concept {number} from the syllabus?"
            ),
            options: vec![
                "It defines the core principle".to_string(),
                "It contradicts the main idea".to_string(),
                "It is an unrelated detail".to_string(),
                "It only applies to edge cases".to_string(),
            ],
            answer: "It defines the core principle".to_string(),
        },
        QuestionKind::FillInBlanks => Question {
            kind,
            prompt: format!(
                "({difficulty}) The process described in section {number} is known as ______."
            ),
            options: vec![],
            answer: "the key term from the syllabus".to_string(),
        },
        QuestionKind::Descriptive => Question {
            kind,
            prompt: format!(
                "({difficulty}) Explain topic {number} in your own words, citing one example."
            ),
            options: vec![],
            answer: "A model answer covering the definition and an example.".to_string(),
        },
    }
}

fn sample_flashcards(content: &str, settings: &FlashcardSettings) -> Vec<Flashcard> {
    let topic = summarize_topic(content);
    (1..=settings.card_count)
        .map(|i| Flashcard {
            front: format!("{}: key term {}", topic, i),
            back: format!("Definition and one-line explanation of key term {}.", i),
        })
        .collect()
}

fn sample_translation(content: &str, target_language: &str) -> String {
    format!(
        "[{}] {}",
        target_language,
        if content.trim().is_empty() {
            "Translated text goes here..."
        } else {
            content.trim()
        }
    )
}

fn sample_lesson_plan(topic: &str) -> String {
    format!(
        "Objective: Students will understand {topic}.\n\
         Materials: Whiteboard, printed diagram, worksheet.\n\
         Introduction: Open with a question that connects {topic} to everyday experience.\n\
         Main Content: Walk through the key ideas step by step with a diagram.\n\
         Activity: Students label the stages of the process on the diagram.\n\
         Assessment: Quick quiz covering the main ideas.\n\
         Homework: Write a paragraph on why {topic} matters."
    )
}

/// First few words of the supplied content, used to title mock output
fn summarize_topic(content: &str) -> String {
    let trimmed = content.trim();
    if trimmed.is_empty() {
        return "Your Topic".to_string();
    }
    let words: Vec<&str> = trimmed.split_whitespace().take(6).collect();
    let mut topic = words.join(" ");
    if trimmed.split_whitespace().count() > 6 {
        topic.push('\u{2026}');
    }
    topic
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Difficulty, NoteMode};

    #[test]
    fn test_questions_honor_total_and_distribution() {
        let settings = QuestionSettings {
            mcq: true,
            fill_in_blanks: true,
            descriptive: true,
            total_questions: 10,
            ..Default::default()
        };
        let questions = sample_questions(&settings);
        assert_eq!(questions.len(), 10);

        let mcq = questions.iter().filter(|q| q.kind == QuestionKind::Mcq).count();
        let fill = questions
            .iter()
            .filter(|q| q.kind == QuestionKind::FillInBlanks)
            .count();
        let desc = questions
            .iter()
            .filter(|q| q.kind == QuestionKind::Descriptive)
            .count();
        assert_eq!(mcq, 6);
        assert_eq!(fill, 2);
        assert_eq!(desc, 2);
    }

    #[test]
    fn test_questions_only_use_enabled_formats() {
        let settings = QuestionSettings {
            mcq: true,
            fill_in_blanks: false,
            descriptive: false,
            total_questions: 5,
            ..Default::default()
        };
        let questions = sample_questions(&settings);
        assert_eq!(questions.len(), 5);
        assert!(questions.iter().all(|q| q.kind == QuestionKind::Mcq));
    }

    #[test]
    fn test_no_enabled_format_yields_no_questions() {
        let settings = QuestionSettings {
            mcq: false,
            fill_in_blanks: false,
            descriptive: false,
            ..Default::default()
        };
        assert!(sample_questions(&settings).is_empty());
    }

    #[test]
    fn test_rounding_remainder_goes_to_first_enabled_format() {
        let settings = QuestionSettings {
            mcq: true,
            fill_in_blanks: true,
            descriptive: true,
            total_questions: 7,
            ..Default::default()
        };
        let questions = sample_questions(&settings);
        assert_eq!(questions.len(), 7);
    }

    #[test]
    fn test_mcq_questions_carry_options_and_answer() {
        let settings = QuestionSettings::default();
        let questions = sample_questions(&settings);
        let mcq = questions
            .iter()
            .find(|q| q.kind == QuestionKind::Mcq)
            .expect("default settings enable MCQ");
        assert_eq!(mcq.options.len(), 4);
        assert!(mcq.options.contains(&mcq.answer));
    }

    #[test]
    fn test_difficulty_appears_in_prompt() {
        let settings = QuestionSettings {
            difficulty: Difficulty::Hard,
            ..Default::default()
        };
        let questions = sample_questions(&settings);
        assert!(questions[0].prompt.contains("Hard"));
    }

    #[test]
    fn test_notes_respect_toggles() {
        let with_everything = sample_notes("Photosynthesis basics", &NoteSettings::default());
        assert!(with_everything.contains("# Study Notes"));
        assert!(with_everything.contains("- "));
        assert!(with_everything.contains("## Examples"));

        let bare = sample_notes(
            "Photosynthesis basics",
            &NoteSettings {
                mode: NoteMode::CheatSheet,
                include_headings: false,
                include_bullet_points: false,
                include_examples: false,
            },
        );
        assert!(!bare.contains('#'));
        assert!(!bare.contains("- "));
    }

    #[test]
    fn test_flashcard_count_matches_settings() {
        let cards = sample_flashcards("Data structures", &FlashcardSettings { card_count: 7 });
        assert_eq!(cards.len(), 7);
        assert!(cards.iter().all(|c| !c.back.is_empty()));
    }

    #[test]
    fn test_mindmap_has_root_and_children() {
        let map = sample_mindmap("Machine learning overview");
        assert!(map.label.contains("Machine learning"));
        assert!(!map.children.is_empty());
        assert!(map.children.iter().any(|c| !c.children.is_empty()));
    }

    #[test]
    fn test_translation_names_target_language() {
        let out = sample_translation("Hello world", "Hindi");
        assert!(out.starts_with("[Hindi]"));
        assert!(out.contains("Hello world"));
    }

    #[test]
    fn test_lesson_plan_mentions_topic() {
        let plan = sample_lesson_plan("photosynthesis");
        assert!(plan.contains("photosynthesis"));
        assert!(plan.contains("Objective:"));
        assert!(plan.contains("Homework:"));
    }

    #[test]
    fn test_topic_summary_truncates_long_content() {
        let long = "one two three four five six seven eight";
        let topic = summarize_topic(long);
        assert!(topic.starts_with("one two three four five six"));
        assert!(topic.ends_with('\u{2026}'));
        assert_eq!(summarize_topic("   "), "Your Topic");
    }
}

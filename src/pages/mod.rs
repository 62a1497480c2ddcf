//! Page components, one per feature

pub mod flashcards;
pub mod lesson_plan;
pub mod mindmap;
pub mod multi_doc;
pub mod notes;
pub mod profile;
pub mod questions;
pub mod sign_in;
pub mod sign_up;
pub mod single_doc;
pub mod translate;

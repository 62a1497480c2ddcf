//! Reusable UI components

pub mod chat_input;
pub mod chat_window;
pub mod intro;
pub mod loading;
pub mod pricing_modal;
pub mod progress;
pub mod sidebar;
pub mod uploader;

pub use chat_input::ChatInput;
pub use chat_window::ChatWindow;
pub use intro::{Feature, IntroHero};
pub use loading::{LoadingIndicator, PageLoader};
pub use pricing_modal::PricingModal;
pub use progress::ProgressBar;
pub use sidebar::Sidebar;
pub use uploader::FileUploader;

//! AuroraDocs - AI-powered document study assistant
//!
//! A Leptos frontend for chatting with documents and generating study
//! material (notes, mind maps, question papers, flashcards, translations
//! and lesson plans) backed by external processing services.

pub mod api;
pub mod auth;
pub mod components;
pub mod flow;
pub mod generate;
pub mod markdown;
pub mod pages;
pub mod state;
pub mod types;

use leptos::prelude::*;
use leptos_router::{
    components::{Outlet, ParentRoute, Redirect, Route, Router, Routes},
    path,
};

use components::Sidebar;
use pages::{
    flashcards::FlashcardsPage, lesson_plan::LessonPlanPage, mindmap::MindmapPage,
    multi_doc::MultiDocPage, notes::NotesPage, profile::ProfilePage, questions::QuestionsPage,
    sign_in::SignInPage, sign_up::SignUpPage, single_doc::SingleDocPage, translate::TranslatePage,
};
use state::AppState;

/// Main application component
#[component]
pub fn App() -> impl IntoView {
    let app_state = AppState::new();
    provide_context(app_state);

    view! {
        <Router>
            <main class="min-h-screen bg-gradient-to-br from-slate-950 via-purple-950/40 \
                         to-slate-950 text-slate-100">
                <Routes fallback=|| view! { <Redirect path="/signin" /> }>
                    <Route path=path!("/signin") view=SignInPage />
                    <Route path=path!("/signup") view=SignUpPage />
                    <ParentRoute path=path!("/") view=Shell>
                        <Route path=path!("") view=SingleDocPage />
                        <Route path=path!("multi-doc") view=MultiDocPage />
                        <Route path=path!("notes") view=NotesPage />
                        <Route path=path!("mindmap") view=MindmapPage />
                        <Route path=path!("questions") view=QuestionsPage />
                        <Route path=path!("flashcards") view=FlashcardsPage />
                        <Route path=path!("translate") view=TranslatePage />
                        <Route path=path!("lesson-plan") view=LessonPlanPage />
                        <Route path=path!("profile") view=ProfilePage />
                    </ParentRoute>
                </Routes>
            </main>
        </Router>
    }
}

/// Authenticated layout: sidebar plus the active page. Unauthenticated
/// visitors are bounced to the sign-in page.
#[component]
fn Shell() -> impl IntoView {
    let state = expect_context::<AppState>();
    let authenticated = state.session.is_authenticated();

    view! {
        <Show
            when=move || authenticated
            fallback=|| view! { <Redirect path="/signin" /> }
        >
            <div class="flex">
                <Sidebar />
                <div class="flex-1 min-h-screen overflow-y-auto">
                    <Outlet />
                </div>
            </div>
        </Show>
    }
}

//! Navigation sidebar

use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};

use crate::state::AppState;

const NAV_ITEMS: &[(&str, &str)] = &[
    ("Single Doc Chat", "/"),
    ("Multi Doc Chat", "/multi-doc"),
    ("Notes Generator", "/notes"),
    ("Mindmap Generator", "/mindmap"),
    ("Question Paper Generator", "/questions"),
    ("Flashcard Generator", "/flashcards"),
    ("Translate Notes", "/translate"),
    ("Lesson Plan Generator", "/lesson-plan"),
];

/// Persistent sidebar: brand, feature links with active highlight,
/// profile link, and sign-out
#[component]
pub fn Sidebar() -> impl IntoView {
    let state = expect_context::<AppState>();
    let location = use_location();
    let navigate = use_navigate();

    let sign_out = move |_| {
        state.session.sign_out();
        navigate("/signin", Default::default());
    };

    view! {
        <div class="relative w-[20%] h-screen flex flex-col text-[#dadada] overflow-hidden \
                    border-r border-white/10 bg-gradient-to-br from-black via-gray-950 to-black">
            <div class="relative z-10 flex items-center justify-center gap-1 px-6 py-5 \
                        font-extrabold text-3xl tracking-wide border-b border-white/10">
                <h2 class="bg-gradient-to-r from-blue-700 via-purple-700 to-emerald-700 \
                           bg-clip-text text-transparent">
                    "AuroraDocs"
                </h2>
            </div>

            <nav class="relative flex-1 p-4 space-y-1">
                {NAV_ITEMS
                    .iter()
                    .map(|(name, path)| {
                        let path = *path;
                        let is_active = move || location.pathname.get() == path;
                        view! {
                            <a
                                href=path
                                class=move || {
                                    format!(
                                        "flex items-center gap-3 px-3 py-2 rounded-lg font-medium \
                                         transition-all duration-300 {}",
                                        if is_active() {
                                            "text-[#dadada] bg-white/10 shadow-md"
                                        } else {
                                            "text-gray-400 hover:text-white hover:bg-white/5"
                                        },
                                    )
                                }
                            >
                                {*name}
                            </a>
                        }
                    })
                    .collect::<Vec<_>>()}
            </nav>

            <div class="p-4 border-t border-white/10 space-y-2">
                <a
                    href="/profile"
                    class="flex items-center gap-3 px-3 py-2 rounded-lg font-medium \
                           text-gray-400 hover:text-white bg-white/5 transition"
                >
                    "Profile"
                </a>
                <button
                    on:click=sign_out
                    class="w-full flex items-center justify-center gap-2 px-3 py-2 rounded-lg \
                           text-[#dadada] hover:text-white border border-blue-950 hover:bg-white/20"
                >
                    "Logout"
                </button>
            </div>
        </div>
    }
}

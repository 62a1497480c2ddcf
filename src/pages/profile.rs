//! User profile page

use leptos::prelude::*;

use crate::state::AppState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ActivityTab {
    Notes,
    Questions,
    Translations,
    Flashcards,
}

impl ActivityTab {
    fn label(self) -> &'static str {
        match self {
            Self::Notes => "Notes",
            Self::Questions => "Question Papers",
            Self::Translations => "Translations",
            Self::Flashcards => "Flashcards",
        }
    }

    fn items(self) -> &'static [(&'static str, &'static str)] {
        match self {
            Self::Notes => &[
                ("Photosynthesis Overview", "Detailed notes, 3 days ago"),
                ("French Revolution Timeline", "Cheat sheet, 1 week ago"),
            ],
            Self::Questions => &[
                ("Biology Unit 4 Practice Paper", "10 questions, 2 days ago"),
                ("Algebra Midterm Prep", "15 questions, 5 days ago"),
            ],
            Self::Translations => &[("Chemistry Chapter 2", "Spanish, 1 week ago")],
            Self::Flashcards => &[
                ("Periodic Table Basics", "20 cards, yesterday"),
                ("Key Historical Dates", "12 cards, 4 days ago"),
            ],
        }
    }
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let state = expect_context::<AppState>();
    let user = state.session.user();
    let name = user
        .as_ref()
        .map(|u| u.name.clone())
        .unwrap_or_else(|| "Student".to_string());
    let email = user
        .as_ref()
        .map(|u| u.email.clone())
        .unwrap_or_default();
    let initial = name.chars().next().unwrap_or('S').to_uppercase().to_string();
    let joined = format!("Joined {}", chrono::Utc::now().format("%B %Y"));

    let tab = RwSignal::new(ActivityTab::Notes);

    let stats: [(&str, &str); 4] = [
        ("Documents Analyzed", "12"),
        ("Notes Generated", "8"),
        ("Question Papers", "5"),
        ("Flashcard Decks", "3"),
    ];

    view! {
        <div class="min-h-screen relative overflow-hidden">
            <div class="relative z-10 max-w-5xl mx-auto px-6 py-12">
                <div class="bg-white/[0.03] backdrop-blur-xl rounded-2xl border border-white/10 p-8 mb-8">
                    <div class="flex items-center gap-6">
                        <div class="w-20 h-20 rounded-full bg-gradient-to-br from-purple-600 \
                                    to-blue-600 flex items-center justify-center text-3xl \
                                    font-bold text-white">
                            {initial}
                        </div>
                        <div>
                            <h1 class="text-2xl font-bold text-white">{name}</h1>
                            <p class="text-gray-400">{email}</p>
                            <p class="text-sm text-gray-500 mt-1">{joined}</p>
                        </div>
                    </div>
                </div>

                <div class="grid grid-cols-2 md:grid-cols-4 gap-4 mb-8">
                    {stats
                        .into_iter()
                        .map(|(label, value)| {
                            view! {
                                <div class="bg-white/[0.03] backdrop-blur-xl rounded-xl border \
                                            border-white/10 p-5 text-center">
                                    <p class="text-2xl font-bold text-purple-400">{value}</p>
                                    <p class="text-sm text-gray-400 mt-1">{label}</p>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>

                <div class="bg-white/[0.03] backdrop-blur-xl rounded-2xl border border-white/10 p-6">
                    <div class="flex gap-2 mb-6 overflow-x-auto">
                        {[
                            ActivityTab::Notes,
                            ActivityTab::Questions,
                            ActivityTab::Translations,
                            ActivityTab::Flashcards,
                        ]
                            .into_iter()
                            .map(|option| {
                                view! {
                                    <button
                                        on:click=move |_| tab.set(option)
                                        class=move || {
                                            format!(
                                                "px-4 py-2 rounded-lg text-sm whitespace-nowrap {}",
                                                if tab.get() == option {
                                                    "bg-purple-600 text-white"
                                                } else {
                                                    "text-gray-400 hover:bg-white/5"
                                                },
                                            )
                                        }
                                    >
                                        {option.label()}
                                    </button>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>

                    <div class="space-y-3">
                        {move || {
                            tab.get()
                                .items()
                                .iter()
                                .map(|(title, detail)| {
                                    view! {
                                        <div class="flex items-center justify-between p-4 rounded-lg \
                                                    bg-white/5 border border-white/10">
                                            <div>
                                                <p class="text-gray-200">{*title}</p>
                                                <p class="text-sm text-gray-500">{*detail}</p>
                                            </div>
                                        </div>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </div>
                </div>
            </div>
        </div>
    }
}

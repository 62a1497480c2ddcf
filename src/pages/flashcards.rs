//! Flashcard generator page

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{Feature, FileUploader, IntroHero, PricingModal};
use crate::flow::{DocFlow, FlowConfig, Stage};
use crate::pages::notes::PremiumBadge;
use crate::state::AppState;
use crate::types::{Flashcard, FlashcardSettings};

#[component]
pub fn FlashcardsPage() -> impl IntoView {
    let state = expect_context::<AppState>();
    let flow = DocFlow::new(
        state.endpoints.clone(),
        FlowConfig {
            capabilities: crate::flow::Capabilities {
                upload: true,
                text_input: true,
                settings: true,
                ..Default::default()
            },
            min_documents: 1,
        },
    );

    let text = RwSignal::new(String::new());
    let file_name = RwSignal::new(String::new());
    let card_count = RwSignal::new(10u32);
    let generating = RwSignal::new(false);
    let result = RwSignal::new(Vec::<Flashcard>::new());
    let show_pricing = RwSignal::new(false);

    let features = vec![
        Feature {
            icon: "\u{1F0CF}",
            title: "Instant Decks",
            description: "Turn any study material into a ready-to-review flashcard deck",
        },
        Feature {
            icon: "\u{1F504}",
            title: "Flip to Reveal",
            description: "Test yourself first, then flip each card to check the answer",
        },
        Feature {
            icon: "\u{1F3AF}",
            title: "Focused Recall",
            description: "Short question and answer pairs built for active recall practice",
        },
    ];

    let on_start = {
        let flow = flow.clone();
        Callback::new(move |_| flow.begin())
    };
    let on_select = Callback::new(move |file: web_sys::File| {
        file_name.set(file.name());
    });

    let generate = {
        let flow = flow.clone();
        let generator = state.generator.clone();
        move |_| {
            let content = if text.get_untracked().trim().is_empty() {
                file_name.get_untracked()
            } else {
                text.get_untracked()
            };
            if content.trim().is_empty() || generating.get_untracked() {
                return;
            }
            generating.set(true);
            let flow = flow.clone();
            let generator = generator.clone();
            let settings = FlashcardSettings {
                card_count: card_count.get_untracked(),
            };
            spawn_local(async move {
                let cards = generator.flashcards(&content, &settings).await;
                result.set(cards);
                generating.set(false);
                flow.show_result();
            });
        }
    };

    let stage = flow.stage;

    view! {
        <div class="min-h-screen relative overflow-hidden">
            <PremiumBadge show_pricing=show_pricing />

            <div class="relative z-10 max-w-7xl mx-auto px-6 py-12 mt-16">
                {move || match stage.get() {
                    Stage::Intro => view! {
                        <IntroHero
                            title="Master Any Subject With"
                            highlight="Smart Flashcards"
                            description="Generate a flashcard deck from your notes or documents and \
                                         drill the key concepts until they stick."
                            features=features.clone()
                            on_start=on_start
                        />
                    }
                    .into_any(),
                    Stage::Input => {
                        let generate = generate.clone();
                        view! {
                            <div class="space-y-8 max-w-3xl mx-auto">
                                <div class="bg-white/5 backdrop-blur-sm rounded-lg p-6 border border-white/10">
                                    <textarea
                                        prop:value=move || text.get()
                                        on:input=move |ev| text.set(event_target_value(&ev))
                                        placeholder="Paste your study material here..."
                                        class="w-full h-40 p-4 rounded-lg bg-black/20 border \
                                               border-white/10 text-white resize-none"
                                    ></textarea>
                                    <div class="mt-4">
                                        <FileUploader
                                            on_select=on_select
                                            uploading=Signal::derive(|| false)
                                            progress=Signal::derive(|| 0u8)
                                            file_name=Signal::derive(String::new)
                                        />
                                    </div>
                                </div>

                                <div class="bg-white/5 backdrop-blur-sm rounded-lg p-6 border border-white/10">
                                    <label class="block text-sm text-gray-400 mb-1">"Number of Cards"</label>
                                    <input
                                        type="number"
                                        min="1"
                                        max="50"
                                        prop:value=move || card_count.get().to_string()
                                        on:input=move |ev| {
                                            if let Ok(n) = event_target_value(&ev).parse::<u32>() {
                                                card_count.set(n.clamp(1, 50));
                                            }
                                        }
                                        class="w-full p-3 mb-4 rounded-lg bg-black/20 border \
                                               border-white/10 text-white"
                                    />
                                    <button
                                        on:click=generate
                                        disabled=move || generating.get()
                                        class="w-full p-3 bg-gradient-to-r from-purple-600 to-blue-600 \
                                               rounded-lg text-white font-medium disabled:opacity-50"
                                    >
                                        {move || {
                                            if generating.get() {
                                                "Generating Flashcards..."
                                            } else {
                                                "Generate Flashcards"
                                            }
                                        }}
                                    </button>
                                </div>
                            </div>
                        }
                        .into_any()
                    }
                    _ => view! {
                        <div class="mt-8">
                            <h2 class="text-3xl font-bold text-white mb-4">"Your Flashcards"</h2>
                            <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-4">
                                <For
                                    each=move || result.get().into_iter().enumerate()
                                    key=|(index, _)| *index
                                    children=move |(_, card)| view! { <FlipCard card=card /> }
                                />
                            </div>
                        </div>
                    }
                    .into_any(),
                }}
            </div>

            <PricingModal open=show_pricing />
        </div>
    }
}

/// One flashcard with its own reveal state
#[component]
fn FlipCard(card: Flashcard) -> impl IntoView {
    let revealed = RwSignal::new(false);
    let front = card.front.clone();
    let back = card.back.clone();
    view! {
        <div
            on:click=move |_| revealed.update(|r| *r = !*r)
            class="bg-white/[0.03] backdrop-blur-xl rounded-xl border border-white/10 p-6 \
                   min-h-[140px] cursor-pointer hover:border-purple-500/50 transition-colors \
                   flex flex-col justify-between"
        >
            <p class="text-gray-200">
                {move || if revealed.get() { back.clone() } else { front.clone() }}
            </p>
            <p class="text-xs text-gray-500 mt-4">
                {move || if revealed.get() { "Click to hide answer" } else { "Click to reveal answer" }}
            </p>
        </div>
    }
}

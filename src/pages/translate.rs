//! Document translation page (premium only)

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{Feature, FileUploader, IntroHero, PricingModal};
use crate::flow::{DocFlow, FlowConfig, Stage};
use crate::pages::notes::PremiumBadge;
use crate::state::AppState;

const LANGUAGES: &[&str] = &[
    "Spanish", "French", "German", "Hindi", "Japanese", "Mandarin", "Portuguese", "Arabic",
];

#[component]
pub fn TranslatePage() -> impl IntoView {
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

    let use_file = RwSignal::new(false);
    let text = RwSignal::new(String::new());
    let file_name = RwSignal::new(String::new());
    let language = RwSignal::new(LANGUAGES[0].to_string());
    let translating = RwSignal::new(false);
    let result = RwSignal::new(String::new());
    let show_pricing = RwSignal::new(false);

    let features = vec![
        Feature {
            icon: "\u{1F310}",
            title: "Many Languages",
            description: "Translate study material into the language you learn best in",
        },
        Feature {
            icon: "\u{1F4C4}",
            title: "Text or Documents",
            description: "Paste a passage or upload a whole document",
        },
        Feature {
            icon: "\u{2728}",
            title: "Context Aware",
            description: "Keeps technical terms and structure intact across languages",
        },
    ];

    let on_start = {
        let flow = flow.clone();
        Callback::new(move |_| flow.begin())
    };
    let on_select = Callback::new(move |file: web_sys::File| {
        file_name.set(file.name());
    });

    let translate = {
        let flow = flow.clone();
        let generator = state.generator.clone();
        let premium = state.premium;
        move |_| {
            if !premium.get_untracked() {
                show_pricing.set(true);
                return;
            }
            let content = if use_file.get_untracked() {
                file_name.get_untracked()
            } else {
                text.get_untracked()
            };
            if content.trim().is_empty() || translating.get_untracked() {
                return;
            }
            translating.set(true);
            let flow = flow.clone();
            let generator = generator.clone();
            let target = language.get_untracked();
            spawn_local(async move {
                let translated = generator.translate(&content, &target).await;
                result.set(translated);
                translating.set(false);
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
                            title="Study In"
                            highlight="Any Language"
                            description="Translate documents and passages into the language that \
                                         works best for you, with formatting preserved."
                            features=features.clone()
                            on_start=on_start
                        />
                    }
                    .into_any(),
                    Stage::Input => {
                        let translate = translate.clone();
                        view! {
                            <div class="space-y-8 max-w-3xl mx-auto">
                                <div class="bg-white/5 backdrop-blur-sm rounded-lg p-1">
                                    <div class="grid grid-cols-2 gap-1">
                                        <button
                                            on:click=move |_| use_file.set(false)
                                            class=move || toggle_class(!use_file.get())
                                        >
                                            "Paste Text"
                                        </button>
                                        <button
                                            on:click=move |_| use_file.set(true)
                                            class=move || toggle_class(use_file.get())
                                        >
                                            "Upload File"
                                        </button>
                                    </div>
                                </div>

                                <div class="bg-white/5 backdrop-blur-sm rounded-lg p-6 border border-white/10">
                                    <Show
                                        when=move || use_file.get()
                                        fallback=move || {
                                            view! {
                                                <textarea
                                                    prop:value=move || text.get()
                                                    on:input=move |ev| text.set(event_target_value(&ev))
                                                    placeholder="Paste the text to translate..."
                                                    class="w-full h-40 p-4 rounded-lg bg-black/20 border \
                                                           border-white/10 text-white resize-none"
                                                ></textarea>
                                            }
                                        }
                                    >
                                        <FileUploader
                                            on_select=on_select
                                            uploading=Signal::derive(|| false)
                                            progress=Signal::derive(|| 0u8)
                                            file_name=Signal::derive(String::new)
                                        />
                                        <Show when=move || !file_name.get().is_empty()>
                                            <p class="mt-4 text-sm text-gray-400 text-center">
                                                {move || format!("Selected: {}", file_name.get())}
                                            </p>
                                        </Show>
                                    </Show>
                                </div>

                                <div class="bg-white/5 backdrop-blur-sm rounded-lg p-6 border border-white/10">
                                    <label class="block text-sm text-gray-400 mb-1">"Target Language"</label>
                                    <select
                                        on:change=move |ev| language.set(event_target_value(&ev))
                                        class="w-full p-3 mb-4 rounded-lg bg-black/20 border \
                                               border-white/10 text-white"
                                    >
                                        {LANGUAGES
                                            .iter()
                                            .map(|lang| {
                                                view! {
                                                    <option
                                                        value=*lang
                                                        selected=move || language.get() == *lang
                                                    >
                                                        {*lang}
                                                    </option>
                                                }
                                            })
                                            .collect::<Vec<_>>()}
                                    </select>
                                    <button
                                        on:click=translate
                                        disabled=move || translating.get()
                                        class="w-full p-3 bg-gradient-to-r from-purple-600 to-blue-600 \
                                               rounded-lg text-white font-medium disabled:opacity-50"
                                    >
                                        {move || {
                                            if translating.get() { "Translating..." } else { "Translate" }
                                        }}
                                    </button>
                                </div>
                            </div>
                        }
                        .into_any()
                    }
                    _ => view! {
                        <div class="mt-8 max-w-3xl mx-auto">
                            <h2 class="text-3xl font-bold text-white mb-4">
                                {move || format!("Translation ({})", language.get())}
                            </h2>
                            <div class="bg-white/[0.03] backdrop-blur-xl rounded-2xl border \
                                        border-white/10 p-6">
                                <p class="text-gray-300 whitespace-pre-wrap">{move || result.get()}</p>
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

fn toggle_class(active: bool) -> String {
    format!(
        "flex items-center justify-center gap-2 p-3 rounded {}",
        if active {
            "bg-purple-600 text-white"
        } else {
            "text-gray-400 hover:bg-white/5"
        }
    )
}

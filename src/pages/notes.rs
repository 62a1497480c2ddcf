//! Notes generator page

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{Feature, FileUploader, IntroHero, PricingModal};
use crate::flow::{DocFlow, FlowConfig, Stage};
use crate::markdown::render_markdown;
use crate::state::AppState;
use crate::types::{GeneratedNotes, NoteMode, NoteSettings};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum InputMethod {
    Syllabus,
    Chapter,
    Topic,
}

/// Turn a document or pasted text into structured study notes.
/// Non-premium users must supply an API key before generating; the
/// upgrade link opens the pricing modal.
#[component]
pub fn NotesPage() -> impl IntoView {
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

    let input_method = RwSignal::new(InputMethod::Syllabus);
    let text = RwSignal::new(String::new());
    let file_name = RwSignal::new(String::new());
    let api_key = RwSignal::new(String::new());
    let mode = RwSignal::new(NoteMode::Detailed);
    let include_headings = RwSignal::new(true);
    let include_bullets = RwSignal::new(true);
    let include_examples = RwSignal::new(true);
    let generating = RwSignal::new(false);
    let result = RwSignal::new(Option::<GeneratedNotes>::None);
    let show_pricing = RwSignal::new(false);

    let features = vec![
        Feature {
            icon: "\u{2728}",
            title: "Smart Generation",
            description: "AI analyzes your content and distills it into clear, organized notes",
        },
        Feature {
            icon: "\u{1F4C4}",
            title: "Multiple Formats",
            description: "Generate detailed notes, executive summaries, or quick cheat sheets",
        },
        Feature {
            icon: "\u{1F4AC}",
            title: "Interactive Review",
            description: "Chat with AI about your notes to deepen understanding and clarify concepts",
        },
    ];

    let on_start = {
        let flow = flow.clone();
        Callback::new(move |_| flow.begin())
    };
    let on_select = Callback::new(move |file: web_sys::File| {
        file_name.set(file.name());
    });

    let premium = state.premium;
    let can_generate = Signal::derive(move || {
        let has_input = !text.get().trim().is_empty() || !file_name.get().is_empty();
        let has_key = premium.get() || !api_key.get().trim().is_empty();
        has_input && has_key && !generating.get()
    });

    let generate = {
        let flow = flow.clone();
        let generator = state.generator.clone();
        move |_| {
            if !can_generate.get_untracked() {
                return;
            }
            generating.set(true);
            let flow = flow.clone();
            let generator = generator.clone();
            let settings = NoteSettings {
                mode: mode.get_untracked(),
                include_headings: include_headings.get_untracked(),
                include_bullet_points: include_bullets.get_untracked(),
                include_examples: include_examples.get_untracked(),
            };
            let content = if text.get_untracked().trim().is_empty() {
                file_name.get_untracked()
            } else {
                text.get_untracked()
            };
            spawn_local(async move {
                let notes = generator.notes(&content, &settings).await;
                result.set(Some(notes));
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
                            title="Transform Your Content Into"
                            highlight="Smart Study Notes"
                            description="Upload documents or paste text to generate well-structured \
                                         notes. AI-powered analysis helps you understand and retain \
                                         information better."
                            features=features.clone()
                            on_start=on_start
                        />
                    }
                    .into_any(),
                    Stage::Input => {
                        let generate = generate.clone();
                        view! {
                            <div class="space-y-8">
                                <div class="bg-white/5 backdrop-blur-sm rounded-lg p-1">
                                    <div class="grid grid-cols-3 gap-1">
                                        {[
                                            (InputMethod::Syllabus, "Syllabus"),
                                            (InputMethod::Chapter, "Chapter"),
                                            (InputMethod::Topic, "Topic"),
                                        ]
                                            .into_iter()
                                            .map(|(method, label)| {
                                                view! {
                                                    <button
                                                        on:click=move |_| input_method.set(method)
                                                        class=move || {
                                                            format!(
                                                                "flex items-center justify-center gap-2 p-3 rounded {}",
                                                                if input_method.get() == method {
                                                                    "bg-purple-600 text-white"
                                                                } else {
                                                                    "text-gray-400 hover:bg-white/5"
                                                                },
                                                            )
                                                        }
                                                    >
                                                        {label}
                                                    </button>
                                                }
                                            })
                                            .collect::<Vec<_>>()}
                                    </div>
                                </div>

                                <div class="bg-white/5 backdrop-blur-sm rounded-lg p-6 border border-white/10">
                                    <Show
                                        when=move || input_method.get() == InputMethod::Topic
                                        fallback=move || {
                                            view! {
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
                                            }
                                        }
                                    >
                                        <textarea
                                            prop:value=move || text.get()
                                            on:input=move |ev| text.set(event_target_value(&ev))
                                            placeholder="Enter your topic or content here..."
                                            class="w-full h-48 p-4 rounded-lg bg-black/20 border \
                                                   border-white/10 text-white resize-none"
                                        ></textarea>
                                    </Show>
                                </div>

                                <Show when=move || !premium.get()>
                                    <div class="bg-white/5 backdrop-blur-sm rounded-lg p-6 border border-white/10">
                                        <div class="flex items-center gap-2 mb-4 text-yellow-500">
                                            <h3 class="font-medium">"Gemini API Key Required"</h3>
                                        </div>
                                        <input
                                            type="text"
                                            prop:value=move || api_key.get()
                                            on:input=move |ev| api_key.set(event_target_value(&ev))
                                            placeholder="Enter your Gemini API key"
                                            class="w-full p-3 rounded-lg bg-black/20 border \
                                                   border-white/10 text-white"
                                        />
                                        <p class="mt-2 text-sm text-gray-400">
                                            "Or "
                                            <button
                                                on:click=move |_| show_pricing.set(true)
                                                class="text-purple-400 hover:underline"
                                            >
                                                "upgrade to premium"
                                            </button>
                                            " for unlimited access"
                                        </p>
                                    </div>
                                </Show>

                                <div class="bg-white/5 backdrop-blur-sm rounded-lg p-6 border border-white/10">
                                    <h3 class="font-medium text-white mb-4">"Note Settings"</h3>

                                    <div class="space-y-4 mb-6">
                                        <label class="text-sm text-gray-400">"Summarization Mode"</label>
                                        <select
                                            on:change=move |ev| {
                                                mode.set(NoteMode::from_value(&event_target_value(&ev)))
                                            }
                                            class="w-full p-3 rounded-lg bg-black/20 border \
                                                   border-white/10 text-white"
                                        >
                                            {[NoteMode::Detailed, NoteMode::Executive, NoteMode::CheatSheet]
                                                .into_iter()
                                                .map(|option| {
                                                    view! {
                                                        <option
                                                            value=option.value()
                                                            selected=move || mode.get() == option
                                                        >
                                                            {option.label()}
                                                        </option>
                                                    }
                                                })
                                                .collect::<Vec<_>>()}
                                        </select>
                                    </div>

                                    <SettingToggle label="Headings" value=include_headings />
                                    <SettingToggle label="Bullet Points" value=include_bullets />
                                    <SettingToggle label="Examples" value=include_examples />

                                    <button
                                        on:click=generate
                                        disabled=move || !can_generate.get()
                                        class="w-full mt-6 p-3 bg-gradient-to-r from-purple-600 \
                                               to-blue-600 rounded-lg text-white font-medium flex \
                                               items-center justify-center gap-2 disabled:opacity-50"
                                    >
                                        {move || {
                                            if generating.get() {
                                                "Generating Notes..."
                                            } else {
                                                "Generate Notes"
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
                            <h2 class="text-3xl font-bold text-white mb-4">"Generated Notes"</h2>
                            <div class="bg-white/[0.03] backdrop-blur-xl rounded-2xl border \
                                        border-white/10 p-6">
                                {move || {
                                    result
                                        .get()
                                        .map(|notes| {
                                            view! {
                                                <div
                                                    class="chat-markdown text-gray-300"
                                                    inner_html=render_markdown(&notes.markdown)
                                                ></div>
                                            }
                                        })
                                }}
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

/// Checkbox row in the settings card
#[component]
fn SettingToggle(label: &'static str, value: RwSignal<bool>) -> impl IntoView {
    view! {
        <label class="flex items-center gap-2 mb-2">
            <input
                type="checkbox"
                prop:checked=move || value.get()
                on:change=move |ev| value.set(event_target_checked(&ev))
                class="rounded border-white/10 bg-black/20"
            />
            <span class="text-gray-300">{label}</span>
        </label>
    }
}

/// Clickable premium badge pinned to the corner
#[component]
pub fn PremiumBadge(show_pricing: RwSignal<bool>) -> impl IntoView {
    view! {
        <div
            on:click=move |_| show_pricing.set(true)
            class="fixed top-6 right-6 z-50 cursor-pointer transform hover:scale-105 transition-transform"
        >
            <div class="flex items-center gap-2 px-4 py-2 bg-gradient-to-r from-amber-600/20 \
                        to-yellow-600/20 rounded-full border border-amber-600/50 backdrop-blur-sm">
                <span class="text-amber-400 text-sm font-medium">"\u{1F451} Premium Feature"</span>
            </div>
        </div>
    }
}

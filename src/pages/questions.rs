//! Question paper generator page

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::components::{Feature, FileUploader, IntroHero, PricingModal};
use crate::flow::{DocFlow, FlowConfig, Stage};
use crate::pages::notes::PremiumBadge;
use crate::state::AppState;
use crate::types::{Difficulty, Question, QuestionKind, QuestionSettings};

#[component]
pub fn QuestionsPage() -> impl IntoView {
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
    let mcq = RwSignal::new(true);
    let fill = RwSignal::new(false);
    let descriptive = RwSignal::new(false);
    let difficulty = RwSignal::new(Difficulty::Medium);
    let total = RwSignal::new(10u32);
    let mcq_share = RwSignal::new(60u32);
    let fill_share = RwSignal::new(20u32);
    let descriptive_share = RwSignal::new(20u32);
    let generating = RwSignal::new(false);
    let result = RwSignal::new(Vec::<Question>::new());
    let show_pricing = RwSignal::new(false);

    let features = vec![
        Feature {
            icon: "\u{1F4DD}",
            title: "Custom Question Papers",
            description: "Mix multiple choice, fill in the blanks and descriptive questions",
        },
        Feature {
            icon: "\u{1F3AF}",
            title: "Difficulty Control",
            description: "Tune the paper from easy recall to hard analysis questions",
        },
        Feature {
            icon: "\u{1F4E4}",
            title: "Easy Export",
            description: "Copy the paper to your clipboard or download it as a text file",
        },
    ];

    let on_start = {
        let flow = flow.clone();
        Callback::new(move |_| flow.begin())
    };
    let on_select = Callback::new(move |file: web_sys::File| {
        file_name.set(file.name());
    });

    let settings = move || QuestionSettings {
        mcq: mcq.get_untracked(),
        fill_in_blanks: fill.get_untracked(),
        descriptive: descriptive.get_untracked(),
        difficulty: difficulty.get_untracked(),
        total_questions: total.get_untracked(),
        mcq_share: mcq_share.get_untracked(),
        fill_share: fill_share.get_untracked(),
        descriptive_share: descriptive_share.get_untracked(),
    };

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
            let settings = settings();
            spawn_local(async move {
                let questions = generator.questions(&content, &settings).await;
                result.set(questions);
                generating.set(false);
                flow.show_result();
            });
        }
    };

    let copy_paper = move |_| {
        let paper = format_questions(&result.get_untracked());
        if let Some(window) = web_sys::window() {
            let _ = window.navigator().clipboard().write_text(&paper);
        }
    };

    let download_paper = move |_| {
        let paper = format_questions(&result.get_untracked());
        if let Err(err) = download_text("questions.txt", &paper) {
            tracing::warn!(?err, "download failed");
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
                            title="Build Exam-Ready"
                            highlight="Question Papers"
                            description="Generate a practice paper from your study material with \
                                         full control over question types and difficulty."
                            features=features.clone()
                            on_start=on_start
                        />
                    }
                    .into_any(),
                    Stage::Input => {
                        let generate = generate.clone();
                        view! {
                            <div class="grid md:grid-cols-2 gap-8">
                                <div class="space-y-6">
                                    <div class="bg-white/5 backdrop-blur-sm rounded-lg p-6 border border-white/10">
                                        <h3 class="font-medium text-white mb-4">"Source Material"</h3>
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
                                </div>

                                <div class="bg-white/5 backdrop-blur-sm rounded-lg p-6 border border-white/10">
                                    <h3 class="font-medium text-white mb-4">"Paper Settings"</h3>

                                    <div class="space-y-2 mb-6">
                                        <KindToggle label="Multiple Choice" value=mcq share=mcq_share />
                                        <KindToggle label="Fill in the Blanks" value=fill share=fill_share />
                                        <KindToggle label="Descriptive" value=descriptive share=descriptive_share />
                                    </div>

                                    <label class="block text-sm text-gray-400 mb-1">"Difficulty"</label>
                                    <select
                                        on:change=move |ev| {
                                            difficulty.set(Difficulty::from_value(&event_target_value(&ev)))
                                        }
                                        class="w-full p-3 mb-4 rounded-lg bg-black/20 border \
                                               border-white/10 text-white"
                                    >
                                        {[Difficulty::Easy, Difficulty::Medium, Difficulty::Hard]
                                            .into_iter()
                                            .map(|level| {
                                                view! {
                                                    <option
                                                        value=level.value()
                                                        selected=move || difficulty.get() == level
                                                    >
                                                        {level.label()}
                                                    </option>
                                                }
                                            })
                                            .collect::<Vec<_>>()}
                                    </select>

                                    <label class="block text-sm text-gray-400 mb-1">"Total Questions"</label>
                                    <input
                                        type="number"
                                        min="1"
                                        max="50"
                                        prop:value=move || total.get().to_string()
                                        on:input=move |ev| {
                                            if let Ok(n) = event_target_value(&ev).parse::<u32>() {
                                                total.set(n.clamp(1, 50));
                                            }
                                        }
                                        class="w-full p-3 mb-6 rounded-lg bg-black/20 border \
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
                                                "Generating Paper..."
                                            } else {
                                                "Generate Questions"
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
                            <div class="flex items-center justify-between mb-4">
                                <h2 class="text-3xl font-bold text-white">"Question Paper"</h2>
                                <div class="flex gap-2">
                                    <button
                                        on:click=copy_paper
                                        class="px-4 py-2 bg-white/10 hover:bg-white/20 rounded-lg \
                                               text-white text-sm"
                                    >
                                        "Copy"
                                    </button>
                                    <button
                                        on:click=download_paper
                                        class="px-4 py-2 bg-white/10 hover:bg-white/20 rounded-lg \
                                               text-white text-sm"
                                    >
                                        "Download"
                                    </button>
                                </div>
                            </div>
                            <div class="space-y-4">
                                <For
                                    each=move || result.get().into_iter().enumerate()
                                    key=|(index, _)| *index
                                    children=move |(index, question)| {
                                        view! { <QuestionCard index=index question=question /> }
                                    }
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

#[component]
fn KindToggle(label: &'static str, value: RwSignal<bool>, share: RwSignal<u32>) -> impl IntoView {
    view! {
        <div class="flex items-center justify-between">
            <label class="flex items-center gap-2">
                <input
                    type="checkbox"
                    prop:checked=move || value.get()
                    on:change=move |ev| value.set(event_target_checked(&ev))
                    class="rounded border-white/10 bg-black/20"
                />
                <span class="text-gray-300">{label}</span>
            </label>
            <Show when=move || value.get()>
                <input
                    type="number"
                    min="0"
                    max="100"
                    prop:value=move || share.get().to_string()
                    on:input=move |ev| {
                        if let Ok(n) = event_target_value(&ev).parse::<u32>() {
                            share.set(n.min(100));
                        }
                    }
                    class="w-16 p-1 text-sm text-center rounded bg-black/20 border \
                           border-white/10 text-white"
                />
            </Show>
        </div>
    }
}

#[component]
fn QuestionCard(index: usize, question: Question) -> impl IntoView {
    let kind_label = match question.kind {
        QuestionKind::Mcq => "Multiple Choice",
        QuestionKind::FillInBlanks => "Fill in the Blanks",
        QuestionKind::Descriptive => "Descriptive",
    };
    view! {
        <div class="bg-white/[0.03] backdrop-blur-xl rounded-xl border border-white/10 p-5">
            <div class="flex items-center gap-2 mb-2">
                <span class="text-purple-400 font-semibold">{format!("Q{}.", index + 1)}</span>
                <span class="text-xs text-gray-500 uppercase tracking-wide">{kind_label}</span>
            </div>
            <p class="text-gray-200 mb-3">{question.prompt.clone()}</p>
            <div class="space-y-1">
                {question
                    .options
                    .iter()
                    .enumerate()
                    .map(|(i, option)| {
                        let letter = (b'a' + i as u8) as char;
                        view! {
                            <p class="text-gray-400 pl-4">{format!("{letter}) {option}")}</p>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </div>
    }
}

/// Plain-text rendering used for both clipboard copy and file download.
pub fn format_questions(questions: &[Question]) -> String {
    let mut out = String::new();
    for (index, question) in questions.iter().enumerate() {
        out.push_str(&format!("Q{}. {}\n", index + 1, question.prompt));
        for (i, option) in question.options.iter().enumerate() {
            let letter = (b'a' + i as u8) as char;
            out.push_str(&format!("   {letter}) {option}\n"));
        }
        out.push('\n');
    }
    out
}

/// Trigger a browser download of `content` as a text file.
fn download_text(file_name: &str, content: &str) -> Result<(), wasm_bindgen::JsValue> {
    let parts = js_sys::Array::new();
    parts.push(&wasm_bindgen::JsValue::from_str(content));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type("text/plain");
    let blob = web_sys::Blob::new_with_str_sequence_and_options(&parts, &options)?;
    let url = web_sys::Url::create_object_url_with_blob(&blob)?;

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| wasm_bindgen::JsValue::from_str("no document"))?;
    let anchor = document
        .create_element("a")?
        .dyn_into::<web_sys::HtmlAnchorElement>()?;
    anchor.set_href(&url);
    anchor.set_download(file_name);
    anchor.click();
    web_sys::Url::revoke_object_url(&url)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Question, QuestionKind};

    #[test]
    fn test_format_questions_numbers_and_letters_options() {
        let questions = vec![
            Question {
                kind: QuestionKind::Mcq,
                prompt: "What is ownership?".into(),
                options: vec!["A".into(), "B".into()],
                answer: "A".into(),
            },
            Question {
                kind: QuestionKind::Descriptive,
                prompt: "Explain borrowing.".into(),
                options: vec![],
                answer: String::new(),
            },
        ];
        let paper = format_questions(&questions);
        assert!(paper.contains("Q1. What is ownership?"));
        assert!(paper.contains("   a) A"));
        assert!(paper.contains("   b) B"));
        assert!(paper.contains("Q2. Explain borrowing."));
    }

    #[test]
    fn test_format_questions_empty_is_empty() {
        assert!(format_questions(&[]).is_empty());
    }
}

//! Mindmap generator page (premium only)

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{Feature, FileUploader, IntroHero, PricingModal};
use crate::flow::{DocFlow, FlowConfig, Stage};
use crate::pages::notes::PremiumBadge;
use crate::state::AppState;
use crate::types::MindmapNode;

#[component]
pub fn MindmapPage() -> impl IntoView {
    let state = expect_context::<AppState>();
    let flow = DocFlow::new(
        state.endpoints.clone(),
        FlowConfig {
            capabilities: crate::flow::Capabilities {
                upload: true,
                text_input: true,
                ..Default::default()
            },
            min_documents: 1,
        },
    );

    let use_file = RwSignal::new(false);
    let text = RwSignal::new(String::new());
    let file_name = RwSignal::new(String::new());
    let generating = RwSignal::new(false);
    let result = RwSignal::new(Option::<MindmapNode>::None);
    let show_pricing = RwSignal::new(false);

    let features = vec![
        Feature {
            icon: "\u{1F9E0}",
            title: "Visual Learning",
            description: "See how concepts connect with automatically generated mind maps",
        },
        Feature {
            icon: "\u{26A1}",
            title: "Instant Structure",
            description: "Turn dense text into a branching overview in seconds",
        },
        Feature {
            icon: "\u{1F4DA}",
            title: "Any Source",
            description: "Works with pasted text or uploaded documents",
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
            if content.trim().is_empty() || generating.get_untracked() {
                return;
            }
            generating.set(true);
            let flow = flow.clone();
            let generator = generator.clone();
            spawn_local(async move {
                let root = generator.mindmap(&content).await;
                result.set(Some(root));
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
                            title="Map Out Your Ideas With"
                            highlight="AI Mind Maps"
                            description="Paste text or upload a document and get a visual breakdown \
                                         of the key concepts and how they relate."
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
                                    <div class="grid grid-cols-2 gap-1">
                                        <button
                                            on:click=move |_| use_file.set(false)
                                            class=move || {
                                                tab_class(!use_file.get())
                                            }
                                        >
                                            "Paste Text"
                                        </button>
                                        <button
                                            on:click=move |_| use_file.set(true)
                                            class=move || tab_class(use_file.get())
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
                                                    placeholder="Paste the content you want to map..."
                                                    class="w-full h-48 p-4 rounded-lg bg-black/20 border \
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

                                <button
                                    on:click=generate
                                    disabled=move || generating.get()
                                    class="w-full p-3 bg-gradient-to-r from-purple-600 to-blue-600 \
                                           rounded-lg text-white font-medium disabled:opacity-50"
                                >
                                    {move || {
                                        if generating.get() {
                                            "Generating Mind Map..."
                                        } else {
                                            "Generate Mind Map"
                                        }
                                    }}
                                </button>
                            </div>
                        }
                        .into_any()
                    }
                    _ => view! {
                        <div class="mt-8">
                            <h2 class="text-3xl font-bold text-white mb-4">"Your Mind Map"</h2>
                            <div class="bg-white/[0.03] backdrop-blur-xl rounded-2xl border \
                                        border-white/10 p-6">
                                {move || {
                                    result
                                        .get()
                                        .map(|root| view! { <NodeTree node=root depth=0 /> })
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

fn tab_class(active: bool) -> String {
    format!(
        "flex items-center justify-center gap-2 p-3 rounded {}",
        if active {
            "bg-purple-600 text-white"
        } else {
            "text-gray-400 hover:bg-white/5"
        }
    )
}

/// Recursive tree rendering. The root gets the accent styling, deeper
/// levels are indented with a connecting border.
#[component]
fn NodeTree(node: MindmapNode, depth: usize) -> impl IntoView {
    let label_class = if depth == 0 {
        "text-lg font-semibold text-purple-300"
    } else {
        "text-gray-200"
    };
    view! {
        <div class="pl-4 border-l border-white/10 first:border-l-0 first:pl-0">
            <div class=format!("py-1 {label_class}")>{node.label}</div>
            <div class="ml-2">
                {node
                    .children
                    .into_iter()
                    .map(|child| view! { <NodeTree node=child depth=depth + 1 /> }.into_any())
                    .collect::<Vec<_>>()}
            </div>
        </div>
    }
}

//! Lesson plan generator page

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{Feature, IntroHero, PricingModal};
use crate::flow::{DocFlow, FlowConfig, Stage};
use crate::pages::notes::PremiumBadge;
use crate::state::AppState;

#[component]
pub fn LessonPlanPage() -> impl IntoView {
    let state = expect_context::<AppState>();
    let flow = DocFlow::new(
        state.endpoints.clone(),
        FlowConfig {
            capabilities: crate::flow::Capabilities {
                text_input: true,
                ..Default::default()
            },
            min_documents: 0,
        },
    );

    let topic = RwSignal::new(String::new());
    let generating = RwSignal::new(false);
    let result = RwSignal::new(String::new());
    let show_pricing = RwSignal::new(false);

    let features = vec![
        Feature {
            icon: "\u{1F4CB}",
            title: "Complete Structure",
            description: "Objectives, materials, activities, assessment and homework in one plan",
        },
        Feature {
            icon: "\u{23F1}",
            title: "Ready in Seconds",
            description: "Describe the topic and get a full session outline instantly",
        },
        Feature {
            icon: "\u{1F393}",
            title: "Teacher Friendly",
            description: "Plans follow a familiar classroom format you can adapt freely",
        },
    ];

    let on_start = {
        let flow = flow.clone();
        Callback::new(move |_| flow.begin())
    };

    let generate = {
        let flow = flow.clone();
        let generator = state.generator.clone();
        move |_| {
            let content = topic.get_untracked();
            if content.trim().is_empty() || generating.get_untracked() {
                return;
            }
            generating.set(true);
            let flow = flow.clone();
            let generator = generator.clone();
            spawn_local(async move {
                let plan = generator.lesson_plan(&content).await;
                result.set(plan);
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
                            title="Plan Your Next Class With"
                            highlight="AI Lesson Plans"
                            description="Describe what you want to teach and get a structured plan \
                                         covering objectives, activities and assessment."
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
                                    <label class="block text-sm text-gray-400 mb-2">
                                        "What do you want to teach?"
                                    </label>
                                    <textarea
                                        prop:value=move || topic.get()
                                        on:input=move |ev| topic.set(event_target_value(&ev))
                                        placeholder="e.g. Introduction to photosynthesis for grade 8..."
                                        class="w-full h-40 p-4 rounded-lg bg-black/20 border \
                                               border-white/10 text-white resize-none"
                                    ></textarea>
                                    <button
                                        on:click=generate
                                        disabled=move || generating.get()
                                        class="w-full mt-4 p-3 bg-gradient-to-r from-purple-600 \
                                               to-blue-600 rounded-lg text-white font-medium \
                                               disabled:opacity-50"
                                    >
                                        {move || {
                                            if generating.get() {
                                                "Generating Plan..."
                                            } else {
                                                "Generate Lesson Plan"
                                            }
                                        }}
                                    </button>
                                </div>
                            </div>
                        }
                        .into_any()
                    }
                    _ => view! {
                        <div class="mt-8 max-w-3xl mx-auto">
                            <h2 class="text-3xl font-bold text-white mb-4">"Lesson Plan"</h2>
                            <div class="bg-white/[0.03] backdrop-blur-xl rounded-2xl border \
                                        border-white/10 p-6">
                                <pre class="text-gray-300 whitespace-pre-wrap font-sans">
                                    {move || result.get()}
                                </pre>
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

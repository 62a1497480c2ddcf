//! Single-document chat page

use leptos::prelude::*;

use crate::components::{ChatInput, ChatWindow, Feature, FileUploader, IntroHero};
use crate::flow::{DocFlow, FlowConfig, Stage};
use crate::state::AppState;

/// Upload one document, then chat with it. The flow moves to chat
/// automatically once the document is embedded.
#[component]
pub fn SingleDocPage() -> impl IntoView {
    let state = expect_context::<AppState>();
    let flow = DocFlow::new(state.endpoints.clone(), FlowConfig::single_doc());

    let input = RwSignal::new(String::new());

    let features = vec![
        Feature {
            icon: "\u{1F4AC}",
            title: "Ask Anything",
            description: "Upload a document and chat naturally with it, like talking to an expert.",
        },
        Feature {
            icon: "\u{1F4C4}",
            title: "Quick Insights",
            description: "AI extracts summaries, answers questions, and highlights key points instantly.",
        },
        Feature {
            icon: "\u{2728}",
            title: "Smart Analysis",
            description: "Understand complex documents by asking simple questions in plain English.",
        },
    ];

    let uploading = {
        let queue = flow.queue;
        Signal::derive(move || !queue.get().is_empty())
    };
    let progress = {
        let queue = flow.queue;
        Signal::derive(move || queue.get().first().map(|item| item.progress).unwrap_or(0))
    };
    let current_file = {
        let queue = flow.queue;
        Signal::derive(move || {
            queue
                .get()
                .first()
                .map(|item| item.file_name.clone())
                .unwrap_or_default()
        })
    };
    let chat_title = {
        let documents = flow.documents;
        Signal::derive(move || {
            documents
                .get()
                .first()
                .map(|doc| doc.file_name.clone())
                .unwrap_or_default()
        })
    };

    let on_select = {
        let flow = flow.clone();
        Callback::new(move |file: web_sys::File| flow.ingest(file))
    };
    let on_start = {
        let flow = flow.clone();
        Callback::new(move |_| flow.begin())
    };
    let on_send = {
        let flow = flow.clone();
        move || {
            if flow.send(input.get_untracked()) {
                input.set(String::new());
            }
        }
    };

    let stage = flow.stage;
    let messages = flow.messages;
    let analyzing = flow.analyzing;

    view! {
        <div class="p-6 h-screen w-full flex items-center justify-center">
            <div class="relative z-10 w-full max-w-6xl">
                {move || match stage.get() {
                    Stage::Intro => view! {
                        <IntroHero
                            title="Chat With Your"
                            highlight="Documents"
                            description="Upload a document and start asking questions. Get instant \
                                         insights, summaries, and answers."
                            features=features.clone()
                            on_start=on_start
                        />
                    }
                    .into_any(),
                    Stage::Input => view! {
                        <FileUploader
                            on_select=on_select
                            uploading=uploading
                            progress=progress
                            file_name=current_file
                        />
                    }
                    .into_any(),
                    _ => view! {
                        <div class="w-full h-[90vh] bg-black/40 backdrop-blur-xl rounded-2xl p-6 \
                                    flex flex-col text-white shadow-lg">
                            <ChatWindow messages=messages analyzing=analyzing title=chat_title />
                            <ChatInput input=input on_send=on_send.clone() analyzing=analyzing />
                        </div>
                    }
                    .into_any(),
                }}
            </div>
        </div>
    }
}

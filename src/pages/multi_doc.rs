//! Multi-document chat page

use leptos::prelude::*;

use crate::components::{ChatInput, ChatWindow, Feature, FileUploader, IntroHero, ProgressBar};
use crate::flow::{DocFlow, FlowConfig, Stage};
use crate::state::AppState;
use crate::types::UploadItem;

/// Upload several documents and chat across them. Chat unlocks once two
/// or more documents are embedded; documents can be removed from the
/// ready list before analysis starts.
#[component]
pub fn MultiDocPage() -> impl IntoView {
    let state = expect_context::<AppState>();
    let flow = DocFlow::new(state.endpoints.clone(), FlowConfig::multi_doc());

    let input = RwSignal::new(String::new());

    let features = vec![
        Feature {
            icon: "\u{1F4C4}",
            title: "Upload Multiple Docs",
            description: "Easily upload PDFs, Word files, or text files together.",
        },
        Feature {
            icon: "\u{2728}",
            title: "Cross-Doc Analysis",
            description: "Ask questions that span across multiple documents for deeper insights.",
        },
        Feature {
            icon: "\u{26A1}",
            title: "Instant Summaries",
            description: "AI quickly extracts key points from all uploaded files.",
        },
    ];

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
    let start_chat = {
        let flow = flow.clone();
        Callback::new(move |_| flow.start_chat())
    };
    let remove_document = {
        let flow = flow.clone();
        move |index: usize| flow.remove_document(index)
    };

    let min_documents = flow.config().min_documents;
    let stage = flow.stage;
    let queue = flow.queue;
    let documents = flow.documents;
    let messages = flow.messages;
    let analyzing = flow.analyzing;
    let ready = {
        let flow = flow.clone();
        Signal::derive(move || flow.ready_for_chat())
    };
    let chat_title =
        Signal::derive(move || format!("{} Documents", documents.get().len()));

    view! {
        <div class="p-6 min-h-screen w-full flex items-center justify-center">
            <div class="relative z-10 w-full max-w-7xl">
                {move || match stage.get() {
                    Stage::Intro => view! {
                        <IntroHero
                            title="Chat With Your"
                            highlight="Multiple Documents"
                            description="Upload multiple documents and ask cross-document questions. \
                                         Get combined insights instantly."
                            features=features.clone()
                            on_start=on_start
                        />
                    }
                    .into_any(),
                    Stage::Input => {
                        let remove_document = remove_document.clone();
                        view! {
                            <div class="w-full flex gap-6">
                                <div class="w-1/2 flex flex-col gap-6">
                                    <Show when=move || !queue.get().is_empty()>
                                        <div>
                                            <h3 class="text-lg font-semibold text-white mb-3">
                                                "Uploading..."
                                            </h3>
                                            <div class="space-y-2">
                                                <For
                                                    each=move || queue.get()
                                                    key=|item| (item.id, item.progress)
                                                    children=move |item| view! {
                                                        <UploadProgressRow item=item />
                                                    }
                                                />
                                            </div>
                                        </div>
                                    </Show>

                                    <FileUploader
                                        on_select=on_select
                                        uploading=Signal::derive(|| false)
                                        progress=Signal::derive(|| 0u8)
                                        file_name=Signal::derive(String::new)
                                    />
                                    <div class="mt-6 text-center">
                                        <p class="text-gray-400 bg-white/5 backdrop-blur-sm rounded-lg \
                                                  px-4 py-2 inline-block">
                                            {format!(
                                                "Upload at least {min_documents} documents to start analysis"
                                            )}
                                        </p>
                                    </div>
                                </div>

                                <div class="w-1/2">
                                    <div class="h-full bg-white/5 backdrop-blur-sm rounded-2xl p-6 \
                                                border border-white/10">
                                        <h2 class="text-xl font-semibold text-white mb-4">
                                            {move || {
                                                if documents.get().is_empty() {
                                                    "No Documents Yet"
                                                } else {
                                                    "Uploaded Documents"
                                                }
                                            }}
                                        </h2>

                                        <div class="grid grid-cols-1 gap-3 mb-6 max-h-[60vh] \
                                                    overflow-y-auto pr-2 custom-scrollbar">
                                            {move || {
                                                let remove_document = remove_document.clone();
                                                documents
                                                    .get()
                                                    .into_iter()
                                                    .enumerate()
                                                    .map(|(index, doc)| {
                                                        let remove = remove_document.clone();
                                                        let size_mb = doc.size_bytes / (1024.0 * 1024.0);
                                                        view! {
                                                            <div class="p-3 bg-black/20 rounded-lg border \
                                                                        border-white/10 flex items-center gap-3">
                                                                <div class="flex-1 min-w-0">
                                                                    <p class="text-sm text-gray-300 truncate">
                                                                        {doc.file_name.clone()}
                                                                    </p>
                                                                    <p class="text-xs text-gray-500">
                                                                        {format!("{:.2} MB", size_mb)}
                                                                    </p>
                                                                </div>
                                                                <button
                                                                    on:click=move |_| remove(index)
                                                                    class="p-1.5 bg-red-500/80 hover:bg-red-500 \
                                                                           rounded-full text-white text-xs"
                                                                >
                                                                    "\u{2715}"
                                                                </button>
                                                            </div>
                                                        }
                                                    })
                                                    .collect::<Vec<_>>()
                                            }}
                                        </div>

                                        <Show when=move || ready.get()>
                                            <button
                                                on:click=move |_| start_chat.run(())
                                                class="w-full p-4 bg-gradient-to-r from-purple-600 \
                                                       to-blue-600 rounded-lg text-white font-medium shadow-lg"
                                            >
                                                {move || {
                                                    format!(
                                                        "Start Analyzing {} Documents",
                                                        documents.get().len(),
                                                    )
                                                }}
                                            </button>
                                        </Show>
                                    </div>
                                </div>
                            </div>
                        }
                        .into_any()
                    }
                    _ => view! {
                        <div class="w-full h-[90vh] bg-black/40 backdrop-blur-xl rounded-2xl p-6 \
                                    flex flex-col text-white">
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

/// One in-flight upload with its staged progress
#[component]
fn UploadProgressRow(item: UploadItem) -> impl IntoView {
    view! {
        <div class="p-4 bg-white/5 backdrop-blur-sm rounded-lg border border-white/10 mb-3">
            <div class="flex items-center gap-4">
                <div class="flex-1">
                    <div class="flex justify-between mb-1">
                        <p class="text-sm text-gray-300 truncate max-w-[200px]">
                            {item.file_name.clone()}
                        </p>
                    </div>
                    <ProgressBar progress=Signal::derive(move || item.progress) />
                </div>
            </div>
        </div>
    }
}

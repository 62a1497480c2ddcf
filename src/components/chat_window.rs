//! Chat window: ordered transcript plus the typing indicator

use leptos::prelude::*;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

use crate::components::LoadingIndicator;
use crate::markdown::render_markdown;
use crate::types::{Message, MessageBody, MessageKind};

/// Transcript view. User messages sit right, bot messages left, errors
/// are tinted. Structured answers render as markdown with a collapsible
/// sources section; each message owns its own disclosure state.
#[component]
pub fn ChatWindow(
    messages: RwSignal<Vec<Message>>,
    #[prop(into)] analyzing: Signal<bool>,
    #[prop(into)] title: Signal<String>,
) -> impl IntoView {
    let end_ref = NodeRef::<leptos::html::Div>::new();

    // Keep the newest message in view
    Effect::new(move |_| {
        messages.track();
        analyzing.track();
        if let Some(el) = end_ref.get() {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            el.scroll_into_view_with_scroll_into_view_options(&options);
        }
    });

    view! {
        <div class="flex-1 overflow-y-auto space-y-4 pr-2 custom-scrollbar">
            <div class="flex items-center gap-3 border-b border-white/10 pb-4 mb-4 sticky top-0 bg-[#010207]">
                <h2 class="text-xl font-bold">
                    "Chatting with: "
                    <span class="text-purple-400">{move || title.get()}</span>
                </h2>
            </div>

            <For
                each=move || messages.get()
                key=|message| message.id.clone()
                children=move |message| view! { <ChatMessage message=message /> }
            />

            <Show when=move || analyzing.get()>
                <LoadingIndicator />
            </Show>
            <div node_ref=end_ref></div>
        </div>
    }
}

/// One transcript entry
#[component]
fn ChatMessage(message: Message) -> impl IntoView {
    let bubble = match message.kind {
        MessageKind::User => "ml-auto bg-purple-600/30 text-white",
        MessageKind::Error => "bg-red-600/30 text-white",
        MessageKind::Bot => "bg-white/10 text-gray-200",
    };

    let rendered = match &message.body {
        MessageBody::Answer(answer) => Some(render_markdown(&answer.response)),
        MessageBody::Text(_) => None,
    };
    let sources = message.sources().to_vec();
    let text = message.text().to_string();

    view! {
        <div class=format!("p-3 rounded-lg w-fit max-w-[80%] {}", bubble)>
            {match rendered {
                Some(html) => view! {
                    <div class="chat-markdown break-words" inner_html=html></div>
                }
                .into_any(),
                None => view! {
                    <p class="whitespace-pre-wrap break-words">{text}</p>
                }
                .into_any(),
            }}
            {(!sources.is_empty()).then(|| view! { <SourcePanel sources=sources /> })}
        </div>
    }
}

/// Collapsible list of supporting context snippets
#[component]
fn SourcePanel(sources: Vec<String>) -> impl IntoView {
    let open = RwSignal::new(false);

    view! {
        <div class="mt-4">
            <button
                on:click=move |_| open.update(|v| *v = !*v)
                class="flex items-center gap-2 text-purple-400 hover:text-purple-300 transition-colors"
            >
                {move || if open.get() { "Hide Sources" } else { "Show Sources" }}
            </button>
            <Show when=move || open.get()>
                <div class="mt-2 p-3 bg-white/5 rounded-lg text-sm text-gray-400 space-y-2">
                    {sources
                        .iter()
                        .enumerate()
                        .map(|(index, source)| {
                            view! {
                                <div>
                                    <p class="font-medium text-gray-300">
                                        {format!("Source {}:", index + 1)}
                                    </p>
                                    <pre class="whitespace-pre-wrap break-words text-xs">
                                        {source.clone()}
                                    </pre>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </Show>
        </div>
    }
}

//! Chat input: text field, send button, optional voice dictation

use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{SpeechRecognition, SpeechRecognitionEvent};

/// Text input with a send button. Enter sends; the send control is
/// disabled while a request is in flight or the field is empty. A mic
/// toggle appends dictated text when the browser offers speech
/// recognition and is hidden when it does not.
#[component]
pub fn ChatInput(
    input: RwSignal<String>,
    on_send: impl Fn() + Clone + 'static,
    #[prop(into)] analyzing: Signal<bool>,
) -> impl IntoView {
    let listening = RwSignal::new(false);
    let recognition = StoredValue::new_local(init_recognition(input, listening));
    let has_mic = recognition.with_value(|r| r.is_some());

    let on_keydown = {
        let on_send = on_send.clone();
        move |ev: web_sys::KeyboardEvent| {
            if ev.key() == "Enter"
                && !analyzing.get_untracked()
                && !input.get_untracked().trim().is_empty()
            {
                on_send();
            }
        }
    };

    let on_click = {
        let on_send = on_send.clone();
        move |_| {
            if !input.get_untracked().trim().is_empty() {
                on_send();
            }
        }
    };

    let toggle_mic = move |_| {
        recognition.with_value(|rec| {
            let Some(rec) = rec else { return };
            if listening.get_untracked() {
                rec.stop();
                listening.set(false);
            } else if rec.start().is_ok() {
                listening.set(true);
            }
        });
    };

    view! {
        <div class="mt-4 flex items-center gap-3">
            <input
                type="text"
                prop:value=move || input.get()
                on:input=move |ev| input.set(event_target_value(&ev))
                on:keydown=on_keydown
                placeholder="Ask a question..."
                class="flex-1 p-3 rounded-lg bg-black/50 border border-white/20 text-white \
                       placeholder-gray-500 focus:outline-none focus:border-purple-500"
            />
            <Show when=move || has_mic>
                <button
                    on:click=toggle_mic
                    class=move || {
                        format!(
                            "p-3 rounded-lg border border-white/20 transition-colors {}",
                            if listening.get() {
                                "bg-red-600/60 text-white"
                            } else {
                                "bg-black/50 text-gray-400 hover:text-white"
                            },
                        )
                    }
                >
                    "\u{1F3A4}"
                </button>
            </Show>
            <button
                on:click=on_click
                disabled=move || analyzing.get() || input.get().trim().is_empty()
                class="p-3 rounded-lg bg-gradient-to-r from-purple-600 to-blue-600 text-white \
                       font-semibold flex items-center gap-2 shadow-md disabled:opacity-50 \
                       disabled:cursor-not-allowed"
            >
                "Send"
            </button>
        </div>
    }
}

/// Construct the browser recognition facility if it exists. Transcripts
/// append into the input; the toggle resets when recognition ends on its
/// own.
fn init_recognition(input: RwSignal<String>, listening: RwSignal<bool>) -> Option<SpeechRecognition> {
    let rec = speech_recognition();
    let Some(rec) = rec else {
        tracing::debug!("speech recognition unavailable, hiding dictation toggle");
        return None;
    };

    let on_result = Closure::<dyn FnMut(SpeechRecognitionEvent)>::new(
        move |ev: SpeechRecognitionEvent| {
            let transcript = ev
                .results()
                .and_then(|results| results.get(ev.result_index()))
                .and_then(|result| result.get(0))
                .map(|alternative| alternative.transcript());
            if let Some(transcript) = transcript {
                input.update(|value| {
                    if !value.is_empty() && !value.ends_with(' ') {
                        value.push(' ');
                    }
                    value.push_str(transcript.trim());
                });
            }
        },
    );
    rec.set_onresult(Some(on_result.as_ref().unchecked_ref()));
    on_result.forget();

    let on_end = Closure::<dyn FnMut()>::new(move || listening.set(false));
    rec.set_onend(Some(on_end.as_ref().unchecked_ref()));
    on_end.forget();

    Some(rec)
}

/// Look up the recognition constructor, prefixed or not
fn speech_recognition() -> Option<SpeechRecognition> {
    let window = web_sys::window()?;
    for name in ["SpeechRecognition", "webkitSpeechRecognition"] {
        // A failed lookup must not stop us trying the prefixed name
        let Ok(ctor) = js_sys::Reflect::get(&window, &JsValue::from_str(name)) else {
            continue;
        };
        if let Some(ctor) = ctor.dyn_ref::<js_sys::Function>() {
            if let Ok(instance) = js_sys::Reflect::construct(ctor, &js_sys::Array::new()) {
                return Some(instance.unchecked_into());
            }
        }
    }
    None
}

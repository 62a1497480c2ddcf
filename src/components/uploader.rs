//! File uploader: drag-and-drop plus a native picker

use leptos::prelude::*;
use web_sys::HtmlInputElement;

use crate::components::ProgressBar;

/// Drop target and file picker. Dropping a file and picking one through
/// the input are equivalent: the callback fires once with the file.
/// While an upload is in progress the drop target is replaced by a
/// progress bar driven by the caller.
#[component]
pub fn FileUploader(
    on_select: Callback<web_sys::File>,
    /// Extension filter hint passed to the picker
    #[prop(default = ".pdf,.doc,.docx,.txt")]
    accepted: &'static str,
    #[prop(into)] uploading: Signal<bool>,
    #[prop(into)] progress: Signal<u8>,
    #[prop(into)] file_name: Signal<String>,
) -> impl IntoView {
    let on_drop = move |ev: web_sys::DragEvent| {
        ev.prevent_default();
        let file = ev.data_transfer().and_then(|dt| dt.files()).and_then(|f| f.get(0));
        if let Some(file) = file {
            on_select.run(file);
        }
    };

    let on_change = move |ev: web_sys::Event| {
        let input: HtmlInputElement = event_target(&ev);
        if let Some(file) = input.files().and_then(|f| f.get(0)) {
            on_select.run(file);
        }
        // Allow re-selecting the same file
        input.set_value("");
    };

    view! {
        <div
            on:dragover=move |ev: web_sys::DragEvent| ev.prevent_default()
            on:drop=on_drop
            class="relative w-full max-w-lg mx-auto p-10 border-2 border-dashed border-white/20 \
                   rounded-2xl flex flex-col items-center justify-center gap-4 bg-black/30 \
                   backdrop-blur-md text-white cursor-pointer hover:border-purple-600 \
                   transition-all duration-200 min-h-[300px]"
        >
            <Show
                when=move || uploading.get()
                fallback=move || {
                    view! {
                        <div class="flex flex-col items-center justify-center gap-4 w-full h-full">
                            <span class="text-4xl animate-bounce">"\u{2B06}\u{FE0F}"</span>
                            <div class="text-center">
                                <p class="text-lg font-semibold text-gray-300">
                                    "Drag & Drop your document here"
                                </p>
                                <p class="text-sm text-gray-500 mt-2">"or click to select"</p>
                            </div>
                            <input
                                type="file"
                                accept=accepted
                                on:change=on_change
                                class="absolute inset-0 opacity-0 cursor-pointer"
                            />
                        </div>
                    }
                }
            >
                <div class="flex flex-col items-center gap-4 w-full">
                    <p class="text-lg font-semibold text-gray-300">
                        {move || format!("Uploading {}...", file_name.get())}
                    </p>
                    <ProgressBar progress=progress />
                </div>
            </Show>
        </div>
    }
}

//! Percentage progress bar

use leptos::prelude::*;

/// Progress bar driven by a caller-supplied percentage
#[component]
pub fn ProgressBar(#[prop(into)] progress: Signal<u8>) -> impl IntoView {
    view! {
        <div class="w-full flex flex-col gap-1">
            <div class="w-full h-2 bg-gray-700 rounded-full overflow-hidden">
                <div
                    class="h-full bg-gradient-to-r from-purple-600 to-blue-600 transition-all duration-300"
                    style=move || format!("width: {}%", progress.get().min(100))
                ></div>
            </div>
            <span class="text-sm text-gray-500 text-center">
                {move || format!("{}%", progress.get().min(100))}
            </span>
        </div>
    }
}

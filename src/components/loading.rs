//! Loading indicators

use leptos::prelude::*;

/// Animated typing dots shown while a response is in flight
#[component]
pub fn LoadingIndicator() -> impl IntoView {
    view! {
        <div class="flex items-center gap-2 p-3 rounded-lg bg-white/5 w-fit">
            <div class="flex space-x-2">
                <div class="w-2 h-2 bg-purple-500 rounded-full animate-bounce"></div>
                <div
                    class="w-2 h-2 bg-purple-500 rounded-full animate-bounce"
                    style="animation-delay: 150ms"
                ></div>
                <div
                    class="w-2 h-2 bg-purple-500 rounded-full animate-bounce"
                    style="animation-delay: 300ms"
                ></div>
            </div>
        </div>
    }
}

/// Full-screen branded overlay used by the auth pages
#[component]
pub fn PageLoader() -> impl IntoView {
    view! {
        <div class="fixed inset-0 bg-[#010207] flex items-center justify-center z-50">
            <div class="relative">
                <div class="absolute inset-0 flex items-center justify-center">
                    <div class="w-32 h-32 bg-purple-600/30 rounded-full blur-xl animate-pulse"></div>
                    <div class="absolute w-32 h-32 bg-blue-600/30 rounded-full blur-xl animate-pulse"></div>
                </div>
                <div class="relative z-10 flex flex-col items-center">
                    <div class="text-3xl font-bold text-white mb-4">"AuroraDocs"</div>
                    <div class="flex gap-2">
                        <div class="w-3 h-3 rounded-full bg-gradient-to-r from-purple-400 to-blue-400 animate-bounce"></div>
                        <div
                            class="w-3 h-3 rounded-full bg-gradient-to-r from-purple-400 to-blue-400 animate-bounce"
                            style="animation-delay: 200ms"
                        ></div>
                        <div
                            class="w-3 h-3 rounded-full bg-gradient-to-r from-purple-400 to-blue-400 animate-bounce"
                            style="animation-delay: 400ms"
                        ></div>
                    </div>
                </div>
            </div>
        </div>
    }
}

//! Sign-in page

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;

use crate::components::PageLoader;
use crate::state::AppState;
use crate::types::StoredUser;

const BRAND_FEATURES: &[(&str, &str)] = &[
    ("Smart Chat", "Natural conversations with your documents"),
    ("Quick Notes", "AI-powered note generation and summaries"),
    ("Visual Maps", "Transform text into interactive mindmaps"),
    ("Multi-Doc Analysis", "Connect information across documents"),
];

/// Branded split screen: marketing copy left, credentials form right.
/// Any credentials are accepted after a simulated delay; submission
/// persists the session and navigates home.
#[component]
pub fn SignInPage() -> impl IntoView {
    let state = expect_context::<AppState>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let loading = RwSignal::new(false);

    let on_submit = Callback::new(move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let session = state.session.clone();
        let navigate = navigate.clone();
        loading.set(true);

        spawn_local(async move {
            // Simulated auth round trip; there is no server to verify against
            gloo_timers::future::TimeoutFuture::new(2_000).await;
            session.sign_in(&StoredUser {
                name: "Test User".to_string(),
                email: email.get_untracked(),
            });
            navigate(
                "/",
                NavigateOptions {
                    replace: true,
                    ..Default::default()
                },
            );
        });
    });

    view! {
        <Show
            when=move || !loading.get()
            fallback=|| view! { <PageLoader /> }
        >
            <div class="h-screen w-screen flex relative bg-[#010207] overflow-hidden">
                <div class="w-[60%] h-full flex flex-col justify-center px-20 relative">
                    <div class="space-y-8 relative z-10">
                        <div class="space-y-4 mb-12">
                            <div class="flex items-center gap-2 mb-8">
                                <span class="text-2xl font-bold text-white">"AuroraDocs"</span>
                            </div>
                            <h1 class="text-7xl font-bold text-white leading-tight">
                                "Transform your "
                                <span class="bg-gradient-to-r from-purple-400 via-pink-400 to-blue-400 \
                                             bg-clip-text text-transparent">
                                    "documents"
                                </span>
                                " into knowledge"
                            </h1>
                            <p class="text-gray-400 text-lg max-w-md">
                                "Experience the future of document interaction with AI-powered \
                                 analysis and intelligent conversations."
                            </p>
                        </div>

                        <div class="grid grid-cols-2 gap-8">
                            {BRAND_FEATURES
                                .iter()
                                .map(|(title, desc)| {
                                    view! {
                                        <div class="space-y-2">
                                            <h3 class="text-white font-semibold">{*title}</h3>
                                            <p class="text-gray-400 text-sm">{*desc}</p>
                                        </div>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </div>
                    </div>
                </div>

                <div class="w-[40%] h-full flex items-center justify-center backdrop-blur-3xl relative">
                    <div class="w-full max-w-md mx-8 bg-white/[0.03] backdrop-blur-xl rounded-2xl \
                                border border-white/10 p-8 space-y-6">
                        <div class="space-y-2 mb-6 text-center">
                            <h2 class="text-2xl font-bold text-white">"Welcome back"</h2>
                            <p class="text-gray-400">"Sign in to continue your journey"</p>
                        </div>

                        <form on:submit=move |ev| on_submit.run(ev) class="space-y-4">
                            <div class="space-y-2">
                                <label class="text-sm text-gray-400">"Email"</label>
                                <input
                                    type="email"
                                    prop:value=move || email.get()
                                    on:input=move |ev| email.set(event_target_value(&ev))
                                    placeholder="Enter your email"
                                    required=true
                                    class="w-full h-12 px-4 rounded-lg bg-black/20 border \
                                           border-white/10 text-white"
                                />
                            </div>
                            <div class="space-y-2">
                                <label class="text-sm text-gray-400">"Password"</label>
                                <input
                                    type="password"
                                    prop:value=move || password.get()
                                    on:input=move |ev| password.set(event_target_value(&ev))
                                    placeholder="Enter your password"
                                    required=true
                                    class="w-full h-12 px-4 rounded-lg bg-black/20 border \
                                           border-white/10 text-white"
                                />
                            </div>

                            <button
                                type="submit"
                                class="w-full h-12 bg-gradient-to-r from-purple-600 to-blue-600 \
                                       rounded-lg text-white hover:opacity-90 mt-6"
                            >
                                "Sign In \u{2192}"
                            </button>
                        </form>

                        <p class="text-sm text-center text-gray-400 mt-6">
                            "New to AuroraDocs? "
                            <a href="/signup" class="text-purple-400 hover:text-purple-300">
                                "Create an account"
                            </a>
                        </p>
                    </div>
                </div>
            </div>
        </Show>
    }
}

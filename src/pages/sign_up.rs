//! Sign-up page

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;

use crate::components::PageLoader;
use crate::state::AppState;
use crate::types::StoredUser;

/// Account creation. Same simulated round trip as sign-in; the chosen
/// name is what the profile page and chat welcome show afterwards.
#[component]
pub fn SignUpPage() -> impl IntoView {
    let state = expect_context::<AppState>();
    let navigate = use_navigate();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let loading = RwSignal::new(false);

    let on_submit = Callback::new(move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let session = state.session.clone();
        let navigate = navigate.clone();
        loading.set(true);

        spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(2_000).await;
            session.sign_in(&StoredUser {
                name: name.get_untracked(),
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
            <div class="h-screen w-screen flex items-center justify-center relative bg-[#010207] overflow-hidden">
                <div class="w-full max-w-md bg-white/[0.03] backdrop-blur-xl rounded-2xl \
                            border border-white/10 p-8 space-y-6">
                    <div class="space-y-2 mb-6 text-center">
                        <span class="text-2xl font-bold text-white">"AuroraDocs"</span>
                        <h2 class="text-2xl font-bold text-white">"Create your account"</h2>
                        <p class="text-gray-400">"Start turning documents into knowledge"</p>
                    </div>

                    <form on:submit=move |ev| on_submit.run(ev) class="space-y-4">
                        <div class="space-y-2">
                            <label class="text-sm text-gray-400">"Name"</label>
                            <input
                                type="text"
                                prop:value=move || name.get()
                                on:input=move |ev| name.set(event_target_value(&ev))
                                placeholder="Your name"
                                required=true
                                class="w-full h-12 px-4 rounded-lg bg-black/20 border border-white/10 text-white"
                            />
                        </div>
                        <div class="space-y-2">
                            <label class="text-sm text-gray-400">"Email"</label>
                            <input
                                type="email"
                                prop:value=move || email.get()
                                on:input=move |ev| email.set(event_target_value(&ev))
                                placeholder="you@example.com"
                                required=true
                                class="w-full h-12 px-4 rounded-lg bg-black/20 border border-white/10 text-white"
                            />
                        </div>
                        <div class="space-y-2">
                            <label class="text-sm text-gray-400">"Password"</label>
                            <input
                                type="password"
                                prop:value=move || password.get()
                                on:input=move |ev| password.set(event_target_value(&ev))
                                placeholder="\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}"
                                required=true
                                class="w-full h-12 px-4 rounded-lg bg-black/20 border border-white/10 text-white"
                            />
                        </div>

                        <button
                            type="submit"
                            class="w-full h-12 bg-gradient-to-r from-purple-600 to-blue-600 \
                                   rounded-lg text-white hover:opacity-90 mt-6"
                        >
                            "Create Account"
                        </button>
                    </form>

                    <p class="text-sm text-center text-gray-400 mt-6">
                        "Already have an account? "
                        <a href="/signin" class="text-purple-400 hover:text-purple-300">
                            "Sign in"
                        </a>
                    </p>
                </div>
            </div>
        </Show>
    }
}

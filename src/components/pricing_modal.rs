//! Pricing modal with the three static plan tiers

use leptos::ev;
use leptos::prelude::*;

use crate::types::{plan_catalog, Plan};

/// Upgrade modal. Closes on the close button, a backdrop click, or
/// Escape; clicks inside the panel stay inside. Selecting a non-disabled
/// plan just closes the modal; there is no payment integration.
#[component]
pub fn PricingModal(open: RwSignal<bool>) -> impl IntoView {
    let escape = window_event_listener(ev::keydown, move |ev| {
        if ev.key() == "Escape" {
            open.set(false);
        }
    });
    on_cleanup(move || escape.remove());

    view! {
        <Show when=move || open.get()>
            <div
                on:click=move |_| open.set(false)
                class="fixed inset-0 z-50 flex items-center justify-center p-4 bg-black/50 backdrop-blur-sm"
            >
                <div
                    on:click=|ev| ev.stop_propagation()
                    class="relative w-full max-w-4xl bg-[#0a0a0a] rounded-2xl p-6 border border-white/10 overflow-hidden"
                >
                    <button
                        on:click=move |_| open.set(false)
                        class="absolute top-4 right-4 p-2 hover:bg-white/5 rounded-lg text-gray-400"
                    >
                        "\u{2715}"
                    </button>

                    <div class="relative z-10">
                        <div class="text-center mb-8">
                            <h2 class="text-2xl font-bold text-white mb-2">"Upgrade to Premium"</h2>
                            <p class="text-gray-400">
                                "Unlock the full potential of AI-powered learning"
                            </p>
                        </div>

                        <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
                            {plan_catalog()
                                .into_iter()
                                .map(|plan| view! { <PlanCard plan=plan open=open /> })
                                .collect::<Vec<_>>()}
                        </div>

                        <div class="mt-8 text-center text-sm text-gray-400">
                            <p>
                                "30-day money-back guarantee \u{2022} Cancel anytime \u{2022} Secure payment"
                            </p>
                        </div>
                    </div>
                </div>
            </div>
        </Show>
    }
}

/// One plan tier
#[component]
fn PlanCard(plan: Plan, open: RwSignal<bool>) -> impl IntoView {
    let select = {
        let name = plan.name;
        let disabled = plan.disabled;
        move |_| {
            if !disabled {
                tracing::info!("selected plan {}", name);
                open.set(false);
            }
        }
    };

    view! {
        <div class=format!(
            "relative p-6 rounded-xl border {}",
            if plan.popular { "border-purple-500 bg-purple-500/10" } else { "border-white/10 bg-white/5" },
        )>
            {plan
                .popular
                .then(|| {
                    view! {
                        <div class="absolute -top-3 left-1/2 -translate-x-1/2">
                            <div class="px-3 py-1 bg-purple-500 rounded-full text-xs font-medium text-white">
                                "Most Popular"
                            </div>
                        </div>
                    }
                })}

            <div class="text-center mb-6">
                <h3 class="text-lg font-semibold text-white mb-2">{plan.name}</h3>
                <div class="text-2xl font-bold text-white mb-1">{plan.price}</div>
            </div>

            <ul class="space-y-3 mb-6">
                {plan
                    .features
                    .iter()
                    .map(|feature| {
                        view! {
                            <li class="flex items-center gap-2">
                                <span class="text-green-500">"\u{2713}"</span>
                                <span class="text-sm text-gray-300">{*feature}</span>
                            </li>
                        }
                    })
                    .collect::<Vec<_>>()}
            </ul>

            <button
                on:click=select
                disabled=plan.disabled
                class=format!(
                    "w-full p-3 rounded-lg font-medium transition-all duration-200 {}",
                    if plan.popular {
                        "bg-gradient-to-r from-purple-600 to-blue-600 text-white hover:opacity-90"
                    } else if plan.disabled {
                        "bg-white/5 text-gray-500 cursor-not-allowed"
                    } else {
                        "bg-white/5 text-gray-300 hover:bg-white/10"
                    },
                )
            >
                {plan.button_text}
            </button>
        </div>
    }
}

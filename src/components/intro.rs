//! Shared intro stage: hero headline, call to action, feature cards

use leptos::prelude::*;

/// One feature card on an intro screen
#[derive(Debug, Clone, Copy)]
pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

/// Hero section every feature page opens with. The button advances the
/// flow into its input stage.
#[component]
pub fn IntroHero(
    title: &'static str,
    highlight: &'static str,
    description: &'static str,
    features: Vec<Feature>,
    on_start: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="space-y-16">
            <div class="text-center space-y-6">
                <h1 class="text-6xl font-bold text-white leading-tight">
                    {title}
                    <span class="block bg-gradient-to-r from-purple-400 via-pink-400 to-blue-400 \
                                 bg-clip-text text-transparent">
                        {highlight}
                    </span>
                </h1>

                <p class="text-xl text-gray-400 max-w-2xl mx-auto">{description}</p>

                <button
                    on:click=move |_| on_start.run(())
                    class="px-8 py-4 bg-gradient-to-r from-purple-600 to-blue-600 rounded-xl \
                           text-white font-medium hover:scale-105 transition-all duration-200 \
                           flex items-center gap-2 mx-auto"
                >
                    "Get Started \u{2192}"
                </button>
            </div>

            <div class="grid grid-cols-1 md:grid-cols-3 gap-8">
                {features
                    .into_iter()
                    .map(|feature| {
                        view! {
                            <div class="p-8 bg-white/[0.03] backdrop-blur-xl rounded-2xl \
                                        border border-white/10 transition-all duration-300">
                                <div class="w-12 h-12 rounded-xl bg-gradient-to-br \
                                            from-purple-600/20 to-blue-600/20 flex items-center \
                                            justify-center mb-6 text-2xl">
                                    {feature.icon}
                                </div>
                                <h3 class="text-xl font-semibold text-white mb-3">{feature.title}</h3>
                                <p class="text-gray-400 leading-relaxed">{feature.description}</p>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </div>
    }
}

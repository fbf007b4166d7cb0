use leptos::prelude::*;

use crate::frontend::theme::Accent;

/// Static record describing one marketing tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FeatureDescriptor {
    pub icon: &'static str,
    pub title: &'static str,
    pub desc: &'static str,
    pub accent: Accent,
}

/// Marketing tile shown beside the login form. No state, no callbacks.
#[component]
pub fn FeatureCard(
    icon: &'static str,
    title: &'static str,
    desc: &'static str,
    #[prop(optional)] accent: Accent,
) -> impl IntoView {
    view! {
        <div class="bg-gray-800/50 border border-gray-700/50 rounded-xl p-5">
            <div class="flex gap-4">
                <div class=format!(
                    "w-12 h-12 rounded-lg flex items-center justify-center text-xl {}",
                    accent.badge_class()
                )>
                    {icon}
                </div>
                <div>
                    <h4 class="text-white font-semibold">{title}</h4>
                    <p class="text-gray-400 text-sm">{desc}</p>
                </div>
            </div>
        </div>
    }
}

use leptos::prelude::*;

use crate::frontend::theme::Accent;

/// Labeled input control.
///
/// Pure display and forwarding: the parent owns the value, the rendered
/// `type` attribute, and the meaning of the optional right-side icon button
/// (the login page uses it for the password visibility toggle). Every
/// keystroke forwards the raw target value through `on_change`; nothing is
/// validated or transformed here.
#[component]
pub fn LabeledInput(
    #[prop(into)] label: String,
    icon: &'static str,
    #[prop(into)] input_type: Signal<&'static str>,
    #[prop(into)] value: Signal<String>,
    on_change: Callback<String>,
    #[prop(into)] placeholder: String,
    #[prop(optional, into)] error: String,
    #[prop(optional)] right_icon: Option<Signal<&'static str>>,
    #[prop(optional)] on_right_click: Option<Callback<()>>,
    #[prop(optional)] accent: Accent,
) -> impl IntoView {
    let has_error = !error.is_empty();
    let border_class = if has_error {
        "border-red-500/50"
    } else {
        "border-gray-700"
    };
    let input_class = format!(
        "w-full px-4 py-3.5 bg-gray-900/80 border rounded-xl text-white placeholder-gray-500 \
         focus:outline-none transition-all {} {}",
        border_class,
        accent.focus_class()
    );

    view! {
        <div>
            <label class="text-sm text-gray-300 flex items-center gap-2 mb-2">
                <span class=accent.label_icon_class()>{icon}</span>
                {label}
            </label>

            <div class="relative">
                <input
                    type=move || input_type.get()
                    prop:value=move || value.get()
                    on:input=move |ev| on_change.run(event_target_value(&ev))
                    placeholder=placeholder
                    class=input_class
                />

                {right_icon.map(|ri| view! {
                    <button
                        type="button"
                        class="absolute right-4 top-1/2 -translate-y-1/2 text-gray-400 hover:text-gray-200"
                        on:click=move |_| {
                            if let Some(cb) = on_right_click {
                                cb.run(());
                            }
                        }
                    >
                        {move || ri.get()}
                    </button>
                })}
            </div>

            {has_error.then(|| view! {
                <p class="text-red-400 text-sm mt-2">"⚠ " {error.clone()}</p>
            })}
        </div>
    }
}

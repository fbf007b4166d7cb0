//! Login screen for the AIshan AI dashboard.
//!
//! The page owns all form state in a single [`FormState`] record behind one
//! `RwSignal`. Submission never navigates: the browser default is suppressed
//! and the live values are handed to the injected submit handler, or logged
//! to the console when none is supplied.

use leptos::ev::SubmitEvent;
use leptos::logging;
use leptos::prelude::*;

use crate::frontend::components::{FeatureCard, FeatureDescriptor, LabeledInput};
use crate::frontend::theme::Accent;

/// Demo account advertised under the form.
pub const DEMO_EMAIL: &str = "demo@aishan.ai";
pub const DEMO_PASSWORD: &str = "password1234";

/// The values that cross the submit boundary, snapshotted verbatim.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
    pub remember_me: bool,
}

/// Local state owned by the login form. Mutated only through its methods,
/// never reset, dropped with the page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormState {
    pub email: String,
    pub password: String,
    pub password_visible: bool,
    pub remember_me: bool,
}

impl FormState {
    /// Replaces the email verbatim. No trimming, no case folding.
    pub fn set_email(&mut self, value: String) {
        self.email = value;
    }

    /// Replaces the password verbatim.
    pub fn set_password(&mut self, value: String) {
        self.password = value;
    }

    /// Flips password masking. The stored value is untouched.
    pub fn toggle_visibility(&mut self) {
        self.password_visible = !self.password_visible;
    }

    pub fn toggle_remember_me(&mut self) {
        self.remember_me = !self.remember_me;
    }

    /// The `type` attribute the password input renders with.
    pub fn password_input_type(&self) -> &'static str {
        if self.password_visible {
            "text"
        } else {
            "password"
        }
    }

    /// Glyph for the visibility toggle button.
    pub fn visibility_icon(&self) -> &'static str {
        if self.password_visible {
            "🙈"
        } else {
            "👁"
        }
    }

    /// Snapshot of the triple handed to the submit boundary.
    pub fn credentials(&self) -> Credentials {
        Credentials {
            email: self.email.clone(),
            password: self.password.clone(),
            remember_me: self.remember_me,
        }
    }
}

/// Static display slots for field and form errors. Nothing computes these;
/// a slot renders iff its string is non-empty.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ValidationMessages {
    pub email: &'static str,
    pub password: &'static str,
    pub general: &'static str,
}

/// Placeholder demo content carried over from the mockup: the general slot
/// is permanently populated, the field slots are empty.
pub const DEMO_MESSAGES: ValidationMessages = ValidationMessages {
    email: "",
    password: "",
    general: "Contoh error: Kredensial tidak valid",
};

/// The two marketing tiles on the left panel.
pub const FEATURES: [FeatureDescriptor; 2] = [
    FeatureDescriptor {
        icon: "📈",
        title: "Analisis Transaksi AI",
        desc: "Input bahasa natural, jurnal otomatis",
        accent: Accent::Blue,
    },
    FeatureDescriptor {
        icon: "🗄",
        title: "Pencatatan Otomatis",
        desc: "Debit & kredit terisi akurat",
        accent: Accent::Emerald,
    },
];

/// Login page component.
///
/// `on_submit` is the only integration seam: a caller-supplied handler
/// receiving the submitted [`Credentials`]. Without one, the triple is
/// logged to the console and nothing else happens.
#[component]
pub fn LoginPage(#[prop(optional)] on_submit: Option<Callback<Credentials>>) -> impl IntoView {
    let form = RwSignal::new(FormState::default());
    let messages = DEMO_MESSAGES;

    let submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let credentials = form.with(|f| f.credentials());
        match on_submit {
            Some(handler) => handler.run(credentials),
            None => logging::log!("login submitted: {:?}", credentials),
        }
    };

    view! {
        <div class="min-h-screen bg-gradient-to-br from-slate-900 to-gray-900 flex items-center justify-center p-6">
            <div class="max-w-6xl w-full grid md:grid-cols-2 gap-10">
                // Left panel: brand, features, journal preview
                <div class="hidden md:flex flex-col justify-center space-y-8">
                    <div class="flex items-center gap-4">
                        <div class="w-14 h-14 bg-gradient-to-br from-blue-500 to-emerald-500 rounded-xl flex items-center justify-center text-2xl">
                            "🧮"
                        </div>
                        <div>
                            <h1 class="text-4xl font-bold text-white">
                                "AI"<span class="text-blue-400">"shan"</span>" "
                                <span class="text-emerald-400">"AI"</span>
                            </h1>
                            <p class="text-gray-400">"AI Asisten Akuntansi"</p>
                        </div>
                    </div>

                    {FEATURES
                        .into_iter()
                        .map(|f| view! {
                            <FeatureCard icon=f.icon title=f.title desc=f.desc accent=f.accent/>
                        })
                        .collect_view()}

                    <div class="bg-gradient-to-r from-blue-900/30 to-emerald-900/30 border border-gray-700/50 rounded-xl p-5">
                        <p class="text-gray-300 italic text-sm mb-3">
                            "\"Menyetor uang sebagai modal sebesar 3 juta\""
                        </p>
                        <div class="grid grid-cols-2 gap-3 text-sm">
                            <div class="bg-gray-900/80 p-3 rounded-lg">
                                <p class="text-blue-400">"Debit"</p>
                                <p class="text-white font-semibold">"Kas: Rp 3.000.000"</p>
                            </div>
                            <div class="bg-gray-900/80 p-3 rounded-lg">
                                <p class="text-emerald-400">"Kredit"</p>
                                <p class="text-white font-semibold">"Modal: Rp 3.000.000"</p>
                            </div>
                        </div>
                    </div>
                </div>

                // Right panel: the form card
                <div class="bg-gray-800/80 backdrop-blur-sm border border-gray-700/50 rounded-2xl p-8 shadow-2xl">
                    <div class="text-center mb-8">
                        <div class="inline-flex w-16 h-16 bg-gradient-to-br from-blue-500 to-emerald-500 rounded-2xl items-center justify-center mb-4 text-2xl">
                            "🔒"
                        </div>
                        <h2 class="text-3xl font-bold text-white">"Masuk ke Dashboard"</h2>
                        <p class="text-gray-400 text-sm">"Akses AI asisten akuntansi Anda"</p>
                    </div>

                    {(!messages.general.is_empty()).then(|| view! {
                        <div class="mb-6 bg-red-900/30 border border-red-700/50 rounded-xl p-4 text-red-200 text-sm">
                            "⚠ " {messages.general}
                        </div>
                    })}

                    <form on:submit=submit class="space-y-6">
                        <LabeledInput
                            label="Email"
                            icon="✉"
                            input_type="email"
                            value=Signal::derive(move || form.with(|f| f.email.clone()))
                            on_change=Callback::new(move |v| form.update(|f| f.set_email(v)))
                            placeholder="nama@perusahaan.com"
                            error=messages.email
                        />

                        <LabeledInput
                            label="Password"
                            icon="🔒"
                            input_type=Signal::derive(move || form.with(|f| f.password_input_type()))
                            value=Signal::derive(move || form.with(|f| f.password.clone()))
                            on_change=Callback::new(move |v| form.update(|f| f.set_password(v)))
                            placeholder="••••••••"
                            error=messages.password
                            accent=Accent::Emerald
                            right_icon=Signal::derive(move || form.with(|f| f.visibility_icon()))
                            on_right_click=Callback::new(move |_| form.update(|f| f.toggle_visibility()))
                        />

                        <div class="flex items-center justify-between text-sm">
                            <label class="flex items-center gap-2 text-gray-400">
                                <input
                                    type="checkbox"
                                    prop:checked=move || form.with(|f| f.remember_me)
                                    on:change=move |_| form.update(|f| f.toggle_remember_me())
                                    class="rounded bg-gray-900 border-gray-600"
                                />
                                "Ingat saya"
                            </label>
                            <a href="#" class="text-blue-400 hover:text-blue-300">"Lupa password?"</a>
                        </div>

                        <button
                            type="submit"
                            class="w-full py-4 bg-gradient-to-r from-blue-600 to-emerald-600 hover:from-blue-700 hover:to-emerald-700 text-white font-semibold rounded-xl shadow-lg"
                        >
                            "Masuk ke Dashboard"
                        </button>
                    </form>

                    <p class="text-xs text-gray-500 text-center mt-6">
                        "Demo: "<span class="text-blue-400">{DEMO_EMAIL}</span>" / "
                        <span class="text-emerald-400">{DEMO_PASSWORD}</span>
                    </p>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_typing_concatenates_verbatim() {
        let mut form = FormState::default();
        let typed = "Demo@Aishan.AI ";
        for i in 1..=typed.chars().count() {
            let prefix: String = typed.chars().take(i).collect();
            form.set_email(prefix);
        }
        // Case preserved, trailing space not trimmed
        assert_eq!(form.email, typed);
    }

    #[test]
    fn test_visibility_toggle_parity() {
        let mut form = FormState::default();
        form.set_password(DEMO_PASSWORD.to_string());
        assert_eq!(form.password_input_type(), "password");

        for toggles in 1..=6 {
            form.toggle_visibility();
            let expected = if toggles % 2 == 1 { "text" } else { "password" };
            assert_eq!(form.password_input_type(), expected);
            assert_eq!(form.password, DEMO_PASSWORD);
        }
    }

    #[test]
    fn test_visibility_icon_tracks_state() {
        let mut form = FormState::default();
        assert_eq!(form.visibility_icon(), "👁");
        form.toggle_visibility();
        assert_eq!(form.visibility_icon(), "🙈");
    }

    #[test]
    fn test_remember_me_strictly_alternates() {
        let mut form = FormState::default();
        assert!(!form.remember_me);
        form.toggle_remember_me();
        assert!(form.remember_me);
        form.toggle_remember_me();
        assert!(!form.remember_me);
    }

    #[test]
    fn test_credentials_snapshot_is_verbatim() {
        let mut form = FormState::default();
        form.set_email(DEMO_EMAIL.to_string());
        form.set_password(DEMO_PASSWORD.to_string());
        form.toggle_remember_me();

        let credentials = form.credentials();
        assert_eq!(credentials.email, DEMO_EMAIL);
        assert_eq!(credentials.password, DEMO_PASSWORD);
        assert!(credentials.remember_me);
    }

    #[test]
    fn test_demo_messages_populate_only_general_slot() {
        assert!(DEMO_MESSAGES.email.is_empty());
        assert!(DEMO_MESSAGES.password.is_empty());
        assert_eq!(DEMO_MESSAGES.general, "Contoh error: Kredensial tidak valid");
    }

    #[test]
    fn test_empty_messages_render_nothing() {
        let messages = ValidationMessages::default();
        assert!(messages.general.is_empty());
    }

    #[test]
    fn test_feature_list_order_and_content() {
        assert_eq!(FEATURES.len(), 2);
        assert_eq!(FEATURES[0].title, "Analisis Transaksi AI");
        assert_eq!(FEATURES[0].desc, "Input bahasa natural, jurnal otomatis");
        assert_eq!(FEATURES[0].accent, Accent::Blue);
        assert_eq!(FEATURES[1].title, "Pencatatan Otomatis");
        assert_eq!(FEATURES[1].desc, "Debit & kredit terisi akurat");
        assert_eq!(FEATURES[1].accent, Accent::Emerald);
    }
}

//! Client-side UI for AIshan AI.

pub mod components;
pub mod pages;
pub mod theme;

use leptos::prelude::*;
use leptos_meta::*;

use pages::LoginPage;

/// Root application component. Renders the login screen unconditionally;
/// there is no routing and no other page.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="AIshan AI — Masuk ke Dashboard"/>
        <LoginPage/>
    }
}

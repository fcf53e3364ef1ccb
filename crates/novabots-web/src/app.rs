//! Main App Component

use leptos::prelude::*;
use novabots_core::BotProfile;

use crate::pages::HomePage;

/// Root application component
#[component]
pub fn App(bots: Vec<BotProfile>) -> impl IntoView {
    view! {
        <main class="app">
            <HomePage bots=bots />
        </main>
    }
}

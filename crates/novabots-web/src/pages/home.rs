//! Home Page

use leptos::prelude::*;
use novabots_core::{BotProfile, BuildMode, run_dev_checks};

use crate::backdrop::ParticleBackdrop;
use crate::components::{FeaturedBots, Hero, Navbar};

#[component]
pub fn HomePage(bots: Vec<BotProfile>) -> impl IntoView {
    let (bots, _) = signal(bots);

    // Debug builds re-check the catalog whenever it changes.
    Effect::new(move |_| {
        bots.with(|bots| {
            run_dev_checks(BuildMode::current(), bots);
        });
    });

    view! {
        <div class="home">
            <ParticleBackdrop />
            <Navbar />
            <Hero />
            <FeaturedBots bots=bots />
        </div>
    }
}

//! UI Components

use leptos::prelude::*;
use novabots_core::BotProfile;

/// Outline robot glyph used in the navbar brand
#[component]
fn BotIcon() -> impl IntoView {
    view! {
        <svg
            class="brand-icon"
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            <path d="M12 8V4H8" />
            <rect width="16" height="12" x="4" y="8" rx="2" />
            <path d="M2 14h2" />
            <path d="M20 14h2" />
            <path d="M15 13v2" />
            <path d="M9 13v2" />
        </svg>
    }
}

/// Top bar with brand, links and login
#[component]
pub fn Navbar() -> impl IntoView {
    view! {
        <nav class="navbar">
            <div class="brand">
                <span class="brand-bounce">
                    <BotIcon />
                </span>
                "Alyan's Project Bot"
            </div>
            <div class="nav-links">
                <a href="#" class="nav-link">"Home"</a>
                <a href="#" class="nav-link">"Explore"</a>
                <button type="button" class="btn btn-pill btn-gradient">"Login"</button>
            </div>
        </nav>
    }
}

/// Headline, pitch and the two call-to-action buttons
#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="hero">
            <div class="hero-copy">
                <h1 class="hero-title">"Create Your Own AI Bot"</h1>
                <p class="hero-subtext">"Build and interact with unique AI characters."</p>
                <div class="hero-actions" data-testid="hero-actions">
                    <button type="button" class="btn btn-pill btn-gradient btn-lg">
                        "Create Bot"
                    </button>
                    <button type="button" class="btn btn-pill btn-outline-fill btn-lg">
                        <span class="fill-sweep" aria-hidden="true"></span>
                        <span class="btn-label">"Explore Bots"</span>
                    </button>
                </div>
            </div>
            <div class="hero-art">
                <div class="hero-robot">"🤖"</div>
            </div>
        </section>
    }
}

/// Glass card for one bot
#[component]
pub fn BotCard(bot: BotProfile) -> impl IntoView {
    let BotProfile { name, description, avatar_glyph } = bot;

    view! {
        <div class="bot-card-wrap">
            <article class="bot-card">
                <div class="bot-avatar">{avatar_glyph}</div>
                <h3 class="bot-name">{name}</h3>
                <p class="bot-description">{description}</p>
                <div class="bot-card-actions">
                    <button type="button" class="btn btn-pill btn-gradient">"Chat"</button>
                </div>
            </article>
        </div>
    }
}

/// Grid of featured bots, one card per profile
#[component]
pub fn FeaturedBots(bots: ReadSignal<Vec<BotProfile>>) -> impl IntoView {
    view! {
        <section class="featured">
            <h2>"Featured Bots"</h2>
            <div class="bot-grid">
                <For
                    each=move || bots.get().into_iter().enumerate()
                    key=|(index, bot)| (*index, bot.name.clone())
                    children=move |(_, bot)| view! { <BotCard bot=bot /> }
                />
            </div>
        </section>
    }
}

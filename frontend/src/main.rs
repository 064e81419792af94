use log::{info, Level};
use yew::prelude::*;

mod config;
mod contact_form;
mod content;
mod scroll;
mod components {
    pub mod icons;
    pub mod notification;
}
mod sections {
    pub mod contact;
    pub mod footer;
    pub mod hero;
    pub mod navigation;
    pub mod portfolio;
    pub mod process;
    pub mod services;
    pub mod stats;
}

use components::notification::{Notice, ToastAction, ToastQueue, Toaster};
use sections::{
    contact::Contact,
    footer::Footer,
    hero::Hero,
    navigation::Navigation,
    portfolio::Portfolio,
    process::Process,
    services::Services,
    stats::Stats,
};

const GLOBAL_STYLES: &str = r#"
    :root {
        --luxury-white: #FFFFFF;
        --luxury-cream: #F9F5F2;
        --luxury-accent: #F2E8E4;
        --luxury-border: #E8DDD8;
        --luxury-rose: #A67070;
        --luxury-rose-dark: #8C5A5A;
        --luxury-charcoal: #333333;
        --luxury-muted-text: #8A7F7B;
        --font-heading: 'Playfair Display', Georgia, serif;
        --font-body: 'Manrope', -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
    }
    * {
        box-sizing: border-box;
        margin: 0;
        padding: 0;
    }
    body {
        font-family: var(--font-body);
        color: var(--luxury-charcoal);
        background: var(--luxury-white);
        -webkit-font-smoothing: antialiased;
    }
    .section-inner {
        max-width: 80rem;
        margin: 0 auto;
        padding: 0 6rem;
    }
    .section-header {
        text-align: center;
        margin-bottom: 4rem;
    }
    .section-title {
        font-family: var(--font-heading);
        font-size: clamp(2.25rem, 4vw, 3rem);
        font-weight: 500;
        letter-spacing: -0.01em;
        color: var(--luxury-charcoal);
    }
    .eyebrow {
        font-size: 0.875rem;
        font-weight: 500;
        letter-spacing: 0.1em;
        text-transform: uppercase;
        color: var(--luxury-rose);
        margin-bottom: 1rem;
    }
    .pill-button,
    .outline-button {
        display: inline-flex;
        align-items: center;
        gap: 0.5rem;
        padding: 1rem 2rem;
        border-radius: 9999px;
        cursor: pointer;
        font: inherit;
        font-size: 0.875rem;
        letter-spacing: 0.1em;
        text-transform: uppercase;
        transition: all 0.3s;
    }
    .pill-button {
        border: none;
        background: var(--luxury-rose);
        color: #fff;
    }
    .pill-button:hover {
        background: var(--luxury-rose-dark);
        transform: scale(1.05);
    }
    .outline-button {
        border: 2px solid var(--luxury-rose);
        background: transparent;
        color: var(--luxury-rose);
    }
    .outline-button:hover {
        background: var(--luxury-rose);
        color: #fff;
    }
    .fade-up {
        opacity: 0;
        animation: fadeUp 0.6s ease-out forwards;
    }
    @keyframes fadeUp {
        from { transform: translateY(30px); opacity: 0; }
        to { transform: translateY(0); opacity: 1; }
    }
    @media (max-width: 1024px) {
        .section-inner {
            padding: 0 3rem;
        }
    }
    @media (max-width: 768px) {
        .section-inner {
            padding: 0 1.5rem;
        }
    }
"#;

#[function_component]
fn App() -> Html {
    let toasts = use_reducer(ToastQueue::default);

    let notify = {
        let toasts = toasts.clone();
        Callback::from(move |notice: Notice| toasts.dispatch(ToastAction::Push(notice)))
    };
    let dismiss = {
        let toasts = toasts.clone();
        Callback::from(move |id: u32| toasts.dispatch(ToastAction::Dismiss(id)))
    };

    html! {
        <div class="app">
            <style>{ GLOBAL_STYLES }</style>
            <Navigation />
            <Hero />
            <Stats />
            <Services />
            <Portfolio />
            <Process />
            <Contact backend_url={config::get_backend_url()} on_notify={notify} />
            <Footer />
            <Toaster toasts={toasts.toasts.clone()} on_dismiss={dismiss} />
        </div>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}

use log::error;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::components::icons::{Icon, IconView};
use crate::content::ARTIST_NAME;
use crate::scroll::{nav_scrolled, scroll_to_section};

const LINKS: [(&str, &str); 3] = [
    ("services", "Services"),
    ("portfolio", "Portfolio"),
    ("process", "Process"),
];

#[function_component(Navigation)]
pub fn navigation() -> Html {
    let menu_open = use_state(|| false);
    let scrolled = use_state(|| false);

    {
        let scrolled = scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let listener = web_sys::window().map(|window| {
                    // A reload can restore the page mid-scroll before any event fires
                    scrolled.set(nav_scrolled(window.scroll_y().ok()));

                    let scroll_window = window.clone();
                    let scroll_callback = Closure::wrap(Box::new(move || {
                        scrolled.set(nav_scrolled(scroll_window.scroll_y().ok()));
                    }) as Box<dyn FnMut()>);

                    if window
                        .add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref())
                        .is_err()
                    {
                        error!("Failed to register scroll listener");
                    }
                    (window, scroll_callback)
                });

                move || {
                    if let Some((window, scroll_callback)) = listener {
                        let _ = window.remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    // Jumping to a section also collapses the mobile menu
    let go_to = {
        let menu_open = menu_open.clone();
        move |id: &'static str| {
            let menu_open = menu_open.clone();
            Callback::from(move |e: MouseEvent| {
                e.prevent_default();
                scroll_to_section(id);
                menu_open.set(false);
            })
        }
    };

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };

    html! {
        <nav class={classes!("top-nav", (*scrolled).then(|| "scrolled"))}>
            <style>
                {r#"
                    .top-nav {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        z-index: 50;
                        padding: 1.5rem 0;
                        background: transparent;
                        transition: all 0.3s ease;
                        animation: navIn 0.6s ease-out;
                    }
                    .top-nav.scrolled {
                        padding: 1rem 0;
                        background: var(--luxury-white);
                        box-shadow: 0 4px 12px rgba(0, 0, 0, 0.08);
                    }
                    .nav-content {
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                    }
                    .nav-logo {
                        font-family: var(--font-heading);
                        font-size: 1.75rem;
                        font-weight: 600;
                        color: var(--luxury-charcoal);
                        background: none;
                        border: none;
                        cursor: pointer;
                    }
                    .nav-links {
                        display: flex;
                        align-items: center;
                        gap: 2rem;
                    }
                    .nav-link {
                        background: none;
                        border: none;
                        cursor: pointer;
                        color: var(--luxury-charcoal);
                        font-size: 0.875rem;
                        font-weight: 500;
                        letter-spacing: 0.1em;
                        text-transform: uppercase;
                        transition: color 0.2s;
                    }
                    .nav-link:hover {
                        color: var(--luxury-rose);
                    }
                    .burger-menu {
                        display: none;
                        background: none;
                        border: none;
                        color: var(--luxury-charcoal);
                        cursor: pointer;
                    }
                    .mobile-menu {
                        display: flex;
                        flex-direction: column;
                        gap: 1rem;
                        margin-top: 1rem;
                        padding: 1.5rem;
                        background: var(--luxury-white);
                        border-top: 1px solid var(--luxury-border);
                    }
                    .mobile-menu .nav-link {
                        text-align: left;
                    }
                    @keyframes navIn {
                        from { transform: translateY(-100px); }
                        to { transform: translateY(0); }
                    }
                    @media (max-width: 768px) {
                        .nav-links {
                            display: none;
                        }
                        .burger-menu {
                            display: block;
                        }
                    }
                    @media (min-width: 769px) {
                        .mobile-menu {
                            display: none;
                        }
                    }
                "#}
            </style>
            <div class="section-inner nav-content">
                <button class="nav-logo" onclick={go_to("hero")} data-testid="logo-button">
                    { ARTIST_NAME }
                </button>

                <div class="nav-links">
                    { for LINKS.iter().map(|(id, label)| html! {
                        <button class="nav-link" onclick={go_to(*id)} data-testid={format!("nav-{}", id)}>
                            { *label }
                        </button>
                    }) }
                    <button class="pill-button" onclick={go_to("contact")} data-testid="nav-book-now-btn">
                        {"Book Now"}
                    </button>
                </div>

                <button class="burger-menu" onclick={toggle_menu} data-testid="mobile-menu-toggle" aria-label="Toggle menu">
                    <IconView icon={if *menu_open { Icon::Close } else { Icon::Menu }} />
                </button>
            </div>

            if *menu_open {
                <div class="mobile-menu" data-testid="mobile-menu">
                    { for LINKS.iter().map(|(id, label)| html! {
                        <button class="nav-link" onclick={go_to(*id)} data-testid={format!("mobile-nav-{}", id)}>
                            { *label }
                        </button>
                    }) }
                    <button class="pill-button" onclick={go_to("contact")} data-testid="mobile-nav-book-now-btn">
                        {"Book Now"}
                    </button>
                </div>
            }
        </nav>
    }
}

use yew::prelude::*;

use crate::components::icons::{Icon, IconView};
use crate::content::HERO_IMAGE;
use crate::scroll::scroll_to_section;

#[function_component(Hero)]
pub fn hero() -> Html {
    let book_now = Callback::from(|_: MouseEvent| scroll_to_section("contact"));
    let view_portfolio = Callback::from(|_: MouseEvent| scroll_to_section("portfolio"));

    html! {
        <section id="hero" class="hero">
            <style>
                {r#"
                    .hero {
                        position: relative;
                        min-height: 100vh;
                        display: flex;
                        align-items: center;
                        overflow: hidden;
                        padding-top: 5rem;
                    }
                    .hero-background {
                        position: absolute;
                        inset: 0;
                        z-index: 0;
                    }
                    .hero-background img {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                    }
                    .hero-background::after {
                        content: '';
                        position: absolute;
                        inset: 0;
                        background: linear-gradient(to right,
                            rgba(249, 245, 242, 0.95) 0%,
                            rgba(249, 245, 242, 0.8) 50%,
                            rgba(249, 245, 242, 0) 100%
                        );
                    }
                    .hero-content {
                        position: relative;
                        z-index: 1;
                        max-width: 36rem;
                        padding: 5rem 0;
                        animation: slideInLeft 0.8s ease-out;
                    }
                    .hero-content > * + * {
                        margin-top: 2rem;
                    }
                    .hero-title {
                        font-family: var(--font-heading);
                        font-size: clamp(3rem, 7vw, 4.5rem);
                        font-weight: 500;
                        line-height: 1.1;
                        color: var(--luxury-charcoal);
                    }
                    .hero-title span {
                        color: var(--luxury-rose);
                    }
                    .hero-description {
                        font-size: 1.125rem;
                        line-height: 1.7;
                        color: rgba(51, 51, 51, 0.8);
                    }
                    .hero-cta-group {
                        display: flex;
                        flex-wrap: wrap;
                        gap: 1rem;
                    }
                    @keyframes slideInLeft {
                        from { transform: translateX(-50px); opacity: 0; }
                        to { transform: translateX(0); opacity: 1; }
                    }
                "#}
            </style>
            <div class="hero-background">
                <img src={HERO_IMAGE} alt="High fashion editorial makeup portrait" />
            </div>
            <div class="section-inner">
                <div class="hero-content">
                    <p class="eyebrow" data-testid="hero-subtitle">{"Professional Makeup Artist"}</p>
                    <h1 class="hero-title" data-testid="hero-title">
                        {"Artistry That"}
                        <br />
                        <span>{"Transforms"}</span>
                    </h1>
                    <p class="hero-description" data-testid="hero-description">
                        {"Creating breathtaking looks for your most important moments. From bridal elegance to editorial glamour, experience luxury makeup artistry that celebrates your unique beauty."}
                    </p>
                    <div class="hero-cta-group">
                        <button class="pill-button" onclick={book_now} data-testid="hero-book-now-btn">
                            {"Book Now"}
                            <IconView icon={Icon::ArrowRight} size={18} />
                        </button>
                        <button class="outline-button" onclick={view_portfolio} data-testid="hero-view-portfolio-btn">
                            {"View Portfolio"}
                        </button>
                    </div>
                </div>
            </div>
        </section>
    }
}

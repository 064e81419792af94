use yew::prelude::*;

use crate::components::icons::{Icon, IconView};
use crate::content::SERVICES;
use crate::scroll::scroll_to_section;

#[function_component(Services)]
pub fn services() -> Html {
    let contact_for_pricing = Callback::from(|_: MouseEvent| scroll_to_section("contact"));

    html! {
        <section id="services" class="services">
            <style>
                {r#"
                    .services {
                        padding: 8rem 0;
                        background: var(--luxury-cream);
                    }
                    .services-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(320px, 1fr));
                        gap: 2rem;
                    }
                    .service-card {
                        position: relative;
                        overflow: hidden;
                        background: var(--luxury-white);
                        border: 1px solid var(--luxury-border);
                        transition: box-shadow 0.5s;
                    }
                    .service-card:hover {
                        box-shadow: 0 8px 30px -2px rgba(166, 112, 112, 0.2);
                    }
                    .service-image {
                        position: relative;
                        height: 20rem;
                        overflow: hidden;
                    }
                    .service-image img {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                        transition: transform 0.7s;
                    }
                    .service-card:hover .service-image img {
                        transform: scale(1.1);
                    }
                    .service-image::after {
                        content: '';
                        position: absolute;
                        inset: 0;
                        background: linear-gradient(to top, rgba(51, 51, 51, 0.8), transparent);
                    }
                    .service-body {
                        position: absolute;
                        bottom: 0;
                        left: 0;
                        right: 0;
                        padding: 2rem;
                        color: #fff;
                    }
                    .service-body h3 {
                        font-family: var(--font-heading);
                        font-size: 1.875rem;
                        font-weight: 500;
                        margin-bottom: 0.75rem;
                    }
                    .service-body p {
                        line-height: 1.6;
                        margin-bottom: 1rem;
                        color: rgba(255, 255, 255, 0.9);
                    }
                    .service-contact {
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                        background: none;
                        border: none;
                        color: #fff;
                        cursor: pointer;
                        font-size: 0.875rem;
                        letter-spacing: 0.1em;
                        text-transform: uppercase;
                        transition: color 0.2s;
                    }
                    .service-contact:hover {
                        color: var(--luxury-rose);
                    }
                "#}
            </style>
            <div class="section-inner">
                <div class="section-header">
                    <p class="eyebrow" data-testid="services-subtitle">{"What I Offer"}</p>
                    <h2 class="section-title" data-testid="services-title">{"Services"}</h2>
                </div>
                <div class="services-grid">
                    { for SERVICES.iter().enumerate().map(|(index, service)| html! {
                        <div
                            class="service-card fade-up"
                            style={format!("animation-delay: {}ms;", index * 150)}
                            data-testid={service.test_id}
                        >
                            <div class="service-image">
                                <img src={service.image} alt={service.title} loading="lazy" />
                            </div>
                            <div class="service-body">
                                <h3>{ service.title }</h3>
                                <p>{ service.description }</p>
                                <button
                                    class="service-contact"
                                    onclick={contact_for_pricing.clone()}
                                    data-testid={format!("{}-contact-btn", service.test_id)}
                                >
                                    {"Contact for Pricing"}
                                    <IconView icon={Icon::ArrowRight} size={16} />
                                </button>
                            </div>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}

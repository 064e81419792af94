use log::debug;
use yew::prelude::*;

use crate::content::{filter_portfolio, PortfolioFilter, PORTFOLIO};

#[function_component(Portfolio)]
pub fn portfolio() -> Html {
    let active_filter = use_state(PortfolioFilter::default);
    let items = filter_portfolio(&PORTFOLIO, *active_filter);

    html! {
        <section id="portfolio" class="portfolio">
            <style>
                {r#"
                    .portfolio {
                        padding: 8rem 0;
                        background: var(--luxury-white);
                    }
                    .portfolio-filters {
                        display: flex;
                        flex-wrap: wrap;
                        justify-content: center;
                        gap: 1rem;
                        margin-bottom: 3rem;
                    }
                    .filter-button {
                        padding: 0.625rem 1.5rem;
                        border: none;
                        border-radius: 9999px;
                        background: var(--luxury-accent);
                        color: var(--luxury-charcoal);
                        cursor: pointer;
                        font-size: 0.875rem;
                        letter-spacing: 0.1em;
                        text-transform: uppercase;
                        transition: all 0.3s;
                    }
                    .filter-button:hover,
                    .filter-button.active {
                        background: var(--luxury-rose);
                        color: #fff;
                    }
                    .portfolio-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fill, minmax(280px, 1fr));
                        gap: 1.5rem;
                    }
                    .portfolio-item {
                        position: relative;
                        aspect-ratio: 3 / 4;
                        overflow: hidden;
                        background: var(--luxury-accent);
                        cursor: pointer;
                        animation: zoomIn 0.4s ease-out;
                    }
                    .portfolio-item img {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                        transition: transform 0.7s;
                    }
                    .portfolio-item:hover img {
                        transform: scale(1.1);
                    }
                    .portfolio-overlay {
                        position: absolute;
                        inset: 0;
                        display: flex;
                        align-items: flex-end;
                        padding: 1.5rem;
                        background: rgba(51, 51, 51, 0);
                        transition: background 0.3s;
                    }
                    .portfolio-overlay h3 {
                        font-family: var(--font-heading);
                        font-size: 1.5rem;
                        font-weight: 500;
                        color: #fff;
                        opacity: 0;
                        transform: translateY(1rem);
                        transition: all 0.3s;
                    }
                    .portfolio-item:hover .portfolio-overlay {
                        background: rgba(51, 51, 51, 0.4);
                    }
                    .portfolio-item:hover .portfolio-overlay h3 {
                        opacity: 1;
                        transform: translateY(0);
                    }
                    @keyframes zoomIn {
                        from { transform: scale(0.9); opacity: 0; }
                        to { transform: scale(1); opacity: 1; }
                    }
                "#}
            </style>
            <div class="section-inner">
                <div class="section-header">
                    <p class="eyebrow" data-testid="portfolio-subtitle">{"My Work"}</p>
                    <h2 class="section-title" data-testid="portfolio-title">{"Portfolio"}</h2>
                </div>

                <div class="portfolio-filters">
                    { for PortfolioFilter::CHOICES.into_iter().map(|filter| {
                        let onclick = {
                            let active_filter = active_filter.clone();
                            Callback::from(move |_: MouseEvent| {
                                debug!("Portfolio filter set to {}", filter.id());
                                active_filter.set(filter);
                            })
                        };
                        html! {
                            <button
                                key={filter.id()}
                                class={classes!("filter-button", (*active_filter == filter).then(|| "active"))}
                                {onclick}
                                data-testid={filter.test_id()}
                            >
                                { filter.label() }
                            </button>
                        }
                    }) }
                </div>

                <div class="portfolio-grid">
                    { for items.into_iter().map(|item| html! {
                        <div key={item.id} class="portfolio-item" data-testid={item.test_id()}>
                            <img src={item.image} alt={item.title} loading="lazy" />
                            <div class="portfolio-overlay">
                                <h3>{ item.title }</h3>
                            </div>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}

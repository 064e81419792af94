use yew::prelude::*;

use crate::components::icons::IconView;
use crate::content::STATS;

#[function_component(Stats)]
pub fn stats() -> Html {
    html! {
        <section class="stats">
            <style>
                {r#"
                    .stats {
                        padding: 5rem 0;
                        background: var(--luxury-white);
                        border-top: 1px solid var(--luxury-border);
                        border-bottom: 1px solid var(--luxury-border);
                    }
                    .stats-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
                        gap: 3rem;
                        max-width: 72rem;
                        margin: 0 auto;
                    }
                    .stat {
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        gap: 1rem;
                        text-align: center;
                    }
                    .stat-icon {
                        color: var(--luxury-rose);
                    }
                    .stat-value {
                        font-family: var(--font-heading);
                        font-size: 3rem;
                        font-weight: 500;
                        color: var(--luxury-charcoal);
                    }
                    .stat-label {
                        font-size: 0.875rem;
                        letter-spacing: 0.1em;
                        text-transform: uppercase;
                        color: var(--luxury-muted-text);
                    }
                "#}
            </style>
            <div class="section-inner stats-grid">
                { for STATS.iter().enumerate().map(|(index, stat)| html! {
                    <div
                        class="stat fade-up"
                        style={format!("animation-delay: {}ms;", index * 200)}
                        data-testid={stat.test_id}
                    >
                        <div class="stat-icon"><IconView icon={stat.icon} size={32} /></div>
                        <div class="stat-value">{ stat.value }</div>
                        <div class="stat-label">{ stat.label }</div>
                    </div>
                }) }
            </div>
        </section>
    }
}

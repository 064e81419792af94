use yew::prelude::*;

use crate::content::PROCESS_STEPS;

#[function_component(Process)]
pub fn process() -> Html {
    html! {
        <section id="process" class="process">
            <style>
                {r#"
                    .process {
                        padding: 8rem 0;
                        background: var(--luxury-cream);
                    }
                    .timeline {
                        position: relative;
                        max-width: 72rem;
                        margin: 0 auto;
                    }
                    .timeline::before {
                        content: '';
                        position: absolute;
                        top: 0;
                        bottom: 0;
                        left: 50%;
                        width: 1px;
                        background: var(--luxury-border);
                    }
                    .timeline-step {
                        position: relative;
                        display: flex;
                        align-items: center;
                        gap: 2rem;
                        margin-bottom: 4rem;
                    }
                    .timeline-step.reverse {
                        flex-direction: row-reverse;
                    }
                    .step-number {
                        position: absolute;
                        left: 50%;
                        transform: translateX(-50%);
                        width: 4rem;
                        height: 4rem;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        border-radius: 50%;
                        background: var(--luxury-rose);
                        color: #fff;
                        font-family: var(--font-heading);
                        font-size: 1.25rem;
                        font-weight: 600;
                        box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                        z-index: 1;
                    }
                    .step-body {
                        flex: 1;
                        padding-right: 5rem;
                        text-align: right;
                    }
                    .timeline-step.reverse .step-body {
                        padding-right: 0;
                        padding-left: 5rem;
                        text-align: left;
                    }
                    .step-body h3 {
                        font-family: var(--font-heading);
                        font-size: 1.875rem;
                        font-weight: 500;
                        color: var(--luxury-charcoal);
                        margin-bottom: 0.75rem;
                    }
                    .step-body p {
                        line-height: 1.7;
                        color: rgba(51, 51, 51, 0.8);
                    }
                    .step-spacer {
                        flex: 1;
                    }
                    @media (max-width: 768px) {
                        .timeline::before,
                        .step-number {
                            left: 2rem;
                        }
                        .timeline-step,
                        .timeline-step.reverse {
                            flex-direction: column;
                            align-items: flex-start;
                        }
                        .step-body,
                        .timeline-step.reverse .step-body {
                            margin-left: 6rem;
                            padding: 0;
                            text-align: left;
                        }
                        .step-spacer {
                            display: none;
                        }
                    }
                "#}
            </style>
            <div class="section-inner">
                <div class="section-header">
                    <p class="eyebrow" data-testid="process-subtitle">{"How It Works"}</p>
                    <h2 class="section-title" data-testid="process-title">{"The Process"}</h2>
                </div>
                <div class="timeline">
                    { for PROCESS_STEPS.iter().enumerate().map(|(index, step)| html! {
                        <div
                            class={classes!("timeline-step", "fade-up", (index % 2 == 1).then(|| "reverse"))}
                            style={format!("animation-delay: {}ms;", index * 200)}
                            data-testid={format!("process-step-{}", index + 1)}
                        >
                            <div class="step-number">{ step.number }</div>
                            <div class="step-body">
                                <h3>{ step.title }</h3>
                                <p>{ step.description }</p>
                            </div>
                            <div class="step-spacer"></div>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}

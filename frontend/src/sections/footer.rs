use chrono::Datelike;
use yew::prelude::*;

use crate::components::icons::{Icon, IconView};
use crate::content::{ARTIST_NAME, CONTACT_EMAIL, INSTAGRAM_URL};

#[function_component(Footer)]
pub fn footer() -> Html {
    let current_year = chrono::Local::now().year();

    html! {
        <footer class="footer">
            <style>
                {r#"
                    .footer {
                        padding: 3rem 0;
                        background: var(--luxury-charcoal);
                        color: #fff;
                    }
                    .footer-content {
                        display: flex;
                        flex-wrap: wrap;
                        align-items: center;
                        justify-content: space-between;
                        gap: 1.5rem;
                    }
                    .footer-logo {
                        font-family: var(--font-heading);
                        font-size: 1.5rem;
                        font-weight: 600;
                    }
                    .footer-social {
                        display: flex;
                        gap: 1.5rem;
                    }
                    .footer-social a {
                        color: #fff;
                        transition: color 0.2s;
                    }
                    .footer-social a:hover {
                        color: var(--luxury-rose);
                    }
                    .footer-copyright {
                        font-size: 0.875rem;
                        color: rgba(255, 255, 255, 0.7);
                    }
                "#}
            </style>
            <div class="section-inner footer-content">
                <div class="footer-logo" data-testid="footer-logo">{ ARTIST_NAME }</div>
                <div class="footer-social" data-testid="footer-social">
                    <a
                        href={INSTAGRAM_URL}
                        target="_blank"
                        rel="noopener noreferrer"
                        aria-label="Instagram"
                        data-testid="footer-instagram-link"
                    >
                        <IconView icon={Icon::Instagram} />
                    </a>
                    <a href={format!("mailto:{}", CONTACT_EMAIL)} aria-label="Email" data-testid="footer-email-link">
                        <IconView icon={Icon::Mail} />
                    </a>
                </div>
                <div class="footer-copyright" data-testid="footer-copyright">
                    { format!("© {} {}. All rights reserved.", current_year, ARTIST_NAME) }
                </div>
            </div>
        </footer>
    }
}

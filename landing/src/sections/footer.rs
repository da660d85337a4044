use leptos::prelude::*;

const FOOTER_COLUMNS: &[(&str, &[&str])] = &[
    ("Company", &["About Us", "Blog", "Careers", "Contact"]),
    ("Resources", &["Pricing", "Help Center", "Become a Mentor", "Success Stories"]),
    ("Legal", &["Privacy", "Terms", "Cookies", "Refunds"]),
];

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="container">
                <div class="footer-grid">
                    <div class="footer-brand-col">
                        <div class="footer-brand">
                            <span class="footer-logo">"IK"</span>
                            <span class="footer-title">"InnovKaro"</span>
                        </div>
                        <p class="footer-tagline">
                            "Connect with mentors, build teams, and launch your startup journey."
                        </p>
                        <div class="footer-newsletter">
                            <input
                                type="email"
                                class="footer-newsletter-input"
                                placeholder="Email address"
                            />
                            <button class="footer-newsletter-btn">"Subscribe"</button>
                        </div>
                    </div>
                    {FOOTER_COLUMNS
                        .iter()
                        .map(|(category, links)| view! {
                            <div class="footer-col">
                                <h3 class="footer-heading">{*category}</h3>
                                <ul class="footer-list">
                                    {links
                                        .iter()
                                        .map(|link| view! {
                                            <li><a href="#" class="footer-link">{*link}</a></li>
                                        })
                                        .collect_view()}
                                </ul>
                            </div>
                        })
                        .collect_view()}
                    <div class="footer-col">
                        <h3 class="footer-heading">"Contact"</h3>
                        <p class="footer-contact">"Hyderabad, IN"</p>
                        <p class="footer-contact">"hi@innovkaro.com"</p>
                    </div>
                </div>
                <div class="footer-bottom">
                    <p class="footer-copyright">"© 2025 InnovKaro. All rights reserved."</p>
                    <div class="footer-social">
                        <a href="#" class="footer-social-link" aria-label="Twitter (X)">"X"</a>
                        <a href="#" class="footer-social-link" aria-label="LinkedIn">"in"</a>
                        <a href="#" class="footer-social-link" aria-label="Instagram">"ig"</a>
                        <a href="#" class="footer-social-link" aria-label="YouTube">"yt"</a>
                    </div>
                </div>
            </div>
        </footer>
    }
}

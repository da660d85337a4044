use leptos::prelude::*;

#[component]
pub fn FounderNetwork() -> impl IntoView {
    view! {
        <section id="founders" class="founders">
            <div class="container">
                <div class="section-header">
                    <p class="section-eyebrow">"Founder Network"</p>
                    <h2 class="section-title">"Building something? Talk to people who shipped."</h2>
                    <p class="section-description">
                        "Operators and founders mentor on idea validation, fundraising and the "
                        "first ten hires."
                    </p>
                </div>
                <div class="founder-grid">
                    <article class="founder-card">
                        <div class="founder-stat">"150+"</div>
                        <p class="founder-label">"founders mentoring"</p>
                    </article>
                    <article class="founder-card">
                        <div class="founder-stat">"40"</div>
                        <p class="founder-label">"cities covered"</p>
                    </article>
                    <article class="founder-card">
                        <div class="founder-stat">"1:1"</div>
                        <p class="founder-label">"sessions, not webinars"</p>
                    </article>
                    <article class="founder-card">
                        <div class="founder-stat">"0"</div>
                        <p class="founder-label">"cost to get matched"</p>
                    </article>
                </div>
                <div class="founder-cta">
                    <a href="/profile/create" class="btn btn-primary">"Join the network"</a>
                </div>
            </div>
        </section>
    }
}

use leptos::prelude::*;

#[component]
pub fn WhyChooseUs() -> impl IntoView {
    view! {
        <section class="why">
            <div class="container">
                <div class="section-header">
                    <p class="section-eyebrow">"Why InnovKaro"</p>
                    <h2 class="section-title">"Matching that actually matches"</h2>
                </div>
                <div class="why-grid">
                    <WhyCard
                        icon="[1]"
                        title="Verified mentors"
                        description="Every mentor is screened for the college, company and role they claim."
                    />
                    <WhyCard
                        icon="[2]"
                        title="Your mode, your pace"
                        description="Chat, video, group sessions or in person when the location lines up."
                    />
                    <WhyCard
                        icon="[3]"
                        title="Goal-first matching"
                        description="Tell us what you want to achieve; we match on goals, not follower counts."
                    />
                    <WhyCard
                        icon="[4]"
                        title="Beyond the first call"
                        description="Structured follow-ups keep the mentorship going past the intro session."
                    />
                </div>
            </div>
        </section>
    }
}

#[component]
fn WhyCard(icon: &'static str, title: &'static str, description: &'static str) -> impl IntoView {
    view! {
        <article class="why-card">
            <div class="why-icon">{icon}</div>
            <h3 class="why-title">{title}</h3>
            <p class="why-description">{description}</p>
        </article>
    }
}

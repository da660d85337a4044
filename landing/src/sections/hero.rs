use leptos::prelude::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="hero">
            <div class="container">
                <div class="hero-grid">
                    <div class="hero-content">
                        <div class="hero-badge">
                            <span class="hero-badge-dot"></span>
                            "1-on-1 mentorship, built for India"
                        </div>
                        <h1 class="hero-title">
                            <span class="hero-title-accent">"Find the mentor"</span>
                            <br />
                            "who has been where you are going."
                        </h1>
                        <p class="hero-description">
                            "Students, professionals and founders get matched with mentors "
                            "from top colleges and companies. Career guidance, interview prep, "
                            "startup advice over chat, video or in person."
                        </p>
                        <div class="hero-actions">
                            <a href="/profile/create" class="btn btn-primary">
                                "Find a Mentor"
                            </a>
                            <a href="#domains" class="btn btn-secondary">
                                "Explore Domains"
                            </a>
                        </div>
                    </div>
                    <MatchPreview />
                </div>
            </div>
        </section>
    }
}

// Mock match panel on the hero's right side.
#[component]
fn MatchPreview() -> impl IntoView {
    view! {
        <div class="hero-panel">
            <div class="panel-header">
                <span class="panel-title">"Your matches"</span>
                <span class="panel-pill">"3 new"</span>
            </div>
            <div class="panel-body">
                <div class="match-row">
                    <span class="match-avatar">"PS"</span>
                    <div class="match-info">
                        <span class="match-name">"Priya S."</span>
                        <span class="match-meta">"Product @ fintech | IIM-A"</span>
                    </div>
                    <span class="match-tag">"Career Guidance"</span>
                </div>
                <div class="match-row">
                    <span class="match-avatar">"RK"</span>
                    <div class="match-info">
                        <span class="match-name">"Rahul K."</span>
                        <span class="match-meta">"SDE-3 | IIT Bombay"</span>
                    </div>
                    <span class="match-tag">"Interview Prep"</span>
                </div>
                <div class="match-row">
                    <span class="match-avatar">"AN"</span>
                    <div class="match-info">
                        <span class="match-name">"Ananya N."</span>
                        <span class="match-meta">"Founder, 2x exit"</span>
                    </div>
                    <span class="match-tag">"Startup"</span>
                </div>
                <div class="panel-footer">
                    <span class="panel-footer-text">"Matched on goals, domain and mode"</span>
                </div>
            </div>
        </div>
    }
}

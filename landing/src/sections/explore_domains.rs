use leptos::prelude::*;

const DOMAINS: &[(&str, &str, &str)] = &[
    ("ET", "Engineering & Technology", "Software, AI/ML, core engineering and everything in between."),
    ("MD", "Medicine & Healthcare", "NEET prep, residency choices and clinical career paths."),
    ("BM", "Business & Management", "MBA admissions, product, consulting and operations."),
    ("DS", "Design", "UI/UX, industrial and communication design portfolios."),
    ("LW", "Law", "CLAT, corporate law and litigation tracks."),
    ("CS", "Civil Services", "UPSC strategy from officers who cleared it."),
    ("FN", "Finance", "CA, CFA, investment banking and fintech roles."),
    ("AH", "Arts & Humanities", "Research, writing and creative careers that pay."),
];

#[component]
pub fn ExploreDomains() -> impl IntoView {
    view! {
        <section id="domains" class="domains">
            <div class="container">
                <div class="section-header">
                    <p class="section-eyebrow">"Explore Domains"</p>
                    <h2 class="section-title">"Mentorship for every path"</h2>
                    <p class="section-description">
                        "Pick a domain and we connect you with mentors who work in it today."
                    </p>
                </div>
                <div class="domain-grid">
                    {DOMAINS
                        .iter()
                        .map(|(tag, title, blurb)| view! {
                            <DomainCard tag=*tag title=*title blurb=*blurb />
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn DomainCard(tag: &'static str, title: &'static str, blurb: &'static str) -> impl IntoView {
    view! {
        <article class="domain-card">
            <div class="domain-tag">{tag}</div>
            <h3 class="domain-title">{title}</h3>
            <p class="domain-blurb">{blurb}</p>
            <a href="/profile/create" class="domain-link">"Find mentors →"</a>
        </article>
    }
}

use leptos::prelude::*;

const COLLEGES: &[(&str, &str, u32)] = &[
    ("IIT Bombay", "Mumbai", 420),
    ("IIT Delhi", "New Delhi", 380),
    ("BITS Pilani", "Pilani", 310),
    ("IIM Ahmedabad", "Ahmedabad", 260),
    ("NIT Trichy", "Tiruchirappalli", 240),
    ("AIIMS Delhi", "New Delhi", 180),
    ("NLSIU", "Bengaluru", 120),
    ("NID", "Ahmedabad", 90),
];

#[component]
pub fn ExploreColleges() -> impl IntoView {
    view! {
        <section id="colleges" class="colleges">
            <div class="container">
                <div class="section-header">
                    <p class="section-eyebrow">"Explore by College"</p>
                    <h2 class="section-title">"Learn from people who sat where you sit"</h2>
                    <p class="section-description">
                        "Mentors tag their alma mater, so you can filter for the campus you are "
                        "aiming for or already on."
                    </p>
                </div>
                <div class="college-row">
                    {COLLEGES
                        .iter()
                        .map(|(name, city, mentors)| view! {
                            <article class="college-card">
                                <h3 class="college-name">{*name}</h3>
                                <p class="college-city">{*city}</p>
                                <p class="college-count">{*mentors} " mentors"</p>
                            </article>
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

use leptos::prelude::*;

const FAQS: &[(&str, &str)] = &[
    (
        "How does the matching work?",
        "You fill a two-step profile: who you are, then what you want mentorship in and how \
         you want it delivered. We use those preferences to shortlist mentors for you.",
    ),
    (
        "Is InnovKaro free?",
        "Creating a profile and getting matched is free. Individual mentors may offer paid \
         deep-dive sessions; that is always shown up front.",
    ),
    (
        "Who are the mentors?",
        "Working professionals, founders and senior students from top colleges and companies \
         across India. Every profile is verified before it goes live.",
    ),
    (
        "Can I be a mentor instead?",
        "Yes. Pick \"Mentor\" as your user type while creating your profile and we take it \
         from there.",
    ),
    (
        "What if a match does not work out?",
        "You can re-run matching with updated preferences at any time. Nothing is locked in \
         after the intro session.",
    ),
];

#[component]
pub fn Faqs() -> impl IntoView {
    let (open, set_open) = signal(None::<usize>);

    view! {
        <section id="faq" class="faqs">
            <div class="container">
                <div class="section-header">
                    <p class="section-eyebrow">"FAQ"</p>
                    <h2 class="section-title">"Questions we hear a lot"</h2>
                </div>
                <div class="faq-list">
                    {FAQS
                        .iter()
                        .enumerate()
                        .map(|(i, (question, answer))| view! {
                            <article class="faq-item">
                                <button
                                    class="faq-question"
                                    on:click=move |_| set_open.update(|o| {
                                        *o = if *o == Some(i) { None } else { Some(i) };
                                    })
                                >
                                    <span>{*question}</span>
                                    <span class="faq-marker">
                                        {move || if open.get() == Some(i) { "[-]" } else { "[+]" }}
                                    </span>
                                </button>
                                <Show when=move || open.get() == Some(i)>
                                    <p class="faq-answer">{*answer}</p>
                                </Show>
                            </article>
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

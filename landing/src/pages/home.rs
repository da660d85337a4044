// Home page - marketing sections in scroll order
use crate::sections::{
    ExploreColleges, ExploreDomains, Faqs, Footer, FounderNetwork, Hero, Nav, WhyChooseUs,
};
use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Nav />
        <main>
            <Hero />
            <ExploreDomains />
            <ExploreColleges />
            <FounderNetwork />
            <WhyChooseUs />
            <Faqs />
        </main>
        <Footer />
    }
}

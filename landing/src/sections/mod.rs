// Landing page sections

mod explore_colleges;
mod explore_domains;
mod faqs;
mod footer;
mod founder_network;
mod hero;
mod nav;
mod why_choose_us;

pub use explore_colleges::ExploreColleges;
pub use explore_domains::ExploreDomains;
pub use faqs::Faqs;
pub use footer::Footer;
pub use founder_network::FounderNetwork;
pub use hero::Hero;
pub use nav::Nav;
pub use why_choose_us::WhyChooseUs;

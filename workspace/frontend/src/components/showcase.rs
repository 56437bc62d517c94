mod feature_card;
mod preview;
mod tech_stack;
mod view;

pub use feature_card::{FeatureCard, FeatureCardProps};
pub use preview::Preview;
pub use tech_stack::TechStack;
pub use view::ProjectShowcase;

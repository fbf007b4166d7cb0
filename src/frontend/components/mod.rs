//! Reusable display components for the login screen

mod feature_card;
mod input;

pub use feature_card::{FeatureCard, FeatureDescriptor};
pub use input::LabeledInput;

//! Recommendations module - savings actions offered for simulation.

mod recommendations_service;

pub use recommendations_service::{RecommendationProviderTrait, StaticRecommendations};

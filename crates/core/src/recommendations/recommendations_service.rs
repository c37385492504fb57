//! Built-in savings action catalogue.

use rust_decimal_macros::dec;

use crate::simulation::{RiskLevel, ScenarioAction, SpendingChange};

/// Source of savings actions offered for simulation.
pub trait RecommendationProviderTrait: Send + Sync {
    fn recommendations(&self) -> Vec<ScenarioAction>;
}

/// Serves the fixed three-action catalogue. Stands in wherever a smarter
/// recommender is not configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticRecommendations;

impl RecommendationProviderTrait for StaticRecommendations {
    fn recommendations(&self) -> Vec<ScenarioAction> {
        vec![
            ScenarioAction {
                id: "a1".to_string(),
                title: "Reduce Food by 20%".to_string(),
                change: SpendingChange::percentage("Food & Dining", dec!(20)),
                buffer_gain_days: Some(6),
                risk: RiskLevel::Low,
                explanation: "Reduce dining out frequency".to_string(),
            },
            ScenarioAction {
                id: "a2".to_string(),
                title: "Pause subscriptions ($35)".to_string(),
                change: SpendingChange::fixed("Subscriptions", dec!(35)),
                buffer_gain_days: Some(2),
                risk: RiskLevel::Medium,
                explanation: "Cancel extras".to_string(),
            },
            ScenarioAction {
                id: "a3".to_string(),
                title: "Use public transit 2x/wk".to_string(),
                change: SpendingChange::percentage("Transport", dec!(15)),
                buffer_gain_days: Some(4),
                risk: RiskLevel::Low,
                explanation: "Switch trips to cheaper modes".to_string(),
            },
        ]
    }
}

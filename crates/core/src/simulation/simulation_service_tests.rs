#[cfg(test)]
mod tests {
    use crate::errors::{Error, Result};
    use crate::forecast::ForecastService;
    use crate::ledger::{CategorySpendRow, TransactionRecord, TransactionRepositoryTrait};
    use crate::simulation::{
        ActionError, BufferImprovement, RiskLevel, ScenarioAction, SimulationService,
        SimulationServiceTrait, SpendingChange,
    };
    use async_trait::async_trait;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use std::sync::Arc;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    struct MockTransactionRepository {
        rows: Vec<CategorySpendRow>,
    }

    #[async_trait]
    impl TransactionRepositoryTrait for MockTransactionRepository {
        async fn list_transactions(&self, _user_id: &str) -> Result<Vec<TransactionRecord>> {
            Ok(Vec::new())
        }

        async fn list_spend_by_date_and_category(
            &self,
            _user_id: &str,
        ) -> Result<Vec<CategorySpendRow>> {
            Ok(self.rows.clone())
        }
    }

    fn row(date: NaiveDate, category: &str, amount: Decimal) -> CategorySpendRow {
        CategorySpendRow {
            date,
            category: category.to_string(),
            amount,
        }
    }

    fn action(change: SpendingChange) -> ScenarioAction {
        ScenarioAction {
            id: "a1".to_string(),
            title: "Test action".to_string(),
            change,
            buffer_gain_days: None,
            risk: RiskLevel::Low,
            explanation: "test".to_string(),
        }
    }

    fn simulation_service(rows: Vec<CategorySpendRow>) -> SimulationService {
        let repository = Arc::new(MockTransactionRepository { rows });
        let forecast_service = Arc::new(ForecastService::new(repository.clone(), None, None));
        SimulationService::new(repository, forecast_service)
    }

    #[tokio::test]
    async fn action_on_unknown_category_leaves_forecasts_identical() {
        let service = simulation_service(vec![
            row(day(1), "food", dec!(-100)),
            row(day(2), "food", dec!(-80)),
        ]);

        let result = service
            .simulate(
                "user-1",
                &action(SpendingChange::percentage("travel", dec!(50))),
                Some(5),
            )
            .await
            .unwrap();

        assert_eq!(result.before, result.after);
        assert_eq!(result.metrics.improvement, BufferImprovement::Unchanged);
        assert_eq!(result.metrics.delta_final_balance, dec!(0));
    }

    #[tokio::test]
    async fn cut_that_zeroes_positive_sums_clears_the_shortfall() {
        // Positive per-date sums negate into negative balances, so zeroing
        // the category clears every projected shortfall day.
        let service = simulation_service(vec![
            row(day(1), "refunds", dec!(50)),
            row(day(2), "refunds", dec!(50)),
        ]);

        let result = service
            .simulate(
                "user-1",
                &action(SpendingChange::percentage("refunds", dec!(100))),
                Some(3),
            )
            .await
            .unwrap();

        assert_eq!(result.metrics.before_first_negative_day, Some(1));
        assert_eq!(result.metrics.after_first_negative_day, None);
        assert_eq!(result.metrics.improvement, BufferImprovement::Cleared);
        assert_eq!(result.metrics.delta_final_balance, dec!(50.00));
    }

    #[tokio::test]
    async fn before_and_after_share_the_same_projected_dates() {
        let service = simulation_service(vec![
            row(day(1), "food", dec!(-100)),
            row(day(4), "transport", dec!(-30)),
        ]);

        let result = service
            .simulate(
                "user-1",
                &action(SpendingChange::fixed("food", dec!(25))),
                Some(7),
            )
            .await
            .unwrap();

        assert_eq!(result.before.len(), 7);
        assert_eq!(result.before.dates, result.after.dates);
        assert_eq!(result.before.dates[0], day(5));
    }

    #[tokio::test]
    async fn malformed_percentage_is_rejected_before_touching_the_store() {
        let service = simulation_service(Vec::new());

        let err = service
            .simulate(
                "user-1",
                &action(SpendingChange::percentage("food", dec!(0))),
                None,
            )
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            Error::InvalidAction(ActionError::InvalidPercentage(_))
        ));
    }

    #[tokio::test]
    async fn malformed_amount_is_rejected() {
        let service = simulation_service(Vec::new());

        let err = service
            .simulate(
                "user-1",
                &action(SpendingChange::fixed("food", dec!(-35))),
                None,
            )
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            Error::InvalidAction(ActionError::InvalidAmount(_))
        ));
    }

    #[tokio::test]
    async fn horizon_defaults_to_fourteen_days() {
        let service = simulation_service(vec![row(day(1), "food", dec!(-100))]);

        let result = service
            .simulate(
                "user-1",
                &action(SpendingChange::percentage("food", dec!(10))),
                None,
            )
            .await
            .unwrap();

        assert_eq!(result.before.len(), 14);
        assert_eq!(result.after.len(), 14);
        assert!(result.explanation.starts_with("This action would"));
    }
}

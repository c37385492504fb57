#[cfg(test)]
mod tests {
    use crate::ledger::{
        category_summaries, daily_balances, daily_totals, spend_map_from_rows, spend_rows,
        sum_amounts_by_date, total_by_date, CategorySpendRow, TransactionRecord,
    };
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn txn(date: NaiveDate, category: &str, amount: Decimal) -> TransactionRecord {
        TransactionRecord::new("user-1", date, Some(category.to_string()), amount)
    }

    #[test]
    fn sums_same_day_transactions() {
        let txns = vec![
            txn(day(2024, 1, 5), "food", dec!(-70)),
            txn(day(2024, 1, 5), "transport", dec!(-50)),
            txn(day(2024, 1, 7), "salary", dec!(3000)),
        ];

        let sums = sum_amounts_by_date(&txns);

        assert_eq!(sums.len(), 2);
        assert_eq!(sums[&day(2024, 1, 5)], dec!(-120));
        assert_eq!(sums[&day(2024, 1, 7)], dec!(3000));
    }

    #[test]
    fn daily_balances_negate_sums_and_stay_ascending() {
        let txns = vec![
            txn(day(2024, 1, 9), "food", dec!(-40)),
            txn(day(2024, 1, 5), "food", dec!(-120)),
        ];

        let balances = daily_balances(&sum_amounts_by_date(&txns));

        assert_eq!(balances.len(), 2);
        assert_eq!(balances[0].date, day(2024, 1, 5));
        assert_eq!(balances[0].balance, dec!(120));
        assert_eq!(balances[1].date, day(2024, 1, 9));
        assert_eq!(balances[1].balance, dec!(40));
    }

    #[test]
    fn empty_ledger_aggregates_to_nothing() {
        let txns: Vec<TransactionRecord> = Vec::new();

        assert!(sum_amounts_by_date(&txns).is_empty());
        assert!(daily_balances(&sum_amounts_by_date(&txns)).is_empty());
        assert!(spend_rows(&txns).is_empty());
        assert!(category_summaries(&txns).is_empty());
    }

    #[test]
    fn sparse_dates_are_kept_without_fill() {
        let txns = vec![
            txn(day(2024, 1, 1), "food", dec!(-10)),
            txn(day(2024, 1, 20), "food", dec!(-20)),
        ];

        let sums = sum_amounts_by_date(&txns);
        let dates: Vec<NaiveDate> = sums.keys().copied().collect();

        assert_eq!(dates, vec![day(2024, 1, 1), day(2024, 1, 20)]);
    }

    #[test]
    fn spend_rows_group_by_date_and_category() {
        let txns = vec![
            txn(day(2024, 1, 5), "food", dec!(-30)),
            txn(day(2024, 1, 5), "food", dec!(-12.5)),
            txn(day(2024, 1, 5), "transport", dec!(-8)),
            txn(day(2024, 1, 6), "food", dec!(-7)),
        ];

        let rows = spend_rows(&txns);

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].category, "food");
        assert_eq!(rows[0].amount, dec!(-42.5));
        assert_eq!(rows[1].category, "transport");
        assert_eq!(rows[1].amount, dec!(-8));
        assert_eq!(rows[2].date, day(2024, 1, 6));
    }

    #[test]
    fn blank_categories_fall_back_to_uncategorized() {
        let txns = vec![
            TransactionRecord::new("user-1", day(2024, 1, 5), None, dec!(-10)),
            TransactionRecord::new("user-1", day(2024, 1, 5), Some("  ".to_string()), dec!(-5)),
        ];

        let rows = spend_rows(&txns);

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].category, "uncategorized");
        assert_eq!(rows[0].amount, dec!(-15));
    }

    #[test]
    fn spend_map_round_trips_to_daily_totals() {
        let rows = vec![
            CategorySpendRow {
                date: day(2024, 1, 5),
                category: "food".to_string(),
                amount: dec!(-42.5),
            },
            CategorySpendRow {
                date: day(2024, 1, 5),
                category: "transport".to_string(),
                amount: dec!(-8),
            },
            CategorySpendRow {
                date: day(2024, 1, 6),
                category: "food".to_string(),
                amount: dec!(-7),
            },
        ];

        let spend = spend_map_from_rows(&rows);
        assert_eq!(spend.len(), 2);
        assert_eq!(spend["food"][&day(2024, 1, 5)], dec!(-42.5));

        let totals = total_by_date(&spend);
        assert_eq!(totals, daily_totals(&rows));
        assert_eq!(totals[&day(2024, 1, 5)], dec!(-50.5));
        assert_eq!(totals[&day(2024, 1, 6)], dec!(-7));
    }

    #[test]
    fn category_summaries_order_heaviest_spend_first() {
        let txns = vec![
            txn(day(2024, 1, 5), "food", dec!(-90)),
            txn(day(2024, 1, 6), "food", dec!(-10)),
            txn(day(2024, 1, 6), "transport", dec!(-25)),
            txn(day(2024, 1, 7), "salary", dec!(3000)),
        ];

        let summaries = category_summaries(&txns);

        assert_eq!(summaries.len(), 3);
        assert_eq!(summaries[0].category, "food");
        assert_eq!(summaries[0].total, dec!(-100.00));
        assert_eq!(summaries[0].count, 2);
        assert_eq!(summaries[1].category, "transport");
        assert_eq!(summaries[2].category, "salary");
        assert_eq!(summaries[2].total, dec!(3000.00));
    }
}

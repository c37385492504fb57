#[cfg(test)]
mod tests {
    use crate::forecast::{project_moving_average, ForecastMethod};
    use crate::ledger::DailyBalance;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn series(start: NaiveDate, balances: &[Decimal]) -> Vec<DailyBalance> {
        balances
            .iter()
            .enumerate()
            .map(|(i, balance)| DailyBalance {
                date: start + chrono::Duration::days(i as i64),
                balance: *balance,
            })
            .collect()
    }

    #[test]
    fn constant_history_projects_flat() {
        let history = series(day(2024, 1, 1), &[dec!(-100), dec!(-100)]);

        let forecast = project_moving_average(&history, 3, day(2024, 1, 2));

        assert_eq!(
            forecast.dates,
            vec![day(2024, 1, 3), day(2024, 1, 4), day(2024, 1, 5)]
        );
        assert_eq!(
            forecast.balances,
            vec![dec!(-100.00), dec!(-100.00), dec!(-100.00)]
        );
        assert_eq!(forecast.method, ForecastMethod::MovingAverage);
    }

    #[test]
    fn projected_dates_are_consecutive_from_last_history_date() {
        let history = series(day(2024, 1, 8), &[dec!(10), dec!(20), dec!(30)]);

        // A stale ledger still projects from its own last date, not from today.
        let forecast = project_moving_average(&history, 4, day(2024, 3, 1));

        assert_eq!(
            forecast.dates,
            vec![
                day(2024, 1, 11),
                day(2024, 1, 12),
                day(2024, 1, 13),
                day(2024, 1, 14),
            ]
        );
    }

    #[test]
    fn empty_history_projects_zeros_from_today() {
        let forecast = project_moving_average(&[], 5, day(2024, 6, 1));

        assert_eq!(forecast.len(), 5);
        assert_eq!(forecast.dates[0], day(2024, 6, 2));
        assert_eq!(forecast.dates[4], day(2024, 6, 6));
        assert!(forecast.balances.iter().all(|b| *b == dec!(0)));
    }

    #[test]
    fn zero_horizon_projects_nothing() {
        let history = series(day(2024, 1, 1), &[dec!(50)]);

        let forecast = project_moving_average(&history, 0, day(2024, 1, 1));

        assert!(forecast.is_empty());
        assert!(forecast.final_balance().is_none());
    }

    #[test]
    fn short_history_averages_what_exists() {
        let history = series(day(2024, 1, 1), &[dec!(10), dec!(20)]);

        let forecast = project_moving_average(&history, 1, day(2024, 1, 2));

        assert_eq!(forecast.balances, vec![dec!(15.00)]);
    }

    #[test]
    fn large_drop_is_damped_against_previous_output() {
        // Window slides off the 700 spike after the first step, which would
        // collapse the mean from 100 to ~14.29 in one day.
        let history = series(
            day(2024, 1, 1),
            &[
                dec!(700),
                dec!(0),
                dec!(0),
                dec!(0),
                dec!(0),
                dec!(0),
                dec!(0),
            ],
        );

        let forecast = project_moving_average(&history, 3, day(2024, 1, 7));

        // threshold = max(50, 100 * 0.6) = 60, so the drop stops at 40.
        assert_eq!(forecast.balances[0], dec!(100.00));
        assert_eq!(forecast.balances[1], dec!(40.00));
    }

    #[test]
    fn raw_mean_feeds_the_window_not_the_damped_value() {
        let history = series(
            day(2024, 1, 1),
            &[
                dec!(700),
                dec!(0),
                dec!(0),
                dec!(0),
                dec!(0),
                dec!(0),
                dec!(0),
            ],
        );

        let forecast = project_moving_average(&history, 3, day(2024, 1, 7));

        // Step 3 averages [0 x5, 100, 100/7]; had the damped 40 been pushed
        // instead of the raw mean, this would read 20.00.
        assert_eq!(forecast.balances[2], dec!(16.33));
    }

    #[test]
    fn damping_floor_tolerates_moves_up_to_fifty() {
        let history = series(
            day(2024, 1, 1),
            &[
                dec!(350),
                dec!(0),
                dec!(0),
                dec!(0),
                dec!(0),
                dec!(0),
                dec!(0),
            ],
        );

        let forecast = project_moving_average(&history, 2, day(2024, 1, 7));

        // Drop from 50 to ~7.14 is 42.86, inside the floor of 50 even though
        // 0.6 * 50 alone would have clamped it.
        assert_eq!(forecast.balances[0], dec!(50.00));
        assert_eq!(forecast.balances[1], dec!(7.14));
    }

    #[test]
    fn upward_jumps_are_damped_symmetrically() {
        let history = series(
            day(2024, 1, 1),
            &[
                dec!(-700),
                dec!(0),
                dec!(0),
                dec!(0),
                dec!(0),
                dec!(0),
                dec!(0),
            ],
        );

        let forecast = project_moving_average(&history, 2, day(2024, 1, 7));

        assert_eq!(forecast.balances[0], dec!(-100.00));
        assert_eq!(forecast.balances[1], dec!(-40.00));
    }

    #[test]
    fn emitted_balances_are_display_rounded() {
        let history = series(day(2024, 1, 1), &[dec!(10), dec!(11), dec!(11)]);

        let forecast = project_moving_average(&history, 1, day(2024, 1, 3));

        // 32 / 3 = 10.666..., display-rounded to 10.67.
        assert_eq!(forecast.balances, vec![dec!(10.67)]);
    }
}

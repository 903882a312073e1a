// Test cases for the projection calculator.
#[cfg(test)]
mod tests {
    use crate::goals::{Deposit, Goal};
    use crate::projection::{days_remaining, estimate, project_adaptive, project_prospective};
    use crate::projection::{Estimate, Projection};
    use chrono::{Duration, Utc};
    use proptest::prelude::*;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn make_goal(target: Decimal, selected_days: &[u8], deposit_amounts: &[Decimal]) -> Goal {
        Goal {
            id: "g-1".to_string(),
            name: "Test goal".to_string(),
            target_amount: target,
            start_date: Utc::now(),
            selected_days: selected_days.to_vec(),
            declared_daily_amount: None,
            time_value: None,
            time_unit: None,
            deposits: deposit_amounts
                .iter()
                .enumerate()
                .map(|(i, &amount)| Deposit {
                    id: format!("d-{}", i),
                    amount,
                    date: Utc::now(),
                })
                .collect(),
        }
    }

    fn unwrap_projection(outcome: Estimate) -> Projection {
        outcome
            .projection()
            .cloned()
            .expect("expected an estimate")
    }

    // ============== Prospective mode ==============

    #[test]
    fn prospective_rounds_deposits_and_weeks_up() {
        let projection =
            unwrap_projection(project_prospective(dec!(1000), dec!(100), &[1, 3, 5]));

        assert_eq!(projection.remaining_deposits_needed, 10);
        assert_eq!(projection.deposits_per_week, 3);
        assert_eq!(projection.total_weeks, 4); // ceil(10 / 3)
        assert_eq!(projection.total_days, 28);
        assert_eq!(projection.end_date, None);
        assert_eq!(projection.display_text, "4 weeks");
    }

    #[test]
    fn prospective_empty_cadence_counts_exact_days() {
        let projection = unwrap_projection(project_prospective(dec!(1000), dec!(75), &[]));

        // ceil(1000 / 75) = 14 deposits, one per calendar day: the day count
        // equals the deposit count instead of rounding up through weeks.
        assert_eq!(projection.remaining_deposits_needed, 14);
        assert_eq!(projection.total_days, 14);
        assert_eq!(projection.deposits_per_week, 7);
        assert_eq!(projection.total_weeks, 2);
        assert_eq!(projection.display_text, "2 weeks");
    }

    #[test]
    fn prospective_rejects_non_positive_amounts() {
        assert_eq!(
            project_prospective(Decimal::ZERO, dec!(10), &[1]),
            Estimate::NoEstimate
        );
        assert_eq!(
            project_prospective(dec!(100), Decimal::ZERO, &[1]),
            Estimate::NoEstimate
        );
        assert_eq!(
            project_prospective(dec!(100), dec!(-5), &[1]),
            Estimate::NoEstimate
        );
    }

    #[test]
    fn prospective_exact_division_needs_no_extra_deposit() {
        let projection = unwrap_projection(project_prospective(dec!(900), dec!(100), &[0, 3, 6]));
        assert_eq!(projection.remaining_deposits_needed, 9);
        assert_eq!(projection.total_weeks, 3);
    }

    // ============== Adaptive mode ==============

    #[test]
    fn adaptive_end_to_end() {
        // Target 1000, Mon/Wed/Fri cadence, a single deposit of 100:
        // avg 100, remaining 900, 9 deposits over 3 weeks.
        let goal = make_goal(dec!(1000), &[1, 3, 5], &[dec!(100)]);
        let now = Utc::now();

        let result = project_adaptive(&goal, now);
        assert!(matches!(result, Estimate::Adaptive(_)));
        let projection = unwrap_projection(result);

        assert_eq!(projection.remaining_deposits_needed, 9);
        assert_eq!(projection.deposits_per_week, 3);
        assert_eq!(projection.total_weeks, 3);
        assert_eq!(projection.total_days, 21);
        assert_eq!(projection.end_date, Some(now + Duration::weeks(3)));
        assert_eq!(projection.display_text, "3 weeks");
    }

    #[test]
    fn adaptive_averages_uneven_deposits() {
        // Savings 200 over 2 deposits: avg 100, remaining 800, daily default
        // cadence, ceil(8 / 7) = 2 weeks.
        let goal = make_goal(dec!(1000), &[], &[dec!(50), dec!(150)]);
        let now = Utc::now();

        let projection = unwrap_projection(project_adaptive(&goal, now));
        assert_eq!(projection.remaining_deposits_needed, 8);
        assert_eq!(projection.deposits_per_week, 7);
        assert_eq!(projection.total_weeks, 2);
        assert_eq!(projection.total_days, 14);
        assert_eq!(projection.end_date, Some(now + Duration::weeks(2)));
    }

    #[test]
    fn adaptive_overfunded_goal_is_already_met() {
        let goal = make_goal(dec!(100), &[2], &[dec!(30), dec!(90), dec!(1)]);
        let now = Utc::now();

        let result = project_adaptive(&goal, now);
        assert!(matches!(result, Estimate::AlreadyMet(_)));
        let projection = unwrap_projection(result);
        assert_eq!(projection.total_days, 0);
        assert_eq!(projection.remaining_deposits_needed, 0);
        assert_eq!(projection.end_date, Some(now));
        assert_eq!(projection.display_text, "0 days");
    }

    #[test]
    fn adaptive_exactly_funded_goal_is_already_met() {
        let goal = make_goal(dec!(100), &[2], &[dec!(100)]);
        let result = project_adaptive(&goal, Utc::now());
        assert!(matches!(result, Estimate::AlreadyMet(_)));
        assert_eq!(result.projection().unwrap().total_days, 0);
    }

    #[test]
    fn adaptive_huge_projection_omits_end_date() {
        // A large target funded by tiny deposits is valid input; the week
        // count exceeds what calendar arithmetic can represent, so the end
        // date is absent instead of overflowing.
        let goal = make_goal(dec!(1000000000), &[1, 3, 5], &[dec!(0.01)]);
        let now = Utc::now();

        let result = project_adaptive(&goal, now);
        assert!(matches!(result, Estimate::Adaptive(_)));
        let projection = unwrap_projection(result);
        assert_eq!(projection.end_date, None);
        assert!(projection.total_weeks > 0);
        assert_eq!(days_remaining(&goal, now), None);
    }

    #[test]
    fn prospective_saturates_instead_of_understating() {
        // A deposit count beyond u64 range saturates; it must never collapse
        // to a short estimate.
        let projection = unwrap_projection(project_prospective(
            dec!(1000000000000000000000),
            dec!(0.01),
            &[1, 3, 5],
        ));
        assert_eq!(projection.remaining_deposits_needed, u64::MAX);
        assert_eq!(projection.total_days, u64::MAX);
    }

    #[test]
    fn adaptive_without_deposits_has_no_estimate() {
        let goal = make_goal(dec!(1000), &[1, 3, 5], &[]);
        let result = project_adaptive(&goal, Utc::now());
        assert_eq!(result, Estimate::NoEstimate);
        assert!(!result.is_estimate());
    }

    // ============== Mode dispatch ==============

    #[test]
    fn dispatch_uses_declared_plan_before_first_deposit() {
        let mut goal = make_goal(dec!(1000), &[1, 3, 5], &[]);
        goal.declared_daily_amount = Some(dec!(100));

        let result = estimate(&goal, Utc::now());
        assert!(matches!(result, Estimate::Prospective(_)));
    }

    #[test]
    fn dispatch_switches_to_adaptive_once_deposits_exist() {
        let mut goal = make_goal(dec!(1000), &[1, 3, 5], &[dec!(100)]);
        // The declared plan is display-only and must not leak into the
        // adaptive calculation.
        goal.declared_daily_amount = Some(dec!(999));

        let result = estimate(&goal, Utc::now());
        assert!(matches!(result, Estimate::Adaptive(_)));
        assert_eq!(result.projection().unwrap().remaining_deposits_needed, 9);
    }

    #[test]
    fn dispatch_without_plan_or_deposits_has_no_estimate() {
        let goal = make_goal(dec!(1000), &[1, 3, 5], &[]);
        assert_eq!(estimate(&goal, Utc::now()), Estimate::NoEstimate);
    }

    // ============== Days remaining ==============

    #[test]
    fn days_remaining_matches_projected_days() {
        let goal = make_goal(dec!(1000), &[1, 3, 5], &[dec!(100)]);
        let now = Utc::now();
        assert_eq!(days_remaining(&goal, now), Some(21));
    }

    #[test]
    fn days_remaining_is_zero_when_met() {
        let goal = make_goal(dec!(100), &[1], &[dec!(200)]);
        assert_eq!(days_remaining(&goal, Utc::now()), Some(0));
    }

    #[test]
    fn days_remaining_is_none_without_estimate() {
        let goal = make_goal(dec!(1000), &[1], &[]);
        assert_eq!(days_remaining(&goal, Utc::now()), None);
    }

    // ============== Properties ==============

    proptest! {
        #[test]
        fn prospective_deposit_count_is_monotonic(
            goal_amount in 1u32..100_000,
            periodic_amount in 1u32..10_000,
            increase in 0u32..100_000,
        ) {
            let smaller = unwrap_projection(project_prospective(
                Decimal::from(goal_amount),
                Decimal::from(periodic_amount),
                &[1, 4],
            ));
            let larger = unwrap_projection(project_prospective(
                Decimal::from(goal_amount + increase),
                Decimal::from(periodic_amount),
                &[1, 4],
            ));
            prop_assert!(larger.remaining_deposits_needed >= smaller.remaining_deposits_needed);
        }

        #[test]
        fn prospective_empty_cadence_never_inflates_days(
            goal_amount in 1u32..100_000,
            periodic_amount in 1u32..10_000,
        ) {
            let projection = unwrap_projection(project_prospective(
                Decimal::from(goal_amount),
                Decimal::from(periodic_amount),
                &[],
            ));
            prop_assert_eq!(projection.total_days, projection.remaining_deposits_needed);
        }

        #[test]
        fn adaptive_met_goal_always_projects_zero_days(
            target in 1u32..10_000,
            extra in 0u32..10_000,
            chunks in 1usize..10,
        ) {
            // Spread target + extra over an arbitrary number of deposits.
            let total = Decimal::from(target + extra);
            let per_chunk = total / Decimal::from(chunks as u32);
            let amounts: Vec<Decimal> = (0..chunks - 1).map(|_| per_chunk).collect();
            let last = total - per_chunk * Decimal::from((chunks - 1) as u32);
            let mut amounts = amounts;
            amounts.push(last);

            let goal = make_goal(Decimal::from(target), &[1, 3], &amounts);
            let projection = unwrap_projection(project_adaptive(&goal, Utc::now()));
            prop_assert_eq!(projection.total_days, 0);
        }

        #[test]
        fn progress_percent_never_exceeds_100(
            target in 1u32..10_000,
            saved in 0u32..1_000_000,
        ) {
            let goal = make_goal(Decimal::from(target), &[1], &[Decimal::from(saved)]);
            prop_assert!(goal.progress_percent() <= dec!(100));
        }
    }
}

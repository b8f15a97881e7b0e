//! Tests for goal domain models and their validation rules.

#[cfg(test)]
mod tests {
    use crate::constants::MAX_AMOUNT;
    use crate::errors::ValidationError;
    use crate::goals::{Goal, GoalUpdate, HistorySort, NewGoal};
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn create_test_goal(target: Decimal, saved: Decimal) -> Goal {
        Goal {
            id: 1,
            name: "Emergency Fund".to_string(),
            target,
            saved,
            description: String::new(),
            completed_at: None,
        }
    }

    // ==================== NewGoal validation ====================

    #[test]
    fn test_new_goal_valid() {
        let goal = NewGoal::new("Laptop", dec!(45000), dec!(0), "");
        assert!(goal.validate().is_ok());
    }

    #[test]
    fn test_new_goal_saved_equal_to_target_is_valid() {
        let goal = NewGoal::new("Paid off", dec!(100), dec!(100), "");
        assert!(goal.validate().is_ok());
    }

    #[test]
    fn test_new_goal_blank_name() {
        let goal = NewGoal::new("   \t", dec!(100), dec!(0), "");
        assert_eq!(goal.validate(), Err(ValidationError::BlankName));
    }

    #[test]
    fn test_new_goal_non_positive_target() {
        let zero = NewGoal::new("Trip", dec!(0), dec!(0), "");
        assert_eq!(zero.validate(), Err(ValidationError::InvalidTarget(dec!(0))));

        let negative = NewGoal::new("Trip", dec!(-5), dec!(0), "");
        assert_eq!(
            negative.validate(),
            Err(ValidationError::InvalidTarget(dec!(-5)))
        );
    }

    #[test]
    fn test_new_goal_negative_saved() {
        let goal = NewGoal::new("Trip", dec!(100), dec!(-1), "");
        assert_eq!(
            goal.validate(),
            Err(ValidationError::InvalidSavedAmount(dec!(-1)))
        );
    }

    #[test]
    fn test_new_goal_saved_exceeds_target() {
        let goal = NewGoal::new("Trip", dec!(100), dec!(100.01), "");
        assert_eq!(
            goal.validate(),
            Err(ValidationError::SavedExceedsTarget {
                saved: dec!(100.01),
                target: dec!(100)
            })
        );
    }

    #[test]
    fn test_new_goal_target_at_max_amount_rejected() {
        let max = Decimal::from(MAX_AMOUNT);
        for target in [max, Decimal::MAX] {
            let goal = NewGoal::new("Mansion", target, dec!(0), "");
            assert_eq!(
                goal.validate(),
                Err(ValidationError::AmountTooLarge { amount: target, max })
            );
        }
    }

    #[test]
    fn test_new_goal_just_below_max_amount_is_valid() {
        let goal = NewGoal::new("Mansion", dec!(999999999999.999), dec!(0.001), "");
        assert!(goal.validate().is_ok());
    }

    #[test]
    fn test_new_goal_too_many_decimals() {
        let goal = NewGoal::new("Trip", dec!(100), dec!(0.0001), "");
        assert_eq!(
            goal.validate(),
            Err(ValidationError::TooManyDecimals {
                amount: dec!(0.0001),
                max_scale: 3
            })
        );

        // trailing zeros do not count
        let padded = NewGoal::new("Trip", dec!(100.50000), dec!(0), "");
        assert!(padded.validate().is_ok());
    }

    // ==================== GoalUpdate validation ====================

    #[test]
    fn test_update_target_below_saved() {
        let update = GoalUpdate::new("Trip", dec!(50), "");
        assert_eq!(
            update.validate(dec!(60)),
            Err(ValidationError::TargetBelowSaved {
                target: dec!(50),
                saved: dec!(60)
            })
        );
    }

    #[test]
    fn test_update_target_equal_to_saved_is_valid() {
        let update = GoalUpdate::new("Trip", dec!(60), "");
        assert!(update.validate(dec!(60)).is_ok());
    }

    #[test]
    fn test_update_target_at_max_amount_rejected() {
        let update = GoalUpdate::new("Trip", Decimal::from(MAX_AMOUNT), "");
        assert!(matches!(
            update.validate(dec!(0)),
            Err(ValidationError::AmountTooLarge { .. })
        ));
    }

    #[test]
    fn test_update_blank_name_checked_first() {
        let update = GoalUpdate::new("", dec!(0), "");
        assert_eq!(update.validate(dec!(0)), Err(ValidationError::BlankName));
    }

    // ==================== Goal helpers ====================

    #[test]
    fn test_goal_completion_and_remaining() {
        let partial = create_test_goal(dec!(10000), dec!(2500));
        assert!(!partial.is_completed());
        assert_eq!(partial.remaining(), dec!(7500));
        assert_eq!(partial.percent(), dec!(25));

        let done = create_test_goal(dec!(10000), dec!(10000));
        assert!(done.is_completed());
        assert_eq!(done.remaining(), dec!(0));
        assert_eq!(done.percent(), dec!(100));
    }

    #[test]
    fn test_check_invariants_rejects_saved_over_target() {
        let goal = create_test_goal(dec!(10), dec!(11));
        assert!(goal.check_invariants().is_err());
    }

    // ==================== Error messages ====================

    #[test]
    fn test_exceeds_remaining_message_shows_max() {
        let err = ValidationError::ExceedsRemaining {
            max_addable: dec!(250),
        };
        assert_eq!(
            err.to_string(),
            "Contribution would exceed the target. Maximum you can add: 250"
        );
    }

    // ==================== HistorySort parsing ====================

    #[test]
    fn test_history_sort_from_str() {
        assert_eq!("recent".parse::<HistorySort>(), Ok(HistorySort::Recent));
        assert_eq!(" Highest ".parse::<HistorySort>(), Ok(HistorySort::Highest));
        assert_eq!("LOWEST".parse::<HistorySort>(), Ok(HistorySort::Lowest));
        assert!("oldest".parse::<HistorySort>().is_err());
    }

    #[test]
    fn test_history_sort_serialization() {
        assert_eq!(
            serde_json::to_string(&HistorySort::Highest).unwrap(),
            "\"highest\""
        );
    }
}

// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

use std::sync::Arc;
use std::time::Duration;

use proptest::prelude::*;
use tracekeep_sampling::{ManualClock, RateLimiter};

const EPSILON: f64 = 1e-9;

proptest! {
    #[test]
    fn accepted_cost_never_exceeds_earned_credit(
        credits_per_second in 0.0_f64..1_000.0,
        max_balance in 0.0_f64..1_000.0,
        steps in prop::collection::vec((0_u64..2_000, 0.0_f64..50.0), 1..200),
    ) {
        let clock = ManualClock::new();
        let limiter =
            RateLimiter::with_clock(credits_per_second, max_balance, Arc::new(clock.clone()))
                .unwrap();

        let mut accepted = 0.0;
        let mut elapsed_ms = 0_u64;
        for (advance_ms, cost) in steps {
            clock.advance(Duration::from_millis(advance_ms));
            elapsed_ms += advance_ms;

            let before = limiter.balance();
            if limiter.check_credit(cost) {
                accepted += cost;
            } else {
                prop_assert!(cost > before - EPSILON);
            }

            let balance = limiter.balance();
            prop_assert!(balance >= 0.0);
            prop_assert!(balance <= max_balance + EPSILON);
        }

        let earned = max_balance + credits_per_second * elapsed_ms as f64 / 1_000.0;
        prop_assert!(accepted <= earned + 1e-6 * earned.max(1.0));
    }

    #[test]
    fn update_keeps_balance_within_capacity(
        max_balance in 0.0_f64..1_000.0,
        new_max_balance in 0.0_f64..1_000.0,
        spent in 0_usize..100,
    ) {
        let limiter =
            RateLimiter::with_clock(0.0, max_balance, Arc::new(ManualClock::new())).unwrap();
        for _ in 0..spent {
            limiter.check_credit(1.0);
        }

        limiter.update(1.0, new_max_balance).unwrap();

        let balance = limiter.balance();
        prop_assert!(balance >= 0.0);
        prop_assert!(balance <= new_max_balance + EPSILON);
    }
}

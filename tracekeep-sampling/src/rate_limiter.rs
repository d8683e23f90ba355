// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};

use crate::error::{check_non_negative, Result};

/// Source of time for a [`RateLimiter`]
pub trait Clock: fmt::Debug + Send + Sync {
    fn now(&self) -> Instant;
}

/// Reads the monotonic system clock
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// A clock that only moves forward when [`ManualClock::advance`] is called.
///
/// Clones share the same time, so a handle can be kept to drive a limiter that owns
/// another clone.
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Arc<Mutex<Instant>>,
}

impl ManualClock {
    pub fn new() -> Self {
        ManualClock {
            now: Arc::new(Mutex::new(Instant::now())),
        }
    }

    pub fn advance(&self, by: Duration) {
        *lock(&self.now) += by;
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        *lock(&self.now)
    }
}

// The guarded values are only written by single assignments, so a panic elsewhere
// cannot leave them half updated.
pub(crate) fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// A leaky bucket rate limiter, formulated in terms of a credit balance.
///
/// The balance is replenished proportionally to the time elapsed since the last
/// replenishment, at `credits_per_second`, and never exceeds `max_balance`. Each call to
/// [`RateLimiter::check_credit`] tries to pay for an item with the balance.
///
/// To limit the rate of sampled traces, create the limiter with the number of traces
/// allowed per second and check a credit of `1.0` per trace. It can limit a throughput
/// in bytes as well, by checking the size of each message.
///
/// Clones share the same balance.
#[derive(Clone)]
pub struct RateLimiter {
    inner: Arc<Mutex<RateLimiterState>>,
    clock: Arc<dyn Clock>,
}

struct RateLimiterState {
    /// Credits added to the balance per elapsed second
    credits_per_second: f64,

    /// Credits available right now, within [0, max_balance]
    balance: f64,

    /// Burst capacity
    max_balance: f64,

    /// Last time the balance was replenished
    last_tick: Instant,
}

impl RateLimiterState {
    /// Credits the balance for the time elapsed since the last tick
    fn replenish(&mut self, now: Instant) {
        let elapsed = now.saturating_duration_since(self.last_tick);
        self.last_tick = now;
        self.balance =
            (self.balance + elapsed.as_secs_f64() * self.credits_per_second).min(self.max_balance);
    }

    fn try_spend(&mut self, item_cost: f64) -> bool {
        if self.balance >= item_cost {
            self.balance -= item_cost;
            true
        } else {
            false
        }
    }
}

impl fmt::Debug for RateLimiter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = lock(&self.inner);
        f.debug_struct("RateLimiter")
            .field("credits_per_second", &state.credits_per_second)
            .field("balance", &state.balance)
            .field("max_balance", &state.max_balance)
            .finish()
    }
}

impl RateLimiter {
    /// Creates a new RateLimiter reading the system clock.
    ///
    /// The limiter starts fully charged: the balance is `max_balance`.
    ///
    /// # Errors
    /// Negative, infinite or NaN parameters are rejected.
    pub fn new(credits_per_second: f64, max_balance: f64) -> Result<Self> {
        Self::with_clock(credits_per_second, max_balance, Arc::new(SystemClock))
    }

    /// Creates a new RateLimiter reading time from `clock`
    pub fn with_clock(
        credits_per_second: f64,
        max_balance: f64,
        clock: Arc<dyn Clock>,
    ) -> Result<Self> {
        let credits_per_second = check_non_negative("credits_per_second", credits_per_second)?;
        let max_balance = check_non_negative("max_balance", max_balance)?;

        let state = RateLimiterState {
            credits_per_second,
            balance: max_balance,
            max_balance,
            last_tick: clock.now(),
        };

        Ok(RateLimiter {
            inner: Arc::new(Mutex::new(state)),
            clock,
        })
    }

    /// Tries to pay `item_cost` with the current balance.
    ///
    /// # Returns
    /// `true` if the balance covered the cost, which is then deducted. `false` otherwise,
    /// in which case the balance only reflects the replenishment.
    pub fn check_credit(&self, item_cost: f64) -> bool {
        if !(item_cost >= 0.0) {
            tracing::warn!(item_cost, "rate limiter rejected an item with an invalid cost");
            return false;
        }

        let mut state = lock(&self.inner);

        // Fast path: pay with what is already there
        if state.try_spend(item_cost) {
            return true;
        }

        state.replenish(self.clock.now());
        state.try_spend(item_cost)
    }

    /// Changes the parameters of the limiter in place.
    ///
    /// The accumulated balance is first brought up to date, then pro-rated to the new
    /// `max_balance`, so a limiter that was 40% full stays 40% full. Prefer this over
    /// creating a new limiter when the sampling configuration changes.
    ///
    /// # Errors
    /// Negative, infinite or NaN parameters are rejected and leave the limiter unchanged.
    pub fn update(&self, credits_per_second: f64, max_balance: f64) -> Result<()> {
        let credits_per_second = check_non_negative("credits_per_second", credits_per_second)?;
        let max_balance = check_non_negative("max_balance", max_balance)?;

        let balance = {
            let mut state = lock(&self.inner);
            state.replenish(self.clock.now());
            state.balance = if state.max_balance > 0.0 {
                (state.balance * max_balance / state.max_balance).min(max_balance)
            } else {
                // An empty bucket has no fill level to carry over
                0.0
            };
            state.credits_per_second = credits_per_second;
            state.max_balance = max_balance;
            state.balance
        };

        tracing::debug!(
            credits_per_second,
            max_balance,
            balance,
            "rate limiter updated"
        );
        Ok(())
    }

    pub fn credits_per_second(&self) -> f64 {
        lock(&self.inner).credits_per_second
    }

    pub fn max_balance(&self) -> f64 {
        lock(&self.inner).max_balance
    }

    /// Balance as of the last call, without crediting the time elapsed since
    pub fn balance(&self) -> f64 {
        lock(&self.inner).balance
    }
}

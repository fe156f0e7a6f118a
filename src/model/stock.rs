// src/model/stock.rs

use rand::Rng;
use rand_distr::Distribution;

/// The state of the spare-parts stock between two steps.
#[derive(Debug, Clone, PartialEq)]
pub struct StockState {
    /// On-hand units. Signed because a failure can push it to -1 before the
    /// end-of-step clamp.
    pub inventory: i64,
    /// True while an order is outstanding.
    pub reorder_flag: bool,
    /// Steps since the outstanding order was placed.
    pub ordered_weeks_ago: u32,
    /// Time left until the installed part fails.
    pub remaining_lifetime: f64,
}

impl StockState {
    pub fn new(initial_inventory: u32, remaining_lifetime: f64) -> Self {
        Self {
            inventory: i64::from(initial_inventory),
            reorder_flag: false,
            ordered_weeks_ago: 0,
            remaining_lifetime,
        }
    }

    /// Step 1: Age the installed part by one time unit.
    ///
    /// If it fails, one spare is consumed and a fresh lifetime is drawn.
    /// Returns true on failure.
    pub fn wear<D, R>(&mut self, lifetimes: &D, rng: &mut R) -> bool
    where
        D: Distribution<f64>,
        R: Rng + ?Sized,
    {
        self.remaining_lifetime -= 1.0;
        if self.remaining_lifetime <= 0.0 {
            self.inventory -= 1;
            self.remaining_lifetime = lifetimes.sample(rng);
            return true;
        }
        false
    }

    /// Step 2: Place an order if stock is at or below the reorder point.
    ///
    /// Never places a second order while one is outstanding.
    pub fn place_order_if_needed(&mut self, reorder_point: u32) -> bool {
        if self.inventory <= i64::from(reorder_point) && !self.reorder_flag {
            self.reorder_flag = true;
            self.ordered_weeks_ago = 0;
            return true;
        }
        false
    }

    /// Step 3: Book the outstanding order into stock once it has waited
    /// at least `lead_time` steps.
    pub fn receive_order_if_arrived(&mut self, lead_time: f64, order_amount: u32) -> bool {
        if self.reorder_flag && f64::from(self.ordered_weeks_ago) >= lead_time {
            self.reorder_flag = false;
            self.inventory += i64::from(order_amount);
            return true;
        }
        false
    }

    /// Step 4: Clamp stock at zero and return the level to record.
    ///
    /// The recorded level saturates at `u32::MAX`; the stock itself is not
    /// capped.
    pub fn settle(&mut self) -> u32 {
        self.inventory = self.inventory.max(0);
        u32::try_from(self.inventory).unwrap_or(u32::MAX)
    }

    /// Step 5: Advance the clock of the outstanding order, if any.
    pub fn advance_order_clock(&mut self) {
        if self.reorder_flag {
            self.ordered_weeks_ago += 1;
        }
    }
}

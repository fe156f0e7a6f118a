// src/strategy/q_table.rs

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Dense action-value table, one row per stock level and one column per
/// candidate reorder point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QTable {
    num_states: usize,
    num_actions: usize,
    values: Vec<f64>,
}

impl QTable {
    /// Fills every entry with an independent draw from `[0, 1)`.
    ///
    /// Only breaks ties between untried actions, it is not a prior.
    pub fn random<R: Rng + ?Sized>(num_states: usize, num_actions: usize, rng: &mut R) -> Self {
        let values = (0..num_states * num_actions)
            .map(|_| rng.gen::<f64>())
            .collect();
        Self {
            num_states,
            num_actions,
            values,
        }
    }

    /// Builds a table from explicit rows. Rows must be non-empty and all of
    /// the same length.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Option<Self> {
        let num_states = rows.len();
        let num_actions = rows.first().map_or(0, Vec::len);
        if num_actions == 0 || rows.iter().any(|row| row.len() != num_actions) {
            return None;
        }
        Some(Self {
            num_states,
            num_actions,
            values: rows.into_iter().flatten().collect(),
        })
    }

    pub fn num_states(&self) -> usize {
        self.num_states
    }

    pub fn num_actions(&self) -> usize {
        self.num_actions
    }

    pub fn row(&self, state: usize) -> &[f64] {
        let start = state * self.num_actions;
        &self.values[start..start + self.num_actions]
    }

    pub fn get(&self, state: usize, action: usize) -> f64 {
        self.row(state)[action]
    }

    /// Maps a stock level onto a row, clamping into `[0, num_states)`.
    pub fn clamp_state(&self, level: u32) -> usize {
        (level as usize).min(self.num_states.saturating_sub(1))
    }

    /// Greedy action for `state`; the lowest index wins ties.
    pub fn best_action(&self, state: usize) -> usize {
        let row = self.row(state);
        let mut best = 0;
        for (action, q) in row.iter().enumerate().skip(1) {
            if *q > row[best] {
                best = action;
            }
        }
        best
    }

    pub fn max_value(&self, state: usize) -> f64 {
        self.row(state)
            .iter()
            .copied()
            .fold(f64::NEG_INFINITY, f64::max)
    }

    /// Epsilon-greedy choice: a uniform random action with probability
    /// `epsilon`, the greedy one otherwise.
    pub fn sample_action<R: Rng + ?Sized>(&self, state: usize, epsilon: f64, rng: &mut R) -> usize {
        let r: f64 = rng.gen();
        if r < epsilon {
            rng.gen_range(0..self.num_actions)
        } else {
            self.best_action(state)
        }
    }

    /// One-step Q-learning backup. Returns the new value of `(state, action)`.
    pub fn update(
        &mut self,
        state: usize,
        action: usize,
        reward: f64,
        next_state: usize,
        learning_rate: f64,
        discount_factor: f64,
    ) -> f64 {
        let target = reward + discount_factor * self.max_value(next_state);
        let idx = state * self.num_actions + action;
        self.values[idx] += learning_rate * (target - self.values[idx]);
        self.values[idx]
    }

    /// The greedy action of every state, in state order.
    pub fn greedy_policy(&self) -> Vec<usize> {
        (0..self.num_states).map(|s| self.best_action(s)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_random_table_shape_and_range() {
        let mut rng = StdRng::seed_from_u64(0);
        let q = QTable::random(20, 20, &mut rng);
        assert_eq!(q.num_states(), 20);
        assert_eq!(q.num_actions(), 20);
        for s in 0..20 {
            assert!(q.row(s).iter().all(|v| (0.0..1.0).contains(v)));
        }
    }

    #[test]
    fn test_best_action_first_maximum_wins() {
        let q = QTable::from_rows(vec![vec![0.1, 0.9, 0.9], vec![0.5, 0.5, 0.5]]).unwrap();
        assert_eq!(q.best_action(0), 1);
        assert_eq!(q.best_action(1), 0);
        assert_eq!(q.greedy_policy(), vec![1, 0]);
        assert_eq!(q.max_value(0), 0.9);
    }

    #[test]
    fn test_ragged_rows_rejected() {
        assert!(QTable::from_rows(vec![vec![0.0, 1.0], vec![0.0]]).is_none());
    }

    #[test]
    fn test_empty_tables_rejected() {
        assert!(QTable::from_rows(vec![]).is_none());
        assert!(QTable::from_rows(vec![vec![], vec![]]).is_none());
    }

    #[test]
    fn test_update_moves_towards_target() {
        let mut q = QTable::from_rows(vec![vec![1.0, 0.0], vec![2.0, 4.0]]).unwrap();
        // target = -10 + 0.8 * 4 = -6.8, delta = 0.01 * (-6.8 - 1.0)
        let updated = q.update(0, 0, -10.0, 1, 0.01, 0.8);
        assert!((updated - (1.0 + 0.01 * (-6.8 - 1.0))).abs() < 1e-12);
        assert_eq!(q.get(0, 0), updated);
        assert_eq!(q.get(0, 1), 0.0);
    }

    #[test]
    fn test_clamp_state() {
        let q = QTable::from_rows(vec![vec![0.0]; 20]).unwrap();
        assert_eq!(q.clamp_state(0), 0);
        assert_eq!(q.clamp_state(19), 19);
        assert_eq!(q.clamp_state(45), 19);
    }

    #[test]
    fn test_greedy_without_exploration() {
        let mut rng = StdRng::seed_from_u64(1);
        let q = QTable::from_rows(vec![vec![0.0, 3.0, 1.0]]).unwrap();
        for _ in 0..100 {
            assert_eq!(q.sample_action(0, 0.0, &mut rng), 1);
        }
        for _ in 0..100 {
            assert!(q.sample_action(0, 1.0, &mut rng) < 3);
        }
    }
}

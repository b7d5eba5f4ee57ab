// crates/maze-farming/src/queue.rs
//
// Delayed withdrawals: FIFO logs of time-locked rights to receive unlocked
// principal or claimed reward.
//
// Entries are appended by unlock/claim and never reordered or removed; a
// withdrawal marks them consumed. `head` points at the oldest entry that may
// still be unconsumed, so repeated withdrawals do not rescan settled history.

use serde::{Deserialize, Serialize};

use maze_core::{MazeError, Wei};

/// A queued, time-locked amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DelayedWithdrawal {
    pub amount: Wei,
    pub request_time: u64,
    pub maturity_time: u64,
    pub consumed: bool,
}

impl DelayedWithdrawal {
    pub fn is_ready(&self, now: u64) -> bool {
        !self.consumed && self.maturity_time <= now
    }
}

/// Matured entries selected for a withdrawal, not yet marked consumed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WithdrawalPlan {
    pub indices: Vec<usize>,
    pub total: Wei,
}

/// One per-user FIFO log.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WithdrawalQueue {
    entries: Vec<DelayedWithdrawal>,
    head: usize,
}

impl WithdrawalQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `{amount, now, now + delay}`; returns the maturity time.
    pub fn enqueue(&mut self, amount: Wei, now: u64, delay: u64) -> Result<u64, MazeError> {
        let maturity_time = now
            .checked_add(delay)
            .ok_or_else(|| MazeError::overflow("withdrawal maturity"))?;
        self.entries.push(DelayedWithdrawal {
            amount,
            request_time: now,
            maturity_time,
            consumed: false,
        });
        Ok(maturity_time)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entry_at(&self, index: usize) -> Option<&DelayedWithdrawal> {
        self.entries.get(index)
    }

    pub fn entries(&self) -> &[DelayedWithdrawal] {
        &self.entries
    }

    /// Matured, unconsumed entries with their indices, oldest first.
    pub fn claimable_entries(&self, now: u64) -> Vec<(usize, DelayedWithdrawal)> {
        self.entries[self.head..]
            .iter()
            .enumerate()
            .filter(|(_, e)| e.is_ready(now))
            .map(|(i, e)| (self.head + i, *e))
            .collect()
    }

    /// Sum of unconsumed amounts, matured or not.
    pub fn pending_total(&self) -> Wei {
        self.entries[self.head..]
            .iter()
            .filter(|e| !e.consumed)
            .map(|e| e.amount)
            .sum()
    }

    /// Select up to `max_count` matured entries, oldest first, without
    /// consuming them.
    ///
    /// # Errors
    /// `Validation` if `max_count` is zero, `State` ("nothing ready") if no
    /// entry has matured.
    pub fn plan_withdrawal(&self, max_count: usize, now: u64) -> Result<WithdrawalPlan, MazeError> {
        if max_count == 0 {
            return Err(MazeError::Validation(
                "withdrawal count cannot be zero".to_string(),
            ));
        }
        let mut indices = Vec::new();
        let mut total: Wei = 0;
        for (index, entry) in self.entries.iter().enumerate().skip(self.head) {
            if indices.len() == max_count {
                break;
            }
            if entry.is_ready(now) {
                total = total
                    .checked_add(entry.amount)
                    .ok_or_else(|| MazeError::overflow("withdrawal total"))?;
                indices.push(index);
            }
        }
        if indices.is_empty() {
            return Err(MazeError::State("nothing ready to withdraw".to_string()));
        }
        Ok(WithdrawalPlan { indices, total })
    }

    /// Mark the planned entries consumed and advance the head.
    pub(crate) fn commit(&mut self, plan: &WithdrawalPlan) {
        for &index in &plan.indices {
            if let Some(entry) = self.entries.get_mut(index) {
                entry.consumed = true;
            }
        }
        while self.head < self.entries.len() && self.entries[self.head].consumed {
            self.head += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn queue_with(amounts: &[(Wei, u64)], delay: u64) -> WithdrawalQueue {
        let mut queue = WithdrawalQueue::new();
        for &(amount, at) in amounts {
            queue.enqueue(amount, at, delay).unwrap();
        }
        queue
    }

    #[test]
    fn test_enqueue_records_maturity() {
        let mut queue = WithdrawalQueue::new();
        let maturity = queue.enqueue(10, 100, 50).unwrap();
        assert_eq!(maturity, 150);
        let entry = queue.entry_at(0).unwrap();
        assert_eq!(entry.request_time, 100);
        assert!(!entry.consumed);
        assert!(queue.entry_at(1).is_none());
    }

    #[test]
    fn test_nothing_ready_before_maturity() {
        let queue = queue_with(&[(10, 100)], 50);
        assert_eq!(
            queue.plan_withdrawal(5, 149).unwrap_err(),
            MazeError::State("nothing ready to withdraw".to_string())
        );
        assert!(queue.claimable_entries(149).is_empty());
    }

    #[test]
    fn test_max_count_caps_entries() {
        let mut queue = queue_with(&[(10, 100), (20, 101), (30, 102)], 50);
        let plan = queue.plan_withdrawal(2, 500).unwrap();
        assert_eq!(plan.indices, vec![0, 1]);
        assert_eq!(plan.total, 30);

        queue.commit(&plan);
        let rest = queue.plan_withdrawal(10, 500).unwrap();
        assert_eq!(rest.indices, vec![2]);
        assert_eq!(rest.total, 30);
    }

    #[test]
    fn test_max_count_larger_than_queue() {
        let queue = queue_with(&[(10, 100), (20, 200)], 50);
        // Only the first entry has matured at 200
        let plan = queue.plan_withdrawal(100, 200).unwrap();
        assert_eq!(plan.indices, vec![0]);
        assert_eq!(plan.total, 10);
    }

    #[test]
    fn test_no_double_withdrawal() {
        let mut queue = queue_with(&[(10, 100), (20, 110)], 50);
        let plan = queue.plan_withdrawal(10, 1_000).unwrap();
        queue.commit(&plan);
        assert!(queue.plan_withdrawal(10, 1_000).is_err());
        assert_eq!(queue.pending_total(), 0);
        assert_eq!(queue.len(), 2);
        assert!(queue.entries().iter().all(|e| e.consumed));
    }

    #[test]
    fn test_zero_count_rejected() {
        let queue = queue_with(&[(10, 100)], 0);
        assert!(matches!(queue.plan_withdrawal(0, 100), Err(MazeError::Validation(_))));
    }

    #[test]
    fn test_claimable_entries_and_pending_total() {
        let mut queue = queue_with(&[(10, 100), (20, 200), (30, 300)], 50);
        let ready = queue.claimable_entries(260);
        assert_eq!(ready.len(), 2);
        assert_eq!(ready[1].0, 1);
        assert_eq!(queue.pending_total(), 60);

        let plan = queue.plan_withdrawal(1, 260).unwrap();
        queue.commit(&plan);
        assert_eq!(queue.pending_total(), 50);
        assert_eq!(queue.claimable_entries(260).len(), 1);
    }
}

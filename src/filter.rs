//! Module for rate-limited delivery.

use std::collections::HashMap;

/// Drops repeats of a message delivered within the last `window` time units.
///
/// Each distinct content is tracked independently. Only delivered occurrences
/// update the table, so a steady stream of repeats cannot keep pushing the
/// window forward.
#[derive(Debug)]
pub struct DeliveryFilter {
    window: i64,
    last_delivered: HashMap<String, i64>,
    delivered: usize,
}

impl DeliveryFilter {
    pub fn new(window: i64) -> Self {
        Self {
            window,
            last_delivered: HashMap::new(),
            delivered: 0,
        }
    }

    /// Decide whether `content` arriving at `timestamp` is delivered.
    ///
    /// The table is updated exactly when this returns `true`.
    pub fn decide(&mut self, timestamp: i64, content: &str) -> bool {
        if let Some(last) = self.last_delivered.get_mut(content) {
            // widened so that extreme timestamps cannot overflow
            let gap = i128::from(timestamp) - i128::from(*last);
            if gap <= i128::from(self.window) {
                log::debug!("drop {content:?}@{timestamp}: last delivered at {last}");
                return false;
            }
            *last = timestamp;
        } else {
            self.last_delivered.insert(content.to_string(), timestamp);
        }
        log::debug!("deliver {content:?}@{timestamp}");
        self.delivered += 1;
        true
    }

    /// Number of messages delivered so far.
    pub fn delivered_count(&self) -> usize {
        self.delivered
    }

    /// Number of distinct contents seen so far.
    pub fn tracked(&self) -> usize {
        self.last_delivered.len()
    }
}

/// Decide every message of a batch in order, with a fresh table.
///
/// `timestamps` and `messages` are index-aligned; any excess in the longer one
/// is ignored.
pub fn process<S: AsRef<str>>(timestamps: &[i64], messages: &[S], window: i64) -> Vec<bool> {
    let mut filter = DeliveryFilter::new(window);
    let decisions: Vec<bool> = timestamps
        .iter()
        .zip(messages)
        .map(|(&timestamp, content)| filter.decide(timestamp, content.as_ref()))
        .collect();
    log::info!(
        "Delivered {} of {} messages ({} distinct)",
        filter.delivered_count(),
        decisions.len(),
        filter.tracked()
    );
    decisions
}

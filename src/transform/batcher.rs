//! Capacity-bounded batching of order demand.

use tracing::debug;

use crate::error::{FillError, Result};
use crate::model::{Batch, Demand};

/// Partition demand into batches of at most `capacity` cards.
///
/// Demand is drained in the given order. When a row does not fit in the
/// current batch, the part that fits is placed there, the batch is closed and
/// the remainder continues into the next one, as many times as needed. Every
/// batch except the last holds exactly `capacity` cards.
pub fn partition<D: Demand>(demand: &[D], capacity: u32) -> Result<Vec<Batch>> {
    if capacity == 0 {
        return Err(FillError::InvalidCapacity);
    }

    let mut batches = Vec::new();
    let mut current = Batch::new(0);
    let mut current_total: u32 = 0;

    for item in demand {
        let mut remaining = item.quantity();

        while remaining > 0 {
            let room = capacity - current_total;
            if remaining > room {
                // A batch filled exactly by the previous row gets no empty item.
                if room > 0 {
                    current.items.push(item.line_item(room));
                    remaining -= room;
                }

                let next = Batch::new(current.number + 1);
                debug!("Closed batch {} at {} card(s)", current.number, capacity);
                batches.push(std::mem::replace(&mut current, next));
                current_total = 0;
            } else {
                current.items.push(item.line_item(remaining));
                current_total += remaining;
                remaining = 0;
            }
        }
    }

    if !current.is_empty() {
        debug!("Closed batch {} at {} card(s)", current.number, current_total);
        batches.push(current);
    }

    Ok(batches)
}

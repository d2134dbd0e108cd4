//! Flexible space distribution.
//!
//! Splits an integer budget among flexible pages in proportion to their
//! weights, never leaving a page outside its bounds. When the bounds
//! cannot absorb the whole budget the pages are held at their bounds and the
//! difference is reported as [`Allocation::residual`].

use std::cmp::Ordering;

use crate::page::PageBounds;

/// A flexible page as seen by the allocator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlexSlot {
    /// Relative share of the budget.
    pub weight: i32,
    pub bounds: PageBounds,
}

/// Result of [`distribute`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Allocation {
    /// One size per input slot, each within its slot's bounds.
    pub sizes: Vec<i32>,
    /// `available - sum(sizes)`: unused space when positive, overflow when
    /// negative.
    pub residual: i64,
}

/// Distribute `available` among `slots`.
///
/// Shares follow the slot weights (an equal split when every weight is zero)
/// and are rounded by largest remainder, ties to the lower index. Slots whose
/// share breaks their bounds are frozen at the bound and the rest of the
/// budget is shared again among the others, until nothing is violated.
pub fn distribute(available: i32, slots: &[FlexSlot]) -> Allocation {
    let mut frozen: Vec<Option<i32>> = vec![None; slots.len()];

    loop {
        let free: Vec<usize> = (0..slots.len()).filter(|&i| frozen[i].is_none()).collect();
        if free.is_empty() {
            break;
        }

        let pinned: i64 = frozen.iter().flatten().map(|&s| i64::from(s)).sum();
        let budget = i64::from(available) - pinned;
        let weights: Vec<i64> = free
            .iter()
            .map(|&i| i64::from(slots[i].weight.max(0)))
            .collect();
        let shares = split_proportionally(budget, &weights);

        let mut violation = 0i64;
        let clamped: Vec<i64> = free
            .iter()
            .zip(&shares)
            .map(|(&i, &share)| {
                let bounds = slots[i].bounds;
                let c = share.clamp(i64::from(bounds.min()), i64::from(bounds.max()));
                violation += c - share;
                c
            })
            .collect();

        match violation.cmp(&0) {
            Ordering::Equal => {
                for (&i, &c) in free.iter().zip(&clamped) {
                    frozen[i] = Some(c as i32);
                }
                break;
            }
            // Too much handed out: pages below their minimum keep the minimum.
            Ordering::Greater => {
                for ((&i, &c), &share) in free.iter().zip(&clamped).zip(&shares) {
                    if c > share {
                        frozen[i] = Some(c as i32);
                    }
                }
            }
            // Space left over: pages above their maximum stop at it.
            Ordering::Less => {
                for ((&i, &c), &share) in free.iter().zip(&clamped).zip(&shares) {
                    if c < share {
                        frozen[i] = Some(c as i32);
                    }
                }
            }
        }
    }

    let sizes: Vec<i32> = frozen.into_iter().map(Option::unwrap_or_default).collect();
    let used: i64 = sizes.iter().map(|&s| i64::from(s)).sum();
    Allocation {
        residual: i64::from(available) - used,
        sizes,
    }
}

/// Split `budget` by `weights` so the parts sum exactly to `budget`.
///
/// All-zero weights split evenly. The budget may be negative.
pub fn split_proportionally(budget: i64, weights: &[i64]) -> Vec<i64> {
    if weights.is_empty() {
        return Vec::new();
    }

    let mut total: i128 = weights.iter().map(|&w| i128::from(w)).sum();
    let equal;
    let weights = if total == 0 {
        equal = vec![1i64; weights.len()];
        total = weights.len() as i128;
        &equal[..]
    } else {
        weights
    };

    let budget = i128::from(budget);
    let mut parts = Vec::with_capacity(weights.len());
    let mut remainders = Vec::with_capacity(weights.len());
    for &w in weights {
        let scaled = budget * i128::from(w);
        parts.push(scaled.div_euclid(total));
        remainders.push(scaled.rem_euclid(total));
    }

    // Floor division leaves 0..len units; hand them out by largest remainder.
    let leftover = budget - parts.iter().sum::<i128>();
    let mut order: Vec<usize> = (0..weights.len()).collect();
    order.sort_by(|&a, &b| remainders[b].cmp(&remainders[a]).then(a.cmp(&b)));
    for &i in order.iter().take(leftover as usize) {
        parts[i] += 1;
    }

    parts.into_iter().map(|p| p as i64).collect()
}

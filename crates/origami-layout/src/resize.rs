//! Resizer drags.
//!
//! Dragging the resizer after page `i` moves the boundary between `i` and
//! `i + 1`: page `i` grows by the delta and page `i + 1` shrinks by it, both
//! staying inside their bounds. The neighbour must be flexible; a resizer
//! on the last page or in front of a fixed page does not move.

use origami_core::{debug, trace};

use crate::container::PageContainer;

/// A drag in progress, measured from the sizes at pointer-down.
///
/// Hosts feed the total pointer travel to
/// [`PageContainer::update_resize`] on every move; applying the totals in
/// order ends in the same state as applying only the last one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResizeDrag<E> {
    element: E,
    next: E,
    origin: i32,
}

impl<E> ResizeDrag<E> {
    /// Element of the page whose resizer is dragged.
    pub fn element(&self) -> &E {
        &self.element
    }

    /// Page size when the drag began.
    pub fn origin(&self) -> i32 {
        self.origin
    }
}

impl<E: Clone + PartialEq> PageContainer<E> {
    /// Move the resizer of the page wrapping `element` by `delta`.
    ///
    /// Returns the delta actually applied after clamping, 0 when the page is
    /// missing or its resizer cannot move.
    pub fn resize_page(&mut self, element: &E, delta: i32) -> i32 {
        let Some(index) = self.index_of(element) else {
            return 0;
        };
        self.shift_boundary(index, delta)
    }

    /// Start dragging the resizer of the page wrapping `element`.
    pub fn begin_resize(&self, element: &E) -> Option<ResizeDrag<E>> {
        let index = self.index_of(element)?;
        self.resize_range(index)?;
        let page = &self.pages[index];
        Some(ResizeDrag {
            element: page.element.clone(),
            next: self.pages[index + 1].element.clone(),
            origin: page.size,
        })
    }

    /// Set the dragged page to its size at drag start plus `total_delta`.
    ///
    /// Returns the resulting change relative to the drag origin. A drag whose
    /// page or neighbour has since been removed does nothing.
    pub fn update_resize(&mut self, drag: &ResizeDrag<E>, total_delta: i32) -> i32 {
        let Some(index) = self.index_of(&drag.element) else {
            return 0;
        };
        if self
            .pages
            .get(index + 1)
            .is_none_or(|next| next.element != drag.next)
        {
            return 0;
        }
        let target = drag.origin.saturating_add(total_delta);
        let step = target.saturating_sub(self.pages[index].size);
        self.shift_boundary(index, step);
        self.pages[index].size - drag.origin
    }

    /// Inclusive range of deltas the resizer after page `index` accepts.
    fn resize_range(&self, index: usize) -> Option<(i32, i32)> {
        let page = self.pages.get(index)?;
        page.resizer?;
        let next = self.pages.get(index + 1)?;
        if next.fixed {
            return None;
        }
        let lo = (page.bounds.min() - page.size).max(next.size - next.bounds.max());
        let hi = (page.bounds.max() - page.size).min(next.size - next.bounds.min());
        (lo <= hi).then_some((lo, hi))
    }

    fn shift_boundary(&mut self, index: usize, delta: i32) -> i32 {
        let Some((lo, hi)) = self.resize_range(index) else {
            debug!(index, delta, "resizer cannot move");
            return 0;
        };
        let applied = delta.clamp(lo, hi);
        if applied != 0 {
            self.pages[index].size += applied;
            self.pages[index + 1].size -= applied;
            self.keep_proportions();
            self.relayout();
        }
        trace!(index, delta, applied, "resizer moved");
        applied
    }
}

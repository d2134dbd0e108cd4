#![forbid(unsafe_code)]

//! Page layout along one axis.
//!
//! A [`PageContainer`] owns an ordered list of pages. Each page wraps a host
//! element handle it does not own, may carry shadow decorations and a
//! resizer, and has `[min, max]` size bounds. Whenever the container is
//! resized or its pages change, the available extent is split among the
//! pages:
//!
//! - fixed pages keep their size,
//! - flexible pages share the rest evenly, or in the proportions the last
//!   drag left, clamped to their bounds (see [`allocate::distribute`]),
//! - resizer drags move space between a page and its flexible neighbour.
//!
//! ```
//! use origami_layout::{PageContainer, Size};
//!
//! let mut origami = PageContainer::horizontal();
//! origami.set_size(Size::new(400, 300));
//! origami.add_fixed_page("sidebar", Size::new(100, 300));
//! origami.add_flexible_page("editor");
//!
//! let editor = origami.layout().placement(&"editor").unwrap();
//! assert_eq!((editor.offset, editor.extent), (100, 300));
//! ```

pub mod allocate;
pub mod config;
pub mod container;
pub mod page;
pub mod resize;

pub use config::PageLayoutConfig;
pub use container::{LayoutHost, PageContainer, PageLayout, PagePlacement, ResizerPlacement};
pub use origami_core::geometry::{Rect, Size};
pub use page::{Decoration, Edge, LayoutError, Page, PageBounds, Resizer, ShadowKind};
pub use resize::ResizeDrag;

use serde::{Deserialize, Serialize};

/// The axis pages are laid out along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Left to right; dividers between pages are vertical.
    #[default]
    Horizontal,
    /// Top to bottom; dividers between pages are horizontal.
    Vertical,
}

impl Direction {
    /// Extent of `size` along the layout axis.
    #[inline]
    pub const fn main(self, size: Size) -> i32 {
        match self {
            Direction::Horizontal => size.width,
            Direction::Vertical => size.height,
        }
    }

    /// Extent of `size` across the layout axis.
    #[inline]
    pub const fn cross(self, size: Size) -> i32 {
        match self {
            Direction::Horizontal => size.height,
            Direction::Vertical => size.width,
        }
    }

    /// Rectangle spanning `[offset, offset + extent)` along the axis and the
    /// full `cross` extent across it.
    #[inline]
    pub const fn span(self, offset: i32, extent: i32, cross: i32) -> Rect {
        match self {
            Direction::Horizontal => Rect::new(offset, 0, extent, cross),
            Direction::Vertical => Rect::new(0, offset, cross, extent),
        }
    }
}

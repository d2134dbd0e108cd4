//! Page records and their size bounds.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Default lower bound for a flexible page.
pub const DEFAULT_MIN_SIZE: i32 = 100;

/// Default upper bound for a flexible page.
pub const DEFAULT_MAX_SIZE: i32 = 1000;

/// Size bounds of a page along the layout axis, `0 <= min <= max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawBounds", into = "RawBounds")]
pub struct PageBounds {
    min: i32,
    max: i32,
}

impl PageBounds {
    /// Create bounds, rejecting a negative minimum or `min > max`.
    pub const fn new(min: i32, max: i32) -> Result<Self, LayoutError> {
        if min < 0 || min > max {
            return Err(LayoutError::InvalidBounds { min, max });
        }
        Ok(Self { min, max })
    }

    /// Create bounds from untrusted input: the minimum is clamped to zero and
    /// the maximum raised to the minimum.
    pub const fn sanitized(min: i32, max: i32) -> Self {
        let min = if min < 0 { 0 } else { min };
        let max = if max < min { min } else { max };
        Self { min, max }
    }

    /// Bounds that admit exactly one size.
    pub const fn exact(size: i32) -> Self {
        Self::sanitized(size, size)
    }

    #[inline]
    pub const fn min(self) -> i32 {
        self.min
    }

    #[inline]
    pub const fn max(self) -> i32 {
        self.max
    }

    /// Clamp a size into these bounds.
    #[inline]
    pub const fn clamp(self, size: i32) -> i32 {
        if size < self.min {
            self.min
        } else if size > self.max {
            self.max
        } else {
            size
        }
    }

    #[inline]
    pub const fn contains(self, size: i32) -> bool {
        size >= self.min && size <= self.max
    }
}

impl Default for PageBounds {
    fn default() -> Self {
        Self {
            min: DEFAULT_MIN_SIZE,
            max: DEFAULT_MAX_SIZE,
        }
    }
}

#[derive(Serialize, Deserialize)]
struct RawBounds {
    min: i32,
    max: i32,
}

impl TryFrom<RawBounds> for PageBounds {
    type Error = LayoutError;

    fn try_from(raw: RawBounds) -> Result<Self, Self::Error> {
        Self::new(raw.min, raw.max)
    }
}

impl From<PageBounds> for RawBounds {
    fn from(bounds: PageBounds) -> Self {
        Self {
            min: bounds.min,
            max: bounds.max,
        }
    }
}

/// Visual style of a shadow decoration, passed through to the host painter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShadowKind {
    #[default]
    Normal,
    Light,
}

/// Which edge of a page a decoration sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Edge {
    /// Left for horizontal layouts, top for vertical ones.
    Start,
    /// Right for horizontal layouts, bottom for vertical ones.
    End,
}

/// A shadow owned by a page. It takes `thickness` of the layout axis and
/// does not take part in size negotiation otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decoration {
    pub kind: ShadowKind,
    pub thickness: i32,
}

/// A draggable divider on a page's trailing boundary.
///
/// Resizers overlay the boundary and take no extent of their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resizer {
    pub thickness: i32,
}

/// One slot in a [`PageContainer`](crate::PageContainer).
///
/// Pages are only created and mutated by the container; callers get shared
/// references through [`PageContainer::pages`](crate::PageContainer::pages).
#[derive(Debug, Clone)]
pub struct Page<E> {
    pub(crate) element: E,
    pub(crate) bounds: PageBounds,
    pub(crate) size: i32,
    /// Share of the flexible space, kept across passes. Zero on every
    /// flexible page means an even split.
    pub(crate) weight: i32,
    pub(crate) fixed: bool,
    pub(crate) leading: Option<Decoration>,
    pub(crate) trailing: Option<Decoration>,
    pub(crate) resizer: Option<Resizer>,
}

impl<E> Page<E> {
    pub(crate) fn flexible(element: E, bounds: PageBounds) -> Self {
        Self {
            element,
            bounds,
            size: 0,
            weight: 0,
            fixed: false,
            leading: None,
            trailing: None,
            resizer: None,
        }
    }

    pub(crate) fn fixed(element: E, size: i32) -> Self {
        let bounds = PageBounds::exact(size);
        Self {
            element,
            bounds,
            size: bounds.min(),
            weight: 0,
            fixed: true,
            leading: None,
            trailing: None,
            resizer: None,
        }
    }

    /// The host element this page positions.
    pub fn element(&self) -> &E {
        &self.element
    }

    /// Current extent along the layout axis.
    pub fn size(&self) -> i32 {
        self.size
    }

    pub fn bounds(&self) -> PageBounds {
        self.bounds
    }

    pub fn is_fixed(&self) -> bool {
        self.fixed
    }

    pub fn leading(&self) -> Option<&Decoration> {
        self.leading.as_ref()
    }

    pub fn trailing(&self) -> Option<&Decoration> {
        self.trailing.as_ref()
    }

    pub fn resizer(&self) -> Option<&Resizer> {
        self.resizer.as_ref()
    }

    /// Sizes a layout pass can give this page. A fixed page keeps its
    /// current size whatever its bounds allow a drag to do.
    pub(crate) fn reach(&self) -> PageBounds {
        if self.fixed {
            PageBounds::exact(self.size)
        } else {
            self.bounds
        }
    }

    /// Axis extent taken by this page's decorations.
    pub(crate) fn decoration_extent(&self) -> i32 {
        let leading = self.leading.map_or(0, |d| d.thickness);
        let trailing = self.trailing.map_or(0, |d| d.thickness);
        leading.saturating_add(trailing)
    }
}

/// Errors from constructing bounds or configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutError {
    /// `min` is negative or greater than `max`.
    InvalidBounds { min: i32, max: i32 },
    /// A decoration or resizer thickness is negative.
    NegativeThickness { field: &'static str, value: i32 },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidBounds { min, max } => {
                write!(f, "invalid page bounds: min={min} max={max}")
            }
            Self::NegativeThickness { field, value } => {
                write!(f, "{field} must be non-negative, got {value}")
            }
        }
    }
}

impl std::error::Error for LayoutError {}

//! The page container.
//!
//! Every public mutator finishes with a full re-layout, so the page list and
//! the cached [`PageLayout`] always agree when control returns to the caller.

use origami_core::geometry::{Rect, Size};
use origami_core::{debug, trace};

use crate::Direction;
use crate::allocate::{FlexSlot, distribute};
use crate::config::PageLayoutConfig;
use crate::page::{Decoration, Edge, LayoutError, Page, PageBounds, Resizer, ShadowKind};

/// Receives computed rectangles for the pieces of each page.
///
/// Only element bounds are mandatory; hosts that draw no shadows or
/// dividers can ignore the rest.
pub trait LayoutHost<E> {
    fn set_element_bounds(&mut self, element: &E, bounds: Rect);

    fn set_decoration_bounds(
        &mut self,
        _element: &E,
        _edge: Edge,
        _kind: ShadowKind,
        _bounds: Rect,
    ) {
    }

    /// `draggable` is false when the divider has no flexible neighbour to
    /// take space from.
    fn set_resizer_bounds(&mut self, _element: &E, _bounds: Rect, _draggable: bool) {}
}

/// Where a page's resizer sits and whether it can move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResizerPlacement {
    pub bounds: Rect,
    pub draggable: bool,
}

/// Computed geometry of one page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PagePlacement<E> {
    pub element: E,
    /// Start of the element along the layout axis.
    pub offset: i32,
    /// Extent of the element along the layout axis.
    pub extent: i32,
    pub bounds: Rect,
    pub leading: Option<(ShadowKind, Rect)>,
    pub trailing: Option<(ShadowKind, Rect)>,
    pub resizer: Option<ResizerPlacement>,
}

/// Result of the last layout pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLayout<E> {
    extent: i32,
    occupied: i32,
    residual: i64,
    placements: Vec<PagePlacement<E>>,
}

impl<E> Default for PageLayout<E> {
    fn default() -> Self {
        Self {
            extent: 0,
            occupied: 0,
            residual: 0,
            placements: Vec::new(),
        }
    }
}

impl<E> PageLayout<E> {
    /// Container extent along the layout axis at the time of the pass.
    pub fn extent(&self) -> i32 {
        self.extent
    }

    /// End offset of the last page, decorations included.
    pub fn occupied(&self) -> i32 {
        self.occupied
    }

    /// Space the flexible pages could not absorb. Positive is left unused
    /// after the last page, negative overflows past the container end.
    pub fn residual(&self) -> i64 {
        self.residual
    }

    /// How far the pages run past the container end, or 0.
    pub fn overflow(&self) -> i32 {
        self.occupied.saturating_sub(self.extent.max(0)).max(0)
    }

    pub fn placements(&self) -> &[PagePlacement<E>] {
        &self.placements
    }
}

impl<E: PartialEq> PageLayout<E> {
    pub fn placement(&self, element: &E) -> Option<&PagePlacement<E>> {
        self.placements.iter().find(|p| p.element == *element)
    }
}

/// An ordered run of pages laid out along one axis.
///
/// `E` is the host's handle for a visual element. The container stores a
/// clone of it to identify and position the element; it never owns or
/// destroys what the handle refers to.
#[derive(Debug, Clone)]
pub struct PageContainer<E> {
    direction: Direction,
    config: PageLayoutConfig,
    size: Size,
    pub(crate) pages: Vec<Page<E>>,
    layout: PageLayout<E>,
}

impl<E: Clone + PartialEq> Default for PageContainer<E> {
    fn default() -> Self {
        Self::new(Direction::default())
    }
}

impl<E: Clone + PartialEq> PageContainer<E> {
    pub fn new(direction: Direction) -> Self {
        Self {
            direction,
            config: PageLayoutConfig::default(),
            size: Size::ZERO,
            pages: Vec::new(),
            layout: PageLayout::default(),
        }
    }

    /// Pages side by side, left to right.
    pub fn horizontal() -> Self {
        Self::new(Direction::Horizontal)
    }

    /// Pages stacked top to bottom.
    pub fn vertical() -> Self {
        Self::new(Direction::Vertical)
    }

    pub fn with_config(
        direction: Direction,
        config: PageLayoutConfig,
    ) -> Result<Self, LayoutError> {
        config.validate()?;
        Ok(Self {
            config,
            ..Self::new(direction)
        })
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn config(&self) -> &PageLayoutConfig {
        &self.config
    }

    pub fn size(&self) -> Size {
        self.size
    }

    /// The host resized the container.
    ///
    /// Zero and negative sizes are accepted; flexible pages then sit at
    /// their minimum and overflow.
    pub fn set_size(&mut self, size: Size) {
        if self.size == size {
            return;
        }
        self.size = size;
        self.relayout();
    }

    /// Append a page that shares the flexible space.
    ///
    /// Returns `false` if `element` already has a page. Flexible pages are
    /// re-justified to an equal split afterwards.
    pub fn add_flexible_page(&mut self, element: E) -> bool {
        if self.contains_component(&element) {
            debug!("element already has a page");
            return false;
        }
        self.pages.push(Page::flexible(element, self.config.default_bounds));
        self.justify();
        self.relayout();
        true
    }

    /// Append a page that keeps the element's current extent along the axis.
    pub fn add_fixed_page(&mut self, element: E, element_size: Size) -> bool {
        if self.contains_component(&element) {
            debug!("element already has a page");
            return false;
        }
        let size = self.direction.main(element_size);
        self.pages.push(Page::fixed(element, size));
        self.justify();
        self.relayout();
        true
    }

    /// Put a shadow on the leading edge of the most recently added page.
    pub fn add_shadow_at_start(&mut self) -> bool {
        let shadow = self.shadow();
        let Some(page) = self.pages.last_mut() else {
            return false;
        };
        page.leading = Some(shadow);
        self.relayout();
        true
    }

    /// Put a shadow on the trailing edge of the most recently added page.
    pub fn add_shadow_at_end(&mut self) -> bool {
        let shadow = self.shadow();
        let Some(page) = self.pages.last_mut() else {
            return false;
        };
        page.trailing = Some(shadow);
        self.relayout();
        true
    }

    /// Attach a divider after the most recently added page and give that
    /// page the bounds `[min, max]` (repaired if inverted or negative).
    pub fn add_resizer(&mut self, min: i32, max: i32) -> bool {
        let thickness = self.config.resizer_thickness;
        let Some(page) = self.pages.last_mut() else {
            return false;
        };
        let bounds = PageBounds::sanitized(min, max);
        page.bounds = bounds;
        page.size = bounds.clamp(page.size);
        page.resizer = Some(Resizer { thickness });
        self.relayout();
        true
    }

    /// Remove the page wrapping `element`. Returns `false` and changes
    /// nothing if there is none.
    pub fn remove_page_containing(&mut self, element: &E) -> bool {
        let Some(index) = self.index_of(element) else {
            return false;
        };
        self.pages.remove(index);
        self.relayout();
        true
    }

    pub fn contains_component(&self, element: &E) -> bool {
        self.index_of(element).is_some()
    }

    /// Drop every page along with its shadows and resizer.
    pub fn clear(&mut self) {
        self.pages.clear();
        self.relayout();
    }

    /// Sum of page minimums: the extent this container can shrink to.
    ///
    /// Fixed pages count with their current size, since only a drag moves
    /// them inside their bounds.
    pub fn minimum_common_size(&self) -> i32 {
        self.pages
            .iter()
            .fold(0i32, |acc, p| acc.saturating_add(p.reach().min()))
    }

    /// Sum of page maximums: the extent this container can use.
    pub fn maximum_common_size(&self) -> i32 {
        self.pages
            .iter()
            .fold(0i32, |acc, p| acc.saturating_add(p.reach().max()))
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    pub fn pages(&self) -> &[Page<E>] {
        &self.pages
    }

    pub fn page(&self, element: &E) -> Option<&Page<E>> {
        self.pages.iter().find(|p| p.element == *element)
    }

    pub fn layout(&self) -> &PageLayout<E> {
        &self.layout
    }

    /// Push the current layout to the host, page by page: element, leading
    /// shadow, trailing shadow, resizer.
    pub fn apply<H: LayoutHost<E>>(&self, host: &mut H) {
        for placement in &self.layout.placements {
            let element = &placement.element;
            host.set_element_bounds(element, placement.bounds);
            if let Some((kind, bounds)) = placement.leading {
                host.set_decoration_bounds(element, Edge::Start, kind, bounds);
            }
            if let Some((kind, bounds)) = placement.trailing {
                host.set_decoration_bounds(element, Edge::End, kind, bounds);
            }
            if let Some(resizer) = placement.resizer {
                host.set_resizer_bounds(element, resizer.bounds, resizer.draggable);
            }
        }
    }

    pub(crate) fn index_of(&self, element: &E) -> Option<usize> {
        self.pages.iter().position(|p| p.element == *element)
    }

    fn shadow(&self) -> Decoration {
        Decoration {
            kind: self.config.shadow_kind,
            thickness: self.config.shadow_thickness,
        }
    }

    /// Forget flexible proportions so the next pass splits evenly.
    fn justify(&mut self) {
        for page in self.pages.iter_mut().filter(|p| !p.fixed) {
            page.weight = 0;
        }
    }

    /// Make the current flexible sizes the proportions later passes follow.
    pub(crate) fn keep_proportions(&mut self) {
        for page in self.pages.iter_mut().filter(|p| !p.fixed) {
            page.weight = page.size;
        }
    }

    /// Recompute every page size and rectangle.
    pub(crate) fn relayout(&mut self) {
        let direction = self.direction;
        let extent = direction.main(self.size);
        let cross = direction.cross(self.size.non_negative());

        let mut fixed_total = 0i64;
        let mut decorations = 0i64;
        for page in &mut self.pages {
            if page.fixed {
                page.size = page.bounds.clamp(page.size);
                fixed_total += i64::from(page.size);
            }
            decorations += i64::from(page.decoration_extent());
        }
        let available = (i64::from(extent) - fixed_total - decorations)
            .clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32;

        let slots: Vec<FlexSlot> = self
            .pages
            .iter()
            .filter(|p| !p.fixed)
            .map(|p| FlexSlot {
                weight: p.weight,
                bounds: p.bounds,
            })
            .collect();
        let allocation = distribute(available, &slots);
        for (page, &size) in self
            .pages
            .iter_mut()
            .filter(|p| !p.fixed)
            .zip(&allocation.sizes)
        {
            page.size = size;
        }

        let mut offset = 0i32;
        let mut placements = Vec::with_capacity(self.pages.len());
        for (index, page) in self.pages.iter().enumerate() {
            let mut leading = None;
            if let Some(shadow) = page.leading {
                leading = Some((shadow.kind, direction.span(offset, shadow.thickness, cross)));
                offset = offset.saturating_add(shadow.thickness);
            }

            let page_offset = offset;
            let bounds = direction.span(offset, page.size, cross);
            offset = offset.saturating_add(page.size);

            let mut trailing = None;
            if let Some(shadow) = page.trailing {
                trailing = Some((shadow.kind, direction.span(offset, shadow.thickness, cross)));
                offset = offset.saturating_add(shadow.thickness);
            }

            let resizer = page.resizer.map(|r| ResizerPlacement {
                bounds: direction.span(offset.saturating_sub(r.thickness / 2), r.thickness, cross),
                draggable: self.pages.get(index + 1).is_some_and(|next| !next.fixed),
            });

            placements.push(PagePlacement {
                element: page.element.clone(),
                offset: page_offset,
                extent: page.size,
                bounds,
                leading,
                trailing,
                resizer,
            });
        }

        self.layout = PageLayout {
            extent,
            occupied: offset,
            residual: allocation.residual,
            placements,
        };

        trace!(
            extent,
            available,
            pages = self.pages.len(),
            "page layout pass"
        );
        if self.layout.overflow() > 0 {
            debug!(
                extent,
                occupied = self.layout.occupied,
                "pages overflow container"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sizes<E: Clone + PartialEq>(c: &PageContainer<E>) -> Vec<i32> {
        c.pages().iter().map(Page::size).collect()
    }

    #[test]
    fn fixed_then_flexible() {
        let mut c = PageContainer::horizontal();
        c.set_size(Size::new(400, 200));
        assert!(c.add_fixed_page(1, Size::new(100, 200)));
        assert!(c.add_flexible_page(2));

        assert_eq!(sizes(&c), vec![100, 300]);
        let spans: Vec<(i32, i32)> = c
            .layout()
            .placements()
            .iter()
            .map(|p| (p.offset, p.extent))
            .collect();
        assert_eq!(spans, vec![(0, 100), (100, 300)]);
        assert_eq!(c.layout().placement(&2).unwrap().bounds, Rect::new(100, 0, 300, 200));
    }

    #[test]
    fn vertical_uses_height() {
        let mut c = PageContainer::vertical();
        c.set_size(Size::new(80, 500));
        c.add_fixed_page("header", Size::new(80, 40));
        c.add_flexible_page("body");
        let body = c.layout().placement(&"body").unwrap();
        assert_eq!(body.bounds, Rect::new(0, 40, 80, 460));
    }

    #[test]
    fn duplicate_element_rejected() {
        let mut c = PageContainer::horizontal();
        c.set_size(Size::new(400, 10));
        assert!(c.add_flexible_page(7));
        assert!(!c.add_flexible_page(7));
        assert!(!c.add_fixed_page(7, Size::new(10, 10)));
        assert_eq!(c.page_count(), 1);
    }

    #[test]
    fn adding_flexible_pages_justifies() {
        let mut c = PageContainer::horizontal();
        c.set_size(Size::new(600, 10));
        c.add_flexible_page('a');
        assert_eq!(sizes(&c), vec![600]);
        c.add_flexible_page('b');
        assert_eq!(sizes(&c), vec![300, 300]);
        c.add_flexible_page('c');
        assert_eq!(sizes(&c), vec![200, 200, 200]);
    }

    #[test]
    fn growing_preserves_proportions() {
        let config = PageLayoutConfig::default().default_bounds(PageBounds::sanitized(0, 5000));
        let mut c = PageContainer::with_config(Direction::Horizontal, config).unwrap();
        c.set_size(Size::new(300, 10));
        c.add_flexible_page(1);
        c.add_resizer(0, 5000);
        c.add_flexible_page(2);
        assert_eq!(c.resize_page(&1, 50), 50);
        assert_eq!(sizes(&c), vec![200, 100]);

        c.set_size(Size::new(600, 10));
        assert_eq!(sizes(&c), vec![400, 200]);
    }

    #[test]
    fn collapse_to_tiny_extent_is_transient() {
        let mut c = PageContainer::horizontal();
        c.set_size(Size::new(400, 10));
        c.add_flexible_page(1);
        c.add_resizer(0, 1000);
        c.add_flexible_page(2);
        c.add_resizer(0, 1000);
        assert_eq!(sizes(&c), vec![200, 200]);

        c.set_size(Size::new(1, 10));
        assert_eq!(sizes(&c), vec![1, 0]);
        c.set_size(Size::new(400, 10));
        assert_eq!(sizes(&c), vec![200, 200]);

        assert_eq!(c.resize_page(&1, 100), 100);
        c.set_size(Size::new(1, 10));
        c.set_size(Size::new(400, 10));
        assert_eq!(sizes(&c), vec![300, 100]);
    }

    #[test]
    fn shadows_take_axis_space() {
        let mut c = PageContainer::horizontal();
        c.set_size(Size::new(400, 50));
        c.add_flexible_page(1);
        assert!(c.add_shadow_at_start());
        assert!(c.add_shadow_at_end());

        assert_eq!(sizes(&c), vec![376]);
        let p = c.layout().placement(&1).unwrap();
        assert_eq!(p.leading, Some((ShadowKind::Normal, Rect::new(0, 0, 12, 50))));
        assert_eq!(p.bounds, Rect::new(12, 0, 376, 50));
        assert_eq!(p.trailing, Some((ShadowKind::Normal, Rect::new(388, 0, 12, 50))));
        assert_eq!(c.layout().occupied(), 400);
    }

    #[test]
    fn decorations_and_resizers_need_a_page() {
        let mut c: PageContainer<u8> = PageContainer::horizontal();
        assert!(!c.add_shadow_at_start());
        assert!(!c.add_shadow_at_end());
        assert!(!c.add_resizer(10, 20));
    }

    #[test]
    fn resizer_overlays_boundary() {
        let mut c = PageContainer::horizontal();
        c.set_size(Size::new(400, 30));
        c.add_flexible_page(1);
        c.add_resizer(100, 1000);
        c.add_flexible_page(2);
        c.add_resizer(100, 1000);

        let first = c.layout().placement(&1).unwrap().resizer.unwrap();
        assert_eq!(first.bounds, Rect::new(199, 0, 2, 30));
        assert!(first.draggable);
        let last = c.layout().placement(&2).unwrap().resizer.unwrap();
        assert!(!last.draggable);
        assert_eq!(c.layout().occupied(), 400);
    }

    #[test]
    fn resizer_before_fixed_page_is_not_draggable() {
        let mut c = PageContainer::horizontal();
        c.set_size(Size::new(400, 30));
        c.add_flexible_page(1);
        c.add_resizer(100, 1000);
        c.add_fixed_page(2, Size::new(50, 30));
        let resizer = c.layout().placement(&1).unwrap().resizer.unwrap();
        assert!(!resizer.draggable);
    }

    #[test]
    fn add_resizer_overrides_and_repairs_bounds() {
        let mut c = PageContainer::horizontal();
        c.set_size(Size::new(400, 30));
        c.add_flexible_page(1);
        c.add_resizer(250, 150);
        let page = c.page(&1).unwrap();
        assert_eq!(page.bounds(), PageBounds::sanitized(250, 250));
        assert_eq!(page.size(), 250);
        assert_eq!(c.layout().residual(), 150);
    }

    #[test]
    fn resizer_on_fixed_page_clamps_its_size() {
        let mut c = PageContainer::horizontal();
        c.set_size(Size::new(400, 30));
        c.add_fixed_page(1, Size::new(100, 30));
        c.add_resizer(150, 200);
        c.add_flexible_page(2);
        assert_eq!(sizes(&c), vec![150, 250]);
    }

    #[test]
    fn remove_relayouts_and_reports() {
        let mut c = PageContainer::horizontal();
        c.set_size(Size::new(400, 10));
        c.add_fixed_page(1, Size::new(100, 10));
        c.add_flexible_page(2);
        c.add_flexible_page(3);
        assert_eq!(sizes(&c), vec![100, 150, 150]);

        assert!(!c.remove_page_containing(&9));
        assert_eq!(sizes(&c), vec![100, 150, 150]);

        assert!(c.remove_page_containing(&2));
        assert!(!c.contains_component(&2));
        assert_eq!(sizes(&c), vec![100, 300]);
    }

    #[test]
    fn clear_drops_everything() {
        let mut c = PageContainer::horizontal();
        c.set_size(Size::new(400, 10));
        c.add_flexible_page(1);
        c.add_shadow_at_end();
        c.add_resizer(100, 500);
        c.clear();
        assert!(c.is_empty());
        assert!(c.layout().placements().is_empty());
        assert_eq!(c.minimum_common_size(), 0);
        assert_eq!(c.layout().residual(), 400);
    }

    #[test]
    fn common_sizes_sum_bounds() {
        let mut c = PageContainer::horizontal();
        c.add_flexible_page(1);
        c.add_fixed_page(2, Size::new(40, 0));
        c.add_flexible_page(3);
        c.add_resizer(10, 20);
        assert_eq!(c.minimum_common_size(), 100 + 40 + 10);
        assert_eq!(c.maximum_common_size(), 1000 + 40 + 20);
    }

    #[test]
    fn common_sizes_count_fixed_pages_at_their_size() {
        let mut c = PageContainer::horizontal();
        c.set_size(Size::new(400, 10));
        c.add_fixed_page(1, Size::new(100, 10));
        c.add_resizer(80, 160);
        c.add_flexible_page(2);
        assert_eq!(c.minimum_common_size(), 200);
        assert_eq!(c.maximum_common_size(), 1100);

        c.set_size(Size::new(c.minimum_common_size(), 10));
        assert_eq!(sizes(&c), vec![100, 100]);
        assert_eq!(c.layout().residual(), 0);

        c.set_size(Size::new(400, 10));
        assert_eq!(c.resize_page(&1, 60), 60);
        assert_eq!(c.minimum_common_size(), 260);
        c.set_size(Size::new(260, 10));
        assert_eq!(sizes(&c), vec![160, 100]);
        assert_eq!(c.layout().occupied(), 260);
    }

    #[test]
    fn negative_extent_degrades_to_minimums() {
        let mut c = PageContainer::horizontal();
        c.add_flexible_page(1);
        c.add_flexible_page(2);
        c.set_size(Size::new(-200, -5));
        assert_eq!(sizes(&c), vec![100, 100]);
        let p = c.layout().placement(&2).unwrap();
        assert_eq!(p.bounds, Rect::new(100, 0, 100, 0));
        assert_eq!(c.layout().overflow(), 200);
    }

    #[test]
    fn with_config_validates() {
        let bad = PageLayoutConfig::default().shadow_thickness(-3);
        assert!(PageContainer::<u8>::with_config(Direction::Vertical, bad).is_err());
    }

    #[derive(Default)]
    struct Recorder {
        calls: Vec<String>,
    }

    impl LayoutHost<&'static str> for Recorder {
        fn set_element_bounds(&mut self, element: &&'static str, bounds: Rect) {
            self.calls.push(format!("{element} {}+{}", bounds.x, bounds.width));
        }

        fn set_decoration_bounds(
            &mut self,
            element: &&'static str,
            edge: Edge,
            _kind: ShadowKind,
            bounds: Rect,
        ) {
            self.calls
                .push(format!("{element} {edge:?} {}+{}", bounds.x, bounds.width));
        }

        fn set_resizer_bounds(&mut self, element: &&'static str, bounds: Rect, draggable: bool) {
            self.calls
                .push(format!("{element} resizer {} {draggable}", bounds.x));
        }
    }

    #[test]
    fn apply_pushes_rects_in_page_order() {
        let config = PageLayoutConfig::default().shadow_thickness(10);
        let mut c = PageContainer::with_config(Direction::Horizontal, config).unwrap();
        c.set_size(Size::new(300, 20));
        c.add_fixed_page("nav", Size::new(60, 20));
        c.add_shadow_at_end();
        c.add_resizer(60, 60);
        c.add_flexible_page("roll");

        let mut host = Recorder::default();
        c.apply(&mut host);
        assert_eq!(
            host.calls,
            vec![
                "nav 0+60",
                "nav End 60+10",
                "nav resizer 69 true",
                "roll 70+230",
            ]
        );
    }
}

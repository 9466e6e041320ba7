use std::{cell::RefCell, rc::Rc};

use crate::section::{SectionGeometry, SectionId, SectionRegistry};

/// Distance in pixels from the viewport top at which a section is considered
/// "in focus".
pub const ANCHOR_LINE: f64 = 120.0;

/// Owns the active section and recomputes it from live section geometry.
#[derive(Debug, Clone)]
pub struct ScrollTracker {
    registry: SectionRegistry,
    anchor: f64,
    active: Option<SectionId>,
}

impl ScrollTracker {
    pub fn new(registry: SectionRegistry) -> Self {
        Self::with_anchor(registry, ANCHOR_LINE)
    }

    pub fn with_anchor(registry: SectionRegistry, anchor: f64) -> Self {
        Self {
            registry,
            anchor,
            active: None,
        }
    }

    /// `None` only until the first successful measurement.
    pub fn active(&self) -> Option<SectionId> {
        self.active
    }

    /// First section in registry order whose extent crosses the anchor line.
    /// Sections missing from the document are skipped.
    pub fn locate<G>(&self, geometry: &G) -> Option<SectionId>
    where
        G: SectionGeometry + ?Sized,
    {
        self.registry.iter().find(|id| {
            geometry
                .bounds(*id)
                .is_some_and(|bounds| bounds.contains_line(self.anchor))
        })
    }

    /// Recomputes from absolute geometry and returns the resulting active
    /// section. Leaves the previous value in place when nothing matches.
    pub fn recompute<G>(&mut self, geometry: &G) -> Option<SectionId>
    where
        G: SectionGeometry + ?Sized,
    {
        if let Some(found) = self.locate(geometry) {
            self.active = Some(found);
        }
        self.active
    }
}

/// Deregisters a scroll handler. Must be called at most once.
pub type Unsubscribe = Box<dyn FnOnce()>;

/// Source of scroll notifications, e.g. the browser window.
pub trait ScrollSource {
    /// Registers `on_scroll` to run for every scroll notification until the
    /// returned handle is invoked.
    fn subscribe(&self, on_scroll: Rc<dyn Fn()>) -> Unsubscribe;
}

/// A [`ScrollTracker`] attached to a [`ScrollSource`] for the lifetime of a
/// page view.
///
/// Mounting measures immediately so the initial highlight is correct without
/// a scroll gesture. Dropping the spy (or calling [`ScrollSpy::unmount`])
/// removes the listener before returning.
pub struct ScrollSpy {
    tracker: Rc<RefCell<ScrollTracker>>,
    unsubscribe: Option<Unsubscribe>,
}

impl ScrollSpy {
    pub fn mount<S, G, P>(source: &S, tracker: ScrollTracker, geometry: G, publish: P) -> Self
    where
        S: ScrollSource + ?Sized,
        G: SectionGeometry + 'static,
        P: Fn(SectionId) + 'static,
    {
        let tracker = Rc::new(RefCell::new(tracker));
        let on_scroll: Rc<dyn Fn()> = {
            let tracker = Rc::clone(&tracker);
            Rc::new(move || {
                let (previous, current) = {
                    let mut tracker = tracker.borrow_mut();
                    let previous = tracker.active();
                    (previous, tracker.recompute(&geometry))
                };
                if let Some(id) = current {
                    if previous != current {
                        log::debug!("active section changed to {id}");
                    }
                    publish(id);
                }
            })
        };

        on_scroll();
        let unsubscribe = source.subscribe(on_scroll);

        Self {
            tracker,
            unsubscribe: Some(unsubscribe),
        }
    }

    pub fn active(&self) -> Option<SectionId> {
        self.tracker.borrow().active()
    }

    pub fn unmount(mut self) {
        self.release();
    }

    fn release(&mut self) {
        if let Some(unsubscribe) = self.unsubscribe.take() {
            unsubscribe();
            log::debug!("scroll listener released");
        }
    }
}

impl Drop for ScrollSpy {
    fn drop(&mut self) {
        self.release();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::section::SectionBounds;
    use std::cell::Cell;

    type Handlers = Rc<RefCell<Vec<(usize, Rc<dyn Fn()>)>>>;

    #[derive(Default)]
    struct FakeScroll {
        handlers: Handlers,
        next_id: Cell<usize>,
    }

    impl FakeScroll {
        fn fire(&self) {
            let handlers: Vec<Rc<dyn Fn()>> =
                self.handlers.borrow().iter().map(|(_, h)| Rc::clone(h)).collect();
            for handler in handlers {
                handler();
            }
        }

        fn listener_count(&self) -> usize {
            self.handlers.borrow().len()
        }
    }

    impl ScrollSource for FakeScroll {
        fn subscribe(&self, on_scroll: Rc<dyn Fn()>) -> Unsubscribe {
            let id = self.next_id.get();
            self.next_id.set(id + 1);
            self.handlers.borrow_mut().push((id, on_scroll));
            let handlers = Rc::clone(&self.handlers);
            Box::new(move || handlers.borrow_mut().retain(|(i, _)| *i != id))
        }
    }

    /// Document laid out top to bottom with absolute extents; the viewport
    /// position is shared so tests can "scroll".
    #[derive(Clone)]
    struct Page {
        layout: Vec<(SectionId, f64, f64)>,
        offset: Rc<Cell<f64>>,
        reads: Rc<Cell<usize>>,
    }

    impl Page {
        fn new(layout: Vec<(SectionId, f64, f64)>) -> Self {
            Self {
                layout,
                offset: Rc::new(Cell::new(0.0)),
                reads: Rc::new(Cell::new(0)),
            }
        }

        fn portfolio() -> Self {
            Self::new(vec![
                (SectionId::Home, 0.0, 800.0),
                (SectionId::Projects, 800.0, 1650.0),
                (SectionId::About, 1650.0, 2400.0),
                (SectionId::Contact, 2400.0, 3000.0),
            ])
        }

        fn scroll_to(&self, offset: f64) {
            self.offset.set(offset);
        }
    }

    impl SectionGeometry for Page {
        fn bounds(&self, id: SectionId) -> Option<SectionBounds> {
            self.reads.set(self.reads.get() + 1);
            let offset = self.offset.get();
            self.layout
                .iter()
                .find(|(section, _, _)| *section == id)
                .map(|(_, top, bottom)| SectionBounds::new(top - offset, bottom - offset))
        }
    }

    fn recorder() -> (Rc<RefCell<Vec<SectionId>>>, impl Fn(SectionId) + 'static) {
        let published = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&published);
        (published, move |id| sink.borrow_mut().push(id))
    }

    #[test]
    fn test_anchor_rule_scenario() {
        let page = Page::portfolio();
        let mut tracker = ScrollTracker::new(SectionRegistry::default());
        assert_eq!(tracker.active(), None);

        assert_eq!(tracker.recompute(&page), Some(SectionId::Home));

        // projects now spans 50..900 relative to the viewport
        page.scroll_to(750.0);
        assert_eq!(tracker.recompute(&page), Some(SectionId::Projects));

        page.scroll_to(1700.0);
        assert_eq!(tracker.recompute(&page), Some(SectionId::About));
    }

    #[test]
    fn test_recompute_is_idempotent() {
        let page = Page::portfolio();
        page.scroll_to(1000.0);
        let mut tracker = ScrollTracker::new(SectionRegistry::default());
        let first = tracker.recompute(&page);
        let second = tracker.recompute(&page);
        assert_eq!(first, Some(SectionId::Projects));
        assert_eq!(first, second);
    }

    #[test]
    fn test_earlier_section_wins_tie() {
        let overlapping = |id: SectionId| match id {
            SectionId::Home => Some(SectionBounds::new(0.0, 200.0)),
            SectionId::Projects => Some(SectionBounds::new(100.0, 500.0)),
            _ => None,
        };
        let mut tracker = ScrollTracker::new(SectionRegistry::default());
        assert_eq!(tracker.recompute(&overlapping), Some(SectionId::Home));

        let reversed =
            SectionRegistry::new(vec![SectionId::Projects, SectionId::Home]).unwrap();
        let mut tracker = ScrollTracker::new(reversed);
        assert_eq!(tracker.recompute(&overlapping), Some(SectionId::Projects));
    }

    #[test]
    fn test_missing_sections_are_skipped() {
        let sparse = |id: SectionId| match id {
            SectionId::About => Some(SectionBounds::new(-40.0, 600.0)),
            _ => None,
        };
        let mut tracker = ScrollTracker::new(SectionRegistry::default());
        assert_eq!(tracker.recompute(&sparse), Some(SectionId::About));
    }

    #[test]
    fn test_no_match_keeps_previous_value() {
        let page = Page::portfolio();
        let mut tracker = ScrollTracker::new(SectionRegistry::default());
        page.scroll_to(2500.0);
        assert_eq!(tracker.recompute(&page), Some(SectionId::Contact));

        // contact's bottom is above the anchor line; nothing qualifies
        page.scroll_to(2950.0);
        assert_eq!(tracker.locate(&page), None);
        assert_eq!(tracker.recompute(&page), Some(SectionId::Contact));

        let empty = |_: SectionId| -> Option<SectionBounds> { None };
        let mut fresh = ScrollTracker::new(SectionRegistry::default());
        assert_eq!(fresh.recompute(&empty), None);
    }

    #[test]
    fn test_custom_anchor() {
        let page = Page::portfolio();
        page.scroll_to(750.0);
        let mut tracker = ScrollTracker::with_anchor(SectionRegistry::default(), 20.0);
        assert_eq!(tracker.recompute(&page), Some(SectionId::Home));
    }

    #[test]
    fn test_mount_measures_immediately() {
        let source = FakeScroll::default();
        let page = Page::portfolio();
        let (published, publish) = recorder();

        let spy = ScrollSpy::mount(
            &source,
            ScrollTracker::new(SectionRegistry::default()),
            page.clone(),
            publish,
        );

        assert_eq!(spy.active(), Some(SectionId::Home));
        assert_eq!(*published.borrow(), vec![SectionId::Home]);
        assert_eq!(source.listener_count(), 1);
    }

    #[test]
    fn test_scroll_events_update_active_section() {
        let source = FakeScroll::default();
        let page = Page::portfolio();
        let (published, publish) = recorder();
        let spy = ScrollSpy::mount(
            &source,
            ScrollTracker::new(SectionRegistry::default()),
            page.clone(),
            publish,
        );

        page.scroll_to(750.0);
        source.fire();
        assert_eq!(spy.active(), Some(SectionId::Projects));

        // coalesced events: jump straight past about into contact
        page.scroll_to(2500.0);
        source.fire();
        assert_eq!(spy.active(), Some(SectionId::Contact));

        assert_eq!(
            *published.borrow(),
            vec![SectionId::Home, SectionId::Projects, SectionId::Contact]
        );
    }

    #[test]
    fn test_unmount_removes_listener() {
        let source = FakeScroll::default();
        let page = Page::portfolio();
        let (published, publish) = recorder();
        let spy = ScrollSpy::mount(
            &source,
            ScrollTracker::new(SectionRegistry::default()),
            page.clone(),
            publish,
        );
        assert_eq!(source.listener_count(), 1);

        spy.unmount();
        assert_eq!(source.listener_count(), 0);

        let reads = page.reads.get();
        page.scroll_to(750.0);
        source.fire();
        assert_eq!(page.reads.get(), reads);
        assert_eq!(*published.borrow(), vec![SectionId::Home]);
    }

    #[test]
    fn test_drop_removes_listener() {
        let source = FakeScroll::default();
        {
            let _spy = ScrollSpy::mount(
                &source,
                ScrollTracker::new(SectionRegistry::default()),
                Page::portfolio(),
                |_| {},
            );
            assert_eq!(source.listener_count(), 1);
        }
        assert_eq!(source.listener_count(), 0);
    }
}

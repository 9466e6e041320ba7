use leptos::{html, prelude::*};
use leptos_use::{use_element_visibility, use_window_scroll};

use crate::{
    parallax::ParallaxValue,
    section::{SectionId, SectionRegistry},
};
#[cfg(feature = "hydrate")]
use crate::{
    dom::{DocumentGeometry, WindowScroll},
    scroll::{ScrollSource, ScrollSpy, ScrollTracker},
    section::SectionGeometry,
};

/// Section currently under the anchor line, for as long as the calling
/// component is mounted.
///
/// The spy is mounted once the page is interactive and released in the
/// owner's cleanup, so no scroll handler outlives the page view.
pub fn use_active_section(registry: SectionRegistry) -> ReadSignal<Option<SectionId>> {
    let (active, set_active) = signal(None::<SectionId>);

    #[cfg(feature = "hydrate")]
    Effect::new(move |_| {
        attach_scroll_spy(
            &WindowScroll,
            registry.clone(),
            DocumentGeometry,
            active,
            set_active,
        )
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = (registry, set_active);

    active
}

/// Mounts a [`ScrollSpy`] that writes into `active` and ties its release to
/// the current owner's cleanup.
#[cfg(feature = "hydrate")]
fn attach_scroll_spy<S, G>(
    source: &S,
    registry: SectionRegistry,
    geometry: G,
    active: ReadSignal<Option<SectionId>>,
    set_active: WriteSignal<Option<SectionId>>,
) where
    S: ScrollSource + ?Sized,
    G: SectionGeometry + 'static,
{
    let spy = ScrollSpy::mount(source, ScrollTracker::new(registry), geometry, move |id| {
        if active.get_untracked() != Some(id) {
            set_active.set(Some(id));
        }
    });
    let spy = StoredValue::new_local(Some(spy));
    on_cleanup(move || {
        spy.update_value(|spy| {
            spy.take();
        })
    });
}

/// Hero fade and drift derived from the window's vertical scroll offset.
pub fn use_hero_parallax() -> Memo<ParallaxValue> {
    let (_, scroll_y) = use_window_scroll();
    Memo::new(move |_| ParallaxValue::at(scroll_y.get()))
}

/// Latches to `true` the first time `target` becomes visible.
pub fn use_revealed(target: NodeRef<html::Div>) -> ReadSignal<bool> {
    let visible = use_element_visibility(target);
    let (revealed, set_revealed) = signal(false);
    Effect::new(move |_| {
        if visible.get() && !revealed.get_untracked() {
            set_revealed.set(true);
        }
    });
    revealed
}

#[cfg(all(test, target_arch = "wasm32", feature = "hydrate"))]
mod tests {
    use std::{cell::Cell, rc::Rc};

    use wasm_bindgen_test::*;

    use super::*;
    use crate::{dom::WindowScroll, section::SectionBounds};

    wasm_bindgen_test_configure!(run_in_browser);

    fn dispatch_scroll() {
        let event = web_sys::Event::new("scroll").expect("should be able to create event");
        web_sys::window()
            .expect("should have a window")
            .dispatch_event(&event)
            .expect("should be able to dispatch event");
    }

    #[wasm_bindgen_test]
    fn test_owner_cleanup_releases_scroll_listener() {
        let reads = Rc::new(Cell::new(0usize));
        let geometry = {
            let reads = Rc::clone(&reads);
            move |id: SectionId| {
                reads.set(reads.get() + 1);
                (id == SectionId::Home).then(|| SectionBounds::new(0.0, 800.0))
            }
        };

        let owner = Owner::new();
        let active = owner.with(|| {
            let (active, set_active) = signal(None::<SectionId>);
            attach_scroll_spy(
                &WindowScroll,
                SectionRegistry::default(),
                geometry,
                active,
                set_active,
            );
            active
        });

        // measured at mount, before any scroll
        assert_eq!(active.get_untracked(), Some(SectionId::Home));
        let after_mount = reads.get();
        assert!(after_mount > 0);

        dispatch_scroll();
        let after_scroll = reads.get();
        assert!(after_scroll > after_mount);

        owner.cleanup();
        dispatch_scroll();
        assert_eq!(reads.get(), after_scroll);
    }
}

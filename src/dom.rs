//! Browser side of the page: section geometry, the window scroll source and
//! imperative navigation. Everything here is a no-op when rendering on the
//! server.

#[cfg(feature = "hydrate")]
use std::rc::Rc;

#[cfg(feature = "hydrate")]
use wasm_bindgen::{closure::Closure, JsCast};
#[cfg(feature = "hydrate")]
use web_sys::{AddEventListenerOptions, ScrollBehavior, ScrollIntoViewOptions};

#[cfg(feature = "hydrate")]
use crate::{
    links::{EXTERNAL_FEATURES, EXTERNAL_TARGET},
    scroll::{ScrollSource, Unsubscribe},
    section::{SectionBounds, SectionGeometry},
};
use crate::section::SectionId;

/// Reads section extents from `getBoundingClientRect` of the element whose
/// `id` matches the section.
#[cfg(feature = "hydrate")]
pub struct DocumentGeometry;

#[cfg(feature = "hydrate")]
impl SectionGeometry for DocumentGeometry {
    fn bounds(&self, id: SectionId) -> Option<SectionBounds> {
        let el = web_sys::window()?
            .document()?
            .get_element_by_id(id.as_str())?;
        let rect = el.get_bounding_client_rect();
        Some(SectionBounds::new(rect.top(), rect.bottom()))
    }
}

/// `scroll` events on `window`, registered passive.
#[cfg(feature = "hydrate")]
pub struct WindowScroll;

#[cfg(feature = "hydrate")]
impl ScrollSource for WindowScroll {
    fn subscribe(&self, on_scroll: Rc<dyn Fn()>) -> Unsubscribe {
        let window = if let Some(window) = web_sys::window() {
            window
        } else {
            log::warn!("no window, scroll tracking disabled");
            return Box::new(|| {});
        };

        let handler = Closure::<dyn Fn()>::new(move || on_scroll());
        let options = AddEventListenerOptions::new();
        options.set_passive(true);
        if let Err(err) = window.add_event_listener_with_callback_and_add_event_listener_options(
            "scroll",
            handler.as_ref().unchecked_ref(),
            &options,
        ) {
            log::error!("couldn't register scroll listener: {err:?}");
            return Box::new(|| {});
        }

        // the closure must outlive its registration, so the handle owns it
        Box::new(move || {
            if let Err(err) = window
                .remove_event_listener_with_callback("scroll", handler.as_ref().unchecked_ref())
            {
                log::error!("couldn't remove scroll listener: {err:?}");
            }
        })
    }
}

/// Smooth-scrolls the section's element to the top of the viewport.
pub fn scroll_to_section(id: SectionId) {
    #[cfg(feature = "hydrate")]
    {
        let el = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(id.as_str()));
        if let Some(el) = el {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            el.scroll_into_view_with_scroll_into_view_options(&options);
        } else {
            log::warn!("no element for section {id}");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = id;
}

/// Opens `url` in a new browsing context without a back-reference.
pub fn open_external(url: &str) {
    #[cfg(feature = "hydrate")]
    {
        let res = web_sys::window().map(|w| {
            w.open_with_url_and_target_and_features(url, EXTERNAL_TARGET, EXTERNAL_FEATURES)
        });
        if let Some(Err(err)) = res {
            log::error!("couldn't open {url}: {err:?}");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = url;
}

/// Navigates the current context, used for `mailto:` links.
pub fn navigate_to(href: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(Err(err)) = web_sys::window().map(|w| w.location().set_href(href)) {
            log::error!("couldn't navigate to {href}: {err:?}");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = href;
}

//! Scroll and pointer driven page effects.
//!
//! The math lives in plain functions so it can be checked without a browser;
//! the hooks below only read the DOM and feed those functions.

use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::{Array, Function, Reflect};
use web_sys::{
    window, Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, ScrollBehavior, ScrollToOptions,
};
use yew::prelude::*;

use crate::config;

#[derive(Clone, Debug, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

/// Section whose band `[top - 100, top - 100 + height)` contains `scroll_y`.
/// Later sections win when bands overlap.
pub fn active_section(scroll_y: f64, sections: &[SectionBounds]) -> Option<&str> {
    sections
        .iter()
        .filter(|s| {
            let top = s.top - config::ACTIVE_SECTION_OFFSET;
            scroll_y >= top && scroll_y < top + s.height
        })
        .last()
        .map(|s| s.id.as_str())
}

pub fn parallax_transform(scrolled: f64, index: usize) -> String {
    let i = index as f64;
    let speed = (i + 1.0) * 0.1;
    let y = scrolled * -0.5 * speed;
    let x = (scrolled * 0.001 + i).sin() * 10.0;
    format!("translate({}px, {}px) rotate({}deg)", x, y, scrolled * 0.1)
}

/// Resting orientation of a phone mockup.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pose {
    Hero,
    Showcase,
}

impl Pose {
    fn base(self) -> (f64, f64) {
        match self {
            Pose::Hero => (-15.0, 5.0),
            Pose::Showcase => (15.0, -5.0),
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            Pose::Hero => "phone-mockup",
            Pose::Showcase => "showcase-phone",
        }
    }

    pub fn rest_transform(self) -> String {
        let (y, x) = self.base();
        format!("perspective(1000px) rotateY({}deg) rotateX({}deg)", y, x)
    }

    /// Tilt toward the pointer. `rect` is `(left, top, width, height)`.
    pub fn tilt_transform(self, client_x: f64, client_y: f64, rect: (f64, f64, f64, f64)) -> String {
        let (left, top, width, height) = rect;
        let (base_y, base_x) = self.base();
        if width <= 0.0 || height <= 0.0 {
            return self.rest_transform();
        }
        let mouse_x = client_x - (left + width / 2.0);
        let mouse_y = client_y - (top + height / 2.0);
        let rotate_x = (mouse_y / height) * 20.0;
        let rotate_y = (mouse_x / width) * 20.0;
        format!(
            "perspective(1000px) rotateY({}deg) rotateX({}deg) translateY(-10px)",
            base_y + rotate_y,
            base_x - rotate_x
        )
    }
}

pub fn scroll_to_section(id: &str) {
    let Some(window) = window() else { return };
    let target = window
        .document()
        .and_then(|doc| doc.get_element_by_id(id))
        .and_then(|el| el.dyn_into::<HtmlElement>().ok());
    match target {
        Some(section) => {
            let options = ScrollToOptions::new();
            options.set_top(f64::from(section.offset_top()) - config::NAV_SCROLL_OFFSET);
            options.set_behavior(ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        }
        None => debug!("No section #{} to scroll to", id),
    }
}

fn section_bounds() -> Vec<SectionBounds> {
    let Some(doc) = window().and_then(|w| w.document()) else {
        return Vec::new();
    };
    let Ok(list) = doc.query_selector_all("section") else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .map(|el| SectionBounds {
            id: el.id(),
            top: f64::from(el.offset_top()),
            height: f64::from(el.client_height()),
        })
        .collect()
}

/// Id of the section currently under the navbar, recomputed on every scroll.
#[hook]
pub fn use_active_section(scroll_y: f64) -> Option<String> {
    let active = use_state(|| None::<String>);
    {
        let active = active.clone();
        use_effect_with_deps(
            move |_| {
                let sections = section_bounds();
                let current = active_section(scroll_y, &sections).map(str::to_string);
                if *active != current {
                    active.set(current);
                }
                || ()
            },
            scroll_y.to_bits(),
        );
    }
    (*active).clone()
}

fn observe_all(observer: &IntersectionObserver, selector: &str) {
    let Some(doc) = window().and_then(|w| w.document()) else { return };
    let Ok(list) = doc.query_selector_all(selector) else { return };
    for el in (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
    {
        observer.observe(&el);
    }
}

fn reveal_observer(
    class: &'static str,
    root_margin: &str,
) -> Option<(IntersectionObserver, Closure<dyn FnMut(Array, IntersectionObserver)>)> {
    let callback = Closure::wrap(Box::new(move |entries: Array, _observer: IntersectionObserver| {
        for entry in entries.iter() {
            let entry: IntersectionObserverEntry = entry.unchecked_into();
            if entry.is_intersecting() {
                if let Err(e) = entry.target().class_list().add_1(class) {
                    warn!("Could not add class {}: {:?}", class, e);
                }
            }
        }
    }) as Box<dyn FnMut(Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(0.1));
    options.set_root_margin(root_margin);

    match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
        Ok(observer) => Some((observer, callback)),
        Err(e) => {
            warn!("IntersectionObserver unavailable: {:?}", e);
            None
        }
    }
}

/// Adds `section-visible` to sections and `visible` to `.fade-in` elements
/// the first time they scroll into view.
#[hook]
pub fn use_reveal_on_scroll() {
    use_effect_with_deps(
        move |_| {
            let sections = reveal_observer("section-visible", "0px 0px -100px 0px");
            let fades = reveal_observer("visible", "0px 0px -50px 0px");
            if let Some((observer, _)) = &sections {
                observe_all(observer, "section");
            }
            if let Some((observer, _)) = &fades {
                observe_all(observer, ".fade-in");
            }

            move || {
                for (observer, callback) in [sections, fades].into_iter().flatten() {
                    observer.disconnect();
                    drop(callback);
                }
            }
        },
        (),
    );
}

/// Starts the animate-on-scroll library if the page loaded it.
pub fn init_scroll_animations() {
    let Some(window) = window() else { return };
    let aos = match Reflect::get(&window, &JsValue::from_str("AOS")) {
        Ok(aos) if aos.is_object() => aos,
        _ => {
            debug!("AOS not present, skipping");
            return;
        }
    };
    let Some(init) = Reflect::get(&aos, &JsValue::from_str("init"))
        .ok()
        .and_then(|f| f.dyn_into::<Function>().ok())
    else {
        warn!("AOS present without an init function");
        return;
    };
    match serde_wasm_bindgen::to_value(&config::aos_options()) {
        Ok(options) => {
            if let Err(e) = init.call1(&aos, &options) {
                warn!("AOS.init failed: {:?}", e);
            }
        }
        Err(e) => warn!("Could not encode AOS options: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section(id: &str, top: f64, height: f64) -> SectionBounds {
        SectionBounds {
            id: id.to_string(),
            top,
            height,
        }
    }

    #[test]
    fn active_section_uses_offset_band() {
        let sections = vec![
            section("home", 0.0, 800.0),
            section("features", 800.0, 600.0),
            section("contact", 1400.0, 500.0),
        ];
        assert_eq!(active_section(0.0, &sections), Some("home"));
        assert_eq!(active_section(699.0, &sections), Some("home"));
        assert_eq!(active_section(700.0, &sections), Some("features"));
        assert_eq!(active_section(1300.0, &sections), Some("contact"));
        assert_eq!(active_section(1800.0, &sections), None);
        assert_eq!(active_section(0.0, &[]), None);
    }

    #[test]
    fn parallax_at_rest_and_scrolled() {
        assert!(parallax_transform(0.0, 0).ends_with("rotate(0deg)"));
        let t = parallax_transform(100.0, 1);
        // speed 0.2, rate -50
        assert!(t.contains(", -10px)"), "{t}");
        assert!(t.ends_with("rotate(10deg)"), "{t}");
    }

    #[test]
    fn tilt_follows_pointer_around_base_pose() {
        let rect = (0.0, 0.0, 200.0, 400.0);
        assert_eq!(
            Pose::Hero.tilt_transform(100.0, 200.0, rect),
            "perspective(1000px) rotateY(-15deg) rotateX(5deg) translateY(-10px)"
        );
        assert_eq!(
            Pose::Hero.tilt_transform(200.0, 400.0, rect),
            "perspective(1000px) rotateY(-5deg) rotateX(-5deg) translateY(-10px)"
        );
        assert_eq!(
            Pose::Showcase.tilt_transform(0.0, 0.0, rect),
            "perspective(1000px) rotateY(5deg) rotateX(5deg) translateY(-10px)"
        );
        assert_eq!(
            Pose::Showcase.tilt_transform(5.0, 5.0, (0.0, 0.0, 0.0, 0.0)),
            Pose::Showcase.rest_transform()
        );
    }

    #[test]
    fn rest_poses() {
        assert_eq!(Pose::Hero.rest_transform(), "perspective(1000px) rotateY(-15deg) rotateX(5deg)");
        assert_eq!(Pose::Showcase.rest_transform(), "perspective(1000px) rotateY(15deg) rotateX(-5deg)");
    }

    #[test]
    fn aos_options_match_page_defaults() {
        let opts = config::aos_options();
        assert_eq!((opts.duration, opts.once, opts.offset), (1_000, true, 100));
    }
}

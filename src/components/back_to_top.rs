use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    AddEventListenerOptions, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, Window,
};
use yew::prelude::*;

use crate::config;
use crate::utils::prefers_reduced_motion;

// Slow start, fast finish.
fn ease_in_quad(p: f64) -> f64 {
    p * p
}

// Position for an eased frame at progress p of the climb from start_y.
fn eased_scroll_y(start_y: f64, p: f64) -> f64 {
    (start_y - start_y * ease_in_quad(p)).max(0.0)
}

fn current_scroll_y(window: &Window) -> f64 {
    window
        .scroll_y()
        .ok()
        .filter(|y| *y > 0.0)
        .or_else(|| {
            window
                .document()
                .and_then(|d| d.document_element())
                .map(|root| f64::from(root.scroll_top()))
        })
        .unwrap_or(0.0)
}

// The in-flight eased scroll, if any. A new click cancels the previous
// animation before starting over, and unmount cancels whatever is pending.
#[derive(Default)]
struct EasedScroll {
    frame_id: Option<i32>,
    step: Option<Closure<dyn FnMut(f64)>>,
}

impl EasedScroll {
    fn cancel(&mut self) {
        if let Some(id) = self.frame_id.take() {
            if let Some(window) = web_sys::window() {
                let _ = window.cancel_animation_frame(id);
            }
        }
        self.step = None;
    }
}

fn start_eased_scroll(slot: &Rc<RefCell<EasedScroll>>) {
    let Some(window) = web_sys::window() else {
        return;
    };
    slot.borrow_mut().cancel();

    let start_y = current_scroll_y(&window);
    let start_time: Rc<Cell<Option<f64>>> = Rc::new(Cell::new(None));
    let step = {
        let slot = slot.clone();
        let win = window.clone();
        Closure::wrap(Box::new(move |timestamp: f64| {
            let started = start_time.get().unwrap_or(timestamp);
            start_time.set(Some(started));
            let p = ((timestamp - started) / config::SCROLL_TO_TOP_MS).min(1.0);
            win.scroll_to_with_x_and_y(0.0, eased_scroll_y(start_y, p));
            let pending = &mut *slot.borrow_mut();
            if p < 1.0 {
                if let Some(step) = pending.step.as_ref() {
                    pending.frame_id = win
                        .request_animation_frame(step.as_ref().unchecked_ref())
                        .ok();
                }
            } else {
                // Leave the closure allocated; it is still on the stack.
                pending.frame_id = None;
            }
        }) as Box<dyn FnMut(f64)>)
    };

    let pending = &mut *slot.borrow_mut();
    pending.frame_id = window
        .request_animation_frame(step.as_ref().unchecked_ref())
        .ok();
    pending.step = Some(step);
}

type ObserverCallback = Closure<dyn FnMut(Vec<IntersectionObserverEntry>)>;

// Visibility source: an observer on the why-section anchor when the
// environment supports one, a plain scroll threshold otherwise.
enum VisibilityWatcher {
    Observed {
        observer: IntersectionObserver,
        _callback: ObserverCallback,
    },
    Scrolled {
        on_scroll: Closure<dyn FnMut()>,
    },
}

impl VisibilityWatcher {
    fn mount(visible: UseStateSetter<bool>) -> Option<Self> {
        let window = web_sys::window()?;
        let document = window.document()?;

        if let Some(anchor) = document.get_element_by_id(config::BACK_TO_TOP_ANCHOR_ID) {
            let callback: ObserverCallback = {
                let visible = visible.clone();
                Closure::wrap(Box::new(move |entries: Vec<IntersectionObserverEntry>| {
                    for entry in entries {
                        visible.set(entry.is_intersecting());
                    }
                }) as Box<dyn FnMut(Vec<IntersectionObserverEntry>)>)
            };
            let options = IntersectionObserverInit::new();
            options.set_threshold(&JsValue::from(0.08));
            // Constructing throws where IntersectionObserver is missing,
            // which drops us into the scroll fallback below.
            if let Ok(observer) = IntersectionObserver::new_with_options(
                callback.as_ref().unchecked_ref(),
                &options,
            ) {
                observer.observe(&anchor);
                return Some(Self::Observed {
                    observer,
                    _callback: callback,
                });
            }
        }

        let check = {
            let win = window.clone();
            move || {
                visible.set(win.scroll_y().unwrap_or(0.0) > config::BACK_TO_TOP_FALLBACK_PX);
            }
        };
        check();
        let on_scroll = Closure::wrap(Box::new(check) as Box<dyn FnMut()>);
        let options = AddEventListenerOptions::new();
        options.set_passive(true);
        let _ = window.add_event_listener_with_callback_and_add_event_listener_options(
            "scroll",
            on_scroll.as_ref().unchecked_ref(),
            &options,
        );
        Some(Self::Scrolled { on_scroll })
    }

    fn teardown(self) {
        match self {
            Self::Observed { observer, .. } => observer.disconnect(),
            Self::Scrolled { on_scroll } => {
                if let Some(window) = web_sys::window() {
                    let _ = window.remove_event_listener_with_callback(
                        "scroll",
                        on_scroll.as_ref().unchecked_ref(),
                    );
                }
            }
        }
    }
}

#[function_component(BackToTop)]
pub fn back_to_top() -> Html {
    let visible = use_state_eq(|| false);
    let reduced = use_state(prefers_reduced_motion);
    let in_flight = use_mut_ref(EasedScroll::default);

    {
        let visible = visible.setter();
        use_effect_with_deps(
            move |_| {
                let watcher = VisibilityWatcher::mount(visible);
                move || {
                    if let Some(watcher) = watcher {
                        watcher.teardown();
                    }
                }
            },
            (),
        );
    }

    {
        let in_flight = in_flight.clone();
        use_effect_with_deps(move |_| move || in_flight.borrow_mut().cancel(), ());
    }

    let onclick = {
        let reduced = *reduced;
        let in_flight = in_flight.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            if reduced {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
            } else {
                start_eased_scroll(&in_flight);
            }
        })
    };

    html! {
        <button
            id="backToTop"
            class={classes!("back-to-top", (*visible).then(|| "visible"))}
            onclick={onclick}
            aria-label="Back to top"
            title="Back to top"
        >
            {"↑"}
            <style>
                {r#"
                .back-to-top {
                    position: fixed;
                    right: 1.25rem;
                    bottom: 1.25rem;
                    width: 2.75rem;
                    height: 2.75rem;
                    border-radius: 50%;
                    border: 1px solid var(--line);
                    background: var(--surface);
                    color: var(--ink);
                    font-size: 1.2rem;
                    cursor: pointer;
                    opacity: 0;
                    pointer-events: none;
                    transform: translateY(8px);
                    transition: opacity 0.25s ease, transform 0.25s ease;
                    z-index: 90;
                }
                .back-to-top.visible {
                    opacity: 1;
                    pointer-events: auto;
                    transform: translateY(0);
                }
                .back-to-top:hover {
                    border-color: var(--accent);
                    color: var(--accent);
                }
                "#}
            </style>
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn easing_starts_slow_and_ends_fast() {
        assert_eq!(ease_in_quad(0.0), 0.0);
        assert_eq!(ease_in_quad(1.0), 1.0);
        assert!(ease_in_quad(0.25) < 0.25);
        assert!(ease_in_quad(0.5) - ease_in_quad(0.25) < ease_in_quad(1.0) - ease_in_quad(0.75));
    }

    #[test]
    fn eased_position_covers_the_whole_climb() {
        assert_eq!(eased_scroll_y(800.0, 0.0), 800.0);
        assert_eq!(eased_scroll_y(800.0, 0.5), 600.0);
        assert_eq!(eased_scroll_y(800.0, 1.0), 0.0);
    }

    #[test]
    fn eased_position_never_goes_negative() {
        // rounding at full progress must not overshoot past the top
        assert_eq!(eased_scroll_y(0.0, 1.0), 0.0);
        assert!(eased_scroll_y(123.4, 1.0) >= 0.0);
    }
}

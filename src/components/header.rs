use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{AddEventListenerOptions, KeyboardEvent, MediaQueryList, MediaQueryListEvent};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::theme::ThemeToggle;
use crate::config;
use crate::Route;

// One processed scroll frame. The menu being open pins the header visible;
// otherwise scrolling down past the floor hides it and scrolling up (or
// being near the top) shows it. Deltas under the jitter threshold change
// nothing.
fn hidden_after_scroll(last_y: f64, y: f64, was_hidden: bool, nav_open: bool) -> bool {
    if nav_open {
        return false;
    }
    let down = y > last_y + config::SCROLL_JITTER_PX;
    let up = y < last_y - config::SCROLL_JITTER_PX;
    if down && y > config::HEADER_HIDE_FLOOR_PX {
        true
    } else if up || y < config::NEAR_TOP_PX {
        false
    } else {
        was_hidden
    }
}

fn body_nav_open() -> bool {
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
        .map(|body| body.class_list().contains("nav-open"))
        .unwrap_or(false)
}

// Window, document and media-query subscriptions behind the header,
// removed together on unmount.
struct HeaderListeners {
    on_scroll: Closure<dyn FnMut()>,
    process: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
    on_keydown: Closure<dyn FnMut(KeyboardEvent)>,
    media: Option<(MediaQueryList, Closure<dyn FnMut(MediaQueryListEvent)>)>,
}

impl HeaderListeners {
    fn mount(hidden: UseStateSetter<bool>, menu_open: UseStateSetter<bool>) -> Option<Self> {
        let window = web_sys::window()?;
        let document = window.document()?;

        // Scroll work is coalesced through requestAnimationFrame: the raw
        // listener only arms one frame, the frame does the classification.
        let last_y = Rc::new(Cell::new(window.scroll_y().unwrap_or(0.0)));
        let was_hidden = Rc::new(Cell::new(false));
        let ticking = Rc::new(Cell::new(false));

        let process: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
        {
            let win = window.clone();
            let ticking = ticking.clone();
            *process.borrow_mut() = Some(Closure::wrap(Box::new(move || {
                let y = win.scroll_y().unwrap_or(0.0);
                let next = hidden_after_scroll(last_y.get(), y, was_hidden.get(), body_nav_open());
                was_hidden.set(next);
                hidden.set(next);
                last_y.set(y);
                ticking.set(false);
            }) as Box<dyn FnMut()>));
        }

        let on_scroll = {
            let win = window.clone();
            let process = process.clone();
            Closure::wrap(Box::new(move || {
                if !ticking.get() {
                    if let Some(frame) = process.borrow().as_ref() {
                        let _ = win.request_animation_frame(frame.as_ref().unchecked_ref());
                        ticking.set(true);
                    }
                }
            }) as Box<dyn FnMut()>)
        };
        let options = AddEventListenerOptions::new();
        options.set_passive(true);
        let _ = window.add_event_listener_with_callback_and_add_event_listener_options(
            "scroll",
            on_scroll.as_ref().unchecked_ref(),
            &options,
        );

        // Escape closes the mobile menu from anywhere on the page.
        let on_keydown = {
            let menu_open = menu_open.clone();
            Closure::wrap(Box::new(move |event: KeyboardEvent| {
                if event.key() == "Escape" {
                    menu_open.set(false);
                }
            }) as Box<dyn FnMut(KeyboardEvent)>)
        };
        let _ = document
            .add_event_listener_with_callback("keydown", on_keydown.as_ref().unchecked_ref());

        // Crossing into the desktop layout force-closes the menu so it
        // cannot linger open behind the horizontal nav.
        let media = window
            .match_media(config::DESKTOP_NAV_QUERY)
            .ok()
            .flatten()
            .and_then(|list| {
                let on_change = Closure::wrap(Box::new(move |event: MediaQueryListEvent| {
                    if event.matches() {
                        menu_open.set(false);
                    }
                })
                    as Box<dyn FnMut(MediaQueryListEvent)>);
                list.add_event_listener_with_callback(
                    "change",
                    on_change.as_ref().unchecked_ref(),
                )
                .ok()?;
                Some((list, on_change))
            });

        Some(Self {
            on_scroll,
            process,
            on_keydown,
            media,
        })
    }

    fn teardown(self) {
        if let Some(window) = web_sys::window() {
            let _ = window.remove_event_listener_with_callback(
                "scroll",
                self.on_scroll.as_ref().unchecked_ref(),
            );
            if let Some(document) = window.document() {
                let _ = document.remove_event_listener_with_callback(
                    "keydown",
                    self.on_keydown.as_ref().unchecked_ref(),
                );
            }
        }
        if let Some((list, on_change)) = self.media {
            let _ = list
                .remove_event_listener_with_callback("change", on_change.as_ref().unchecked_ref());
        }
        self.process.borrow_mut().take();
    }
}

#[function_component(Header)]
pub fn header() -> Html {
    let menu_open = use_state_eq(|| false);
    let hidden = use_state_eq(|| false);

    {
        let hidden = hidden.setter();
        let menu_open = menu_open.setter();
        use_effect_with_deps(
            move |_| {
                let listeners = HeaderListeners::mount(hidden, menu_open);
                move || {
                    if let Some(listeners) = listeners {
                        listeners.teardown();
                    }
                }
            },
            (),
        );
    }

    // The body class is the open state's source of truth for everything
    // outside this component (the scroll classifier reads it back).
    {
        let open = *menu_open;
        use_effect_with_deps(
            move |_| {
                if let Some(body) = web_sys::window()
                    .and_then(|w| w.document())
                    .and_then(|d| d.body())
                {
                    let _ = body.class_list().toggle_with_force("nav-open", open);
                }
                || ()
            },
            open,
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    html! {
        <header class={classes!("site", (*hidden).then(|| "nav-hidden"))}>
            <div class="header-inner">
                <Link<Route> to={Route::Home} classes="brand">
                    {"Brightwood Learning"}
                </Link<Route>>

                <button
                    class="nav-toggle"
                    onclick={toggle_menu}
                    aria-expanded={menu_open.to_string()}
                    aria-controls="primary-nav"
                    aria-label="Toggle navigation"
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>

                <nav id="primary-nav" data-open={menu_open.to_string()}>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Home} classes="nav-link">
                            {"Home"}
                        </Link<Route>>
                    </div>
                    <div onclick={close_menu}>
                        <Link<Route> to={Route::About} classes="nav-link">
                            {"About Us"}
                        </Link<Route>>
                    </div>
                    <ThemeToggle />
                </nav>
            </div>
            <style>
                {r#"
                header.site {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 100;
                    background: var(--surface);
                    border-bottom: 1px solid var(--line);
                    transition: transform 0.3s ease;
                }
                header.site.nav-hidden {
                    transform: translateY(-100%);
                }
                .header-inner {
                    max-width: 1100px;
                    margin: 0 auto;
                    padding: 0.85rem 1.25rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    gap: 1rem;
                }
                .brand {
                    font-weight: 700;
                    font-size: 1.1rem;
                    color: var(--ink);
                    text-decoration: none;
                    letter-spacing: 0.02em;
                }
                #primary-nav {
                    display: flex;
                    align-items: center;
                    gap: 1.25rem;
                }
                .nav-link {
                    color: var(--ink-soft);
                    text-decoration: none;
                    font-size: 0.95rem;
                }
                .nav-link:hover {
                    color: var(--accent);
                }
                .theme-toggle {
                    background: none;
                    border: 1px solid var(--line);
                    border-radius: 50%;
                    width: 2rem;
                    height: 2rem;
                    color: var(--ink);
                    cursor: pointer;
                    font-size: 0.9rem;
                    line-height: 1;
                }
                .nav-toggle {
                    display: none;
                    flex-direction: column;
                    gap: 5px;
                    background: none;
                    border: none;
                    padding: 0.4rem;
                    cursor: pointer;
                }
                .nav-toggle span {
                    width: 22px;
                    height: 2px;
                    background: var(--ink);
                    transition: transform 0.2s ease;
                }
                @media (max-width: 819px) {
                    .nav-toggle {
                        display: flex;
                    }
                    #primary-nav {
                        position: absolute;
                        top: 100%;
                        left: 0;
                        right: 0;
                        flex-direction: column;
                        align-items: flex-start;
                        padding: 1rem 1.25rem 1.5rem;
                        background: var(--surface);
                        border-bottom: 1px solid var(--line);
                        display: none;
                    }
                    #primary-nav[data-open="true"] {
                        display: flex;
                    }
                }
                "#}
            </style>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::hidden_after_scroll;

    #[test]
    fn scrolling_down_past_the_floor_hides() {
        assert!(hidden_after_scroll(200.0, 250.0, false, false));
    }

    #[test]
    fn scrolling_down_above_the_floor_keeps_it_shown() {
        assert!(!hidden_after_scroll(20.0, 80.0, false, false));
    }

    #[test]
    fn scrolling_up_shows_again() {
        assert!(!hidden_after_scroll(500.0, 400.0, true, false));
    }

    #[test]
    fn jitter_changes_nothing() {
        // 8 px either way is under the 10 px threshold
        assert!(hidden_after_scroll(400.0, 408.0, true, false));
        assert!(hidden_after_scroll(400.0, 392.0, true, false));
        assert!(!hidden_after_scroll(400.0, 408.0, false, false));
    }

    #[test]
    fn near_the_top_always_shows() {
        assert!(!hidden_after_scroll(55.0, 40.0, true, false));
    }

    #[test]
    fn open_menu_pins_the_header() {
        assert!(!hidden_after_scroll(200.0, 600.0, true, true));
    }
}

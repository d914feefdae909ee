use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, MouseEvent};
use yew::prelude::*;

use crate::config;
use crate::utils::prefers_reduced_motion;

#[derive(Clone, PartialEq)]
pub struct TeamMember {
    pub name: AttrValue,
    pub role: AttrValue,
    pub photo: AttrValue,
}

// Scroll state for one strip. Everything lives behind a single
// Rc<RefCell<..>> owned by the component instance, so two marquees on one
// page would never share state.
pub struct Motion {
    offset: f64,
    half_width: f64,
    speed: f64,
    paused: bool,
}

impl Motion {
    pub fn new(speed: f64) -> Self {
        Self {
            offset: 0.0,
            half_width: 0.0,
            speed,
            paused: false,
        }
    }

    // One frame. Returns the offset to apply, or None while paused.
    pub fn advance(&mut self) -> Option<f64> {
        if self.paused {
            return None;
        }
        self.offset += self.speed;
        // Hard reset at the wrap point. The second copy of the items sits
        // exactly where the first started, so the jump is invisible.
        if self.offset <= -self.half_width {
            self.offset = 0.0;
        }
        Some(self.offset)
    }

    // Record a fresh measurement and keep the offset inside
    // [-half_width, 0] so a mid-scroll resize never lands past the wrap.
    pub fn set_half_width(&mut self, half_width: f64) {
        self.half_width = half_width;
        if self.offset < -self.half_width {
            self.offset = -self.half_width;
        }
        if self.offset > 0.0 {
            self.offset = 0.0;
        }
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }
}

// Owns every imperative handle behind the strip: the resize listener, the
// frame closure and the id of the pending frame. Released together in
// teardown when the component unmounts.
struct StripController {
    frame: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
    frame_id: Rc<Cell<Option<i32>>>,
    on_resize: Closure<dyn FnMut()>,
}

impl StripController {
    fn mount(track: HtmlElement, motion: Rc<RefCell<Motion>>, animate: bool) -> Option<Self> {
        let window = web_sys::window()?;

        // Measure now and again whenever the viewport changes; image
        // widths move with responsive breakpoints.
        let measure = {
            let motion = motion.clone();
            let track = track.clone();
            move || {
                let half_width = f64::from(track.scroll_width()) / 2.0;
                motion.borrow_mut().set_half_width(half_width);
            }
        };
        measure();
        let on_resize = Closure::wrap(Box::new(measure) as Box<dyn FnMut()>);
        let _ = window
            .add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref());

        let frame: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
        let frame_id: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));

        if animate {
            let next = frame.clone();
            let pending = frame_id.clone();
            let motion = motion.clone();
            let win = window.clone();
            *frame.borrow_mut() = Some(Closure::wrap(Box::new(move || {
                if let Some(offset) = motion.borrow_mut().advance() {
                    let _ = track
                        .style()
                        .set_property("transform", &format!("translateX({}px)", offset));
                }
                if let Some(tick) = next.borrow().as_ref() {
                    pending.set(win.request_animation_frame(tick.as_ref().unchecked_ref()).ok());
                }
            }) as Box<dyn FnMut()>));
            if let Some(tick) = frame.borrow().as_ref() {
                frame_id.set(window.request_animation_frame(tick.as_ref().unchecked_ref()).ok());
            }
        }

        Some(Self {
            frame,
            frame_id,
            on_resize,
        })
    }

    fn teardown(self) {
        if let Some(window) = web_sys::window() {
            if let Some(id) = self.frame_id.take() {
                let _ = window.cancel_animation_frame(id);
            }
            let _ = window.remove_event_listener_with_callback(
                "resize",
                self.on_resize.as_ref().unchecked_ref(),
            );
        }
        // Dropping the frame closure breaks its self-reference cycle.
        self.frame.borrow_mut().take();
    }
}

fn is_avatar_hit(target: Option<web_sys::EventTarget>) -> bool {
    target
        .and_then(|t| t.dyn_into::<Element>().ok())
        .map(|el| el.class_list().contains("avatar"))
        .unwrap_or(false)
}

fn avatar(member: &TeamMember) -> Html {
    html! {
        <img
            class="avatar"
            src={member.photo.clone()}
            alt={member.name.clone()}
            title={member.name.clone()}
            loading="lazy"
        />
    }
}

#[derive(Properties, PartialEq)]
pub struct TeamMarqueeProps {
    pub members: Vec<TeamMember>,
}

#[function_component(TeamMarquee)]
pub fn team_marquee(props: &TeamMarqueeProps) -> Html {
    let track_ref = use_node_ref();
    let motion = use_mut_ref(|| Motion::new(config::MARQUEE_SPEED));
    // Checked once at mount; the loop never starts under reduced motion
    // but the strip still lays out and stays clickable.
    let animate = use_state(|| !prefers_reduced_motion());

    {
        let track_ref = track_ref.clone();
        let motion = motion.clone();
        let animate = *animate;
        let has_members = !props.members.is_empty();
        use_effect_with_deps(
            move |_| {
                let controller = if has_members {
                    track_ref
                        .cast::<HtmlElement>()
                        .and_then(|track| StripController::mount(track, motion, animate))
                } else {
                    None
                };
                move || {
                    if let Some(controller) = controller {
                        controller.teardown();
                    }
                }
            },
            (),
        );
    }

    let pause = {
        let motion = motion.clone();
        Callback::from(move |_: MouseEvent| motion.borrow_mut().set_paused(true))
    };
    let resume = {
        let motion = motion.clone();
        Callback::from(move |_: MouseEvent| motion.borrow_mut().set_paused(false))
    };
    // One delegated handler on the track covers originals and clones alike.
    let visit_about = Callback::from(move |event: MouseEvent| {
        if is_avatar_hit(event.target()) {
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href("/about");
            }
        }
    });

    if props.members.is_empty() {
        return html! {};
    }

    html! {
        <div class="team-strip" onmouseenter={pause} onmouseleave={resume}>
            <div class="team-track" ref={track_ref} onclick={visit_about}>
                { for props.members.iter().map(avatar) }
                { for props.members.iter().map(avatar) }
            </div>
            <style>
                {r#"
                .team-strip {
                    overflow: hidden;
                    position: relative;
                    padding: 1.25rem 0;
                }
                .team-track {
                    display: inline-flex;
                    gap: 1.5rem;
                    will-change: transform;
                }
                .team-track img.avatar {
                    flex: none;
                    width: 84px;
                    height: 84px;
                    border-radius: 50%;
                    object-fit: cover;
                    border: 2px solid var(--line);
                    cursor: pointer;
                    transition: border-color 0.3s ease;
                }
                .team-track img.avatar:hover {
                    border-color: var(--accent);
                }
                @media (max-width: 600px) {
                    .team-track img.avatar {
                        width: 64px;
                        height: 64px;
                    }
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advances_by_speed_each_frame() {
        let mut motion = Motion::new(-0.5);
        motion.set_half_width(100.0);
        assert_eq!(motion.advance(), Some(-0.5));
        assert_eq!(motion.advance(), Some(-1.0));
        assert_eq!(motion.offset(), -1.0);
    }

    #[test]
    fn wraps_to_exactly_zero_on_reaching_the_threshold() {
        let mut motion = Motion::new(-0.5);
        motion.set_half_width(1.0);
        assert_eq!(motion.advance(), Some(-0.5));
        assert_eq!(motion.advance(), Some(0.0));
        assert_eq!(motion.offset(), 0.0);
    }

    #[test]
    fn wraps_to_exactly_zero_on_passing_the_threshold() {
        let mut motion = Motion::new(-0.75);
        motion.set_half_width(1.0);
        assert_eq!(motion.advance(), Some(-0.75));
        // -1.5 is past the wrap point: applied offset is a hard zero, no
        // leftover sub-pixel remainder carries over
        assert_eq!(motion.advance(), Some(0.0));
    }

    #[test]
    fn paused_freezes_the_offset() {
        let mut motion = Motion::new(-0.5);
        motion.set_half_width(100.0);
        motion.advance();
        motion.advance();
        motion.set_paused(true);
        assert_eq!(motion.advance(), None);
        assert_eq!(motion.advance(), None);
        assert_eq!(motion.advance(), None);
        assert_eq!(motion.offset(), -1.0);
        motion.set_paused(false);
        assert_eq!(motion.advance(), Some(-1.5));
    }

    #[test]
    fn stays_inside_wrap_bounds() {
        let mut motion = Motion::new(-0.35);
        motion.set_half_width(200.0);
        for _ in 0..10_000 {
            motion.advance();
            let offset = motion.offset();
            assert!(offset <= 0.0, "offset {} above zero", offset);
            assert!(offset >= -200.0, "offset {} past the wrap", offset);
        }
    }

    #[test]
    fn remeasure_clamps_a_stale_offset() {
        let mut motion = Motion::new(-50.0);
        motion.set_half_width(200.0);
        motion.advance();
        motion.advance();
        motion.advance();
        assert_eq!(motion.offset(), -150.0);
        // viewport shrank: -150 is past the new wrap point
        motion.set_half_width(100.0);
        assert_eq!(motion.offset(), -100.0);
    }

    #[test]
    fn remeasure_wider_keeps_the_offset() {
        let mut motion = Motion::new(-50.0);
        motion.set_half_width(200.0);
        motion.advance();
        motion.set_half_width(400.0);
        assert_eq!(motion.offset(), -50.0);
    }

    #[test]
    fn zero_width_track_never_drifts() {
        // images not yet sized: every advance wraps straight back to zero
        let mut motion = Motion::new(-0.35);
        assert_eq!(motion.advance(), Some(0.0));
        assert_eq!(motion.advance(), Some(0.0));
        assert_eq!(motion.offset(), 0.0);
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod dom_tests {
    use super::*;
    use gloo_timers::future::TimeoutFuture;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn host() -> Element {
        let document = web_sys::window().unwrap().document().unwrap();
        let host = document.create_element("div").unwrap();
        document.body().unwrap().append_child(&host).unwrap();
        host
    }

    fn members(n: usize) -> Vec<TeamMember> {
        (0..n)
            .map(|i| TeamMember {
                name: AttrValue::from(format!("Member {}", i)),
                role: AttrValue::from("Teacher"),
                photo: AttrValue::from(format!("/assets/team-{}.webp", i)),
            })
            .collect()
    }

    #[wasm_bindgen_test]
    async fn renders_originals_then_clones() {
        let host = host();
        yew::Renderer::<TeamMarquee>::with_root_and_props(
            host.clone(),
            TeamMarqueeProps {
                members: members(3),
            },
        )
        .render();
        TimeoutFuture::new(100).await;

        let avatars = host.query_selector_all("img.avatar").unwrap();
        assert_eq!(avatars.length(), 6);
        for i in 0..6 {
            let img: Element = avatars.get(i).unwrap().dyn_into().unwrap();
            assert_eq!(
                img.get_attribute("alt").unwrap(),
                format!("Member {}", i % 3)
            );
        }
        host.remove();
    }

    #[wasm_bindgen_test]
    async fn empty_member_list_builds_no_track() {
        let host = host();
        yew::Renderer::<TeamMarquee>::with_root_and_props(
            host.clone(),
            TeamMarqueeProps {
                members: Vec::new(),
            },
        )
        .render();
        TimeoutFuture::new(50).await;
        assert!(host.query_selector(".team-track").unwrap().is_none());
        host.remove();
    }

    #[wasm_bindgen_test]
    async fn static_mount_never_schedules_frames() {
        let host = host();
        host.set_inner_html("<div class=\"team-track\"></div>");
        let track: HtmlElement = host
            .query_selector(".team-track")
            .unwrap()
            .unwrap()
            .dyn_into()
            .unwrap();
        let motion = Rc::new(RefCell::new(Motion::new(config::MARQUEE_SPEED)));
        let controller = StripController::mount(track, motion.clone(), false).unwrap();
        motion.borrow_mut().set_half_width(400.0);
        TimeoutFuture::new(200).await;
        assert!(controller.frame_id.get().is_none());
        assert_eq!(motion.borrow().offset(), 0.0);
        controller.teardown();
        host.remove();
    }

    #[wasm_bindgen_test]
    async fn animated_mount_advances_and_teardown_stops_it() {
        let host = host();
        host.set_inner_html("<div class=\"team-track\"></div>");
        let track: HtmlElement = host
            .query_selector(".team-track")
            .unwrap()
            .unwrap()
            .dyn_into()
            .unwrap();
        let motion = Rc::new(RefCell::new(Motion::new(config::MARQUEE_SPEED)));
        let controller = StripController::mount(track, motion.clone(), true).unwrap();
        motion.borrow_mut().set_half_width(10_000.0);
        TimeoutFuture::new(200).await;
        let moved_to = motion.borrow().offset();
        assert!(moved_to < 0.0, "expected the strip to have moved");
        controller.teardown();
        TimeoutFuture::new(100).await;
        assert_eq!(motion.borrow().offset(), moved_to);
        host.remove();
    }

    #[wasm_bindgen_test]
    fn click_targets_only_avatars() {
        let document = web_sys::window().unwrap().document().unwrap();
        let img = document.create_element("img").unwrap();
        img.set_class_name("avatar");
        assert!(is_avatar_hit(Some(img.into())));
        let track = document.create_element("div").unwrap();
        track.set_class_name("team-track");
        assert!(!is_avatar_hit(Some(track.into())));
        assert!(!is_avatar_hit(None));
    }
}

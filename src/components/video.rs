use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::HtmlVideoElement;
use yew::prelude::*;

use crate::config;

// Keeps the rate listeners paired with the element they watch.
struct RateListeners {
    video: HtmlVideoElement,
    on_ready: Closure<dyn FnMut()>,
}

impl RateListeners {
    fn mount(video: HtmlVideoElement) -> Self {
        // Metadata may already be in by the time we mount.
        if video.ready_state() >= 1 {
            video.set_playback_rate(config::WHY_VIDEO_RATE);
        }
        let on_ready = {
            let video = video.clone();
            Closure::wrap(Box::new(move || {
                video.set_playback_rate(config::WHY_VIDEO_RATE);
            }) as Box<dyn FnMut()>)
        };
        // Some browsers reset the rate when playback (re)starts, so it is
        // re-applied on play as well as on loadedmetadata.
        for event in ["loadedmetadata", "play"] {
            let _ = video
                .add_event_listener_with_callback(event, on_ready.as_ref().unchecked_ref());
        }
        Self { video, on_ready }
    }

    fn teardown(self) {
        for event in ["loadedmetadata", "play"] {
            let _ = self
                .video
                .remove_event_listener_with_callback(event, self.on_ready.as_ref().unchecked_ref());
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct WhyVideoProps {
    pub src: AttrValue,
    #[prop_or_default]
    pub poster: Option<AttrValue>,
}

/// Ambient film for the why section, slowed to a deliberate pace.
#[function_component(WhyVideo)]
pub fn why_video(props: &WhyVideoProps) -> Html {
    let video_ref = use_node_ref();

    {
        let video_ref = video_ref.clone();
        use_effect_with_deps(
            move |_| {
                let listeners = video_ref.cast::<HtmlVideoElement>().map(RateListeners::mount);
                move || {
                    if let Some(listeners) = listeners {
                        listeners.teardown();
                    }
                }
            },
            (),
        );
    }

    html! {
        <video
            id="whyVideo"
            class="why-video"
            ref={video_ref}
            src={props.src.clone()}
            poster={props.poster.clone()}
            autoplay=true
            muted=true
            loop=true
            playsinline=true
            preload="metadata"
        />
    }
}

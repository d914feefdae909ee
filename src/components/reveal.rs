use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
};
use yew::prelude::*;

use crate::utils::prefers_reduced_motion;

type ObserverCallback = Closure<dyn FnMut(Vec<IntersectionObserverEntry>, IntersectionObserver)>;

// Observer plus the Rust closure backing it; both die together on unmount.
struct RevealObserver {
    observer: IntersectionObserver,
    _callback: ObserverCallback,
}

impl RevealObserver {
    fn observe(target: Element) -> Option<Self> {
        let callback: ObserverCallback = Closure::wrap(Box::new(
            move |entries: Vec<IntersectionObserverEntry>, observer: IntersectionObserver| {
                for entry in entries {
                    if entry.is_intersecting() {
                        let revealed = entry.target();
                        let _ = revealed.class_list().add_1("reveal-visible");
                        // First reveal is the only one; stop watching.
                        observer.unobserve(&revealed);
                    }
                }
            },
        )
            as Box<dyn FnMut(Vec<IntersectionObserverEntry>, IntersectionObserver)>);

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from(0.12));
        options.set_root_margin("0px 0px -40px 0px");
        let observer = IntersectionObserver::new_with_options(
            callback.as_ref().unchecked_ref(),
            &options,
        )
        .ok()?;
        observer.observe(&target);
        Some(Self {
            observer,
            _callback: callback,
        })
    }

    fn teardown(self) {
        self.observer.disconnect();
    }
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub class: Classes,
    pub children: Children,
}

/// Fades its content in the first time it scrolls into view. Under reduced
/// motion the wrapper is inert and the content is simply visible.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let animate = use_state(|| !prefers_reduced_motion());

    {
        let node = node.clone();
        let animate = *animate;
        use_effect_with_deps(
            move |_| {
                let observer = if animate {
                    node.cast::<Element>().and_then(RevealObserver::observe)
                } else {
                    None
                };
                move || {
                    if let Some(observer) = observer {
                        observer.teardown();
                    }
                }
            },
            (),
        );
    }

    html! {
        <div class={classes!((*animate).then(|| "reveal"), props.class.clone())} ref={node}>
            { for props.children.iter() }
        </div>
    }
}

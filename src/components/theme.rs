use web_sys::window;
use yew::prelude::*;

use crate::config;
use crate::utils::media_query_matches;

// Initial theme: local storage -> system preference -> default (dark).
fn initial_is_light(stored: Option<&str>, system_prefers_light: bool) -> bool {
    match stored {
        Some(theme) => theme == "light",
        None => system_prefers_light,
    }
}

fn stored_theme() -> Option<String> {
    window()
        .and_then(|w| w.local_storage().ok())
        .flatten()
        .and_then(|storage| storage.get_item(config::THEME_STORAGE_KEY).ok())
        .flatten()
}

// Light writes `theme=light`; dark removes the key so a fresh visitor
// keeps following the system preference.
fn persist(light: bool) {
    if let Some(storage) = window().and_then(|w| w.local_storage().ok()).flatten() {
        let _ = if light {
            storage.set_item(config::THEME_STORAGE_KEY, "light")
        } else {
            storage.remove_item(config::THEME_STORAGE_KEY)
        };
    }
}

fn apply(light: bool) {
    if let Some(root) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    {
        let _ = if light {
            root.set_attribute("data-theme", "light")
        } else {
            root.remove_attribute("data-theme")
        };
    }
}

#[function_component(ThemeToggle)]
pub fn theme_toggle() -> Html {
    let light = use_state(|| {
        initial_is_light(
            stored_theme().as_deref(),
            media_query_matches("(prefers-color-scheme: light)"),
        )
    });

    {
        let light = *light;
        use_effect_with_deps(
            move |_| {
                apply(light);
                || ()
            },
            light,
        );
    }

    let toggle = {
        let light = light.clone();
        Callback::from(move |_: MouseEvent| {
            let next = !*light;
            persist(next);
            light.set(next);
        })
    };

    html! {
        <button
            class="theme-toggle"
            onclick={toggle}
            aria-pressed={light.to_string()}
            aria-label="Toggle color theme"
            title="Toggle color theme"
        >
            { if *light { "☀" } else { "☾" } }
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stored_light_wins_over_system_dark() {
        assert!(initial_is_light(Some("light"), false));
    }

    #[test]
    fn no_stored_theme_follows_the_system() {
        assert!(initial_is_light(None, true));
        assert!(!initial_is_light(None, false));
    }

    #[test]
    fn unknown_stored_value_falls_back_to_dark() {
        assert!(!initial_is_light(Some("dark"), true));
        assert!(!initial_is_light(Some("sepia"), true));
    }
}

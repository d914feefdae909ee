use web_sys::window;

pub fn media_query_matches(query: &str) -> bool {
    window()
        .and_then(|w| w.match_media(query).ok())
        .flatten()
        .map(|list| list.matches())
        .unwrap_or(false)
}

// Checked once per component at mount, never per frame.
pub fn prefers_reduced_motion() -> bool {
    media_query_matches("(prefers-reduced-motion: reduce)")
}

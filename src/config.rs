// Site-wide constants. Everything tunable lives here so the behavior
// modules stay free of magic numbers.

// The single key this site ever writes to local storage.
pub const THEME_STORAGE_KEY: &str = "theme";

// Marquee advance per animation frame, in px. Negative flows right to left.
pub const MARQUEE_SPEED: f64 = -0.35;

// Scroll deltas under this are jitter and ignored by the hiding header.
pub const SCROLL_JITTER_PX: f64 = 10.0;

// The header only starts hiding once the page is scrolled past this.
pub const HEADER_HIDE_FLOOR_PX: f64 = 100.0;

// Within this distance of the top the header is always shown.
pub const NEAR_TOP_PX: f64 = 60.0;

// Section anchor whose visibility drives the back-to-top button.
pub const BACK_TO_TOP_ANCHOR_ID: &str = "why-it-matters";

// Back-to-top visibility threshold when IntersectionObserver is unavailable.
pub const BACK_TO_TOP_FALLBACK_PX: f64 = 300.0;

// Duration of the eased scroll back to the top.
pub const SCROLL_TO_TOP_MS: f64 = 650.0;

// At and above this width the mobile menu is force-closed.
pub const DESKTOP_NAV_QUERY: &str = "(min-width: 820px)";

// Playback rate for the slowed-down film in the why section.
pub const WHY_VIDEO_RATE: f64 = 0.6;

// Static card data for the case-study browser.
pub const CASE_STUDIES_URL: &str = "/assets/case-studies.json";

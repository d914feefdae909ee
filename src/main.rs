use log::{info, Level};
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod utils;
mod components {
    pub mod back_to_top;
    pub mod case_studies;
    pub mod header;
    pub mod marquee;
    pub mod reveal;
    pub mod theme;
    pub mod video;
}
mod pages {
    pub mod about;
    pub mod home;
}

use components::header::Header;
use pages::{about::About, home::Home};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/about")]
    About,
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::About => {
            info!("Rendering About page");
            html! { <About /> }
        }
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Header />
            <Switch<Route> render={switch} />
            <style>
                {r#"
                :root {
                    --surface: #14181f;
                    --ink: #f2f4f8;
                    --ink-soft: #aab3c0;
                    --line: #2a313c;
                    --accent: #e8a13c;
                }
                :root[data-theme="light"] {
                    --surface: #fdfaf5;
                    --ink: #1d2128;
                    --ink-soft: #55606e;
                    --line: #e3ddd2;
                    --accent: #b06f12;
                }
                * {
                    box-sizing: border-box;
                }
                body {
                    margin: 0;
                    background: var(--surface);
                    color: var(--ink);
                    font-family: "Inter", "Segoe UI", system-ui, sans-serif;
                    transition: background 0.3s ease, color 0.3s ease;
                }
                body.nav-open {
                    overflow: hidden;
                }
                .reveal {
                    opacity: 0;
                    transform: translateY(18px);
                    transition: opacity 0.6s ease, transform 0.6s ease;
                }
                .reveal.reveal-visible {
                    opacity: 1;
                    transform: translateY(0);
                }
                "#}
            </style>
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}

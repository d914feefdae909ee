use chrono::Datelike;
use yew::prelude::*;

use crate::components::back_to_top::BackToTop;
use crate::components::case_studies::CaseStudies;
use crate::components::marquee::{TeamMarquee, TeamMember};
use crate::components::reveal::Reveal;
use crate::components::video::WhyVideo;
use crate::config;

pub fn team_members() -> Vec<TeamMember> {
    [
        ("Amara Okafor", "Executive Director", "/assets/team-amara.webp"),
        ("Lucía Herrera", "Programs Lead", "/assets/team-lucia.webp"),
        ("Daniel Mwangi", "Partnerships", "/assets/team-daniel.webp"),
        ("Priya Raman", "Learning Design", "/assets/team-priya.webp"),
        ("Tomás Silva", "Field Operations", "/assets/team-tomas.webp"),
        ("Hana Yoshida", "Communications", "/assets/team-hana.webp"),
    ]
    .into_iter()
    .map(|(name, role, photo)| TeamMember {
        name: AttrValue::from(name),
        role: AttrValue::from(role),
        photo: AttrValue::from(photo),
    })
    .collect()
}

#[function_component(Home)]
pub fn home() -> Html {
    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    let year = chrono::Utc::now().year();

    html! {
        <div class="home-page">
            <Reveal class="hero">
                <p class="kicker">{"Education, within reach"}</p>
                <h1>{"Every child deserves a classroom that works"}</h1>
                <p class="lead">
                    {"Brightwood Learning partners with schools, teachers and \
                      communities to put a good education within everyone's reach — \
                      one reading room, one trained teacher, one library bus at a time."}
                </p>
                <a class="cta" href={format!("#{}", config::BACK_TO_TOP_ANCHOR_ID)}>
                    {"See why it matters"}
                </a>
            </Reveal>

            <Reveal class="section">
                <section id={config::BACK_TO_TOP_ANCHOR_ID} class="why">
                    <p class="kicker">{"Why it matters"}</p>
                    <h2 class="section-title">{"258 million children are out of school"}</h2>
                    <p class="lead">
                        {"Most of them live a short walk from a classroom that lacks \
                          only books, light or a trained teacher. Small, local, \
                          unglamorous fixes close that gap — and they last, because \
                          the communities that build them own them."}
                    </p>
                    <WhyVideo
                        src="/assets/why-film.mp4"
                        poster={Some(AttrValue::from("/assets/why-film-poster.webp"))}
                    />
                </section>
            </Reveal>

            <Reveal class="section">
                <section class="work">
                    <p class="kicker">{"Our work"}</p>
                    <h2 class="section-title">{"Case studies from the field"}</h2>
                    <CaseStudies />
                </section>
            </Reveal>

            <Reveal class="section">
                <section class="team">
                    <p class="kicker">{"The people behind it"}</p>
                    <h2 class="section-title">{"Meet the team"}</h2>
                    <p class="lead">{"Tap any face to read our story."}</p>
                    <TeamMarquee members={team_members()} />
                </section>
            </Reveal>

            <footer class="site-footer">
                <p>{ format!("© {} Brightwood Learning. All stories shared with permission.", year) }</p>
            </footer>

            <BackToTop />

            <style>
                {r#"
                .home-page {
                    max-width: 1100px;
                    margin: 0 auto;
                    padding: 6rem 1.25rem 2rem;
                }
                .hero {
                    padding: 4rem 0 3rem;
                    max-width: 720px;
                }
                .hero h1 {
                    font-size: clamp(2rem, 5vw, 3.2rem);
                    line-height: 1.15;
                    margin: 0.5rem 0 1rem;
                }
                .kicker {
                    text-transform: uppercase;
                    letter-spacing: 0.12em;
                    font-size: 0.8rem;
                    color: var(--accent);
                    margin: 0;
                }
                .lead {
                    color: var(--ink-soft);
                    font-size: 1.1rem;
                    line-height: 1.6;
                    max-width: 640px;
                }
                .cta {
                    display: inline-block;
                    margin-top: 1rem;
                    padding: 0.7rem 1.4rem;
                    border-radius: 8px;
                    background: var(--accent);
                    color: var(--surface);
                    text-decoration: none;
                    font-weight: 600;
                }
                .section {
                    padding: 3.5rem 0;
                    border-top: 1px solid var(--line);
                }
                .section-title {
                    font-size: clamp(1.5rem, 3.5vw, 2.2rem);
                    margin: 0.5rem 0 1rem;
                }
                .why-video {
                    width: 100%;
                    max-height: 420px;
                    object-fit: cover;
                    border-radius: 12px;
                    margin-top: 1.5rem;
                }
                .site-footer {
                    border-top: 1px solid var(--line);
                    padding: 2rem 0 1rem;
                    color: var(--ink-soft);
                    font-size: 0.85rem;
                }
                "#}
            </style>
        </div>
    }
}

use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::pages::home::team_members;

#[function_component(About)]
pub fn about() -> Html {
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

    html! {
        <div class="about-page">
            <Reveal class="about-hero">
                <p class="kicker">{"About us"}</p>
                <h1>{"We build the small things that make school possible"}</h1>
                <p class="lead">
                    {"Brightwood Learning started in 2019 with one borrowed bus and \
                      two thousand donated books. We still work the same way: find \
                      the one missing piece between a child and a working classroom, \
                      and supply it together with the people who will keep it running."}
                </p>
            </Reveal>

            <Reveal class="about-section alternate">
                <div class="about-content">
                    <div class="about-text">
                        <h2>{"Local first, always"}</h2>
                        <p>
                            {"Every project is proposed, staffed and eventually owned \
                              by the community it serves. We fund the start, train the \
                              people, and step back. A reading room that needs us to \
                              keep the lights on is a reading room we built wrong."}
                        </p>
                    </div>
                    <div class="about-image">
                        <img src="/assets/about-reading-room.webp" alt="Children reading in the Kitenga reading room" />
                    </div>
                </div>
            </Reveal>

            <Reveal class="about-section">
                <div class="about-content">
                    <div class="about-image">
                        <img src="/assets/about-library-bus.webp" alt="The library bus on the altiplano" />
                    </div>
                    <div class="about-text">
                        <h2>{"Unglamorous by design"}</h2>
                        <p>
                            {"Shelves, solar panels, teacher mentoring circles, a \
                              shaded bench at the market. None of it photographs like \
                              a ribbon-cutting, and all of it is still in use five \
                              years later. We measure in terms kept open, not openings."}
                        </p>
                    </div>
                </div>
            </Reveal>

            <Reveal class="about-section alternate">
                <h2 class="section-title">{"The team"}</h2>
                <div class="team-grid">
                    { for team_members().iter().map(|member| html! {
                        <figure class="team-card">
                            <img class="avatar" src={member.photo.clone()} alt={member.name.clone()} loading="lazy" />
                            <figcaption>
                                <strong>{ &member.name }</strong>
                                <span>{ &member.role }</span>
                            </figcaption>
                        </figure>
                    }) }
                </div>
            </Reveal>

            <style>
                {r#"
                .about-page {
                    max-width: 1100px;
                    margin: 0 auto;
                    padding: 6rem 1.25rem 3rem;
                }
                .about-hero {
                    padding: 4rem 0 3rem;
                    max-width: 720px;
                }
                .about-hero h1 {
                    font-size: clamp(1.8rem, 4.5vw, 2.8rem);
                    line-height: 1.2;
                    margin: 0.5rem 0 1rem;
                }
                .about-section {
                    padding: 3rem 0;
                    border-top: 1px solid var(--line);
                }
                .about-content {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 2.5rem;
                    align-items: center;
                }
                .about-text h2 {
                    margin-top: 0;
                }
                .about-text p {
                    color: var(--ink-soft);
                    line-height: 1.6;
                }
                .about-image img {
                    width: 100%;
                    border-radius: 12px;
                    display: block;
                }
                .team-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fill, minmax(160px, 1fr));
                    gap: 1.5rem;
                    margin-top: 1.5rem;
                }
                .team-card {
                    margin: 0;
                    text-align: center;
                }
                .team-card img.avatar {
                    width: 96px;
                    height: 96px;
                    border-radius: 50%;
                    object-fit: cover;
                    border: 2px solid var(--line);
                }
                .team-card figcaption {
                    display: flex;
                    flex-direction: column;
                    gap: 0.15rem;
                    margin-top: 0.6rem;
                    font-size: 0.9rem;
                }
                .team-card span {
                    color: var(--ink-soft);
                    font-size: 0.8rem;
                }
                @media (max-width: 700px) {
                    .about-content {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </div>
    }
}

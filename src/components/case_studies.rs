use chrono::NaiveDate;
use gloo_console::error;
use gloo_net::http::Request;
use serde::Deserialize;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::config;

#[derive(Deserialize, Clone, PartialEq)]
pub struct CaseStudy {
    pub title: String,
    pub summary: String,
    pub location: String,
    pub tags: Vec<String>,
    pub published: NaiveDate,
    pub image: String,
}

// A card is shown iff it carries the active tag (chip) and matches the
// query as a case-insensitive substring of its title, summary or tags.
fn matches(card: &CaseStudy, active_tag: Option<&str>, query: &str) -> bool {
    if let Some(tag) = active_tag {
        if !card.tags.iter().any(|t| t == tag) {
            return false;
        }
    }
    let needle = query.trim().to_lowercase();
    needle.is_empty()
        || card.title.to_lowercase().contains(&needle)
        || card.summary.to_lowercase().contains(&needle)
        || card.tags.iter().any(|t| t.to_lowercase().contains(&needle))
}

fn distinct_tags(cards: &[CaseStudy]) -> Vec<String> {
    let mut tags: Vec<String> = cards
        .iter()
        .flat_map(|card| card.tags.iter().cloned())
        .collect();
    tags.sort();
    tags.dedup();
    tags
}

#[function_component(CaseStudies)]
pub fn case_studies() -> Html {
    let cards: UseStateHandle<Vec<CaseStudy>> = use_state(Vec::new);
    let query = use_state(String::new);
    // None means the "All" chip.
    let active_tag: UseStateHandle<Option<String>> = use_state(|| None);

    // The data ships as a static asset and is fetched exactly once; every
    // keystroke afterwards filters the in-memory list.
    {
        let cards = cards.clone();
        use_effect_with_deps(
            move |_| {
                wasm_bindgen_futures::spawn_local(async move {
                    match Request::get(config::CASE_STUDIES_URL).send().await {
                        Ok(response) => match response.json::<Vec<CaseStudy>>().await {
                            Ok(data) => cards.set(data),
                            Err(e) => error!("failed to parse case studies:", e.to_string()),
                        },
                        Err(e) => error!("failed to load case studies:", e.to_string()),
                    }
                });
                || ()
            },
            (),
        );
    }

    let on_search = {
        let query = query.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            query.set(input.value());
        })
    };

    let chip = |tag: Option<String>, label: String| -> Html {
        let is_active = *active_tag == tag;
        let onclick = {
            let active_tag = active_tag.clone();
            let tag = tag.clone();
            Callback::from(move |_: MouseEvent| active_tag.set(tag.clone()))
        };
        html! {
            <button
                class={classes!("chip", is_active.then(|| "active"))}
                aria-pressed={is_active.to_string()}
                {onclick}
            >
                { label }
            </button>
        }
    };

    let shown: Vec<&CaseStudy> = cards
        .iter()
        .filter(|card| matches(card, active_tag.as_deref(), &query))
        .collect();

    html! {
        <div class="case-studies">
            <div class="case-controls">
                <input
                    type="search"
                    class="case-search"
                    placeholder="Search case studies"
                    aria-label="Search case studies"
                    value={(*query).clone()}
                    oninput={on_search}
                />
                <div class="case-chips" role="group" aria-label="Filter by topic">
                    { chip(None, "All".to_string()) }
                    { for distinct_tags(&cards).into_iter().map(|tag| chip(Some(tag.clone()), tag)) }
                </div>
            </div>
            <p class="case-count">
                { format!("Showing {} of {} case studies", shown.len(), cards.len()) }
            </p>
            {
                if shown.is_empty() {
                    html! {
                        <p class="case-empty">
                            {"No case studies match your search. Try a different term or topic."}
                        </p>
                    }
                } else {
                    html! {
                        <div class="case-grid">
                            { for shown.iter().map(|card| html! {
                                <article class="case-card">
                                    <img src={card.image.clone()} alt={card.title.clone()} loading="lazy" />
                                    <div class="case-body">
                                        <h3>{ &card.title }</h3>
                                        <p class="case-meta">
                                            { format!("{} · {}", card.location, card.published.format("%B %Y")) }
                                        </p>
                                        <p>{ &card.summary }</p>
                                        <div class="case-tags">
                                            { for card.tags.iter().map(|tag| html! {
                                                <span class="case-tag">{ tag }</span>
                                            }) }
                                        </div>
                                    </div>
                                </article>
                            }) }
                        </div>
                    }
                }
            }
            <style>
                {r#"
                .case-controls {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 1rem;
                    align-items: center;
                    margin-bottom: 0.75rem;
                }
                .case-search {
                    flex: 1 1 240px;
                    padding: 0.6rem 0.9rem;
                    border: 1px solid var(--line);
                    border-radius: 8px;
                    background: var(--surface);
                    color: var(--ink);
                    font-size: 0.95rem;
                }
                .case-chips {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 0.5rem;
                }
                .chip {
                    padding: 0.35rem 0.85rem;
                    border: 1px solid var(--line);
                    border-radius: 999px;
                    background: none;
                    color: var(--ink-soft);
                    font-size: 0.85rem;
                    cursor: pointer;
                }
                .chip.active {
                    background: var(--accent);
                    border-color: var(--accent);
                    color: var(--surface);
                }
                .case-count {
                    color: var(--ink-soft);
                    font-size: 0.85rem;
                    margin: 0 0 1.25rem;
                }
                .case-empty {
                    color: var(--ink-soft);
                    padding: 2rem 0;
                    text-align: center;
                }
                .case-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fill, minmax(280px, 1fr));
                    gap: 1.5rem;
                }
                .case-card {
                    border: 1px solid var(--line);
                    border-radius: 12px;
                    overflow: hidden;
                    background: var(--surface);
                }
                .case-card img {
                    width: 100%;
                    height: 160px;
                    object-fit: cover;
                    display: block;
                }
                .case-body {
                    padding: 1rem 1.25rem 1.25rem;
                }
                .case-body h3 {
                    margin: 0 0 0.35rem;
                    font-size: 1.05rem;
                }
                .case-meta {
                    color: var(--ink-soft);
                    font-size: 0.8rem;
                    margin: 0 0 0.75rem;
                }
                .case-tags {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 0.4rem;
                    margin-top: 0.75rem;
                }
                .case-tag {
                    font-size: 0.75rem;
                    padding: 0.15rem 0.6rem;
                    border-radius: 999px;
                    border: 1px solid var(--line);
                    color: var(--ink-soft);
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(title: &str, summary: &str, tags: &[&str]) -> CaseStudy {
        CaseStudy {
            title: title.to_string(),
            summary: summary.to_string(),
            location: "Kitenga, Tanzania".to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            published: NaiveDate::from_ymd_opt(2024, 3, 18).unwrap(),
            image: "/assets/case-kitenga.webp".to_string(),
        }
    }

    #[test]
    fn empty_query_and_all_chip_match_everything() {
        let c = card("A reading room", "Shelves and librarians", &["Literacy"]);
        assert!(matches(&c, None, ""));
        assert!(matches(&c, None, "   "));
    }

    #[test]
    fn query_is_case_insensitive_across_fields() {
        let c = card("A reading room", "Shelves and librarians", &["Literacy"]);
        assert!(matches(&c, None, "READING"));
        assert!(matches(&c, None, "librarian"));
        assert!(matches(&c, None, "literacy"));
        assert!(!matches(&c, None, "laptops"));
    }

    #[test]
    fn chip_must_match_exactly() {
        let c = card("A reading room", "Shelves", &["Literacy", "Community"]);
        assert!(matches(&c, Some("Literacy"), ""));
        assert!(matches(&c, Some("Community"), ""));
        assert!(!matches(&c, Some("Digital access"), ""));
        // chips are whole tags, not substrings
        assert!(!matches(&c, Some("Lit"), ""));
    }

    #[test]
    fn chip_and_query_combine_with_and() {
        let c = card("Fifty laptops", "Solar charging", &["Digital access"]);
        assert!(matches(&c, Some("Digital access"), "solar"));
        assert!(!matches(&c, Some("Digital access"), "library"));
        assert!(!matches(&c, Some("Literacy"), "solar"));
    }

    #[test]
    fn distinct_tags_are_sorted_and_deduplicated() {
        let cards = vec![
            card("a", "s", &["Literacy", "Community"]),
            card("b", "s", &["Community", "Digital access"]),
        ];
        assert_eq!(
            distinct_tags(&cards),
            vec!["Community", "Digital access", "Literacy"]
        );
    }

    #[test]
    fn no_cards_means_no_tags() {
        assert!(distinct_tags(&[]).is_empty());
    }
}

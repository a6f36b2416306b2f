//! Landing page listing the course tracks.

use leptos::prelude::*;
use leptos_router::components::A;

struct Track {
    title: &'static str,
    summary: &'static str,
    weeks: u8,
}

const TRACKS: [Track; 3] = [
    Track {
        title: "Systems Programming",
        summary: "Memory, ownership, and the machines underneath your code.",
        weeks: 10,
    },
    Track {
        title: "Web Foundations",
        summary: "HTTP, rendering, and shipping pages that load fast.",
        weeks: 8,
    },
    Track {
        title: "Data Engineering",
        summary: "Pipelines, storage engines, and the queries that feed them.",
        weeks: 12,
    },
];

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <section class="home-hero">
            <h1>"Learn to build software that lasts"</h1>
            <p class="home-hero__lede">
                "Project-based tracks taught by working engineers."
            </p>
            <A href="/admin/deployment" attr:class="btn btn--primary">
                "Release notes"
            </A>
        </section>
        <section class="home-tracks">
            {TRACKS
                .iter()
                .map(|track| {
                    view! {
                        <article class="track-card">
                            <h2 class="track-card__title">{track.title}</h2>
                            <p class="track-card__summary">{track.summary}</p>
                            <span class="track-card__meta">{format!("{} weeks", track.weeks)}</span>
                        </article>
                    }
                })
                .collect::<Vec<_>>()}
        </section>
    }
}

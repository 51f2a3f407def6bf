use log::warn;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};
use yew::prelude::*;

use crate::components::split_chart::SplitChart;
use crate::components::waitlist::WaitlistForm;
use crate::effects::{interact, reveal, scroll};

const HERO_TITLE: &str = "Own the Network You Grow";
const COUNTER_DURATION_MS: u32 = 2000;

#[function_component(Landing)]
pub fn landing() -> Html {
    use_effect_with_deps(
        move |_| {
            let guards = web_sys::window()
                .and_then(|window| window.document().map(|document| (window, document)))
                .map(|(window, document)| {
                    let scroll_guard = scroll::attach_scroll_effects(&window, &document);
                    let reveal_observer = match reveal::observe(&document) {
                        Ok(observer) => Some(observer),
                        Err(err) => {
                            warn!("fade-in reveal unavailable: {:?}", err);
                            None
                        }
                    };
                    let glow_guard = interact::attach_hero_glow(&document);
                    let counter_handles = start_counters(&document);
                    let type_handle = start_title_typing(&document);
                    (
                        scroll_guard,
                        reveal_observer,
                        glow_guard,
                        counter_handles,
                        type_handle,
                    )
                });
            move || drop(guards)
        },
        (),
    );

    let (hover_enter, hover_leave) = interact::hover_spacing_callbacks();

    html! {
        <div class="landing-page">
            <header class="hero">
                <div class="stars"></div>
                <div class="hero-content">
                    <h1 class="hero-title">{ HERO_TITLE }</h1>
                    <p class="hero-subtitle">
                        { "Starfall routes 90% of protocol revenue straight back to the people who run it." }
                    </p>
                    <div class="hero-cta-group">
                        <button
                            class="btn btn-primary"
                            onclick={scroll::scroll_callback("waitlist")}
                            onmouseenter={hover_enter.clone()}
                            onmouseleave={hover_leave.clone()}
                        >
                            { "Join the Waitlist" }
                        </button>
                        <button
                            class="btn btn-secondary"
                            onclick={scroll::scroll_callback("split")}
                            onmouseenter={hover_enter}
                            onmouseleave={hover_leave}
                        >
                            { "See the Split" }
                        </button>
                    </div>
                </div>
                <div class="floating-card">{ "⚡ Instant payouts" }</div>
                <div class="floating-card">{ "🌐 Run by members" }</div>
                <div class="floating-card">{ "🔒 Non-custodial" }</div>
            </header>

            <section class="stats">
                <div class="stat">
                    <span class="stat-number" data-target="12500">{ "0" }</span>
                    <span class="stat-label">{ "Waitlist members" }</span>
                </div>
                <div class="stat">
                    <span class="stat-number" data-target="90">{ "0" }</span>
                    <span class="stat-label">{ "% of revenue shared" }</span>
                </div>
                <div class="stat">
                    <span class="stat-number" data-target="47">{ "0" }</span>
                    <span class="stat-label">{ "Countries represented" }</span>
                </div>
            </section>

            <section id="features" class="features">
                <h2>{ "Why Starfall" }</h2>
                <div class="feature-grid">
                    <div class="feature-card">
                        <h3>{ "Member-owned treasury" }</h3>
                        <p>{ "Every fee the network earns lands in a treasury the community controls." }</p>
                    </div>
                    <div class="feature-card">
                        <h3>{ "Transparent accounting" }</h3>
                        <p>{ "Revenue, payouts and the split itself are public from day one." }</p>
                    </div>
                    <div class="feature-card">
                        <h3>{ "No lockups" }</h3>
                        <p>{ "Rewards stream continuously; leave whenever you like." }</p>
                    </div>
                </div>
            </section>

            <section id="roadmap" class="roadmap">
                <h2>{ "Roadmap" }</h2>
                <div class="timeline">
                    <div class="timeline-item">
                        <h3>{ "Q4 2026 — Private beta" }</h3>
                        <p>{ "Waitlist members get first access to the network." }</p>
                    </div>
                    <div class="timeline-item">
                        <h3>{ "Q1 2027 — Revenue sharing live" }</h3>
                        <p>{ "The 90/10 split starts paying out automatically." }</p>
                    </div>
                    <div class="timeline-item">
                        <h3>{ "Q2 2027 — Community governance" }</h3>
                        <p>{ "Treasury decisions move fully on-chain." }</p>
                    </div>
                </div>
            </section>

            <section id="split" class="split">
                <h2>{ "Where the Revenue Goes" }</h2>
                <div class="split-content">
                    <div class="chart-container">
                        <SplitChart />
                    </div>
                    <div class="split-item">
                        <h3>{ "90% Community" }</h3>
                        <p>{ "Paid out to the members who operate and grow the network." }</p>
                    </div>
                    <div class="split-item">
                        <h3>{ "10% Devs" }</h3>
                        <p>{ "Keeps the core team shipping without outside investors." }</p>
                    </div>
                </div>
            </section>

            <section id="waitlist" class="waitlist">
                <h2>{ "Get Early Access" }</h2>
                <WaitlistForm />
            </section>

            <footer class="footer">
                <p>{ "© 2026 Starfall. Built in the open." }</p>
            </footer>
        </div>
    }
}

fn start_counters(document: &Document) -> Vec<interact::CounterHandle> {
    let mut handles = Vec::new();
    let Ok(nodes) = document.query_selector_all(".stat-number") else {
        return handles;
    };
    for index in 0..nodes.length() {
        let Some(element) = nodes
            .item(index)
            .and_then(|node| node.dyn_into::<HtmlElement>().ok())
        else {
            continue;
        };
        let Some(target) = element
            .get_attribute("data-target")
            .and_then(|raw| raw.parse::<f64>().ok())
        else {
            warn!("stat counter without a numeric data-target; skipped");
            continue;
        };
        handles.push(interact::animate_counter(
            element,
            target,
            COUNTER_DURATION_MS,
        ));
    }
    handles
}

fn start_title_typing(document: &Document) -> Option<interact::TypeHandle> {
    let title = document
        .query_selector(".hero-title")
        .ok()
        .flatten()
        .and_then(|element| element.dyn_into::<HtmlElement>().ok())?;
    Some(interact::type_effect(
        title,
        HERO_TITLE,
        interact::DEFAULT_TYPE_SPEED_MS,
    ))
}

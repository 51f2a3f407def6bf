use log::{info, warn, Level};
use web_sys::{HtmlElement, MouseEvent};
use yew::prelude::*;

mod config;

mod components {
    pub mod split_chart;
    pub mod waitlist;
}

mod effects {
    pub mod interact;
    pub mod reveal;
    pub mod scroll;
}

mod pages {
    pub mod landing;
}

use effects::scroll;
use pages::landing::Landing;

// Inline styles applied when the hamburger opens the panel so it overlays
// the page below the navbar.
const OPEN_MENU_STYLES: [(&str, &str); 8] = [
    ("position", "absolute"),
    ("top", "60px"),
    ("left", "0"),
    ("width", "100%"),
    ("flex-direction", "column"),
    ("background-color", "rgba(15, 23, 42, 0.95)"),
    ("padding", "1rem"),
    ("gap", "1rem"),
];

#[function_component(Nav)]
pub fn nav() -> Html {
    let nav_links_ref = use_node_ref();

    let toggle_menu = {
        let nav_links_ref = nav_links_ref.clone();
        Callback::from(move |_event: MouseEvent| {
            let Some(links) = nav_links_ref.cast::<HtmlElement>() else {
                warn!("nav links panel missing; hamburger toggle skipped");
                return;
            };
            let style = links.style();
            let currently_open = style
                .get_property_value("display")
                .map(|display| display == "flex")
                .unwrap_or(false);
            let display = if currently_open { "none" } else { "flex" };
            let _ = style.set_property("display", display);
            for (property, value) in OPEN_MENU_STYLES {
                let _ = style.set_property(property, value);
            }
        })
    };

    html! {
        <nav class="navbar">
            <span class="nav-logo">{ "Starfall" }</span>
            <button class="hamburger" onclick={toggle_menu}>
                <span></span>
                <span></span>
                <span></span>
            </button>
            <div class="nav-links" ref={nav_links_ref}>
                <a class="nav-link" onclick={scroll::scroll_callback("features")}>{ "Features" }</a>
                <a class="nav-link" onclick={scroll::scroll_callback("roadmap")}>{ "Roadmap" }</a>
                <a class="nav-link" onclick={scroll::scroll_callback("split")}>{ "Revenue Split" }</a>
                <a class="nav-link" onclick={scroll::scroll_callback("waitlist")}>{ "Waitlist" }</a>
            </div>
        </nav>
    }
}

#[function_component(App)]
fn app() -> Html {
    html! {
        <>
            <Nav />
            <Landing />
        </>
    }
}

fn main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}

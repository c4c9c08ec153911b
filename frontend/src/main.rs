use yew::prelude::*;
use yew_router::prelude::*;
use yew_hooks::prelude::*;
use log::info;
use web_sys::MouseEvent;

mod config;
mod effects;
mod scheduler;
mod strings;
mod styles;
mod components {
    pub mod contact_form;
    pub mod notification;
}
mod pages {
    pub mod landing;
}

use components::notification::NotificationProvider;
use effects::{scroll_to_section, use_active_section};
use pages::landing::Landing;
use styles::PageStyles;


#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}


fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Landing page");
            html! { <Landing /> }
        },
        Route::NotFound => {
            info!("Unknown route, redirecting home");
            html! { <Redirect<Route> to={Route::Home} /> }
        },
    }
}


const NAV_SECTIONS: [(&str, &str); 5] = [
    ("home", "홈"),
    ("features", "기능"),
    ("showcase", "미리보기"),
    ("download", "다운로드"),
    ("contact", "문의"),
];

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let (_, scroll_y) = use_window_scroll();
    let is_scrolled = scroll_y > config::NAVBAR_SCROLLED_THRESHOLD;
    let active = use_active_section(scroll_y);

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let nav_link = |id: &'static str, label: &'static str| {
        let menu_open = menu_open.clone();
        let onclick = Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(false);
            scroll_to_section(id);
        });
        let is_active = active.as_deref() == Some(id);
        html! {
            <li>
                <a
                    href={format!("#{}", id)}
                    class={classes!("nav-link", is_active.then(|| "active"))}
                    {onclick}
                >
                    {label}
                </a>
            </li>
        }
    };

    html! {
        <nav id="navbar" class={classes!("navbar", is_scrolled.then(|| "scrolled"))}>
            <div class="nav-container">
                <a href="#home" class="nav-logo">{"LearnUs Assistant"}</a>
                <ul id="nav-menu" class={classes!("nav-menu", (*menu_open).then(|| "active"))}>
                    { for NAV_SECTIONS.iter().map(|&(id, label)| nav_link(id, label)) }
                </ul>
                <button
                    id="nav-toggle"
                    class={classes!("nav-toggle", (*menu_open).then(|| "active"))}
                    onclick={toggle_menu}
                >
                    <span class="bar"></span>
                    <span class="bar"></span>
                    <span class="bar"></span>
                </button>
            </div>
        </nav>
    }
}


#[function_component]
fn App() -> Html {
    html! {
        <NotificationProvider>
            <PageStyles />
            <BrowserRouter>
                <Nav />
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </NotificationProvider>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    if let Err(e) = console_log::init_with_level(config::log_level()) {
        web_sys::console::error_1(&format!("error initializing log: {}", e).into());
    }

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}

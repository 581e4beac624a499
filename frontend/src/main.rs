use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, warn, Level};
use web_sys::MouseEvent;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

mod analytics;
mod config;
mod webhook;
mod leads {
    pub mod mode;
    pub mod validation;
    pub mod pricing;
    pub mod request;
    pub mod form;
}
mod components {
    pub mod notification;
    pub mod footer;
}
mod pages {
    pub mod home;
    pub mod pricing;
    pub mod request_leads;
    pub mod check_status;
    pub mod contact;
    pub mod confirmation;
    pub mod policies;
}

use components::footer::Footer;
use pages::{
    home::Home,
    pricing::Pricing,
    request_leads::RequestLeads,
    check_status::CheckStatus,
    contact::Contact,
    confirmation::{ThankYou, PaymentSuccess},
    policies::{PrivacyPolicy, TermsOfService, CookiePolicy, RefundPolicy, CancellationPolicy},
};


#[derive(Clone, Debug, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/pricing")]
    Pricing,
    #[at("/request-leads")]
    RequestLeads,
    #[at("/check-status")]
    CheckStatus,
    #[at("/contact")]
    Contact,
    #[at("/privacy")]
    Privacy,
    #[at("/terms")]
    Terms,
    #[at("/cookies")]
    Cookies,
    #[at("/refund")]
    Refund,
    #[at("/cancellation")]
    Cancellation,
    #[at("/payment-success")]
    PaymentSuccess,
    #[at("/thank-you")]
    ThankYou,
    #[not_found]
    #[at("/404")]
    NotFound,
}


fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::Pricing => {
            info!("Rendering Pricing page");
            html! { <Pricing /> }
        },
        Route::RequestLeads => {
            info!("Rendering Request Leads page");
            html! { <RequestLeads /> }
        },
        Route::CheckStatus => {
            info!("Rendering Check Status page");
            html! { <CheckStatus /> }
        },
        Route::Contact => {
            info!("Rendering Contact page");
            html! { <Contact /> }
        },
        Route::Privacy => {
            info!("Rendering Privacy page");
            html! { <PrivacyPolicy /> }
        },
        Route::Terms => {
            info!("Rendering Terms page");
            html! { <TermsOfService /> }
        },
        Route::Cookies => {
            info!("Rendering Cookies page");
            html! { <CookiePolicy /> }
        },
        Route::Refund => {
            info!("Rendering Refund page");
            html! { <RefundPolicy /> }
        },
        Route::Cancellation => {
            info!("Rendering Cancellation page");
            html! { <CancellationPolicy /> }
        },
        Route::PaymentSuccess => {
            info!("Rendering Payment Success page");
            html! { <PaymentSuccess /> }
        },
        Route::ThankYou => {
            info!("Rendering Thank You page");
            html! { <ThankYou /> }
        },
        Route::NotFound => {
            info!("Unknown path, redirecting home");
            html! { <Redirect<Route> to={Route::Home} /> }
        },
    }
}


#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(move |_| {
            let window = web_sys::window();
            let listener = window.as_ref().map(|window| {
                let document = window.document();
                let scroll_callback = Closure::wrap(Box::new(move || {
                    let scroll_top = document
                        .as_ref()
                        .and_then(|d| d.document_element())
                        .map(|el| el.scroll_top())
                        .unwrap_or(0);
                    is_scrolled.set(scroll_top > 50);
                }) as Box<dyn FnMut()>);
                if let Err(e) = window.add_event_listener_with_callback(
                    "scroll",
                    scroll_callback.as_ref().unchecked_ref(),
                ) {
                    warn!("Could not attach scroll listener: {:?}", e);
                }
                scroll_callback
            });

            move || {
                if let (Some(window), Some(callback)) = (window, listener) {
                    if let Err(e) = window.remove_event_listener_with_callback(
                        "scroll",
                        callback.as_ref().unchecked_ref(),
                    ) {
                        warn!("Could not detach scroll listener: {:?}", e);
                    }
                }
            }
        }, ());
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {"Action"}<span class="gradient-text">{"Leads"}</span>
                </Link<Route>>

                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Home} classes="nav-link">{"Home"}</Link<Route>>
                    </div>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Pricing} classes="nav-link">{"Pricing"}</Link<Route>>
                    </div>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Contact} classes="nav-link">{"Contact"}</Link<Route>>
                    </div>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::CheckStatus} classes="nav-link">{"Check Status"}</Link<Route>>
                    </div>
                    <div onclick={close_menu}>
                        <Link<Route> to={Route::RequestLeads} classes="nav-cta">{"Get Leads"}</Link<Route>>
                    </div>
                </div>
            </div>
        </nav>
    }
}


/// Updates the title and reports a page view whenever the route changes.
#[function_component(PageTracker)]
fn page_tracker() -> Html {
    let route = use_route::<Route>();
    use_effect_with_deps(move |route| {
        if let Some(route) = route {
            analytics::track_page_view(route);
        }
        || ()
    }, route);
    html! {}
}


#[function_component]
fn App() -> Html {
    use_effect_with_deps(|_| {
        analytics::init();
        || ()
    }, ());

    html! {
        <BrowserRouter>
            <PageTracker />
            <Nav />
            <main>
                <Switch<Route> render={switch} />
            </main>
            <Footer />
            <style>
                {r#"
                body {
                    margin: 0;
                    background: #0f0f13;
                    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                }
                .top-nav {
                    position: fixed;
                    top: 0;
                    width: 100%;
                    z-index: 40;
                    transition: background 0.3s ease;
                }
                .top-nav.scrolled {
                    background: rgba(15, 15, 19, 0.85);
                    backdrop-filter: blur(10px);
                }
                .nav-content {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 1.25rem 2rem;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                }
                .nav-logo { color: #fff; font-size: 1.5rem; font-weight: 700; text-decoration: none; }
                .nav-logo .gradient-text {
                    background: linear-gradient(45deg, #cc73f8, #b44fe0);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }
                .nav-right { display: flex; gap: 1.5rem; align-items: center; }
                .nav-link { color: #ccc; text-decoration: none; }
                .nav-link:hover { color: #fff; }
                .nav-cta {
                    padding: 0.6rem 1.2rem;
                    border-radius: 8px;
                    background: linear-gradient(45deg, #cc73f8, #b44fe0);
                    color: #fff;
                    text-decoration: none;
                }
                .burger-menu { display: none; background: none; border: none; cursor: pointer; }
                .burger-menu span { display: block; width: 24px; height: 2px; margin: 5px 0; background: #fff; }
                @media (max-width: 768px) {
                    .burger-menu { display: block; }
                    .nav-right { display: none; }
                    .nav-right.mobile-menu-open {
                        display: flex;
                        flex-direction: column;
                        position: absolute;
                        top: 100%;
                        left: 0;
                        right: 0;
                        padding: 1.5rem;
                        background: rgba(15, 15, 19, 0.95);
                    }
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

use yew::prelude::*;
use yew_router::prelude::*;

use crate::config::SUPPORT_EMAIL;
use crate::Route;

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="site-footer">
            <div class="footer-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {"Action"}<span class="gradient-text">{"Leads"}</span>
                </Link<Route>>
                <div class="footer-links">
                    <Link<Route> to={Route::Privacy}>{"Privacy Policy"}</Link<Route>>
                    <Link<Route> to={Route::Terms}>{"Terms of Service"}</Link<Route>>
                    <Link<Route> to={Route::Cookies}>{"Cookie Policy"}</Link<Route>>
                    <Link<Route> to={Route::Refund}>{"Refund Policy"}</Link<Route>>
                    <Link<Route> to={Route::Cancellation}>{"Cancellation Policy"}</Link<Route>>
                </div>
                <a class="footer-mail" href={format!("mailto:{}", SUPPORT_EMAIL)}>{SUPPORT_EMAIL}</a>
            </div>
            <style>
                {r#"
                .site-footer {
                    border-top: 1px solid rgba(255, 255, 255, 0.05);
                    padding: 2.5rem 2rem;
                    color: #999;
                }
                .footer-content {
                    max-width: 1200px;
                    margin: 0 auto;
                    display: flex;
                    flex-wrap: wrap;
                    gap: 1.5rem;
                    justify-content: space-between;
                    align-items: center;
                }
                .footer-links { display: flex; flex-wrap: wrap; gap: 1.5rem; }
                .site-footer a { color: #999; text-decoration: none; }
                .site-footer a:hover { color: #cc73f8; }
                "#}
            </style>
        </footer>
    }
}

use log::{debug, warn};
use serde::Serialize;
use wasm_bindgen::prelude::*;
use web_sys::window;
use yew_router::Routable;

use crate::config::GA_TRACKING_ID;
use crate::Route;

const LOADER_ID: &str = "ga-loader";

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = window, catch)]
    fn gtag(command: &str, target: &str, params: JsValue) -> Result<(), JsValue>;
}

#[derive(Serialize)]
struct PageView<'a> {
    page_path: &'a str,
    page_title: &'a str,
    page_location: String,
}

pub fn page_title(route: &Route) -> &'static str {
    match route {
        Route::Home => "ActionLeads - Affordable Apollo Data",
        Route::Contact => "Contact Us - ActionLeads",
        Route::Pricing => "Pricing - ActionLeads",
        Route::RequestLeads => "Request Leads - ActionLeads",
        Route::CheckStatus => "Check Status - ActionLeads",
        Route::Privacy => "Privacy Policy - ActionLeads",
        Route::Terms => "Terms of Service - ActionLeads",
        Route::Cookies => "Cookie Policy - ActionLeads",
        Route::Refund => "Refund Policy - ActionLeads",
        Route::Cancellation => "Cancellation Policy - ActionLeads",
        Route::PaymentSuccess => "Payment Successful - ActionLeads",
        Route::ThankYou => "Thank You - ActionLeads",
        Route::NotFound => "ActionLeads",
    }
}

fn bootstrap_script() -> String {
    format!(
        "window.dataLayer = window.dataLayer || [];\
         function gtag(){{dataLayer.push(arguments);}}\
         window.gtag = gtag;\
         gtag('js', new Date());\
         gtag('config', '{id}', {{ send_page_view: false }});",
        id = GA_TRACKING_ID
    )
}

/// Injects the gtag loader once. Safe to call on every mount.
pub fn init() {
    let Some(document) = window().and_then(|w| w.document()) else {
        return;
    };
    if document.get_element_by_id(LOADER_ID).is_some() {
        return;
    }
    let Some(head) = document.head() else {
        return;
    };

    let loader = match document.create_element("script") {
        Ok(el) => el,
        Err(_) => return,
    };
    let _ = loader.set_attribute("id", LOADER_ID);
    let _ = loader.set_attribute("async", "true");
    let _ = loader.set_attribute(
        "src",
        &format!("https://www.googletagmanager.com/gtag/js?id={}", GA_TRACKING_ID),
    );

    let bootstrap = match document.create_element("script") {
        Ok(el) => el,
        Err(_) => return,
    };
    bootstrap.set_text_content(Some(&bootstrap_script()));

    if head.append_child(&loader).is_err() || head.append_child(&bootstrap).is_err() {
        warn!("Could not inject analytics scripts");
    }
}

/// Sets the document title and reports a page view for `route`.
pub fn track_page_view(route: &Route) {
    let title = page_title(route);
    let Some(window) = window() else {
        return;
    };
    if let Some(document) = window.document() {
        document.set_title(title);
    }

    let path = route.to_path();
    let view = PageView {
        page_path: &path,
        page_title: title,
        page_location: window.location().href().unwrap_or_default(),
    };
    let params = match serde_wasm_bindgen::to_value(&view) {
        Ok(params) => params,
        Err(_) => return,
    };
    if gtag("event", "page_view", params).is_err() {
        debug!("gtag unavailable, page view for {} not sent", path);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_public_page_has_its_own_title() {
        let routes = [
            Route::Home,
            Route::Contact,
            Route::Pricing,
            Route::RequestLeads,
            Route::CheckStatus,
            Route::Privacy,
            Route::Terms,
            Route::Cookies,
            Route::Refund,
            Route::Cancellation,
            Route::PaymentSuccess,
            Route::ThankYou,
        ];
        let mut titles: Vec<_> = routes.iter().map(page_title).collect();
        titles.sort();
        titles.dedup();
        assert_eq!(titles.len(), routes.len());
        assert_eq!(page_title(&Route::NotFound), "ActionLeads");
    }

    #[test]
    fn bootstrap_configures_tracking_id() {
        let script = bootstrap_script();
        assert!(script.contains(GA_TRACKING_ID));
        assert!(script.contains("window.gtag = gtag"));
    }
}

use crate::leads::mode::Mode;

pub const GA_TRACKING_ID: &str = "G-86T3MP2QZR";

pub const SUPPORT_EMAIL: &str = "support@actionleads.io";

#[cfg(debug_assertions)]
pub fn get_webhook_url() -> &'static str {
    // Local n8n instance unless overridden at build time
    match option_env!("ACTIONLEADS_WEBHOOK_URL") {
        Some(url) => url,
        None => "http://localhost:5678/webhook",
    }
}

#[cfg(not(debug_assertions))]
pub fn get_webhook_url() -> &'static str {
    "https://automate.chillreach.online/webhook"
}

/// Webhook addresses the site posts to. Built once from the base URL.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Endpoints {
    pub search: String,
    pub lists: String,
    pub check_status: String,
    pub contact: String,
}

impl Endpoints {
    pub fn from_base(base: &str) -> Self {
        let base = base.trim_end_matches('/');
        Self {
            search: format!("{}/apollo-request", base),
            lists: format!("{}/apollo-request-list", base),
            check_status: format!("{}/check-status", base),
            contact: format!("{}/apollo-contact-us", base),
        }
    }

    pub fn for_mode(&self, mode: Mode) -> &str {
        match mode {
            Mode::Search => &self.search,
            Mode::Lists => &self.lists,
        }
    }
}

pub fn endpoints() -> Endpoints {
    Endpoints::from_base(get_webhook_url())
}

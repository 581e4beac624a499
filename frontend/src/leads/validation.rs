//! Field validators for the lead request form.
//!
//! Every validator is a pure function of the raw input (and the active mode
//! where it matters), so the form can re-run them after each keystroke.

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;
use url::Url;

use super::mode::Mode;

const PEOPLE_MARKER: &str = "/people";
const COMPANIES_MARKER: &str = "/companies";
const LABEL_FILTER_PARAM: &str = "contactLabelIds[]";
const PROSPECTED_PARAM: &str = "prospectedByCurrentTeam[]";

pub const MIN_CREDENTIAL_LEN: usize = 5;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum UrlRejection {
    #[error("Please enter a valid Apollo URL")]
    MalformedUrl,
    #[error("We only support Apollo People search URLs. Company search is not supported.")]
    UnsupportedResourceType,
    #[error("Please enter a valid Apollo People URL")]
    WrongResourceType,
    #[error("The URL might be on the \"net new\" or \"saved\" tab, so make sure you copy it from the total tab.")]
    WrongListTab,
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EmailError {
    #[error("Email is required")]
    Required,
    #[error("Please enter a valid email address")]
    InvalidFormat,
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CredentialError {
    #[error("Cred ID is required")]
    Required,
    #[error("Invalid Cred ID format")]
    InvalidFormat,
}

/// Result of classifying a pasted URL.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UrlVerdict {
    Valid,
    Invalid(UrlRejection),
    /// A saved-list URL pasted into the search form. Neither valid nor
    /// invalid; the caller shows a transient hint pointing at the other mode.
    Advisory,
}

pub fn classify_url(raw: &str, mode: Mode) -> UrlVerdict {
    let url = match Url::parse(raw.trim()) {
        Ok(url) => url,
        Err(_) => return UrlVerdict::Invalid(UrlRejection::MalformedUrl),
    };
    let fragment = url.fragment().unwrap_or("");

    if fragment.starts_with(COMPANIES_MARKER) {
        return UrlVerdict::Invalid(UrlRejection::UnsupportedResourceType);
    }
    if !fragment.starts_with(PEOPLE_MARKER) {
        return UrlVerdict::Invalid(UrlRejection::WrongResourceType);
    }

    match mode {
        Mode::Lists => UrlVerdict::Valid,
        Mode::Search => classify_search_fragment(fragment),
    }
}

fn classify_search_fragment(fragment: &str) -> UrlVerdict {
    let query = fragment.split_once('?').map(|(_, q)| q).unwrap_or("");
    let mut has_label_filter = false;
    let mut prospected: Option<String> = None;

    for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
        if key == LABEL_FILTER_PARAM {
            has_label_filter = true;
        } else if key == PROSPECTED_PARAM && prospected.is_none() {
            prospected = Some(value.into_owned());
        }
    }

    if has_label_filter {
        return UrlVerdict::Advisory;
    }
    match prospected.as_deref() {
        Some("yes") | Some("no") => UrlVerdict::Invalid(UrlRejection::WrongListTab),
        Some(_) => UrlVerdict::Advisory,
        None => UrlVerdict::Valid,
    }
}

pub fn validate_email(email: &str) -> Result<(), EmailError> {
    if email.is_empty() {
        return Err(EmailError::Required);
    }
    if !EMAIL_RE.is_match(email) {
        return Err(EmailError::InvalidFormat);
    }
    Ok(())
}

/// Only meaningful in lists mode; search mode never blocks on it.
pub fn validate_credential(credential_id: &str, mode: Mode) -> Result<(), CredentialError> {
    if !mode.config().requires_credential {
        return Ok(());
    }
    if credential_id.is_empty() {
        return Err(CredentialError::Required);
    }
    // Length in UTF-16 units, as the browser reports it for the input value
    if credential_id.encode_utf16().count() < MIN_CREDENTIAL_LEN {
        return Err(CredentialError::InvalidFormat);
    }
    Ok(())
}

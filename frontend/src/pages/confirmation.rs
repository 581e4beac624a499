use yew::prelude::*;
use yew_hooks::prelude::use_search_param;
use yew_router::prelude::*;

use crate::components::notification::{use_notice, Notice, Toast};
use crate::leads::form::SUCCESS_MESSAGE;
use crate::leads::request::Confirmation;
use crate::Route;

/// Notice shown when the thank-you view is reached with a submission.
pub fn arrival_notice(confirmation: Option<&Confirmation>) -> Option<Notice> {
    confirmation.map(|_| Notice::success(SUCCESS_MESSAGE))
}

#[function_component(ThankYou)]
pub fn thank_you() -> Html {
    let confirmation = use_location().and_then(|location| location.state::<Confirmation>());
    let notice = use_notice();

    {
        let notice = notice.clone();
        let arrival = arrival_notice(confirmation.as_deref());
        use_effect_with_deps(move |_| {
            if let Some(arrival) = arrival {
                notice.show(arrival);
            }
            || ()
        }, ());
    }

    // Only reachable right after a submission; anything else goes home
    let Some(confirmation) = confirmation else {
        log::info!("Thank-you page opened without a submission, redirecting");
        return html! { <Redirect<Route> to={Route::Home} /> };
    };

    html! {
        <div class="confirmation-page">
            <Toast notice={notice.notice()} />
            <div class="confirmation-card">
                <div class="confirmation-icon">{"✓"}</div>
                <h1>{"Request "}<span class="gradient-text">{"Received!"}</span></h1>
                <dl>
                    <dt>{"Apollo URL"}</dt>
                    <dd class="break"><a href={confirmation.source_url.clone()} target="_blank" rel="noopener noreferrer">{&confirmation.source_url}</a></dd>
                    <dt>{"Number of Leads"}</dt>
                    <dd>{format!("{}k leads", confirmation.lead_count_in_thousands)}</dd>
                    <dt>{"Email"}</dt>
                    <dd>{&confirmation.email}</dd>
                </dl>
                <h3>{"Next Steps"}</h3>
                <p>{"Check your inbox for the payment link. Your leads are delivered to the same address once the payment clears."}</p>
                <Link<Route> to={Route::Home} classes="cta-button">{"Back to Home"}</Link<Route>>
            </div>
            { confirmation_style() }
        </div>
    }
}

#[function_component(PaymentSuccess)]
pub fn payment_success() -> Html {
    let email = use_search_param("email".to_string()).unwrap_or_default();
    let tracking_id = use_search_param("tracking_id".to_string()).unwrap_or_default();

    html! {
        <div class="confirmation-page">
            <div class="confirmation-card">
                <div class="confirmation-icon">{"✓"}</div>
                <h1>{"Payment "}<span class="gradient-text">{"Successful!"}</span></h1>
                <dl>
                    <dt>{"Delivery Email"}</dt>
                    <dd>{email}</dd>
                    <dt>{"Tracking ID"}</dt>
                    <dd class="break">{&tracking_id}</dd>
                </dl>
                <h3>{"Next Steps"}</h3>
                <p>{"We are extracting your leads now. Keep your tracking ID to follow the progress of your request."}</p>
                <Link<Route> to={Route::CheckStatus} classes="cta-button">{"Track Your Request"}</Link<Route>>
            </div>
            { confirmation_style() }
        </div>
    }
}

fn confirmation_style() -> Html {
    html! {
        <style>
            {r#"
            .confirmation-page {
                min-height: 100vh;
                padding: 8rem 2rem 6rem;
                display: flex;
                align-items: center;
                justify-content: center;
                color: #fff;
            }
            .confirmation-card {
                max-width: 640px;
                width: 100%;
                text-align: center;
                background: rgba(30, 30, 30, 0.7);
                border: 1px solid rgba(204, 115, 248, 0.15);
                border-radius: 2rem;
                padding: 3rem;
                backdrop-filter: blur(10px);
            }
            .confirmation-icon {
                width: 4rem;
                height: 4rem;
                margin: 0 auto 1.5rem;
                border-radius: 50%;
                background: rgba(34, 197, 94, 0.2);
                color: #4ade80;
                font-size: 2rem;
                display: flex;
                align-items: center;
                justify-content: center;
            }
            .confirmation-card dl { text-align: left; margin: 2rem 0; }
            .confirmation-card dt { color: #999; font-size: 0.85rem; margin-top: 1rem; }
            .confirmation-card dd { margin: 0.25rem 0 0; }
            .confirmation-card .break { word-break: break-all; }
            .confirmation-card a { color: #cc73f8; }
            .confirmation-card p { color: #999; line-height: 1.6; }
            .gradient-text {
                background: linear-gradient(45deg, #cc73f8, #b44fe0);
                -webkit-background-clip: text;
                -webkit-text-fill-color: transparent;
            }
            .cta-button {
                display: inline-block;
                margin-top: 1.5rem;
                padding: 0.9rem 1.8rem;
                border-radius: 10px;
                background: linear-gradient(45deg, #cc73f8, #b44fe0);
                color: #fff !important;
                text-decoration: none;
            }
            "#}
        </style>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::notification::NoticeKind;
    use crate::config::Endpoints;
    use crate::leads::form::{LeadForm, SubmitAttempt, SubmitOutcome};
    use crate::leads::mode::Mode;
    use crate::leads::request::send_lead_request;
    use crate::webhook::testing::RecordingWebhook;
    use futures::executor::block_on;

    #[test]
    fn accepted_request_is_announced_on_the_thank_you_view() {
        let endpoints = Endpoints::from_base("https://hooks.test");
        let webhook = RecordingWebhook::default();
        let mut form = LeadForm::new(Mode::Search);
        form.set_source_url("https://app.apollo.io/#/people?page=1".to_string());
        form.set_email("buyer@example.com".to_string());

        let SubmitAttempt::Dispatch(request) = form.begin_submit() else {
            panic!("form should be eligible");
        };
        let result = block_on(send_lead_request(&webhook, &endpoints, &request));
        let SubmitOutcome::Succeeded(confirmation) = form.finish_submit(result) else {
            panic!("submission should succeed");
        };

        // Router state travels serialized through history
        let state = serde_json::to_string(&confirmation).unwrap();
        let arrived: Confirmation = serde_json::from_str(&state).unwrap();

        let notice = arrival_notice(Some(&arrived)).unwrap();
        assert_eq!(notice.kind, NoticeKind::Success);
        assert_eq!(notice.message, SUCCESS_MESSAGE);
    }

    #[test]
    fn direct_visit_raises_no_notice() {
        assert_eq!(arrival_notice(None), None);
    }
}

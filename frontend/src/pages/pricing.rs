use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::leads::pricing::{
    calculator_price, format_price, range_progress, CALCULATOR_MAX_LEADS, CALCULATOR_MIN_LEADS,
    PRICE_PER_THOUSAND,
};
use crate::pages::request_leads::PricingSelection;
use crate::Route;

const FEATURES: &[&str] = &[
    "Verified emails from Apollo.io",
    "Same filters you already use on Apollo",
    "Complete profiles with job title and company",
    "Delivery straight to your inbox",
    "No subscription, pay per request",
];

#[function_component(Pricing)]
pub fn pricing() -> Html {
    let leads = use_state(|| CALCULATOR_MIN_LEADS);
    let navigator = use_navigator();

    let on_leads = {
        let leads = leads.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let value = input
                .value()
                .parse::<u32>()
                .unwrap_or(CALCULATOR_MIN_LEADS)
                .clamp(CALCULATOR_MIN_LEADS, CALCULATOR_MAX_LEADS);
            leads.set(value);
        })
    };

    let on_get_leads = {
        let leads = leads.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(navigator) = navigator.as_ref() {
                navigator.push_with_state(
                    &Route::RequestLeads,
                    PricingSelection { initial_leads: *leads },
                );
            }
        })
    };

    let progress = range_progress(*leads, CALCULATOR_MIN_LEADS, CALCULATOR_MAX_LEADS);
    let total = calculator_price(*leads);

    html! {
        <div class="pricing-page">
            <div class="pricing-header">
                <h1>{"Simple "}<span class="gradient-text">{"Pricing"}</span></h1>
                <p>{format!("${} per 1k leads. No subscriptions, no commitments.", PRICE_PER_THOUSAND)}</p>
            </div>

            <div class="calculator-card">
                <h3>{"Calculate Your Price"}</h3>
                <p class="muted">{"Move the slider to calculate the exact price for your desired number of leads."}</p>

                <label for="calculator-leads">
                    {"Number of Leads: "}<b>{format!("{}k", *leads)}</b>
                </label>
                <input id="calculator-leads" type="range"
                    min={CALCULATOR_MIN_LEADS.to_string()}
                    max={CALCULATOR_MAX_LEADS.to_string()}
                    value={leads.to_string()}
                    oninput={on_leads}
                    style={format!("--range-progress: {}%", progress)} />
                <div class="range-labels">
                    <span>{format!("{}k leads", CALCULATOR_MIN_LEADS)}</span>
                    <span>{format!("{}k leads", CALCULATOR_MAX_LEADS)}</span>
                </div>

                <div class="price-breakdown">
                    <div><span>{"Price per 1k leads"}</span><span>{format_price(PRICE_PER_THOUSAND)}</span></div>
                    <div><span>{"Number of leads"}</span><span>{format!("{}k", *leads)}</span></div>
                    <div class="total"><span>{"Total Price"}</span><span>{format_price(total)}</span></div>
                </div>

                <p class="muted">{"Everything you need to supercharge your lead generation:"}</p>
                <ul class="feature-list">
                    { for FEATURES.iter().map(|feature| html! { <li>{feature}</li> }) }
                </ul>

                <button class="cta-button" onclick={on_get_leads}>
                    {format!("Get {}k Leads →", *leads)}
                </button>
            </div>

            <style>
                {r#"
                .pricing-page {
                    min-height: 100vh;
                    padding: 8rem 2rem 6rem;
                    color: #fff;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                }
                .pricing-header { text-align: center; margin-bottom: 3rem; }
                .pricing-header h1 { font-size: 3rem; margin-bottom: 1rem; }
                .pricing-header p, .muted { color: #999; line-height: 1.6; }
                .gradient-text {
                    background: linear-gradient(45deg, #cc73f8, #b44fe0);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }
                .calculator-card {
                    width: 100%;
                    max-width: 640px;
                    background: rgba(30, 30, 30, 0.7);
                    border: 1px solid rgba(204, 115, 248, 0.15);
                    border-radius: 16px;
                    padding: 2.5rem;
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                    backdrop-filter: blur(10px);
                }
                .calculator-card input[type="range"] {
                    accent-color: #cc73f8;
                    background: linear-gradient(to right, #cc73f8 var(--range-progress), rgba(255, 255, 255, 0.1) var(--range-progress));
                }
                .range-labels { display: flex; justify-content: space-between; color: #777; font-size: 0.85rem; }
                .price-breakdown div {
                    display: flex;
                    justify-content: space-between;
                    padding: 0.5rem 0;
                    border-bottom: 1px solid rgba(255, 255, 255, 0.05);
                }
                .price-breakdown .total { font-size: 1.5rem; color: #cc73f8; border: none; }
                .feature-list { color: #ccc; padding-left: 1.25rem; }
                .cta-button {
                    padding: 1rem;
                    border: none;
                    border-radius: 10px;
                    background: linear-gradient(45deg, #cc73f8, #b44fe0);
                    color: #fff;
                    font-size: 1.1rem;
                    cursor: pointer;
                }
                "#}
            </style>
        </div>
    }
}

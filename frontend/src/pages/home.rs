use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

const FEATURES: &[(&str, &str)] = &[
    (
        "Cost-Effective",
        "Access Apollo data at up to 80% less than standard pricing, making enterprise-grade data accessible to businesses of all sizes.",
    ),
    (
        "Fast Delivery",
        "Get your data within minutes of your request, with our high-performance scraping infrastructure.",
    ),
    (
        "Custom Filters",
        "Use the same powerful Apollo filters to target exactly the leads you need for your business.",
    ),
    (
        "Quality Assured",
        "Every record is verified and matched against Apollo's database before it reaches you.",
    ),
    (
        "Complete Profiles",
        "Get full contact information, including email, phone, job title, and social profiles.",
    ),
    (
        "Flexible Plans",
        "Choose from various packages or request custom volumes to match your exact needs.",
    ),
];

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <div class="landing">
            <section class="hero">
                <h1>
                    <span>{"Apollo Data"}</span>
                    <span class="gradient-text">{"Made Affordable"}</span>
                    <span>{"For Everyone"}</span>
                </h1>
                <p>{"Export verified leads from any Apollo.io search or saved list for $3 per thousand, delivered to your inbox."}</p>
                <div class="hero-actions">
                    <Link<Route> to={Route::RequestLeads} classes="cta-button">
                        <span>{"Request Leads"}</span>
                        <i class="arrow">{"→"}</i>
                    </Link<Route>>
                    <Link<Route> to={Route::Pricing} classes="ghost-button">
                        {"See Pricing"}
                    </Link<Route>>
                </div>
            </section>

            <section class="features">
                <h2>{"Why Choose "}<span class="gradient-text">{"ActionLeads"}</span></h2>
                <div class="feature-grid">
                    { for FEATURES.iter().map(|(title, description)| html! {
                        <div class="feature-card">
                            <h3>{*title}</h3>
                            <p>{*description}</p>
                        </div>
                    }) }
                </div>
            </section>

            <style>
                {r#"
                .landing {
                    min-height: 100vh;
                    color: #ffffff;
                    overflow-x: hidden;
                }
                .hero {
                    padding: 10rem 2rem 6rem;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    text-align: center;
                }
                .hero h1 {
                    display: flex;
                    flex-direction: column;
                    gap: 0.5rem;
                    font-size: 4rem;
                    font-weight: 700;
                }
                .hero h1 span {
                    opacity: 0;
                    animation: fadeIn 0.5s forwards;
                }
                .hero h1 span:nth-child(1) { animation-delay: 0.1s; }
                .hero h1 span:nth-child(2) { animation-delay: 0.3s; }
                .hero h1 span:nth-child(3) { animation-delay: 0.5s; }
                @keyframes fadeIn {
                    from { opacity: 0; transform: translateY(20px); }
                    to { opacity: 1; transform: translateY(0); }
                }
                .hero p { color: #bbb; font-size: 1.2rem; max-width: 640px; margin: 2rem 0; }
                .gradient-text {
                    background: linear-gradient(45deg, #cc73f8, #b44fe0);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }
                .hero-actions { display: flex; gap: 1rem; flex-wrap: wrap; justify-content: center; }
                .cta-button, .ghost-button {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.5rem;
                    padding: 1rem 2rem;
                    border-radius: 10px;
                    text-decoration: none;
                    color: #fff;
                }
                .cta-button { background: linear-gradient(45deg, #cc73f8, #b44fe0); }
                .ghost-button { border: 1px solid rgba(255, 255, 255, 0.2); }
                .arrow { font-style: normal; transition: transform 0.2s; }
                .cta-button:hover .arrow { transform: translateX(4px); }
                .features { padding: 4rem 2rem 8rem; max-width: 1200px; margin: 0 auto; }
                .features h2 { text-align: center; font-size: 2.5rem; margin-bottom: 3rem; }
                .feature-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));
                    gap: 1.5rem;
                }
                .feature-card {
                    background: rgba(30, 30, 30, 0.7);
                    border: 1px solid rgba(204, 115, 248, 0.1);
                    border-radius: 16px;
                    padding: 2rem;
                }
                .feature-card p { color: #999; line-height: 1.6; }
                @media (max-width: 768px) {
                    .hero h1 { font-size: 2.5rem; }
                }
                "#}
            </style>
        </div>
    }
}

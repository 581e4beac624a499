use yew::prelude::*;
use yew_router::prelude::*;

use crate::config::SUPPORT_EMAIL;
use crate::Route;

#[derive(PartialEq)]
struct Section {
    heading: &'static str,
    body: &'static str,
    items: &'static [&'static str],
}

#[derive(Properties, PartialEq)]
struct PolicyPageProps {
    title: &'static str,
    sections: &'static [Section],
    #[prop_or_default]
    contact_line: Option<&'static str>,
}

#[function_component(PolicyPage)]
fn policy_page(props: &PolicyPageProps) -> Html {
    html! {
        <div class="legal-content">
            <div>
                <h1>{props.title}</h1>
                { for props.sections.iter().map(|section| html! {
                    <section>
                        <h2>{section.heading}</h2>
                        if !section.body.is_empty() {
                            <p>{section.body}</p>
                        }
                        if !section.items.is_empty() {
                            <ul>
                                { for section.items.iter().map(|item| html! { <li>{*item}</li> }) }
                            </ul>
                        }
                    </section>
                }) }
                if let Some(line) = props.contact_line {
                    <section>
                        <h2>{"Contact Us"}</h2>
                        <p>
                            {line}{" "}
                            <a href={format!("mailto:{}", SUPPORT_EMAIL)}>{SUPPORT_EMAIL}</a>
                        </p>
                    </section>
                }
                <div class="legal-links">
                    <Link<Route> to={Route::Terms}>{"Terms"}</Link<Route>>
                    {" | "}
                    <Link<Route> to={Route::Privacy}>{"Privacy"}</Link<Route>>
                    {" | "}
                    <Link<Route> to={Route::Cookies}>{"Cookies"}</Link<Route>>
                    {" | "}
                    <Link<Route> to={Route::Refund}>{"Refunds"}</Link<Route>>
                    {" | "}
                    <Link<Route> to={Route::Cancellation}>{"Cancellation"}</Link<Route>>
                </div>
            </div>
            <style>
                {r#"
                .legal-content {
                    min-height: 100vh;
                    padding: 8rem 2rem 4rem;
                    color: #fff;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                }
                .legal-content > div {
                    background: rgba(30, 30, 30, 0.7);
                    border: 1px solid rgba(204, 115, 248, 0.1);
                    border-radius: 16px;
                    padding: 3rem;
                    max-width: 800px;
                    backdrop-filter: blur(10px);
                }
                .legal-content h1 {
                    font-size: 2rem;
                    text-align: center;
                    background: linear-gradient(45deg, #fff, #cc73f8);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                    margin-bottom: 2rem;
                }
                .legal-content section {
                    background: rgba(0, 0, 0, 0.2);
                    border-radius: 12px;
                    padding: 1.5rem 2rem;
                    margin: 1.5rem auto;
                }
                .legal-content h2 { color: #cc73f8; font-size: 1.3rem; margin-bottom: 1rem; }
                .legal-content p, .legal-content li { color: #999; line-height: 1.6; }
                .legal-content a { color: #cc73f8; }
                .legal-links { margin-top: 2rem; text-align: center; }
                "#}
            </style>
        </div>
    }
}

const PRIVACY: &[Section] = &[
    Section {
        heading: "Introduction",
        body: "ActionLeads (\"we\", \"our\", or \"us\") is committed to protecting your privacy. This Privacy Policy explains how we collect, use, and safeguard your personal information.",
        items: &[],
    },
    Section {
        heading: "Information We Collect",
        body: "",
        items: &[
            "Contact information (name, email address)",
            "Account credentials",
            "Payment information",
            "Communication preferences",
            "Usage data and analytics",
        ],
    },
    Section {
        heading: "How We Use Your Information",
        body: "",
        items: &[
            "Provide and improve our services",
            "Process your transactions",
            "Send you important updates",
            "Respond to your inquiries",
            "Ensure platform security",
        ],
    },
    Section {
        heading: "Information Sharing",
        body: "We do not sell your personal information. We may share your information with service providers who assist in operating our platform and processing transactions.",
        items: &[],
    },
    Section {
        heading: "Data Security",
        body: "We implement appropriate technical and organizational measures to protect your personal information against unauthorized access, alteration, disclosure, or destruction.",
        items: &[],
    },
    Section {
        heading: "Your Rights",
        body: "",
        items: &[
            "Access your personal information",
            "Correct inaccurate data",
            "Request deletion of your data",
            "Object to data processing",
            "Withdraw consent",
        ],
    },
    Section {
        heading: "Changes to This Policy",
        body: "We may update this Privacy Policy periodically. We will notify you of any material changes by posting the new Privacy Policy on this page.",
        items: &[],
    },
];

const TERMS: &[Section] = &[
    Section {
        heading: "Acceptance of Terms",
        body: "By accessing or using ActionLeads services, you agree to be bound by these Terms of Service and all applicable laws and regulations.",
        items: &[],
    },
    Section {
        heading: "Service Description",
        body: "ActionLeads provides lead generation services using Apollo.io data. We help users extract and process business contact information through our platform.",
        items: &[],
    },
    Section {
        heading: "User Responsibilities",
        body: "",
        items: &[
            "Provide accurate information when using our services",
            "Use the service in compliance with all applicable laws",
            "Maintain the confidentiality of your account credentials",
            "Not misuse or attempt to manipulate our services",
            "Respect the intellectual property rights of others",
        ],
    },
    Section {
        heading: "Payment Terms",
        body: "All payments are processed securely through our payment providers. Refunds are handled on a case-by-case basis according to our refund policy.",
        items: &[],
    },
    Section {
        heading: "Limitation of Liability",
        body: "ActionLeads is not liable for any indirect, incidental, special, consequential, or punitive damages resulting from your use of our services.",
        items: &[],
    },
    Section {
        heading: "Changes to Terms",
        body: "We reserve the right to modify these terms at any time. Continued use of our services after such modifications constitutes acceptance of the updated terms.",
        items: &[],
    },
    Section {
        heading: "Governing Law",
        body: "These terms are governed by the laws of India. Any disputes shall be subject to the exclusive jurisdiction of the courts in India.",
        items: &[],
    },
];

const COOKIES: &[Section] = &[
    Section {
        heading: "What Are Cookies",
        body: "Cookies are small text files that are placed on your computer or mobile device when you visit our website. They help us make the site work better and improve our services.",
        items: &[],
    },
    Section {
        heading: "How We Use Cookies",
        body: "",
        items: &[
            "Essential cookies for site functionality",
            "Analytics cookies to understand user behavior",
            "Authentication cookies to remember your login status",
            "Preference cookies to remember your settings",
        ],
    },
    Section {
        heading: "Managing Cookies",
        body: "Most web browsers allow you to control cookies through their settings. You can usually find these settings in the \"options\" or \"preferences\" menu of your browser.",
        items: &[],
    },
    Section {
        heading: "Third-Party Cookies",
        body: "We may use third-party services that also set cookies. These services include analytics tools and payment processing systems.",
        items: &[],
    },
    Section {
        heading: "Consent",
        body: "By using our website, you consent to the use of cookies in accordance with this policy. You can withdraw your consent at any time by adjusting your browser settings.",
        items: &[],
    },
    Section {
        heading: "Updates",
        body: "We may update this Cookie Policy from time to time. Any changes will be posted on this page with an updated revision date.",
        items: &[],
    },
];

const REFUND: &[Section] = &[
    Section {
        heading: "Refund Eligibility",
        body: "We offer refunds in specific circumstances where our service does not meet the agreed-upon deliverables or quality standards.",
        items: &[
            "Technical issues preventing data delivery",
            "Significant discrepancy in lead quality or quantity",
            "Service unavailability or extended delays",
            "Duplicate charges or billing errors",
        ],
    },
    Section {
        heading: "Non-Refundable Situations",
        body: "",
        items: &[
            "Requests cancelled after data extraction has begun",
            "Changes in business requirements after order placement",
            "Issues arising from incorrect information provided",
        ],
    },
];

const CANCELLATION: &[Section] = &[
    Section {
        heading: "Cancellation Window",
        body: "You can cancel your lead request at any time before the data extraction process begins. Once the process has started, cancellations are subject to our refund policy.",
        items: &[],
    },
    Section {
        heading: "How to Cancel",
        body: "",
        items: &[
            "Contact our support team at support@actionleads.io",
            "Provide your tracking ID and email address",
            "State your reason for cancellation",
        ],
    },
    Section {
        heading: "Automatic Cancellation",
        body: "Requests may be automatically cancelled if payment is not received within 24 hours of submission.",
        items: &[],
    },
];

#[function_component(PrivacyPolicy)]
pub fn privacy_policy() -> Html {
    html! {
        <PolicyPage title="Privacy Policy" sections={PRIVACY}
            contact_line={Some("If you have any questions about this Privacy Policy, please contact us at")} />
    }
}

#[function_component(TermsOfService)]
pub fn terms_of_service() -> Html {
    html! { <PolicyPage title="Terms of Service" sections={TERMS} /> }
}

#[function_component(CookiePolicy)]
pub fn cookie_policy() -> Html {
    html! {
        <PolicyPage title="Cookie Policy" sections={COOKIES}
            contact_line={Some("If you have any questions about our Cookie Policy, please contact us at")} />
    }
}

#[function_component(RefundPolicy)]
pub fn refund_policy() -> Html {
    html! {
        <PolicyPage title="Refund Policy" sections={REFUND}
            contact_line={Some("For refund requests or questions about our refund policy, please contact us at")} />
    }
}

#[function_component(CancellationPolicy)]
pub fn cancellation_policy() -> Html {
    html! {
        <PolicyPage title="Cancellation Policy" sections={CANCELLATION}
            contact_line={Some("For any questions about our cancellation policy, please contact us at")} />
    }
}

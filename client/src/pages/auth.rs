//! Sign-in landing page shown to signed-out visitors.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;

use crate::net::api::ApiClient;

const FEATURES: &[(&str, &str)] = &[
    ("💬", "Real-time messaging"),
    ("📹", "Video calls & meetings"),
    ("🔒", "Secure & private"),
];

/// Hosted sign-in entry point on the identity provider.
fn sign_in_url(base_url: &str) -> String {
    format!("{}/auth/sign-in", base_url.trim_end_matches('/'))
}

#[component]
pub fn AuthPage() -> impl IntoView {
    let client = expect_context::<ApiClient>();
    let href = sign_in_url(&client.config().base_url);

    view! {
        <div class="auth-container">
            <div class="auth-left">
                <div class="auth-hero">
                    <div class="brand-container">
                        <img src="/logo.png" alt="Chatter" class="brand-logo"/>
                        <span class="brand-name">"Chatter"</span>
                    </div>

                    <h1 class="hero-title">"Where Work Happens ✨"</h1>
                    <p class="hero-subtitle">
                        "Connect with your team instantly through secure, real-time messaging. "
                        "Experience seamless collaboration with powerful features designed for modern teams."
                    </p>

                    <div class="features-list">
                        {FEATURES
                            .iter()
                            .map(|(icon, text)| view! {
                                <div class="feature-item">
                                    <span class="feature-icon">{*icon}</span>
                                    <span class="feature-text">{*text}</span>
                                </div>
                            })
                            .collect_view()}
                    </div>

                    <a href=href class="cta-button">
                        "Get Started with Chatter " <span class="button-arrow">"→"</span>
                    </a>
                </div>
            </div>

            <div class="auth-right">
                <div class="auth-image-container">
                    <img src="/auth-i.png" alt="Team collaboration" class="auth-image"/>
                    <div class="image-overlay"></div>
                </div>
            </div>
        </div>
    }
}

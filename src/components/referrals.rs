//! Referrals Page
//!
//! Referral link with clipboard copy, stat cards, campaign table and the
//! program benefits section. The copy button flips to a short-lived
//! "Copied" confirmation once the clipboard promise resolves.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen_futures::JsFuture;

use crate::fixtures;

#[component]
pub fn ReferralsPage() -> impl IntoView {
    let stats = fixtures::referral_stats();
    let campaigns = fixtures::campaigns();

    let (copied, set_copied) = signal(false);
    let link = stats.link.clone();
    let copy_link = move |_| {
        let link = link.clone();
        spawn_local(async move {
            let clipboard = window().navigator().clipboard();
            if JsFuture::from(clipboard.write_text(&link)).await.is_ok() {
                set_copied.set(true);
                gloo_timers::future::TimeoutFuture::new(2_000).await;
                set_copied.set(false);
            }
        });
    };

    view! {
        <div class="page">
            <header class="page-header">
                <div>
                    <h1>"Referrals"</h1>
                    <p class="muted">"Grow your client base and earn rewards"</p>
                </div>
            </header>

            <div class="card">
                <h2>"Your Referral Link"</h2>
                <p class="muted">"Share this link to invite new clients"</p>
                <div class="link-row">
                    <input type="text" readonly prop:value=stats.link.clone() />
                    <button class="primary" on:click=copy_link>
                        {move || if copied.get() { "Copied" } else { "Copy" }}
                    </button>
                    <button class="outline">"Share"</button>
                </div>
            </div>

            <div class="card-grid stats">
                <div class="card stat-card">
                    <p class="muted small">"Total Clicks"</p>
                    <p class="value">{stats.clicks}</p>
                    <p class="muted small">"Link visits"</p>
                </div>
                <div class="card stat-card">
                    <p class="muted small">"Signups"</p>
                    <p class="value">{stats.signups}</p>
                    <p class="muted small">"New accounts created"</p>
                </div>
                <div class="card stat-card">
                    <p class="muted small">"Conversions"</p>
                    <p class="value">{stats.conversions}</p>
                    <p class="muted small">"Paying clients"</p>
                </div>
                <div class="card stat-card">
                    <p class="muted small">"Conversion Rate"</p>
                    <p class="value">{format!("{}%", stats.conversion_rate)}</p>
                    <p class="trend-positive small">"+5% from last month"</p>
                </div>
            </div>

            <div class="card">
                <header class="row">
                    <div>
                        <h2>"Campaign Tracking"</h2>
                        <p class="muted">"Monitor performance of different referral campaigns"</p>
                    </div>
                    <button class="primary">"Create Campaign"</button>
                </header>
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"Campaign Name"</th>
                            <th>"Clicks"</th>
                            <th>"Signups"</th>
                            <th>"Conversions"</th>
                            <th>"Status"</th>
                            <th>"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {campaigns
                            .iter()
                            .map(|campaign| {
                                view! {
                                    <tr>
                                        <td>{campaign.name.clone()}</td>
                                        <td>{campaign.clicks}</td>
                                        <td>{campaign.signups}</td>
                                        <td>{campaign.conversions}</td>
                                        <td>
                                            <span class=format!(
                                                "status-badge {}",
                                                campaign.status,
                                            )>{campaign.status.clone()}</span>
                                        </td>
                                        <td>
                                            <button class="ghost small">"View Details"</button>
                                        </td>
                                    </tr>
                                }
                            })
                            .collect_view()}
                    </tbody>
                </table>
            </div>

            <div class="card">
                <h2>"Referral Program Benefits"</h2>
                <div class="benefit-grid">
                    <div class="benefit">
                        <p>"Grow Your Network"</p>
                        <p class="muted small">
                            "Invite unlimited clients and expand your fitness community"
                        </p>
                    </div>
                    <div class="benefit">
                        <p>"Earn Rewards"</p>
                        <p class="muted small">
                            "Get 10% commission on all referred client subscriptions"
                        </p>
                    </div>
                    <div class="benefit">
                        <p>"Track Performance"</p>
                        <p class="muted small">
                            "Monitor your referrals with detailed analytics and insights"
                        </p>
                    </div>
                </div>
            </div>
        </div>
    }
}

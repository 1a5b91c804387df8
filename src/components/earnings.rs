//! Earnings Page
//!
//! Revenue summary cards, the 6-month earnings chart, the transaction
//! table and the payout-account card.

use leptos::prelude::*;

use super::charts::BarChart;
use crate::fixtures;

#[component]
pub fn EarningsPage() -> impl IntoView {
    let monthly = fixtures::monthly_earnings();
    let transactions = fixtures::transactions();

    let labels: Vec<String> = monthly.iter().map(|p| p.month.clone()).collect();
    let values: Vec<f64> = monthly.iter().map(|p| p.amount as f64).collect();

    view! {
        <div class="page">
            <header class="page-header">
                <div>
                    <h1>"Earnings & Payouts"</h1>
                    <p class="muted">"Track your revenue and manage payouts"</p>
                </div>
                <button class="primary">"Connect Payout Account"</button>
            </header>

            <div class="card-grid stats">
                <div class="card stat-card">
                    <p class="muted small">"Total Earnings"</p>
                    <p class="value">"$42,580"</p>
                    <p class="muted small">"All time"</p>
                </div>
                <div class="card stat-card">
                    <p class="muted small">"Monthly Earnings"</p>
                    <p class="value">"$7,200"</p>
                    <p class="trend-positive small">"+15% from last month"</p>
                </div>
                <div class="card stat-card">
                    <p class="muted small">"Pending Payouts"</p>
                    <p class="value">"$2,400"</p>
                    <p class="muted small">"Available in 3 days"</p>
                </div>
                <div class="card stat-card">
                    <p class="muted small">"Avg. Transaction"</p>
                    <p class="value">"$118"</p>
                    <p class="muted small">"Per client"</p>
                </div>
            </div>

            <div class="card">
                <h2>"Earnings Trend"</h2>
                <p class="muted">"Monthly earnings over the past 6 months"</p>
                <BarChart labels=labels values=values />
            </div>

            <div class="card">
                <header class="row">
                    <div>
                        <h2>"Recent Transactions"</h2>
                        <p class="muted">"Your latest payments and earnings"</p>
                    </div>
                    <button class="outline small">"Export"</button>
                </header>
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"Date"</th>
                            <th>"Client/Program"</th>
                            <th>"Type"</th>
                            <th>"Amount"</th>
                            <th>"Status"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {transactions
                            .iter()
                            .map(|tx| {
                                view! {
                                    <tr>
                                        <td>{tx.date.clone()}</td>
                                        <td>{tx.client.clone()}</td>
                                        <td>{tx.kind.clone()}</td>
                                        <td>{format!("${}", tx.amount)}</td>
                                        <td>
                                            <span class=format!(
                                                "status-badge {}",
                                                tx.status,
                                            )>{tx.status.clone()}</span>
                                        </td>
                                    </tr>
                                }
                            })
                            .collect_view()}
                    </tbody>
                </table>
            </div>

            <div class="card">
                <h2>"Payout Account"</h2>
                <p class="muted">"Connect your bank account to receive payouts"</p>
                <div class="highlight-row">
                    <div>
                        <p>"No payout account connected"</p>
                        <p class="muted small">"Connect with Stripe to receive payments"</p>
                    </div>
                    <button class="primary">"Connect Stripe"</button>
                </div>
            </div>
        </div>
    }
}

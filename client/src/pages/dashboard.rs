//! Reporting view: verification breakdown, daily volume and recent results.
//!
//! SYSTEM CONTEXT
//! ==============
//! Not linked from the header. The report is requested once per mount from
//! the gateway; during SSR the page renders its loading line and the
//! browser fills it in after hydration.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use wire::{DashboardData, RecentResult, VerdictTone};

use crate::net::api::ApiConfig;
use crate::state::dashboard::{DashboardState, bar_heights, slice_shares};

#[component]
pub fn DashboardPage() -> impl IntoView {
    let api = use_context::<ApiConfig>().unwrap_or_default();
    let state = RwSignal::new(DashboardState::default());

    #[cfg(feature = "hydrate")]
    {
        let url = api.dashboard_url();
        leptos::task::spawn_local(async move {
            let outcome = crate::net::api::fetch_dashboard(&url).await;
            if let Err(e) = &outcome {
                log::warn!("dashboard fetch failed: {e}");
            }
            state.update(|s| s.apply(outcome));
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = api;

    view! {
        <section class="page dashboard">
            <h1 class="page__title">"Verification Dashboard"</h1>
            <DashboardBody state=state/>
        </section>
    }
}

/// Body of the reporting view for the given load state.
#[component]
pub fn DashboardBody(#[prop(into)] state: Signal<DashboardState>) -> impl IntoView {
    move || {
        let current = state.get();
        if current.loading {
            return view! { <p class="dashboard__status">"Loading dashboard..."</p> }.into_any();
        }
        match (current.data, current.error) {
            (Some(data), _) => report_view(data).into_any(),
            (None, Some(message)) => view! {
                <p class="dashboard__status dashboard__status--error" role="alert">{message}</p>
            }
            .into_any(),
            (None, None) => ().into_any(),
        }
    }
}

fn report_view(data: DashboardData) -> impl IntoView {
    let shares = slice_shares(&data.pie_data);
    let bars = bar_heights(&data.bar_data);
    view! {
        <div class="dashboard__grid">
            <div class="card">
                <h2 class="card__title">"Verification Breakdown"</h2>
                <ul class="breakdown">
                    {shares
                        .into_iter()
                        .map(|share| {
                            let tone = VerdictTone::of(&share.name).modifier();
                            view! {
                                <li class=format!("breakdown__row breakdown__row--{tone}")>
                                    <span class="breakdown__name">{share.name}</span>
                                    <span class="breakdown__meter">
                                        <span
                                            class="breakdown__fill"
                                            style=format!("width: {}%", share.percent)
                                        ></span>
                                    </span>
                                    <span class="breakdown__value">
                                        {format!("{} ({}%)", share.value, share.percent)}
                                    </span>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </div>
            <div class="card">
                <h2 class="card__title">"Verifications per Day"</h2>
                <div class="bars">
                    {bars
                        .into_iter()
                        .map(|(day, count, height)| {
                            let title = format!("{day}: {count}");
                            view! {
                                <div class="bars__col" title=title>
                                    <span class="bars__count">{count}</span>
                                    <span class="bars__bar" style=format!("height: {height}%")></span>
                                    <span class="bars__day">{day}</span>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
        <div class="card dashboard__recent">
            <h2 class="card__title">"Recent Verifications"</h2>
            <table class="recent">
                <thead>
                    <tr>
                        <th>"ID"</th>
                        <th>"News Snippet"</th>
                        <th>"Status"</th>
                    </tr>
                </thead>
                <tbody>{data.recent_results.into_iter().map(recent_row).collect_view()}</tbody>
            </table>
        </div>
    }
}

fn recent_row(row: RecentResult) -> impl IntoView {
    let tone = VerdictTone::of(&row.status).modifier();
    view! {
        <tr>
            <td>{row.id}</td>
            <td>{row.text}</td>
            <td class=format!("recent__status recent__status--{tone}")>{row.status}</td>
        </tr>
    }
}

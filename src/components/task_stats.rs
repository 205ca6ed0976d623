//! Task Stats Component

use leptos::prelude::*;

use crate::models::Task;
use crate::stats::TaskStats;

/// Counts per state plus a completion bar
#[component]
pub fn TaskStatsPanel(#[prop(into)] tasks: Signal<Vec<Task>>) -> impl IntoView {
    let stats = Memo::new(move |_| tasks.with(|t| TaskStats::from_tasks(t)));

    view! {
        <div class="task-stats">
            <div class="stat-card">
                <p class="stat-label">"Total Tasks"</p>
                <p class="stat-value">{move || stats.get().total}</p>
            </div>
            <div class="stat-card not-started">
                <p class="stat-label">"Not Started"</p>
                <p class="stat-value">{move || stats.get().not_started}</p>
            </div>
            <div class="stat-card in-progress">
                <p class="stat-label">"In Progress"</p>
                <p class="stat-value">{move || stats.get().in_progress}</p>
            </div>
            <div class="stat-card completed">
                <p class="stat-label">"Completed"</p>
                <p class="stat-value">{move || stats.get().completed}</p>
            </div>

            <Show when=move || { stats.get().total > 0 }>
                <div class="completion">
                    <div class="completion-header">
                        <p class="stat-label">"Completion Rate"</p>
                        <p class="completion-value">{move || format!("{}%", stats.get().completion_rate())}</p>
                    </div>
                    <div class="completion-track">
                        <div
                            class="completion-fill"
                            style=move || format!("width: {}%;", stats.get().completion_rate())
                        ></div>
                    </div>
                </div>
            </Show>
        </div>
    }
}

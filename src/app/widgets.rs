use leptos::prelude::*;

use crate::portfolio::{level_label, skill_width_style, Metric};

#[component]
pub fn SkillBar(skill: &'static str, level: u8) -> impl IntoView {
    view! {
        <div class="mb-4">
            <div class="flex justify-between mb-1">
                <span class="text-base font-medium text-blue-100">{skill}</span>
                <span class="text-sm font-medium text-blue-100">{level_label(level)}</span>
            </div>
            <div class="w-full bg-gray-700 rounded-full h-2.5">
                <div class="bg-blue-600 h-2.5 rounded-full" style=skill_width_style(level)></div>
            </div>
        </div>
    }
}

#[component]
pub fn ProjectCard(
    title: &'static str,
    description: &'static str,
    tags: &'static [&'static str],
) -> impl IntoView {
    view! {
        <div class="bg-gray-800 rounded-lg p-6 shadow-lg hover:shadow-xl transition-shadow">
            <h4 class="text-xl font-semibold mb-2">{title}</h4>
            <p class="text-gray-300 mb-4">{description}</p>
            <div class="flex flex-wrap gap-2">
                {tags
                    .iter()
                    .map(|tag| {
                        view! {
                            <span class="bg-blue-600 text-xs font-semibold px-2 py-1 rounded">
                                {*tag}
                            </span>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
pub fn SecurityMetric(metric: Metric) -> impl IntoView {
    let Metric { icon, title, value } = metric;
    view! {
        <div class="bg-gray-800 rounded-lg p-4 flex items-center">
            <span class="text-2xl text-blue-400">{icon}</span>
            <div class="ml-4">
                <h4 class="text-lg font-semibold">{title}</h4>
                <p class="text-2xl font-bold text-blue-400">{value}</p>
            </div>
        </div>
    }
}

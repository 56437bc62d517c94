use common::{Anchor, FEATURE_GROUPS, Icon, PREVIEW_PANELS, PROJECT_NAME, PROJECT_URL, TECH_STACK};
use yew::prelude::*;

use super::{FeatureCard, Preview, TechStack};
use crate::components::icon::IconSvg;

#[function_component(ProjectShowcase)]
pub fn project_showcase() -> Html {
    log::trace!("Rendering showcase with {} feature groups", FEATURE_GROUPS.len());

    let tags: Vec<AttrValue> = TECH_STACK.iter().map(|&tag| AttrValue::Static(tag)).collect();

    html! {
        <section id={Anchor::Project.id()} class="py-20 px-6 max-w-5xl mx-auto">
            <div class="mb-12">
                <div class="flex items-center gap-3 mb-4">
                    <h2 class="text-3xl font-bold text-white">{ PROJECT_NAME }</h2>
                    <span class="px-2 py-0.5 text-xs font-medium bg-zinc-800 text-zinc-300 rounded border border-zinc-700">{"Flagship Project"}</span>
                </div>
                <p class="text-xl text-zinc-400 max-w-3xl">
                    {"A focus and study management app designed to help users stay consistent, reduce distractions, and track meaningful progress. It combines structured study workflows with anti-distraction systems."}
                </p>
                <div class="mt-6">
                    <a
                        href={PROJECT_URL}
                        target="_blank"
                        rel="noreferrer"
                        class="inline-flex items-center gap-2 text-indigo-400 hover:text-indigo-300 font-medium transition-colors border-b border-indigo-400/30 pb-0.5 hover:border-indigo-300"
                    >
                        {"Visit Live App"}
                        <IconSvg icon={Icon::ExternalLink} size={16} />
                    </a>
                </div>
            </div>

            <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-6 mb-20">
                { for FEATURE_GROUPS.iter().map(|group| html! {
                    <FeatureCard
                        key={group.title}
                        icon={group.icon}
                        title={group.title}
                        items={group.items.iter().map(|&item| AttrValue::Static(item)).collect::<Vec<_>>()}
                    />
                }) }
            </div>

            <TechStack {tags} />

            <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                { for PREVIEW_PANELS.iter().map(|&panel| html! { <Preview {panel} /> }) }
            </div>
        </section>
    }
}

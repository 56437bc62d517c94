use common::Icon;
use yew::prelude::*;

use crate::components::icon::IconSvg;

#[derive(Properties, PartialEq)]
pub struct FeatureCardProps {
    pub icon: Icon,
    pub title: AttrValue,
    #[prop_or_default]
    pub items: Vec<AttrValue>,
}

/// One capability group: icon, title and a bulleted list.
#[function_component(FeatureCard)]
pub fn feature_card(props: &FeatureCardProps) -> Html {
    html! {
        <div
            data-role="feature-card"
            class="p-6 bg-zinc-900/30 border border-white/5 rounded-2xl hover:bg-zinc-900/50 hover:border-white/10 transition-all duration-300"
        >
            <div class="mb-4 p-3 bg-zinc-950 rounded-xl inline-block border border-white/5">
                <IconSvg icon={props.icon} class={classes!(props.icon.accent_class())} />
            </div>
            <h3 data-role="feature-title" class="text-lg font-semibold text-white mb-4">{ &props.title }</h3>
            <ul class="space-y-2">
                { for props.items.iter().map(|item| html! {
                    <li data-role="feature-item" class="flex items-start gap-2 text-sm text-zinc-400">
                        <span class="mt-1.5 w-1 h-1 bg-zinc-600 rounded-full shrink-0"></span>
                        { item }
                    </li>
                }) }
            </ul>
        </div>
    }
}

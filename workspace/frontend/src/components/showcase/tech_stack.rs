use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TechStackProps {
    pub tags: Vec<AttrValue>,
}

#[function_component(TechStack)]
pub fn tech_stack(props: &TechStackProps) -> Html {
    html! {
        <div class="mb-20">
            <h3 class="text-sm font-mono text-zinc-500 uppercase tracking-wider mb-6">{"Tech Stack"}</h3>
            <div class="flex flex-wrap gap-3">
                { for props.tags.iter().map(|tag| html! {
                    <span
                        key={tag.as_str()}
                        data-role="tech-tag"
                        class="px-4 py-2 bg-zinc-900 border border-zinc-800 rounded-lg text-zinc-300 text-sm font-medium"
                    >
                        { tag }
                    </span>
                }) }
            </div>
        </div>
    }
}

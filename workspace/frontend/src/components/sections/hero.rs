use common::{Icon, PROJECT_URL};
use yew::prelude::*;

use crate::components::icon::IconSvg;
use crate::theme::HERO_ENTER_CLASS;

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub on_view_project: Callback<MouseEvent>,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    html! {
        <section class="pt-32 pb-20 px-6 max-w-5xl mx-auto">
            <div class={classes!("max-w-3xl", HERO_ENTER_CLASS)}>
                <div class="inline-block px-3 py-1 mb-6 text-xs font-medium tracking-wide text-indigo-300 uppercase bg-indigo-500/10 rounded-full border border-indigo-500/20">
                    {"Frontend Developer"}
                </div>
                <h1 class="text-5xl md:text-7xl font-bold text-white tracking-tight leading-[1.1] mb-6">
                    {"I like to code and build "}
                    <span class="text-transparent bg-clip-text bg-gradient-to-r from-indigo-400 to-purple-400">{"clean, focused"}</span>
                    {" web experiences."}
                </h1>
                <p class="text-xl text-zinc-400 leading-relaxed max-w-2xl mb-10">
                    {"Frontend-focused developer building modern, usable interfaces with attention to flow, clarity, and discipline."}
                </p>
                <div class="flex flex-wrap gap-4">
                    <button
                        type="button"
                        onclick={props.on_view_project.clone()}
                        class="px-8 py-3 bg-white text-zinc-950 font-semibold rounded-full hover:bg-zinc-200 transition-colors"
                    >
                        {"View Project"}
                    </button>
                    <a
                        href={PROJECT_URL}
                        target="_blank"
                        rel="noreferrer"
                        class="px-8 py-3 bg-zinc-800 text-white font-medium rounded-full border border-zinc-700 hover:bg-zinc-700 transition-colors flex items-center gap-2"
                    >
                        {"Live Demo"}
                        <IconSvg icon={Icon::ExternalLink} size={16} />
                    </a>
                </div>
            </div>
        </section>
    }
}

use common::{Anchor, CONTACT, Icon};
use yew::prelude::*;

use crate::components::icon::IconSvg;

#[function_component(Contact)]
pub fn contact() -> Html {
    html! {
        <section id={Anchor::Contact.id()} class="py-24 px-6 max-w-5xl mx-auto border-t border-white/5">
            <div class="max-w-2xl">
                <h2 class="text-3xl font-bold text-white mb-6">{"Let's work together."}</h2>
                <p class="text-xl text-zinc-400 mb-10">
                    {"If you're looking for clean, focused, and usable web experiences, let's talk. I'm currently open to freelance projects and opportunities."}
                </p>
                <a
                    href={CONTACT.href()}
                    class="inline-flex items-center gap-3 px-8 py-4 bg-white text-zinc-950 font-semibold rounded-full hover:bg-zinc-200 transition-colors"
                >
                    <IconSvg icon={Icon::Mail} size={20} />
                    {"Message Me"}
                </a>
            </div>
        </section>
    }
}

use yew::prelude::*;

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <section class="py-20 px-6 max-w-5xl mx-auto border-t border-white/5">
            <div class="grid md:grid-cols-[1fr_2fr] gap-12">
                <h2 class="text-sm font-mono text-zinc-500 uppercase tracking-wider">{"About Me"}</h2>
                <p class="text-lg md:text-xl text-zinc-300 leading-relaxed">
                    {"I build clean, modern websites and web apps with a focus on usability, structure, and flow. "}
                    {"I enjoy working on systems that help people stay focused and organized. "}
                    {"My approach is grounded in simplicity\u{2014}removing the unnecessary to let the essential function shine."}
                </p>
            </div>
        </section>
    }
}

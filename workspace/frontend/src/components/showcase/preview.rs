use common::PreviewPanel;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PreviewProps {
    pub panel: PreviewPanel,
}

/// Decorative stand-in for a product screenshot.
#[function_component(Preview)]
pub fn preview(props: &PreviewProps) -> Html {
    let panel = props.panel;

    html! {
        <div
            data-role="preview-panel"
            class="group relative aspect-video bg-zinc-900 rounded-xl border border-zinc-800 overflow-hidden hover:border-zinc-700 transition-colors"
        >
            { body(panel) }
            <div class="absolute bottom-0 left-0 right-0 p-4 bg-gradient-to-t from-zinc-950 to-transparent opacity-0 group-hover:opacity-100 transition-opacity">
                <span class="text-sm font-medium text-white">{ panel.caption() }</span>
            </div>
        </div>
    }
}

fn body(panel: PreviewPanel) -> Html {
    match panel {
        PreviewPanel::Dashboard => html! {
            <div class="absolute inset-0 flex flex-col p-6">
                <div class="flex gap-4 mb-6">
                    { for ["", "delay-75", "delay-150", "delay-200"].into_iter().map(|delay| html! {
                        <div class={classes!("w-1/4", "h-24", "bg-zinc-800/50", "rounded-lg", "animate-pulse", delay)}></div>
                    }) }
                </div>
                <div class="flex-1 bg-zinc-800/30 rounded-lg border border-zinc-800/50 p-4">
                    <div class="w-1/3 h-4 bg-zinc-700/50 rounded mb-4"></div>
                    <div class="w-full h-2 bg-zinc-700/30 rounded mb-2"></div>
                    <div class="w-2/3 h-2 bg-zinc-700/30 rounded"></div>
                </div>
            </div>
        },
        PreviewPanel::FocusTimer => html! {
            <div class="absolute inset-0 flex items-center justify-center">
                <div class="w-48 h-48 rounded-full border-4 border-indigo-500/20 flex items-center justify-center relative">
                    <div class="text-4xl font-mono font-bold text-white">{"25:00"}</div>
                    <div class="absolute -bottom-8 text-sm text-zinc-500 uppercase tracking-widest">{"Focus"}</div>
                </div>
            </div>
        },
        PreviewPanel::TaskBoard => html! {
            <div class="absolute inset-0 p-6 grid grid-cols-3 gap-4">
                { for panel.board_columns().iter().map(|&cards| html! {
                    <div class="bg-zinc-800/30 rounded-lg border border-zinc-800/50 p-3">
                        <div class="w-12 h-2 bg-zinc-600/50 rounded mb-3"></div>
                        if cards > 0 {
                            <div class="space-y-2">
                                { for (0..cards).map(|_| html! {
                                    <div class="h-8 bg-zinc-700/20 rounded border border-zinc-700/30"></div>
                                }) }
                            </div>
                        }
                    </div>
                }) }
            </div>
        },
        PreviewPanel::Analytics => html! {
            <div class="absolute inset-0 p-6 flex items-end justify-between gap-2">
                { for panel.bar_heights().iter().map(|height| html! {
                    <div
                        class="w-full bg-indigo-500/20 rounded-t-sm hover:bg-indigo-500/40 transition-colors"
                        style={format!("height: {}%", height)}
                    ></div>
                }) }
            </div>
        },
    }
}

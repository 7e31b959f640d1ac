use leptos::prelude::*;
use restsec_core::content::{FlowArrow, FlowNode, SecurityFlows};
use restsec_core::text;

use super::icons::{ArrowHead, Icon};
use super::palette::ToneClasses;

/// Tabbed security flows: architecture strip plus numbered steps.
#[component]
pub fn SecurityFlowList(flows: &'static SecurityFlows) -> impl IntoView {
    let (tab, set_tab) = signal(0usize);

    let tabs = flows
        .flows
        .iter()
        .enumerate()
        .map(|(i, flow)| {
            let tone = flow.diagram.tone;
            let class = move || {
                if tab.get() == i {
                    format!("px-4 py-2 rounded-lg border-2 text-xs font-bold transition-all duration-200 {}", tone.solid())
                } else {
                    "px-4 py-2 rounded-lg border-2 text-xs font-bold transition-all duration-200 bg-white text-slate-600 border-slate-200 hover:border-slate-300".to_string()
                }
            };
            view! {
                <button class=class on:click=move |_| set_tab.set(i)>
                    <span class="flex items-center gap-1.5">
                        <span class=move || if tab.get() == i { "w-1.5 h-1.5 rounded-full bg-white" } else { "w-1.5 h-1.5 rounded-full bg-slate-300" }></span>
                        {text::clean(flow.name)}
                    </span>
                </button>
            }
        })
        .collect_view();

    let body = move || {
        let Some(flow) = flows.flows.get(tab.get()) else {
            return ().into_any();
        };
        let diagram = &flow.diagram;
        let badge_color = diagram.arrows.first().map_or("#3b82f6", |a| a.tone.hex());

        view! {
            <div class="animate-rise">
                <div class=format!("rounded-2xl border-2 p-6 mb-4 {}", diagram.tone.card())>
                    <p class="text-[10px] font-bold text-slate-400 uppercase tracking-widest mb-6">
                        {flows.diagram_label}
                    </p>
                    <div class="overflow-x-auto">
                        <div class="flex flex-row items-center min-w-max mx-auto w-fit pb-2">
                            {diagram
                                .nodes
                                .iter()
                                .enumerate()
                                .map(|(i, node)| view! {
                                    {(i > 0).then(|| diagram.arrows.get(i - 1).map(|arrow| view! { <ArrowLink arrow=arrow /> }))}
                                    <NodeBox node=node />
                                })
                                .collect_view()}
                        </div>
                    </div>
                </div>

                <div class="rounded-xl border border-slate-200 bg-white overflow-hidden shadow-sm">
                    <div class="px-4 py-3 border-b border-slate-100 bg-slate-50">
                        <p class="font-black text-slate-800 text-sm">{text::clean(flow.name)}</p>
                    </div>
                    <div class="divide-y divide-slate-100">
                        {flow
                            .steps
                            .iter()
                            .enumerate()
                            .map(|(i, step)| view! {
                                <div class="flex items-start gap-3 px-4 py-3 hover:bg-slate-50 transition-colors">
                                    <span
                                        class="w-6 h-6 rounded-full text-white text-[10px] font-black flex items-center justify-center flex-shrink-0 shadow-sm"
                                        style=format!("background: {badge_color}")
                                    >
                                        {i + 1}
                                    </span>
                                    <p class="text-slate-600 text-sm leading-relaxed pt-0.5">{text::clean(step)}</p>
                                </div>
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        }
        .into_any()
    };

    view! {
        <h2 class="text-2xl md:text-3xl font-black text-slate-900 mb-6">{text::clean(flows.title)}</h2>
        <div class="flex flex-wrap gap-2 mb-6">{tabs}</div>
        {body}
    }
}

/// One participant in the architecture strip.
#[component]
fn NodeBox(node: &'static FlowNode) -> impl IntoView {
    let container = format!(
        "flex flex-col items-center gap-2 p-3 rounded-xl border-2 w-[120px] flex-shrink-0 {}",
        node.tone.card()
    );
    let label = format!("font-black text-xs leading-tight {}", node.tone.ink());

    view! {
        <div class=container>
            <div class="w-10 h-10 rounded-lg bg-white/70 flex items-center justify-center shadow-sm">
                <Icon glyph=node.glyph class=format!("w-5 h-5 {}", node.tone.ink()) />
            </div>
            <div class="text-center">
                <p class=label>{node.label}</p>
                {(!node.sublabel.is_empty()).then(|| view! {
                    <p class="text-[9px] text-slate-400 mt-0.5">{node.sublabel}</p>
                })}
            </div>
        </div>
    }
}

/// Horizontal connector with its label underneath.
#[component]
fn ArrowLink(arrow: &'static FlowArrow) -> impl IntoView {
    view! {
        <div class="flex flex-col items-center gap-1 flex-shrink-0 px-1">
            <div class="flex items-center" style=format!("color: {}", arrow.tone.hex())>
                <div class="w-10 h-0.5 bg-current"></div>
                <ArrowHead />
            </div>
            {(!arrow.label.is_empty()).then(|| view! {
                <span class="text-[9px] font-bold text-slate-400 uppercase tracking-wider whitespace-nowrap">
                    {arrow.label}
                </span>
            })}
        </div>
    }
}

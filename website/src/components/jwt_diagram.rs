use leptos::prelude::*;
use restsec_core::content::{toggle_part, JwtDiagram, JwtLabels};
use restsec_core::text;

use super::icons::{ArrowHead, Icon};
use super::palette::ToneClasses;

/// Clickable Header / Payload / Signature boxes over a token preview.
#[component]
pub fn JwtDiagramSection(
    diagram: &'static JwtDiagram,
    token: &'static [&'static str],
    labels: &'static JwtLabels,
) -> impl IntoView {
    let (inspected, set_inspected) = signal(None::<usize>);

    let segments = token
        .iter()
        .enumerate()
        .map(|(i, segment)| {
            let ink = diagram.parts.get(i).map_or("text-slate-300", |p| p.tone.on_dark());
            let class = move || {
                let focus = if inspected.get() == Some(i) { "bg-white/10 rounded" } else { "" };
                format!("px-2 py-2.5 transition-all duration-300 break-all {ink} {focus}")
            };
            view! {
                {(i > 0).then(|| view! { <span class="px-0 py-2.5 text-slate-500">"."</span> })}
                <span class=class>{*segment}</span>
            }
        })
        .collect_view();

    let boxes = diagram
        .parts
        .iter()
        .enumerate()
        .map(|(i, part)| {
            let class = move || {
                let ring = if inspected.get() == Some(i) {
                    "ring-2 ring-offset-2 ring-blue-500 -translate-y-1 shadow-xl"
                } else {
                    "hover:-translate-y-1 hover:shadow-xl"
                };
                format!(
                    "relative flex flex-col items-center gap-2 p-4 rounded-2xl border-2 w-full transition-all duration-200 {} {ring}",
                    part.tone.card()
                )
            };
            view! {
                {(i > 0).then(|| view! {
                    <div class="rotate-90 sm:rotate-0 flex items-center px-1 flex-shrink-0" style=format!("color: {}", part.tone.hex())>
                        <div class="w-10 h-0.5 bg-current"></div>
                        <ArrowHead />
                    </div>
                })}
                <div class="w-36">
                    <button class=class on:click=move |_| set_inspected.update(|current| *current = toggle_part(*current, i))>
                        <span class="absolute -top-3 -right-3 w-6 h-6 rounded-full bg-slate-800 text-white text-[10px] font-black flex items-center justify-center shadow">
                            {part.step}
                        </span>
                        <div class="w-12 h-12 rounded-xl bg-white/60 flex items-center justify-center shadow-inner">
                            <Icon glyph=part.glyph class=format!("w-[22px] h-[22px] {}", part.tone.ink()) />
                        </div>
                        <div class="text-center">
                            <p class="font-black text-sm leading-tight">{part.label}</p>
                            <p class="text-[10px] font-semibold opacity-60 uppercase tracking-wider mt-0.5">{part.sublabel}</p>
                        </div>
                    </button>
                </div>
            }
        })
        .collect_view();

    let detail = move || match inspected.get().and_then(|i| diagram.parts.get(i)) {
        Some(part) => view! {
            <div class=format!("rounded-xl border-2 p-5 animate-rise {}", part.tone.panel())>
                <p class="text-[10px] font-black uppercase tracking-widest mb-1.5 opacity-60">
                    {format!("Part {} \u{2014} {}", part.step, part.label)}
                </p>
                <p class="text-sm font-medium leading-relaxed">{text::clean(part.detail)}</p>
            </div>
        }
        .into_any(),
        None => view! {
            <p class="text-center text-slate-400 text-xs py-2">{labels.empty_hint}</p>
        }
        .into_any(),
    };

    view! {
        <div class="flex items-start justify-between gap-4 mb-2 flex-wrap">
            <h2 class="text-2xl md:text-3xl font-black text-slate-900">{text::clean(diagram.title)}</h2>
            <span class="px-3 py-1 rounded-full bg-slate-100 border border-slate-200 text-[10px] font-bold text-slate-500 uppercase tracking-wider">
                {labels.inspect_hint}
            </span>
        </div>
        <p class="text-slate-500 text-sm mb-6 leading-relaxed">{text::clean(diagram.description)}</p>

        <div class="mb-6">
            <p class="text-[10px] font-bold text-slate-400 uppercase tracking-widest mb-2">{labels.preview}</p>
            <div class="flex flex-wrap items-stretch rounded-xl overflow-hidden border-2 border-slate-700 bg-slate-900 font-mono text-xs shadow-xl">
                {segments}
            </div>
        </div>

        <div class="relative p-5 rounded-2xl border-2 border-dashed border-slate-300 bg-slate-50 mb-4">
            <p class="text-[10px] font-bold text-slate-400 uppercase tracking-widest mb-5">{labels.structure}</p>
            <div class="flex flex-col sm:flex-row items-center justify-center">{boxes}</div>
            <div class="flex flex-col items-center mt-5">
                <div class="w-0.5 h-7 mb-1 bg-slate-500"></div>
                <div class="flex items-center gap-2 px-4 py-2 rounded-lg border-2 border-slate-600 bg-slate-800 text-white text-xs font-bold shadow-lg">
                    {labels.formula}
                </div>
            </div>
        </div>

        {detail}
    }
}

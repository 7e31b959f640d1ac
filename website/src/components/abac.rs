use leptos::prelude::*;
use restsec_core::content::{Abac, AbacAttribute, AccessModelNote};
use restsec_core::{text, Glyph, Tone};

use super::icons::{ArrowHead, Icon};
use super::palette::ToneClasses;

const RULE_TONES: [Tone; 2] = [Tone::Emerald, Tone::Blue];

/// Attribute cards feeding the policy decision point, then the outcome.
#[component]
pub fn AbacDiagram(abac: &'static Abac) -> impl IntoView {
    let attributes = abac
        .attributes
        .iter()
        .map(|attribute| view! { <AttributeCard attribute=attribute /> })
        .collect_view();

    let rules = abac
        .pdp_rules
        .iter()
        .enumerate()
        .map(|(i, rule)| {
            let class = format!(
                "bg-slate-800 rounded-lg p-2.5 font-mono text-[9px] border border-slate-700 {}",
                RULE_TONES[i % RULE_TONES.len()].on_dark()
            );
            view! { <div class=class>{*rule}</div> }
        })
        .collect_view();

    view! {
        <div class="text-center mb-12">
            <span class="px-4 py-1.5 rounded-full bg-indigo-100 text-indigo-700 text-[11px] font-black uppercase tracking-widest border-2 border-indigo-200 shadow-sm">
                {abac.badge}
            </span>
            <h2 class="text-4xl font-black text-slate-900 mt-6 tracking-tight">{abac.title}</h2>
            <p class="text-slate-500 font-medium mt-3 max-w-3xl mx-auto">{text::clean(abac.quote)}</p>
        </div>

        <div class="bg-white rounded-[64px] border-2 border-slate-200 p-12 lg:p-20 relative overflow-hidden shadow-2xl">
            <div class="flex flex-col lg:flex-row items-center gap-12 lg:gap-8">
                <div class="grid grid-cols-1 sm:grid-cols-2 gap-4 flex-shrink-0">{attributes}</div>

                <div class="flex-1 flex flex-col items-center justify-center relative min-h-[300px]">
                    <div class="hidden lg:flex absolute left-0 top-1/2 -translate-y-1/2 -translate-x-full flex-col gap-1.5 items-end text-slate-300">
                        {(0..abac.attributes.len())
                            .map(|_| view! {
                                <div class="flex items-center">
                                    <div class="w-12 border-t border-dashed border-slate-400"></div>
                                    <ArrowHead />
                                </div>
                            })
                            .collect_view()}
                    </div>

                    <div class="w-full max-w-[320px] bg-slate-900 rounded-[48px] border-4 border-slate-800 p-8 flex flex-col items-center relative shadow-[0_0_40px_rgba(79,70,229,0.3)]">
                        <div class="absolute -top-8 left-1/2 -translate-x-1/2 w-16 h-16 bg-indigo-600 rounded-2xl flex items-center justify-center shadow-xl border-4 border-white">
                            <Icon glyph=Glyph::Brain class="w-8 h-8 text-white" />
                        </div>
                        <div class="mt-10 text-center">
                            <h4 class="text-white font-black text-lg tracking-widest">{abac.engine}</h4>
                            <p class="text-indigo-400 text-[9px] font-black uppercase tracking-widest mt-1">{abac.engine_sub}</p>
                        </div>
                        <div class="w-full mt-6 space-y-2">{rules}</div>
                        <div class="mt-6 flex gap-2">
                            <span class="flex items-center gap-1.5 px-3 py-1 bg-white/10 rounded-full text-[9px] font-bold text-white uppercase tracking-wider">
                                <Icon glyph=Glyph::ShieldCheck class="w-2.5 h-2.5" />
                                {abac.policy_count}
                            </span>
                        </div>
                    </div>

                    <div class="hidden lg:flex absolute right-0 top-1/2 -translate-y-1/2 translate-x-full items-center">
                        <div class="w-16 h-1 bg-emerald-500"></div>
                        <Icon glyph=Glyph::CheckCircle class="w-5 h-5 text-emerald-500 ml-1" />
                    </div>
                </div>

                <div class="flex flex-col gap-6 flex-shrink-0">
                    <div class="p-6 rounded-[32px] bg-emerald-50 border-4 border-emerald-100 flex flex-col items-center gap-2 w-48 shadow-lg shadow-emerald-100/50 hover:scale-105 transition-transform">
                        <Icon glyph=Glyph::CheckCircle class="w-10 h-10 text-emerald-500" />
                        <div class="text-center">
                            <span class="font-black text-emerald-950 text-base block uppercase tracking-tighter">{abac.permit}</span>
                            <span class="text-[10px] text-emerald-600 font-bold uppercase tracking-widest">{abac.permit_sub}</span>
                        </div>
                    </div>
                    <div class="opacity-40 grayscale pointer-events-none">
                        <div class="p-4 rounded-[24px] bg-rose-50 border-2 border-rose-100 flex items-center gap-3 w-48">
                            <Icon glyph=Glyph::XCircle class="w-6 h-6 text-rose-500" />
                            <span class="font-black text-rose-800 text-xs">{abac.deny}</span>
                        </div>
                    </div>
                </div>
            </div>

            <div class="mt-20 grid grid-cols-1 md:grid-cols-2 gap-12 pt-12 border-t border-slate-100">
                <ModelNote note=&abac.rbac_note bar="w-1.5 h-4 bg-blue-500 rounded-full" />
                <ModelNote note=&abac.abac_note bar="w-1.5 h-4 bg-indigo-500 rounded-full" />
            </div>
        </div>
    }
}

#[component]
fn AttributeCard(attribute: &'static AbacAttribute) -> impl IntoView {
    let card = format!(
        "p-4 rounded-2xl border-2 bg-white shadow-sm flex flex-col gap-2 w-full lg:w-48 hover:-translate-y-1 transition-all {}",
        attribute.tone.card()
    );
    let tile = format!("p-1.5 rounded-lg {}", attribute.tone.chip());

    view! {
        <div class=card>
            <div class="flex items-center gap-2">
                <div class=tile>
                    <Icon glyph=attribute.glyph class="w-4 h-4" />
                </div>
                <span class="font-black text-[10px] uppercase tracking-widest text-slate-400">{attribute.title}</span>
            </div>
            <div class="flex flex-col">
                <span class="text-[9px] font-bold text-slate-500 uppercase tracking-tighter mb-0.5">{attribute.label}</span>
                <span class="text-xs font-black text-slate-800 break-words">{attribute.value}</span>
            </div>
        </div>
    }
}

#[component]
fn ModelNote(note: &'static AccessModelNote, bar: &'static str) -> impl IntoView {
    view! {
        <div>
            <h5 class="font-black text-slate-900 text-sm mb-4 uppercase tracking-widest flex items-center gap-2">
                <div class=bar></div>
                {note.heading}
            </h5>
            <p class="text-sm text-slate-500 leading-relaxed font-medium">
                {text::clean(note.rule)}
                <br />
                {text::clean(note.verdict)}
            </p>
        </div>
    }
}

use leptos::prelude::*;
use restsec_core::content::{Comparison, ComparisonCard};
use restsec_core::text;

use super::icons::Icon;
use super::palette::ToneClasses;

/// Two concept cards facing each other across a "VS" marker.
#[component]
pub fn ComparisonCards(comparison: &'static Comparison) -> impl IntoView {
    view! {
        <h2 class="text-2xl md:text-3xl font-black text-slate-900 mb-8">{text::clean(comparison.title)}</h2>
        <div class="flex flex-col md:flex-row gap-6 items-stretch">
            <Card card=&comparison.left />
            <div class="flex items-center justify-center flex-shrink-0">
                <div class="flex flex-col md:flex-row items-center gap-2">
                    <div class="hidden md:block w-8 h-px bg-slate-300"></div>
                    <div class="flex items-center justify-center w-10 h-10 rounded-full bg-slate-100 border-2 border-slate-200 text-sm font-black text-slate-400">
                        "VS"
                    </div>
                    <div class="hidden md:block w-8 h-px bg-slate-300"></div>
                </div>
            </div>
            <Card card=&comparison.right />
        </div>
    }
}

#[component]
fn Card(card: &'static ComparisonCard) -> impl IntoView {
    let tone = card.icon.tone();
    let tile = format!(
        "w-12 h-12 rounded-xl flex items-center justify-center flex-shrink-0 shadow-md border {}",
        tone.solid()
    );
    let tag = format!(
        "inline-block mt-1 px-2 py-0.5 rounded-full border text-xs font-semibold {}",
        tone.card()
    );

    view! {
        <div class="flex-1 rounded-xl border-2 border-slate-200 hover:border-slate-300 hover:-translate-y-1 bg-white p-6 shadow-sm transition-all duration-200">
            <div class="flex items-start gap-4 mb-5">
                <div class=tile>
                    <Icon glyph=card.icon.glyph() class="w-6 h-6" />
                </div>
                <div>
                    <h3 class="font-black text-slate-900 text-lg leading-tight">{text::clean(card.header)}</h3>
                    <span class=tag>{card.icon.tag()}</span>
                </div>
            </div>

            <p class="text-slate-600 text-sm leading-relaxed mb-5">{text::clean(card.description)}</p>

            <div class="rounded-lg bg-slate-50 border border-slate-200 p-4">
                <p class="text-xs font-semibold text-slate-400 uppercase tracking-wider mb-1.5">"Analogy"</p>
                <p class="text-slate-600 text-sm leading-relaxed italic">{text::clean(card.analogy)}</p>
            </div>
        </div>
    }
}

use leptos::prelude::*;
use restsec_core::content::GridList;
use restsec_core::{text, Tone};

use super::palette::ToneClasses;

const BADGE_TONES: [Tone; 4] = [Tone::Blue, Tone::Violet, Tone::Emerald, Tone::Amber];

/// Numbered two-column list of short practices.
#[component]
pub fn GridListSection(list: &'static GridList) -> impl IntoView {
    let items = list
        .items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let tone = BADGE_TONES[i % BADGE_TONES.len()];
            let badge = format!(
                "w-8 h-8 rounded-lg text-sm font-black flex items-center justify-center flex-shrink-0 shadow-sm {}",
                tone.solid()
            );
            view! {
                <div class="group relative flex gap-4 p-5 rounded-xl border border-slate-200 bg-white hover:border-blue-200 hover:-translate-y-0.5 hover:shadow-lg transition-all duration-200">
                    <div class=badge>{text::badge_number(i)}</div>
                    <div class="min-w-0">
                        <h3 class="font-bold text-slate-900 text-sm mb-1.5 font-mono group-hover:text-blue-700 transition-colors">
                            {text::clean(item.title)}
                        </h3>
                        <p class="text-slate-500 text-sm leading-relaxed">{text::clean(item.desc)}</p>
                    </div>
                </div>
            }
        })
        .collect_view();

    view! {
        <h2 class="text-2xl md:text-3xl font-black text-slate-900 mb-6">{text::clean(list.title)}</h2>
        <div class="grid grid-cols-1 sm:grid-cols-2 gap-4">{items}</div>
    }
}

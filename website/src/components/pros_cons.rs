use leptos::prelude::*;
use restsec_core::content::ProsCons;
use restsec_core::{text, Glyph};

use super::icons::Icon;

#[component]
pub fn ProsConsTable(table: &'static ProsCons) -> impl IntoView {
    view! {
        <h2 class="text-2xl md:text-3xl font-black text-slate-900 mb-8">{text::clean(table.title)}</h2>
        <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
            <Column
                header=table.pros_header
                entries=table.pros
                glyph=Glyph::CheckCircle
                frame="rounded-xl border-2 border-emerald-200 overflow-hidden"
                head="flex items-center gap-2.5 px-5 py-3.5 bg-emerald-600"
                row="flex items-start gap-3 px-5 py-4 hover:bg-emerald-50 transition-colors duration-150"
                mark="w-4 h-4 text-emerald-500 flex-shrink-0 mt-0.5"
            />
            <Column
                header=table.cons_header
                entries=table.cons
                glyph=Glyph::XCircle
                frame="rounded-xl border-2 border-rose-200 overflow-hidden"
                head="flex items-center gap-2.5 px-5 py-3.5 bg-rose-600"
                row="flex items-start gap-3 px-5 py-4 hover:bg-rose-50 transition-colors duration-150"
                mark="w-4 h-4 text-rose-500 flex-shrink-0 mt-0.5"
            />
        </div>
    }
}

#[component]
fn Column(
    header: &'static str,
    entries: &'static [&'static str],
    glyph: Glyph,
    frame: &'static str,
    head: &'static str,
    row: &'static str,
    mark: &'static str,
) -> impl IntoView {
    view! {
        <div class=frame>
            <div class=head>
                <Icon glyph=glyph class="w-[18px] h-[18px] text-white" />
                <span class="font-black text-white text-sm uppercase tracking-wider">{header}</span>
            </div>
            <div class="bg-white divide-y divide-slate-100">
                {entries
                    .iter()
                    .map(|entry| view! {
                        <div class=row>
                            <Icon glyph=glyph class=mark />
                            <p class="text-slate-700 text-sm leading-relaxed">{text::clean(entry)}</p>
                        </div>
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

use leptos::prelude::*;
use restsec_core::content::{HeroCode, HERO};
use restsec_core::{text, Glyph, Lang};

use super::code_line::CodeLine;
use super::icons::Icon;
use super::palette::ToneClasses;

#[component]
pub fn Hero() -> impl IntoView {
    let cards = HERO
        .content
        .iter()
        .zip(HERO.accents)
        .map(|(entry, accent)| {
            let entry = text::clean(entry);
            let (heading, desc) = text::split_heading(&entry);
            let (heading, desc) = (heading.to_string(), desc.to_string());
            let tile = format!(
                "w-11 h-11 rounded-xl flex items-center justify-center flex-shrink-0 border-2 group-hover:rotate-6 transition-transform {}",
                accent.tone.chip()
            );
            view! {
                <div class="flex flex-col gap-3 p-4 rounded-2xl border border-slate-200 bg-white/60 group">
                    <div class=tile>
                        <Icon glyph=accent.glyph class="w-5 h-5" />
                    </div>
                    <div>
                        <p class="font-black text-slate-800 text-[13px] mb-1 uppercase tracking-tight">{heading}</p>
                        <p class="text-slate-500 text-[11px] font-medium leading-relaxed">{desc}</p>
                    </div>
                </div>
            }
        })
        .collect_view();

    view! {
        <section class="relative overflow-hidden bg-[#fcfdfe] border-b border-slate-200">
            <div class="absolute top-0 right-0 -translate-y-1/2 translate-x-1/4 w-[600px] h-[600px] bg-blue-50/50 rounded-full blur-3xl pointer-events-none"></div>
            <div class="absolute bottom-0 left-0 translate-y-1/2 -translate-x-1/4 w-[400px] h-[400px] bg-indigo-50/50 rounded-full blur-3xl pointer-events-none"></div>

            <div class="relative max-w-6xl mx-auto px-6 py-24 lg:py-32">
                <div class="grid grid-cols-1 lg:grid-cols-12 gap-16 items-center">
                    <div class="lg:col-span-7">
                        <div class="inline-flex items-center gap-2 px-4 py-1.5 rounded-full bg-blue-50 border-2 border-blue-100 text-blue-700 text-[10px] font-black uppercase tracking-widest mb-8 shadow-sm">
                            <div class="w-1.5 h-1.5 rounded-full bg-blue-500 animate-pulse"></div>
                            {HERO.badge}
                        </div>
                        <h1 class="text-5xl md:text-7xl font-black tracking-tighter text-slate-900 leading-[0.95] mb-6">
                            {text::clean(HERO.title)}
                        </h1>
                        <p class="text-xl md:text-2xl font-semibold text-slate-500 mb-12 max-w-xl leading-relaxed">
                            {text::clean(HERO.subtitle)}
                        </p>
                        <div class="grid grid-cols-1 sm:grid-cols-3 gap-5">{cards}</div>
                    </div>

                    <div class="hidden lg:block lg:col-span-5 relative">
                        <CodeWindow code=&HERO.code />
                    </div>
                </div>
            </div>
        </section>
    }
}

/// Dark editor window with the middleware sample and a status badge.
#[component]
fn CodeWindow(code: &'static HeroCode) -> impl IntoView {
    view! {
        <div class="relative z-10 p-8 rounded-[40px] bg-slate-900 shadow-2xl border-4 border-slate-800 overflow-hidden">
            // Window chrome
            <div class="flex items-center gap-2 mb-6 border-b border-slate-800 pb-4">
                <div class="w-3 h-3 rounded-full bg-rose-500"></div>
                <div class="w-3 h-3 rounded-full bg-amber-500"></div>
                <div class="w-3 h-3 rounded-full bg-emerald-500"></div>
                <div class="ml-4 flex items-center gap-2 text-slate-500 font-mono text-[10px]">
                    <Icon glyph=Glyph::Terminal class="w-3 h-3" />
                    <span>{code.filename}</span>
                </div>
            </div>

            <div class="font-mono text-[11px] space-y-2.5 pb-16">
                {code
                    .lines
                    .iter()
                    .enumerate()
                    .map(|(i, line)| view! { <CodeLine line=*line lang=Lang::CSharp number=i + 1 /> })
                    .collect_view()}
            </div>

            <div class="absolute bottom-6 right-6 p-4 bg-emerald-500 rounded-2xl border-2 border-emerald-300 flex items-center gap-3 animate-bounce">
                <Icon glyph=Glyph::ShieldCheck class="w-6 h-6 text-white" />
                <div class="text-white">
                    <p class="text-[10px] font-black uppercase tracking-widest">{code.status_title}</p>
                    <p class="text-[8px] opacity-80 font-bold uppercase">{code.status_sub}</p>
                </div>
            </div>
        </div>
    }
}

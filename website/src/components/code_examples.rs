use std::time::Duration;

use leptos::prelude::*;
use leptos::task::spawn_local;
use restsec_app::config::ClipboardSettings;
use restsec_app::CopyAck;
use restsec_core::samples::{CodeTab, CODE_TABS, HEADER};
use restsec_core::Glyph;

use super::code_line::CodeLine;
use super::icons::{Check, Copy, Icon};
use super::palette::ToneClasses;
use crate::clipboard::copy_text;
use crate::ticker::now_ms;

/// Tabbed C# / ASP.NET Core snippets with a file list and copy button.
#[component]
pub fn CodeExamples() -> impl IntoView {
    let (active_tab, set_active_tab) = signal(0usize);
    let (active_file, set_active_file) = signal(0usize);

    let tab = move || -> &'static CodeTab { &CODE_TABS[active_tab.get()] };

    let tabs = CODE_TABS
        .iter()
        .enumerate()
        .map(|(i, t)| {
            let class = move || {
                if active_tab.get() == i {
                    format!(
                        "flex items-center gap-2 px-5 py-4 text-[11px] font-black uppercase tracking-tighter whitespace-nowrap border-b-2 transition-all flex-shrink-0 bg-white {}",
                        t.tone.ink()
                    )
                } else {
                    "flex items-center gap-2 px-5 py-4 text-[11px] font-black uppercase tracking-tighter whitespace-nowrap border-b-2 transition-all flex-shrink-0 border-transparent text-slate-400 hover:text-slate-600 hover:bg-white/60".to_string()
                }
            };
            let underline = move || {
                (active_tab.get() == i).then(|| format!("border-bottom-color: {}", t.tone.hex()))
            };
            view! {
                <button
                    class=class
                    style=underline
                    on:click=move |_| {
                        set_active_tab.set(i);
                        set_active_file.set(0);
                    }
                >
                    <Icon glyph=t.glyph class="w-3 h-3" />
                    {t.label}
                </button>
            }
        })
        .collect_view();

    let files = move || {
        let tab = tab();
        tab.files
            .iter()
            .enumerate()
            .map(|(i, file)| {
                let selected = move || active_file.get() == i;
                let class = move || {
                    if selected() {
                        "text-left px-4 py-3 text-[10px] font-mono transition-colors flex items-start gap-2 border-l-2 bg-slate-800/70 text-slate-100"
                    } else {
                        "text-left px-4 py-3 text-[10px] font-mono transition-colors flex items-start gap-2 border-l-2 border-transparent text-slate-500 hover:text-slate-300 hover:bg-slate-800/30"
                    }
                };
                let style = move || selected().then(|| format!("border-left-color: {}", tab.tone.hex()));
                let dot = move || {
                    if selected() {
                        "w-1.5 h-1.5 rounded-full mt-1.5 flex-shrink-0"
                    } else {
                        "w-1.5 h-1.5 rounded-full mt-1.5 flex-shrink-0 bg-slate-600"
                    }
                };
                let dot_style = move || selected().then(|| format!("background: {}", tab.tone.hex()));
                view! {
                    <button class=class style=style on:click=move |_| set_active_file.set(i)>
                        <div class=dot style=dot_style></div>
                        <span class="leading-tight break-all">{file.filename}</span>
                    </button>
                }
            })
            .collect_view()
    };

    let file = move || tab().files.get(active_file.get()).or_else(|| tab().files.first());

    let code_lines = move || {
        file().map(|file| {
            file.lines()
                .enumerate()
                .map(|(n, line)| view! { <CodeLine line=line lang=file.lang number=n + 1 /> })
                .collect_view()
        })
    };

    view! {
        <div class="mb-8 text-center">
            <span class="px-3 py-1 rounded-full bg-slate-900 text-slate-300 text-[10px] font-black uppercase tracking-widest border border-slate-700 mb-4 inline-flex items-center gap-2">
                <Icon glyph=Glyph::Terminal class="w-2.5 h-2.5" />
                {HEADER.badge}
            </span>
            <h2 class="text-3xl font-black tracking-tighter text-slate-900 mt-2">{HEADER.title}</h2>
            <p class="text-slate-500 mt-2 font-medium text-sm max-w-xl mx-auto">{HEADER.subtitle}</p>
        </div>

        <div class="rounded-[32px] border-2 border-slate-200 shadow-2xl overflow-hidden bg-white">
            <div class="flex overflow-x-auto border-b-2 border-slate-100 bg-slate-50">{tabs}</div>

            <div class="px-6 py-4 border-b border-slate-100 flex flex-wrap items-center gap-3">
                <div class=move || format!(
                    "flex items-center gap-1.5 px-2.5 py-1 rounded-lg border text-[10px] font-bold {}",
                    tab().tone.panel()
                )>
                    <Icon glyph=Glyph::Layers class="w-2.5 h-2.5" />
                    {move || tab().badge}
                </div>
                <p class="text-xs text-slate-500 font-medium flex-1 min-w-[200px]">
                    {move || tab().description}
                </p>
            </div>

            <div class="flex min-h-[420px] bg-[#0d1117]">
                <div class="flex flex-col border-r border-slate-700/60 flex-shrink-0 w-52">
                    <div class="px-4 py-3 text-[9px] font-black text-slate-500 uppercase tracking-widest border-b border-slate-700/60 flex items-center gap-2">
                        <Icon glyph=Glyph::Code class="w-2.5 h-2.5" />
                        "Files"
                    </div>
                    {files}
                </div>

                <div class="flex-1 flex flex-col min-w-0">
                    <div class="flex items-center justify-between px-4 py-2.5 border-b border-slate-700/60">
                        <div class="flex items-center gap-2">
                            <div class="flex gap-1.5">
                                <div class="w-3 h-3 rounded-full bg-rose-500/70"></div>
                                <div class="w-3 h-3 rounded-full bg-amber-500/70"></div>
                                <div class="w-3 h-3 rounded-full bg-emerald-500/70"></div>
                            </div>
                            <span class="text-[10px] font-mono text-slate-500 ml-2">
                                {move || file().map(|f| f.filename)}
                            </span>
                        </div>
                        <CopyButton code=Signal::derive(move || file().map(|f| f.code).unwrap_or_default()) />
                    </div>
                    <div class="flex-1 overflow-auto p-5 animate-rise">
                        <div class="font-mono text-[12px] leading-6">{code_lines}</div>
                    </div>
                </div>
            </div>

            <div class="px-6 py-4 border-t border-slate-100 bg-slate-50 flex items-center gap-2">
                <Icon glyph=Glyph::Lightbulb class="w-3.5 h-3.5 text-slate-400 flex-shrink-0" />
                <p class="text-[11px] text-slate-400 font-medium">
                    <strong class="text-slate-600">"Tip:"</strong>
                    " "
                    {move || tab().tip}
                </p>
            </div>
        </div>
    }
}

/// Copies `code` and shows "Copied!" for the acknowledgment window.
#[component]
pub fn CopyButton(#[prop(into)] code: Signal<&'static str>) -> impl IntoView {
    let ack = RwSignal::new(CopyAck::new(&ClipboardSettings::default()));

    let on_copy = move |_| {
        let text = code.get_untracked();
        spawn_local(async move {
            match copy_text(text).await {
                Ok(path) => {
                    log::debug!("Copied {} bytes via {:?}", text.len(), path);
                    let Some(ticket) = ack.try_update(|a| a.acknowledge(now_ms())) else {
                        return;
                    };
                    let hold = ack.with_untracked(|a| a.hold_ms());
                    set_timeout(
                        move || {
                            ack.try_update(|a| a.expire(ticket));
                        },
                        Duration::from_millis(hold),
                    );
                }
                Err(e) if e.is_recoverable() => log::debug!("Copy failed: {e}"),
                Err(e) => log::warn!("Copy failed: {e}"),
            }
        });
    };

    view! {
        <button
            on:click=on_copy
            class="flex items-center gap-1.5 px-3 py-1.5 rounded-lg text-[10px] font-bold transition-all bg-slate-700 hover:bg-slate-600 text-slate-300"
        >
            {move || {
                if ack.with(CopyAck::is_copied) {
                    view! {
                        <Check class="w-3 h-3 text-emerald-400" />
                        <span class="text-emerald-400">"Copied!"</span>
                    }
                        .into_any()
                } else {
                    view! {
                        <Copy class="w-3 h-3" />
                        <span>"Copy"</span>
                    }
                        .into_any()
                }
            }}
        </button>
    }
}

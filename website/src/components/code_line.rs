use leptos::prelude::*;
use restsec_core::{highlight_line, Lang};

use super::palette::token_class;

/// One tokenized source line with its gutter number.
#[component]
pub fn CodeLine(line: &'static str, lang: Lang, number: usize) -> impl IntoView {
    let spans = highlight_line(line, lang)
        .into_iter()
        .map(|token| view! { <span class=token_class(token.kind)>{token.text}</span> })
        .collect_view();

    view! {
        <div class="flex gap-4 hover:bg-white/5 px-2 rounded">
            <span class="text-slate-600 select-none w-6 text-right flex-shrink-0">{format!("{number:02}")}</span>
            <span class="whitespace-pre">{spans}</span>
        </div>
    }
}

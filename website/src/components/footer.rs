use leptos::prelude::*;
use restsec_core::content::{FOOTER_NOTE, FOOTER_TITLE};

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="mt-20 py-12 border-t border-slate-200 bg-white">
            <div class="max-w-5xl mx-auto px-6 text-center">
                <div class="w-12 h-1 bg-slate-100 mx-auto mb-6 rounded-full"></div>
                <p class="text-xs text-slate-400 font-bold uppercase tracking-widest">{FOOTER_TITLE}</p>
                <p class="text-[10px] text-slate-300 mt-2 font-medium">{FOOTER_NOTE}</p>
            </div>
        </footer>
    }
}

use leptos::prelude::*;
use restsec_core::content::CallOut;
use restsec_core::{text, Glyph};

use super::icons::Icon;

/// Highlighted summary block with topic pills.
#[component]
pub fn CallOutBlock(callout: &'static CallOut) -> impl IntoView {
    view! {
        <div class="relative rounded-2xl overflow-hidden border-2 border-blue-200 bg-gradient-to-br from-blue-50 via-white to-indigo-50 shadow-lg hover:scale-[1.005] transition-transform">
            <div class="absolute left-0 inset-y-0 w-1.5 bg-gradient-to-b from-blue-500 to-indigo-600"></div>
            <div class="pl-8 pr-6 py-8">
                <div class="flex items-center gap-3 mb-5">
                    <div class="w-12 h-12 rounded-xl bg-blue-600 flex items-center justify-center shadow-md flex-shrink-0">
                        <Icon glyph=Glyph::Lightbulb class="w-[22px] h-[22px] text-white" />
                    </div>
                    <h2 class="text-2xl md:text-3xl font-black text-slate-900">{text::clean(callout.title)}</h2>
                </div>

                <div class="flex flex-wrap gap-2 mb-6">
                    {callout
                        .pills
                        .iter()
                        .map(|pill| view! {
                            <span class="inline-flex items-center gap-1.5 px-3 py-1 rounded-full bg-blue-100 border border-blue-200 text-blue-700 text-xs font-semibold">
                                <Icon glyph=pill.glyph class="w-3 h-3" />
                                {pill.label}
                            </span>
                        })
                        .collect_view()}
                </div>

                <p class="text-slate-700 text-base leading-relaxed max-w-3xl">{text::clean(callout.content)}</p>
            </div>
        </div>
    }
}

use leptos::prelude::*;
use restsec_core::content::{BRAND, NAV_LINKS};

#[component]
pub fn Navbar() -> impl IntoView {
    view! {
        <nav class="sticky top-0 z-50 bg-white/95 backdrop-blur-xl border-b-2 border-slate-100 shadow-sm">
            <div class="max-w-6xl mx-auto px-6 h-20 flex items-center justify-between">
                <a href="#" class="flex items-center gap-4 group">
                    <div class="w-10 h-10 rounded-xl bg-gradient-to-br from-blue-600 to-indigo-700 flex items-center justify-center shadow-lg group-hover:scale-110 transition-transform">
                        <span class="text-white text-lg font-black italic">{BRAND.mark}</span>
                    </div>
                    <div>
                        <span class="block font-black text-slate-900 text-lg leading-tight tracking-tight">
                            {BRAND.name}
                        </span>
                        <span class="block text-[10px] font-bold text-blue-600 uppercase tracking-widest">
                            {BRAND.tagline}
                        </span>
                    </div>
                </a>

                <div class="hidden lg:flex items-center gap-8 text-sm font-bold text-slate-500">
                    {NAV_LINKS
                        .iter()
                        .map(|link| {
                            view! {
                                <a
                                    href=format!("#{}", link.anchor)
                                    class="hover:text-blue-600 transition-colors py-2 border-b-2 border-transparent hover:border-blue-600"
                                >
                                    {link.label}
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </nav>
    }
}

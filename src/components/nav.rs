use leptos::prelude::*;

const NAV_LINKS: &[(&str, &str)] = &[
    ("#services", "Services"),
    ("#projects", "Portfolio"),
    ("#about", "About"),
    ("#contact", "Contact"),
];

#[component]
pub fn SiteHeader() -> impl IntoView {
    view! {
        <header class="sticky top-0 z-40 backdrop-blur bg-white/60 border-b border-gray-200">
            <div class="max-w-7xl mx-auto px-6 py-4 flex items-center justify-between">
                <div class="flex items-center gap-3">
                    <div class="w-10 h-10 rounded-lg bg-gradient-to-tr from-indigo-600 to-teal-400 flex items-center justify-center text-white font-bold">
                        "NP"
                    </div>
                    <div>
                        <div class="text-lg font-semibold">"NarenP"</div>
                        <div class="text-xs text-gray-600">"Software Development • Data Science"</div>
                    </div>
                </div>

                <nav class="hidden md:flex items-center gap-6 text-sm font-medium text-gray-700">
                    {NAV_LINKS
                        .iter()
                        .map(|(href, label)| view! {
                            <a href=*href class="hover:text-indigo-600">{*label}</a>
                        })
                        .collect_view()}
                    <a href="#" class="ml-4 px-4 py-2 bg-indigo-600 text-white rounded-md shadow hover:opacity-95">
                        "Get a Consultation"
                    </a>
                </nav>

                // Inert: there is no mobile menu to open
                <div class="md:hidden">
                    <button type="button" aria-label="Open menu" class="p-2 rounded-md bg-gray-100">"☰"</button>
                </div>
            </div>
        </header>
    }
}

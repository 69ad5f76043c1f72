use leptos::prelude::*;

#[component]
pub fn CtaBanner() -> impl IntoView {
    view! {
        <section class="cta-banner mt-16 rounded-xl overflow-hidden">
            <div class="bg-gradient-to-r from-indigo-700 to-teal-500 text-white p-8 rounded-lg flex flex-col sm:flex-row items-center justify-between gap-6">
                <div>
                    <h3 class="text-xl font-semibold">"Ready to build something great?"</h3>
                    <p class="mt-1 text-sm opacity-90">
                        "Let's design a solution that fits your business and scales with you."
                    </p>
                </div>
                <div>
                    <a href="#contact" class="px-6 py-3 bg-white text-indigo-700 rounded-md font-medium">
                        "Start a Project"
                    </a>
                </div>
            </div>
        </section>
    }
}

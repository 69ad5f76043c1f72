use leptos::prelude::*;

const STRENGTHS: &[&str] = &[
    "Fast prototyping & MVPs",
    "Secure, maintainable codebases",
    "Automated reporting & ETL",
    "Interactive dashboards",
];

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id="about" class="mt-16 bg-indigo-50 rounded-xl p-8">
            <div class="grid grid-cols-1 md:grid-cols-3 gap-6 items-center">
                <div class="md:col-span-2">
                    <h2 class="text-2xl font-bold">"About NarenP"</h2>
                    <p class="mt-3 text-gray-700">
                        "We are a compact team—engineers, analysts, and designers—focused on "
                        "delivering software and data products that solve real business problems. "
                        "Our approach is collaborative: we study the business, design the right "
                        "solution, and ship with speed and quality."
                    </p>

                    <ul class="mt-4 grid grid-cols-1 sm:grid-cols-2 gap-3">
                        {STRENGTHS
                            .iter()
                            .map(|item| view! {
                                <li class="p-3 bg-white rounded shadow-sm border border-gray-100">{*item}</li>
                            })
                            .collect_view()}
                    </ul>
                </div>

                <div class="flex items-center justify-center">
                    <div class="w-56 h-56 bg-gradient-to-tr from-indigo-600 to-teal-400 rounded-2xl flex items-center justify-center text-white font-bold text-xl">
                        "NP"
                    </div>
                </div>
            </div>
        </section>
    }
}

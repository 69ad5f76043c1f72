use leptos::prelude::*;

use crate::motion::{motion_attr, Transition};

const RECENT_ACTIVITY: &[&str] = &[
    "Lead assignment succeeded — 23s ago",
    "Daily report exported — 12m ago",
    "Campaign sync completed — 2h ago",
];

#[component]
pub fn Hero() -> impl IntoView {
    let heading_motion = motion_attr(Transition::HERO_HEADING);
    let card_motion = motion_attr(Transition::HERO_CARD);

    view! {
        <section class="hero grid grid-cols-1 lg:grid-cols-2 gap-8 items-center">
            <div>
                <h1
                    class="text-4xl sm:text-5xl font-extrabold tracking-tight leading-tight"
                    data-motion=heading_motion
                >
                    "Turning Data into Decisions —"
                    <span class="text-indigo-600">" Ideas into Powerful Software"</span>
                </h1>

                <p class="mt-6 text-gray-700 text-lg max-w-xl">
                    "NarenP builds modern web applications and data solutions that help businesses "
                    "automate workflows, visualize insights, and scale with confidence. We focus on "
                    "clean code, secure architecture, and measurable outcomes."
                </p>

                <div class="mt-8 flex gap-4">
                    <a href="#contact" class="inline-flex items-center px-5 py-3 bg-indigo-600 text-white rounded-md shadow hover:opacity-95">
                        "Book a Free Consultation"
                    </a>
                    <a href="#projects" class="inline-flex items-center px-5 py-3 border border-gray-200 rounded-md text-gray-700">
                        "See Portfolio"
                    </a>
                </div>

                <div class="mt-8 grid grid-cols-2 gap-3 max-w-md">
                    <StatTile label="Projects Delivered" value="25+"/>
                    <StatTile label="Happy Clients" value="12+"/>
                </div>
            </div>

            <div class="order-first lg:order-last">
                <div
                    class="relative w-full rounded-2xl shadow-2xl overflow-hidden border border-gray-100"
                    data-motion=card_motion
                >
                    // Mock dashboard, nothing here is live
                    <div class="p-6 bg-gradient-to-br from-slate-900 to-indigo-900 text-white">
                        <div class="flex items-center justify-between">
                            <div>
                                <div class="text-sm opacity-80">"Live Dashboard"</div>
                                <div class="text-2xl font-bold">"Sales Performance"</div>
                            </div>
                            <div class="text-right text-xs opacity-80">"Updated: Aug 21, 2025"</div>
                        </div>

                        <div class="mt-6 grid grid-cols-2 gap-4">
                            <div class="p-3 bg-white/8 rounded">
                                <div class="text-xs opacity-80">"This Month"</div>
                                <div class="text-lg font-semibold">"₹ 12.5L"</div>
                            </div>
                            <div class="p-3 bg-white/8 rounded">
                                <div class="text-xs opacity-80">"Leads"</div>
                                <div class="text-lg font-semibold">"1,250"</div>
                            </div>
                        </div>

                        <div class="mt-6 h-36 bg-white/8 rounded flex items-center justify-center text-sm opacity-80">
                            "[Interactive chart placeholder]"
                        </div>
                    </div>

                    <div class="p-4 bg-white">
                        <div class="flex items-center justify-between">
                            <div class="text-sm">"Recent Activity"</div>
                            <div class="text-xs text-gray-500">"Automations running"</div>
                        </div>
                        <ul class="mt-3 space-y-2 text-sm text-gray-600">
                            {RECENT_ACTIVITY
                                .iter()
                                .map(|entry| view! { <li>"• " {*entry}</li> })
                                .collect_view()}
                        </ul>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn StatTile(label: &'static str, value: &'static str) -> impl IntoView {
    view! {
        <div class="p-4 rounded-lg bg-white border border-gray-100 shadow-sm">
            <div class="text-sm text-gray-500">{label}</div>
            <div class="text-2xl font-semibold">{value}</div>
        </div>
    }
}

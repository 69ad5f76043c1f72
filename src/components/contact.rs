use leptos::prelude::*;

const QUICK_FACTS: &[&str] = &[
    "Focused on web apps, custom solutions, and automation",
    "Data analysis, visualization & BI",
    "Fast MVPs and secure deployments",
];

/// Contact section. The form is a visual mock: fields are uncontrolled and
/// neither button has any behavior attached.
#[component]
pub fn Contact() -> impl IntoView {
    view! {
        <section id="contact" class="mt-16">
            <h2 class="text-2xl font-bold">"Get in touch"</h2>
            <p class="mt-2 text-gray-600">
                "Tell us about your project or ask for a demo. We reply quickly."
            </p>

            <div class="mt-6 grid grid-cols-1 md:grid-cols-2 gap-6">
                <form class="contact-form space-y-4 bg-white p-6 rounded-lg border border-gray-100 shadow-sm">
                    <div>
                        <label class="text-sm font-medium">"Name"</label>
                        <input
                            name="name"
                            class="mt-1 w-full border border-gray-200 p-3 rounded-md"
                            placeholder="Your name"
                        />
                    </div>
                    <div>
                        <label class="text-sm font-medium">"Email"</label>
                        <input
                            name="email"
                            class="mt-1 w-full border border-gray-200 p-3 rounded-md"
                            placeholder="you@company.com"
                        />
                    </div>
                    <div>
                        <label class="text-sm font-medium">"Message"</label>
                        <textarea
                            name="message"
                            class="mt-1 w-full border border-gray-200 p-3 rounded-md"
                            rows="5"
                            placeholder="Tell us about your project..."
                        ></textarea>
                    </div>
                    <div class="flex items-center gap-3">
                        <button type="button" class="px-5 py-3 bg-indigo-600 text-white rounded-md">
                            "Send Message"
                        </button>
                        <button type="button" class="px-4 py-2 border rounded-md">
                            "Request Demo"
                        </button>
                    </div>
                </form>

                <div class="p-6 rounded-lg border border-gray-100 bg-white shadow-sm">
                    <h3 class="font-semibold">"Contact Details"</h3>
                    <p class="text-gray-600 mt-2">"Pune, India"</p>
                    <p class="text-gray-600">"Email: contact@narenp.com"</p>
                    <p class="text-gray-600">"Phone: +91 xxxxx xxxxx"</p>

                    <div class="mt-6">
                        <h4 class="text-sm font-medium">"Quick Facts"</h4>
                        <ul class="mt-2 text-sm text-gray-600 space-y-1">
                            {QUICK_FACTS
                                .iter()
                                .map(|fact| view! { <li>"• " {*fact}</li> })
                                .collect_view()}
                        </ul>
                    </div>
                </div>
            </div>
        </section>
    }
}

use leptos::prelude::*;

use crate::models::PortfolioProject;
use crate::motion::{motion_attr, Transition};

/// One card per project, in the order given. Each card is headed by the
/// project's tag line.
#[component]
pub fn PortfolioGrid(projects: &'static [PortfolioProject]) -> impl IntoView {
    view! {
        <section id="projects" class="mt-16">
            <div class="flex items-center justify-between">
                <div>
                    <h2 class="text-2xl font-bold">"Selected Work"</h2>
                    <p class="text-gray-600 mt-1">
                        "A few projects that showcase our approach to software + data."
                    </p>
                </div>
                <a href="#contact" class="hidden sm:inline-block text-sm font-medium text-indigo-600">
                    "Work with us →"
                </a>
            </div>

            <div class="mt-6 grid gap-6 sm:grid-cols-2 lg:grid-cols-3">
                {projects
                    .iter()
                    .map(|project| view! { <ProjectCard project=*project/> })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: PortfolioProject) -> impl IntoView {
    let motion = motion_attr(Transition::PROJECT_SCALE);

    view! {
        <article
            class="project-card rounded-lg border border-gray-100 bg-white shadow-sm overflow-hidden"
            data-motion=motion
        >
            <div class="p-5">
                <div class="tag-line text-sm text-gray-500">{project.tag_line()}</div>
                <h3 class="mt-2 font-semibold text-lg">{project.title}</h3>
                <p class="mt-2 text-gray-600 text-sm">{project.excerpt}</p>
            </div>
            <div class="p-4 border-t border-gray-100 bg-gray-50 flex items-center justify-between">
                <div class="text-sm text-gray-700">{project.subtitle}</div>
                <a href="#" class="text-indigo-600 text-sm">"Details →"</a>
            </div>
        </article>
    }
}

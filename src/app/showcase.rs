use leptos::prelude::*;

use crate::content::{Project, Skill, PROJECTS, SKILLS};

#[component]
pub fn Skills() -> impl IntoView {
    // rendered twice so the css marquee can loop without a visible seam
    let items = SKILLS.iter().chain(SKILLS.iter()).copied();
    view! {
        <section>
            <h2 class="title-halo text-3xl mb-10">"Skills"</h2>
            <div class="overflow-hidden py-8">
                <div class="marquee flex gap-12 w-max">
                    {items.map(|skill| view! { <SkillBadge skill /> }).collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn SkillBadge(skill: Skill) -> impl IntoView {
    let icon = match skill.icon {
        Some(class) => view! { <i class=format!("{class} text-4xl skill-glow")></i> }.into_any(),
        None => {
            let initial = skill.name.chars().next().unwrap_or('?').to_string();
            view! {
                <span class="text-3xl font-bold skill-glow" style:color=skill.color>
                    {initial}
                </span>
            }
            .into_any()
        }
    };
    view! {
        <div class="flex flex-col items-center gap-2 transition hover:scale-110">
            <span style:color=skill.color>{icon}</span>
            <span class="text-xs">{skill.name}</span>
        </div>
    }
}

#[component]
pub fn Projects() -> impl IntoView {
    view! {
        <section>
            <h2 class="title-halo text-3xl mb-10">"Projects"</h2>
            <div class="grid grid-cols-1 md:grid-cols-2 gap-10">
                {PROJECTS.iter().map(|project| view! { <ProjectCard project=*project /> }).collect_view()}
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: Project) -> impl IntoView {
    view! {
        <div class="project-card rounded-2xl border border-purple-500/40 hover:border-purple-400 transition-all overflow-hidden cursor-pointer flex flex-col justify-between bg-black/40">
            <div class="w-full h-[200px] overflow-hidden">
                <img
                    src=project.image
                    alt=project.title
                    class="w-full h-full object-cover hover:scale-105 transition duration-300"
                />
            </div>
            <div class="p-8 flex flex-col justify-between flex-1">
                <div>
                    <h3 class="text-xl font-semibold mb-3">{project.title}</h3>
                    <p class="text-gray-400 text-sm leading-relaxed">{project.description}</p>
                </div>
                <a
                    href=project.link
                    target="_blank"
                    rel="noopener noreferrer"
                    class="mt-8 text-sm text-purple-400 hover:underline flex items-center gap-2"
                >
                    <span class="relative flex h-3 w-3">
                        <span class="animate-ping absolute inline-flex h-full w-full rounded-full bg-green-400 opacity-75"></span>
                        <span class="relative inline-flex rounded-full h-3 w-3 bg-green-500"></span>
                    </span>
                    "Live Preview →"
                </a>
            </div>
        </div>
    }
}

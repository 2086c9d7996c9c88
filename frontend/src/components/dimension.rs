//! 公开页面：大厅与三个维度视图

use dimfolio::{Dimension, Project};
use leptos::prelude::*;

use crate::context::use_services;
use crate::web::router::Link;

/// 维度切换时的遮罩层
#[component]
fn TransitionVeil() -> impl IntoView {
    let services = use_services();
    let class = move || {
        if services.dimension.get().is_transitioning() {
            "fixed inset-0 bg-base-300 transition-opacity duration-300 opacity-100 pointer-events-none"
        } else {
            "fixed inset-0 bg-base-300 transition-opacity duration-300 opacity-0 pointer-events-none"
        }
    };
    view! { <div class=class></div> }
}

/// 页面外框：当前维度标签与返回大厅的链接
#[component]
fn DimensionFrame(children: Children) -> impl IntoView {
    let services = use_services();
    let label = move || services.dimension.get().current().to_string();

    view! {
        <div class="min-h-screen bg-base-200 p-4 md:p-8">
            <TransitionVeil />
            <div class="max-w-6xl mx-auto space-y-8">
                <div class="flex items-center justify-between">
                    <span class="badge badge-outline">{label}</span>
                    <Link to="/" class="btn btn-ghost btn-sm">"← Lobby"</Link>
                </div>
                {children()}
            </div>
        </div>
    }
}

#[component]
pub fn LobbyPage() -> impl IntoView {
    let doors = [
        (Dimension::Pm, "/pm", "Project Management", "Roadmaps, delivery and the stories behind them"),
        (Dimension::Design, "/design", "Design", "Visual work and interface experiments"),
        (Dimension::Profile, "/profile", "Profile", "Who I am and where I have been"),
    ];

    view! {
        <div class="hero min-h-screen bg-base-200">
            <TransitionVeil />
            <div class="hero-content flex-col w-full max-w-4xl">
                <h1 class="text-5xl font-bold">"Choose a dimension"</h1>
                <div class="grid md:grid-cols-3 gap-6 w-full mt-8">
                    {doors
                        .into_iter()
                        .map(|(dimension, path, title, blurb)| {
                            view! {
                                <Link to=path class="card bg-base-100 shadow-xl hover:shadow-2xl transition">
                                    <div class="card-body">
                                        <span class="badge badge-primary">{dimension.to_string()}</span>
                                        <h2 class="card-title">{title}</h2>
                                        <p class="text-base-content/70">{blurb}</p>
                                    </div>
                                </Link>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}

fn project_card(project: Project) -> impl IntoView {
    let tags = project.tags.clone();
    view! {
        <div class="card bg-base-100 shadow-xl">
            {project.image.clone().map(|src| view! {
                <figure><img src=src alt=project.title.clone() /></figure>
            })}
            <div class="card-body">
                <h2 class="card-title">{project.title.clone()}</h2>
                <p>{project.description.clone()}</p>
                <div class="flex flex-wrap gap-2">
                    {tags
                        .into_iter()
                        .map(|tag| view! { <span class="badge badge-ghost">{tag}</span> })
                        .collect_view()}
                </div>
                {project.link.clone().map(|href| view! {
                    <div class="card-actions justify-end">
                        <a class="btn btn-primary btn-sm" href=href target="_blank">"Open"</a>
                    </div>
                })}
            </div>
        </div>
    }
}

/// 作品列表视图，PM 与 Design 维度共用
#[component]
fn ProjectGallery(title: &'static str) -> impl IntoView {
    let services = use_services();
    services.load_projects(false);

    view! {
        <DimensionFrame>
            <h1 class="text-4xl font-bold">{title}</h1>
            <Show
                when=move || !services.projects().is_empty()
                fallback=move || {
                    if services.is_loading() {
                        view! { <span class="loading loading-dots loading-lg"></span> }.into_any()
                    } else {
                        view! { <p class="text-base-content/60">"Nothing here yet."</p> }.into_any()
                    }
                }
            >
                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-6">
                    {move || services.projects().into_iter().map(project_card).collect_view()}
                </div>
            </Show>
        </DimensionFrame>
    }
}

#[component]
pub fn PmPage() -> impl IntoView {
    view! { <ProjectGallery title="Project Management" /> }
}

#[component]
pub fn DesignPage() -> impl IntoView {
    view! { <ProjectGallery title="Design" /> }
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let services = use_services();
    services.load_profile();

    view! {
        <DimensionFrame>
            {move || {
                let profile = services.profile();
                view! {
                    <div class="flex flex-col md:flex-row gap-8 items-start">
                        {(!profile.image.is_empty()).then(|| view! {
                            <img class="w-40 h-40 rounded-full object-cover" src=profile.image.clone() alt=profile.name.clone() />
                        })}
                        <div class="space-y-2">
                            <h1 class="text-4xl font-bold">{profile.name.clone()}</h1>
                            <p class="text-xl text-base-content/70">{profile.title.clone()}</p>
                            <p>{profile.bio.clone()}</p>
                            {(!profile.email.is_empty()).then(|| view! {
                                <a class="link" href=format!("mailto:{}", profile.email)>{profile.email.clone()}</a>
                            })}
                        </div>
                    </div>
                    <div class="flex flex-wrap gap-2">
                        {profile
                            .skills
                            .iter()
                            .cloned()
                            .map(|skill| view! { <span class="badge badge-primary">{skill}</span> })
                            .collect_view()}
                    </div>
                    <ul class="timeline timeline-vertical">
                        {profile
                            .experience
                            .iter()
                            .cloned()
                            .map(|exp| view! {
                                <li class="timeline-box my-2">
                                    <div class="font-bold">{exp.role} " @ " {exp.company}</div>
                                    <div class="text-sm text-base-content/60">{exp.period}</div>
                                    <p>{exp.description}</p>
                                </li>
                            })
                            .collect_view()}
                    </ul>
                }
            }}
        </DimensionFrame>
    }
}

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="flex items-center justify-center min-h-screen bg-base-200">
            <div class="text-center space-y-4">
                <h1 class="text-6xl font-bold text-error">"404"</h1>
                <p class="text-xl">"页面未找到"</p>
                <Link to="/" class="btn btn-primary">"Back to Lobby"</Link>
            </div>
        </div>
    }
}

use dimfolio::{AppRoute, Project};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_services;
use crate::web::router::{Link, use_router};

fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let services = use_services();
    let router = use_router();

    // 管理面板总是拉取最新数据
    services.load_projects(true);

    let handle_delete = move |project: Project| {
        if !confirm(&format!("Delete \"{}\"?", project.title)) {
            return;
        }
        let data = services.data();
        // 失败时 store 已提示用户，列表保持不变
        spawn_local(async move {
            let _ = data.delete_project(project.id).await;
        });
    };

    let on_logout = move |_| {
        let auth = services.auth();
        spawn_local(async move {
            auth.logout().await;
            router.navigate(&AppRoute::auth_failure_redirect().to_path());
        });
    };

    let user_email = move || {
        services.is_authenticated.track();
        services
            .auth()
            .user()
            .and_then(|u| u.email)
            .unwrap_or_else(|| "admin".to_string())
    };

    view! {
        <div class="min-h-screen bg-base-200 p-4 md:p-8 font-sans">
            <div class="max-w-7xl mx-auto space-y-8">
                <div class="navbar bg-base-100 rounded-box shadow">
                    <div class="flex-1">
                        <span class="text-xl font-bold px-2">"Dashboard"</span>
                        <span class="text-sm text-base-content/60">{user_email}</span>
                    </div>
                    <div class="flex-none gap-2">
                        <Link to="/admin/profile" class="btn btn-ghost btn-sm">"Edit Profile"</Link>
                        <Link to="/admin/project" class="btn btn-primary btn-sm">"New Project"</Link>
                        <button class="btn btn-outline btn-sm" on:click=on_logout>"Logout"</button>
                    </div>
                </div>

                <div class="stats shadow">
                    <div class="stat">
                        <div class="stat-title">"Projects"</div>
                        <div class="stat-value">{move || services.projects().len()}</div>
                    </div>
                </div>

                <div class="overflow-x-auto bg-base-100 rounded-box shadow">
                    <table class="table">
                        <thead>
                            <tr>
                                <th>"Title"</th>
                                <th>"Tags"</th>
                                <th>"Created"</th>
                                <th></th>
                            </tr>
                        </thead>
                        <tbody>
                            <For
                                each=move || services.projects()
                                key=|p| (p.id, p.updated_at, p.title.clone())
                                children=move |project: Project| {
                                    let edit_path = AppRoute::AdminProject(Some(project.id)).to_path();
                                    let created = project
                                        .created_at
                                        .map(|t| t.format("%Y-%m-%d").to_string())
                                        .unwrap_or_default();
                                    let to_delete = project.clone();
                                    view! {
                                        <tr>
                                            <td class="font-medium">{project.title.clone()}</td>
                                            <td>{project.tags.join(", ")}</td>
                                            <td>{created}</td>
                                            <td class="text-right space-x-2">
                                                <Link to=edit_path class="btn btn-ghost btn-xs">"Edit"</Link>
                                                <button
                                                    class="btn btn-error btn-xs"
                                                    on:click=move |_| handle_delete(to_delete.clone())
                                                >
                                                    "Delete"
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                }
                            />
                        </tbody>
                    </table>
                </div>
            </div>
        </div>
    }
}

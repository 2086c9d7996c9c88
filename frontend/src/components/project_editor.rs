//! 作品编辑器：新建与编辑共用

mod form_state;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_services;
use crate::web::router::{Link, use_router};
use form_state::FormState;

#[component]
fn TextField(
    id: &'static str,
    label: &'static str,
    value: RwSignal<String>,
    #[prop(optional)] placeholder: &'static str,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    view! {
        <div class="form-control">
            <label for=id class="label">
                <span class="label-text">{label}</span>
            </label>
            <input id=id
                type="text"
                placeholder=placeholder
                required=required
                on:input=move |ev| value.set(event_target_value(&ev))
                prop:value=move || value.get()
                class="input input-bordered w-full"
            />
        </div>
    }
}

#[component]
pub fn ProjectEditorPage(id: Option<i64>) -> impl IntoView {
    let services = use_services();
    let router = use_router();
    let state = FormState::new();
    let (saving, set_saving) = signal(false);

    // 编辑已有作品：缓存为空时先拉取，再用缓存填充表单
    let settled = match id {
        Some(_) => services.load_projects(false),
        None => signal(true).0,
    };
    Effect::new(move |_| {
        if let Some(id) = id {
            if !state.is_loaded() {
                if let Some(project) = services.project(id) {
                    state.fill(&project);
                }
            }
        }
    });

    // 拉取结束前不判定缺失，避免深链接进入时闪现提示
    let missing = move || {
        let found = id.is_some_and(|id| services.project(id).is_some());
        form_state::is_missing(id, settled.get(), found)
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        set_saving.set(true);
        let project = state.to_project();
        let data = services.data();

        spawn_local(async move {
            // 失败时 store 已提示用户，停留在编辑页
            let saved = match id {
                Some(_) => data.update_project(project).await.is_ok(),
                None => data.add_project(project).await.is_ok(),
            };
            set_saving.set(false);
            if saved {
                router.navigate("/admin");
            }
        });
    };

    view! {
        <div class="min-h-screen bg-base-200 p-4 md:p-8">
            <div class="max-w-3xl mx-auto space-y-6">
                <div class="flex items-center justify-between">
                    <h1 class="text-3xl font-bold">
                        {if id.is_some() { "Edit Project" } else { "New Project" }}
                    </h1>
                    <Link to="/admin" class="btn btn-ghost btn-sm">"← Dashboard"</Link>
                </div>

                <Show
                    when=move || !missing()
                    fallback=|| view! {
                        <div role="alert" class="alert alert-warning">"Project not found."</div>
                    }
                >
                    <form class="card bg-base-100 shadow-xl card-body space-y-2" on:submit=on_submit>
                        <TextField id="title" label="Title" value=state.title required=true />
                        <TextField id="description" label="Description" value=state.description />
                        <div class="form-control">
                            <label for="content" class="label">
                                <span class="label-text">"Content"</span>
                            </label>
                            <textarea id="content"
                                class="textarea textarea-bordered h-40"
                                on:input=move |ev| state.content.set(event_target_value(&ev))
                                prop:value=move || state.content.get()
                            ></textarea>
                        </div>
                        <TextField id="tags" label="Tags" value=state.tags placeholder="rust, design" />
                        <TextField id="image" label="Image URL" value=state.image />
                        <TextField id="link" label="Link" value=state.link placeholder="https://" />
                        <div class="card-actions justify-end mt-4">
                            <button class="btn btn-primary" disabled=move || saving.get()>
                                {move || if saving.get() { "Saving..." } else { "Save" }}
                            </button>
                        </div>
                    </form>
                </Show>
            </div>
        </div>
    }
}

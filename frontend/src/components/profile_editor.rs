//! 个人资料编辑器
//!
//! 履历每行一条：`职位 | 公司 | 时间 | 描述`。

use dimfolio::{Experience, Profile};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_services;
use crate::web::router::Link;

fn experience_to_lines(items: &[Experience]) -> String {
    items
        .iter()
        .map(|e| format!("{} | {} | {} | {}", e.role, e.company, e.period, e.description))
        .collect::<Vec<_>>()
        .join("\n")
}

fn lines_to_experience(raw: &str) -> Vec<Experience> {
    raw.lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| {
            let mut parts = line.splitn(4, '|').map(|p| p.trim().to_string());
            Experience {
                role: parts.next().unwrap_or_default(),
                company: parts.next().unwrap_or_default(),
                period: parts.next().unwrap_or_default(),
                description: parts.next().unwrap_or_default(),
            }
        })
        .collect()
}

#[component]
pub fn ProfileEditorPage() -> impl IntoView {
    let services = use_services();
    services.load_profile();

    let name = RwSignal::new(String::new());
    let title = RwSignal::new(String::new());
    let bio = RwSignal::new(String::new());
    let skills = RwSignal::new(String::new());
    let experience = RwSignal::new(String::new());
    let image = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let (saving, set_saving) = signal(false);
    let (saved, set_saved) = signal(false);

    // 资料加载后填充表单
    Effect::new(move |_| {
        let profile = services.profile();
        name.set(profile.name);
        title.set(profile.title);
        bio.set(profile.bio);
        skills.set(profile.skills.join(", "));
        experience.set(experience_to_lines(&profile.experience));
        image.set(profile.image);
        email.set(profile.email);
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let profile = Profile {
            id: services.data().get_profile().id,
            name: name.get(),
            title: title.get(),
            bio: bio.get(),
            skills: skills
                .get()
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect(),
            experience: lines_to_experience(&experience.get()),
            image: image.get(),
            email: email.get(),
        };

        set_saving.set(true);
        set_saved.set(false);
        let data = services.data();
        spawn_local(async move {
            // 失败时 store 已提示用户
            let ok = data.update_profile(profile).await.is_ok();
            set_saving.set(false);
            set_saved.set(ok);
        });
    };

    let field = move |id: &'static str, label: &'static str, value: RwSignal<String>| {
        view! {
            <div class="form-control">
                <label for=id class="label"><span class="label-text">{label}</span></label>
                <input id=id type="text" class="input input-bordered w-full"
                    on:input=move |ev| value.set(event_target_value(&ev))
                    prop:value=move || value.get()
                />
            </div>
        }
    };

    view! {
        <div class="min-h-screen bg-base-200 p-4 md:p-8">
            <div class="max-w-3xl mx-auto space-y-6">
                <div class="flex items-center justify-between">
                    <h1 class="text-3xl font-bold">"Edit Profile"</h1>
                    <Link to="/admin" class="btn btn-ghost btn-sm">"← Dashboard"</Link>
                </div>

                <form class="card bg-base-100 shadow-xl card-body space-y-2" on:submit=on_submit>
                    <Show when=move || saved.get()>
                        <div role="alert" class="alert alert-success text-sm py-2">"Saved."</div>
                    </Show>
                    {field("name", "Name", name)}
                    {field("title", "Title", title)}
                    <div class="form-control">
                        <label for="bio" class="label"><span class="label-text">"Bio"</span></label>
                        <textarea id="bio" class="textarea textarea-bordered h-32"
                            on:input=move |ev| bio.set(event_target_value(&ev))
                            prop:value=move || bio.get()
                        ></textarea>
                    </div>
                    {field("skills", "Skills (comma separated)", skills)}
                    <div class="form-control">
                        <label for="experience" class="label">
                            <span class="label-text">"Experience (role | company | period | description)"</span>
                        </label>
                        <textarea id="experience" class="textarea textarea-bordered h-40 font-mono text-sm"
                            on:input=move |ev| experience.set(event_target_value(&ev))
                            prop:value=move || experience.get()
                        ></textarea>
                    </div>
                    {field("image", "Image URL", image)}
                    {field("email", "Email", email)}
                    <div class="card-actions justify-end mt-4">
                        <button class="btn btn-primary" disabled=move || saving.get()>
                            {move || if saving.get() { "Saving..." } else { "Save" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}

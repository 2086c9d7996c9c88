//! dimfolio 前端应用
//!
//! 采用 Context-Driven 架构，业务状态全部来自核心库：
//! - `context`: 把核心 `AppContext` 包装为 Leptos 上下文
//! - `web::router`: 路由服务（History API + 核心守卫）
//! - `components`: UI 组件层

mod context;
mod components {
    pub mod dashboard;
    pub mod dimension;
    pub mod login;
    pub mod profile_editor;
    pub mod project_editor;
}

use crate::components::dashboard::DashboardPage;
use crate::components::dimension::{DesignPage, LobbyPage, NotFoundPage, PmPage, ProfilePage};
use crate::components::login::AdminLoginPage;
use crate::components::profile_editor::ProfileEditorPage;
use crate::components::project_editor::ProjectEditorPage;
use crate::context::provide_services;

use dimfolio::AppRoute;
use leptos::prelude::*;

// 原生 Web API 封装模块
// 此模块提供对浏览器原生 API 的轻量级封装，替代 gloo-* 系列 crate，
// 以减小 WASM 二进制体积。
pub(crate) mod web {
    mod http;
    pub mod router;
    mod storage;

    pub use http::FetchHttpClient;
    pub use storage::BrowserStorage;
}

use web::router::{Router, RouterOutlet};

/// 路由匹配函数
///
/// 根据 AppRoute 枚举返回对应的视图组件。
fn route_matcher(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Lobby => view! { <LobbyPage /> }.into_any(),
        AppRoute::Pm => view! { <PmPage /> }.into_any(),
        AppRoute::Design => view! { <DesignPage /> }.into_any(),
        AppRoute::Profile => view! { <ProfilePage /> }.into_any(),
        AppRoute::AdminLogin => view! { <AdminLoginPage /> }.into_any(),
        AppRoute::Admin => view! { <DashboardPage /> }.into_any(),
        AppRoute::AdminProject(id) => view! { <ProjectEditorPage id=id /> }.into_any(),
        AppRoute::AdminProfile => view! { <ProfileEditorPage /> }.into_any(),
        AppRoute::NotFound => view! { <NotFoundPage /> }.into_any(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    // 1. 构建核心对象图并提供到 Context，后台恢复会话
    match provide_services() {
        // 2. 路由器组件：每次导航都经过核心守卫
        Ok(services) => view! {
            <Router services=services>
                <RouterOutlet matcher=route_matcher />
            </Router>
        }
        .into_any(),
        Err(e) => {
            web_sys::console::error_1(&format!("[App] Invalid configuration: {}", e).into());
            view! {
                <div class="flex items-center justify-center min-h-screen bg-base-200">
                    <div role="alert" class="alert alert-error max-w-lg">
                        <span>{e.to_string()}</span>
                    </div>
                </div>
            }
            .into_any()
        }
    }
}

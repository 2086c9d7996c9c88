//! 路由服务模块 - 核心引擎
//!
//! 封装了 web_sys 的 History API，所有对 window.history 的操作都集中在此模块。
//! 每次导航都经过核心库的 `RouterGuard`：
//! "监听 -> 守卫(切换维度 + 认证检查) -> 更新 History -> 渲染"。

use std::time::Duration;

use dimfolio::AppRoute;
use leptos::prelude::*;
use wasm_bindgen::prelude::*;

use crate::context::Services;

/// 维度切换动画时长
const TRANSITION: Duration = Duration::from_millis(350);

/// 获取当前浏览器路径
fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

fn push_history_state(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.push_state_with_url(&JsValue::NULL, "", Some(path));
        }
    }
}

/// 用于重定向，不留下历史记录
fn replace_history_state(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(path));
        }
    }
}

/// 路由器服务
///
/// 封装所有路由操作，通过 Signal 驱动界面更新。
#[derive(Clone, Copy)]
pub struct RouterService {
    current_route: ReadSignal<AppRoute>,
    set_route: WriteSignal<AppRoute>,
    services: Services,
}

impl RouterService {
    fn new(services: Services) -> Self {
        // 守卫在会话检查完成后才执行，这里只记录地址栏的路由
        let (current_route, set_route) = signal(AppRoute::from_path(&current_path()));
        Self {
            current_route,
            set_route,
            services,
        }
    }

    pub fn current_route(&self) -> ReadSignal<AppRoute> {
        self.current_route
    }

    /// **核心方法：导航与守卫**
    pub fn navigate(&self, path: &str) {
        self.navigate_to(path, true);
    }

    /// 先播放维度切换动画，结束后再导航
    pub fn navigate_with_transition(&self, path: &str) {
        let services = self.services;
        services.core().update_dimensions(|d| {
            d.start_transition();
            d.request_navigation(path);
        });
        services.sync_dimension();

        let router = *self;
        set_timeout(
            move || {
                let pending = services.core().update_dimensions(|d| d.clear_request());
                if let Some(target) = pending {
                    router.navigate(&target);
                }
                services.end_transition();
            },
            TRANSITION,
        );
    }

    /// # Arguments
    /// * `use_push` - true 使用 pushState, false 使用 replaceState
    fn navigate_to(&self, path: &str, use_push: bool) {
        let nav = self.services.core().navigate(path);
        self.services.sync_dimension();

        let target = nav.route().clone();
        let target_path = target.to_path();
        // 重定向总是替换当前记录，避免后退回到被拒绝的页面
        if use_push && !nav.is_redirect() {
            push_history_state(&target_path);
        } else {
            replace_history_state(&target_path);
        }
        self.set_route.set(target);
    }

    /// 初始化浏览器后退/前进按钮监听
    fn init_popstate_listener(&self) {
        let router = *self;
        let closure = Closure::<dyn Fn()>::new(move || {
            router.navigate_to(&current_path(), false);
        });

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
        }

        // 泄漏闭包以保持监听器存活
        closure.forget();
    }

    /// 会话检查完成后，对地址栏的路由执行第一次守卫
    fn setup_initial_navigation(&self) {
        let router = *self;
        let auth_ready = self.services.auth_ready;
        Effect::new(move |done: Option<bool>| {
            if done == Some(true) {
                return true;
            }
            if !auth_ready.get() {
                return false;
            }
            router.navigate_to(&current_path(), false);
            true
        });
    }

    /// 设置认证状态变化时的自动重定向
    fn setup_auth_redirect(&self) {
        let router = *self;
        let services = self.services;

        Effect::new(move |_| {
            let is_auth = services.is_authenticated.get();
            if !services.auth_ready.get_untracked() {
                return;
            }
            let route = router.current_route.get_untracked();

            if is_auth && route.should_redirect_when_authenticated() {
                web_sys::console::log_1(
                    &"[Router] Auth state changed: logged in, redirecting to dashboard.".into(),
                );
                router.navigate(&AppRoute::auth_success_redirect().to_path());
            } else if !is_auth && route.requires_auth() {
                web_sys::console::log_1(
                    &"[Router] Auth state changed: logged out, redirecting to login.".into(),
                );
                router.navigate(&AppRoute::auth_failure_redirect().to_path());
            }
        });
    }
}

fn provide_router(services: Services) -> RouterService {
    let router = RouterService::new(services);

    router.init_popstate_listener();
    router.setup_initial_navigation();
    router.setup_auth_redirect();

    provide_context(router);
    router
}

/// 从 Context 获取路由服务
pub fn use_router() -> RouterService {
    use_context::<RouterService>()
        .expect("RouterService not found in context. Ensure Router is provided.")
}

// ============================================================================
// UI 组件
// ============================================================================

/// 路由器根组件
#[component]
pub fn Router(services: Services, children: Children) -> impl IntoView {
    provide_router(services);
    children()
}

/// 路由出口组件
///
/// 会话检查完成前显示加载状态，之后根据当前路由渲染对应的组件。
#[component]
pub fn RouterOutlet(
    /// 路由匹配函数：接收当前路由，返回对应视图
    matcher: fn(AppRoute) -> AnyView,
) -> impl IntoView {
    let router = use_router();
    let services = router.services;

    move || {
        if !services.auth_ready.get() {
            return view! {
                <div class="flex items-center justify-center min-h-screen">
                    <span class="loading loading-spinner loading-lg text-primary"></span>
                </div>
            }
            .into_any();
        }
        matcher(router.current_route().get())
    }
}

/// 站内链接：拦截点击，经过守卫与切换动画
#[component]
pub fn Link(
    #[prop(into)] to: String,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let router = use_router();

    let target = to.clone();
    let on_click = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        router.navigate_with_transition(&target);
    };

    view! {
        <a href=to class=class on:click=on_click>
            {children()}
        </a>
    }
}

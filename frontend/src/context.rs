//! 应用上下文模块
//!
//! 把核心库的 `AppContext` 包装为 Leptos 上下文，在组件间共享。
//! 核心 store 不是 `Send`，因此放在 `StoredValue::new_local` 中，
//! 它们的状态变化通过订阅同步到信号。

use std::rc::Rc;

use dimfolio::config::{
    KEY_ADMIN_SECRET, KEY_ANON_KEY, KEY_AUTH_MODE, KEY_BACKEND_URL, KEY_CACHE_TTL_SECS,
    KEY_SESSION_KEY,
};
use dimfolio::notify::{LogNotifier, Notifier};
use dimfolio::remote::RestTableStore;
use dimfolio::subscription::Subscription;
use dimfolio::{
    AppConfig, AppContext, AuthMode, Authenticator, DataStore, DimensionStore, FolioResult,
    Profile, Project,
};
use leptos::prelude::*;
use leptos::reactive::owner::LocalStorage;
use leptos::task::spawn_local;

use crate::web::{BrowserStorage, FetchHttpClient};

pub type Table = RestTableStore<Rc<FetchHttpClient>>;
pub type Core = AppContext<Table>;
pub type Data = DataStore<Table>;

/// 写操作失败时的阻塞式提示
struct WindowAlert;

impl Notifier for WindowAlert {
    fn alert(&self, message: &str) {
        match web_sys::window() {
            Some(window) => {
                let _ = window.alert_with_message(message);
            }
            None => LogNotifier.alert(message),
        }
    }
}

/// 构建期注入的配置 (`DIMFOLIO_*` 环境变量)
fn build_config() -> FolioResult<AppConfig> {
    AppConfig::from_lookup(|key| {
        let value = match key {
            KEY_BACKEND_URL => option_env!("DIMFOLIO_BACKEND_URL"),
            KEY_ANON_KEY => option_env!("DIMFOLIO_ANON_KEY"),
            KEY_AUTH_MODE => option_env!("DIMFOLIO_AUTH_MODE"),
            KEY_ADMIN_SECRET => option_env!("DIMFOLIO_ADMIN_SECRET"),
            KEY_CACHE_TTL_SECS => option_env!("DIMFOLIO_CACHE_TTL_SECS"),
            KEY_SESSION_KEY => option_env!("DIMFOLIO_SESSION_KEY"),
            _ => None,
        };
        value.map(str::to_string)
    })
}

/// 应用服务上下文
///
/// 所有字段都是 arena 句柄，实现了 `Copy`，可以直接移入闭包。
#[derive(Clone, Copy)]
pub struct Services {
    core: StoredValue<Rc<Core>, LocalStorage>,
    _subscriptions: StoredValue<Vec<Subscription>, LocalStorage>,
    /// 维度状态快照
    pub dimension: RwSignal<DimensionStore>,
    pub is_authenticated: RwSignal<bool>,
    /// 启动时的会话检查是否已完成
    pub auth_ready: RwSignal<bool>,
    pub auth_mode: AuthMode,
    data_version: RwSignal<u64>,
}

impl Services {
    fn new(core: Core, auth_mode: AuthMode) -> Self {
        let dimension = RwSignal::new(core.dimensions().clone());
        let is_authenticated = RwSignal::new(false);
        let data_version = RwSignal::new(0u64);

        let data_sub = core
            .data()
            .subscribe(move || data_version.update(|v| *v += 1));
        let auth_sub = core
            .auth()
            .watch(Box::new(move |value: &bool| is_authenticated.set(*value)));

        Self {
            core: StoredValue::new_local(Rc::new(core)),
            _subscriptions: StoredValue::new_local(vec![data_sub, auth_sub]),
            dimension,
            is_authenticated,
            auth_ready: RwSignal::new(false),
            auth_mode,
            data_version,
        }
    }

    pub fn core(&self) -> Rc<Core> {
        self.core.get_value()
    }

    pub fn auth(&self) -> Rc<dyn Authenticator> {
        self.core().auth()
    }

    pub fn data(&self) -> Rc<Data> {
        self.core().data()
    }

    /// 把核心维度状态同步到信号
    pub fn sync_dimension(&self) {
        let snapshot = self.core().dimensions().clone();
        self.dimension.set(snapshot);
    }

    pub fn end_transition(&self) {
        self.core().update_dimensions(|d| d.end_transition());
        self.sync_dimension();
    }

    // =========================================================
    // 数据读取（会订阅数据变化）
    // =========================================================

    pub fn projects(&self) -> Vec<Project> {
        self.data_version.track();
        self.data().get_all_projects()
    }

    pub fn project(&self, id: i64) -> Option<Project> {
        self.data_version.track();
        self.data().project(id)
    }

    pub fn profile(&self) -> Profile {
        self.data_version.track();
        self.data().get_profile()
    }

    pub fn is_loading(&self) -> bool {
        self.data_version.track();
        self.data().is_loading()
    }

    /// 后台拉取作品列表；失败已在 store 中记录
    ///
    /// 返回的信号在本次拉取结束（成功、失败或命中缓存）后变为 `true`。
    pub fn load_projects(&self, force: bool) -> ReadSignal<bool> {
        let (settled, set_settled) = signal(false);
        let data = self.data();
        spawn_local(async move {
            let _ = data.fetch_projects(force).await;
            set_settled.set(true);
        });
        settled
    }

    pub fn load_profile(&self) {
        let data = self.data();
        spawn_local(async move {
            let _ = data.fetch_profile().await;
        });
    }
}

/// 构建服务并提供到 Context，随后在后台恢复会话
pub fn provide_services() -> FolioResult<Services> {
    let config = build_config()?;
    let core = AppContext::from_config(
        &config,
        Rc::new(FetchHttpClient),
        BrowserStorage,
        Rc::new(WindowAlert),
    )?;
    let services = Services::new(core, config.auth_mode);
    provide_context(services);

    let core = services.core();
    spawn_local(async move {
        // 失败时保持未登录状态，错误已记录
        let _ = core.start().await;
        services
            .is_authenticated
            .set(core.auth().is_authenticated());
        services.auth_ready.set(true);
    });

    Ok(services)
}

/// 从 Context 获取应用服务
pub fn use_services() -> Services {
    use_context::<Services>().expect("Services should be provided")
}

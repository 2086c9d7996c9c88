//! 表单状态管理模块
//!
//! 将零散的 signal 整合为 `FormState` 结构体，负责：
//! - 数据的持有
//! - 从已有作品填充
//! - 数据到 `Project` 的转换

use dimfolio::Project;
use leptos::prelude::*;

fn optional(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// 逗号分隔的标签，忽略空项
pub fn parse_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

/// 编辑已有作品时，拉取结束且缓存中仍找不到该 id 才算缺失
pub fn is_missing(id: Option<i64>, settled: bool, found: bool) -> bool {
    id.is_some() && settled && !found
}

/// 表单状态结构体
///
/// 使用 `RwSignal` 因为它实现了 `Copy` trait，非常适合作为 Props 在组件间传递。
#[derive(Clone, Copy)]
pub struct FormState {
    pub title: RwSignal<String>,
    pub description: RwSignal<String>,
    pub content: RwSignal<String>,
    pub tags: RwSignal<String>,
    pub image: RwSignal<String>,
    pub link: RwSignal<String>,
    /// 编辑时保留原记录的时间戳
    original: RwSignal<Option<Project>>,
}

impl FormState {
    pub fn new() -> Self {
        Self {
            title: RwSignal::new(String::new()),
            description: RwSignal::new(String::new()),
            content: RwSignal::new(String::new()),
            tags: RwSignal::new(String::new()),
            image: RwSignal::new(String::new()),
            link: RwSignal::new(String::new()),
            original: RwSignal::new(None),
        }
    }

    pub fn fill(&self, project: &Project) {
        self.title.set(project.title.clone());
        self.description.set(project.description.clone());
        self.content.set(project.content.clone().unwrap_or_default());
        self.tags.set(project.tags.join(", "));
        self.image.set(project.image.clone().unwrap_or_default());
        self.link.set(project.link.clone().unwrap_or_default());
        self.original.set(Some(project.clone()));
    }

    pub fn is_loaded(&self) -> bool {
        self.original.with(Option::is_some)
    }

    /// 转换为提交用的 `Project`；新建时 id 为 0，由后端分配
    pub fn to_project(&self) -> Project {
        let base = self.original.get().unwrap_or_default();
        Project {
            title: self.title.get().trim().to_string(),
            description: self.description.get(),
            content: optional(self.content.get()),
            tags: parse_tags(&self.tags.get()),
            image: optional(self.image.get()),
            link: optional(self.link.get()),
            ..base
        }
    }
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_waits_for_fetch() {
        // 深链接进入：拉取尚未结束
        assert!(!is_missing(Some(3), false, false));
        assert!(is_missing(Some(3), true, false));
        assert!(!is_missing(Some(3), true, true));
        assert!(!is_missing(None, true, false));
    }

    #[test]
    fn test_blank_fields_become_none() {
        assert_eq!(optional("   ".into()), None);
        assert_eq!(optional(" body ".into()), Some("body".into()));
        assert_eq!(parse_tags("rust, ,design,"), vec!["rust", "design"]);
    }
}

use serde::Deserialize;

/// 筛选状态 - 列表页的用户输入，随视图创建和销毁
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterState {
    /// 搜索关键词，空字符串表示不按文本筛选
    pub search_term: String,
    /// 选中的标签，None 表示不按标签筛选
    pub selected_tag: Option<String>,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    pub fn select_tag(&mut self, tag: impl Into<String>) {
        self.selected_tag = Some(tag.into());
    }

    /// 对应列表页的 "All" 按钮
    pub fn clear_tag(&mut self) {
        self.selected_tag = None;
    }

    pub fn selected_tag(&self) -> Option<&str> {
        self.selected_tag.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.search_term.is_empty() && self.selected_tag.is_none()
    }
}

use wasm_bindgen::prelude::*;
use web_sys::console;

// 导出模块
pub mod builder;
pub mod catalog;
pub mod error;
pub mod fixtures;
pub mod messages;
pub mod models;
pub mod state;

pub use catalog::{derive_tags, filter_posts, find_by_id, lookup, matches, select_featured, select_remainder, PostCatalog};
pub use error::CatalogError;
pub use messages::{NO_MATCHES_MESSAGE, POST_NOT_FOUND_MESSAGE, POST_NOT_FOUND_TITLE};
pub use models::{CatalogSnapshot, FilterResult, LookupResult, PostLookup};
pub use state::FilterState;

#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

/// 初始化函数 - 设置错误处理
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
}

/// 版本信息
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

fn to_js_error(context: &str, err: impl std::fmt::Display) -> JsValue {
    let message = format!("{}: {}", context, err);
    console::log_1(&JsValue::from_str(&message));
    JsValue::from_str(&message)
}

/// 文章目录JS接口 - 每个实例持有自己的目录，由调用方管理生命周期
#[wasm_bindgen]
pub struct PostCatalogJS {
    catalog: PostCatalog,
}

#[wasm_bindgen]
impl PostCatalogJS {
    /// 从压缩目录数据创建
    #[wasm_bindgen(constructor)]
    pub fn new(index_data: &[u8]) -> Result<PostCatalogJS, JsValue> {
        let catalog = PostCatalog::from_compressed(index_data)
            .map_err(|e| to_js_error("加载目录失败", e))?;
        Ok(Self { catalog })
    }

    /// 从JSON文章数组创建
    #[wasm_bindgen(js_name = fromJson)]
    pub fn from_json(json: &str) -> Result<PostCatalogJS, JsValue> {
        let catalog = PostCatalog::from_json(json)
            .map_err(|e| to_js_error("加载文章JSON失败", e))?;
        Ok(Self { catalog })
    }

    /// 使用内置示例文章创建
    #[wasm_bindgen]
    pub fn sample() -> PostCatalogJS {
        Self { catalog: PostCatalog::sample() }
    }

    #[wasm_bindgen]
    pub fn len(&self) -> usize {
        self.catalog.len()
    }

    /// 获取所有标签
    #[wasm_bindgen(js_name = allTags)]
    pub fn all_tags(&self) -> js_sys::Array {
        self.catalog
            .tags()
            .into_iter()
            .map(|tag| JsValue::from_str(&tag))
            .collect()
    }

    /// 筛选文章，参数为 FilterState 的JSON
    #[wasm_bindgen(js_name = filterPosts)]
    pub fn filter_posts(&self, state_json: &str) -> Result<JsValue, JsValue> {
        let state: FilterState = serde_json::from_str(state_json)
            .map_err(|e| to_js_error("解析筛选参数失败", e))?;

        let result = self.catalog.filter_result(&state);

        serde_wasm_bindgen::to_value(&result)
            .map_err(|e| to_js_error("序列化筛选结果失败", e))
    }

    /// 按ID查找文章，找不到时返回 notFound 状态而不是错误
    #[wasm_bindgen(js_name = findPost)]
    pub fn find_post(&self, id: u32) -> Result<JsValue, JsValue> {
        let result = LookupResult::from(self.catalog.lookup(id));

        serde_wasm_bindgen::to_value(&result)
            .map_err(|e| to_js_error("序列化文章失败", e))
    }
}

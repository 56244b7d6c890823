//! ブラウザ永続ストレージ
//!
//! localStorage を共通クレートの ContextStore として公開する。
//! ストレージが無効・容量超過などで失敗しても呼び出し側には
//! 伝播させない（その操作は単に無視される）。

use wine_catalog_common::store::ContextStore;

/// localStorage バックエンド
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStore;

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl ContextStore for BrowserStore {
    fn get(&self, key: &str) -> Option<String> {
        local_storage().and_then(|storage| storage.get_item(key).ok().flatten())
    }

    fn set(&mut self, key: &str, value: &str) {
        if let Some(storage) = local_storage() {
            let _ = storage.set_item(key, value);
        }
    }

    fn remove(&mut self, key: &str) {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(key);
        }
    }
}

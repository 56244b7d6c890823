//! 永続ストレージ抽象
//!
//! ナビゲーション状態のミラー先となるキーバリューストア。
//! ブラウザでは localStorage、テストではインメモリ実装を使う。
//! 読み書きは同期で、失敗はエラーとして表面化しない。

use std::collections::HashMap;

/// 文字列キーバリューストア
pub trait ContextStore {
    /// キーに対応する値を返す（無ければ None）
    fn get(&self, key: &str) -> Option<String>;

    /// 値を書き込む
    fn set(&mut self, key: &str, value: &str);

    /// キーを削除する
    fn remove(&mut self, key: &str);
}

/// インメモリ実装（テスト用）
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 保持しているキー数
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl ContextStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }
}

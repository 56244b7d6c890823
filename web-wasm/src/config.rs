//! リモートデータストア設定
//!
//! Supabase の URL と anon キーはビルド時の環境変数から埋め込む。
//! 未設定のままでもビルドは通り、APIアクセスが設定エラーになるだけ。

use gloo::console;

pub const SUPABASE_URL: Option<&str> = option_env!("SUPABASE_URL");
pub const SUPABASE_ANON_KEY: Option<&str> = option_env!("SUPABASE_ANON_KEY");

/// REST エンドポイントの URL を組み立てる
pub fn rest_endpoint(resource_and_query: &str) -> Option<String> {
    SUPABASE_URL.map(|base| {
        format!(
            "{}/rest/v1/{}",
            base.trim_end_matches('/'),
            resource_and_query
        )
    })
}

pub fn anon_key() -> Option<&'static str> {
    SUPABASE_ANON_KEY
}

/// 起動時に設定状況だけをログに出す（値そのものは出さない）
pub fn report_configuration() {
    let url_status = if SUPABASE_URL.is_some() {
        "configured"
    } else {
        "not configured"
    };
    let key_status = if SUPABASE_ANON_KEY.is_some() {
        "configured"
    } else {
        "not configured"
    };
    console::log!("Supabase URL:", url_status);
    console::log!("Supabase Key:", key_status);
}

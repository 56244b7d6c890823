//! PostgREST クライアント（共通処理）
//!
//! 読み取り専用: すべてのクエリは GET で、anon キーを付けて送る。

use serde::de::DeserializeOwned;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};
use wine_catalog_common::{Error, Result};

use crate::config;

/// クエリを実行して行の配列をデシリアライズする
pub(crate) async fn get_rows<T: DeserializeOwned>(resource_and_query: &str) -> Result<Vec<T>> {
    let body = get_json(resource_and_query).await?;
    Ok(serde_json::from_str(&body)?)
}

/// クエリを実行してレスポンスボディを文字列で返す
async fn get_json(resource_and_query: &str) -> Result<String> {
    let url = config::rest_endpoint(resource_and_query)
        .ok_or_else(|| Error::Config("remote store URL is not configured".to_string()))?;
    let key = config::anon_key()
        .ok_or_else(|| Error::Config("remote store anon key is not configured".to_string()))?;

    let resp = fetch(&url, key).await.map_err(js_error)?;
    if !resp.ok() {
        return Err(Error::Http(resp.status()));
    }

    let text = JsFuture::from(resp.text().map_err(js_error)?)
        .await
        .map_err(js_error)?;
    Ok(text.as_string().unwrap_or_default())
}

/// GET リクエストを送信する
async fn fetch(url: &str, key: &str) -> std::result::Result<Response, JsValue> {
    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);

    let request = Request::new_with_str_and_init(url, &opts)?;
    request.headers().set("apikey", key)?;
    request
        .headers()
        .set("Authorization", &format!("Bearer {}", key))?;

    let window = web_sys::window().unwrap();
    let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
    resp_value.dyn_into()
}

fn js_error(value: JsValue) -> Error {
    Error::Fetch(format!("{:?}", value))
}

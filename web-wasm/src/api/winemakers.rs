//! ワインメーカーAPI

use gloo::console;
use wine_catalog_common::Winemaker;

use super::client;

const COLUMNS: &str = "id,name,bio,photo_url,region";

/// 全ワインメーカーを取得する
pub async fn get_all_winemakers() -> Vec<Winemaker> {
    let query = format!("winemakers?select={}&order=name", COLUMNS);
    match client::get_rows::<Winemaker>(&query).await {
        Ok(makers) => makers,
        Err(e) => {
            console::error!("Error fetching winemakers:", e.to_string());
            Vec::new()
        }
    }
}

/// ワインメーカー1件の詳細を取得する
pub async fn get_winemaker_by_id(id: &str) -> Option<Winemaker> {
    let query = format!("winemakers?select={}&id=eq.{}", COLUMNS, id);
    match client::get_rows::<Winemaker>(&query).await {
        Ok(rows) => rows.into_iter().next(),
        Err(e) => {
            console::error!(
                format!("Error fetching winemaker with ID {}:", id),
                e.to_string()
            );
            None
        }
    }
}

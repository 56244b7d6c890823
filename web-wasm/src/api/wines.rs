//! ワインAPI
//!
//! 取得失敗はコンソールに記録し、空リスト / None に落とす。
//! 呼び出し側（ページ）はエラーを意識しない。

use gloo::console;
use wine_catalog_common::{Place, Wine};

use super::client;

/// 一覧表示に必要な列
const LIST_COLUMNS: &str = "id,name,type,grape,owner,wine_media(url,media_type,description)";

/// 詳細表示に必要な列
const DETAIL_COLUMNS: &str = "id,name,type,grape,owner,story,production,tasting_notes,\
place_id,winemaker_id,wine_media(id,url,media_type,description)";

/// ギャラリー用に全ワインを取得する
pub async fn get_all_wines() -> Vec<Wine> {
    let query = format!("wines?select={}&order=name", LIST_COLUMNS);
    match client::get_rows::<Wine>(&query).await {
        Ok(wines) => wines,
        Err(e) => {
            console::error!("Error fetching wines:", e.to_string());
            Vec::new()
        }
    }
}

/// ワイン1件の詳細を取得する
pub async fn get_wine_by_id(id: &str) -> Option<Wine> {
    let query = format!("wines?select={}&id=eq.{}", DETAIL_COLUMNS, id);
    match client::get_rows::<Wine>(&query).await {
        Ok(rows) => rows.into_iter().next(),
        Err(e) => {
            console::error!(
                format!("Error fetching wine with ID {}:", id),
                e.to_string()
            );
            None
        }
    }
}

/// 特定ワインメーカーのワイン一覧を取得する
pub async fn get_wines_by_winemaker(winemaker_id: &str) -> Vec<Wine> {
    let query = format!(
        "wines?select={}&winemaker_id=eq.{}&order=name",
        LIST_COLUMNS, winemaker_id
    );
    match client::get_rows::<Wine>(&query).await {
        Ok(wines) => wines,
        Err(e) => {
            console::error!(
                format!("Error fetching wines for winemaker {}:", winemaker_id),
                e.to_string()
            );
            Vec::new()
        }
    }
}

/// ワインの産地情報を取得する
pub async fn get_wine_place(place_id: &str) -> Option<Place> {
    let query = format!(
        "places?select=id,region,country,story&id=eq.{}",
        place_id
    );
    match client::get_rows::<Place>(&query).await {
        Ok(rows) => rows.into_iter().next(),
        Err(e) => {
            console::error!(format!("Error fetching place {}:", place_id), e.to_string());
            None
        }
    }
}

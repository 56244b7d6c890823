//! カタログのドメイン型
//!
//! リモートデータストア（PostgREST）の行をそのまま表す型:
//! - Wine: ワイン（一覧では基本項目のみ、詳細では全項目）
//! - Winemaker: ワインメーカー
//! - Media: ワインに紐づく画像・動画
//! - Place: 産地

use serde::{Deserialize, Serialize};

/// メディア種別
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    #[default]
    Image,
    Video,
    #[serde(other)]
    Unknown,
}

/// ワインに紐づくメディア
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Media {
    pub id: Option<String>,
    pub url: String,
    pub media_type: MediaType,
    pub description: Option<String>,
}

impl Media {
    pub fn is_image(&self) -> bool {
        self.media_type == MediaType::Image
    }
}

/// ワイン
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Wine {
    pub id: String,
    pub name: String,

    /// ワインのタイプ（red / white など）
    #[serde(rename = "type")]
    pub wine_type: String,

    pub grape: String,
    pub owner: String,

    pub story: Option<String>,
    pub production: Option<String>,
    pub tasting_notes: Option<String>,

    pub place_id: Option<String>,
    pub winemaker_id: Option<String>,

    pub wine_media: Vec<Media>,
}

impl Wine {
    /// 最初の画像メディア（ギャラリーカードのサムネイル用）
    pub fn first_image(&self) -> Option<&Media> {
        self.wine_media.iter().find(|m| m.is_image())
    }

    /// 名前に含まれる4桁のヴィンテージ年を抽出する
    ///
    /// 例: "Gran Reserva 2015" -> Some("2015")
    pub fn vintage_year(&self) -> Option<&str> {
        let bytes = self.name.as_bytes();
        let mut start = None;
        let mut run = 0usize;

        for (i, b) in bytes.iter().enumerate() {
            if b.is_ascii_digit() {
                if run == 0 {
                    start = Some(i);
                }
                run += 1;
            } else {
                if run == 4 {
                    break;
                }
                run = 0;
                start = None;
            }
        }

        match (start, run) {
            (Some(i), 4) => self.name.get(i..i + 4),
            _ => None,
        }
    }
}

/// ワインメーカー
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Winemaker {
    pub id: String,
    pub name: String,
    pub bio: Option<String>,
    pub photo_url: Option<String>,
    pub region: Option<String>,
}

/// 産地
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Place {
    pub id: String,
    pub region: String,
    pub country: String,
    pub story: Option<String>,
}

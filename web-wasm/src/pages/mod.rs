pub mod contact;
pub mod wine_detail;
pub mod wine_gallery;
pub mod wine_not_found;
pub mod winemaker_detail;
pub mod winemakers;

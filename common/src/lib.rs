//! Wine Catalog Common Library
//!
//! Web(WASM)フロントエンドと共有される型とナビゲーションコア

pub mod error;
pub mod navigation;
pub mod route;
pub mod store;
pub mod types;

pub use error::{Error, Result};
pub use navigation::{
    back_link, BackLink, DetailPage, EntityRef, NavigationState, NavigationTracker, SourceContext,
};
pub use route::RouteKind;
pub use store::{ContextStore, MemoryStore};
pub use types::{Media, MediaType, Place, Wine, Winemaker};

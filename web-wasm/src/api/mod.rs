//! リモートカタログAPI

mod client;
pub mod winemakers;
pub mod wines;

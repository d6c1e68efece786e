//! ルート定義
//!
//! ドラフトサーバーのREST APIエンドポイント一覧

use crate::endpoint::{Endpoint, RouteDescriptor};

mod drafts;
mod join;
mod pick;
mod user;

pub use drafts::RouteDraftList;
pub use join::RouteJoin;
pub use pick::RoutePick;
pub use user::RouteUserInfo;

/// 登録済みの全エンドポイント記述子
pub fn all() -> &'static [RouteDescriptor] {
    const ROUTES: &[RouteDescriptor] = &[
        RoutePick::DESCRIPTOR,
        RouteJoin::DESCRIPTOR,
        RouteDraftList::DESCRIPTOR,
        RouteUserInfo::DESCRIPTOR,
    ];
    ROUTES
}

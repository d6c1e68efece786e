use r38_common::types::{NoParams, UserInfo};

use crate::endpoint::{Endpoint, Method, RouteDescriptor};

/// `GET /api/userinfo/`
///
/// ログイン中ユーザーの情報
#[derive(Debug, Clone, Copy)]
pub struct RouteUserInfo;

impl Endpoint for RouteUserInfo {
    type Query = NoParams;
    type Body = NoParams;
    type Response = UserInfo;

    const DESCRIPTOR: RouteDescriptor = RouteDescriptor::new(Method::Get, "/api/userinfo/");
}

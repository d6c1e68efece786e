use r38_common::types::{PickQuery, PostedPick, SourceData};

use crate::endpoint::{Endpoint, Method, RouteDescriptor};

/// `POST /api/pick/`
///
/// カードをピックし、更新後のリプレイデータを受け取る。
#[derive(Debug, Clone, Copy)]
pub struct RoutePick;

impl Endpoint for RoutePick {
    type Query = PickQuery;
    type Body = PostedPick;
    type Response = SourceData;

    const DESCRIPTOR: RouteDescriptor = RouteDescriptor::new(Method::Post, "/api/pick/");
}

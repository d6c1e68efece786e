use r38_common::types::{NoParams, PostedJoin, SourceData};

use crate::endpoint::{Endpoint, Method, RouteDescriptor};

/// `POST /api/join/`
///
/// ドラフトに参加し、参加後の視点のリプレイデータを受け取る。
#[derive(Debug, Clone, Copy)]
pub struct RouteJoin;

impl Endpoint for RouteJoin {
    type Query = NoParams;
    type Body = PostedJoin;
    type Response = SourceData;

    const DESCRIPTOR: RouteDescriptor = RouteDescriptor::new(Method::Post, "/api/join/");
}

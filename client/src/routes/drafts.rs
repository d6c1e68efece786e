use r38_common::types::{DraftList, NoParams};

use crate::endpoint::{Endpoint, Method, RouteDescriptor};

/// `GET /api/draftlist/`
#[derive(Debug, Clone, Copy)]
pub struct RouteDraftList;

impl Endpoint for RouteDraftList {
    type Query = NoParams;
    type Body = NoParams;
    type Response = DraftList;

    const DESCRIPTOR: RouteDescriptor = RouteDescriptor::new(Method::Get, "/api/draftlist/");
}

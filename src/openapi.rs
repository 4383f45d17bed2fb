use utoipa::OpenApi;

use crate::api::uploads::{BidList, BidRecord};

#[derive(OpenApi)]
#[openapi(
    paths(crate::api::uploads::upload_bids),
    components(schemas(BidList, BidRecord)),
    tags((name = "Uploads", description = "Bid sheet uploads"))
)]
pub struct ApiDoc;

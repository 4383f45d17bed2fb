use actix_web::{http::header, web, HttpRequest, HttpResponse};
use chrono::NaiveDate;
use log::debug;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, ToSchema)]
pub struct BidRecord {
    pub project: String,
    pub client: String,
    pub estimator: String,
    /// Free-form for now, the demo record leaves it empty
    pub status: String,
    pub amount: u64,
    #[serde(rename = "bidDueDate")]
    pub bid_due_date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, ToSchema)]
pub struct BidList {
    pub bids: Vec<BidRecord>,
}

// Placeholder data until uploads are actually parsed
pub fn demo_bids() -> BidList {
    BidList {
        bids: vec![BidRecord {
            project: "Demo Project".to_string(),
            client: "Client A".to_string(),
            estimator: "You".to_string(),
            status: String::new(),
            amount: 100_000,
            bid_due_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap_or_default(),
        }],
    }
}

#[utoipa::path(
    post,
    path = "/api/uploads",
    tag = "Uploads",
    responses(
        (status = 200, description = "Bids extracted from the upload", body = BidList),
        (status = 405, description = "Method Not Allowed", body = String, content_type = "text/plain"),
    )
)]
pub async fn upload_bids() -> HttpResponse {
    HttpResponse::Ok().json(demo_bids())
}

pub async fn method_not_allowed(req: HttpRequest) -> HttpResponse {
    debug!("Rejected {} {}", req.method(), req.path());
    HttpResponse::MethodNotAllowed()
        .insert_header((header::ALLOW, "POST"))
        .content_type("text/plain; charset=utf-8")
        .body("Method Not Allowed")
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/uploads")
            .route(web::post().to(upload_bids))
            .default_service(web::to(method_not_allowed)),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{
        http::StatusCode,
        test::{call_service, init_service, read_body, read_body_json, TestRequest},
        App,
    };

    #[test]
    fn demo_bids_holds_exactly_one_record() {
        let list = demo_bids();
        assert_eq!(list.bids.len(), 1);

        let bid = &list.bids[0];
        assert_eq!(bid.project, "Demo Project");
        assert_eq!(bid.client, "Client A");
        assert_eq!(bid.estimator, "You");
        assert!(bid.status.is_empty());
        assert_eq!(bid.amount, 100000);
        assert_eq!(bid.bid_due_date.to_string(), "2024-01-01");
    }

    #[test]
    fn bid_record_uses_wire_field_names() {
        let json = serde_json::to_string(&demo_bids()).unwrap();
        assert_eq!(
            json,
            r#"{"bids":[{"project":"Demo Project","client":"Client A","estimator":"You","status":"","amount":100000,"bidDueDate":"2024-01-01"}]}"#
        );
    }

    #[actix_web::test]
    async fn post_returns_demo_bids() {
        let app = init_service(App::new().configure(init_routes)).await;
        let req = TestRequest::post().uri("/uploads").to_request();
        let resp = call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: BidList = read_body_json(resp).await;
        assert_eq!(body, demo_bids());
    }

    #[actix_web::test]
    async fn get_is_rejected_with_allow_header() {
        let app = init_service(App::new().configure(init_routes)).await;
        let req = TestRequest::get().uri("/uploads").to_request();
        let resp = call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(resp.headers().get(header::ALLOW).unwrap(), "POST");

        let body = read_body(resp).await;
        assert_eq!(body, "Method Not Allowed");
    }
}

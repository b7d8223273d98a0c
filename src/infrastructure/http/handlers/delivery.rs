//! Delivery Handlers

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::application::{
    GetPackageDetails, ListDeliveryPackages, Row, ScanToLoad, UpdatePackageStatus,
};
use crate::domain::delivery::{DeliveryStatus, ListLimit};
use crate::infrastructure::http::dto::DeliveryListResponseDto;
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub search: Option<String>,
    pub status: Option<String>,
    pub top: Option<i64>,
}

pub async fn list_packages(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListParams>,
) -> Result<Json<DeliveryListResponseDto>, ApiError> {
    let query = ListDeliveryPackages {
        search: params.search,
        status: params
            .status
            .as_deref()
            .map(str::parse::<DeliveryStatus>)
            .transpose()?,
        top: params.top.map(ListLimit::new).transpose()?.unwrap_or_default(),
    };

    let list = state.delivery_query_handler.list(query).await?;

    Ok(Json(DeliveryListResponseDto {
        items: list.items,
        counts: list.counts,
    }))
}

pub async fn package_details(
    State(state): State<Arc<AppState>>,
    Path(package_number): Path<String>,
) -> Result<Json<Row>, ApiError> {
    let details = state
        .delivery_query_handler
        .details(GetPackageDetails { package_number })
        .await?;

    Ok(Json(details))
}

async fn update_status(
    state: &AppState,
    package_number: String,
    status: DeliveryStatus,
) -> Result<Json<Row>, ApiError> {
    let updated = state
        .delivery_handler
        .update_status(UpdatePackageStatus {
            package_number,
            status,
        })
        .await?;

    Ok(Json(updated))
}

pub async fn mark_loaded(
    State(state): State<Arc<AppState>>,
    Path(package_number): Path<String>,
) -> Result<Json<Row>, ApiError> {
    update_status(&state, package_number, DeliveryStatus::Loaded).await
}

pub async fn mark_to_load(
    State(state): State<Arc<AppState>>,
    Path(package_number): Path<String>,
) -> Result<Json<Row>, ApiError> {
    update_status(&state, package_number, DeliveryStatus::ToLoad).await
}

pub async fn mark_delivered(
    State(state): State<Arc<AppState>>,
    Path(package_number): Path<String>,
) -> Result<Json<Row>, ApiError> {
    update_status(&state, package_number, DeliveryStatus::Delivered).await
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanToLoadRequest {
    pub scanned_number: String,
}

pub async fn scan_to_load(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ScanToLoadRequest>,
) -> Result<Json<Row>, ApiError> {
    let loaded = state
        .delivery_handler
        .scan_to_load(ScanToLoad {
            scanned_number: req.scanned_number,
        })
        .await?;

    Ok(Json(loaded))
}

#[cfg(test)]
mod tests {
    use axum::http::{Method, StatusCode};
    use serde_json::json;
    use std::sync::Arc;

    use crate::application::{procedures, ProcParam};
    use crate::infrastructure::adapters::FakeProcedureInvoker;
    use crate::infrastructure::http::test_support::{json_request, request, send, test_app};

    #[tokio::test]
    async fn test_list_with_counts() {
        let invoker = Arc::new(FakeProcedureInvoker::new());
        invoker.respond_sets(
            procedures::DELIVERY_LIST_PACKAGES,
            vec![
                vec![
                    json!({"PackageNumber": "PKG-000001", "Status": "To Load"}),
                    json!({"PackageNumber": "PKG-000002", "Status": "Loaded"}),
                ],
                vec![json!({"Total": 2, "ToLoad": 1, "Loaded": 1})],
            ],
        );

        let (status, body) = send(test_app(invoker.clone()), request(Method::GET, "/delivery/list")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["items"].as_array().unwrap().len(), 2);
        assert_eq!(body["counts"], json!({"Total": 2, "ToLoad": 1, "Loaded": 1}));
        assert_eq!(
            invoker.calls()[0].params,
            vec![ProcParam::Null, ProcParam::Null, ProcParam::Int(100)]
        );
    }

    #[tokio::test]
    async fn test_list_without_result_sets() {
        let (status, body) = send(
            test_app(Arc::new(FakeProcedureInvoker::new())),
            request(Method::GET, "/delivery/list?status=To%20Load&top=10"),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({"items": [], "counts": {"Total": 0, "ToLoad": 0, "Loaded": 0}})
        );
    }

    #[tokio::test]
    async fn test_list_rejects_bad_filters() {
        let invoker = Arc::new(FakeProcedureInvoker::new());
        let app = test_app(invoker.clone());

        let (status, _) = send(app.clone(), request(Method::GET, "/delivery/list?status=Shipped")).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

        let (status, _) = send(app.clone(), request(Method::GET, "/delivery/list?top=0")).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

        let (status, _) = send(app, request(Method::GET, "/delivery/list?top=501")).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

        assert!(invoker.calls().is_empty());
    }

    #[tokio::test]
    async fn test_details_not_found() {
        let (status, body) = send(
            test_app(Arc::new(FakeProcedureInvoker::new())),
            request(Method::GET, "/delivery/PKG-404"),
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({"detail": "Package not found"}));
    }

    #[tokio::test]
    async fn test_status_transitions() {
        let invoker = Arc::new(FakeProcedureInvoker::new());
        invoker.respond(
            procedures::DELIVERY_MARK_LOADED,
            vec![json!({"PackageNumber": "PKG-000001", "Status": "Loaded"})],
        );
        let app = test_app(invoker.clone());

        let (status, body) = send(app.clone(), request(Method::POST, "/delivery/PKG-000001/mark-loaded")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["Status"], "Loaded");

        let (status, body) = send(app.clone(), request(Method::POST, "/delivery/PKG-000001/mark-to-load")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"detail": "Could not revert to 'To Load'"}));

        let (status, body) = send(app, request(Method::POST, "/delivery/PKG-000001/mark-delivered")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"detail": "Could not mark delivered"}));

        let names: Vec<_> = invoker.calls().into_iter().map(|c| c.name).collect();
        assert_eq!(
            names,
            vec![
                procedures::DELIVERY_MARK_LOADED,
                procedures::DELIVERY_MARK_TO_LOAD,
                procedures::DELIVERY_MARK_DELIVERED
            ]
        );
    }

    #[tokio::test]
    async fn test_scan_to_load_body() {
        let invoker = Arc::new(FakeProcedureInvoker::new());
        invoker.respond(
            procedures::DELIVERY_SCAN_TO_LOAD,
            vec![json!({"PackageNumber": "PKG-000003", "Status": "Loaded"})],
        );

        let (status, body) = send(
            test_app(invoker.clone()),
            json_request(
                Method::POST,
                "/delivery/scan-to-load",
                &json!({"scannedNumber": "PKG-000003"}),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["PackageNumber"], "PKG-000003");
        assert_eq!(
            invoker.calls()[0].params,
            vec![ProcParam::Text("PKG-000003".to_string())]
        );
    }
}

//! Stock-take Handlers

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::application::{
    AddStockCount, FinishStockTake, ListStockItems, Row, StartStockTake, UndoLastStockCount,
};
use crate::domain::stock::CountQuantity;
use crate::infrastructure::http::dto::{ItemsResponse, StockFinishResponseDto};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartStockParams {
    pub user_id: i64,
    pub name: Option<String>,
}

pub async fn start_stock_take(
    State(state): State<Arc<AppState>>,
    Query(params): Query<StartStockParams>,
) -> Result<Json<Row>, ApiError> {
    let session = state
        .stock_handler
        .start(StartStockTake {
            user_id: params.user_id,
            name: params.name,
        })
        .await?;

    Ok(Json(session))
}

#[derive(Debug, Deserialize)]
pub struct StockItemsParams {
    pub search: Option<String>,
}

pub async fn stock_items(
    State(state): State<Arc<AppState>>,
    Path(stock_take_id): Path<i64>,
    Query(params): Query<StockItemsParams>,
) -> Result<Json<ItemsResponse<Row>>, ApiError> {
    let items = state
        .list_stock_items_handler
        .handle(ListStockItems {
            stock_take_id,
            search: params.search,
        })
        .await?;

    Ok(Json(ItemsResponse::new(items)))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddCountParams {
    pub stock_take_id: i64,
    pub barcode_or_sku: String,
    pub qty: Option<i64>,
}

pub async fn add_stock_count(
    State(state): State<Arc<AppState>>,
    Query(params): Query<AddCountParams>,
) -> Result<Json<Row>, ApiError> {
    let qty = params.qty.map(CountQuantity::new).transpose()?.unwrap_or_default();

    let counted = state
        .stock_handler
        .add_count(AddStockCount {
            stock_take_id: params.stock_take_id,
            barcode_or_sku: params.barcode_or_sku,
            qty,
        })
        .await?;

    Ok(Json(counted))
}

pub async fn undo_last_stock_count(
    State(state): State<Arc<AppState>>,
    Path(stock_take_id): Path<i64>,
) -> Result<Json<Row>, ApiError> {
    let undone = state
        .stock_handler
        .undo_last(UndoLastStockCount { stock_take_id })
        .await?;

    Ok(Json(undone))
}

pub async fn finish_stock_take(
    State(state): State<Arc<AppState>>,
    Path(stock_take_id): Path<i64>,
) -> Result<Json<StockFinishResponseDto>, ApiError> {
    let result = state
        .stock_handler
        .finish(FinishStockTake { stock_take_id })
        .await?;

    Ok(Json(StockFinishResponseDto {
        header: result.header,
        totals: result.totals,
        discrepancies: result.discrepancies,
    }))
}

#[cfg(test)]
mod tests {
    use axum::http::{Method, StatusCode};
    use serde_json::json;
    use std::sync::Arc;

    use crate::application::{procedures, ProcParam};
    use crate::infrastructure::adapters::FakeProcedureInvoker;
    use crate::infrastructure::http::test_support::{request, send, test_app};

    #[tokio::test]
    async fn test_start_with_optional_name() {
        let invoker = Arc::new(FakeProcedureInvoker::new());
        invoker.respond(procedures::STOCK_START_SESSION, vec![json!({"StockTakeId": 4})]);

        let (status, body) = send(
            test_app(invoker.clone()),
            request(Method::POST, "/stock/start?userId=5&name=Aisle%203"),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"StockTakeId": 4}));
        assert_eq!(
            invoker.calls()[0].params,
            vec![ProcParam::Int(5), ProcParam::Text("Aisle 3".to_string())]
        );
    }

    #[tokio::test]
    async fn test_add_count_validates_qty() {
        let invoker = Arc::new(FakeProcedureInvoker::new());
        invoker.respond(procedures::STOCK_ADD_COUNT, vec![json!({"Sku": "A-1", "Counted": 1})]);
        let app = test_app(invoker.clone());

        let (status, _) = send(app.clone(), request(Method::POST, "/stock/add?stockTakeId=4&barcodeOrSku=A-1&qty=0")).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(invoker.calls().is_empty());

        let (status, body) = send(app, request(Method::POST, "/stock/add?stockTakeId=4&barcodeOrSku=A-1")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["Counted"], 1);
        assert_eq!(invoker.calls()[0].params[2], ProcParam::Int(1));
    }

    #[tokio::test]
    async fn test_undo_nothing_to_undo() {
        let (status, body) = send(
            test_app(Arc::new(FakeProcedureInvoker::new())),
            request(Method::POST, "/stock/4/undo-last"),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"detail": "Nothing to undo"}));
    }

    #[tokio::test]
    async fn test_items_and_finish() {
        let invoker = Arc::new(FakeProcedureInvoker::new());
        invoker.respond(procedures::STOCK_LIST_ITEMS, vec![json!({"Sku": "A-1", "Counted": 3})]);
        invoker.respond_sets(
            procedures::STOCK_FINISH,
            vec![
                vec![json!({"StockTakeId": 4, "Status": "Finished"})],
                vec![json!({"Lines": 2, "Variance": -1})],
                vec![json!({"Sku": "A-1", "Expected": 4, "Counted": 3})],
            ],
        );
        let app = test_app(invoker.clone());

        let (status, body) = send(app.clone(), request(Method::GET, "/stock/4/items?search=A-")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"items": [{"Sku": "A-1", "Counted": 3}]}));

        let (status, body) = send(app, request(Method::POST, "/stock/4/finish")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["header"]["Status"], "Finished");
        assert_eq!(body["totals"], json!({"Lines": 2, "Variance": -1}));
        assert_eq!(body["discrepancies"].as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_finish_without_result_sets() {
        let (status, body) = send(
            test_app(Arc::new(FakeProcedureInvoker::new())),
            request(Method::POST, "/stock/4/finish"),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"header": {}, "totals": {}, "discrepancies": []}));
    }
}

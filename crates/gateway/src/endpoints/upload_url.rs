//! # POST /upload-url
//!
//! チケット画像アップロード用の署名付きURL発行。

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use ticket_image_types::{UploadUrlRequest, UploadUrlResponse};

use crate::config::GatewayState;
use crate::error::GatewayError;

/// POST /upload-url — 署名付きURL発行。
///
/// アップロード用PUT URLと表示用GET URLのペアを発行する。
/// ファイルの中身はこのGatewayを経由せず、クライアントが
/// ストレージへ直接アップロードする。
pub async fn handle_upload_url(
    State(state): State<Arc<GatewayState>>,
    Json(body): Json<UploadUrlRequest>,
) -> Result<Json<UploadUrlResponse>, GatewayError> {
    let response = state.issuer.request_upload_url(&body).await?;
    Ok(Json(response))
}

//! # POST /view-url
//!
//! 保存済み画像参照の表示用署名付きURLへの解決。

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use ticket_image_issuer::VIEW_URL_EXPIRY_SECS;
use ticket_image_types::{ViewUrlRequest, ViewUrlResponse};

use crate::config::GatewayState;

/// POST /view-url — 表示URL解決。
///
/// 解決できない参照は入力のまま返す（画像1枚の参照切れで
/// 呼び出し元のページ描画を失敗させない）。この操作は失敗しない。
pub async fn handle_view_url(
    State(state): State<Arc<GatewayState>>,
    Json(body): Json<ViewUrlRequest>,
) -> Json<ViewUrlResponse> {
    let expires_in_secs = body.expires_in_seconds.unwrap_or(VIEW_URL_EXPIRY_SECS);
    let url = match body.url {
        Some(stored) if !stored.trim().is_empty() => {
            Some(state.issuer.resolve_view_url(&stored, expires_in_secs).await)
        }
        // null・空文字はそのまま返す
        other => other,
    };
    Json(ViewUrlResponse { url })
}

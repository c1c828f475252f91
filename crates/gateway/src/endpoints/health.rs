//! # GET /healthz
//!
//! サービス状態公開エンドポイント。

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use ticket_image_types::ServiceHealth;

use crate::config::GatewayState;

/// GET /healthz — サービス状態公開。
///
/// 運用者・監視がどの署名経路が有効かを確認するために返却する。
pub async fn handle_health(State(state): State<Arc<GatewayState>>) -> Json<ServiceHealth> {
    Json(ServiceHealth {
        status: "ok".to_string(),
        bucket: state.issuer.bucket_name().map(str::to_string),
        remote_presign_configured: state.issuer.remote_configured(),
        upload_url_expiry_secs: state.issuer.upload_url_expiry_secs(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::endpoints::test_helpers::{mock_state, unconfigured_state};

    /// 設定済みバケットがヘルスに反映されることを確認
    #[tokio::test]
    async fn test_health_reports_bucket() {
        let health = handle_health(State(mock_state())).await.0;
        assert_eq!(health.status, "ok");
        assert_eq!(health.bucket.as_deref(), Some("demo-bucket"));
        assert!(!health.remote_presign_configured);
        assert_eq!(health.upload_url_expiry_secs, 300);
    }

    /// 未設定状態でもヘルス自体は返ることを確認
    #[tokio::test]
    async fn test_health_unconfigured() {
        let health = handle_health(State(unconfigured_state())).await.0;
        assert_eq!(health.status, "ok");
        assert!(health.bucket.is_none());
    }
}

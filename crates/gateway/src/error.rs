//! # Gateway エラー型
//!
//! 発行器のエラー種別をHTTPステータスへ対応付ける。

use axum::http::StatusCode;
use ticket_image_issuer::IssuerError;

/// Gatewayエラー型。
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// 発行処理のエラー
    #[error(transparent)]
    Issuer(#[from] IssuerError),
}

impl axum::response::IntoResponse for GatewayError {
    fn into_response(self) -> axum::response::Response {
        let status = match &self {
            GatewayError::Issuer(inner) => match inner {
                // クライアント入力の問題。再送しても同じ結果になる。
                IssuerError::BadRequest(_) => StatusCode::BAD_REQUEST,
                // 運用者による設定修正が必要。
                IssuerError::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
                // 上流依存の一時障害。呼び出し側は時間をおいて再試行できる。
                IssuerError::Signing(_) | IssuerError::Remote(_) => StatusCode::BAD_GATEWAY,
            },
        };
        (status, self.to_string()).into_response()
    }
}

//! # エンドポイントテスト用共通ヘルパー
//!
//! S3への接続なしでGatewayStateを構築するモック群。

use std::sync::Arc;

use ticket_image_issuer::{
    IssuerError, TicketImageStorage, UploadMetadata, UploadUrlIssuer,
    DEFAULT_UPLOAD_URL_EXPIRY_SECS,
};

use crate::config::GatewayState;

/// テスト用のモックストレージ。署名付きURLのダミーを返す。
pub struct MockStorage;

#[async_trait::async_trait]
impl TicketImageStorage for MockStorage {
    async fn presign_upload(
        &self,
        object_key: &str,
        content_type: &str,
        _metadata: &UploadMetadata,
        expiry_secs: u32,
    ) -> Result<String, IssuerError> {
        Ok(format!(
            "http://mock-storage/upload/{object_key}?X-Amz-Signature=put&ct={content_type}&e={expiry_secs}"
        ))
    }

    async fn presign_view(&self, object_key: &str, expiry_secs: u32) -> Result<String, IssuerError> {
        Ok(format!(
            "http://mock-storage/view/{object_key}?X-Amz-Signature=view&e={expiry_secs}"
        ))
    }

    fn bucket_name(&self) -> &str {
        "demo-bucket"
    }
}

/// モックストレージ入りのGatewayStateを構築する。
pub fn mock_state() -> Arc<GatewayState> {
    Arc::new(GatewayState {
        issuer: UploadUrlIssuer::new(
            None,
            Some(Box::new(MockStorage)),
            DEFAULT_UPLOAD_URL_EXPIRY_SECS,
        ),
    })
}

/// ストレージなしのGatewayStateを構築する。
pub fn unconfigured_state() -> Arc<GatewayState> {
    Arc::new(GatewayState {
        issuer: UploadUrlIssuer::new(None, None, DEFAULT_UPLOAD_URL_EXPIRY_SECS),
    })
}

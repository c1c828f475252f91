//! # S3互換ストレージバックエンド
//!
//! AWS S3, MinIO, Cloudflare R2 等のS3互換APIを使用する
//! [`TicketImageStorage`]実装。

use http::{HeaderMap, HeaderName, HeaderValue};

use super::{TicketImageStorage, UploadMetadata};
use crate::error::IssuerError;

/// リージョン未指定時のフォールバック
const DEFAULT_REGION: &str = "ap-southeast-1";

/// S3互換ストレージによる署名付きURL生成。
/// AWS S3, MinIO, Cloudflare R2 等のS3互換APIを使用する。
pub struct S3TicketStorage {
    bucket: s3::Bucket,
    bucket_name: String,
}

impl S3TicketStorage {
    /// S3互換バケットからストレージを構築する。
    pub fn new(
        endpoint: &str,
        region: Option<&str>,
        access_key: &str,
        secret_key: &str,
        bucket_name: &str,
        path_style: bool,
    ) -> anyhow::Result<Self> {
        let region = s3::Region::Custom {
            region: region
                .map(str::to_string)
                .unwrap_or_else(|| detect_region(endpoint)),
            endpoint: endpoint.to_string(),
        };

        let credentials =
            s3::creds::Credentials::new(Some(access_key), Some(secret_key), None, None, None)?;

        let bucket = s3::Bucket::new(bucket_name, region, credentials)?;
        let bucket = if path_style {
            bucket.with_path_style()
        } else {
            bucket
        };

        Ok(Self {
            bucket: *bucket,
            bucket_name: bucket_name.to_string(),
        })
    }

    /// 環境変数から構築する。
    ///
    /// `S3_BUCKET`が未設定の場合は`Ok(None)`（ローカル署名は利用不可）。
    pub fn from_env() -> anyhow::Result<Option<Self>> {
        let bucket_name = match std::env::var("S3_BUCKET") {
            Ok(name) if !name.trim().is_empty() => name,
            _ => return Ok(None),
        };

        let endpoint =
            std::env::var("S3_ENDPOINT").unwrap_or_else(|_| "http://localhost:9000".to_string());
        let access_key =
            std::env::var("S3_ACCESS_KEY").unwrap_or_else(|_| "minioadmin".to_string());
        let secret_key =
            std::env::var("S3_SECRET_KEY").unwrap_or_else(|_| "minioadmin".to_string());
        let region = std::env::var("S3_REGION").ok();
        let path_style = std::env::var("S3_PATH_STYLE")
            .map(|v| v != "false")
            .unwrap_or(true);

        let storage = Self::new(
            &endpoint,
            region.as_deref(),
            &access_key,
            &secret_key,
            &bucket_name,
            path_style,
        )?;
        Ok(Some(storage))
    }
}

/// AWSエンドポイント（s3.REGION.amazonaws.com）からリージョンを検出する。
/// 非AWSエンドポイントではフォールバックリージョンを使用する。
fn detect_region(endpoint: &str) -> String {
    if let Some(start) = endpoint.find("s3.") {
        let rest = &endpoint[start + 3..];
        if let Some(end) = rest.find(".amazonaws.com") {
            return rest[..end].to_string();
        }
    }
    DEFAULT_REGION.to_string()
}

/// メタデータ値をヘッダ値へ変換する。opaqueな識別子のみが渡される想定で、
/// ヘッダに載らない文字が含まれていれば不正入力として扱う。
fn meta_value(value: &str) -> Result<HeaderValue, IssuerError> {
    HeaderValue::from_str(value)
        .map_err(|_| IssuerError::BadRequest("メタデータ値に使用できない文字が含まれています".to_string()))
}

#[async_trait::async_trait]
impl TicketImageStorage for S3TicketStorage {
    async fn presign_upload(
        &self,
        object_key: &str,
        content_type: &str,
        metadata: &UploadMetadata,
        expiry_secs: u32,
    ) -> Result<String, IssuerError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            http::header::CONTENT_TYPE,
            HeaderValue::from_str(content_type).map_err(|_| {
                IssuerError::BadRequest("Content-Typeに使用できない文字が含まれています".to_string())
            })?,
        );
        headers.insert(
            HeaderName::from_static("x-amz-meta-ticket-id"),
            meta_value(&metadata.ticket_id)?,
        );
        headers.insert(
            HeaderName::from_static("x-amz-meta-property-id"),
            meta_value(metadata.property_id.as_deref().unwrap_or_default())?,
        );
        headers.insert(
            HeaderName::from_static("x-amz-meta-uploader-id"),
            meta_value(metadata.uploader_id.as_deref().unwrap_or_default())?,
        );

        self.bucket
            .presign_put(object_key, expiry_secs, Some(headers), None)
            .await
            .map_err(|e| IssuerError::Signing(format!("署名付きアップロードURL生成失敗: {e}")))
    }

    async fn presign_view(&self, object_key: &str, expiry_secs: u32) -> Result<String, IssuerError> {
        self.bucket
            .presign_get(object_key, expiry_secs, None)
            .await
            .map_err(|e| IssuerError::Signing(format!("署名付き表示URL生成失敗: {e}")))
    }

    fn bucket_name(&self) -> &str {
        &self.bucket_name
    }
}

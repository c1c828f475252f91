//! # Gateway設定・共有状態
//!
//! 環境変数からの設定読み込みとGatewayの共有状態の定義。

use ticket_image_issuer::{
    RemotePresignClient, S3TicketStorage, TicketImageStorage, UploadUrlIssuer,
    DEFAULT_UPLOAD_URL_EXPIRY_SECS,
};

/// Gatewayの共有状態。
pub struct GatewayState {
    /// アップロードURL発行器（リモート/ローカルの選択はここに閉じる）
    pub issuer: UploadUrlIssuer,
}

impl GatewayState {
    /// 環境変数から構築する。
    ///
    /// 認識する変数:
    /// - `S3_BUCKET` / `S3_ENDPOINT` / `S3_REGION` / `S3_ACCESS_KEY` /
    ///   `S3_SECRET_KEY` / `S3_PATH_STYLE` — ローカル署名用
    /// - `UPLOAD_URL_EXPIRATION_SECONDS` — アップロードURLの有効期限（省略時300）
    /// - `PRESIGN_ENDPOINT` / `PRESIGN_API_KEY` / `PRESIGN_API_KEY_HEADER`
    ///   — リモート署名エンドポイント用
    pub fn from_env() -> anyhow::Result<Self> {
        let upload_url_expiry_secs = std::env::var("UPLOAD_URL_EXPIRATION_SECONDS")
            .ok()
            .and_then(|v| v.parse::<u32>().ok())
            .unwrap_or(DEFAULT_UPLOAD_URL_EXPIRY_SECS);

        let storage = S3TicketStorage::from_env()?;
        let storage: Option<Box<dyn TicketImageStorage>> = match storage {
            Some(s) => {
                tracing::info!(bucket = %s.bucket_name(), "ローカル署名を有効化");
                Some(Box::new(s))
            }
            None => None,
        };

        let remote = std::env::var("PRESIGN_ENDPOINT")
            .ok()
            .filter(|e| !e.trim().is_empty())
            .map(|endpoint| {
                tracing::info!("リモート署名エンドポイントを有効化");
                RemotePresignClient::new(
                    reqwest::Client::new(),
                    endpoint,
                    std::env::var("PRESIGN_API_KEY").ok(),
                    std::env::var("PRESIGN_API_KEY_HEADER").ok(),
                )
            });

        if storage.is_none() && remote.is_none() {
            tracing::warn!(
                "バケットも署名エンドポイントも未設定です。アップロードURL発行はすべて失敗します"
            );
        }

        Ok(Self {
            issuer: UploadUrlIssuer::new(remote, storage, upload_url_expiry_secs),
        })
    }
}

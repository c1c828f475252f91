//! # アップロードURL発行器
//!
//! リモート署名エンドポイントとローカルのS3互換署名を一つの
//! インターフェースに束ねる。どちらを使うかは設定で決まり、
//! リモートが失敗した場合はローカル署名を一度だけ試す
//! （バックオフやリトライループはない）。

use ticket_image_types::{
    UploadUrlRequest, UploadUrlResponse, MAX_CONTENT_TYPE_LEN, MAX_FILE_NAME_LEN,
};

use crate::error::IssuerError;
use crate::key;
use crate::remote::RemotePresignClient;
use crate::storage::{TicketImageStorage, UploadMetadata};

/// アップロードURLの有効期限のデフォルト（秒）
pub const DEFAULT_UPLOAD_URL_EXPIRY_SECS: u32 = 300;
/// 表示URLの有効期限（秒）。アップロードURLより長寿命の固定値。
pub const VIEW_URL_EXPIRY_SECS: u32 = 3600;

/// Content-Type未指定時のデフォルト
const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

/// アップロードURL発行器。
///
/// 呼び出し間で状態を持たない。同一チケットへの並行リクエストも
/// キー内のランダムトークンにより調整なしで衝突しない。
pub struct UploadUrlIssuer {
    remote: Option<RemotePresignClient>,
    storage: Option<Box<dyn TicketImageStorage>>,
    upload_url_expiry_secs: u32,
}

/// 検証済みのリクエスト値。
struct ValidatedUpload {
    ticket_id: String,
    file_name: String,
    content_type: String,
}

impl UploadUrlIssuer {
    /// 発行器を構築する。
    ///
    /// `remote`と`storage`はどちらも省略できるが、両方未設定の発行器は
    /// すべてのリクエストに設定エラーを返す。
    pub fn new(
        remote: Option<RemotePresignClient>,
        storage: Option<Box<dyn TicketImageStorage>>,
        upload_url_expiry_secs: u32,
    ) -> Self {
        Self {
            remote,
            storage,
            upload_url_expiry_secs,
        }
    }

    /// ローカル署名に使うバケット名。ストレージ未設定ならNone。
    pub fn bucket_name(&self) -> Option<&str> {
        self.storage.as_deref().map(|s| s.bucket_name())
    }

    /// リモート署名エンドポイントが設定されているか。
    pub fn remote_configured(&self) -> bool {
        self.remote.is_some()
    }

    /// アップロードURLの有効期限（秒）。
    pub fn upload_url_expiry_secs(&self) -> u32 {
        self.upload_url_expiry_secs
    }

    /// アップロード用・表示用の署名付きURLのペアを発行する。
    ///
    /// リモートエンドポイントが設定されていればまず中継し、失敗したら
    /// ローカル署名を一度だけ試す。両方失敗すれば全体が失敗する。
    pub async fn request_upload_url(
        &self,
        request: &UploadUrlRequest,
    ) -> Result<UploadUrlResponse, IssuerError> {
        let validated = validate(request)?;

        if let Some(remote) = &self.remote {
            match remote.request_upload_url(request).await {
                Ok(response) => {
                    tracing::info!(
                        ticket_id = %validated.ticket_id,
                        "リモートエンドポイントでアップロードURLを発行"
                    );
                    return Ok(response);
                }
                Err(e) => {
                    if self.storage.is_none() {
                        return Err(e);
                    }
                    tracing::warn!(
                        ticket_id = %validated.ticket_id,
                        error = %e,
                        "リモート署名に失敗、ローカル署名へフォールバック"
                    );
                }
            }
        }

        let Some(storage) = &self.storage else {
            return Err(IssuerError::Configuration(
                "バケットも署名エンドポイントも設定されていません".to_string(),
            ));
        };

        let object_key = key::object_key(&validated.ticket_id, &validated.file_name);
        let metadata = UploadMetadata {
            ticket_id: validated.ticket_id.clone(),
            property_id: request.property_id.clone(),
            uploader_id: request.uploader_id.clone(),
        };

        let upload_url = storage
            .presign_upload(
                &object_key,
                &validated.content_type,
                &metadata,
                self.upload_url_expiry_secs,
            )
            .await?;
        let view_url = storage.presign_view(&object_key, VIEW_URL_EXPIRY_SECS).await?;

        tracing::info!(ticket_id = %validated.ticket_id, "アップロードURLを発行");

        Ok(UploadUrlResponse {
            upload_url,
            view_url,
            key: object_key,
            bucket: storage.bucket_name().to_string(),
            expires_in_seconds: self.upload_url_expiry_secs,
        })
    }

    /// 保存済みの画像参照を表示用の署名付きURLへ解決する。
    ///
    /// 解決できない参照は入力のまま返して劣化動作する。画像1枚の
    /// 参照切れでチケット詳細ページ全体を失敗させないため、
    /// この操作はエラーを返さない。
    pub async fn resolve_view_url(&self, stored: &str, expires_in_secs: u32) -> String {
        if stored.trim().is_empty() {
            return stored.to_string();
        }
        if key::is_presigned_url(stored) {
            return stored.to_string();
        }

        let Some(storage) = &self.storage else {
            tracing::warn!("ストレージ未設定のため画像参照を未解決のまま返します");
            return stored.to_string();
        };
        let Some(object_key) = key::extract_object_key(stored, storage.bucket_name()) else {
            tracing::warn!("画像参照からオブジェクトキーを抽出できませんでした");
            return stored.to_string();
        };

        match storage.presign_view(object_key, expires_in_secs).await {
            Ok(url) => url,
            Err(e) => {
                tracing::warn!(error = %e, "表示URLの署名に失敗、元の参照を返します");
                stored.to_string()
            }
        }
    }
}

/// リクエストの必須フィールドと長さ制限を検証する。
///
/// 識別子の形式（UUID等）の検証は呼び出し元のフレームワークの責務で、
/// ここでは存在と長さのみを確認する。
fn validate(request: &UploadUrlRequest) -> Result<ValidatedUpload, IssuerError> {
    let ticket_id = request.ticket_id.trim();
    let file_name = request.file_name.trim();
    if ticket_id.is_empty() || file_name.is_empty() {
        return Err(IssuerError::BadRequest(
            "ticketIdとfileNameは必須です".to_string(),
        ));
    }
    if file_name.chars().count() > MAX_FILE_NAME_LEN {
        return Err(IssuerError::BadRequest(format!(
            "fileNameは{MAX_FILE_NAME_LEN}文字以内である必要があります"
        )));
    }

    let content_type = match request.content_type.as_deref().map(str::trim) {
        Some(ct) if !ct.is_empty() => ct.to_string(),
        _ => DEFAULT_CONTENT_TYPE.to_string(),
    };
    if content_type.chars().count() > MAX_CONTENT_TYPE_LEN {
        return Err(IssuerError::BadRequest(format!(
            "contentTypeは{MAX_CONTENT_TYPE_LEN}文字以内である必要があります"
        )));
    }

    Ok(ValidatedUpload {
        ticket_id: ticket_id.to_string(),
        file_name: file_name.to_string(),
        content_type,
    })
}

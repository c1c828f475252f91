//! # ストレージバックエンド
//!
//! 署名付きURL生成の抽象インターフェース。
//! S3互換ストレージ実装は `s3` サブモジュールを参照。

pub mod s3;

pub use self::s3::S3TicketStorage;

use crate::error::IssuerError;

/// 署名付きPUT URLに束縛するオブジェクトメタデータ（`x-amz-meta-*`）。
///
/// 値はopaqueな識別子のみ。生のファイル名やトークンは含めない。
#[derive(Debug, Clone, Default)]
pub struct UploadMetadata {
    /// 対象チケットの識別子
    pub ticket_id: String,
    /// 対象物件の識別子
    pub property_id: Option<String>,
    /// アップロードするユーザーの識別子
    pub uploader_id: Option<String>,
}

/// ストレージバックエンドの抽象インターフェース。
///
/// 運用者はS3互換ストレージ（MinIO, AWS S3, Cloudflare R2等）や
/// その他のバックエンドを実装として選択できる。署名は認証情報を使った
/// ローカルな計算で、ネットワークI/Oは発生しない。
#[async_trait::async_trait]
pub trait TicketImageStorage: Send + Sync {
    /// オブジェクトキーに対する署名付きPUT URLを生成する。
    ///
    /// Content-Typeは署名に束縛される。異なる`Content-Type`ヘッダでの
    /// アップロードはストレージ側で拒否される。
    async fn presign_upload(
        &self,
        object_key: &str,
        content_type: &str,
        metadata: &UploadMetadata,
        expiry_secs: u32,
    ) -> Result<String, IssuerError>;

    /// オブジェクトキーに対する署名付きGET URLを生成する。
    async fn presign_view(&self, object_key: &str, expiry_secs: u32) -> Result<String, IssuerError>;

    /// 署名対象のバケット名。
    fn bucket_name(&self) -> &str;
}

//! # アップロードURL発行ライブラリ
//!
//! チケット画像のアップロード用・表示用の署名付きURLを発行する。
//! ファイルの中身には一切触れず、権限スコープ付きのURLだけを発行する。
//!
//! ## 構成
//! - [`sanitize`]: 信頼できないファイル名のサニタイズ
//! - [`key`]: オブジェクトキーの導出とURLからのキー抽出
//! - [`storage`]: ストレージバックエンドの抽象インターフェース（S3互換実装付き）
//! - [`remote`]: リモート署名エンドポイントへの中継クライアント
//! - [`issuer`]: リモート→ローカルのフォールバックを束ねる発行器

pub mod error;
pub mod issuer;
pub mod key;
pub mod remote;
pub mod sanitize;
pub mod storage;

pub use error::IssuerError;
pub use issuer::{UploadUrlIssuer, DEFAULT_UPLOAD_URL_EXPIRY_SECS, VIEW_URL_EXPIRY_SECS};
pub use remote::RemotePresignClient;
pub use storage::{S3TicketStorage, TicketImageStorage, UploadMetadata};

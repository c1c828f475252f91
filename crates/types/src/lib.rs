//! # チケット画像サービス 共有型定義
//!
//! アップロードURL発行APIのリクエスト/レスポンスをRust構造体として提供する。
//!
//! ## エンコーディング規則
//! - JSONフィールド名はcamelCase（ブラウザクライアント・既存Webアプリと互換）
//! - 省略可能なフィールドは欠落時にシリアライズしない

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// 制限値
// ---------------------------------------------------------------------------

/// ファイル名の最大長（文字数）
pub const MAX_FILE_NAME_LEN: usize = 260;
/// Content-Typeの最大長（文字数）
pub const MAX_CONTENT_TYPE_LEN: usize = 120;

// ---------------------------------------------------------------------------
// アップロードURL発行
// ---------------------------------------------------------------------------

/// アップロードURL発行リクエスト。
///
/// `ticket_id`と`file_name`は必須。`file_name`は信頼できない入力として
/// 扱われ、オブジェクトキーに使われる前にサニタイズされる。
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadUrlRequest {
    /// 対象チケットの識別子（opaque ID）
    pub ticket_id: String,
    /// 対象物件の識別子（呼び出し元によっては省略される）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub property_id: Option<String>,
    /// クライアントが申告したファイル名（未検証の生文字列）
    pub file_name: String,
    /// MIMEタイプ。欠落・空の場合は`application/octet-stream`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    /// アップロードするユーザーの識別子（省略可能）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uploader_id: Option<String>,
}

/// アップロードURL発行レスポンス。
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadUrlResponse {
    /// 署名付きPUT URL（時間制限付き）
    pub upload_url: String,
    /// 署名付きGET URL（アップロード直後のプレビュー用、PUTより長寿命）
    pub view_url: String,
    /// 発行側が決定したオブジェクトキー
    pub key: String,
    /// 保存先バケット名
    pub bucket: String,
    /// upload_urlの有効期限（秒）
    pub expires_in_seconds: u32,
}

// ---------------------------------------------------------------------------
// 表示URL解決
// ---------------------------------------------------------------------------

/// 保存済み画像参照の表示URL解決リクエスト。
///
/// `url`には完全なストレージURL・裸のオブジェクトキー・署名済みURLの
/// いずれも渡せる。解決できない場合は入力がそのまま返る。
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewUrlRequest {
    /// 保存されている画像参照（null可）
    #[serde(default)]
    pub url: Option<String>,
    /// 署名付きGET URLの有効期限（秒）。省略時は3600
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_in_seconds: Option<u32>,
}

/// 表示URL解決レスポンス。
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewUrlResponse {
    /// 解決後のURL。入力がnull/空ならそのまま返る
    pub url: Option<String>,
}

// ---------------------------------------------------------------------------
// ヘルスチェック
// ---------------------------------------------------------------------------

/// サービス状態。GET /healthz で返却される。
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceHealth {
    /// "ok" 固定
    pub status: String,
    /// ローカル署名に使うバケット名（未設定ならnull）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bucket: Option<String>,
    /// リモート署名エンドポイントが設定されているか
    pub remote_presign_configured: bool,
    /// アップロードURLの有効期限（秒）
    pub upload_url_expiry_secs: u32,
}

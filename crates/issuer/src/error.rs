//! # 発行器エラー型
//!
//! 全発行経路で共通のエラー型。HTTPステータスへの対応付けは
//! Gateway側（`crates/gateway/src/error.rs`）で行う。

/// アップロードURL発行のエラー型。
#[derive(Debug, thiserror::Error)]
pub enum IssuerError {
    /// ストレージもリモート署名エンドポイントも未設定（運用者による修正が必要）
    #[error("ストレージが設定されていません: {0}")]
    Configuration(String),
    /// 不正なリクエスト（必須フィールド欠落、長さ超過等）
    #[error("不正なリクエスト: {0}")]
    BadRequest(String),
    /// 署名付きURL生成に失敗（認証情報エラー等、再試行可能）
    #[error("署名付きURL生成に失敗: {0}")]
    Signing(String),
    /// リモート署名エンドポイントへの中継に失敗（再試行可能）
    #[error("署名エンドポイントへの中継に失敗: {0}")]
    Remote(String),
}

//! # リモート署名エンドポイントへの中継
//!
//! サーバーレス版の署名エンドポイントにリクエストを転送し、
//! 発行済みレスポンスを受け取るクライアント。
//!
//! エンドポイントのレスポンスは2形式を受理する:
//! - `UploadUrlResponse`そのもの
//! - API Gatewayプロキシ統合形式（`{"statusCode":200,"body":"<JSON文字列>"}`）

use ticket_image_types::{UploadUrlRequest, UploadUrlResponse};

use crate::error::IssuerError;

/// APIキーヘッダ名のデフォルト
const DEFAULT_API_KEY_HEADER: &str = "x-api-key";

/// リモート署名エンドポイントのクライアント。
pub struct RemotePresignClient {
    endpoint: String,
    api_key: Option<String>,
    api_key_header: String,
    http_client: reqwest::Client,
}

impl RemotePresignClient {
    /// 新しいクライアントを作成する。
    ///
    /// # 引数
    /// - `endpoint`: 署名エンドポイントのURL
    /// - `api_key`: APIキー（省略可能）
    /// - `api_key_header`: APIキーを載せるヘッダ名。省略時は`x-api-key`
    pub fn new(
        http_client: reqwest::Client,
        endpoint: String,
        api_key: Option<String>,
        api_key_header: Option<String>,
    ) -> Self {
        let api_key_header = api_key_header
            .filter(|h| !h.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_KEY_HEADER.to_string());
        Self {
            endpoint,
            api_key,
            api_key_header,
            http_client,
        }
    }

    /// リクエストをエンドポイントに中継し、発行済みレスポンスを返す。
    ///
    /// 失敗は[`IssuerError::Remote`]として返り、呼び出し側が
    /// ローカル署名へのフォールバックを判断する。リトライはしない。
    pub async fn request_upload_url(
        &self,
        request: &UploadUrlRequest,
    ) -> Result<UploadUrlResponse, IssuerError> {
        let mut http_request = self.http_client.post(&self.endpoint).json(request);
        if let Some(api_key) = &self.api_key {
            http_request = http_request.header(&self.api_key_header, api_key);
        }

        let response = http_request
            .send()
            .await
            .map_err(|e| IssuerError::Remote(format!("HTTP送信失敗: {e}")))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| IssuerError::Remote(format!("レスポンス読み取り失敗: {e}")))?;

        if !status.is_success() {
            return Err(IssuerError::Remote(format!(
                "署名エンドポイントがエラーを返しました: HTTP {status}"
            )));
        }

        parse_presign_response(&body)
    }
}

/// エンドポイントのレスポンス本文をパースする。
///
/// プロキシ統合形式（外殻の`body`がJSON文字列）を先に試し、
/// 該当しなければ`UploadUrlResponse`として直接パースする。
fn parse_presign_response(body: &str) -> Result<UploadUrlResponse, IssuerError> {
    let value: serde_json::Value = serde_json::from_str(body)
        .map_err(|e| IssuerError::Remote(format!("レスポンスのパースに失敗: {e}")))?;

    if let Some(inner) = value.get("body").and_then(|b| b.as_str()) {
        return serde_json::from_str(inner)
            .map_err(|e| IssuerError::Remote(format!("プロキシ統合レスポンスのパースに失敗: {e}")));
    }

    serde_json::from_value(value)
        .map_err(|e| IssuerError::Remote(format!("レスポンスのパースに失敗: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_response_json() -> String {
        serde_json::to_string(&UploadUrlResponse {
            upload_url: "https://demo-bucket.s3.amazonaws.com/k?X-Amz-Signature=put".to_string(),
            view_url: "https://demo-bucket.s3.amazonaws.com/k?X-Amz-Signature=get".to_string(),
            key: "tickets/t1/abc-a.png".to_string(),
            bucket: "demo-bucket".to_string(),
            expires_in_seconds: 300,
        })
        .unwrap()
    }

    /// 素のレスポンス本文がパースできることを確認
    #[test]
    fn test_parse_plain_response() {
        let parsed = parse_presign_response(&sample_response_json()).unwrap();
        assert_eq!(parsed.key, "tickets/t1/abc-a.png");
        assert_eq!(parsed.bucket, "demo-bucket");
        assert_eq!(parsed.expires_in_seconds, 300);
    }

    /// プロキシ統合形式の外殻が剥がされることを確認
    #[test]
    fn test_parse_proxy_envelope_response() {
        let envelope = serde_json::json!({
            "statusCode": 200,
            "body": sample_response_json(),
        });
        let parsed = parse_presign_response(&envelope.to_string()).unwrap();
        assert_eq!(parsed.key, "tickets/t1/abc-a.png");
    }

    /// 不正な本文がRemoteエラーになることを確認
    #[test]
    fn test_parse_invalid_response() {
        assert!(matches!(
            parse_presign_response("not json"),
            Err(IssuerError::Remote(_))
        ));
        assert!(matches!(
            parse_presign_response(r#"{"statusCode":200,"body":"not json"}"#),
            Err(IssuerError::Remote(_))
        ));
    }
}

//! # オブジェクトキー
//!
//! オブジェクトキーの導出と、保存済みURLからのキー抽出。
//!
//! キーは`tickets/{ticketId}/{ランダムトークン}-{サニタイズ済みファイル名}`。
//! ランダムトークン（UUID v4）により同名ファイルの同時アップロードでも
//! 衝突せず、チケット単位のプレフィックスで後からの一括操作が可能になる。

use crate::sanitize::sanitize_file_name;

/// チケットIDとファイル名からオブジェクトキーを導出する。
///
/// 呼び出しごとに新しいランダムトークンを含むため、同一引数でも
/// 毎回異なるキーが返る。
pub fn object_key(ticket_id: &str, file_name: &str) -> String {
    format!(
        "tickets/{}/{}-{}",
        ticket_id,
        uuid::Uuid::new_v4(),
        sanitize_file_name(file_name)
    )
}

/// URLが既に署名済みかどうかを判定する。
///
/// 署名済みURLの再署名は不要で、有効期限が二重になり紛らわしいため、
/// 解決処理はこれをそのまま通す。
pub fn is_presigned_url(url: &str) -> bool {
    url.contains('?') && (url.contains("X-Amz-") || url.contains("AWSAccessKeyId"))
}

/// 保存済みURLまたは裸のキーからオブジェクトキーを抽出する。
///
/// 認識する形式:
/// - `https://{bucket}.s3.<ホスト>/key`（virtual-hosted形式）
/// - `https://s3.<ホスト>/{bucket}/key`（path形式）
/// - スキームなしの文字列は既にキーとみなしてそのまま返す
///
/// それ以外（CDN経由、http://エンドポイント等）は`None`を返し、
/// 呼び出し側は入力をそのまま返して劣化動作する。
pub fn extract_object_key<'a>(url: &'a str, bucket: &str) -> Option<&'a str> {
    if url.starts_with("http://") {
        return None;
    }
    let Some(rest) = url.strip_prefix("https://") else {
        return Some(url);
    };

    let (host, path) = rest.split_once('/')?;
    if path.is_empty() {
        return None;
    }

    let virtual_host_prefix = format!("{bucket}.s3.");
    if host
        .strip_prefix(virtual_host_prefix.as_str())
        .is_some_and(|suffix| !suffix.is_empty())
    {
        return Some(path);
    }

    if host.starts_with("s3.") {
        let key = path.strip_prefix(bucket)?.strip_prefix('/')?;
        return (!key.is_empty()).then_some(key);
    }

    None
}

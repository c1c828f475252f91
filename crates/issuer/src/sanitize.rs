//! # ファイル名サニタイズ
//!
//! クライアント申告のファイル名は信頼できない入力として扱う。
//! パストラバーサル・ヘッダインジェクション・キー破損を防ぎつつ、
//! 人間が読める名前を保つ。

/// ファイル名をオブジェクトキーに安全に埋め込める形へ変換する。
///
/// 前後の空白を除去し、`[A-Za-z0-9_.-]`以外の文字の連続を単一の`-`に
/// 置き換える。`-`の連続も単一の`-`に畳み込む。
pub fn sanitize_file_name(file_name: &str) -> String {
    let trimmed = file_name.trim();
    let mut out = String::with_capacity(trimmed.len());
    for c in trimmed.chars() {
        if c.is_ascii_alphanumeric() || c == '_' || c == '.' {
            out.push(c);
        } else if !out.ends_with('-') {
            out.push('-');
        }
    }
    out
}

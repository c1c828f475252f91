//! # チケット画像Gateway
//!
//! 物件管理Webアプリのチケット画像アップロードを支えるGateway。
//! ファイルの中身には触れず、権限スコープ付きの時間制限URLだけを発行する。
//!
//! ## 役割
//! - アップロード用・表示用の署名付きURL発行
//! - 保存済み画像参照の表示URL解決
//! - ブラウザからの直接呼び出しのためのCORS応答
//!
//! ## API エンドポイント
//! - `POST /upload-url` — 署名付きURL発行
//! - `POST /view-url` — 表示URL解決
//! - `GET /healthz` — サービス状態公開

mod config;
mod endpoints;
mod error;

use std::sync::Arc;

use axum::http::Method;
use tower_http::cors::{Any, CorsLayer};

/// axumルーターを構築する。
fn app(state: Arc<config::GatewayState>) -> axum::Router {
    // ブラウザクライアントが直接呼び出すため、プリフライトに応答する
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any);

    axum::Router::new()
        .route(
            "/upload-url",
            axum::routing::post(endpoints::handle_upload_url),
        )
        .route("/view-url", axum::routing::post(endpoints::handle_view_url))
        .route("/healthz", axum::routing::get(endpoints::handle_health))
        .layer(cors)
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let state = Arc::new(config::GatewayState::from_env()?);
    let app = app(state);

    let addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
    tracing::info!("Gatewayを {} で起動します", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

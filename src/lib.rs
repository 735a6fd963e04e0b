#[macro_use]
extern crate rocket;

use migration::{Migrator, MigratorTrait};
use rocket::fs::{relative, FileServer};
use rocket::serde::json::Json;
use rocket::Build;
use rocket_dyn_templates::Template;

pub mod controllers;
pub mod db;
pub mod entities;
pub mod errors;
pub mod services;
pub mod validation;

/// Rocketインスタンスを構築する関数。
/// 接続先は環境変数 `DATABASE_URL` (未設定ならローカルのSQLiteファイル)。
pub async fn build_rocket() -> rocket::Rocket<Build> {
    // .envファイルを読み込む (環境変数の読み込み)
    dotenvy::dotenv().ok();

    let db_url = std::env::var("DATABASE_URL")
        .unwrap_or_else(|_| "sqlite://kos.db?mode=rwc".to_string());
    build_rocket_with_db(&db_url).await
}

/// 接続先URLを指定してRocketインスタンスを構築する関数。
/// テストが専用のデータベースを渡せるように分離しています。
pub async fn build_rocket_with_db(db_url: &str) -> rocket::Rocket<Build> {
    // 1. データベース接続
    let db = db::set_up_db(db_url).await.expect("Failed to connect to DB");

    // 2. マイグレーションの実行 (起動時に自動でテーブルを作成)
    Migrator::up(&db, None).await.expect("Failed to run migrations");

    // 3. Rocketインスタンスの構築
    rocket::build()
        .manage(db)
        .attach(Template::fairing())
        .mount("/", routes![index])
        .mount("/api", routes![health])
        .mount("/api", controllers::rooms::routes())
        .mount("/api", controllers::tenants::routes())
        .mount("/api", controllers::payments::routes())
        .mount("/static", FileServer::from(relative!("static")))
}

/// SPAのシェルを返すトップページ。
#[get("/")]
fn index() -> Template {
    Template::render("index", rocket_dyn_templates::context! {
        title: "Kos Manager",
    })
}

/// 死活監視用エンドポイント。
#[get("/health")]
fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use std::time::Duration;

/// データベース接続プールをセットアップします。
pub async fn set_up_db(db_url: &str) -> Result<DatabaseConnection, DbErr> {
    let mut options = ConnectOptions::new(db_url.to_string());

    // メモリ上のSQLiteは接続が全て閉じた時点でデータベースごと消えるため、
    // 単一接続を常時維持し、アイドル回収・寿命による再接続を事実上止める。
    // 再接続が起きるとマイグレーション済みのスキーマが失われる。
    if db_url.contains(":memory:") || db_url.contains("mode=memory") {
        options
            .min_connections(1)
            .max_connections(1)
            .idle_timeout(Duration::from_secs(24 * 60 * 60))
            .max_lifetime(Duration::from_secs(24 * 60 * 60));
    }

    // Database::connect は接続プールを自動的に作成します
    Database::connect(options).await
}

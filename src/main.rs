#[macro_use]
extern crate rocket;

use kos_manager::build_rocket;

/// アプリケーションのメインエントリーポイント。
#[launch]
async fn rocket() -> _ {
    build_rocket().await
}

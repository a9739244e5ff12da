use std::env;

use actix_web::{middleware, web, App, HttpServer};
use tera::Tera;

use webmemo::store::MemoStore;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let port = match env::var("PORT") {
        Ok(value) => value.parse::<u16>().expect("PORT must be a port number"),
        Err(_) => 5000,
    };

    let database_url = "memos.db";
    let store = MemoStore::open(database_url).expect("failed to open the memo database");
    let templates = Tera::new("templates/**/*").expect("failed to parse templates");

    let store = web::Data::new(store);
    let templates = web::Data::new(templates);

    log::info!("listening on 0.0.0.0:{}", port);
    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .app_data(store.clone())
            .app_data(templates.clone())
            .configure(webmemo::routes)
    })
    .bind(format!("0.0.0.0:{}", port))?
    .run()
    .await
}

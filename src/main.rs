mod config;
mod db;
mod gql;
mod routes;

use actix_web::{middleware::Logger, web, App, HttpServer};
use clap::Parser;
use config::Config;
use db::Db;
use gql::build_schema;

#[actix_rt::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::parse();
    let db = if config.no_seed {
        Db::default()
    } else {
        Db::seeded()
    };
    let schema = web::Data::new(build_schema(db.into_storage()));

    log::info!(
        "GraphQL endpoint: http://{}:{}{}",
        config.host,
        config.port,
        config.endpoint
    );
    if config.playground {
        log::info!("Playground enabled on GET {}", config.endpoint);
    }

    let bind_addr = (config.host.clone(), config.port);
    HttpServer::new(move || {
        App::new()
            .wrap(routes::cors())
            .wrap(Logger::default())
            .app_data(schema.clone())
            .configure(|cfg| routes::configure(cfg, &config.endpoint, config.playground))
    })
    .bind(bind_addr)?
    .run()
    .await
}

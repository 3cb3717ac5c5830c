use actix_web::{web, App, HttpServer};

use campus_connect::{
    config::ServerConfig, database, handler, middleware::cors, security::PasswordHasher,
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();

    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = ServerConfig::from_env().map_err(std::io::Error::other)?;

    // a missing database is logged, not fatal
    let pool = database::initialize_db_pool(&config.database_url, config.database_pool_size);
    let hasher = PasswordHasher::new(config.bcrypt_cost);
    let cors_origins = config.cors_origins.clone();

    log::info!(
        "starting HTTP server at http://{}:{} (allowed origins: {})",
        config.host,
        config.port,
        config.cors_origins.join(", ")
    );

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(pool.clone()))
            .app_data(web::Data::new(hasher))
            .wrap(cors::policy(&cors_origins))
            .wrap(actix_web::middleware::Logger::default())
            .configure(handler::configure)
    })
    .bind((config.host.as_str(), config.port))?
    .workers(num_cpus::get() * 2)
    .run()
    .await
}

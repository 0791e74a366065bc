use actix_web::middleware::Logger;
use actix_web::{App, HttpServer, web};

use courses_api::db::establish_connection_pool;
use courses_api::models::config::ServerConfig;
use courses_api::repository::DieselRepository;
use courses_api::routes::courses::{
    create_course, delete_course, get_course, list_courses, update_course,
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let config = ServerConfig::load().map_err(std::io::Error::other)?;
    let pool = establish_connection_pool(&config.database_url).map_err(std::io::Error::other)?;
    let repo = DieselRepository::new(pool);

    log::info!("Listening on {}", config.bind_address);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(web::Data::new(repo.clone()))
            .service(
                web::scope("/api")
                    .service(list_courses)
                    .service(get_course)
                    .service(create_course)
                    .service(update_course)
                    .service(delete_course),
            )
    })
    .bind(&config.bind_address)?
    .run()
    .await
}

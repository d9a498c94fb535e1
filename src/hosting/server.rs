use super::*;
use crate::gameroom::*;
use actix_cors::Cors;
use actix_web::App;
use actix_web::HttpServer;
use actix_web::middleware::Logger;
use actix_web::web;

pub struct Server;

impl Server {
    pub async fn run(config: Config) -> anyhow::Result<()> {
        let lobby = web::Data::new(Lobby::new(config.store().await?));
        log::info!("starting hosting server on {}", config.bind);
        HttpServer::new(move || {
            App::new()
                .wrap(Logger::new("%r %s %Ts"))
                .wrap(
                    Cors::default()
                        .allow_any_origin()
                        .allow_any_method()
                        .allow_any_header(),
                )
                .app_data(lobby.clone())
                .configure(routes)
        })
        .workers(config.workers)
        .bind(&config.bind)?
        .run()
        .await?;
        Ok(())
    }
}

#[rustfmt::skip]
pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(handlers::health))
        .service(
            web::scope("/treasure")
                .route("/create",      web::post().to(handlers::create))
                .route("/{sid}/state", web::get().to(handlers::state))
                .route("/{sid}/roll",  web::post().to(handlers::roll))
                .route("/{sid}/choose",web::post().to(handlers::choose))
                .route("/{sid}/pass",  web::post().to(handlers::pass))
                .route("/{sid}/end",   web::post().to(handlers::end)),
        );
}

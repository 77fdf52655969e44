use std::io;

use actix_web::{web, App, HttpServer};
use log::info;

use crate::handlers;
use crate::state::AppState;

pub async fn run_server(state: AppState, port: u16) -> io::Result<()> {
    let state = web::Data::new(state);

    info!("Starting server on port {}", port);
    HttpServer::new(move || {
        App::new().app_data(state.clone()).service(
            web::scope("/api/v1")
                .route("/message", web::post().to(handlers::message::handler))
                .route("/health", web::get().to(handlers::health::handler)),
        )
    })
    .bind(format!("0.0.0.0:{}", port))?
    .run()
    .await
}

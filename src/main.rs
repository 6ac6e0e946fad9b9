use actix_cors::Cors;
use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};
use clap::Parser;
use log::{error, info};

use taskkit::auth::AuthMiddleware;
use taskkit::cli::{login_from_config, login_message, Args, Command};
use taskkit::config::{load_config, ServerConfig};
use taskkit::routes::{self, health, new_task_store};
use taskkit::AppError;

#[actix_web::main]
async fn main() -> Result<(), AppError> {
    dotenv::dotenv().ok();
    env_logger::init();

    let args = Args::parse();
    let config = load_config(&args.config).map_err(|e| {
        error!("could not load {}: {}", args.config.display(), e);
        e
    })?;

    match args.command.unwrap_or(Command::Login) {
        Command::Login => {
            let user = login_from_config(&config)?;
            println!("{}", login_message(user.as_ref()));
            Ok(())
        }
        Command::Serve => {
            let server = ServerConfig::from_config(&config)?;
            let store = new_task_store();

            info!("Starting taskkit server at {}", server.server_url());
            HttpServer::new(move || {
                App::new()
                    .app_data(store.clone())
                    .wrap(
                        Cors::default()
                            .allow_any_origin()
                            .allow_any_method()
                            .allow_any_header()
                            .max_age(3600),
                    )
                    .wrap(Logger::default())
                    .service(health::health)
                    .service(
                        web::scope("/api")
                            .wrap(AuthMiddleware)
                            .configure(routes::config),
                    )
            })
            .bind((server.host.as_str(), server.port))?
            .run()
            .await?;
            Ok(())
        }
    }
}

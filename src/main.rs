use etp_catalog::config::Settings;
use etp_catalog::web::app::run_app;
use log::error;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Loads .env first so RUST_LOG from the file applies to the logger
    let settings = Settings::from_env();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let settings = match settings {
        Ok(settings) => settings,
        Err(err) => {
            error!("Invalid configuration: {}", err);
            return Err(std::io::Error::new(std::io::ErrorKind::InvalidInput, err));
        }
    };

    run_app(settings).await
}

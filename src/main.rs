use axum_server::tls_rustls::RustlsConfig;
use clap::Parser;
use std::net::{IpAddr, SocketAddr};

use weather_backend::app::create_app;
use weather_backend::error::StartupError;
use weather_backend::provider::MockWeatherProvider;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Ip to listen to
    #[arg(short, long, env = "IP", default_value = "0.0.0.0")]
    ip: String,

    /// Port to listen to
    #[arg(short, long, env = "PORT", default_value_t = 3001)]
    port: u16,

    #[arg(short, long, env = "KEY_FILE_PATH")]
    key_file_path: Option<String>,

    #[arg(short, long, env = "CERT_FILE_PATH")]
    cert_file_path: Option<String>,

    /// Draw every record from one generator seeded with this value
    #[arg(short, long, env = "WEATHER_SEED")]
    seed: Option<u64>,
}

#[tokio::main]
async fn main() {
    env_logger::init();

    let args = Args::parse();

    if let Err(error) = serve(args).await {
        log::error!("{}", error);
        std::process::exit(1);
    }
}

async fn serve(args: Args) -> Result<(), StartupError> {
    let ip: IpAddr = args
        .ip
        .parse()
        .map_err(|error| StartupError::InvalidIp(args.ip.clone(), error))?;
    let addr = SocketAddr::new(ip, args.port);

    let provider = match args.seed {
        Some(seed) => {
            log::info!("generating weather from seed {}", seed);
            MockWeatherProvider::with_seed(seed)
        }
        None => MockWeatherProvider::new(),
    };
    let app = create_app(provider.into_handle());

    log::info!("listening on {}", addr);
    match (args.key_file_path, args.cert_file_path) {
        (Some(key_file_path), Some(cert_file_path)) => {
            log::info!(
                "using tls with key file {} and cert file {}",
                key_file_path,
                cert_file_path
            );
            let tls = RustlsConfig::from_pem_file(cert_file_path, key_file_path).await?;
            axum_server::bind_rustls(addr, tls)
                .serve(app.into_make_service())
                .await?;
        }
        (None, None) => {
            axum_server::bind(addr)
                .serve(app.into_make_service())
                .await?;
        }
        _ => return Err(StartupError::IncompleteTls),
    }

    Ok(())
}

use clap::Parser;

use weather_backend::client::{DEFAULT_SERVER, WeatherClient};
use weather_backend::render::render_record;

/// Show the current weather and the 5-day forecast
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// City to look up
    #[arg(default_value = "London")]
    city: String,

    /// Latitude, look up by coordinates instead of city
    #[arg(long, requires = "lon", allow_hyphen_values = true)]
    lat: Option<String>,

    /// Longitude, look up by coordinates instead of city
    #[arg(long, requires = "lat", allow_hyphen_values = true)]
    lon: Option<String>,

    /// Address of the weather server
    #[arg(short, long, env = "WEATHER_SERVER", default_value = DEFAULT_SERVER)]
    server: String,

    /// Print the record as json
    #[arg(short, long)]
    json: bool,
}

#[tokio::main]
async fn main() {
    env_logger::init();

    let args = Args::parse();

    let client = match WeatherClient::new(&args.server) {
        Ok(client) => client,
        Err(error) => {
            eprintln!("{}", error);
            std::process::exit(2);
        }
    };

    let record = match (&args.lat, &args.lon) {
        (Some(lat), Some(lon)) => client.fetch_coordinates(lat, lon).await,
        _ => client.fetch_city(&args.city).await,
    };

    match record {
        Ok(record) if args.json => match serde_json::to_string_pretty(&record) {
            Ok(json) => println!("{}", json),
            Err(error) => {
                eprintln!("{}", error);
                std::process::exit(1);
            }
        },
        Ok(record) => println!("{}", render_record(&record)),
        Err(error) => {
            eprintln!("{}", error);
            std::process::exit(1);
        }
    }
}

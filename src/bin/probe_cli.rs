use clap::Arg;

use rtdb_probe::config::ProbeConfig;
use rtdb_probe::error::ProbeResult;
use rtdb_probe::probe::{ConnectivityProbe, ProbeReport};

#[tokio::main]
async fn main() {
    env_logger::init();
    let matches = clap::Command::new("rtdb-probe")
        .version("1.0.0")
        .about("Check connectivity to a Firebase Realtime Database")
        .arg(
            Arg::new("credentials")
                .short('c')
                .long("credentials")
                .help("Path to the service account key file"),
        )
        .arg(
            Arg::new("database-url")
                .short('d')
                .long("database-url")
                .help("URL of the Realtime Database instance"),
        )
        .get_matches();

    let report = probe(
        matches.get_one::<String>("credentials").cloned(),
        matches.get_one::<String>("database-url").cloned(),
    )
    .await;

    match report {
        Ok(report) => print!("{report}"),
        Err(e) => {
            eprintln!("✗ Error connecting to Firebase: {e}");
            std::process::exit(1);
        }
    }
}

async fn probe(
    credentials: Option<String>,
    database_url: Option<String>,
) -> ProbeResult<ProbeReport> {
    let config = ProbeConfig::resolve(credentials, database_url)?;
    ConnectivityProbe::new(config).run().await
}

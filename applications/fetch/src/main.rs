//! Fetches one URL over plain TCP and prints the response.
//!
//! ```text
//! fetch <url> [METHOD] [BODY]
//! ```
//!
//! `FETCH_OPTIONS` may name a JSON file with client options, e.g.
//! `{"read_timeout_ms": 5000, "max_response_size": 65536}`. Set `RUST_LOG=debug`
//! to see the exchange.

use std::process::ExitCode;
use std::{env, fs};

use libhttp::network::tcp::TcpConnector;
use libhttp::{Client, Method, Options};

fn load_options() -> Result<Options, String> {
    let Ok(path) = env::var("FETCH_OPTIONS") else {
        return Ok(Options::default());
    };
    let json = fs::read_to_string(&path).map_err(|e| format!("{path}: {e}"))?;
    Options::from_json(&json).map_err(|e| format!("{path}: {e}"))
}

fn run() -> Result<(), String> {
    let mut args = env::args().skip(1);
    let url = args
        .next()
        .or_else(|| env::var("FETCH_URL").ok())
        .ok_or("usage: fetch <url> [METHOD] [BODY]")?;
    let method: Method = match args.next() {
        Some(m) => m.parse().map_err(|e| format!("{m}: {e}"))?,
        None => Method::Get,
    };
    let body = args.next().unwrap_or_default();

    let options = load_options()?;
    log::debug!("options: {options:?}");

    let length = body.len().to_string();
    let mut headers = vec![("Connection", "close"), ("User-Agent", "libhttp-fetch")];
    if !body.is_empty() {
        headers.push(("Content-Length", length.as_str()));
    }

    let mut client = Client::with_options(TcpConnector::from_options(&options), options);
    let response = client
        .send(method, &url, &headers, body.as_bytes())
        .map_err(|e| e.to_string())?;

    println!("{} {} {}", response.version, response.status, response.reason);
    for (name, value) in &response.headers {
        println!("{name}: {value}");
    }
    println!();
    println!("{}", String::from_utf8_lossy(&response.body));
    Ok(())
}

fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    env_logger::init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            eprintln!("fetch: {e}");
            ExitCode::FAILURE
        }
    }
}

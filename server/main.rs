use std::io;
use tokio::runtime::Runtime;
use minhttp::Config;

fn main() -> io::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::default();
    log::info!("Starting server on {}", config.addr());

    Runtime::new()?.block_on(minhttp::rt::run(config))
}

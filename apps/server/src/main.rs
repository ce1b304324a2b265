use anyhow::Context;
use mhs::domain::config::ApiConfig;
use mhs::kernel::config::load_config_or_default;
use mhs_logger::Logger;
use mhs_server::Server;

#[mhs_runtime::main(high_performance)]
async fn main() -> anyhow::Result<()> {
    let _log = Logger::builder().name(env!("CARGO_PKG_NAME")).init()?;

    let cfg: ApiConfig =
        load_config_or_default(Some("server")).context("Critical: Configuration is malformed")?;

    Server::builder().config(cfg).build()?.run().await
}

use std::process::ExitCode;

use beidou_mock_server::cli::Cli;
use beidou_mock_server::config::Config;
use beidou_mock_server::error::Result;
use beidou_mock_server::{logger, server};
use clap::Parser;
use tokio::runtime::Runtime;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            logger::log_error(&e.to_string());
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let cfg = Config::load(cli.port)?;

    let runtime = build_runtime(cfg.server.workers)?;
    runtime.block_on(server::start(cfg))
}

/// 创建 Tokio 运行时，根据 workers 配置设置线程数
fn build_runtime(workers: Option<usize>) -> Result<Runtime> {
    let mut runtime_builder = tokio::runtime::Builder::new_multi_thread();
    runtime_builder.enable_all();

    if let Some(workers) = workers {
        runtime_builder.worker_threads(workers);
    }
    logger::log_worker_threads(workers);

    Ok(runtime_builder.build()?)
}

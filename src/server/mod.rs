// 服务器模块入口
// 负责端口绑定、连接接受循环以及收到中断信号后的优雅停机

pub mod bootstrap;
pub mod connection;
pub mod listener;
pub mod signal;

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tokio::net::TcpListener;
use tokio::sync::watch;
use tokio::task::JoinSet;

use crate::config::{AppState, Config};
use crate::error::Result;
use crate::logger;

// 重新导出常用类型
pub use bootstrap::{bind_with_retry, BoundListener};
pub use listener::create_listener;

/// Bind a port, serve until SIGINT/SIGTERM, then drain in-flight connections
pub async fn start(config: Config) -> Result<()> {
    serve(config, async {
        let name = signal::shutdown_signal().await;
        logger::log_shutdown_requested(name);
    })
    .await
}

/// Bind with retry, announce the bound address and serve until `shutdown` resolves
pub async fn serve<F>(config: Config, shutdown: F) -> Result<()>
where
    F: Future<Output = ()>,
{
    let requested = config.server.port;
    let BoundListener { listener, port, .. } = bind_with_retry(&config)?;
    if port != requested {
        logger::log_port_adjusted(requested, port);
    }

    let addr = listener.local_addr()?;
    logger::log_server_start(
        &addr,
        &format!("http://localhost:{port}"),
        &config.http.static_root,
    );

    let drain_timeout = Duration::from_secs(config.server.shutdown_timeout);
    let state = Arc::new(AppState::new(config, port));

    run(listener, state, drain_timeout, shutdown).await
}

/// Accept loop: `Serving` until `shutdown` resolves, then `Draining` until every
/// connection task finishes or `drain_timeout` elapses.
pub async fn run<F>(
    listener: TcpListener,
    state: Arc<AppState>,
    drain_timeout: Duration,
    shutdown: F,
) -> Result<()>
where
    F: Future<Output = ()>,
{
    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let mut connections = JoinSet::new();
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            accept_result = listener.accept() => {
                match accept_result {
                    Ok((stream, peer_addr)) => {
                        connection::spawn_connection(
                            stream,
                            peer_addr,
                            &state,
                            shutdown_rx.clone(),
                            &mut connections,
                        );
                    }
                    Err(e) => logger::log_error(&format!("Failed to accept connection: {e}")),
                }
            }

            // Reap finished connection tasks so the set does not grow unbounded
            Some(joined) = connections.join_next(), if !connections.is_empty() => {
                if let Err(e) = joined {
                    logger::log_error(&format!("Connection task failed: {e}"));
                }
            }

            () = &mut shutdown => break,
        }
    }

    // Stop accepting before asking connections to wind down
    drop(listener);
    logger::log_shutdown_draining(connections.len());
    shutdown_tx.send_replace(true);

    let drained = tokio::time::timeout(drain_timeout, async {
        while connections.join_next().await.is_some() {}
    })
    .await;

    if drained.is_err() {
        logger::log_warning(&format!(
            "{} connection(s) still open after {}s, closing them",
            connections.len(),
            drain_timeout.as_secs()
        ));
        connections.shutdown().await;
    }

    logger::log_shutdown_complete();
    Ok(())
}

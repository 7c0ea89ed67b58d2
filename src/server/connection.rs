// 连接处理模块
// 每个 TCP 连接在独立任务中由 hyper HTTP/1 处理，收到停机通知后优雅关闭

use std::net::SocketAddr;
use std::sync::Arc;

use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;
use tokio::net::TcpStream;
use tokio::sync::watch;
use tokio::task::JoinSet;

use crate::config::AppState;
use crate::handler;
use crate::logger;

/// Serve a single connection in a task tracked by `connections`.
///
/// The task watches `shutdown`; once it flips, the connection finishes the
/// in-flight response and closes instead of waiting for further keep-alive requests.
pub fn spawn_connection(
    stream: TcpStream,
    peer_addr: SocketAddr,
    state: &Arc<AppState>,
    mut shutdown: watch::Receiver<bool>,
    connections: &mut JoinSet<()>,
) {
    let state = Arc::clone(state);

    connections.spawn(async move {
        let io = TokioIo::new(stream);

        let mut builder = http1::Builder::new();
        builder.keep_alive(state.config.http.keep_alive);

        let conn = builder.serve_connection(
            io,
            service_fn(move |req| handler::handle_request(req, Arc::clone(&state))),
        );
        tokio::pin!(conn);

        let result = tokio::select! {
            res = conn.as_mut() => res,
            _ = shutdown.changed() => {
                conn.as_mut().graceful_shutdown();
                conn.await
            }
        };

        if let Err(err) = result {
            if !err.is_incomplete_message() {
                logger::log_connection_error(&peer_addr, &err);
            }
        }
    });
}

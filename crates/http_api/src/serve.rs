use std::future::Future;
use std::io;
use std::net::{Ipv4Addr, SocketAddr};

use tokio::net::TcpListener;

use crate::{HttpState, router};

/// A loopback listener plus the port it actually holds.
pub struct Bound {
    pub listener: TcpListener,
    pub port: u16,
    /// The requested port was busy and an ephemeral one was taken instead.
    pub fell_back: bool,
}

async fn bind_ephemeral() -> io::Result<(TcpListener, u16)> {
    let listener = TcpListener::bind(SocketAddr::from((Ipv4Addr::LOCALHOST, 0))).await?;
    let port = listener.local_addr()?.port();
    Ok((listener, port))
}

/// Binds `127.0.0.1:port`; port 0, or a port already in use, gets an
/// ephemeral one.
pub async fn bind(port: u16) -> io::Result<Bound> {
    let requested = match port {
        0 => None,
        port => TcpListener::bind(SocketAddr::from((Ipv4Addr::LOCALHOST, port)))
            .await
            .ok(),
    };
    if let Some(listener) = requested {
        return Ok(Bound {
            listener,
            port,
            fell_back: false,
        });
    }
    let (listener, actual) = bind_ephemeral().await?;
    if port != 0 {
        tracing::warn!(requested = port, actual, "port unavailable, using ephemeral port");
    }
    Ok(Bound {
        listener,
        port: actual,
        fell_back: port != 0,
    })
}

/// Serves the heatmap routes on `bound` until `shutdown` resolves.
pub async fn serve<F>(state: HttpState, bound: Bound, shutdown: F) -> io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    tracing::info!(url = %format!("http://127.0.0.1:{}", bound.port), "serving heatmap");
    axum::serve(bound.listener, router(state))
        .with_graceful_shutdown(shutdown)
        .await
}

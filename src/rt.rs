//! Server runtime.
//!
//! [`serve`] accepts connections from a [`Listener`] and spawns a task for each of them, a slow
//! or failing connection never blocks the acceptor.
use std::{
    io,
    pin::Pin,
    sync::Arc,
    task::{Context, Poll, ready},
};
use tokio::io::{AsyncRead, AsyncWrite};
use tokio::net::{TcpListener, TcpStream};

#[cfg(unix)]
use tokio::net::{UnixListener, UnixStream};

use crate::{
    config::Config,
    h1::{Limits, serve_connection},
    log::{debug, error, info},
    request::Request,
    response::Response,
    routing::Router,
    service::Service,
    storage::DirStorage,
};

#[cfg(test)]
mod test;

// ===== Listener =====

/// Source of incoming connections.
pub trait Listener {
    type Stream: AsyncRead + AsyncWrite + Unpin;

    /// Poll for the next connection, the peer address is only used for logging.
    fn poll_accept(&self, cx: &mut Context<'_>) -> Poll<io::Result<(Self::Stream, String)>>;
}

macro_rules! listener {
    ($(#[$meta:meta])* $listener:ty => $stream:ty) => {
        $(#[$meta])*
        impl Listener for $listener {
            type Stream = $stream;

            #[inline]
            fn poll_accept(&self, cx: &mut Context<'_>) -> Poll<io::Result<(Self::Stream, String)>> {
                <$listener>::poll_accept(self, cx).map_ok(|(io, peer)| (io, format!("{peer:?}")))
            }
        }
    };
}

listener!(TcpListener => TcpStream);
listener!(#[cfg(unix)] UnixListener => UnixStream);

// ===== Runtime =====

/// Bind to the configured address and serve the server routes.
///
/// Only returns on bind failure.
pub async fn run(config: Config) -> io::Result<()> {
    let listener = TcpListener::bind(config.addr()).await?;
    info!("listening on {}", listener.local_addr()?);

    let router = Router::new(DirStorage::new(config.data_dir()));
    serve(listener, router, config.limits()).await;
    Ok(())
}

/// Start server with given `Service`.
pub fn serve<L, S>(io: L, service: S, limits: Limits) -> Serve<L, S>
where
    L: Listener,
    S: Service<Request, Response = Response>,
{
    Serve { io, service: Arc::new(service), limits }
}

/// Future returned by [`serve`], it never completes.
#[derive(Debug)]
pub struct Serve<L, S> {
    io: L,
    service: Arc<S>,
    limits: Limits,
}

impl<L, S> Future for Serve<L, S>
where
    L: Listener,
    L::Stream: Send + 'static,
    S: Service<Request, Response = Response> + Send + Sync + 'static,
    S::Error: std::fmt::Display,
{
    type Output = ();

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        loop {
            match ready!(self.io.poll_accept(cx)) {
                Ok((io, peer)) => {
                    debug!("accepted {peer}");
                    let service = Arc::clone(&self.service);
                    tokio::spawn(serve_connection(io, service, self.limits));
                },
                Err(err) => {
                    error!("failed to accept connection: {err}");
                    // yield to the runtime before retrying
                    cx.waker().wake_by_ref();
                    return Poll::Pending;
                },
            }
        }
    }
}

use std::convert::Infallible;
use std::net::SocketAddr;

use axum::extract::connect_info::{ConnectInfo, Connected};
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::serve::IncomingStream;
use tokio::net::TcpListener;

/// Both ends of the TCP connection a request arrived on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeerAddrs {
    pub server: Option<SocketAddr>,
    pub client: SocketAddr,
}

impl Connected<IncomingStream<'_, TcpListener>> for PeerAddrs {
    fn connect_info(stream: IncomingStream<'_, TcpListener>) -> Self {
        Self {
            server: stream.io().local_addr().ok(),
            client: *stream.remote_addr(),
        }
    }
}

/// Server and client IPs for the current request, when the server was
/// started with [`PeerAddrs`] connect info.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientMeta {
    pub server_ip: Option<String>,
    pub client_ip: Option<String>,
}

impl<S> FromRequestParts<S> for ClientMeta
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let Some(ConnectInfo(peer)) = parts.extensions.get::<ConnectInfo<PeerAddrs>>() else {
            return Ok(Self::default());
        };
        Ok(Self {
            server_ip: peer.server.map(|a| a.ip().to_string()),
            client_ip: Some(peer.client.ip().to_string()),
        })
    }
}

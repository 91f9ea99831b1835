use native_tls::{TlsConnector, TlsStream};
use std::io;
use std::net::TcpStream;
use std::time::Duration;

/// Upper bound for each read and write on the token service socket.
const IO_TIMEOUT: Duration = Duration::from_secs(10);

/// Connect to a TLS server
///
/// Certificate and hostname validation are disabled so development token
/// services can run with self-signed certificates.
pub fn connect_tls(addr: &str) -> io::Result<TlsStream<TcpStream>> {
    let hostname = addr.split(':').next().unwrap_or(addr);

    let stream = TcpStream::connect(addr)?;
    stream.set_read_timeout(Some(IO_TIMEOUT))?;
    stream.set_write_timeout(Some(IO_TIMEOUT))?;

    let connector = TlsConnector::builder()
        .danger_accept_invalid_certs(true)
        .danger_accept_invalid_hostnames(true)
        .build()
        .map_err(|e| io::Error::other(format!("TLS connector error: {}", e)))?;

    let tls_stream = connector
        .connect(hostname, stream)
        .map_err(|e| io::Error::other(format!("TLS handshake failed: {}", e)))?;

    Ok(tls_stream)
}

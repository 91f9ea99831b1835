//! Viewer Token Service Client
//!
//! One request per connection, using the length-prefixed framing of the
//! signaling protocol: `[length: u32 BE][type: u8][JSON payload]`, where
//! `length` counts the type byte plus the payload.

use super::tls_client::connect_tls;
use crate::error::{PlayerError, Result};
use crate::models::ViewerCredentials;
use crate::session::{ViewerTokenProvider, credentials_from_token};
use serde::{Deserialize, Serialize};
use std::io::{Read, Write};
use tracing::{debug, error, info};

pub(crate) const MSG_VIEWER_TOKEN_REQUEST: u8 = 0x20;
pub(crate) const MSG_VIEWER_TOKEN_RESPONSE: u8 = 0x21;
pub(crate) const MSG_ERROR: u8 = 0x12;

/// Largest frame accepted from the token service.
const MAX_FRAME_LEN: usize = 64 * 1024;

#[derive(Debug, Serialize)]
struct ViewerTokenRequest<'a> {
    host_identity: &'a str,
}

#[derive(Debug, Deserialize)]
struct ViewerTokenResponse {
    token: String,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    #[serde(default)]
    message: Option<String>,
}

/// Client for the viewer token service
#[derive(Debug, Clone)]
pub struct TokenClient {
    addr: String,
}

impl TokenClient {
    pub fn new(addr: impl Into<String>) -> Self {
        Self { addr: addr.into() }
    }

    /// Runs one request/response exchange on an established stream
    pub(crate) fn exchange<S: Read + Write>(stream: &mut S, host_id: &str) -> Result<String> {
        let request = serde_json::to_vec(&ViewerTokenRequest {
            host_identity: host_id,
        })?;
        write_frame(stream, MSG_VIEWER_TOKEN_REQUEST, &request)?;

        let (msg_type, payload) = read_frame(stream)?;
        match msg_type {
            MSG_VIEWER_TOKEN_RESPONSE => {
                let response: ViewerTokenResponse = serde_json::from_slice(&payload)?;
                Ok(response.token)
            }
            MSG_ERROR => {
                let response: ErrorResponse = serde_json::from_slice(&payload)?;
                Err(PlayerError::Provider(
                    response
                        .message
                        .unwrap_or_else(|| "Unknown error".to_string()),
                ))
            }
            other => Err(PlayerError::Protocol(format!(
                "unexpected message type 0x{:02X}",
                other
            ))),
        }
    }
}

impl ViewerTokenProvider for TokenClient {
    fn resolve(&self, host_id: &str) -> Result<ViewerCredentials> {
        info!("[TOKEN] Requesting viewer token from {}", self.addr);

        let mut stream = connect_tls(&self.addr).map_err(|e| {
            error!("[TOKEN] Failed to connect to {}: {}", self.addr, e);
            PlayerError::Provider(format!("failed to connect to {}: {}", self.addr, e))
        })?;

        let token = Self::exchange(&mut stream, host_id)?;
        debug!("[TOKEN] Received token ({} bytes)", token.len());

        credentials_from_token(&token)
    }
}

/// Writes one frame as a single buffer to avoid TLS fragmentation
pub(crate) fn write_frame<W: Write>(writer: &mut W, msg_type: u8, payload: &[u8]) -> Result<()> {
    if payload.len() + 1 > MAX_FRAME_LEN {
        return Err(PlayerError::Protocol(format!(
            "request of {} bytes exceeds frame limit",
            payload.len()
        )));
    }
    let total_len = (payload.len() + 1) as u32;

    let mut buffer = Vec::with_capacity(4 + 1 + payload.len());
    buffer.extend_from_slice(&total_len.to_be_bytes());
    buffer.push(msg_type);
    buffer.extend_from_slice(payload);

    writer.write_all(&buffer)?;
    writer.flush()?;
    Ok(())
}

/// Reads one frame, returning its type and payload
pub(crate) fn read_frame<R: Read>(reader: &mut R) -> Result<(u8, Vec<u8>)> {
    let mut len_buf = [0u8; 4];
    reader.read_exact(&mut len_buf)?;

    let total_len = u32::from_be_bytes(len_buf) as usize;
    if total_len == 0 {
        return Err(PlayerError::Protocol("zero-length frame".to_string()));
    }
    if total_len > MAX_FRAME_LEN {
        return Err(PlayerError::Protocol(format!(
            "frame of {} bytes exceeds limit",
            total_len
        )));
    }

    let mut type_buf = [0u8; 1];
    reader.read_exact(&mut type_buf)?;

    let mut payload = vec![0u8; total_len - 1];
    reader.read_exact(&mut payload)?;

    Ok((type_buf[0], payload))
}

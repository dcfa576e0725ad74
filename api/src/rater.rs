use axum::http::{HeaderMap, header};
use sha2::{Digest, Sha256};
use std::net::IpAddr;

// ============================================================================
// RATER IDENTITY - Anonymous, stable id for whoever is rating a song
// ============================================================================

/// Client address: first `X-Forwarded-For` hop, then `X-Real-IP`, then the
/// peer address of the connection.
pub fn client_ip(headers: &HeaderMap, peer: Option<IpAddr>) -> String {
    let header_value = |name: &str| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::trim)
            .filter(|v| !v.is_empty())
    };

    if let Some(forwarded) = header_value("x-forwarded-for") {
        if let Some(first) = forwarded.split(',').next() {
            return first.trim().to_string();
        }
    }

    if let Some(real_ip) = header_value("x-real-ip") {
        return real_ip.to_string();
    }

    peer.map(|ip| ip.to_string()).unwrap_or_default()
}

/// `user_` followed by 16 hex chars of a SHA-256 over the client's address,
/// browser headers and the fingerprint the page sent.
pub fn rater_identifier(headers: &HeaderMap, peer: Option<IpAddr>, fingerprint: &str) -> String {
    let header_str = |name: header::HeaderName| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string()
    };

    let combined = [
        client_ip(headers, peer),
        header_str(header::USER_AGENT),
        header_str(header::ACCEPT_LANGUAGE),
        header_str(header::ACCEPT_ENCODING),
        fingerprint.to_string(),
    ]
    .join("|");

    let digest = hex::encode(Sha256::digest(combined.as_bytes()));
    format!("user_{}", &digest[..16])
}

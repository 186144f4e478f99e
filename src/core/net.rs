// src/core/net.rs
//
// HTTP/1.0 GET over TCP (std-only). The league site is plain HTTP.
use std::{io::{Read, Write}, net::TcpStream, time::Duration};

use crate::config::consts::USER_AGENT;
use crate::error::{Error, Result};

pub fn http_get(host: &str, path: &str) -> Result<String> {
    let mut s = TcpStream::connect((host, 80))?;
    s.set_read_timeout(Some(Duration::from_secs(15)))?;
    s.set_write_timeout(Some(Duration::from_secs(15)))?;

    let req = format!(
        "GET {path} HTTP/1.0\r\nHost: {host}\r\nUser-Agent: {USER_AGENT}\r\nConnection: close\r\n\r\n"
    );
    s.write_all(req.as_bytes())?;
    s.flush()?;

    let mut buf = Vec::new();
    s.read_to_end(&mut buf)?;
    let resp = String::from_utf8_lossy(&buf);

    let status = resp.split("\r\n").next().unwrap_or("");
    if !status.contains(" 200") {
        return Err(Error::Source(format!("HTTP error: {status} {host}{path}")));
    }
    let body_idx = resp
        .find("\r\n\r\n")
        .ok_or_else(|| Error::Source(format!("malformed HTTP response from {host}{path}")))?
        + 4;
    Ok(resp[body_idx..].to_string())
}

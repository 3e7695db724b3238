// src/core/net.rs

// HTTP/1.0 GET over TCP (std-only). The list pages and the guides live on
// different hosts, so this takes a full URL rather than a site-local path.

use std::{io::{Read, Write}, net::TcpStream, time::Duration};

pub fn http_get(url: &str) -> Result<String, Box<dyn std::error::Error>> {
    let rest = url
        .strip_prefix("http://")
        .ok_or("only http:// URLs are supported")?;
    let (host, path) = match rest.split_once('/') {
        Some((h, p)) => (h, format!("/{p}")),
        None => (rest, s!("/")),
    };

    let mut s = TcpStream::connect((host, 80))?;
    s.set_read_timeout(Some(Duration::from_secs(15)))?;
    s.set_write_timeout(Some(Duration::from_secs(15)))?;

    // Some guide hosts refuse requests without a browser-ish UA.
    let req = format!(
        "GET {} HTTP/1.0\r\nHost: {}\r\nUser-Agent: Mozilla/5.0 (compatible; chip_scrape/0.6)\r\nConnection: close\r\n\r\n",
        path, host
    );
    s.write_all(req.as_bytes())?;
    s.flush()?;

    let mut buf = Vec::new();
    s.read_to_end(&mut buf)?;
    let resp = String::from_utf8_lossy(&buf);

    let status = resp.split("\r\n").next().unwrap_or("");
    if !status.contains("200") {
        return Err(format!("HTTP error: {} {}{}", status, host, path).into());
    }
    let body_idx = resp.find("\r\n\r\n").ok_or("Malformed HTTP response")? + 4;
    // Downstream consumers expect newline-normalized text.
    Ok(resp[body_idx..].replace("\r\n", "\n"))
}

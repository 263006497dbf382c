// src/core/net.rs
//
// Blocking HTTP GET. One request, no retry; any transport failure or
// non-200 status is an error. The body is decoded leniently.

use std::io::Read;
use std::time::Duration;

use crate::config::consts::{HTTP_TIMEOUT_SECS, USER_AGENT};
use crate::errors::{AppError, AppResult};

pub fn http_get(url: &str) -> AppResult<String> {
    let agent = ureq::AgentBuilder::new()
        .user_agent(USER_AGENT)
        .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
        .build();

    logd!("HTTP: GET {}", url);
    let resp = agent.get(url).call()?;

    let status = resp.status();
    if status != 200 {
        return Err(AppError::Http(format!("HTTP error: {} {}", status, url)));
    }

    // Pages aren't always UTF-8; bad bytes become U+FFFD instead of failing.
    let mut body = Vec::new();
    resp.into_reader()
        .read_to_end(&mut body)
        .map_err(|e| AppError::Http(format!("reading body of {}: {}", url, e)))?;
    Ok(String::from_utf8_lossy(&body).into_owned())
}

//! Static file server for the built web app
//!
//! Serves `dist/` and falls back to `index.html` for unknown paths, so deep
//! links such as `/login` and `/register` reach the client-side router.
//!
//! Environment:
//! - `WEB_ADDR` (default `127.0.0.1:8080`)
//! - `WEB_DIST_DIR` (default `dist`)
//! - `RUST_LOG` (default `info`)

use std::fs;
use std::io::{BufRead, BufReader, Write};
use std::net::{SocketAddr, TcpListener, TcpStream};
use std::path::{Component, Path, PathBuf};
use std::process::ExitCode;

use lib_utils::envs::{self, get_env_or, get_env_parse};
use tracing::{debug, error, info, warn};
use tracing_subscriber::EnvFilter;

const INDEX_FILE: &str = "index.html";

#[derive(Debug, Clone, PartialEq, Eq)]
struct ServerConfig {
    addr: SocketAddr,
    dist_dir: PathBuf,
}

impl ServerConfig {
    fn from_env() -> Result<Self, envs::Error> {
        Ok(Self {
            addr: addr_from_env("WEB_ADDR")?,
            dist_dir: PathBuf::from(get_env_or("WEB_DIST_DIR", "dist")),
        })
    }
}

/// Unset falls back to `127.0.0.1:8080`; a malformed value is an error.
fn addr_from_env(name: &'static str) -> Result<SocketAddr, envs::Error> {
    match get_env_parse::<SocketAddr>(name) {
        Err(envs::Error::MissingEnv(_)) => Ok(SocketAddr::from(([127, 0, 0, 1], 8080))),
        other => other,
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Invalid configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };
    let listener = match TcpListener::bind(config.addr) {
        Ok(listener) => listener,
        Err(e) => {
            error!(addr = %config.addr, "Failed to bind: {}", e);
            return ExitCode::FAILURE;
        }
    };

    info!(
        "Web app running at http://{} (serving {})",
        config.addr,
        config.dist_dir.display()
    );

    for stream in listener.incoming() {
        match stream {
            Ok(stream) => handle_client(stream, &config.dist_dir),
            Err(e) => warn!("Connection error: {}", e),
        }
    }

    ExitCode::SUCCESS
}

fn handle_client(mut stream: TcpStream, dist_dir: &Path) {
    let buf_reader = BufReader::new(&mut stream);
    let request_line = match buf_reader.lines().next() {
        Some(Ok(line)) => line,
        _ => {
            warn!("Failed to read request line");
            return;
        }
    };

    let request_path = request_line.split_whitespace().nth(1).unwrap_or("/");
    let file_path = resolve(dist_dir, request_path);
    debug!(path = request_path, file = %file_path.display(), "request");

    let response = match fs::read(&file_path) {
        Ok(body) => (200, "OK", content_type(&file_path), body),
        Err(e) => {
            error!(file = %file_path.display(), "Failed to read: {}", e);
            (
                404,
                "NOT FOUND",
                "text/html; charset=utf-8",
                b"<!DOCTYPE html><html><body><h1>Not found</h1></body></html>".to_vec(),
            )
        }
    };
    let (status, reason, content_type, body) = response;

    let headers = format!(
        "HTTP/1.1 {} {}\r\nContent-Type: {}\r\nContent-Length: {}\r\n\r\n",
        status,
        reason,
        content_type,
        body.len()
    );

    if let Err(e) = stream.write_all(headers.as_bytes()).and_then(|_| stream.write_all(&body)) {
        warn!("Failed to write response: {}", e);
        return;
    }

    let _ = stream.flush();
}

/// Map a request path to a file under `dist_dir`.
///
/// Query strings are ignored. Paths that escape `dist_dir`, name a
/// directory, or do not exist resolve to `index.html`.
fn resolve(dist_dir: &Path, request_path: &str) -> PathBuf {
    let path = request_path
        .split_once('?')
        .map_or(request_path, |(path, _)| path);
    let relative = Path::new(path.trim_start_matches('/'));

    let index = dist_dir.join(INDEX_FILE);
    if relative.as_os_str().is_empty()
        || relative
            .components()
            .any(|c| !matches!(c, Component::Normal(_)))
    {
        return index;
    }

    let candidate = dist_dir.join(relative);
    if candidate.is_file() {
        candidate
    } else {
        index
    }
}

fn content_type(path: &Path) -> &'static str {
    match path.extension().and_then(|s| s.to_str()) {
        Some("html") => "text/html; charset=utf-8",
        Some("css") => "text/css",
        Some("js") => "application/javascript",
        Some("wasm") => "application/wasm",
        Some("json") => "application/json",
        Some("svg") => "image/svg+xml",
        Some("ico") => "image/x-icon",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dist_with_assets() -> PathBuf {
        let dir = std::env::temp_dir().join(format!("lumen-dist-{}", std::process::id()));
        fs::create_dir_all(dir.join("assets")).unwrap();
        fs::write(dir.join(INDEX_FILE), "<html></html>").unwrap();
        fs::write(dir.join("app.wasm"), [0_u8, 97, 115, 109]).unwrap();
        dir
    }

    #[test]
    fn test_resolve_existing_file() {
        let dist = dist_with_assets();
        assert_eq!(resolve(&dist, "/app.wasm"), dist.join("app.wasm"));
        assert_eq!(resolve(&dist, "/app.wasm?v=2"), dist.join("app.wasm"));
    }

    #[test]
    fn test_resolve_falls_back_to_index() {
        let dist = dist_with_assets();
        let index = dist.join(INDEX_FILE);
        assert_eq!(resolve(&dist, "/"), index);
        assert_eq!(resolve(&dist, "/login"), index);
        assert_eq!(resolve(&dist, "/register?step=2"), index);
        assert_eq!(resolve(&dist, "/assets"), index);
    }

    #[test]
    fn test_resolve_rejects_traversal() {
        let dist = dist_with_assets();
        assert_eq!(resolve(&dist, "/../Cargo.toml"), dist.join(INDEX_FILE));
        assert_eq!(resolve(&dist, "/assets/../../etc/passwd"), dist.join(INDEX_FILE));
    }

    #[test]
    fn test_content_type() {
        assert_eq!(content_type(Path::new("dist/app_bg.wasm")), "application/wasm");
        assert_eq!(content_type(Path::new("dist/index.html")), "text/html; charset=utf-8");
        assert_eq!(content_type(Path::new("dist/LICENSE")), "application/octet-stream");
    }

    #[test]
    fn test_addr_from_env() {
        std::env::set_var("WEB_SERVER_TEST_ADDR", "0.0.0.0:3000");
        std::env::set_var("WEB_SERVER_TEST_BAD_ADDR", "localhost");

        assert_eq!(
            addr_from_env("WEB_SERVER_TEST_ADDR"),
            Ok(SocketAddr::from(([0, 0, 0, 0], 3000)))
        );
        assert_eq!(
            addr_from_env("WEB_SERVER_TEST_BAD_ADDR"),
            Err(envs::Error::WrongFormat("WEB_SERVER_TEST_BAD_ADDR"))
        );
        assert_eq!(
            addr_from_env("WEB_SERVER_TEST_UNSET_ADDR"),
            Ok(SocketAddr::from(([127, 0, 0, 1], 8080)))
        );
    }

    #[test]
    fn test_config_defaults() {
        if std::env::var("WEB_ADDR").is_ok() {
            return;
        }
        let config = ServerConfig::from_env().unwrap();
        assert_eq!(config.addr, SocketAddr::from(([127, 0, 0, 1], 8080)));
        if std::env::var("WEB_DIST_DIR").is_err() {
            assert_eq!(config.dist_dir, PathBuf::from("dist"));
        }
    }
}

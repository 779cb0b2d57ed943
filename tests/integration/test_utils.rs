//! Test utilities for integration tests.
//!
//! Builds temporary directory trees and routers over them, and wraps the
//! request/response plumbing.

use std::path::Path;

use axum::body::{Body, Bytes};
use axum::http::{HeaderMap, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use tempfile::TempDir;
use tower::ServiceExt;

use file_browser::{create_router, BaseDir, RouterConfig};

/// A temporary base directory plus a router serving it.
pub struct TestServer {
    pub dir: TempDir,
    pub router: Router,
}

impl TestServer {
    /// Serve an empty temporary directory with default configuration.
    pub fn new() -> Self {
        Self::with_config(RouterConfig::new().with_tracing(false), |_| {})
    }

    /// Serve a temporary directory populated by `setup`.
    pub fn with_tree(setup: impl FnOnce(&Path)) -> Self {
        Self::with_config(RouterConfig::new().with_tracing(false), setup)
    }

    /// Serve a temporary directory populated by `setup` with a custom config.
    pub fn with_config(config: RouterConfig, setup: impl FnOnce(&Path)) -> Self {
        let dir = TempDir::new().unwrap();
        setup(dir.path());
        let base_dir = BaseDir::new(dir.path()).unwrap();
        let router = create_router(base_dir, config);
        Self { dir, router }
    }

    /// Issue a GET request and collect the response.
    pub async fn get(&self, uri: &str) -> TestResponse {
        self.request("GET", uri).await
    }

    /// Issue a request with the given method and collect the response.
    pub async fn request(&self, method: &str, uri: &str) -> TestResponse {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap();

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.into_body().collect().await.unwrap().to_bytes();

        TestResponse {
            status,
            headers,
            body,
        }
    }
}

/// A fully collected response.
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl TestResponse {
    pub fn text(&self) -> String {
        String::from_utf8(self.body.to_vec()).unwrap()
    }

    pub fn header(&self, name: &str) -> &str {
        self.headers
            .get(name)
            .unwrap_or_else(|| panic!("missing header {name}"))
            .to_str()
            .unwrap()
    }

    pub fn json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).unwrap()
    }

    /// Extract `(href, label)` pairs from a listing page, in page order.
    pub fn links(&self) -> Vec<(String, String)> {
        self.text()
            .lines()
            .filter_map(|line| {
                let rest = line.trim().strip_prefix("<div> <a href=\"")?;
                let (href, rest) = rest.split_once("\">")?;
                let label = rest.strip_suffix("</a></div>")?;
                Some((href.to_string(), label.to_string()))
            })
            .collect()
    }
}

/// Create a file (and its parent directories) under `root`.
pub fn write_file(root: &Path, relative: &str, contents: impl AsRef<[u8]>) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(path, contents).unwrap();
}

/// Create a directory (and its parents) under `root`.
pub fn make_dir(root: &Path, relative: &str) {
    std::fs::create_dir_all(root.join(relative)).unwrap();
}

/// Deterministic pseudo-random bytes covering every byte value.
pub fn binary_blob(len: usize) -> Vec<u8> {
    let mut state: u32 = 0x1234_5678;
    (0..len)
        .map(|i| {
            state = state.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
            if i < 256 {
                i as u8
            } else {
                (state >> 24) as u8
            }
        })
        .collect()
}

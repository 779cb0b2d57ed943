//! Directory listing tests.
//!
//! Tests verify:
//! - Directories listed before files, each group sorted
//! - Trailing slash on directory links and labels
//! - Empty directories render the bare page shell
//! - Links are re-entrant under /files
//! - Entry names are escaped

use axum::http::StatusCode;

use file_browser::RouterConfig;

use super::test_utils::{make_dir, write_file, TestServer};

// =============================================================================
// Page Structure
// =============================================================================

#[tokio::test]
async fn test_docs_example() {
    let server = TestServer::with_tree(|root| {
        make_dir(root, "docs/old");
        write_file(root, "docs/notes.txt", "some notes");
    });

    let response = server.get("/files/docs").await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.header("content-type").starts_with("text/html"));

    let page = response.text();
    let dir = r#"<div> <a href="/docs/old/">old/</a></div>"#;
    let file = r#"<div> <a href="/docs/notes.txt">notes.txt</a></div>"#;
    let dir_pos = page.find(dir).expect("directory entry missing");
    let file_pos = page.find(file).expect("file entry missing");
    assert!(dir_pos < file_pos);
}

#[tokio::test]
async fn test_page_shell() {
    let server = TestServer::with_tree(|root| write_file(root, "a.txt", "a"));

    let page = server.get("/files").await.text();
    assert!(page.starts_with("<!DOCTYPE html>\n<html>\n<title>Files</title>\n<body>\n"));
    assert!(page.contains("   <h2>Files:</h2>\n"));
    assert!(page.trim_end().ends_with("</body>\n</html>"));
}

#[tokio::test]
async fn test_directories_first_then_files_sorted() {
    let server = TestServer::with_tree(|root| {
        for dir in ["music", "archive", "photos"] {
            make_dir(root, dir);
        }
        for file in ["zebra.txt", "apple.txt", "mango.pdf"] {
            write_file(root, file, file);
        }
    });

    let links = server.get("/files").await.links();
    let labels: Vec<&str> = links.iter().map(|(_, label)| label.as_str()).collect();
    assert_eq!(
        labels,
        vec![
            "archive/",
            "music/",
            "photos/",
            "apple.txt",
            "mango.pdf",
            "zebra.txt"
        ]
    );
}

#[tokio::test]
async fn test_case_sensitive_sorting() {
    let server = TestServer::with_tree(|root| {
        for file in ["B.txt", "a.txt", "A.txt"] {
            write_file(root, file, "");
        }
    });

    let links = server.get("/files/").await.links();
    let labels: Vec<&str> = links.iter().map(|(_, label)| label.as_str()).collect();
    assert_eq!(labels, vec!["A.txt", "B.txt", "a.txt"]);
}

#[tokio::test]
async fn test_lists_only_immediate_entries() {
    let server = TestServer::with_tree(|root| {
        write_file(root, "top/inner/deep.txt", "deep");
        write_file(root, "top/shallow.txt", "shallow");
    });

    let links = server.get("/files/top").await.links();
    assert_eq!(
        links,
        vec![
            ("/top/inner/".to_string(), "inner/".to_string()),
            ("/top/shallow.txt".to_string(), "shallow.txt".to_string()),
        ]
    );
}

#[tokio::test]
async fn test_empty_directory() {
    let server = TestServer::with_tree(|root| make_dir(root, "empty"));

    let response = server.get("/files/empty").await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.links().is_empty());
    assert!(!response.text().contains("<div>"));
    assert!(response.text().contains("<h2>Files:</h2>"));
}

#[tokio::test]
async fn test_empty_base_directory() {
    let server = TestServer::new();

    let response = server.get("/files").await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.links().is_empty());
}

// =============================================================================
// Links
// =============================================================================

#[tokio::test]
async fn test_links_from_root() {
    let server = TestServer::with_tree(|root| {
        make_dir(root, "docs");
        write_file(root, "readme.md", "# hi");
    });

    for uri in ["/files", "/files/"] {
        let links = server.get(uri).await.links();
        assert_eq!(
            links,
            vec![
                ("/docs/".to_string(), "docs/".to_string()),
                ("/readme.md".to_string(), "readme.md".to_string()),
            ],
            "unexpected links for {uri}"
        );
    }
}

#[tokio::test]
async fn test_trailing_slash_does_not_double() {
    let server = TestServer::with_tree(|root| write_file(root, "docs/notes.txt", "n"));

    let without = server.get("/files/docs").await.links();
    let with = server.get("/files/docs/").await.links();
    assert_eq!(without, with);
    assert_eq!(without[0].0, "/docs/notes.txt");
}

#[tokio::test]
async fn test_links_are_reentrant() {
    let server = TestServer::with_tree(|root| {
        write_file(root, "a/b/c.txt", "deep content");
        write_file(root, "a/top.txt", "top");
    });

    // Walk down from the root following the first link at each level
    let mut uri = "/files".to_string();
    for expected in ["a/", "b/"] {
        let links = server.get(&uri).await.links();
        let (href, label) = &links[0];
        assert_eq!(label, expected);
        uri = format!("/files{}", href);
    }

    let links = server.get(&uri).await.links();
    assert_eq!(links[0].1, "c.txt");

    let file = server.get(&format!("/files{}", links[0].0)).await;
    assert_eq!(file.status, StatusCode::OK);
    assert_eq!(&file.body[..], b"deep content");
}

#[tokio::test]
async fn test_special_names_are_encoded_and_reentrant() {
    let server = TestServer::with_tree(|root| {
        write_file(root, "my docs/a & b.txt", "ampersand");
    });

    let links = server.get("/files").await.links();
    assert_eq!(links[0], ("/my%20docs/".to_string(), "my docs/".to_string()));

    let inner = server.get(&format!("/files{}", links[0].0)).await.links();
    assert_eq!(inner[0].0, "/my%20docs/a%20%26%20b.txt");
    assert_eq!(inner[0].1, "a &amp; b.txt");

    let file = server.get(&format!("/files{}", inner[0].0)).await;
    assert_eq!(file.status, StatusCode::OK);
    assert_eq!(&file.body[..], b"ampersand");
}

#[tokio::test]
async fn test_names_are_html_escaped() {
    let server = TestServer::with_tree(|root| write_file(root, "<b>x.txt", "x"));

    let page = server.get("/files").await.text();
    assert!(!page.contains("<b>"));
    assert!(page.contains(r#"href="/%3Cb%3Ex.txt">&lt;b&gt;x.txt</a>"#));
}

#[tokio::test]
async fn test_link_prefix() {
    let config = RouterConfig::new()
        .with_tracing(false)
        .with_link_prefix("/files");
    let server = TestServer::with_config(config, |root| {
        make_dir(root, "docs/old");
        write_file(root, "docs/notes.txt", "n");
    });

    let links = server.get("/files/docs").await.links();
    assert_eq!(
        links,
        vec![
            ("/files/docs/old/".to_string(), "old/".to_string()),
            ("/files/docs/notes.txt".to_string(), "notes.txt".to_string()),
        ]
    );

    let response = server.get(&links[1].0).await;
    assert_eq!(response.status, StatusCode::OK);
}

#[cfg(unix)]
#[tokio::test]
async fn test_symlinked_directory_listed_as_directory() {
    let server = TestServer::with_tree(|root| {
        make_dir(root, "real");
        std::os::unix::fs::symlink(root.join("real"), root.join("alias")).unwrap();
    });

    let links = server.get("/files").await.links();
    let labels: Vec<&str> = links.iter().map(|(_, label)| label.as_str()).collect();
    assert_eq!(labels, vec!["alias/", "real/"]);
}

#[tokio::test]
async fn test_listing_reflects_current_state() {
    let server = TestServer::with_tree(|root| write_file(root, "first.txt", "1"));

    assert_eq!(server.get("/files").await.links().len(), 1);

    write_file(server.dir.path(), "second.txt", "2");
    assert_eq!(server.get("/files").await.links().len(), 2);
}

#[cfg(unix)]
#[tokio::test]
async fn test_unreadable_directory_is_server_error() {
    use std::os::unix::fs::PermissionsExt;

    let server = TestServer::with_tree(|root| write_file(root, "locked/inside.txt", "x"));
    let path = server.dir.path().join("locked");
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o000)).unwrap();

    // Permission bits do not apply to root
    if std::fs::read_dir(&path).is_ok() {
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
        return;
    }

    let response = server.get("/files/locked").await;
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();

    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.json()["error"], "io_error");
    assert!(!response.text().contains("<h2>Files:</h2>"));
}

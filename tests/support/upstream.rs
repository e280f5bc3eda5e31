//! Mock Share-Online endpoints for integration tests.

#![allow(dead_code)]

use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const USERNAME: &str = "bob";
pub const PASSWORD: &str = "hunter2";
pub const TOKEN: &str = "TOK123";
pub const FILE_ID: &str = "ABC123";
pub const MD5: &str = "d41d8cd98f00b204e9800998ecf8427e";

pub fn premium_account_body() -> String {
    format!("a={TOKEN}\ngroup=Premium\nexpire_date=1999999999\ntraffic_1d=500;foo\n")
}

pub fn free_account_body() -> String {
    format!("a={TOKEN}\ngroup=Sammler\nexpire_date=0\ntraffic_1d=0;0\n")
}

pub fn online_link_body(size: usize) -> String {
    format!("{FILE_ID};OK;file.zip;{size};{MD5}\n")
}

pub fn download_url_body(server: &MockServer, size: usize) -> String {
    download_url_body_at(&server.uri(), size)
}

/// Download-resolution body whose signed URL points at `file_host`.
pub fn download_url_body_at(file_host: &str, size: usize) -> String {
    format!(
        "ID: {FILE_ID}\nURL: {file_host}/dl/{FILE_ID}?sig=signed\nSTATUS: online\nSIZE: {size}\nMD5: {MD5}\n"
    )
}

/// Mounts the account-details endpoint with the given body.
pub async fn mount_account(server: &MockServer, body: impl Into<String>) {
    Mock::given(method("GET"))
        .and(path("/cgi-bin"))
        .and(query_param("q", "userdetails"))
        .and(query_param("aux", "traffic"))
        .and(query_param("username", USERNAME))
        .and(query_param("password", PASSWORD))
        .respond_with(ResponseTemplate::new(200).set_body_string(body.into()))
        .mount(server)
        .await;
}

/// Mounts the link-check endpoint with the given body.
pub async fn mount_link_check(server: &MockServer, body: impl Into<String>) {
    Mock::given(method("GET"))
        .and(path("/linkcheck.php"))
        .and(query_param("md5", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body.into()))
        .mount(server)
        .await;
}

/// Mounts the download-resolution endpoint with the given body.
pub async fn mount_download_url(server: &MockServer, body: impl Into<String>) {
    Mock::given(method("GET"))
        .and(path("/account.php"))
        .and(query_param("act", "download"))
        .and(query_param("lid", FILE_ID))
        .and(query_param("username", USERNAME))
        .and(query_param("password", PASSWORD))
        .respond_with(ResponseTemplate::new(200).set_body_string(body.into()))
        .mount(server)
        .await;
}

/// Mounts the signed file URL, which only answers when the session cookie is sent.
pub async fn mount_file(server: &MockServer, content: &[u8]) {
    Mock::given(method("GET"))
        .and(path(format!("/dl/{FILE_ID}")))
        .and(query_param("sig", "signed"))
        .and(header("cookie", format!("a={TOKEN}").as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(content.to_vec()))
        .mount(server)
        .await;
}

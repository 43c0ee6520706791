#![cfg(not(feature = "csr"))]

use super::*;

fn store(base_url: &'static str) -> HttpPoemStore {
    HttpPoemStore::new(ApiConfig { base_url })
}

#[test]
fn urls_are_relative_to_page_origin_by_default() {
    assert_eq!(store("").url(Endpoint::List), "/poems");
    assert_eq!(store("").url(Endpoint::Fetch("my poem")), "/poem/my%20poem");
}

#[test]
fn urls_join_configured_base() {
    let store = store("http://127.0.0.1:8080/");
    assert_eq!(store.url(Endpoint::Generate), "http://127.0.0.1:8080/generate");
    assert_eq!(store.url(Endpoint::Delete("a&b")), "http://127.0.0.1:8080/poem/a%26b");
}

#[test]
fn calls_fail_as_transport_errors_outside_the_browser() {
    let store = store("");
    let err = futures::executor::block_on(store.list_titles()).unwrap_err();
    assert_eq!(err, RemoteError::Transport(UNAVAILABLE.to_owned()));
    assert_eq!(err.user_message(), poems::error::CONNECTIVITY_MESSAGE);
}

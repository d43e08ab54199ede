//! Proxy variables in the environment must not reroute a client that has no
//! proxy configured. Kept in its own test binary since it edits the process
//! environment.

use estraier_http::NodeClient;

#[tokio::test]
async fn test_environment_proxy_ignored() {
    // nothing listens on port 1: a request sent through this proxy fails
    for name in ["HTTP_PROXY", "http_proxy", "HTTPS_PROXY", "https_proxy", "ALL_PROXY"] {
        std::env::set_var(name, "http://127.0.0.1:1");
    }
    std::env::remove_var("NO_PROXY");
    std::env::remove_var("no_proxy");

    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/node/test/cacheusage")
        .with_status(200)
        .with_body("0.5\n")
        .create_async()
        .await;

    let client = NodeClient::new(&format!("{}/node/test", server.url())).unwrap();
    assert_eq!(client.cache_usage().await.unwrap(), 0.5);
    mock.assert_async().await;
}

use tokio::runtime::Runtime;
use wiremock::MockServer;

pub mod fixtures;

/// Runtime used only to start and configure mock servers.
///
/// wiremock serves requests from its own thread, so the blocking client can
/// talk to it from the test thread once `block_on` has returned.
pub fn mock_server() -> (Runtime, MockServer) {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .unwrap();
    let server = runtime.block_on(MockServer::start());
    (runtime, server)
}

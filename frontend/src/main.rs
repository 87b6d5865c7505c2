#[cfg(target_arch = "wasm32")]
fn main() {
    leaddb_frontend::start();
}

/// Native builds only report what the browser build would use.
#[cfg(not(target_arch = "wasm32"))]
#[tokio::main(flavor = "current_thread")]
async fn main() {
    let api_base_url = leaddb_frontend::config::resolve_api_base_url().await;
    println!("LeadDB frontend: build for wasm32 to run in the browser");
    println!("API base URL: {api_base_url}");
    for path in leaddb_frontend::ROUTE_PATHS {
        println!("route {path}");
    }
}

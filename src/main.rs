#![forbid(unsafe_code)]

use lazy_static::lazy_static;
use log::info;
use poem::listener::TcpListener;
use poem::{handler, Server};

// Hello utilities
use crate::utils::config::{init_log, init_runtime_context, RuntimeCtx};
use crate::utils::errors::Errors;

// Modules
mod utils;

// ***************************************************************************
//                                Constants
// ***************************************************************************
const SERVER_NAME : &str = "HelloServer"; // for poem logging

// The body every request receives.
const GREETING : &str = "Hello, Golang!";

// ***************************************************************************
//                             Static Variables
// ***************************************************************************
// Lazily initialize the runtime context so that it has a 'static lifetime.
// The context holds the port value read once from the environment.
lazy_static! {
    static ref RUNTIME_CTX: RuntimeCtx = init_runtime_context();
}

// ---------------------------------------------------------------------------
// main:
// ---------------------------------------------------------------------------
#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    // ------------- Initialize Server ----------------
    // Announce ourselves.
    println!("Starting hello_server!");

    // Initialize the server.
    hello_init();

    // --------------- Main Loop Set Up ---------------
    // Assign the listen address.  The port value is used verbatim; an empty
    // or invalid value makes the bind fail and the error leave main.
    let addr = format!("{}{}", "0.0.0.0:", RUNTIME_CTX.port);
    println!("Server started at localhost: {}", RUNTIME_CTX.port);

    // ------------------ Main Loop -------------------
    // The greeting handler is the root endpoint, in front of any router,
    // so every path and every method lands on it.
    Server::new(TcpListener::bind(addr))
        .name(SERVER_NAME)
        .run(greeting)
        .await
}

// ***************************************************************************
//                             Private Functions
// ***************************************************************************
// ---------------------------------------------------------------------------
// hello_init:
// ---------------------------------------------------------------------------
/** Initialize all subsystems and data structures other than those needed
 * to configure the main loop processor.
 */
fn hello_init() {
    // Configure our log.
    init_log();

    // Force the reading of input parameters and initialization of the
    // runtime context.
    info!("{}", Errors::InputParms(format!("{:#?}", *RUNTIME_CTX)));

    // Log build info.
    print_version_info();
}

// ---------------------------------------------------------------------------
// print_version_info:
// ---------------------------------------------------------------------------
fn print_version_info() {
    // Log build info.
    info!("{}.", format!("\n*** Running hello_server={}, BRANCH={}, COMMIT={}, DIRTY={}, RUSTC={}",
                        option_env!("CARGO_PKG_VERSION").unwrap_or("unknown"),
                        env!("GIT_BRANCH"),
                        env!("GIT_COMMIT_SHORT"),
                        env!("GIT_DIRTY"),
                        env!("RUSTC_VERSION")),
    );
}

// ***************************************************************************
//                            Greeting Endpoint
// ***************************************************************************
// ---------------------------------------------------------------------------
// greeting endpoint:
// ---------------------------------------------------------------------------
/** Answer every request with the fixed greeting, regardless of path,
 * method, headers, or query parameters.
 */
#[handler]
fn greeting() -> &'static str {
    GREETING
}

// ***************************************************************************
//                                  Tests
// ***************************************************************************
#[cfg(test)]
mod tests {
    use poem::test::TestClient;

    use super::{greeting, GREETING};

    #[tokio::test]
    async fn get_root() {
        let cli = TestClient::new(greeting);
        let resp = cli.get("/").send().await;
        resp.assert_status_is_ok();
        resp.assert_text(GREETING).await;
    }

    #[tokio::test]
    async fn any_path_any_method() {
        let cli = TestClient::new(greeting);

        let resp = cli.get("/some/deep/path?x=1").send().await;
        resp.assert_status_is_ok();
        resp.assert_text(GREETING).await;

        let resp = cli.post("/submit").body("ignored").send().await;
        resp.assert_status_is_ok();
        resp.assert_text(GREETING).await;

        let resp = cli.delete("/anything").send().await;
        resp.assert_status_is_ok();
        resp.assert_text(GREETING).await;
    }

    #[tokio::test]
    async fn repeated_requests_identical() {
        let cli = TestClient::new(greeting);
        for _ in 0..2 {
            let resp = cli.get("/repeat").send().await;
            resp.assert_status_is_ok();
            resp.assert_text(GREETING).await;
        }
    }
}

use clap::Parser;
use singleton_cart::cart::{AppState, ShoppingCart};
use singleton_cart::config::{Args, Command};
use singleton_cart::demo;
use singleton_cart::factory::Framework;
use singleton_cart::router::create_app_router;
use std::net::SocketAddr;
use std::sync::Arc;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let stdout = std::io::stdout();
    match args.command() {
        Command::Serve { host, port } => serve(SocketAddr::new(host, port))?,
        Command::Demo => {
            demo::run(&mut stdout.lock())?;
        }
        Command::Adapters { framework } => {
            let frameworks = match framework {
                Some(framework) => vec![framework],
                None => Framework::ALL.to_vec(),
            };
            demo::run_adapters(&frameworks, &mut stdout.lock())?;
        }
    }

    Ok(())
}

#[tokio::main]
async fn serve(addr: SocketAddr) -> anyhow::Result<()> {
    // The composition root owns the one cart every route shares
    let state = Arc::new(AppState::new(ShoppingCart::shared()));

    let app = create_app_router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Server running on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            tracing::info!("Shutdown signal received");
        })
        .await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use singleton_cart::cart::{AppState, ShoppingCart};
    use singleton_cart::mcp::handlers::handle_tool_call;
    use singleton_cart::mcp::models::{ADD_ITEM_TOOL, REMOVE_ITEM_TOOL};

    #[test]
    fn tool_calls_mutate_the_injected_cart() {
        let cart = ShoppingCart::shared();
        let state = AppState::new(cart.clone());

        handle_tool_call(
            &state,
            ADD_ITEM_TOOL,
            json!({ "id": 1, "label": "A", "cost": 3000 }),
        )
        .expect("Tool call failed");
        handle_tool_call(
            &state,
            ADD_ITEM_TOOL,
            json!({ "id": 2, "label": "B", "cost": 2900 }),
        )
        .expect("Tool call failed");

        // Mutation through the caller's own handle is visible to the state
        cart.add_item(singleton_cart::cart::Item::new(3, "C", 2400.0));

        let result = handle_tool_call(&state, REMOVE_ITEM_TOOL, json!({ "id": 2 }))
            .expect("Tool call failed");
        assert_eq!(result["structuredContent"]["removed"], 1);

        let labels: Vec<String> = state
            .cart
            .items()
            .iter()
            .map(|i| i.label().to_string())
            .collect();
        assert_eq!(labels, vec!["A", "C"]);
    }

    #[test]
    fn test_rpc_envelopes() {
        use singleton_cart::mcp::helpers::{rpc_error, rpc_success};
        let success = rpc_success(json!(1), json!("ok"));
        assert_eq!(success["result"], "ok");
        assert_eq!(success["id"], 1);

        let error = rpc_error(json!(2), -1, "fail");
        assert_eq!(error["error"]["message"], "fail");
        assert_eq!(error["id"], 2);
    }
}

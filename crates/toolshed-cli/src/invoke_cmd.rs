use anyhow::Context;
use reqwest::Client;

use toolshed_rpc::wire::METHOD_TOOLS_CALL;
use toolshed_rpc::CallResult;

/// Invoke a tool on the server and print the result payload.
///
/// The server owns parameter validation; malformed input comes back as a
/// structured JSON-RPC error, which is printed verbatim.
pub async fn run(server_url: &str, tool: &str, parameters: &str) -> anyhow::Result<()> {
    let client = Client::new();

    tracing::debug!(%tool, "invoking via {server_url}");

    let resp = client
        .post(format!("{server_url}/rpc"))
        .json(&serde_json::json!({
            "jsonrpc": "2.0",
            "id": 1,
            "method": METHOD_TOOLS_CALL,
            "params": {
                "name": tool,
                "parameters": parameters,
            }
        }))
        .send()
        .await?
        .json::<serde_json::Value>()
        .await?;

    if let Some(error) = resp.get("error") {
        anyhow::bail!("invocation failed: {}", serde_json::to_string_pretty(error)?);
    }

    let result = resp
        .get("result")
        .cloned()
        .context("response has no result")?;
    let call: CallResult = serde_json::from_value(result)?;

    println!("{}", call.data);

    Ok(())
}

use anyhow::Context;
use reqwest::Client;

use toolshed_rpc::wire::METHOD_TOOLS_LIST;
use toolshed_rpc::ListResult;

/// Fetch and print the server's tool definitions.
pub async fn run(server_url: &str) -> anyhow::Result<()> {
    let client = Client::new();

    let resp = client
        .post(format!("{server_url}/rpc"))
        .json(&serde_json::json!({
            "jsonrpc": "2.0",
            "id": 1,
            "method": METHOD_TOOLS_LIST,
        }))
        .send()
        .await?
        .json::<serde_json::Value>()
        .await?;

    if let Some(error) = resp.get("error") {
        anyhow::bail!("server error: {}", serde_json::to_string_pretty(error)?);
    }

    let result = resp
        .get("result")
        .cloned()
        .context("response has no result")?;
    let list: ListResult = serde_json::from_value(result)?;

    for tool in list.tools {
        println!("{}", tool.name);
        println!("  {}", tool.description);
        println!("  schema: {}", tool.schema);
    }

    Ok(())
}

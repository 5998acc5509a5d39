use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;

use toolshed_core::{Error, Schema, Tool};

/// Demo weather tool with canned output. It deliberately ignores real-world
/// weather; the deterministic answer makes it useful as a wiring check.
pub struct WeatherTool;

#[derive(Deserialize)]
struct WeatherParams {
    location: Vec<String>,
}

#[async_trait]
impl Tool for WeatherTool {
    fn name(&self) -> &str {
        "get_weather"
    }

    fn description(&self) -> &str {
        "get the weather for a given location."
    }

    fn schema(&self) -> Schema {
        Schema::object(
            vec![(
                "location",
                Schema::array(Schema::string()).describe("the locations to report the weather for"),
            )],
            &["location"],
        )
    }

    async fn execute(&self, parameters: Value) -> Result<String, Error> {
        let params: WeatherParams = serde_json::from_value(parameters)
            .map_err(|error| Error::InvalidParameters(error.to_string()))?;

        Ok(format!(
            "It is always sunny in {}!!!",
            params.location.join(", ")
        ))
    }
}

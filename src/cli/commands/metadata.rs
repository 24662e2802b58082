use anyhow::Result;

use prowler_plugin_metadata::cloud_service_type;

pub fn run_metadata_command() -> Result<()> {
    let descriptor = cloud_service_type();
    println!("{}", serde_json::to_string_pretty(&descriptor)?);
    Ok(())
}

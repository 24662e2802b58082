use anyhow::Result;

use prowler_plugin_core::{AWS_PROVIDER, compliance_frameworks};

pub fn run_frameworks_command() -> Result<()> {
    if let Some(frameworks) = compliance_frameworks(AWS_PROVIDER) {
        for (name, selector) in frameworks {
            println!("{name}\t{selector}");
        }
    }
    Ok(())
}

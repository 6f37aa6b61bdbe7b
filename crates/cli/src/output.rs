use std::env;

use eyre::{eyre, Result};
use storagoor_common::{constants::ADDRESS_REGEX, ether::chains::ChainId};

/// build a standardized output path for the given parameters. follows the following cases:
/// - if `output` is the default value (`output`)
///   - if `target` is a contract address, return `/output/{chain_id}/{target}/{filename}`
///   - otherwise, return `/output/local/{filename}`
/// - if `output` is specified, return `/{output}/{filename}`
pub(crate) fn build_output_path(
    output: &str,
    target: &str,
    chain: ChainId,
    filename: &str,
) -> Result<String> {
    if output == "output" {
        let cwd = env::current_dir()?
            .into_os_string()
            .into_string()
            .map_err(|_| eyre!("Unable to get current working directory"))?;

        if ADDRESS_REGEX.is_match(target).unwrap_or(false) {
            return Ok(format!("{}/output/{}/{}/{}", cwd, chain, target, filename));
        } else {
            return Ok(format!("{}/output/local/{}", cwd, filename));
        }
    }

    Ok(format!("{}/{}", output, filename))
}

/// prefix `filename` with the user supplied `--name`, if any
pub(crate) fn output_filename(name: &str, filename: &str) -> String {
    if name.is_empty() {
        filename.to_string()
    } else {
        format!("{}-{}", name, filename)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_default_address() {
        let target = "0x0000000000000000000000000000000000000001";

        let path = build_output_path("output", target, ChainId(8453), "read.json")
            .expect("failed to build output path");
        assert!(path.ends_with("/output/8453/0x0000000000000000000000000000000000000001/read.json"));
    }

    #[test]
    fn test_output_default_local() {
        let path = build_output_path("output", "not-an-address", ChainId::MAINNET, "layout.csv")
            .expect("failed to build output path");
        assert!(path.ends_with("/output/local/layout.csv"));
    }

    #[test]
    fn test_output_specified() {
        let target = "0x0000000000000000000000000000000000000001";

        let path = build_output_path("/some_dir", target, ChainId::MAINNET, "layout.csv")
            .expect("failed to build output path");
        assert_eq!(path, "/some_dir/layout.csv".to_string());
    }

    #[test]
    fn test_output_filename() {
        assert_eq!(output_filename("", "read.json"), "read.json");
        assert_eq!(output_filename("weth", "read.json"), "weth-read.json");
    }
}

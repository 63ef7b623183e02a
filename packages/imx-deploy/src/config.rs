use std::collections::BTreeMap;

use cosmwasm_schema::cw_serde;
use cosmwasm_std::from_slice;

use crate::error::DeployError;

/// Environment variable holding the deployer key
pub const PRIVATE_KEY_VAR: &str = "PRIVATE_KEY";

pub const LOCALHOST: &str = "localhost";
pub const ZKEVM: &str = "zkevm";
pub const ZKEVM_TESTNET_CHAIN_ID: u64 = 13473;

#[cw_serde]
pub struct OptimizerSettings {
    pub enabled: bool,
    pub runs: u32,
}

#[cw_serde]
pub struct CompilerConfig {
    pub version: String,
    pub optimizer: OptimizerSettings,
}

impl CompilerConfig {
    fn optimized(version: &str) -> Self {
        Self {
            version: version.to_string(),
            optimizer: OptimizerSettings {
                enabled: true,
                runs: 200,
            },
        }
    }
}

#[cw_serde]
pub struct NetworkConfig {
    pub url: String,
    pub accounts: Vec<String>,
}

#[cw_serde]
pub struct ChainUrls {
    pub api_url: String,
    pub browser_url: String,
}

/// Block explorer for a network the verifier does not know about
#[cw_serde]
pub struct CustomChain {
    pub network: String,
    pub chain_id: u64,
    pub urls: ChainUrls,
}

#[cw_serde]
pub struct VerifyConfig {
    pub api_key: BTreeMap<String, String>,
    pub custom_chains: Vec<CustomChain>,
}

#[cw_serde]
pub struct SourcifyConfig {
    pub enabled: bool,
}

/// Build, network and verification settings used when deploying the
/// sample contracts. Fields missing from a JSON override keep their
/// default value.
#[cw_serde]
#[serde(default)]
pub struct DeployConfig {
    pub compilers: Vec<CompilerConfig>,
    pub networks: BTreeMap<String, NetworkConfig>,
    pub verify: VerifyConfig,
    pub sourcify: SourcifyConfig,
}

impl Default for DeployConfig {
    fn default() -> Self {
        Self::new(None)
    }
}

/// A network signs with the deployer key when one is given, and with no
/// account otherwise.
pub fn accounts(private_key: Option<String>) -> Vec<String> {
    private_key.into_iter().collect()
}

impl DeployConfig {
    pub fn new(private_key: Option<String>) -> Self {
        let network = |url: &str| NetworkConfig {
            url: url.to_string(),
            accounts: accounts(private_key.clone()),
        };

        Self {
            compilers: vec![
                CompilerConfig::optimized("0.8.19"),
                CompilerConfig::optimized("0.8.20"),
            ],
            networks: BTreeMap::from([
                (LOCALHOST.to_string(), network("http://127.0.0.1:8545/")),
                (ZKEVM.to_string(), network("https://rpc.testnet.immutable.com")),
            ]),
            verify: VerifyConfig {
                api_key: BTreeMap::from([(ZKEVM.to_string(), "xyz".to_string())]),
                custom_chains: vec![CustomChain {
                    network: ZKEVM.to_string(),
                    chain_id: ZKEVM_TESTNET_CHAIN_ID,
                    urls: ChainUrls {
                        api_url: "https://explorer.testnet.immutable.com/api".to_string(),
                        browser_url: "https://explorer.testnet.immutable.com/".to_string(),
                    },
                }],
            },
            sourcify: SourcifyConfig { enabled: false },
        }
    }

    /// Defaults, signing with `PRIVATE_KEY` when it is set
    pub fn from_env() -> Self {
        Self::new(std::env::var(PRIVATE_KEY_VAR).ok())
    }

    pub fn from_json(json: &[u8]) -> Result<Self, DeployError> {
        Ok(from_slice(json)?)
    }

    pub fn network(&self, name: &str) -> Result<&NetworkConfig, DeployError> {
        self.networks
            .get(name)
            .ok_or_else(|| DeployError::UnknownNetwork(name.to_string()))
    }

    pub fn api_key(&self, network: &str) -> Option<&str> {
        self.verify.api_key.get(network).map(String::as_str)
    }

    pub fn custom_chain(&self, network: &str) -> Option<&CustomChain> {
        self.verify
            .custom_chains
            .iter()
            .find(|chain| chain.network == network)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = DeployConfig::default();

        assert_eq!(config.compilers.len(), 2);
        assert_eq!(config.compilers[0].version, "0.8.19");
        assert_eq!(config.compilers[1].version, "0.8.20");
        assert!(config
            .compilers
            .iter()
            .all(|c| c.optimizer.enabled && c.optimizer.runs == 200));

        let localhost = config.network(LOCALHOST).unwrap();
        assert_eq!(localhost.url, "http://127.0.0.1:8545/");
        assert!(localhost.accounts.is_empty());
        let zkevm = config.network(ZKEVM).unwrap();
        assert_eq!(zkevm.url, "https://rpc.testnet.immutable.com");

        assert_eq!(config.api_key(ZKEVM), Some("xyz"));
        let chain = config.custom_chain(ZKEVM).unwrap();
        assert_eq!(chain.chain_id, 13473);
        assert_eq!(
            chain.urls.api_url,
            "https://explorer.testnet.immutable.com/api"
        );
        assert_eq!(
            chain.urls.browser_url,
            "https://explorer.testnet.immutable.com/"
        );
        assert!(!config.sourcify.enabled);
    }

    #[test]
    fn private_key_signs_every_network() {
        let config = DeployConfig::new(Some("0xabc".to_string()));
        for network in config.networks.values() {
            assert_eq!(network.accounts, vec!["0xabc".to_string()]);
        }
        assert!(accounts(None).is_empty());
    }

    #[test]
    fn unknown_network() {
        let config = DeployConfig::default();
        assert_eq!(
            config.network("mainnet").unwrap_err(),
            DeployError::UnknownNetwork("mainnet".to_string())
        );
        assert!(config.custom_chain(LOCALHOST).is_none());
    }

    #[test]
    fn json_overrides_defaults() {
        let json = br#"{
            "networks": {
                "devnet": { "url": "http://localhost:26657", "accounts": [] }
            },
            "sourcify": { "enabled": true }
        }"#;
        let config = DeployConfig::from_json(json).unwrap();

        assert!(config.sourcify.enabled);
        assert_eq!(config.networks.len(), 1);
        assert_eq!(
            config.network("devnet").unwrap().url,
            "http://localhost:26657"
        );
        assert!(config.network(ZKEVM).is_err());
        // untouched sections keep their defaults
        assert_eq!(config.compilers, DeployConfig::default().compilers);
        assert_eq!(config.api_key(ZKEVM), Some("xyz"));
    }

    #[test]
    fn rejects_malformed_json() {
        let err = DeployConfig::from_json(br#"{ "compilers": 3 }"#).unwrap_err();
        assert!(matches!(err, DeployError::Std(_)));
    }
}

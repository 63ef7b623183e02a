use std::collections::BTreeMap;

use anyhow::Result as AnyResult;
use cosmwasm_std::Addr;
use cw_multi_test::{Contract, ContractWrapper, Executor};
use sg_multi_test::StargazeApp;
use sg_std::StargazeMsgWrapper;

/// Contracts a deployment module can deploy
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SampleContract {
    OperatorAllowlist,
    ImmutableErc721,
    PrimarySale,
}

impl SampleContract {
    fn code(&self) -> Box<dyn Contract<StargazeMsgWrapper>> {
        match self {
            SampleContract::OperatorAllowlist => Box::new(ContractWrapper::new(
                sample_operator_allowlist::contract::execute,
                sample_operator_allowlist::contract::instantiate,
                sample_operator_allowlist::contract::query,
            )),
            SampleContract::ImmutableErc721 => Box::new(ContractWrapper::new(
                sample_immutable_erc721::contract::execute,
                sample_immutable_erc721::contract::instantiate,
                sample_immutable_erc721::contract::query,
            )),
            SampleContract::PrimarySale => Box::new(
                ContractWrapper::new(
                    sample_primary_sale::contract::execute,
                    sample_primary_sale::contract::instantiate,
                    sample_primary_sale::query::query,
                )
                .with_migrate(sample_primary_sale::contract::migrate),
            ),
        }
    }
}

/// Declares a single contract deployment. Modules take no arguments from
/// the caller and do not depend on each other.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DeploymentModule {
    pub id: &'static str,
    /// Contract name, also used as the instantiate label
    pub contract: &'static str,
    /// Key of the deployed address in the result of `deploy`
    pub handle: &'static str,
    pub code: SampleContract,
}

pub const SAMPLE_OPERATOR_ALLOWLIST: DeploymentModule = DeploymentModule {
    id: "SampleOperatorAllowlist",
    contract: "SampleOperatorAllowlist",
    handle: "sampleOperatorAllowlist",
    code: SampleContract::OperatorAllowlist,
};

pub const SAMPLE_IMMUTABLE_ERC721: DeploymentModule = DeploymentModule {
    id: "SampleImmutableERC721Module",
    contract: "SampleImmutableERC721Module",
    handle: "sampleImmutableERC721Module",
    code: SampleContract::ImmutableErc721,
};

pub const SAMPLE_PRIMARY_SALE: DeploymentModule = DeploymentModule {
    id: "SamplePrimarySaleERC721",
    contract: "SamplePrimarySaleERC721",
    handle: "samplePrimarySaleErc721",
    code: SampleContract::PrimarySale,
};

pub const MODULES: [DeploymentModule; 3] = [
    SAMPLE_OPERATOR_ALLOWLIST,
    SAMPLE_IMMUTABLE_ERC721,
    SAMPLE_PRIMARY_SALE,
];

impl DeploymentModule {
    /// Stores and instantiates the contract with `deployer` as sender.
    pub fn deploy(&self, app: &mut StargazeApp, deployer: &Addr) -> AnyResult<BTreeMap<String, Addr>> {
        let code_id = app.store_code(self.code.code());

        let addr = match self.code {
            SampleContract::OperatorAllowlist => app.instantiate_contract(
                code_id,
                deployer.clone(),
                &sample_operator_allowlist::msg::InstantiateMsg {},
                &[],
                self.contract,
                None,
            )?,
            SampleContract::ImmutableErc721 => {
                // the deployer owns the collection and receives royalties;
                // no allowlist registry until the owner sets one
                let msg = sample_immutable_erc721::msg::InstantiateMsg {
                    owner: deployer.to_string(),
                    name: "Sample Immutable ERC721".to_string(),
                    symbol: "SIMX".to_string(),
                    base_uri: "".to_string(),
                    contract_uri: "".to_string(),
                    operator_allowlist: None,
                    royalty_receiver: deployer.to_string(),
                    fee_numerator: 0,
                };
                app.instantiate_contract(
                    code_id,
                    deployer.clone(),
                    &msg,
                    &[],
                    self.contract,
                    Some(deployer.to_string()),
                )?
            }
            SampleContract::PrimarySale => app.instantiate_contract(
                code_id,
                deployer.clone(),
                &sample_primary_sale::msg::InstantiateMsg {},
                &[],
                self.contract,
                Some(deployer.to_string()),
            )?,
        };

        Ok(BTreeMap::from([(self.handle.to_string(), addr)]))
    }
}

/// Runs every module, merging the handles
pub fn deploy_all(app: &mut StargazeApp, deployer: &Addr) -> AnyResult<BTreeMap<String, Addr>> {
    let mut handles = BTreeMap::new();
    for module in MODULES.iter() {
        handles.extend(module.deploy(app, deployer)?);
    }
    Ok(handles)
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;
    use imx_allowlist::OperatorAllowlistContract;
    use imx_erc721::{ImxErc721Contract, DEFAULT_ADMIN_ROLE};
    use sample_primary_sale::msg::{OwnerResponse, QueryMsg as SaleQueryMsg};
    use sample_primary_sale::PrimarySaleContract;

    const DEPLOYER: &str = "deployer";

    #[test]
    fn module_ids_are_unique() {
        let mut ids: Vec<_> = MODULES.iter().map(|m| m.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), MODULES.len());
    }

    #[test]
    fn deploy_operator_allowlist() {
        let mut app = StargazeApp::default();
        let deployer = Addr::unchecked(DEPLOYER);
        let handles = SAMPLE_OPERATOR_ALLOWLIST.deploy(&mut app, &deployer).unwrap();

        let allowlist = OperatorAllowlistContract(handles["sampleOperatorAllowlist"].clone());
        assert!(!allowlist
            .is_allowlisted(&app.wrap(), &Addr::unchecked("market"))
            .unwrap());
    }

    #[test]
    fn deploy_immutable_erc721() {
        let mut app = StargazeApp::default();
        let deployer = Addr::unchecked(DEPLOYER);
        let handles = SAMPLE_IMMUTABLE_ERC721.deploy(&mut app, &deployer).unwrap();
        assert_eq!(handles.len(), 1);

        let collection = ImxErc721Contract(handles["sampleImmutableERC721Module"].clone());
        assert!(collection
            .has_role(&app.wrap(), DEFAULT_ADMIN_ROLE, &deployer)
            .unwrap());
        assert_eq!(collection.balance_of(&app.wrap(), &deployer).unwrap(), 0);
    }

    #[test]
    fn deploy_primary_sale() {
        let mut app = StargazeApp::default();
        let deployer = Addr::unchecked(DEPLOYER);
        let handles = SAMPLE_PRIMARY_SALE.deploy(&mut app, &deployer).unwrap();

        let addr = handles["samplePrimarySaleErc721"].clone();
        let res: OwnerResponse = app
            .wrap()
            .query_wasm_smart(addr.clone(), &SaleQueryMsg::Owner {})
            .unwrap();
        assert_eq!(res.owner, Some(deployer));

        let sale = PrimarySaleContract(addr);
        assert!(!sale.is_started(&app.wrap()).unwrap());
        assert_eq!(sale.total_minted(&app.wrap()).unwrap(), 0);
    }

    #[test]
    fn modules_deploy_independently() {
        let mut app = StargazeApp::default();
        let deployer = Addr::unchecked(DEPLOYER);
        let handles = deploy_all(&mut app, &deployer).unwrap();

        assert_eq!(
            handles.keys().map(String::as_str).collect::<Vec<_>>(),
            vec![
                "sampleImmutableERC721Module",
                "sampleOperatorAllowlist",
                "samplePrimarySaleErc721",
            ]
        );
        let addrs: BTreeSet<_> = handles.values().collect();
        assert_eq!(addrs.len(), 3);
    }
}

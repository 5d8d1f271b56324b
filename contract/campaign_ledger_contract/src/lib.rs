#![no_std]

mod contribution;
mod events;
mod registry;
mod settlement;
mod storage_types;
mod utils;
mod voting;


use soroban_sdk::{contract, contractimpl, Address, Env, String, Vec};

pub use events::*;
pub use storage_types::{
    CampaignError, CampaignId, CampaignSummary, ContributorInfo, MilestoneIndex, MilestoneStatus,
};
pub use voting::threshold_reached;

use storage_types::{DataKey, FIRST_CAMPAIGN_ID};

#[contract]
pub struct CampaignLedgerContract;

#[contractimpl]
impl CampaignLedgerContract {
    /// Deploy the ledger against the token contributions are made in.
    pub fn __constructor(env: Env, token: Address) {
        env.storage().instance().set(&DataKey::Token, &token);
        env.storage()
            .instance()
            .set(&DataKey::NextCampaignId, &FIRST_CAMPAIGN_ID);
        utils::extend_instance(&env);
    }

    /// Create a campaign with its full, fixed list of milestones.
    pub fn create_campaign(
        env: Env,
        creator: Address,
        name: String,
        description: String,
        target_amount: i128,
        deadline: u64,
        milestone_amounts: Vec<i128>,
        milestone_descriptions: Vec<String>,
    ) -> Result<CampaignId, CampaignError> {
        creator.require_auth();
        registry::create_campaign(
            &env,
            creator,
            name,
            description,
            target_amount,
            deadline,
            milestone_amounts,
            milestone_descriptions,
        )
    }

    /// Pledge `amount` of the ledger token to a campaign.
    pub fn contribute(
        env: Env,
        campaign_id: CampaignId,
        contributor: Address,
        amount: i128,
    ) -> Result<(), CampaignError> {
        contributor.require_auth();
        contribution::contribute(&env, campaign_id, contributor, amount)
    }

    /// Vote for a milestone; releases its funds on the vote that reaches a majority.
    pub fn approve_milestone(
        env: Env,
        campaign_id: CampaignId,
        milestone_index: MilestoneIndex,
        voter: Address,
    ) -> Result<(), CampaignError> {
        voter.require_auth();
        voting::approve_milestone(&env, campaign_id, milestone_index, voter)
    }

    /// Reclaim a pledge from a campaign that missed its target.
    pub fn claim_refund(
        env: Env,
        campaign_id: CampaignId,
        contributor: Address,
    ) -> Result<i128, CampaignError> {
        contributor.require_auth();
        settlement::claim_refund(&env, campaign_id, contributor)
    }

    /// Record the outcome of a campaign whose deadline has passed.
    pub fn finalize_campaign(env: Env, campaign_id: CampaignId) -> Result<bool, CampaignError> {
        settlement::finalize_campaign(&env, campaign_id)
    }

    /// View functions.
    pub fn get_campaign(env: Env, campaign_id: CampaignId) -> Result<CampaignSummary, CampaignError> {
        registry::load_campaign(&env, campaign_id).map(CampaignSummary::from)
    }

    pub fn get_contributor(
        env: Env,
        campaign_id: CampaignId,
        contributor: Address,
    ) -> Result<ContributorInfo, CampaignError> {
        contribution::contributor_info(&env, campaign_id, &contributor)
    }

    pub fn get_milestone(
        env: Env,
        campaign_id: CampaignId,
        milestone_index: MilestoneIndex,
    ) -> Result<MilestoneStatus, CampaignError> {
        let campaign = registry::load_campaign(&env, campaign_id)?;
        registry::load_milestone(&env, &campaign, milestone_index).map(MilestoneStatus::from)
    }

    pub fn get_milestones(
        env: Env,
        campaign_id: CampaignId,
    ) -> Result<Vec<MilestoneStatus>, CampaignError> {
        let campaign = registry::load_campaign(&env, campaign_id)?;
        let mut milestones = Vec::new(&env);
        for index in 0..campaign.milestone_count {
            let milestone = registry::load_milestone(&env, &campaign, index)?;
            milestones.push_back(MilestoneStatus::from(milestone));
        }
        Ok(milestones)
    }

    pub fn get_campaign_ids(env: Env) -> Vec<CampaignId> {
        registry::campaign_ids(&env)
    }

    pub fn get_campaign_count(env: Env) -> u64 {
        registry::campaign_count(&env)
    }

    pub fn get_contributors(
        env: Env,
        campaign_id: CampaignId,
    ) -> Result<Vec<Address>, CampaignError> {
        registry::load_campaign(&env, campaign_id)?;
        Ok(contribution::contributors_of(&env, campaign_id))
    }

    pub fn get_total_contributions(
        env: Env,
        campaign_id: CampaignId,
    ) -> Result<i128, CampaignError> {
        registry::load_campaign(&env, campaign_id).map(|campaign| campaign.total_contributions)
    }

    pub fn has_voted(
        env: Env,
        campaign_id: CampaignId,
        milestone_index: MilestoneIndex,
        voter: Address,
    ) -> bool {
        voting::has_voted(&env, campaign_id, milestone_index, voter)
    }

    pub fn get_token(env: Env) -> Address {
        env.storage().instance().get(&DataKey::Token).unwrap()
    }
}

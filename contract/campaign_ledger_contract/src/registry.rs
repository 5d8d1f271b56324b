use soroban_sdk::{log, Address, Env, String, Vec};

use crate::events::{self, CampaignCreatedEvent};
use crate::storage_types::{
    Campaign, CampaignError, CampaignId, DataKey, Milestone, MilestoneIndex, PersistentKey,
    FIRST_CAMPAIGN_ID,
};
use crate::utils::{extend_instance, extend_persistent, now};

/// Register a new campaign and its milestones under the next sequential id.
pub fn create_campaign(
    env: &Env,
    creator: Address,
    name: String,
    description: String,
    target_amount: i128,
    deadline: u64,
    milestone_amounts: Vec<i128>,
    milestone_descriptions: Vec<String>,
) -> Result<CampaignId, CampaignError> {
    if deadline <= now(env) {
        return Err(CampaignError::InvalidDeadline);
    }
    if milestone_amounts.len() != milestone_descriptions.len() {
        return Err(CampaignError::MilestoneLengthMismatch);
    }
    if target_amount <= 0 {
        return Err(CampaignError::InvalidAmount);
    }
    if milestone_amounts.iter().any(|amount| amount < 0) {
        return Err(CampaignError::InvalidAmount);
    }

    let campaign_id = next_campaign_id(env);

    for (index, (amount, milestone_description)) in milestone_amounts
        .iter()
        .zip(milestone_descriptions.iter())
        .enumerate()
    {
        let milestone = Milestone {
            amount,
            description: milestone_description,
            approved: false,
            vote_count: 0,
        };
        save_milestone(env, campaign_id, index as MilestoneIndex, &milestone);
    }

    let campaign = Campaign {
        id: campaign_id,
        name: name.clone(),
        description,
        target_amount,
        deadline,
        creator: creator.clone(),
        total_contributions: 0,
        finalized: false,
        milestone_count: milestone_amounts.len(),
        contributor_count: 0,
    };
    save_campaign(env, &campaign);

    let contributors_key = PersistentKey::Contributors(campaign_id);
    env.storage()
        .persistent()
        .set(&contributors_key, &Vec::<Address>::new(env));
    extend_persistent(env, &contributors_key);

    env.storage()
        .instance()
        .set(&DataKey::NextCampaignId, &(campaign_id + 1));
    extend_instance(env);

    log!(env, "campaign created", campaign_id, target_amount, deadline);

    events::emit_campaign_created(
        env,
        CampaignCreatedEvent {
            campaign_id,
            creator,
            name,
            target_amount,
            deadline,
        },
    );

    Ok(campaign_id)
}

fn next_campaign_id(env: &Env) -> CampaignId {
    env.storage()
        .instance()
        .get(&DataKey::NextCampaignId)
        .unwrap_or(FIRST_CAMPAIGN_ID)
}

pub fn campaign_count(env: &Env) -> u64 {
    next_campaign_id(env) - FIRST_CAMPAIGN_ID
}

/// Ids are handed out sequentially and campaigns are never removed, so the
/// full id list is the range below the counter.
pub fn campaign_ids(env: &Env) -> Vec<CampaignId> {
    let mut ids = Vec::new(env);
    for id in FIRST_CAMPAIGN_ID..next_campaign_id(env) {
        ids.push_back(id);
    }
    ids
}

pub fn load_campaign(env: &Env, campaign_id: CampaignId) -> Result<Campaign, CampaignError> {
    env.storage()
        .persistent()
        .get(&PersistentKey::Campaign(campaign_id))
        .ok_or(CampaignError::CampaignNotFound)
}

pub fn save_campaign(env: &Env, campaign: &Campaign) {
    let key = PersistentKey::Campaign(campaign.id);
    env.storage().persistent().set(&key, campaign);
    extend_persistent(env, &key);
}

pub fn load_milestone(
    env: &Env,
    campaign: &Campaign,
    index: MilestoneIndex,
) -> Result<Milestone, CampaignError> {
    if index >= campaign.milestone_count {
        return Err(CampaignError::MilestoneNotFound);
    }
    env.storage()
        .persistent()
        .get(&PersistentKey::Milestone(campaign.id, index))
        .ok_or(CampaignError::MilestoneNotFound)
}

pub fn save_milestone(
    env: &Env,
    campaign_id: CampaignId,
    index: MilestoneIndex,
    milestone: &Milestone,
) {
    let key = PersistentKey::Milestone(campaign_id, index);
    env.storage().persistent().set(&key, milestone);
    extend_persistent(env, &key);
}

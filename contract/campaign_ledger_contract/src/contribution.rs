use soroban_sdk::{log, Address, Env, Vec};

use crate::events::{self, ContributionEvent};
use crate::registry::{load_campaign, save_campaign};
use crate::storage_types::{Campaign, CampaignError, CampaignId, ContributorInfo, PersistentKey};
use crate::utils::{extend_instance, extend_persistent, now, transfer_in};

/// Record a pledge from `contributor` and pull the funds into the contract.
///
/// The target check uses the total before this contribution is added, so a
/// single large pledge may overshoot the target.
pub fn contribute(
    env: &Env,
    campaign_id: CampaignId,
    contributor: Address,
    amount: i128,
) -> Result<(), CampaignError> {
    let mut campaign = load_campaign(env, campaign_id)?;

    if now(env) >= campaign.deadline {
        return Err(CampaignError::DeadlinePassed);
    }
    if campaign.total_contributions >= campaign.target_amount {
        return Err(CampaignError::TargetReached);
    }
    if campaign.finalized {
        return Err(CampaignError::AlreadyFinalized);
    }
    if amount <= 0 {
        return Err(CampaignError::InvalidAmount);
    }

    let previous = balance_of(env, campaign_id, &contributor);
    let balance = previous
        .checked_add(amount)
        .ok_or(CampaignError::ArithmeticOverflow)?;
    campaign.total_contributions = campaign
        .total_contributions
        .checked_add(amount)
        .ok_or(CampaignError::ArithmeticOverflow)?;

    if previous == 0 {
        register_contributor(env, &mut campaign, &contributor);
    }

    let key = PersistentKey::Contribution(campaign_id, contributor.clone());
    env.storage().persistent().set(&key, &balance);
    extend_persistent(env, &key);
    save_campaign(env, &campaign);
    extend_instance(env);

    transfer_in(env, &contributor, amount);

    log!(env, "contribution recorded", campaign_id, amount, campaign.total_contributions);

    events::emit_contribution(
        env,
        ContributionEvent {
            campaign_id,
            contributor,
            amount,
        },
    );

    Ok(())
}

fn register_contributor(env: &Env, campaign: &mut Campaign, contributor: &Address) {
    let key = PersistentKey::Contributors(campaign.id);
    let mut contributors = contributors_of(env, campaign.id);
    contributors.push_back(contributor.clone());
    env.storage().persistent().set(&key, &contributors);
    extend_persistent(env, &key);
    campaign.contributor_count = contributors.len();
}

/// Cumulative amount `contributor` has pledged; zero if they never contributed.
pub fn balance_of(env: &Env, campaign_id: CampaignId, contributor: &Address) -> i128 {
    env.storage()
        .persistent()
        .get(&PersistentKey::Contribution(campaign_id, contributor.clone()))
        .unwrap_or(0)
}

pub fn contributors_of(env: &Env, campaign_id: CampaignId) -> Vec<Address> {
    env.storage()
        .persistent()
        .get(&PersistentKey::Contributors(campaign_id))
        .unwrap_or_else(|| Vec::new(env))
}

pub fn refund_claimed(env: &Env, campaign_id: CampaignId, contributor: &Address) -> bool {
    env.storage()
        .persistent()
        .get(&PersistentKey::RefundClaimed(campaign_id, contributor.clone()))
        .unwrap_or(false)
}

pub fn contributor_info(
    env: &Env,
    campaign_id: CampaignId,
    contributor: &Address,
) -> Result<ContributorInfo, CampaignError> {
    load_campaign(env, campaign_id)?;
    Ok(ContributorInfo {
        balance: balance_of(env, campaign_id, contributor),
        refund_claimed: refund_claimed(env, campaign_id, contributor),
    })
}

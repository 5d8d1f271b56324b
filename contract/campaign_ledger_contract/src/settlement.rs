use soroban_sdk::{log, Address, Env};

use crate::contribution::{balance_of, refund_claimed};
use crate::events::{self, CampaignFinalizedEvent, RefundClaimedEvent};
use crate::registry::{load_campaign, save_campaign};
use crate::storage_types::{CampaignError, CampaignId, PersistentKey};
use crate::utils::{extend_instance, extend_persistent, now, transfer_out};

/// Return `contributor`'s full pledged balance once the deadline has passed
/// without the target being met.
///
/// Eligibility is derived from the totals on every call; the `finalized` flag
/// plays no part in it.
pub fn claim_refund(
    env: &Env,
    campaign_id: CampaignId,
    contributor: Address,
) -> Result<i128, CampaignError> {
    let campaign = load_campaign(env, campaign_id)?;

    if now(env) < campaign.deadline {
        return Err(CampaignError::DeadlineNotReached);
    }
    if campaign.total_contributions >= campaign.target_amount {
        return Err(CampaignError::CampaignSuccessful);
    }
    let amount = balance_of(env, campaign_id, &contributor);
    if amount <= 0 {
        return Err(CampaignError::NotContributor);
    }
    if refund_claimed(env, campaign_id, &contributor) {
        return Err(CampaignError::RefundAlreadyClaimed);
    }

    let key = PersistentKey::RefundClaimed(campaign_id, contributor.clone());
    env.storage().persistent().set(&key, &true);
    extend_persistent(env, &key);
    extend_instance(env);

    // The claimed flag only survives if this transfer succeeds.
    transfer_out(env, &contributor, amount);

    log!(env, "refund issued", campaign_id, amount);

    events::emit_refund_claimed(
        env,
        RefundClaimedEvent {
            campaign_id,
            contributor,
            amount,
        },
    );

    Ok(amount)
}

/// Close the books on a campaign after its deadline and report whether the
/// target was met. Moves no funds.
pub fn finalize_campaign(env: &Env, campaign_id: CampaignId) -> Result<bool, CampaignError> {
    let mut campaign = load_campaign(env, campaign_id)?;

    if now(env) < campaign.deadline {
        return Err(CampaignError::DeadlineNotReached);
    }
    if campaign.finalized {
        return Err(CampaignError::AlreadyFinalized);
    }

    campaign.finalized = true;
    let success = campaign.total_contributions >= campaign.target_amount;
    save_campaign(env, &campaign);
    extend_instance(env);

    log!(env, "campaign finalized", campaign_id, success);

    events::emit_campaign_finalized(
        env,
        CampaignFinalizedEvent {
            campaign_id,
            success,
            total_contributions: campaign.total_contributions,
        },
    );

    Ok(success)
}

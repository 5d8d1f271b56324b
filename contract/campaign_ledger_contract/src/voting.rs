use soroban_sdk::{log, Address, Env};

use crate::contribution::balance_of;
use crate::events::{self, MilestoneApprovedEvent};
use crate::registry::{load_campaign, load_milestone, save_milestone};
use crate::storage_types::{CampaignError, CampaignId, MilestoneIndex, PersistentKey};
use crate::utils::{extend_instance, extend_persistent, now, transfer_out};

/// A milestone passes once its votes are a strict majority of the distinct
/// contributors, using integer division: 4 contributors need 3 votes, 5 need 3.
pub fn threshold_reached(vote_count: u32, contributor_count: u32) -> bool {
    vote_count > contributor_count / 2
}

/// Cast `voter`'s vote for a milestone and release its amount to the creator
/// if this vote crosses the majority threshold.
///
/// Votes keep counting after approval; only the crossing vote releases funds.
pub fn approve_milestone(
    env: &Env,
    campaign_id: CampaignId,
    milestone_index: MilestoneIndex,
    voter: Address,
) -> Result<(), CampaignError> {
    let campaign = load_campaign(env, campaign_id)?;
    let mut milestone = load_milestone(env, &campaign, milestone_index)?;

    if now(env) >= campaign.deadline {
        return Err(CampaignError::DeadlinePassed);
    }
    if balance_of(env, campaign_id, &voter) <= 0 {
        return Err(CampaignError::NotContributor);
    }
    let vote_key = PersistentKey::Vote(campaign_id, milestone_index, voter.clone());
    if env.storage().persistent().has(&vote_key) {
        return Err(CampaignError::AlreadyVoted);
    }

    env.storage().persistent().set(&vote_key, &true);
    extend_persistent(env, &vote_key);
    milestone.vote_count = milestone
        .vote_count
        .checked_add(1)
        .ok_or(CampaignError::ArithmeticOverflow)?;

    log!(env, "vote recorded", campaign_id, milestone_index, milestone.vote_count);

    let releases = !milestone.approved
        && threshold_reached(milestone.vote_count, campaign.contributor_count);
    if releases {
        milestone.approved = true;
    }
    save_milestone(env, campaign_id, milestone_index, &milestone);
    extend_instance(env);

    if releases {
        // A rejected transfer traps here and discards the vote and approval above.
        transfer_out(env, &campaign.creator, milestone.amount);

        log!(env, "milestone released", campaign_id, milestone_index, milestone.amount);

        events::emit_milestone_approved(
            env,
            MilestoneApprovedEvent {
                campaign_id,
                milestone_index,
                amount: milestone.amount,
                creator: campaign.creator,
                vote_count: milestone.vote_count,
            },
        );
    }

    Ok(())
}

pub fn has_voted(
    env: &Env,
    campaign_id: CampaignId,
    milestone_index: MilestoneIndex,
    voter: Address,
) -> bool {
    env.storage()
        .persistent()
        .has(&PersistentKey::Vote(campaign_id, milestone_index, voter))
}

use soroban_sdk::{contractevent, Address, Env, String};

use crate::storage_types::{CampaignId, MilestoneIndex};

#[contractevent(topics = ["campaign_created"])]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CampaignCreatedEvent {
    #[topic]
    pub campaign_id: CampaignId,
    pub creator: Address,
    pub name: String,
    pub target_amount: i128,
    pub deadline: u64,
}

#[contractevent(topics = ["contribution"])]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ContributionEvent {
    #[topic]
    pub campaign_id: CampaignId,
    pub contributor: Address,
    pub amount: i128,
}

#[contractevent(topics = ["milestone_approved"])]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MilestoneApprovedEvent {
    #[topic]
    pub campaign_id: CampaignId,
    pub milestone_index: MilestoneIndex,
    pub amount: i128,
    pub creator: Address,
    pub vote_count: u32,
}

#[contractevent(topics = ["refund_claimed"])]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RefundClaimedEvent {
    #[topic]
    pub campaign_id: CampaignId,
    pub contributor: Address,
    pub amount: i128,
}

#[contractevent(topics = ["campaign_finalized"])]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CampaignFinalizedEvent {
    #[topic]
    pub campaign_id: CampaignId,
    pub success: bool,
    pub total_contributions: i128,
}

pub fn emit_campaign_created(env: &Env, event: CampaignCreatedEvent) {
    event.publish(env);
}

pub fn emit_contribution(env: &Env, event: ContributionEvent) {
    event.publish(env);
}

pub fn emit_milestone_approved(env: &Env, event: MilestoneApprovedEvent) {
    event.publish(env);
}

pub fn emit_refund_claimed(env: &Env, event: RefundClaimedEvent) {
    event.publish(env);
}

pub fn emit_campaign_finalized(env: &Env, event: CampaignFinalizedEvent) {
    event.publish(env);
}

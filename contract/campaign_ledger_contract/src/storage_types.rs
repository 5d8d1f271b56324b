use soroban_sdk::{contracterror, contracttype, Address, String};

// Storage keys for instance data
#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Token,
    NextCampaignId,
}

// Storage keys for persistent data
#[derive(Clone)]
#[contracttype]
pub enum PersistentKey {
    Campaign(CampaignId),
    Milestone(CampaignId, MilestoneIndex),
    Contributors(CampaignId),
    Contribution(CampaignId, Address),
    RefundClaimed(CampaignId, Address),
    Vote(CampaignId, MilestoneIndex, Address), // (CampaignID, Milestone, Voter)
}

pub type CampaignId = u64;
pub type MilestoneIndex = u32;

/// Stored campaign record. Milestones and per-contributor state live under
/// their own keys; `contributor_count` mirrors the length of the
/// `Contributors` list.
#[derive(Clone, Debug, PartialEq)]
#[contracttype]
pub struct Campaign {
    pub id: CampaignId,
    pub name: String,
    pub description: String,
    pub target_amount: i128,
    pub deadline: u64,
    pub creator: Address,
    pub total_contributions: i128,
    pub finalized: bool,
    pub milestone_count: u32,
    pub contributor_count: u32,
}

#[derive(Clone, Debug, PartialEq)]
#[contracttype]
pub struct Milestone {
    pub amount: i128,
    pub description: String,
    pub approved: bool,
    pub vote_count: u32,
}

// Read-only views returned by queries

#[derive(Clone, Debug, PartialEq)]
#[contracttype]
pub struct CampaignSummary {
    pub id: CampaignId,
    pub name: String,
    pub description: String,
    pub target_amount: i128,
    pub deadline: u64,
    pub creator: Address,
    pub total_contributions: i128,
    pub finalized: bool,
}

#[derive(Clone, Debug, PartialEq)]
#[contracttype]
pub struct ContributorInfo {
    pub balance: i128,
    pub refund_claimed: bool,
}

#[derive(Clone, Debug, PartialEq)]
#[contracttype]
pub struct MilestoneStatus {
    pub amount: i128,
    pub description: String,
    pub approved: bool,
    pub vote_count: u32,
}

impl From<Campaign> for CampaignSummary {
    fn from(campaign: Campaign) -> Self {
        CampaignSummary {
            id: campaign.id,
            name: campaign.name,
            description: campaign.description,
            target_amount: campaign.target_amount,
            deadline: campaign.deadline,
            creator: campaign.creator,
            total_contributions: campaign.total_contributions,
            finalized: campaign.finalized,
        }
    }
}

impl From<Milestone> for MilestoneStatus {
    fn from(milestone: Milestone) -> Self {
        MilestoneStatus {
            amount: milestone.amount,
            description: milestone.description,
            approved: milestone.approved,
            vote_count: milestone.vote_count,
        }
    }
}

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum CampaignError {
    CampaignNotFound = 1,
    InvalidDeadline = 2,
    MilestoneLengthMismatch = 3,
    InvalidAmount = 4,
    DeadlinePassed = 5,
    DeadlineNotReached = 6,
    TargetReached = 7,
    CampaignSuccessful = 8,
    AlreadyFinalized = 9,
    MilestoneNotFound = 10,
    NotContributor = 11,
    AlreadyVoted = 12,
    RefundAlreadyClaimed = 13,
    ArithmeticOverflow = 14,
}

// Constants
pub const FIRST_CAMPAIGN_ID: CampaignId = 1;
pub const TTL_INSTANCE: u32 = 17280 * 30; // 30 days
pub const TTL_PERSISTENT: u32 = 17280 * 90; // 90 days
pub const TTL_THRESHOLD: u32 = 17280 * 7; // extend once fewer than 7 days remain

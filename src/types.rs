multiversx_sc::imports!();
multiversx_sc::derive_imports!();

// ============================================================
// Phase — ballot-wide workflow stage
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Eq, Debug)]
pub enum Phase {
    /// Administrator is enrolling voters. Nothing else is legal yet.
    RegisteringVoters,
    /// Registered voters may submit proposals and set their sale price.
    ProposalsOpen,
    /// Proposal set is frozen, voting has not started.
    ProposalsClosed,
    /// Votes (own or bought) are being accepted for the current round.
    VotingOpen,
    /// Voting stopped; the next advance runs the tally.
    VotingClosed,
    /// A unique winner exists. Terminal state.
    ResultsFinal,
}

// ============================================================
// Voter — per-participant ledger record
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct Voter<M: ManagedTypeApi> {
    pub registered: bool,
    /// Completed rounds in which this voter cast (or sold) a vote.
    /// Invariant: never exceeds the ballot's current round; the voter is
    /// eligible this round iff rounds_voted < current round.
    pub rounds_voted: u64,
    /// Proposal chosen in the most recent vote. Only meaningful when
    /// rounds_voted equals the current round.
    pub last_proposal: u64,
    /// Minimum payment to have a vote cast on this voter's behalf.
    /// Zero means not for sale.
    pub min_bribe_price: BigUint<M>,
}

// ============================================================
// Proposal — id is its 0-based position, stable only within a round
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct Proposal<M: ManagedTypeApi> {
    pub description: ManagedBuffer<M>,
    pub vote_count: u64,
}

#![no_std]

multiversx_sc::imports!();

pub mod ballot_proxy;
pub mod types;

use types::{Phase, Proposal, Voter};

// ============================================================
// Contract
//
// A multi-round ballot among administrator-enrolled voters.
// An exact tie among the leading proposals shrinks the ballot
// to the tied proposals and re-opens voting for another round,
// until a unique winner emerges. A voter may also offer her
// vote for sale at a minimum price; a paying participant can
// then cast it on her behalf.
// ============================================================

#[multiversx_sc::contract]
pub trait Ballot {
    // ========================================================
    // Init / Upgrade
    // ========================================================

    #[init]
    fn init(&self) {
        let caller = self.blockchain().get_caller();
        self.admin().set(&caller);
        self.phase().set(Phase::RegisteringVoters);
        self.current_round().set(1u64);
    }

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // ENDPOINT: advancePhase
    // Strictly forward transitions, except the tie rewind:
    // closing out VotingClosed runs the tally, which either
    // finalizes the ballot or sends it back to VotingOpen
    // with the proposal set shrunk to the tied leaders.
    // ========================================================

    #[endpoint(advancePhase)]
    fn advance_phase(&self) {
        self.require_admin();

        let previous = self.phase().get();
        let next = match previous {
            Phase::RegisteringVoters => {
                require!(self.has_registered_voters().get(), "no voters registered yet");
                Phase::ProposalsOpen
            }
            Phase::ProposalsOpen => {
                require!(!self.proposals().is_empty(), "no proposals submitted yet");
                Phase::ProposalsClosed
            }
            Phase::ProposalsClosed => Phase::VotingOpen,
            Phase::VotingOpen => Phase::VotingClosed,
            Phase::VotingClosed => self.close_round(),
            Phase::ResultsFinal => sc_panic!("ballot already finalized"),
        };

        self.phase().set(&next);
        self.phase_changed_event(&previous, &next);
    }

    // ========================================================
    // ENDPOINT: registerVoter
    // Enrollment is administrator-only and idempotent per
    // address: re-registering wipes the prior record, which is
    // harmless because registration closes before round 1.
    // ========================================================

    #[endpoint(registerVoter)]
    fn register_voter(&self, voter_address: ManagedAddress) {
        self.require_admin();
        self.require_phase(Phase::RegisteringVoters);
        require!(!voter_address.is_zero(), "voter address cannot be zero");

        let voter = Voter {
            registered: true,
            rounds_voted: 0u64,
            last_proposal: 0u64,
            min_bribe_price: BigUint::zero(),
        };
        self.voters(&voter_address).set(&voter);
        self.has_registered_voters().set(true);

        self.voter_registered_event(&voter_address);
    }

    // ========================================================
    // ENDPOINT: submitProposal
    // Ids are positions in the proposal sequence, 0-based.
    // They are only stable within a round: a tie rewrite
    // reassigns them.
    // ========================================================

    #[endpoint(submitProposal)]
    fn submit_proposal(&self, description: ManagedBuffer) -> u64 {
        self.require_phase(Phase::ProposalsOpen);
        let caller = self.blockchain().get_caller();
        let _ = self.require_registered(&caller);
        require!(!description.is_empty(), "proposal description cannot be empty");

        let proposal_id = self.proposals().len() as u64;
        let proposal = Proposal {
            description,
            vote_count: 0u64,
        };
        self.proposals().push(&proposal);

        self.proposal_submitted_event(proposal_id, &caller);

        proposal_id
    }

    // ========================================================
    // ENDPOINT: setMinBribePrice
    // Stored verbatim; zero withdraws the offer. Only settable
    // while proposals are open, i.e. before any voting starts.
    // ========================================================

    #[endpoint(setMinBribePrice)]
    fn set_min_bribe_price(&self, amount: BigUint) {
        self.require_phase(Phase::ProposalsOpen);
        let caller = self.blockchain().get_caller();
        let mut voter = self.require_registered(&caller);

        voter.min_bribe_price = amount.clone();
        self.voters(&caller).set(&voter);

        self.sale_price_set_event(&caller, &amount);
    }

    // ========================================================
    // ENDPOINT: castVote
    // ========================================================

    #[endpoint(castVote)]
    fn cast_vote(&self, proposal_id: u64) {
        self.require_phase(Phase::VotingOpen);
        let caller = self.blockchain().get_caller();
        let mut voter = self.require_registered(&caller);

        let round = self.current_round().get();
        require!(voter.rounds_voted < round, "already voted in this round");

        self.record_vote(&caller, &mut voter, proposal_id);
    }

    // ========================================================
    // ENDPOINT: buyVote
    // Casts a vote on behalf of a consenting seller, paying
    // her the attached amount. Preconditions are checked in
    // order: opted in, not yet voted, price met, valid id.
    // All ledger state is written before the payment leaves
    // the contract; any failure reverts the whole call.
    // ========================================================

    #[payable("EGLD")]
    #[endpoint(buyVote)]
    fn buy_vote(&self, seller_address: ManagedAddress, proposal_id: u64) {
        self.require_phase(Phase::VotingOpen);
        let buyer = self.blockchain().get_caller();
        let _ = self.require_registered(&buyer);

        require!(
            !self.voters(&seller_address).is_empty(),
            "seller has not offered their vote for sale"
        );
        let mut seller = self.voters(&seller_address).get();
        require!(
            seller.min_bribe_price > 0u64,
            "seller has not offered their vote for sale"
        );

        let round = self.current_round().get();
        require!(seller.rounds_voted < round, "seller already voted in this round");

        let payment = self.call_value().egld_value().clone_value();
        require!(
            payment >= seller.min_bribe_price,
            "payment below the seller's asking price"
        );

        self.record_vote(&seller_address, &mut seller, proposal_id);

        self.send().direct_egld(&seller_address, &payment);
        self.vote_purchased_event(&seller_address, &buyer, &payment);
    }

    // ========================================================
    // ENDPOINT: queryVote
    // Any registered voter may look up any voter's choice,
    // but only once that voter has actually voted in the
    // current round. Needs a real caller, so this is a
    // transaction endpoint rather than a view.
    // ========================================================

    #[endpoint(queryVote)]
    fn query_vote(&self, voter_address: ManagedAddress) -> u64 {
        self.require_voting_visible();
        let caller = self.blockchain().get_caller();
        let _ = self.require_registered(&caller);

        require!(!self.voters(&voter_address).is_empty(), "voter is not registered");
        let voter = self.voters(&voter_address).get();
        require!(
            voter.rounds_voted == self.current_round().get(),
            "voter has not voted in the current round"
        );

        voter.last_proposal
    }

    // ========================================================
    // ENDPOINT: acceptFunds
    // Plain deposit acceptance so the bribe payment flow can
    // be funded; no state effect.
    // ========================================================

    #[payable("EGLD")]
    #[endpoint(acceptFunds)]
    fn accept_funds(&self) {}

    // ========================================================
    // INTERNAL: record a vote for `voter_address`
    // Shared by castVote and buyVote; eligibility has already
    // been checked by the caller.
    // ========================================================

    fn record_vote(&self, voter_address: &ManagedAddress, voter: &mut Voter<Self::Api>, proposal_id: u64) {
        let index = self.require_valid_proposal(proposal_id);

        let mut proposal = self.proposals().get(index);
        proposal.vote_count += 1;
        self.proposals().set(index, &proposal);

        voter.rounds_voted += 1;
        voter.last_proposal = proposal_id;
        self.voters(voter_address).set(&*voter);

        self.vote_cast_event(voter_address, proposal_id, self.current_round().get());
    }

    // ========================================================
    // INTERNAL: tally
    // Single linear pass over the proposal sequence. A count
    // strictly above the running maximum restarts the leader
    // list; a count equal to it (including the first proposal
    // against 0) extends the list. Ties can therefore only be
    // read off the leader list after the scan completes, never
    // from an early local maximum.
    // ========================================================

    fn close_round(&self) -> Phase {
        let proposal_count = self.proposals().len();

        let mut max_count = 0u64;
        let mut total_votes = 0u64;
        let mut leaders = ManagedVec::<Self::Api, u64>::new();

        for index in 1..=proposal_count {
            let proposal = self.proposals().get(index);
            total_votes += proposal.vote_count;

            if proposal.vote_count > max_count {
                max_count = proposal.vote_count;
                leaders = ManagedVec::new();
                leaders.push((index - 1) as u64);
            } else if proposal.vote_count == max_count {
                leaders.push((index - 1) as u64);
            }
        }

        // Reflects the just-closed round only, not a running total.
        self.total_votes_cast().set(total_votes);

        if leaders.len() == 1 {
            let winner_id = leaders.get(0);
            self.winning_proposal().set(winner_id);
            self.winner_decided().set(true);
            self.winner_declared_event(winner_id, total_votes);
            Phase::ResultsFinal
        } else {
            self.rewrite_proposals_for_tie_break(&leaders, proposal_count);

            let new_round = self.current_round().get() + 1;
            self.current_round().set(new_round);
            self.tie_detected_event(new_round, leaders.len() as u64);

            Phase::VotingOpen
        }
    }

    // ========================================================
    // INTERNAL: tie-break rewrite
    // The proposal sequence is replaced wholesale by the tied
    // leaders, in their original relative order, ids compacted
    // to 0..m-1 and counts reset. Leader ids are ascending, so
    // each slot is read before it can be overwritten.
    // ========================================================

    fn rewrite_proposals_for_tie_break(&self, leaders: &ManagedVec<u64>, proposal_count: usize) {
        let leader_count = leaders.len();

        for new_index in 0..leader_count {
            let old_id = leaders.get(new_index);
            let mut survivor = self.proposals().get(old_id as usize + 1);
            survivor.vote_count = 0;
            self.proposals().set(new_index + 1, &survivor);
        }

        for _ in leader_count..proposal_count {
            let last_index = self.proposals().len();
            self.proposals().swap_remove(last_index);
        }
    }

    // ========================================================
    // INTERNAL: guards
    // ========================================================

    fn require_admin(&self) {
        require!(
            self.blockchain().get_caller() == self.admin().get(),
            "only the administrator may do this"
        );
    }

    fn require_phase(&self, expected: Phase) {
        require!(
            self.phase().get() == expected,
            "operation not allowed in the current phase"
        );
    }

    /// Voting data (proposals, votes) is visible from VotingOpen onward.
    fn require_voting_visible(&self) {
        let phase = self.phase().get();
        require!(
            phase == Phase::VotingOpen
                || phase == Phase::VotingClosed
                || phase == Phase::ResultsFinal,
            "operation not allowed in the current phase"
        );
    }

    fn require_registered(&self, address: &ManagedAddress) -> Voter<Self::Api> {
        require!(!self.voters(address).is_empty(), "not a registered voter");
        let voter = self.voters(address).get();
        require!(voter.registered, "not a registered voter");
        voter
    }

    /// Returns the 1-based storage index for a 0-based proposal id.
    fn require_valid_proposal(&self, proposal_id: u64) -> usize {
        require!(
            (proposal_id as usize) < self.proposals().len(),
            "no such proposal"
        );
        proposal_id as usize + 1
    }

    // ========================================================
    // VIEWS — read-only queries
    // ========================================================

    #[view(getCurrentPhase)]
    fn current_phase(&self) -> Phase {
        self.phase().get()
    }

    #[view(getWinner)]
    fn winner(&self) -> u64 {
        require!(
            self.phase().get() == Phase::ResultsFinal,
            "results are not final yet"
        );
        self.winning_proposal().get()
    }

    #[view(getProposals)]
    fn get_proposals(&self) -> MultiValueEncoded<Proposal<Self::Api>> {
        self.require_voting_visible();
        let mut result = MultiValueEncoded::new();
        for index in 1..=self.proposals().len() {
            result.push(self.proposals().get(index));
        }
        result
    }

    #[view(getCurrentRound)]
    fn get_current_round(&self) -> u64 {
        self.current_round().get()
    }

    #[view(getTotalVotesCast)]
    fn get_total_votes_cast(&self) -> u64 {
        self.total_votes_cast().get()
    }

    #[view(getVoter)]
    fn get_voter(&self, voter_address: ManagedAddress) -> Voter<Self::Api> {
        require!(!self.voters(&voter_address).is_empty(), "voter is not registered");
        self.voters(&voter_address).get()
    }

    #[view(getBallotStats)]
    fn get_ballot_stats(&self) -> MultiValue5<Phase, u64, u64, u64, bool> {
        let phase = self.phase().get();
        let round = self.current_round().get();
        let proposal_count = self.proposals().len() as u64;
        let total_votes = self.total_votes_cast().get();
        let decided = self.winner_decided().get();
        (phase, round, proposal_count, total_votes, decided).into()
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("phaseChanged")]
    fn phase_changed_event(
        &self,
        #[indexed] previous: &Phase,
        #[indexed] next: &Phase,
    );

    #[event("tieDetected")]
    fn tie_detected_event(
        &self,
        #[indexed] new_round: u64,
        #[indexed] tied_count: u64,
    );

    #[event("winnerDeclared")]
    fn winner_declared_event(
        &self,
        #[indexed] proposal_id: u64,
        total_votes: u64,
    );

    #[event("voterRegistered")]
    fn voter_registered_event(&self, #[indexed] voter: &ManagedAddress);

    #[event("proposalSubmitted")]
    fn proposal_submitted_event(
        &self,
        #[indexed] proposal_id: u64,
        #[indexed] proposer: &ManagedAddress,
    );

    #[event("salePriceSet")]
    fn sale_price_set_event(
        &self,
        #[indexed] voter: &ManagedAddress,
        price: &BigUint,
    );

    #[event("voteCast")]
    fn vote_cast_event(
        &self,
        #[indexed] voter: &ManagedAddress,
        #[indexed] proposal_id: u64,
        round: u64,
    );

    #[event("votePurchased")]
    fn vote_purchased_event(
        &self,
        #[indexed] seller: &ManagedAddress,
        #[indexed] buyer: &ManagedAddress,
        amount: &BigUint,
    );

    // ========================================================
    // STORAGE
    // ========================================================

    #[storage_mapper("admin")]
    fn admin(&self) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("phase")]
    fn phase(&self) -> SingleValueMapper<Phase>;

    #[storage_mapper("currentRound")]
    fn current_round(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("totalVotesCast")]
    fn total_votes_cast(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("winningProposal")]
    fn winning_proposal(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("winnerDecided")]
    fn winner_decided(&self) -> SingleValueMapper<bool>;

    #[storage_mapper("hasRegisteredVoters")]
    fn has_registered_voters(&self) -> SingleValueMapper<bool>;

    #[storage_mapper("voters")]
    fn voters(&self, address: &ManagedAddress) -> SingleValueMapper<Voter<Self::Api>>;

    #[storage_mapper("proposals")]
    fn proposals(&self) -> VecMapper<Proposal<Self::Api>>;
}

use multiversx_sc::proxy_imports::*;

use crate::types::{Phase, Proposal, Voter};

pub struct BallotProxy;

impl<Env, From, To, Gas> TxProxyTrait<Env, From, To, Gas> for BallotProxy
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    type TxProxyMethods = BallotProxyMethods<Env, From, To, Gas>;

    fn proxy_methods(self, tx: Tx<Env, From, To, (), Gas, (), ()>) -> Self::TxProxyMethods {
        BallotProxyMethods { wrapped_tx: tx }
    }
}

pub struct BallotProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    wrapped_tx: Tx<Env, From, To, (), Gas, (), ()>,
}

impl<Env, From, Gas> BallotProxyMethods<Env, From, (), Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    Gas: TxGas<Env>,
{
    pub fn init(self) -> TxTypedDeploy<Env, From, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_deploy()
            .original_result()
    }
}

impl<Env, From, To, Gas> BallotProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    pub fn upgrade(self) -> TxTypedUpgrade<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_upgrade()
            .original_result()
    }
}

impl<Env, From, To, Gas> BallotProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    pub fn advance_phase(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("advancePhase")
            .original_result()
    }

    pub fn register_voter<Arg0: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        voter_address: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("registerVoter")
            .argument(&voter_address)
            .original_result()
    }

    pub fn submit_proposal<Arg0: ProxyArg<ManagedBuffer<Env::Api>>>(
        self,
        description: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("submitProposal")
            .argument(&description)
            .original_result()
    }

    pub fn set_min_bribe_price<Arg0: ProxyArg<BigUint<Env::Api>>>(
        self,
        amount: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("setMinBribePrice")
            .argument(&amount)
            .original_result()
    }

    pub fn cast_vote<Arg0: ProxyArg<u64>>(
        self,
        proposal_id: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("castVote")
            .argument(&proposal_id)
            .original_result()
    }

    pub fn buy_vote<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
        Arg1: ProxyArg<u64>,
    >(
        self,
        seller_address: Arg0,
        proposal_id: Arg1,
    ) -> TxTypedCall<Env, From, To, (), Gas, ()> {
        self.wrapped_tx
            .raw_call("buyVote")
            .argument(&seller_address)
            .argument(&proposal_id)
            .original_result()
    }

    pub fn query_vote<Arg0: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        voter_address: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("queryVote")
            .argument(&voter_address)
            .original_result()
    }

    pub fn accept_funds(self) -> TxTypedCall<Env, From, To, (), Gas, ()> {
        self.wrapped_tx
            .raw_call("acceptFunds")
            .original_result()
    }

    pub fn current_phase(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, Phase> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getCurrentPhase")
            .original_result()
    }

    pub fn winner(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getWinner")
            .original_result()
    }

    pub fn get_proposals(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, MultiValueEncoded<Env::Api, Proposal<Env::Api>>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getProposals")
            .original_result()
    }

    pub fn get_current_round(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getCurrentRound")
            .original_result()
    }

    pub fn get_total_votes_cast(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getTotalVotesCast")
            .original_result()
    }

    pub fn get_voter<Arg0: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        voter_address: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, Voter<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getVoter")
            .argument(&voter_address)
            .original_result()
    }

    pub fn get_ballot_stats(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, MultiValue5<Phase, u64, u64, u64, bool>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getBallotStats")
            .original_result()
    }
}

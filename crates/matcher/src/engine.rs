use std::collections::HashSet;
use std::fmt::Debug;
use std::hash::Hash;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use assignment::{solve_with_config, Edge, Pair, SolveOutcome};
use tracing::{debug, info, warn, Level};

use crate::metrics::{metrics_recorder, MatchMetrics};
use crate::types::{
    LeftMatching, MatchConfig, MatchError, NoFeasiblePartner, RoundSummary, StopReason,
};


/// Round-by-round state of one left-exhaustion run.
///
/// Owns the shrinking residual graph and the accumulated matches. Drivers
/// call [`begin_round`](Self::begin_round), solve the graph it hands out,
/// and feed the outcome back through [`absorb`](Self::absorb) until
/// `begin_round` returns `None`.
pub(crate) struct LeftExhaustion<L, R> {
    current: Arc<Vec<Edge<L, R>>>,
    left_order: Vec<L>,
    matched_left: HashSet<L>,
    consumed_right: HashSet<R>,
    previous_unmatched: Option<HashSet<L>>,
    reuse_rights: bool,
    matches: Vec<Pair<L, R>>,
    rounds: Vec<RoundSummary>,
    stop: Option<StopReason>,
}

impl<L, R> LeftExhaustion<L, R>
where
    L: Hash + Eq + Clone + Debug,
    R: Hash + Eq + Clone,
{
    pub(crate) fn new(edges: Vec<Edge<L, R>>, reuse_rights: bool) -> Self {
        let mut seen = HashSet::new();
        let left_order = edges
            .iter()
            .filter(|e| seen.insert(e.left.clone()))
            .map(|e| e.left.clone())
            .collect();

        Self {
            current: Arc::new(edges),
            left_order,
            matched_left: HashSet::new(),
            consumed_right: HashSet::new(),
            previous_unmatched: None,
            reuse_rights,
            matches: Vec::new(),
            rounds: Vec::new(),
            stop: None,
        }
    }

    /// Residual graph for the next round, or `None` once the run has stopped.
    ///
    /// Cancellation and the round limit are only honoured here, between
    /// rounds; a round that has started always runs to completion.
    pub(crate) fn begin_round(
        &mut self,
        max_rounds: Option<usize>,
        cancelled: bool,
    ) -> Option<Arc<Vec<Edge<L, R>>>> {
        if self.stop.is_some() {
            return None;
        }
        if cancelled {
            self.stop = Some(StopReason::Cancelled);
            return None;
        }
        if max_rounds.is_some_and(|limit| self.rounds.len() >= limit) {
            self.stop = Some(StopReason::RoundLimit);
            return None;
        }
        Some(Arc::clone(&self.current))
    }

    /// Fold one solver outcome into the run and compute the next residual
    /// graph.
    pub(crate) fn absorb(&mut self, outcome: SolveOutcome<L, R>) {
        let summary = RoundSummary {
            round: self.rounds.len() + 1,
            edges: self.current.len(),
            matched: outcome.matches.len(),
            unmatched_left: outcome.unmatched_left.len(),
            cost: outcome.total_cost(),
        };
        self.rounds.push(summary);

        for pair in &outcome.matches {
            self.matched_left.insert(pair.left.clone());
            self.consumed_right.insert(pair.right.clone());
        }
        self.matches.extend(outcome.matches);

        if outcome.unmatched_left.is_empty() {
            self.stop = Some(StopReason::Exhausted);
            return;
        }

        let unmatched: HashSet<L> = outcome.unmatched_left.into_iter().collect();
        if self.previous_unmatched.as_ref() == Some(&unmatched) {
            self.stop = Some(StopReason::NoProgress);
            return;
        }

        let consumed = &self.consumed_right;
        let reuse = self.reuse_rights;
        let residual: Vec<Edge<L, R>> = self
            .current
            .iter()
            .filter(|e| unmatched.contains(&e.left) && (reuse || !consumed.contains(&e.right)))
            .cloned()
            .collect();

        if residual.is_empty() {
            self.stop = Some(StopReason::NoRemainingEdges);
        }
        self.current = Arc::new(residual);
        self.previous_unmatched = Some(unmatched);
    }

    pub(crate) fn last_round(&self) -> Option<&RoundSummary> {
        self.rounds.last()
    }

    pub(crate) fn finish(self) -> LeftMatching<L, R> {
        let stop = self.stop.unwrap_or(StopReason::Cancelled);
        let rounds = self.rounds.len();
        let matched_left = self.matched_left;
        let remaining = self
            .left_order
            .into_iter()
            .filter(|l| !matched_left.contains(l));

        let (unmatched, pending) = if stop.is_final() {
            let stuck: Vec<NoFeasiblePartner<L>> = remaining
                .map(|left| NoFeasiblePartner { left, rounds })
                .collect();
            (stuck, Vec::new())
        } else {
            (Vec::new(), remaining.collect())
        };

        LeftMatching {
            matches: self.matches,
            unmatched,
            pending,
            rounds: self.rounds,
            stop,
        }
    }
}

/// Per-round logging and metrics shared by the sync and async drivers.
pub(crate) fn observe_round<L, R>(
    state: &LeftExhaustion<L, R>,
    latency: Duration,
    recorder: Option<&dyn MatchMetrics>,
) where
    L: Hash + Eq + Clone + Debug,
    R: Hash + Eq + Clone,
{
    let Some(round) = state.last_round() else {
        return;
    };
    debug!(
        round = round.round,
        edges = round.edges,
        matched = round.matched,
        unmatched_left = round.unmatched_left,
        cost = round.cost,
        elapsed_micros = latency.as_micros(),
        "round_complete"
    );
    if let Some(recorder) = recorder {
        recorder.record_round(round.round, round.edges, round.matched, latency);
    }
}

pub(crate) fn report_run<L: Debug, R>(
    result: &LeftMatching<L, R>,
    latency: Duration,
    recorder: Option<&dyn MatchMetrics>,
) {
    for stuck in &result.unmatched {
        debug!(left = ?stuck.left, "no_feasible_partner");
    }
    info!(
        stop = ?result.stop,
        rounds = result.rounds.len(),
        matched = result.matches.len(),
        unmatched = result.unmatched.len(),
        pending = result.pending.len(),
        elapsed_micros = latency.as_micros(),
        "match_all_left_complete"
    );
    if let Some(recorder) = recorder {
        recorder.record_run(
            result.stop,
            result.rounds.len(),
            result.matches.len(),
            result.unmatched.len() + result.pending.len(),
            latency,
        );
    }
}

/// Iterative matcher for unbalanced bipartite graphs.
///
/// Re-solves the residual problem restricted to still-unmatched left ids
/// until every left id is matched or provably stuck. Holds only its
/// configuration, so one instance can serve any number of threads.
#[derive(Debug, Clone, Default)]
pub struct Matcher {
    cfg: MatchConfig,
}

impl Matcher {
    pub fn new(cfg: MatchConfig) -> Self {
        Self { cfg }
    }

    pub fn config(&self) -> &MatchConfig {
        &self.cfg
    }

    /// Run rounds until every left id with an edge is matched or stuck.
    pub fn match_all_left<L, R>(
        &self,
        edges: &[Edge<L, R>],
    ) -> Result<LeftMatching<L, R>, MatchError>
    where
        L: Hash + Eq + Clone + Debug,
        R: Hash + Eq + Clone,
    {
        self.run(edges, None)
    }

    /// Like [`match_all_left`](Self::match_all_left), but stops before the
    /// next round once `cancel` is set. Unresolved left ids are then
    /// reported as pending.
    pub fn match_all_left_cancellable<L, R>(
        &self,
        edges: &[Edge<L, R>],
        cancel: &AtomicBool,
    ) -> Result<LeftMatching<L, R>, MatchError>
    where
        L: Hash + Eq + Clone + Debug,
        R: Hash + Eq + Clone,
    {
        self.run(edges, Some(cancel))
    }

    fn run<L, R>(
        &self,
        edges: &[Edge<L, R>],
        cancel: Option<&AtomicBool>,
    ) -> Result<LeftMatching<L, R>, MatchError>
    where
        L: Hash + Eq + Clone + Debug,
        R: Hash + Eq + Clone,
    {
        self.cfg.validate()?;

        let start = Instant::now();
        let span = tracing::span!(Level::INFO, "matcher.match_all_left", edges = edges.len());
        let _guard = span.enter();

        let recorder = metrics_recorder();
        let mut state = LeftExhaustion::new(edges.to_vec(), self.cfg.reuse_rights_across_rounds);

        loop {
            let cancelled = cancel.is_some_and(|flag| flag.load(Ordering::Acquire));
            let Some(graph) = state.begin_round(self.cfg.max_rounds, cancelled) else {
                break;
            };

            let round_start = Instant::now();
            let outcome = match solve_with_config(graph.as_slice(), &self.cfg.solver) {
                Ok(outcome) => outcome,
                Err(err) => {
                    warn!(
                        error = %err,
                        elapsed_micros = start.elapsed().as_micros(),
                        "match_all_left_failure"
                    );
                    return Err(err.into());
                }
            };
            state.absorb(outcome);
            observe_round(&state, round_start.elapsed(), recorder.as_deref());
        }

        let result = state.finish();
        report_run(&result, start.elapsed(), recorder.as_deref());
        Ok(result)
    }
}

/// Run [`Matcher::match_all_left`] with [`MatchConfig::default`].
pub fn match_all_left<L, R>(edges: &[Edge<L, R>]) -> Result<LeftMatching<L, R>, MatchError>
where
    L: Hash + Eq + Clone + Debug,
    R: Hash + Eq + Clone,
{
    Matcher::default().match_all_left(edges)
}

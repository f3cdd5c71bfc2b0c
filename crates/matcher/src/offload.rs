//! Async driver that keeps solver rounds off the async executor.
//!
//! Each round is CPU-bound, so it runs on tokio's blocking pool via
//! [`tokio::task::spawn_blocking`]. The cancellation flag is checked between
//! rounds only.

use std::fmt::Debug;
use std::hash::Hash;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

use assignment::{solve_with_config, Edge};
use tracing::{warn, Instrument, Level};

use crate::engine::{observe_round, report_run, LeftExhaustion, Matcher};
use crate::metrics::metrics_recorder;
use crate::types::{LeftMatching, MatchError};

impl Matcher {
    /// Async counterpart of [`Matcher::match_all_left_cancellable`].
    ///
    /// Must be called from within a tokio runtime.
    pub async fn match_all_left_async<L, R>(
        &self,
        edges: Vec<Edge<L, R>>,
        cancel: Arc<AtomicBool>,
    ) -> Result<LeftMatching<L, R>, MatchError>
    where
        L: Hash + Eq + Clone + Debug + Send + Sync + 'static,
        R: Hash + Eq + Clone + Send + Sync + 'static,
    {
        self.config().validate()?;

        let span = tracing::span!(
            Level::INFO,
            "matcher.match_all_left_async",
            edges = edges.len()
        );
        let cfg = self.config().clone();

        async move {
            let start = Instant::now();
            let recorder = metrics_recorder();
            let mut state = LeftExhaustion::new(edges, cfg.reuse_rights_across_rounds);

            loop {
                let cancelled = cancel.load(Ordering::Acquire);
                let Some(graph) = state.begin_round(cfg.max_rounds, cancelled) else {
                    break;
                };

                let solver_cfg = cfg.solver.clone();
                let round_start = Instant::now();
                let joined = tokio::task::spawn_blocking(move || {
                    solve_with_config(graph.as_slice(), &solver_cfg)
                })
                .await;

                let outcome = match joined {
                    Ok(Ok(outcome)) => outcome,
                    Ok(Err(err)) => {
                        warn!(
                            error = %err,
                            elapsed_micros = start.elapsed().as_micros(),
                            "match_all_left_failure"
                        );
                        return Err(MatchError::from(err));
                    }
                    Err(join_err) => {
                        warn!(error = %join_err, "solver_worker_failed");
                        return Err(MatchError::Worker(join_err.to_string()));
                    }
                };
                state.absorb(outcome);
                observe_round(&state, round_start.elapsed(), recorder.as_deref());
            }

            let result = state.finish();
            report_run(&result, start.elapsed(), recorder.as_deref());
            Ok(result)
        }
        .instrument(span)
        .await
    }
}

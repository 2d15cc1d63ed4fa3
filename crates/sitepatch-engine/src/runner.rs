//! The polling operation runner.
//!
//! A polling state machine with bounded grace retries, not an event-driven
//! observer: page mutations can come from many uncoordinated sources, so
//! re-querying at a fixed interval is more robust than wiring mutation
//! observers for arbitrary selectors.
//!
//! Rounds run strictly one at a time: the loop awaits the sleep between
//! rounds, so round N's actions are fully applied before round N+1 resolves
//! anything.

use crate::operation::{Operation, OperationAndFailure, OperationKind, Plan};
use crate::page::{Page, PageError};
use crate::resolution::{Resolution, resolve_dependencies};
use sitepatch_common::protocol::{DependencyFailure, OperationFailure};
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Error)]
pub enum RunnerError {
    #[error("Page error: {0}")]
    Page(#[from] PageError),
}

enum Attempt {
    Succeeded,
    /// Dependencies unresolved; retryable while budget remains.
    Blocked(Vec<DependencyFailure>),
    /// The action itself reported an error. Permanent.
    Failed(String),
}

async fn attempt<P: Page + ?Sized>(
    operation: &mut Operation,
    page: &mut P,
) -> Result<Attempt, PageError> {
    match &mut operation.kind {
        OperationKind::Independent { action } => Ok(match action() {
            Ok(()) => Attempt::Succeeded,
            Err(message) => Attempt::Failed(message),
        }),
        OperationKind::WithDependencies {
            dependencies,
            action,
        } => match resolve_dependencies(dependencies, page).await? {
            Resolution::Resolved(resolved) => Ok(match action(&resolved) {
                Ok(()) => Attempt::Succeeded,
                Err(message) => Attempt::Failed(message),
            }),
            Resolution::Failed(failures) => Ok(Attempt::Blocked(failures)),
        },
    }
}

/// Run a plan to completion.
///
/// Operations whose `condition` is false at the start are dropped for the
/// whole run: never attempted, never reported. The rest are attempted in
/// caller order each round, so an earlier operation's action can satisfy a
/// later operation's dependencies within the same round.
///
/// The countdown starts the first round `try_until` evaluates true: that
/// round plus `extra_tries` more are allowed, and on the final one any
/// unresolved dependencies become permanent failures. Deferred operations
/// consume countdown rounds while they wait; on the final round the defer
/// gate is lifted so they get exactly one attempt instead of starving the
/// run forever.
///
/// `handle_failures` is called exactly once, after the loop has nothing left
/// to retry, and only if at least one operation failed permanently.
pub async fn run<P: Page + ?Sized>(plan: Plan, page: &mut P) -> Result<(), RunnerError> {
    let Plan {
        operations,
        interval,
        try_until,
        extra_tries,
        handle_failures,
    } = plan;

    let state = page.ready_state().await?;
    let mut pending: Vec<Operation> = operations
        .into_iter()
        .filter(|o| o.condition.evaluate(state))
        .collect();

    let mut failures: Vec<OperationAndFailure> = Vec::new();
    let mut tries_left: Option<u32> = None;
    let mut round: u32 = 0;

    while !pending.is_empty() {
        round += 1;
        let state = page.ready_state().await?;
        if tries_left.is_none() && try_until.evaluate(state) {
            tries_left = Some(extra_tries);
        }
        let last_try = tries_left == Some(0);
        debug!(
            "round {}: {} operations pending, state {:?}, tries left {:?}",
            round,
            pending.len(),
            state,
            tries_left,
        );

        // Decide which operations to run now.
        let mut to_run: Vec<Operation> = Vec::new();
        let mut remaining: Vec<Operation> = Vec::new();
        for operation in pending {
            let ready_now = last_try
                || operation
                    .defer_until
                    .as_ref()
                    .is_none_or(|c| c.evaluate(state));
            if ready_now {
                to_run.push(operation);
            } else {
                remaining.push(operation);
            }
        }

        // Run them, in caller order, and collect failures.
        for mut operation in to_run {
            match attempt(&mut operation, page).await? {
                Attempt::Succeeded => {}
                Attempt::Blocked(dependencies) => {
                    if last_try {
                        failures.push(OperationAndFailure {
                            operation,
                            failure: OperationFailure::Dependencies { dependencies },
                        });
                    } else {
                        remaining.push(operation);
                    }
                }
                Attempt::Failed(message) => {
                    failures.push(OperationAndFailure {
                        operation,
                        failure: OperationFailure::Internal { message },
                    });
                }
            }
        }

        pending = remaining;
        if !pending.is_empty() {
            if let Some(n) = tries_left {
                tries_left = Some(n.saturating_sub(1));
            }
            tokio::time::sleep(interval).await;
        }
    }

    if !failures.is_empty() {
        warn!("{} operations failed permanently", failures.len());
        handle_failures(failures);
    }
    Ok(())
}

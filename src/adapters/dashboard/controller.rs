use tokio::task::JoinSet;
use tracing::instrument;

use crate::app_error::AppError;
use crate::application::use_cases::waitlist::WaitlistUseCases;

use super::state::{Command, DashboardState, Effect};

/// Runs the fetches a [`DashboardState`] asks for and feeds the responses back.
#[derive(Clone)]
pub struct DashboardController {
    waitlist: WaitlistUseCases,
}

impl DashboardController {
    pub fn new(waitlist: WaitlistUseCases) -> Self {
        Self { waitlist }
    }

    /// Dispatches `command` and drives every resulting fetch to completion.
    pub async fn handle(&self, state: &mut DashboardState, command: Command) {
        let effects = state.dispatch(command);
        self.drive(state, effects).await;
    }

    /// Runs `effects` concurrently. Responses are dispatched in completion order; the state
    /// machine discards any that a newer fetch has superseded.
    #[instrument(skip(self, state))]
    pub async fn drive(&self, state: &mut DashboardState, effects: Vec<Effect>) {
        let mut in_flight = JoinSet::new();
        for effect in effects {
            self.spawn(&mut in_flight, effect);
        }

        while let Some(joined) = in_flight.join_next().await {
            match joined {
                Ok(command) => {
                    for effect in state.dispatch(command) {
                        self.spawn(&mut in_flight, effect);
                    }
                }
                Err(err) => {
                    tracing::error!(error = %err, "Dashboard fetch task failed");
                }
            }
        }
    }

    /// Runs one effect and returns the command carrying its response.
    pub async fn run(&self, effect: Effect) -> Command {
        run_effect(self.waitlist.clone(), effect).await
    }

    /// A fetch that panics still answers, as a failed response for its own sequence number.
    fn spawn(&self, in_flight: &mut JoinSet<Command>, effect: Effect) {
        let waitlist = self.waitlist.clone();
        in_flight.spawn(async move {
            match tokio::spawn(run_effect(waitlist, effect)).await {
                Ok(command) => command,
                Err(err) => {
                    tracing::error!(error = %err, ?effect, "Dashboard fetch panicked");
                    failed_response(effect)
                }
            }
        });
    }
}

fn failed_response(effect: Effect) -> Command {
    let error = || AppError::Unknown("Fetch did not complete".into());
    match effect {
        Effect::FetchList { seq, .. } => Command::ListLoaded {
            seq,
            result: Err(error()),
        },
        Effect::FetchCount { seq } => Command::CountLoaded {
            seq,
            result: Err(error()),
        },
    }
}

async fn run_effect(waitlist: WaitlistUseCases, effect: Effect) -> Command {
    match effect {
        Effect::FetchList { seq, request } => Command::ListLoaded {
            seq,
            result: waitlist.list(request).await,
        },
        Effect::FetchCount { seq } => Command::CountLoaded {
            seq,
            result: waitlist.count().await,
        },
    }
}

//! The randomized trial harness.
//!
//! Trials are embarrassingly parallel: the requested count is split
//! across a worker pool, each worker shuffles its own decks with its
//! own seeded generator and keeps private partial sums, and one merge
//! at the end produces the aggregate. A fixed deck instead replays a
//! single deterministic trial for what-if analysis.

/// Builder and run errors.
mod errors;
pub use self::errors::{SimulationBuilderError, SimulationRunError};

/// Module with the payout seam and the default ante/blind/play model.
mod payout;
pub use self::payout::{AnteBlindPayout, BlindPayTable, PayoutModel, Showdown};

/// Module with the decision policy seam and the reference strategy.
mod policy;
pub use self::policy::{
    BasicStrategy, BetSize, DecisionPoint, DecisionPolicy, FoldingPolicy, MaxBetPolicy,
    StrategyThresholds, TableView,
};

/// Shared progress counter.
mod progress;
pub use self::progress::ProgressCounter;

/// Profit aggregation and the final report.
mod stats;
pub(crate) use self::stats::TrialAccumulator;
pub use self::stats::{DealSample, SimulationReport};

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc;
use std::thread;

use rand::SeedableRng;
use rand::rngs::SmallRng;
use rayon::prelude::*;
use tracing::event;

use crate::core::{Card, Deck};
use crate::eval::RankTable;

/// Cards consumed by one deal: five community, two player, two dealer,
/// in that order off the top of the deck.
const DEAL_SIZE: usize = 9;

/// # SimulationBuilder
///
/// Configures a [`Simulation`]. A rank table and a decision policy are
/// required; the payout model defaults to [`AnteBlindPayout`], the
/// worker count to the available hardware parallelism, and the seed to
/// a random one.
///
/// ## Examples
///
/// ```no_run
/// use std::sync::Arc;
/// use uth_sim::eval::RankTable;
/// use uth_sim::sim::{BasicStrategy, SimulationBuilder};
///
/// let table = Arc::new(RankTable::load("HandRanks.dat")?);
/// let sim = SimulationBuilder::default()
///     .table(table.clone())
///     .policy(Arc::new(BasicStrategy::new(table)))
///     .trials(1_000_000)
///     .seed(42)
///     .build()?;
/// let report = sim.run();
/// println!("edge {:+.4} ± {:.4}", report.edge, report.std_dev);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Default)]
pub struct SimulationBuilder {
    table: Option<Arc<RankTable>>,
    policy: Option<Arc<dyn DecisionPolicy>>,
    payout: Option<Arc<dyn PayoutModel>>,
    trials: u64,
    workers: Option<usize>,
    seed: Option<u64>,
    fixed_deck: Option<Deck>,
}

impl SimulationBuilder {
    /// Set the shared rank table all evaluations read.
    pub fn table(mut self, table: Arc<RankTable>) -> Self {
        self.table = Some(table);
        self
    }

    /// Set the betting policy consulted at each decision point.
    pub fn policy(mut self, policy: Arc<dyn DecisionPolicy>) -> Self {
        self.policy = Some(policy);
        self
    }

    /// Override the default ante/blind/play payout model.
    pub fn payout(mut self, payout: Arc<dyn PayoutModel>) -> Self {
        self.payout = Some(payout);
        self
    }

    /// Number of randomized trials to run.
    pub fn trials(mut self, trials: u64) -> Self {
        self.trials = trials;
        self
    }

    /// Worker thread count. Defaults to the hardware parallelism.
    pub fn workers(mut self, workers: usize) -> Self {
        self.workers = Some(workers);
        self
    }

    /// Seed for the per-worker generators, for reproducible runs.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Replay one externally supplied deal instead of shuffling. The
    /// trial count is forced to one.
    pub fn fixed_deck(mut self, deck: Deck) -> Self {
        self.fixed_deck = Some(deck);
        self
    }

    pub fn build(self) -> Result<Simulation, SimulationBuilderError> {
        let table = self.table.ok_or(SimulationBuilderError::NeedTable)?;
        let policy = self.policy.ok_or(SimulationBuilderError::NeedPolicy)?;
        if let Some(deck) = &self.fixed_deck {
            if deck.len() < DEAL_SIZE {
                return Err(SimulationBuilderError::ShortFixedDeck(deck.len()));
            }
        }
        let trials = if self.fixed_deck.is_some() {
            1
        } else {
            self.trials
        };
        if trials == 0 {
            return Err(SimulationBuilderError::NoTrials);
        }
        Ok(Simulation {
            table,
            policy,
            payout: self
                .payout
                .unwrap_or_else(|| Arc::new(AnteBlindPayout::default())),
            trials,
            workers: self.workers.unwrap_or_else(num_cpus::get).max(1),
            seed: self.seed,
            fixed_deck: self.fixed_deck,
        })
    }
}

/// A configured simulation, ready to run synchronously or to be
/// spawned with a progress/cancellation handle.
pub struct Simulation {
    table: Arc<RankTable>,
    policy: Arc<dyn DecisionPolicy>,
    payout: Arc<dyn PayoutModel>,
    trials: u64,
    workers: usize,
    seed: Option<u64>,
    fixed_deck: Option<Deck>,
}

impl Simulation {
    pub fn trials(&self) -> u64 {
        self.trials
    }

    /// Deal, decide, and score a single trial.
    fn run_trial(&self, deck: &Deck) -> (f64, DealSample) {
        let cards = deck.cards();
        let community = [cards[0], cards[1], cards[2], cards[3], cards[4]];
        let hole = [cards[5], cards[6]];
        let dealer = [cards[7], cards[8]];

        let mut bet = self.policy.decide(&TableView {
            point: DecisionPoint::PreFlop,
            hole,
            board: &[],
        });
        if bet.is_fold() {
            bet = self.policy.decide(&TableView {
                point: DecisionPoint::PostFlop,
                hole,
                board: &community[..3],
            });
        }
        if bet.is_fold() {
            bet = self.policy.decide(&TableView {
                point: DecisionPoint::River,
                hole,
                board: &community,
            });
        }

        let player = self.table.walk(&[
            hole[0],
            hole[1],
            community[0],
            community[1],
            community[2],
            community[3],
            community[4],
        ]);
        let dealer_rank = self.table.walk(&[
            dealer[0],
            dealer[1],
            community[0],
            community[1],
            community[2],
            community[3],
            community[4],
        ]);

        let profit = self.payout.score(&Showdown {
            player,
            dealer: dealer_rank,
            play_bet: bet,
        });
        (
            profit,
            DealSample {
                community,
                player: hole,
                dealer,
            },
        )
    }

    fn run_with(&self, cancel: &AtomicBool, progress: &ProgressCounter) -> SimulationReport {
        if let Some(deck) = &self.fixed_deck {
            let (profit, sample) = self.run_trial(deck);
            let mut acc = TrialAccumulator::default();
            acc.record(profit);
            progress.tick();
            return SimulationReport::from_accumulator(acc, 1, Some(sample));
        }

        event!(
            tracing::Level::INFO,
            trials = self.trials,
            workers = self.workers,
            "starting simulation"
        );

        let base_seed = self.seed.unwrap_or_else(rand::random);
        let shares = partition(self.trials, self.workers);

        let partials: Vec<(TrialAccumulator, Option<DealSample>)> = shares
            .into_par_iter()
            .enumerate()
            .map(|(worker, share)| {
                // One generator per worker; a shared engine would need
                // locking and would break uniformity without it.
                let mut rng = SmallRng::seed_from_u64(base_seed.wrapping_add(worker as u64));
                let mut acc = TrialAccumulator::default();
                let mut sample = None;
                for _ in 0..share {
                    if cancel.load(Ordering::Relaxed) {
                        break;
                    }
                    let deck = Deck::shuffled(&mut rng);
                    let (profit, deal) = self.run_trial(&deck);
                    acc.record(profit);
                    sample = Some(deal);
                    progress.tick();
                }
                (acc, sample)
            })
            .collect();

        let mut acc = TrialAccumulator::default();
        let mut sample = None;
        for (partial, s) in partials {
            acc = acc.merge(partial);
            if s.is_some() {
                sample = s;
            }
        }

        event!(
            tracing::Level::INFO,
            completed = acc.count(),
            requested = self.trials,
            "simulation finished"
        );

        SimulationReport::from_accumulator(acc, self.trials, sample)
    }

    /// Run to completion on the calling thread.
    pub fn run(&self) -> SimulationReport {
        let progress = ProgressCounter::new(self.trials);
        self.run_with(&AtomicBool::new(false), &progress)
    }

    /// Run on a background thread, returning immediately with a handle
    /// for progress polling, cooperative cancellation, and completion.
    pub fn spawn(self) -> SimulationHandle {
        let progress = Arc::new(ProgressCounter::new(self.trials));
        let cancel = Arc::new(AtomicBool::new(false));
        let (tx, rx) = mpsc::channel();

        let worker_progress = Arc::clone(&progress);
        let worker_cancel = Arc::clone(&cancel);
        thread::spawn(move || {
            let report = self.run_with(&worker_cancel, &worker_progress);
            // The receiver may have been dropped; nothing to do then.
            let _ = tx.send(report);
        });

        SimulationHandle {
            progress,
            cancel,
            rx,
        }
    }
}

/// Split trials across workers, remainder to the first few.
fn partition(total: u64, workers: usize) -> Vec<u64> {
    let workers = workers.max(1) as u64;
    let base = total / workers;
    let extra = total % workers;
    (0..workers).map(|w| base + u64::from(w < extra)).collect()
}

/// Handle to a spawned simulation.
pub struct SimulationHandle {
    progress: Arc<ProgressCounter>,
    cancel: Arc<AtomicBool>,
    rx: mpsc::Receiver<SimulationReport>,
}

impl SimulationHandle {
    /// (trials completed so far, trials requested). Safe to poll while
    /// trials are in flight; purely observational.
    pub fn progress(&self) -> (u64, u64) {
        self.progress.snapshot()
    }

    /// Stop dispatching new trials. Trials already past their policy
    /// decision and scoring are kept; the report comes back tagged
    /// partial.
    pub fn cancel(&self) {
        self.cancel.store(true, Ordering::Relaxed);
    }

    /// Block until the report arrives.
    pub fn wait(self) -> Result<SimulationReport, SimulationRunError> {
        self.rx.recv().map_err(|_| SimulationRunError::Disconnected)
    }

    /// Non-blocking check for a finished report.
    pub fn try_wait(&self) -> Option<SimulationReport> {
        self.rx.try_recv().ok()
    }
}

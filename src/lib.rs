//! A library for evaluating and simulating Ultimate-style casino
//! hold'em against a dealer. This includes the integer card codec, the
//! precomputed hand rank table and constant-time 5/6/7 card evaluation,
//! exhaustive board enumeration for exact win/tie/lose equity, outs
//! counting, and a parallel Monte Carlo harness that applies a betting
//! policy at fixed decision points and aggregates profit, edge,
//! variance, and standard deviation.
//!
//! The rank table is a ~130 MB external binary resource loaded once
//! (see [`eval::RankTable`]) and shared read-only by everything else;
//! all other state is per call or per trial.
//!
//! # Examples
//!
//! Pure combinatorics need no table resource:
//!
//! ```
//! use uth_sim::core::{Card, CardSet, CombinationIter, live_cards};
//!
//! let dead: CardSet = ["As", "Ks"]
//!     .iter()
//!     .map(|s| s.parse::<Card>().unwrap())
//!     .collect();
//! // Two card holdings from the remaining fifty cards.
//! assert_eq!(CombinationIter::new(live_cards(dead), 2).count(), 1_225);
//! ```
//!
//! Running a simulation requires the rank table resource on disk:
//!
//! ```no_run
//! use std::sync::Arc;
//! use uth_sim::eval::RankTable;
//! use uth_sim::sim::{BasicStrategy, SimulationBuilder};
//!
//! let table = Arc::new(RankTable::load("HandRanks.dat")?);
//! let handle = SimulationBuilder::default()
//!     .table(table.clone())
//!     .policy(Arc::new(BasicStrategy::new(table)))
//!     .trials(10_000_000)
//!     .build()?
//!     .spawn();
//!
//! let (done, total) = handle.progress();
//! println!("{done}/{total}");
//! let report = handle.wait()?;
//! println!("edge {:+.4}", report.edge);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

/// Cards, decks, card sets, and combination enumeration.
pub mod core;

/// The hand rank table and packed rank values.
pub mod eval;

/// Exact showdown equity and outs counting.
pub mod equity;

/// The randomized trial harness, betting policies, and payouts.
pub mod sim;

#[cfg(test)]
pub(crate) mod test_util;

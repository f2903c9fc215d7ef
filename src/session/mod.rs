pub mod accumulator;

pub mod stats;

pub mod sync;

pub mod worker;

pub use accumulator::SessionAccumulator;
pub use stats::{
    PointValues,
    ReviewGrade,
    SessionStats,
};
pub use sync::{
    PushMode,
    StatsRemote,
    SyncEngine,
    SyncOutcome,
};

#[cfg(test)]
mod accumulator_tests;

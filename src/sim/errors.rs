use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum SimulationBuilderError {
    #[error("Builder needs a rank table")]
    NeedTable,

    #[error("Builder needs a decision policy")]
    NeedPolicy,

    #[error("Trial count must be at least one")]
    NoTrials,

    #[error("Fixed deck needs at least the 9 dealt cards, got {0}")]
    ShortFixedDeck(usize),
}

#[derive(Error, Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum SimulationRunError {
    #[error("Simulation worker disconnected before reporting")]
    Disconnected,
}

use ca_core::CaError;
use ca_grid::GridError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(#[from] CaError),

    #[error("seed coordinate {0} lies outside the grid")]
    SeedOutOfBounds(ca_core::Coord),

    #[error("grid state error: {0}")]
    Grid(#[from] GridError),
}

pub type SimResult<T> = Result<T, SimError>;

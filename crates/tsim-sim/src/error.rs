use thiserror::Error;
use tsim_core::{NodeId, VehicleId};
use tsim_network::NetworkError;
use tsim_vehicle::VehicleError;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("demand row for vehicle {0} has origin == destination")]
    OriginEqualsDestination(VehicleId),

    #[error("duplicate vehicle id {0} in demand")]
    DuplicateVehicleId(VehicleId),

    #[error("demand references unknown node {0:?}")]
    UnknownNode(NodeId),

    #[error(transparent)]
    Vehicle(#[from] VehicleError),

    #[error(transparent)]
    Network(#[from] NetworkError),
}

pub type SimResult<T> = Result<T, SimError>;

// Genesis - Join-response bootstrap handling
pub mod bootstrap;

pub use bootstrap::{BlockStore, BootstrapHandler, GenesisValidator, JoinResponse, GENESIS_HEIGHT};

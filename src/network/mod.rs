// Network - Verifier mesh registry, addressing, and eviction events
// Principle: The registry owns mesh state; transport lives elsewhere

pub mod address;
pub mod events;
pub mod node;
pub mod registry;

pub use address::{AddressError, MeshAddress};
pub use events::{MeshEvent, MeshEventEmitter, DEFAULT_EVENT_CAPACITY};
pub use node::Node;
pub use registry::{MeshRegistry, RegistryConfig, UpdateOutcome};

// Types - Core identity, time, and block-view types
pub mod block;
pub mod primitives;

pub use block::{Block, VerifierSignature};
pub use primitives::{BlockHash, BlockHeight, Timestamp, VerifierId};

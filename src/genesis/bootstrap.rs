// Join Bootstrap - Genesis adoption from a node join response
// Principle: Thin glue; block rules and storage live with the chain layer

use crate::types::{Block, BlockHeight};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Height of the genesis block
pub const GENESIS_HEIGHT: BlockHeight = 0;

/// Local frozen-block storage consulted during bootstrap
pub trait BlockStore: Send + Sync {
    /// The frozen block at the given height, if stored
    fn frozen_block(&self, height: BlockHeight) -> Option<Block>;

    /// Commit a block as frozen
    fn freeze_block(&self, block: Block);
}

/// Validates candidate genesis blocks; the chain rules live outside this crate
pub trait GenesisValidator: Send + Sync {
    fn is_valid_genesis(&self, block: &Block) -> bool;
}

/// The subset of a node join response this crate consumes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JoinResponse {
    /// Nickname announced by the responding peer
    pub nickname: String,

    /// Port the responding peer listens on
    pub port: u16,

    /// Historical blocks offered to the joining node
    pub blocks: Vec<Block>,
}

/// Adopts a genesis block from a join response when none is stored locally
///
/// Holds collaborator handles only; no state of its own.
pub struct BootstrapHandler {
    store: Arc<dyn BlockStore>,
    validator: Arc<dyn GenesisValidator>,
}

impl BootstrapHandler {
    pub fn new(store: Arc<dyn BlockStore>, validator: Arc<dyn GenesisValidator>) -> Self {
        Self { store, validator }
    }

    /// Scan the response for a valid genesis block and commit the first one
    /// found. Returns true when a block was adopted.
    pub fn process_join_response(&self, response: &JoinResponse) -> bool {
        debug!("node join response carries {} blocks", response.blocks.len());

        if self.store.frozen_block(GENESIS_HEIGHT).is_some() {
            return false;
        }

        for block in &response.blocks {
            if self.validator.is_valid_genesis(block) {
                self.store.freeze_block(block.clone());
                info!("adopted genesis block from join response");
                return true;
            }
        }

        if !response.blocks.is_empty() {
            warn!(
                "no valid genesis block among {} candidates",
                response.blocks.len()
            );
        }
        false
    }
}

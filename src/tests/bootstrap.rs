// Bootstrap Integration Tests
// Tests for genesis adoption from node-join responses

#[cfg(test)]
mod tests {
    use crate::genesis::{
        BlockStore, BootstrapHandler, GenesisValidator, JoinResponse, GENESIS_HEIGHT,
    };
    use crate::types::{Block, BlockHash, BlockHeight, VerifierId, VerifierSignature};
    use parking_lot::Mutex;
    use std::collections::HashMap;
    use std::sync::Arc;

    // =========================================================================
    // HELPER FUNCTIONS
    // =========================================================================

    struct MemoryStore {
        frozen: Mutex<HashMap<BlockHeight, Block>>,
    }

    impl MemoryStore {
        fn new() -> Arc<Self> {
            Arc::new(Self {
                frozen: Mutex::new(HashMap::new()),
            })
        }
    }

    impl BlockStore for MemoryStore {
        fn frozen_block(&self, height: BlockHeight) -> Option<Block> {
            self.frozen.lock().get(&height).cloned()
        }

        fn freeze_block(&self, block: Block) {
            self.frozen.lock().insert(block.height, block);
        }
    }

    /// Accepts any block with the genesis shape: height zero, no parent.
    struct GenesisShapeRule;

    impl GenesisValidator for GenesisShapeRule {
        fn is_valid_genesis(&self, block: &Block) -> bool {
            block.height == GENESIS_HEIGHT && block.previous_hash == BlockHash::ZERO
        }
    }

    fn setup() -> (BootstrapHandler, Arc<MemoryStore>) {
        let store = MemoryStore::new();
        let handler = BootstrapHandler::new(store.clone(), Arc::new(GenesisShapeRule));
        (handler, store)
    }

    fn genesis_candidate(verifier_byte: u8) -> Block {
        Block {
            height: GENESIS_HEIGHT,
            previous_hash: BlockHash::ZERO,
            start_timestamp: 1_700_000_000_000,
            verifier: VerifierId::from_bytes([verifier_byte; 32]),
            signature: VerifierSignature::zero(),
        }
    }

    fn non_genesis(height: BlockHeight) -> Block {
        Block {
            height,
            previous_hash: BlockHash::ZERO,
            start_timestamp: 1_700_000_000_000 + height * 7_000,
            verifier: VerifierId::from_bytes([9; 32]),
            signature: VerifierSignature::zero(),
        }
    }

    fn orphan_candidate() -> Block {
        Block {
            previous_hash: BlockHash::from_bytes([8; 32]),
            ..genesis_candidate(9)
        }
    }

    fn join_response(blocks: Vec<Block>) -> JoinResponse {
        JoinResponse {
            nickname: "peer".to_string(),
            port: 9444,
            blocks,
        }
    }

    // =========================================================================
    // GENESIS ADOPTION TESTS
    // =========================================================================

    mod genesis_adoption {
        use super::*;

        #[test]
        fn test_adopts_first_valid_candidate() {
            let (handler, store) = setup();
            let response = join_response(vec![
                non_genesis(3),
                genesis_candidate(1),
                genesis_candidate(2),
            ]);

            assert!(handler.process_join_response(&response));

            let frozen = store.frozen_block(GENESIS_HEIGHT).unwrap();
            assert_eq!(frozen.verifier, VerifierId::from_bytes([1; 32]));
        }

        #[test]
        fn test_rejects_responses_without_a_valid_candidate() {
            let (handler, store) = setup();
            let response = join_response(vec![non_genesis(1), non_genesis(2), orphan_candidate()]);

            assert!(!handler.process_join_response(&response));
            assert!(store.frozen_block(GENESIS_HEIGHT).is_none());
        }

        #[test]
        fn test_empty_response_is_a_no_op() {
            let (handler, store) = setup();

            assert!(!handler.process_join_response(&join_response(Vec::new())));
            assert!(store.frozen_block(GENESIS_HEIGHT).is_none());
        }

        #[test]
        fn test_existing_genesis_is_never_replaced() {
            let (handler, store) = setup();
            store.freeze_block(genesis_candidate(7));

            let response = join_response(vec![genesis_candidate(1)]);
            assert!(!handler.process_join_response(&response));

            let frozen = store.frozen_block(GENESIS_HEIGHT).unwrap();
            assert_eq!(frozen.verifier, VerifierId::from_bytes([7; 32]));
        }
    }

    // =========================================================================
    // INVARIANT TESTS
    // =========================================================================

    mod invariants {
        use super::*;

        #[test]
        fn invariant_at_most_one_adoption() {
            let (handler, store) = setup();

            let first = join_response(vec![genesis_candidate(1)]);
            let second = join_response(vec![genesis_candidate(2)]);

            assert!(handler.process_join_response(&first));
            assert!(!handler.process_join_response(&second));

            let frozen = store.frozen_block(GENESIS_HEIGHT).unwrap();
            assert_eq!(frozen.verifier, VerifierId::from_bytes([1; 32]));
        }
    }
}

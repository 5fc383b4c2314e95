// Tests module
// Registry: announcement, takeover, eviction, and cross-map invariant tests
// Bootstrap: genesis adoption from node-join responses

pub mod bootstrap;

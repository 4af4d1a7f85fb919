//! Routing keys across a small cluster of independent stores.
//!
//! Each node is its own `KeyValueStore`; keys are assigned to nodes with
//! the same FNV-1a hash the store uses internally for shard routing.
//!
//! Run with `cargo run --example cluster`.

use kvs::{KeyValueStore, StoreError};

struct Cluster {
    nodes: Vec<KeyValueStore<String>>,
}

impl Cluster {
    fn node_for(&self, key: &str) -> &KeyValueStore<String> {
        let mut hash: u32 = 2_166_136_261;
        for byte in key.bytes() {
            hash = hash.wrapping_mul(16_777_619) ^ u32::from(byte);
        }
        &self.nodes[hash as usize % self.nodes.len()]
    }
}

fn main() -> Result<(), StoreError> {
    tracing_subscriber::fmt::init();

    let cluster = Cluster {
        nodes: vec![
            KeyValueStore::new(16)?,
            KeyValueStore::new(16)?,
            KeyValueStore::new(16)?,
        ],
    };

    for i in 0..100 {
        let key = format!("key-{i}");
        let value = format!("value-{i}");
        cluster.node_for(&key).set(key.as_str(), &value)?;
    }

    let key = "key-42";
    let value = cluster.node_for(key).get(key)?;
    println!("{key} => {value}");

    for (id, node) in cluster.nodes.iter().enumerate() {
        println!("node {id}: {} keys ({})", node.keys().len(), node.size());
    }

    Ok(())
}

//! Ten worker threads concurrently writing to and reading back from one
//! shared store, then printing its reported size.
//!
//! Run with `cargo run --example multi_thread`.

use std::sync::Arc;
use std::thread;

use kvs::KeyValueStore;

fn main() {
    tracing_subscriber::fmt::init();

    let store: Arc<KeyValueStore<String>> =
        Arc::new(KeyValueStore::new(512).expect("shard count is positive"));

    let workers: Vec<_> = (0..10)
        .map(|id: u32| {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                for j in 0..10_000 {
                    let key = format!("key-{id}-{j}");
                    let value = format!("val-{id}-{j}");

                    store.set(key.as_str(), &value).expect("set never fails");

                    let read_back = store.get(&key).expect("key was just written");
                    assert_eq!(read_back, value, "read back a different value");
                }
            })
        })
        .collect();

    for worker in workers {
        worker.join().expect("worker panicked");
    }

    println!("Size of key-value store: {}", store.size());
}

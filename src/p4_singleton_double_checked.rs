// Pattern 4: Singleton - Double-Checked Lazy Initialization
// The instance pointer is read lock-free on the hot path; the mutex is taken
// only while the value is still unbuilt. The Acquire load pairs with the
// Release store, so a non-null pointer always refers to a finished value.

use std::ptr;
use std::sync::atomic::{AtomicPtr, AtomicUsize, Ordering};
use std::sync::Mutex;

struct ConnectionPool {
    slots: u32,
}

static INSTANCE: AtomicPtr<ConnectionPool> = AtomicPtr::new(ptr::null_mut());
static INIT_LOCK: Mutex<()> = Mutex::new(());
static CONSTRUCTIONS: AtomicUsize = AtomicUsize::new(0);

impl ConnectionPool {
    fn new() -> Self {
        CONSTRUCTIONS.fetch_add(1, Ordering::Relaxed);
        Self { slots: 8 }
    }

    fn instance() -> &'static ConnectionPool {
        // Fast path: no contention once the pointer is published.
        let published = INSTANCE.load(Ordering::Acquire);
        if !published.is_null() {
            return unsafe { &*published };
        }
        Self::init_slow()
    }

    fn init_slow() -> &'static ConnectionPool {
        let _guard = INIT_LOCK.lock().unwrap();

        // Re-check under the lock: another thread may have finished
        // construction while this one waited.
        let published = INSTANCE.load(Ordering::Acquire);
        if !published.is_null() {
            return unsafe { &*published };
        }

        // Leaked: the instance lives until process exit.
        let fresh = Box::into_raw(Box::new(ConnectionPool::new()));
        INSTANCE.store(fresh, Ordering::Release);
        unsafe { &*fresh }
    }

    /// Number of constructor runs so far; stays at 1 for the process lifetime.
    fn construction_count() -> usize {
        CONSTRUCTIONS.load(Ordering::Relaxed)
    }

    fn show_message(&self) {
        println!("Hello World!");
        println!("connection pool ready ({} slots, double-checked init)", self.slots);
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rayon::prelude::*;
    use std::sync::Barrier;

    #[test]
    fn repeated_retrieval_is_identical() {
        let first = ConnectionPool::instance();
        let second = ConnectionPool::instance();
        assert!(ptr::eq(first, second));
    }

    #[test]
    fn concurrent_first_access_constructs_once() {
        const THREADS: usize = 100;

        let barrier = Barrier::new(THREADS);
        let addresses = Mutex::new(Vec::with_capacity(THREADS));

        crossbeam::thread::scope(|s| {
            for _ in 0..THREADS {
                s.spawn(|_| {
                    barrier.wait();
                    let instance = ConnectionPool::instance();
                    addresses
                        .lock()
                        .unwrap()
                        .push(instance as *const ConnectionPool as usize);
                });
            }
        })
        .unwrap();

        let addresses = addresses.into_inner().unwrap();
        assert_eq!(addresses.len(), THREADS);
        assert!(addresses.windows(2).all(|pair| pair[0] == pair[1]));
        assert_eq!(ConnectionPool::construction_count(), 1);
    }

    #[test]
    fn identity_holds_across_a_rayon_pool() {
        let first = ConnectionPool::instance() as *const ConnectionPool as usize;
        let all_same = (0..256)
            .into_par_iter()
            .map(|_| ConnectionPool::instance() as *const ConnectionPool as usize)
            .all(|address| address == first);
        assert!(all_same);
        assert_eq!(ConnectionPool::construction_count(), 1);
    }
}

fn main() {
    let first = ConnectionPool::instance();
    let second = ConnectionPool::instance();
    assert!(ptr::eq(first, second));
    assert_eq!(ConnectionPool::construction_count(), 1);

    first.show_message();
}

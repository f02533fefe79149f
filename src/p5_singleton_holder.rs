// Pattern 5: Singleton - Lazy Holder Initialization
// Construction is delegated to a OnceLock holder inside the accessor: the
// first caller triggers it and every thread sees the finished value.
// No user-visible locking.

use std::ptr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::OnceLock;

struct SessionRegistry {
    capacity: usize,
}

static CONSTRUCTIONS: AtomicUsize = AtomicUsize::new(0);

impl SessionRegistry {
    fn new() -> Self {
        CONSTRUCTIONS.fetch_add(1, Ordering::Relaxed);
        Self { capacity: 64 }
    }

    fn instance() -> &'static SessionRegistry {
        static HOLDER: OnceLock<SessionRegistry> = OnceLock::new();
        HOLDER.get_or_init(SessionRegistry::new)
    }

    /// Number of constructor runs so far; stays at 1 for the process lifetime.
    fn construction_count() -> usize {
        CONSTRUCTIONS.load(Ordering::Relaxed)
    }

    fn show_message(&self) {
        println!("Hello World!");
        println!("session registry ready ({} sessions, holder init)", self.capacity);
    }
}

// ============================================================================
// Tests
// ============================================================================


fn main() {
    let first = SessionRegistry::instance();
    let second = SessionRegistry::instance();
    assert!(ptr::eq(first, second));
    assert_eq!(SessionRegistry::construction_count(), 1);

    first.show_message();
}

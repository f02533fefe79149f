// Pattern 3: Singleton - Eager Static Initialization
// The instance is a const-constructed static: it exists before main runs, so
// every access observes a fully built value without any synchronization.

use std::ptr;

struct BuildInfo {
    app: &'static str,
    version: &'static str,
}

// Built at static-initialization time. No lock, no lazy cell.
static INSTANCE: BuildInfo = BuildInfo::new();

impl BuildInfo {
    const fn new() -> Self {
        Self {
            app: "creational-patterns",
            version: "0.1.0",
        }
    }

    /// Every call, from any thread, returns the same `'static` reference.
    fn instance() -> &'static BuildInfo {
        &INSTANCE
    }

    fn show_message(&self) {
        println!("Hello World!");
        println!("{} {} (eager init)", self.app, self.version);
    }
}

// ============================================================================
// Tests
// ============================================================================


fn main() {
    let first = BuildInfo::instance();
    let second = BuildInfo::instance();
    assert!(ptr::eq(first, second));

    first.show_message();
}

// Creational Patterns Catalog
// This crate demonstrates object-creation patterns as runnable binaries.

pub mod examples {
    //! # Creational Patterns Quick Reference
    //!
    //! This crate provides runnable examples for:
    //!
    //! ## Pattern 1: Factory
    //! - Closed product enum parsed from a string key at the boundary
    //! - Trait-object products built per request (Circle, Rectangle, Square)
    //!
    //! ## Pattern 2: Abstract Factory
    //! - Factory producer selecting a family factory by category key
    //! - Family-exclusive providers (a shape factory cannot build colors)
    //!
    //! ## Pattern 3: Singleton (eager)
    //! - Instance built at static-initialization time, no locking at all
    //!
    //! ## Pattern 4: Singleton (double-checked lock)
    //! - Lock-free fast path, mutex-guarded construction, Acquire/Release
    //!   publication of the instance pointer
    //!
    //! ## Pattern 5: Singleton (lazy holder)
    //! - One-time construction delegated to `OnceLock`
    //!
    //! Run individual examples with:
    //! ```bash
    //! cargo run --bin p1_shape_factory
    //! cargo run --bin p2_abstract_factory
    //! cargo run --bin p3_singleton_eager
    //! cargo run --bin p4_singleton_double_checked
    //! cargo run --bin p5_singleton_holder
    //! ```
}

//! Animation registry
//!
//! Holds every spring that is still moving and advances them all once per
//! frame. Springs over different value types share one registry through the
//! [`RegisteredSpring`] trait object; the concrete `SpringState<V>` behind
//! it keeps its generic math.
//!
//! The registry is single-threaded. Springs are shared with their bindings
//! through `Rc<RefCell<_>>`, and [`AnimationRegistry::step`] must not be
//! re-entered while a previous call is running; serialized dispatch from one
//! frame callback is the caller's responsibility.

use std::cell::RefCell;
use std::rc::Rc;

use rustc_hash::FxHashMap;
use tensile_core::VectorSpace;
use tracing::{debug, trace};

use crate::config::SpringConfig;
use crate::spring::{SpringId, SpringState};

/// The capability the registry needs from a spring, independent of its
/// value type
pub trait RegisteredSpring {
    fn id(&self) -> SpringId;

    /// Advance by `dt` seconds
    fn update(&mut self, dt: f64);

    fn is_settled(&self) -> bool;

    fn config(&self) -> &SpringConfig;
}

impl<V: VectorSpace> RegisteredSpring for SpringState<V> {
    fn id(&self) -> SpringId {
        SpringState::id(self)
    }

    fn update(&mut self, dt: f64) {
        SpringState::update(self, dt);
    }

    fn is_settled(&self) -> bool {
        SpringState::is_settled(self)
    }

    fn config(&self) -> &SpringConfig {
        SpringState::config(self)
    }
}

/// Shared, type-erased spring as stored in the registry
pub type SpringHandle = Rc<RefCell<dyn RegisteredSpring>>;

/// Registry shared between the frame driver and the bindings that feed it
pub type SharedRegistry = Rc<RefCell<AnimationRegistry>>;

/// The set of springs that are still moving
#[derive(Default)]
pub struct AnimationRegistry {
    springs: FxHashMap<SpringId, SpringHandle>,
}

impl AnimationRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty registry wrapped for sharing with bindings
    pub fn shared() -> SharedRegistry {
        Rc::new(RefCell::new(Self::new()))
    }

    /// Insert a spring, replacing any entry with the same id
    pub fn register<S: RegisteredSpring + 'static>(&mut self, spring: Rc<RefCell<S>>) {
        let handle: SpringHandle = spring;
        self.register_handle(handle);
    }

    /// Insert an already type-erased spring, replacing any entry with the
    /// same id
    pub fn register_handle(&mut self, spring: SpringHandle) {
        let id = spring.borrow().id();
        let replaced = self.springs.insert(id, spring).is_some();
        debug!(%id, replaced, active = self.springs.len(), "spring registered");
    }

    /// Advance every registered spring by `dt` seconds, then drop the ones
    /// that have settled.
    ///
    /// Each spring is updated exactly once per call, in no particular order.
    pub fn step(&mut self, dt: f64) {
        trace!(dt, active = self.springs.len(), "stepping springs");

        self.springs.retain(|id, spring| {
            let mut spring = spring.borrow_mut();
            spring.update(dt);
            let settled = spring.is_settled();
            if settled {
                debug!(%id, "spring settled");
            }
            !settled
        });
    }

    pub fn is_empty(&self) -> bool {
        self.springs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.springs.len()
    }

    pub fn contains(&self, id: SpringId) -> bool {
        self.springs.contains_key(&id)
    }

    /// Ids of the active springs, in no particular order
    pub fn ids(&self) -> impl Iterator<Item = SpringId> + '_ {
        self.springs.keys().copied()
    }

    /// Smallest [`SpringConfig::max_stable_dt`] among the active springs
    pub fn max_stable_dt(&self) -> Option<f64> {
        self.springs
            .values()
            .map(|spring| spring.borrow().config().max_stable_dt())
            .reduce(f64::min)
    }
}

impl std::fmt::Debug for AnimationRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnimationRegistry")
            .field("active", &self.springs.len())
            .finish()
    }
}

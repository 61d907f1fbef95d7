//! Animated value bindings
//!
//! [`Animated`] is what UI code holds for an animated field: reading it
//! yields the live spring value, writing it starts (or redirects) an
//! animation and enrolls the spring in the registry.

use std::cell::RefCell;
use std::rc::Rc;

use tensile_core::VectorSpace;

use crate::config::SpringConfig;
use crate::registry::SharedRegistry;
use crate::spring::{SpringId, SpringState};

/// A spring-animated value bound to a registry.
///
/// Clones share the same spring.
///
/// # Example
///
/// ```rust
/// use tensile_animation::{AnimationRegistry, Animated};
///
/// let registry = AnimationRegistry::shared();
/// let offset = Animated::new(&registry, 0.0_f64);
///
/// offset.set(100.0);
/// assert!(offset.is_animating());
///
/// for _ in 0..120 {
///     registry.borrow_mut().step(1.0 / 60.0);
/// }
///
/// assert!(registry.borrow().is_empty());
/// assert!((offset.get() - 100.0).abs() < 0.1);
/// ```
pub struct Animated<V> {
    spring: Rc<RefCell<SpringState<V>>>,
    registry: SharedRegistry,
}

impl<V: VectorSpace + 'static> Animated<V> {
    /// Bind a new spring at rest on `initial`, using the standard preset
    pub fn new(registry: &SharedRegistry, initial: V) -> Self {
        Self::with_config(registry, initial, SpringConfig::standard())
    }

    pub fn with_config(registry: &SharedRegistry, initial: V, config: SpringConfig) -> Self {
        Self {
            spring: Rc::new(RefCell::new(SpringState::with_config(initial, config))),
            registry: Rc::clone(registry),
        }
    }

    /// Current animated value
    pub fn get(&self) -> V {
        self.spring.borrow().value()
    }

    /// Animate toward `target`. Same as [`Animated::animate_to`].
    pub fn set(&self, target: V) {
        self.animate_to(target);
    }

    /// Retarget the spring and make sure the registry is stepping it.
    ///
    /// Must not be called from inside [`AnimationRegistry::step`]
    /// (the registry is already mutably borrowed there).
    ///
    /// [`AnimationRegistry::step`]: crate::registry::AnimationRegistry::step
    pub fn animate_to(&self, target: V) {
        self.spring.borrow_mut().animate_to(target);
        self.registry.borrow_mut().register(Rc::clone(&self.spring));
    }

    pub fn target(&self) -> V {
        self.spring.borrow().target()
    }

    pub fn velocity(&self) -> V {
        self.spring.borrow().velocity()
    }

    pub fn is_settled(&self) -> bool {
        self.spring.borrow().is_settled()
    }

    /// Whether the registry is currently stepping this spring
    pub fn is_animating(&self) -> bool {
        self.registry.borrow().contains(self.id())
    }

    pub fn id(&self) -> SpringId {
        self.spring.borrow().id()
    }

    pub fn config(&self) -> SpringConfig {
        *self.spring.borrow().config()
    }
}

impl<V> Clone for Animated<V> {
    fn clone(&self) -> Self {
        Self {
            spring: Rc::clone(&self.spring),
            registry: Rc::clone(&self.registry),
        }
    }
}

impl<V: std::fmt::Debug> std::fmt::Debug for Animated<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Animated")
            .field("spring", &*self.spring.borrow())
            .finish_non_exhaustive()
    }
}

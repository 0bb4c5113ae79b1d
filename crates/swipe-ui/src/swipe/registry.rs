//! Swipe controllers keyed by stable item identity.
//!
//! Virtualized lists recycle row slots for different data. Keying state by
//! the item's identity rather than the slot keeps a half-swiped row from
//! showing up on whatever item scrolls into its place.

use super::config::{SwipeConfig, SwipeConfigError};
use super::controller::SwipeController;
use indexmap::IndexMap;
use rustc_hash::FxBuildHasher;
use std::fmt::Debug;
use std::hash::Hash;
use std::rc::Rc;
use swipe_core::SchedulerHandle;

pub struct SwipeRegistry<K> {
    scheduler: SchedulerHandle,
    config: SwipeConfig,
    on_delete: Rc<dyn Fn(&K)>,
    controllers: IndexMap<K, SwipeController, FxBuildHasher>,
}

impl<K> SwipeRegistry<K>
where
    K: Hash + Eq + Clone + Debug + 'static,
{
    /// `on_delete` receives the key of every row whose deletion completes.
    pub fn new(scheduler: SchedulerHandle, on_delete: impl Fn(&K) + 'static) -> Self {
        Self {
            scheduler,
            config: SwipeConfig::default(),
            on_delete: Rc::new(on_delete),
            controllers: IndexMap::default(),
        }
    }

    pub fn with_config(
        scheduler: SchedulerHandle,
        config: SwipeConfig,
        on_delete: impl Fn(&K) + 'static,
    ) -> Result<Self, SwipeConfigError> {
        config.validate()?;
        let mut registry = Self::new(scheduler, on_delete);
        registry.config = config;
        Ok(registry)
    }

    pub fn config(&self) -> &SwipeConfig {
        &self.config
    }

    /// Controller for `key`, created on first use.
    pub fn controller(&mut self, key: &K) -> SwipeController {
        if let Some(controller) = self.controllers.get(key) {
            return controller.clone();
        }
        let on_delete = self.on_delete.clone();
        let owned = key.clone();
        let controller = SwipeController::build(
            self.config.clone(),
            self.scheduler.clone(),
            Rc::new(move || on_delete(&owned)),
        );
        log::trace!("created swipe controller for {key:?}");
        self.controllers.insert(key.clone(), controller.clone());
        controller
    }

    pub fn get(&self, key: &K) -> Option<&SwipeController> {
        self.controllers.get(key)
    }

    pub fn contains(&self, key: &K) -> bool {
        self.controllers.contains_key(key)
    }

    /// Drops and disposes the controller for `key`.
    pub fn remove(&mut self, key: &K) -> bool {
        match self.controllers.shift_remove(key) {
            Some(controller) => {
                controller.dispose();
                true
            }
            None => false,
        }
    }

    /// Keeps only the controllers whose key satisfies `keep`; the rest are
    /// disposed.
    pub fn retain(&mut self, mut keep: impl FnMut(&K) -> bool) {
        let mut dropped = Vec::new();
        self.controllers.retain(|key, controller| {
            let kept = keep(key);
            if !kept {
                dropped.push(controller.clone());
            }
            kept
        });
        for controller in dropped {
            controller.dispose();
        }
    }

    /// Sends every row back to rest, e.g. when the list is re-sorted.
    pub fn reset_all(&self) {
        for controller in self.controllers.values() {
            controller.on_item_disappear();
        }
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.controllers.keys()
    }

    pub fn len(&self) -> usize {
        self.controllers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.controllers.is_empty()
    }
}

impl<K> Drop for SwipeRegistry<K> {
    fn drop(&mut self) {
        for controller in self.controllers.values() {
            controller.dispose();
        }
    }
}

impl<K: Debug> Debug for SwipeRegistry<K> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SwipeRegistry")
            .field("controllers", &self.controllers)
            .finish()
    }
}

#[cfg(test)]
#[path = "../tests/registry_tests.rs"]
mod tests;

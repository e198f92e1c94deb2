use core::any::TypeId;
use std::sync::{Arc, PoisonError, RwLock};

use kw_utils::TypeIdMap;

use crate::FieldPlan;

/// A thread-safe map from struct type to its [`FieldPlan`].
///
/// Plans are published whole behind an [`Arc`], so a reader never observes a
/// partially built plan. Two threads missing on the same type may both build
/// it; the later `put` wins and both results are equivalent.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use kw_json::{Direction, FieldPlan, PlanCache, TagSettings};
/// use kw_reflect::{derive::Reflect, info::Typed};
///
/// #[derive(Reflect)]
/// struct Point {
///     pub x: i32,
/// }
///
/// let cache = PlanCache::new();
/// let info = Point::type_info().as_struct().unwrap();
/// let plan = FieldPlan::build(Direction::Encode, info, &TagSettings::default());
///
/// cache.put(info.ty().id(), Arc::new(plan));
/// assert!(cache.get(info.ty().id()).is_some());
///
/// cache.clear();
/// assert!(cache.is_empty());
/// ```
#[derive(Default)]
pub struct PlanCache {
    plans: RwLock<TypeIdMap<Arc<FieldPlan>>>,
}

impl PlanCache {
    pub const fn new() -> Self {
        Self {
            plans: RwLock::new(TypeIdMap::new()),
        }
    }

    #[inline]
    pub fn get(&self, type_id: TypeId) -> Option<Arc<FieldPlan>> {
        let plans = self.plans.read().unwrap_or_else(PoisonError::into_inner);
        plans.get(&type_id).cloned()
    }

    /// Stores `plan`, replacing any plan already stored for `type_id`.
    #[inline]
    pub fn put(&self, type_id: TypeId, plan: Arc<FieldPlan>) {
        let mut plans = self.plans.write().unwrap_or_else(PoisonError::into_inner);
        plans.insert(type_id, plan);
    }

    /// Drops every plan at once.
    pub fn clear(&self) {
        let mut plans = self.plans.write().unwrap_or_else(PoisonError::into_inner);
        plans.clear();
    }

    pub fn len(&self) -> usize {
        self.plans.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl core::fmt::Debug for PlanCache {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PlanCache").field("len", &self.len()).finish()
    }
}

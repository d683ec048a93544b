use polaris_directions::{leg_annotation::LegAnnotation, route::Route};
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RefreshError {
    #[error("current leg index {current_leg_index} is out of range for a route with {leg_count} legs")]
    LegIndexOutOfRange {
        current_leg_index: usize,
        leg_count: usize,
    },

    #[error("received {refreshed_count} refreshed annotations for {remaining_count} remaining legs")]
    AnnotationCountMismatch {
        refreshed_count: usize,
        remaining_count: usize,
    },
}

/// Merges freshly fetched annotation data into an in-progress route.
///
/// Legs the traveler has already completed are carried over untouched; only
/// legs from the current one onward receive a refreshed annotation.
#[derive(Debug, Clone, Copy, Default)]
pub struct RouteReconciler;

impl RouteReconciler {
    /// Returns a new route equal to `old_route` except that each leg from
    /// `current_leg_index` onward carries its entry from
    /// `refreshed_annotations`, where entry 0 belongs to the leg at
    /// `current_leg_index`.
    ///
    /// The old route is never modified. On error no route is produced and
    /// the caller keeps the previous one as the effective state.
    pub fn reconcile(
        &self,
        old_route: &Route,
        refreshed_annotations: Vec<LegAnnotation>,
        current_leg_index: usize,
    ) -> Result<Route, RefreshError> {
        let leg_count = old_route.legs.len();

        if current_leg_index >= leg_count {
            return Err(RefreshError::LegIndexOutOfRange {
                current_leg_index,
                leg_count,
            });
        }

        let remaining_count = leg_count - current_leg_index;
        if refreshed_annotations.len() != remaining_count {
            return Err(RefreshError::AnnotationCountMismatch {
                refreshed_count: refreshed_annotations.len(),
                remaining_count,
            });
        }

        let mut legs = old_route.legs.clone();
        for (leg, annotation) in legs[current_leg_index..]
            .iter_mut()
            .zip(refreshed_annotations)
        {
            leg.annotation = Some(annotation);
        }

        debug!(
            "refreshed annotations on {} of {} legs starting at leg {}",
            remaining_count, leg_count, current_leg_index
        );

        Ok(Route {
            legs,
            ..old_route.clone()
        })
    }
}

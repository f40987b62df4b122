//! Hook strategy for patching placement around source-format quirks.

use super::types::{BuildContext, HookAction};
use crate::error::Result;
use crate::tree::NodeId;

/// Hooks consulted around each placement decision.
///
/// `before_place` can pre-empt generic placement by attaching the record
/// itself or dropping it. `after_place` runs side effects once the record
/// has been handled, whatever `before_place` decided.
pub trait PlacementHooks {
    /// Decide how the current record is handled.
    ///
    /// Default implementation always defers to generic placement.
    fn before_place(&mut self, _context: &mut BuildContext<'_>) -> Result<HookAction> {
        Ok(HookAction::Place)
    }

    /// Run side effects for the current record.
    ///
    /// # Arguments
    /// * `context` - Build state; `placements` includes the current record
    /// * `placed` - Node created for the record, `None` if it was skipped
    fn after_place(
        &mut self,
        _context: &mut BuildContext<'_>,
        _placed: Option<NodeId>,
    ) -> Result<()> {
        Ok(())
    }
}

impl<H: PlacementHooks + ?Sized> PlacementHooks for &mut H {
    fn before_place(&mut self, context: &mut BuildContext<'_>) -> Result<HookAction> {
        (**self).before_place(context)
    }

    fn after_place(
        &mut self,
        context: &mut BuildContext<'_>,
        placed: Option<NodeId>,
    ) -> Result<()> {
        (**self).after_place(context, placed)
    }
}

/// Hooks that change nothing: plain generic placement.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoHooks;

impl PlacementHooks for NoHooks {}

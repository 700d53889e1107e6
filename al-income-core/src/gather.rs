use std::fmt;

use tracing::debug;

use crate::error::IncomeResult;

/// Host-provided logic that fills a collection on demand.
///
/// Collections may be populated interactively; aggregate operations call
/// the hook through [`Gatherer::ensure`] before reading any element.
pub trait Populate<C: ?Sized> {
    fn populate(&mut self, target: &mut C) -> IncomeResult<()>;
}

impl<C: ?Sized, F> Populate<C> for F
where
    F: FnMut(&mut C) -> IncomeResult<()>,
{
    fn populate(&mut self, target: &mut C) -> IncomeResult<()> {
        self(target)
    }
}

/// Tracks whether a collection has been populated and owns its hook.
///
/// Once a hook succeeds the collection counts as gathered and the hook is
/// not run again until [`Gatherer::reset`]. A failed hook leaves the
/// collection ungathered. Clones carry the gathered flag but not the hook.
pub struct Gatherer<C: ?Sized> {
    hook: Option<Box<dyn Populate<C>>>,
    gathered: bool,
}

impl<C: ?Sized> Gatherer<C> {
    pub fn new() -> Self {
        Gatherer {
            hook: None,
            gathered: false,
        }
    }

    pub fn with_hook<P: Populate<C> + 'static>(hook: P) -> Self {
        Gatherer {
            hook: Some(Box::new(hook)),
            gathered: false,
        }
    }

    pub fn set_hook<P: Populate<C> + 'static>(&mut self, hook: P) {
        self.hook = Some(Box::new(hook));
        self.gathered = false;
    }

    pub fn is_gathered(&self) -> bool {
        self.gathered
    }

    pub fn has_hook(&self) -> bool {
        self.hook.is_some()
    }

    /// Marks the collection as needing population again.
    pub fn reset(&mut self) {
        self.gathered = false;
    }

    /// Runs the hook once, if there is one and it has not yet succeeded.
    ///
    /// The hook only receives the collection's storage, never the owning
    /// collection, so it cannot re-enter an aggregate operation.
    pub fn ensure(&mut self, target: &mut C) -> IncomeResult<()> {
        if self.gathered {
            return Ok(());
        }
        if let Some(hook) = self.hook.as_mut() {
            debug!("running population hook");
            hook.populate(target)?;
        }
        self.gathered = true;
        Ok(())
    }
}

impl<C: ?Sized> Default for Gatherer<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: ?Sized> Clone for Gatherer<C> {
    fn clone(&self) -> Self {
        Gatherer {
            hook: None,
            gathered: self.gathered,
        }
    }
}

// The hook is host plumbing, not data: two collections compare equal on
// their elements alone.
impl<C: ?Sized> PartialEq for Gatherer<C> {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl<C: ?Sized> fmt::Debug for Gatherer<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Gatherer")
            .field("hook", &self.hook.as_ref().map(|_| "<hook>"))
            .field("gathered", &self.gathered)
            .finish()
    }
}

use std::any::Any;

/// A value owned by [`StateCtx`](crate::StateCtx).
///
/// States are plain data: UI reads them through `ctx.state::<T>()` and changes
/// them through `ctx.update::<T>(..)` or an [`Updater`](crate::Updater).
pub trait State: Any + Send {
    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;

    /// Owned copy handed to commands when they are dispatched.
    ///
    /// States returning `None` are not visible to commands.
    fn snapshot(&self) -> Option<Box<dyn Any + Send>> {
        None
    }
}

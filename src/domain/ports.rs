use crate::domain::model::Greeting;

/// Source of the greeting. Implementations must be pure: no I/O, no state,
/// the same value on every call.
pub trait GreetingProvider: Send + Sync {
    fn greeting(&self) -> Greeting;
}

impl<P: GreetingProvider + ?Sized> GreetingProvider for &P {
    fn greeting(&self) -> Greeting {
        (**self).greeting()
    }
}

impl<P: GreetingProvider + ?Sized> GreetingProvider for std::sync::Arc<P> {
    fn greeting(&self) -> Greeting {
        (**self).greeting()
    }
}

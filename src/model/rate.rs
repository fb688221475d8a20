/// Capability shared by rated values that can produce independent copies.
///
/// [`Article`](crate::model::Article) stores its rating; [`Magazine`](crate::model::Magazine)
/// derives its rating from its articles on every call.
pub trait RateAndCopy {
    /// Current rating of the value.
    fn rating(&self) -> f64;

    /// Returns a copy that shares no mutable state with `self`.
    fn deep_copy(&self) -> Self
    where
        Self: Sized;
}

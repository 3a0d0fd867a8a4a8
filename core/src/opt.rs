use thiserror::Error;

/// A value of type `T`, or nothing.
///
/// Transformations never branch at the call site: absence propagates through
/// [`map`](Self::map), [`keep_if`](Self::keep_if) and [`call`](Self::call),
/// and extraction substitutes a default. Converts losslessly to and from
/// [`Option`].
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize), serde(transparent))]
pub struct Opt<T> {
  value: Option<T>,
}

impl<T> Opt<T> {
  #[inline]
  pub fn of(value: T) -> Self {
    Self { value: Some(value) }
  }

  /// The canonical absent value; equal to `Self::default()`.
  #[inline]
  pub fn none() -> Self {
    Self { value: None }
  }

  /// Wraps `value` when `ok` holds; drops it otherwise.
  #[inline]
  pub fn new(value: T, ok: bool) -> Self {
    Self { value: ok.then_some(value) }
  }

  #[inline]
  pub fn from_option(value: Option<T>) -> Self {
    Self { value }
  }

  #[inline]
  pub fn into_option(self) -> Option<T> {
    self.value
  }
}

impl<T: Clone> Opt<T> {
  /// Absent when `pointee` is absent; otherwise wraps a clone of the pointee.
  #[inline]
  pub fn of_pointee(pointee: Option<&T>) -> Self {
    Self { value: pointee.cloned() }
  }
}

impl<T: Default + PartialEq> Opt<T> {
  /// Treats the default value of `T` as "not provided".
  ///
  /// Trap: a deliberately passed default (an explicit `0`, an empty string)
  /// is indistinguishable from absence and also yields the absent value. Use
  /// [`of`](Self::of) when the default is a legitimate input.
  #[inline]
  pub fn if_provided(value: T) -> Self {
    let provided = value != T::default();
    Self::new(value, provided)
  }
}

impl<T> Opt<T> {
  #[inline]
  pub fn is_ok(&self) -> bool {
    self.value.is_some()
  }

  #[inline]
  pub fn as_ref(&self) -> Option<&T> {
    self.value.as_ref()
  }

  /// The value and `true`, or `T::default()` and `false`.
  #[inline]
  pub fn get(self) -> (T, bool) where T: Default {
    match self.value {
      Some(value) => (value, true),
      None => (T::default(), false),
    }
  }

  /// The value, when presence is already guaranteed by control flow.
  ///
  /// # Panics
  ///
  /// Panics when no value is present.
  #[inline]
  pub fn must_get(self) -> T {
    match self.value {
      Some(value) => value,
      None => panic!("asserted a value, but none is present"),
    }
  }

  #[inline]
  pub fn try_get(self) -> Result<T, AbsentError> {
    self.value.ok_or(AbsentError)
  }

  #[inline]
  pub fn get_or(self, default: T) -> T {
    self.value.unwrap_or(default)
  }

  #[inline]
  pub fn get_or_default(self) -> T where T: Default {
    self.value.unwrap_or_default()
  }

  /// `default` runs only when no value is present.
  #[inline]
  pub fn get_or_else(self, default: impl FnOnce() -> T) -> T {
    self.value.unwrap_or_else(default)
  }


  #[inline]
  pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Opt<U> {
    Opt { value: self.value.map(f) }
  }

  /// Keeps the value only when `predicate` holds for it.
  #[inline]
  pub fn keep_if(self, predicate: impl FnOnce(&T) -> bool) -> Self {
    Self { value: self.value.filter(predicate) }
  }

  /// Drops the value when `predicate` holds for it.
  #[inline]
  pub fn discard_if(self, predicate: impl FnOnce(&T) -> bool) -> Self {
    Self { value: self.value.filter(|value| !predicate(value)) }
  }

  /// Invokes `f` with the value when present; no-op otherwise.
  ///
  /// Wrapper types embedding an `Opt` build conditional teardown on this:
  /// a `close(self)` forwarding to `self.inner.call(Resource::close)` closes
  /// an opened resource and does nothing for a never-opened one.
  #[inline]
  pub fn call(self, f: impl FnOnce(T)) {
    if let Some(value) = self.value {
      f(value);
    }
  }
}

impl<T> Default for Opt<T> {
  #[inline]
  fn default() -> Self {
    Self::none()
  }
}

impl<T> From<T> for Opt<T> {
  #[inline]
  fn from(value: T) -> Self {
    Self::of(value)
  }
}
impl<T> From<Option<T>> for Opt<T> {
  #[inline]
  fn from(value: Option<T>) -> Self {
    Self::from_option(value)
  }
}
impl<T> From<Opt<T>> for Option<T> {
  #[inline]
  fn from(opt: Opt<T>) -> Self {
    opt.into_option()
  }
}

/// Adapts `f` into a function over [`Opt`] that no-ops on absence.
#[inline]
pub fn lift<T>(f: impl Fn(T)) -> impl Fn(Opt<T>) {
  move |opt| opt.call(&f)
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Error)]
#[error("no value is present")]
pub struct AbsentError;


#[cfg(test)]
mod tests {
  use std::cell::Cell;

  use super::{lift, Opt};

  #[test]
  fn present_value_is_observable() {
    let opt = Opt::of(42);
    assert!(opt.is_ok());
    assert_eq!(opt.get(), (42, true));
    assert_eq!(opt.must_get(), 42);
    assert_eq!(opt.as_ref(), Some(&42));
  }

  #[test]
  fn absent_value_substitutes_defaults() {
    let opt = Opt::<i32>::none();
    assert!(!opt.is_ok());
    assert_eq!(opt.get(), (0, false));
    assert_eq!(opt.get_or(7), 7);
    assert_eq!(opt.get_or_default(), 0);
    assert_eq!(opt.as_ref(), None);
    assert!(opt.try_get().is_err());
  }

  #[test]
  #[should_panic(expected = "none is present")]
  fn must_get_panics_on_absence() {
    Opt::<i32>::none().must_get();
  }

  #[test]
  fn new_respects_flag() {
    assert_eq!(Opt::new("x", true), Opt::of("x"));
    assert_eq!(Opt::new("x", false), Opt::none());
  }

  #[test]
  fn of_pointee() {
    let value = String::from("v");
    assert_eq!(Opt::of_pointee(Some(&value)), Opt::of(String::from("v")));
    assert_eq!(Opt::<String>::of_pointee(None), Opt::none());
  }

  #[test]
  fn if_provided_conflates_default_with_absence() {
    assert_eq!(Opt::if_provided(3), Opt::of(3));
    assert_eq!(Opt::if_provided(0), Opt::none());
    assert_eq!(Opt::if_provided(String::new()), Opt::none());
  }

  #[test]
  fn map_applies_to_present_value() {
    let opt = Opt::of(5);
    assert_eq!(opt.map(|v| v * 2).get_or(0), 10);
    assert_eq!(opt.map(|v| v.to_string()), Opt::of(String::from("5")));
  }

  #[test]
  fn map_with_identity_preserves_value() {
    let opt = Opt::of(5);
    assert_eq!(opt.map(|v| v), opt);
  }

  #[test]
  fn map_skips_closure_on_absence() {
    let calls = Cell::new(0);
    let mapped = Opt::<i32>::none().map(|v| {
      calls.set(calls.get() + 1);
      v * 2
    });
    assert_eq!(mapped, Opt::none());
    assert_eq!(calls.get(), 0);
    assert_eq!(mapped.get_or(0), 0);
  }

  #[test]
  fn keep_if_and_discard_if_are_complementary() {
    let even = |v: &i32| v % 2 == 0;
    for value in [2, 3] {
      let opt = Opt::of(value);
      assert_ne!(opt.keep_if(even).is_ok(), opt.discard_if(even).is_ok());
    }
    assert_eq!(Opt::of(2).keep_if(even), Opt::of(2));
    assert_eq!(Opt::of(3).keep_if(even), Opt::none());
    assert_eq!(Opt::of(2).discard_if(even), Opt::none());
    assert_eq!(Opt::of(3).discard_if(even), Opt::of(3));
    assert_eq!(Opt::<i32>::none().keep_if(even), Opt::none());
    assert_eq!(Opt::<i32>::none().discard_if(even), Opt::none());
  }

  #[test]
  fn get_or_else_is_lazy() {
    let calls = Cell::new(0);
    let fallback = || {
      calls.set(calls.get() + 1);
      0
    };
    assert_eq!(Opt::of(42).get_or_else(fallback), 42);
    assert_eq!(calls.get(), 0);
    assert_eq!(Opt::<i32>::none().get_or_else(fallback), 0);
    assert_eq!(calls.get(), 1);
  }

  #[test]
  fn call_runs_only_when_present() {
    let calls = Cell::new(0);
    Opt::of(3).call(|v| calls.set(calls.get() + v));
    assert_eq!(calls.get(), 3);
    Opt::<i32>::none().call(|v| calls.set(calls.get() + v));
    assert_eq!(calls.get(), 3);
  }

  #[test]
  fn lift_adapts_plain_consumers() {
    let calls = Cell::new(0);
    let lifted = lift(|v: i32| calls.set(calls.get() + v));
    lifted(Opt::of(2));
    lifted(Opt::none());
    lifted(Opt::of(5));
    assert_eq!(calls.get(), 7);
  }

  struct Resource<'a> {
    closed: &'a Cell<bool>,
  }
  impl Resource<'_> {
    fn close(self) {
      self.closed.set(true);
    }
  }

  struct Connection<'a> {
    resource: Opt<Resource<'a>>,
  }
  impl Connection<'_> {
    fn close(self) {
      self.resource.call(Resource::close);
    }
  }

  #[test]
  fn wrapper_closes_only_an_opened_resource() {
    let closed = Cell::new(false);
    let connection = Connection { resource: Opt::of(Resource { closed: &closed }) };
    connection.close();
    assert!(closed.get());

    let closed = Cell::new(false);
    let connection = Connection { resource: Opt::none() };
    connection.close();
    assert!(!closed.get());
  }

  #[test]
  fn converts_to_and_from_option() {
    assert_eq!(Opt::from(Some(1)), Opt::of(1));
    assert_eq!(Opt::<i32>::from(None), Opt::none());
    assert_eq!(Option::from(Opt::of(1)), Some(1));
    assert_eq!(Opt::of(1).into_option(), Some(1));
    assert_eq!(Opt::<i32>::default(), Opt::none());
  }

  #[cfg(feature = "serde")]
  mod serde {
    use super::Opt;

    #[test]
    fn present_serializes_as_bare_value() {
      assert_eq!(serde_json::to_string(&Opt::of(42)).unwrap(), "42");
      let opt: Opt<i32> = serde_json::from_str("42").unwrap();
      assert_eq!(opt, Opt::of(42));
    }

    #[test]
    fn absent_serializes_as_null() {
      assert_eq!(serde_json::to_string(&Opt::<i32>::none()).unwrap(), "null");
      let opt: Opt<i32> = serde_json::from_str("null").unwrap();
      assert_eq!(opt, Opt::none());
    }

    #[test]
    fn round_trips_structured_values() {
      let opt = Opt::of(vec![String::from("a"), String::new()]);
      let json = serde_json::to_string(&opt).unwrap();
      let back: Opt<Vec<String>> = serde_json::from_str(&json).unwrap();
      assert_eq!(back, opt);
    }
  }
}

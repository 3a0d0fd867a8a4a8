use thiserror::Error;

use crate::opt::Opt;

/// Exactly one of a `Left` or a `Right` value.
///
/// Right-biased: [`map`](Self::map), [`get`](Self::get) and
/// [`get_or`](Self::get_or) act on the `Right` side, which conventionally
/// carries the success value, with `Left` carrying failure context.
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Either<L, R> {
  Left(L),
  Right(R),
}

impl<L, R> Either<L, R> {
  #[inline]
  pub fn is_left(&self) -> bool {
    matches!(self, Self::Left(_))
  }

  #[inline]
  pub fn is_right(&self) -> bool {
    matches!(self, Self::Right(_))
  }

  #[inline]
  pub fn as_ref(&self) -> Either<&L, &R> {
    match self {
      Self::Left(left) => Either::Left(left),
      Self::Right(right) => Either::Right(right),
    }
  }


  /// The right value and `true`, or `R::default()` and `false`.
  #[inline]
  pub fn get(self) -> (R, bool) where R: Default {
    self.right().get()
  }

  /// The left value and `true`, or `L::default()` and `false`.
  #[inline]
  pub fn get_left(self) -> (L, bool) where L: Default {
    self.left().get()
  }

  #[inline]
  pub fn right(self) -> Opt<R> {
    match self {
      Self::Left(_) => Opt::none(),
      Self::Right(right) => Opt::of(right),
    }
  }

  #[inline]
  pub fn left(self) -> Opt<L> {
    match self {
      Self::Left(left) => Opt::of(left),
      Self::Right(_) => Opt::none(),
    }
  }

  #[inline]
  pub fn get_or(self, default: R) -> R {
    self.right().get_or(default)
  }

  #[inline]
  pub fn left_or(self, default: L) -> L {
    self.left().get_or(default)
  }

  /// The right value, when the side is already guaranteed by control flow.
  ///
  /// # Panics
  ///
  /// Panics when this is a `Left`.
  #[inline]
  pub fn must_get(self) -> R {
    match self {
      Self::Left(_) => panic!("asserted a right value, but this is a left"),
      Self::Right(right) => right,
    }
  }

  /// The left value, when the side is already guaranteed by control flow.
  ///
  /// # Panics
  ///
  /// Panics when this is a `Right`.
  #[inline]
  pub fn must_get_left(self) -> L {
    match self {
      Self::Left(left) => left,
      Self::Right(_) => panic!("asserted a left value, but this is a right"),
    }
  }

  #[inline]
  pub fn try_get(self) -> Result<R, SideError> {
    match self {
      Self::Left(_) => Err(SideError::Left),
      Self::Right(right) => Ok(right),
    }
  }

  #[inline]
  pub fn try_get_left(self) -> Result<L, SideError> {
    match self {
      Self::Left(left) => Ok(left),
      Self::Right(_) => Err(SideError::Right),
    }
  }


  /// Transforms the right value; a `Left` passes through untouched.
  #[inline]
  pub fn map<U>(self, f: impl FnOnce(R) -> U) -> Either<L, U> {
    match self {
      Self::Left(left) => Either::Left(left),
      Self::Right(right) => Either::Right(f(right)),
    }
  }

  /// Transforms the left value; a `Right` passes through untouched.
  #[inline]
  pub fn map_left<U>(self, f: impl FnOnce(L) -> U) -> Either<U, R> {
    match self {
      Self::Left(left) => Either::Left(f(left)),
      Self::Right(right) => Either::Right(right),
    }
  }

  /// Exhaustive case analysis; exactly one of the two closures runs.
  #[inline]
  pub fn fold<T>(self, on_left: impl FnOnce(L) -> T, on_right: impl FnOnce(R) -> T) -> T {
    match self {
      Self::Left(left) => on_left(left),
      Self::Right(right) => on_right(right),
    }
  }


  /// Invokes `f` with the right value; no-op on a `Left`.
  #[inline]
  pub fn if_right(self, f: impl FnOnce(R)) {
    if let Self::Right(right) = self {
      f(right);
    }
  }

  /// Invokes `f` with the left value; no-op on a `Right`.
  #[inline]
  pub fn if_left(self, f: impl FnOnce(L)) {
    if let Self::Left(left) = self {
      f(left);
    }
  }
}

/// The side an [`Either`] turned out to hold when the other one was asked for.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Error)]
pub enum SideError {
  #[error("either holds a left value")]
  Left,
  #[error("either holds a right value")]
  Right,
}

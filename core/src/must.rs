use std::fmt::Display;

/// The success value of `result`, asserting that the operation succeeded.
///
/// # Panics
///
/// Panics on `Err`, logging the discarded cause at error level first.
pub fn must<T, E: Display>(result: Result<T, E>) -> T {
  match result {
    Ok(value) => value,
    Err(cause) => {
      tracing::error!(%cause, "asserted success, but the operation failed");
      panic!("asserted success, but the operation failed: {cause}");
    }
  }
}

/// The contained value of `option`, asserting that one is present.
///
/// # Panics
///
/// Panics on `None`.
pub fn must_some<T>(option: Option<T>) -> T {
  match option {
    Some(value) => value,
    None => {
      tracing::error!("asserted a value, but none is present");
      panic!("asserted a value, but none is present");
    }
  }
}

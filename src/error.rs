use std::fmt::Display;

use anyhow::Error;

/// Adds methods for failing without panic. Like `expect` but without panic.
pub trait NiceError<T> {
    /// Fail exiting with `1` if the value is an error, printing the chain of its causes. Otherwise
    /// return the content.
    fn nice_unwrap(self) -> T;

    /// Fail exiting with `1` if the value is an error, printing the message followed by the chain
    /// of causes. Otherwise return the content.
    fn nice_expect<S: Display + Send + Sync + 'static>(self, mex: S) -> T;
}

/// Format the error and all of its causes, one per paragraph.
pub fn error_chain(error: &Error) -> String {
    let mut message = format!("Error: {}", error);
    for cause in error.chain().skip(1) {
        message += &format!("\n\nCaused by:\n    {}", cause);
    }
    message
}

fn fail(error: Error) -> ! {
    debug!("{:?}", error);
    eprintln!("{}", error_chain(&error));
    std::process::exit(1);
}

impl<T, E: Into<Error>> NiceError<T> for Result<T, E> {
    fn nice_unwrap(self) -> T {
        match self {
            Ok(x) => x,
            Err(e) => fail(e.into()),
        }
    }

    fn nice_expect<S: Display + Send + Sync + 'static>(self, mex: S) -> T {
        match self {
            Ok(x) => x,
            Err(e) => fail(e.into().context(mex)),
        }
    }
}

#[cfg(test)]
mod tests {
    use anyhow::{anyhow, Context};
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_error_chain() {
        let error = Err::<(), _>(anyhow!("connection refused"))
            .context("Failed to fetch https://atcoder.jp/contests/abc130/tasks/abc130_a")
            .unwrap_err();
        assert_eq!(
            error_chain(&error),
            "Error: Failed to fetch https://atcoder.jp/contests/abc130/tasks/abc130_a\n\n\
             Caused by:\n    connection refused"
        );
    }

    #[test]
    fn test_nice_unwrap_ok() {
        let value: Result<u32, Error> = Ok(42);
        assert_eq!(value.nice_unwrap(), 42);
    }
}

use super::Error;
use core::fmt::{self, Display};

impl Error {
    fn fmt_line(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code)?;
        if let Some(message) = &self.message {
            write!(f, ": {}", message)?;
        }
        if let Some(target) = &self.target {
            write!(f, " (target: {})", target)?;
        }
        Ok(())
    }

    fn fmt_tree(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        self.fmt_line(f)?;

        for detail in self.details() {
            f.write_str("\n")?;
            for _ in 0..=depth {
                f.write_str("  ")?;
            }
            f.write_str("- ")?;
            detail.fmt_tree(f, depth + 1)?;
        }

        for cause in self.inner_errors() {
            f.write_str("\n")?;
            for _ in 0..depth {
                f.write_str("  ")?;
            }
            f.write_str("caused by: ")?;
            cause.fmt_line(f)?;
        }

        Ok(())
    }
}

/// `code: message (target: t)` on one line.
///
/// The alternate form (`{:#}`) also lists the details, indented, followed by one
/// `caused by:` line per inner error.
impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !f.alternate() {
            return self.fmt_line(f);
        }
        self.fmt_tree(f, 0)
    }
}

impl core::error::Error for Error {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        self.inner_error()
            .map(|inner| inner as &(dyn core::error::Error + 'static))
    }
}

//! Formatting Feature
//!
//! The assembled buffer is handed to a formatter before it is returned.
//! - `ports`: SourceFormatter trait
//! - `command`: external program over stdin/stdout (goimports, gofmt)
//! - `syntax_check`: in-process validation without rewriting

mod command;
mod ports;
mod syntax_check;

pub use command::CommandFormatter;
pub use ports::SourceFormatter;
pub use syntax_check::SyntaxCheckFormatter;

use crate::config::FormatterKind;

/// Formatter selected by configuration
pub fn formatter_for(kind: FormatterKind) -> Box<dyn SourceFormatter> {
    match kind {
        FormatterKind::Goimports => Box::new(CommandFormatter::goimports()),
        FormatterKind::Gofmt => Box::new(CommandFormatter::gofmt()),
        FormatterKind::None => Box::new(SyntaxCheckFormatter::new()),
    }
}

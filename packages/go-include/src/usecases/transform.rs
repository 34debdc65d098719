//! Transformation Driver
//!
//! parse → plan directive edits → scan placeholders → resolve & encode →
//! apply splices → format. Any failure aborts the call and no bytes are
//! returned.
//!
//! # Example
//!
//! ```rust,ignore
//! use go_include::{transform_file, FormatterKind, Options};
//!
//! let options = Options::new().formatter(FormatterKind::Gofmt);
//! let generated = transform_file("main.go", &options)?;
//! std::fs::write("main_gen.go", generated)?;
//! ```

use std::path::Path;

use crate::config::Options;
use crate::errors::{IncludeError, Result};
use crate::features::directives::{CompilerDirective, DirectiveRewriter};
use crate::features::formatting::{formatter_for, SourceFormatter};
use crate::features::parsing::{GoTreeSitterParser, SourceParser, TextSpan};
use crate::features::placeholders::{PlaceholderCall, PlaceholderScanner, PlaceholderSplicer};
use crate::features::splicing::SplicePlan;

/// First line of every generated file
pub const GENERATED_HEADER: &str = "//Code generated by include. DO NOT EDIT.\n\n";

/// Unformatted result of one rewrite, with the bookkeeping of the pass
#[derive(Debug, Clone)]
pub struct Assembly {
    /// Header followed by the spliced source
    pub output: Vec<u8>,
    pub directives: Vec<CompilerDirective>,
    pub placeholders: Vec<PlaceholderCall>,
    /// Original ranges copied verbatim, in order
    pub copied: Vec<TextSpan>,
    /// Original ranges removed or replaced, in order
    pub consumed: Vec<TextSpan>,
}

/// Rewrites Go files whose placeholders declare file inclusions
pub struct IncludeTransformer<P, F> {
    parser: P,
    formatter: F,
}

impl<F: SourceFormatter> IncludeTransformer<GoTreeSitterParser, F> {
    /// Go parser with the given formatter
    pub fn with_formatter(formatter: F) -> Self {
        Self::new(GoTreeSitterParser::new(), formatter)
    }
}

impl<P: SourceParser, F: SourceFormatter> IncludeTransformer<P, F> {
    pub fn new(parser: P, formatter: F) -> Self {
        Self { parser, formatter }
    }

    /// Rewrite `source` without running the formatter.
    ///
    /// `filename` is only used in diagnostics.
    pub fn assemble(&self, filename: &str, source: &[u8], options: &Options) -> Result<Assembly> {
        let options = options.resolved();
        options.validate()?;

        let doc = self.parser.parse(source, filename)?;
        let mut plan = SplicePlan::new();

        let directives =
            DirectiveRewriter::new(&options.tag, &options.generators).plan(&doc, &mut plan);

        // Each call is resolved right after it is recognized, so the first
        // failing call in source order decides the error.
        let splicer = PlaceholderSplicer::new(&options);
        let mut placeholders = Vec::new();
        PlaceholderScanner::new(&options.namespace).visit(&doc, |call| {
            splicer.plan(&call, &mut plan)?;
            placeholders.push(call);
            Ok(())
        })?;

        let mut out = Vec::with_capacity(GENERATED_HEADER.len() + source.len());
        out.extend_from_slice(GENERATED_HEADER.as_bytes());
        let spliced = plan.apply(filename, doc.source(), out)?;

        Ok(Assembly {
            output: spliced.output,
            directives,
            placeholders,
            copied: spliced.copied,
            consumed: spliced.consumed,
        })
    }

    /// Rewrite and format `source`
    pub fn transform(&self, filename: &str, source: &[u8], options: &Options) -> Result<Vec<u8>> {
        let _span = tracing::info_span!("transform", file = filename).entered();

        let assembly = self.assemble(filename, source, options)?;
        tracing::info!(
            directives = assembly.directives.len(),
            placeholders = assembly.placeholders.len(),
            formatter = self.formatter.name(),
            "assembled generated source"
        );

        self.formatter.format(filename, &assembly.output)
    }

    /// Read `path` and rewrite it
    pub fn transform_file(&self, path: impl AsRef<Path>, options: &Options) -> Result<Vec<u8>> {
        let path = path.as_ref();
        let source = std::fs::read(path).map_err(|e| IncludeError::read(path, e))?;
        self.transform(&path.display().to_string(), &source, options)
    }
}

/// Rewrite `source` using the formatter chosen by `options.formatter`
pub fn transform(filename: &str, source: &[u8], options: &Options) -> Result<Vec<u8>> {
    IncludeTransformer::with_formatter(formatter_for(options.formatter))
        .transform(filename, source, options)
}

/// Read and rewrite `path` using the formatter chosen by `options.formatter`
pub fn transform_file(path: impl AsRef<Path>, options: &Options) -> Result<Vec<u8>> {
    IncludeTransformer::with_formatter(formatter_for(options.formatter))
        .transform_file(path, options)
}

//! Placeholder replacement planning

use crate::config::Options;
use crate::errors::Result;
use crate::features::encoding::{encode_bytes, encode_string};
use crate::features::placeholders::domain::{PlaceholderCall, Selector};
use crate::features::resolution::read_include;
use crate::features::splicing::{SpliceKind, SplicePlan};

/// Resolves placeholder targets and plans their literal replacements
pub struct PlaceholderSplicer<'a> {
    options: &'a Options,
}

impl<'a> PlaceholderSplicer<'a> {
    pub fn new(options: &'a Options) -> Self {
        Self { options }
    }

    /// Go literal replacing `call`; reads the target file once
    pub fn replacement(&self, call: &PlaceholderCall) -> Result<String> {
        let content = read_include(&call.target, self.options)?;
        Ok(match call.selector {
            Selector::String => encode_string(&content),
            Selector::Bytes => encode_bytes(&content),
        })
    }

    /// Add the replacement of `call` to `plan`
    pub fn plan(&self, call: &PlaceholderCall, plan: &mut SplicePlan) -> Result<()> {
        let replacement = self.replacement(call)?;
        plan.replace(call.span, replacement, SpliceKind::Placeholder);
        Ok(())
    }
}

//! Standard verification request

use std::fmt;
use verify_shared::Locale;

use super::base::{code_length_from_sentinel, BaseRequest};
use super::workflow::Workflow;
use crate::domain::wire::{Operation, WireParams, WireRequest};

/// Phone line categories a verification can be restricted to
///
/// Not generally available; the server returns an error for accounts
/// without access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineType {
    All,
    Mobile,
    Landline,
}

impl LineType {
    /// Value sent as the `type` parameter
    pub fn as_wire(&self) -> &'static str {
        match self {
            LineType::All => "ALL",
            LineType::Mobile => "MOBILE",
            LineType::Landline => "LANDLINE",
        }
    }
}

impl fmt::Display for LineType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_wire())
    }
}

/// Optional construction parameters of a [`VerifyRequest`]
///
/// Every option defaults to unset.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VerifyOptions {
    /// Sender id for SMS (11 characters or fewer); the server uses `VERIFY` when unset
    pub from: Option<String>,
    /// Code length (4 or 6)
    pub length: Option<u32>,
    /// Locale override
    pub locale: Option<Locale>,
    /// Line type restriction
    pub line_type: Option<LineType>,
}

impl VerifyOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from(mut self, from: impl Into<String>) -> Self {
        self.from = Some(from.into());
        self
    }

    /// Set the code length; a negative value (conventionally `-1`) means server default
    pub fn length(mut self, length: i32) -> Self {
        self.length = code_length_from_sentinel(length);
        self
    }

    pub fn locale(mut self, locale: Locale) -> Self {
        self.locale = Some(locale);
        self
    }

    pub fn line_type(mut self, line_type: LineType) -> Self {
        self.line_type = Some(line_type);
        self
    }
}

/// A standard verification request
#[derive(Debug, Clone, PartialEq)]
pub struct VerifyRequest {
    base: BaseRequest,
    brand: String,
    from: Option<String>,
    line_type: Option<LineType>,
    workflow: Option<Workflow>,
}

impl VerifyRequest {
    /// Create a request with every optional field unset
    ///
    /// # Arguments
    ///
    /// * `number` - Recipient's phone number in E.164 format
    /// * `brand` - Company or app name shown in the message (18 characters or fewer)
    pub fn new(number: impl Into<String>, brand: impl Into<String>) -> Self {
        Self::with_options(number, brand, VerifyOptions::default())
    }

    /// Create a request with a sender id
    pub fn with_from(
        number: impl Into<String>,
        brand: impl Into<String>,
        from: impl Into<String>,
    ) -> Self {
        Self::with_options(number, brand, VerifyOptions::new().from(from))
    }

    /// Create a request from a full set of construction options
    pub fn with_options(
        number: impl Into<String>,
        brand: impl Into<String>,
        options: VerifyOptions,
    ) -> Self {
        Self {
            base: BaseRequest::new(number, options.length, options.locale),
            brand: brand.into(),
            from: options.from,
            line_type: options.line_type,
            workflow: None,
        }
    }

    /// Shared request fields
    pub fn base(&self) -> &BaseRequest {
        &self.base
    }

    /// Mutable access to the shared fields (the number itself stays fixed)
    pub fn base_mut(&mut self) -> &mut BaseRequest {
        &mut self.base
    }

    pub fn number(&self) -> &str {
        self.base.number()
    }

    /// Company or app name the user is verifying for
    pub fn brand(&self) -> &str {
        &self.brand
    }

    pub fn from(&self) -> Option<&str> {
        self.from.as_deref()
    }

    pub fn set_from(&mut self, from: Option<String>) {
        self.from = from;
    }

    pub fn line_type(&self) -> Option<LineType> {
        self.line_type
    }

    pub fn set_line_type(&mut self, line_type: Option<LineType>) {
        self.line_type = line_type;
    }

    pub fn workflow(&self) -> Option<Workflow> {
        self.workflow
    }

    pub fn set_workflow(&mut self, workflow: Option<Workflow>) {
        self.workflow = workflow;
    }
}

impl WireRequest for VerifyRequest {
    fn operation(&self) -> Operation {
        Operation::Verify
    }

    fn to_wire_params(&self) -> WireParams {
        let mut params = WireParams::new();
        self.base.append_wire_params(&mut params);
        params.push("brand", self.brand.as_str());
        params.push_opt("sender_id", self.from.clone());
        params.push_opt("type", self.line_type.map(|t| t.as_wire()));
        params.push_opt("workflow_id", self.workflow.map(|w| w.id()));
        params
    }
}

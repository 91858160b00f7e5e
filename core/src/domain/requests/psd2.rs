//! PSD2 payment-confirmation verification request

use super::base::BaseRequest;
use super::workflow::Workflow;
use crate::domain::wire::{Operation, WireParams, WireRequest};

/// A verification that confirms a payment amount and payee
///
/// The shared optional fields (length, locale, country, PIN expiry,
/// next-event wait) behave exactly as they do for a standard verification.
#[derive(Debug, Clone, PartialEq)]
pub struct Psd2Request {
    base: BaseRequest,
    amount: f64,
    payee: String,
    workflow: Option<Workflow>,
}

impl Psd2Request {
    /// Create a PSD2 request
    ///
    /// # Arguments
    ///
    /// * `number` - Recipient's phone number in E.164 format
    /// * `amount` - Decimal amount of the payment to confirm, in Euros
    /// * `payee` - Alphanumeric name of the payment recipient shown to the user
    pub fn new(number: impl Into<String>, amount: f64, payee: impl Into<String>) -> Self {
        Self {
            base: BaseRequest::new(number, None, None),
            amount,
            payee: payee.into(),
            workflow: None,
        }
    }

    /// Create a PSD2 request using a specific delivery workflow
    pub fn with_workflow(
        number: impl Into<String>,
        amount: f64,
        payee: impl Into<String>,
        workflow: Workflow,
    ) -> Self {
        let mut request = Self::new(number, amount, payee);
        request.set_workflow(Some(workflow));
        request
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

    /// Payment amount in Euros
    pub fn amount(&self) -> f64 {
        self.amount
    }

    /// Name of the payment recipient
    pub fn payee(&self) -> &str {
        &self.payee
    }

    pub fn workflow(&self) -> Option<Workflow> {
        self.workflow
    }

    pub fn set_workflow(&mut self, workflow: Option<Workflow>) {
        self.workflow = workflow;
    }
}

impl WireRequest for Psd2Request {
    fn operation(&self) -> Operation {
        Operation::Psd2
    }

    fn to_wire_params(&self) -> WireParams {
        let mut params = WireParams::new();
        self.base.append_wire_params(&mut params);
        params.push("amount", self.amount);
        params.push("payee", self.payee.as_str());
        params.push_opt("workflow_id", self.workflow.map(|w| w.id()));
        params
    }
}

//! Fields shared by standard and PSD2 verification requests

use verify_shared::Locale;

use crate::domain::wire::WireParams;

/// Map the historic `-1` "server default" length onto `None`
///
/// Any negative value is treated as the sentinel. Non-negative values are
/// passed through untouched; the server enforces the legal set {4, 6}.
pub fn code_length_from_sentinel(length: i32) -> Option<u32> {
    u32::try_from(length).ok()
}

/// Shared part of a verification request
///
/// Every optional field starts unset and is omitted from the wire until a
/// value is given. Ranges and lengths are documented but not validated here;
/// the server rejects out-of-range values with a non-OK status.
#[derive(Debug, Clone, PartialEq)]
pub struct BaseRequest {
    number: String,
    length: Option<u32>,
    locale: Option<Locale>,
    country: Option<String>,
    pin_expiry: Option<u32>,
    next_event_wait: Option<u32>,
}

impl BaseRequest {
    /// Create the shared part of a request
    ///
    /// # Arguments
    ///
    /// * `number` - Recipient's phone number in E.164 format
    /// * `length` - Code length (4 or 6), `None` for the server default
    /// * `locale` - Message language, `None` to derive it from the number
    pub fn new(number: impl Into<String>, length: Option<u32>, locale: Option<Locale>) -> Self {
        Self {
            number: number.into(),
            length,
            locale,
            country: None,
            pin_expiry: None,
            next_event_wait: None,
        }
    }

    /// The recipient's phone number given at construction
    pub fn number(&self) -> &str {
        &self.number
    }

    /// Length of the code to send, `None` for the server default
    pub fn length(&self) -> Option<u32> {
        self.length
    }

    pub fn set_length(&mut self, length: Option<u32>) {
        self.length = length;
    }

    /// Locale override; when unset the server picks one from the number's country code
    pub fn locale(&self) -> Option<&Locale> {
        self.locale.as_ref()
    }

    pub fn set_locale(&mut self, locale: Option<Locale>) {
        self.locale = locale;
    }

    /// Locale as the lowercase dashed tag sent on the wire (e.g. `en-gb`)
    pub fn dashed_locale(&self) -> Option<String> {
        self.locale.as_ref().map(Locale::dashed)
    }

    /// Two-character country code of the destination number
    pub fn country(&self) -> Option<&str> {
        self.country.as_deref()
    }

    /// Set the destination country (e.g. `GB`, `US`)
    ///
    /// Useful when the number is in national format; the server then works
    /// out the international number.
    pub fn set_country(&mut self, country: Option<String>) {
        self.country = country;
    }

    /// PIN validity in seconds; the server default is 300
    pub fn pin_expiry(&self) -> Option<u32> {
        self.pin_expiry
    }

    pub fn set_pin_expiry(&mut self, pin_expiry: Option<u32>) {
        self.pin_expiry = pin_expiry;
    }

    /// Wait between delivery attempts in seconds (60 to 900)
    pub fn next_event_wait(&self) -> Option<u32> {
        self.next_event_wait
    }

    pub fn set_next_event_wait(&mut self, next_event_wait: Option<u32>) {
        self.next_event_wait = next_event_wait;
    }

    /// Write the shared fields to `params`
    pub(crate) fn append_wire_params(&self, params: &mut WireParams) {
        params.push("number", self.number.as_str());
        params.push_opt("code_length", self.length);
        params.push_opt("lg", self.dashed_locale());
        params.push_opt("country", self.country.clone());
        params.push_opt("pin_expiry", self.pin_expiry);
        params.push_opt("next_event_wait", self.next_event_wait);
    }
}

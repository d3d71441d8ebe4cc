//! Endpoint designators in the RapidHarness `Device` / `Device.Pin` form.

/// One side of a connection, split into device and pin designators.
///
/// RapidHarness writes endpoints as `Device` for pinless devices (ring
/// terminals, splices) or `Device.Pin` for connector pins. The split is on
/// the first `.` only; any further dot-separated segments are discarded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Endpoint {
    device: Option<String>,
    pin: Option<String>,
}

impl Endpoint {
    /// Parse a raw endpoint designator.
    ///
    /// An absent or empty designator yields an endpoint with neither a
    /// device nor a pin. This is a pure, total function.
    pub fn parse(raw: Option<&str>) -> Self {
        let raw = match raw {
            Some(s) if !s.is_empty() => s,
            _ => return Self::default(),
        };

        let mut segments = raw.split('.');
        let device = segments.next().map(str::to_string);
        let pin = segments.next().map(str::to_string);

        Self { device, pin }
    }

    /// Device/connector portion of the designator, if any.
    pub fn device_designator(&self) -> Option<&str> {
        self.device.as_deref()
    }

    /// Pin portion of the designator. `None` for pinless devices.
    pub fn pin_designator(&self) -> Option<&str> {
        self.pin.as_deref()
    }

    /// Consume the endpoint, returning `(device, pin)`.
    pub fn into_parts(self) -> (Option<String>, Option<String>) {
        (self.device, self.pin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_device_only() {
        let ep = Endpoint::parse(Some("S12"));
        assert_eq!(ep.device_designator(), Some("S12"));
        assert_eq!(ep.pin_designator(), None);
    }

    #[test]
    fn test_parse_device_and_pin() {
        let ep = Endpoint::parse(Some("J4.3"));
        assert_eq!(ep.device_designator(), Some("J4"));
        assert_eq!(ep.pin_designator(), Some("3"));
    }

    #[test]
    fn test_parse_absent() {
        let ep = Endpoint::parse(None);
        assert_eq!(ep.device_designator(), None);
        assert_eq!(ep.pin_designator(), None);
    }

    #[test]
    fn test_parse_empty_string() {
        let ep = Endpoint::parse(Some(""));
        assert_eq!(ep.device_designator(), None);
        assert_eq!(ep.pin_designator(), None);
    }

    #[test]
    fn test_parse_trailing_dot_keeps_empty_pin() {
        let ep = Endpoint::parse(Some("J4."));
        assert_eq!(ep.device_designator(), Some("J4"));
        assert_eq!(ep.pin_designator(), Some(""));
    }

    #[test]
    fn test_parse_multiple_dots_discards_remainder() {
        // Only the first two segments carry meaning.
        let ep = Endpoint::parse(Some("J4.3.A"));
        assert_eq!(ep.device_designator(), Some("J4"));
        assert_eq!(ep.pin_designator(), Some("3"));
    }

    #[test]
    fn test_parse_alphanumeric_pin() {
        let ep = Endpoint::parse(Some("X101.A7"));
        assert_eq!(ep.device_designator(), Some("X101"));
        assert_eq!(ep.pin_designator(), Some("A7"));
    }

    #[test]
    fn test_into_parts() {
        let (device, pin) = Endpoint::parse(Some("J4.3")).into_parts();
        assert_eq!(device.as_deref(), Some("J4"));
        assert_eq!(pin.as_deref(), Some("3"));
    }
}

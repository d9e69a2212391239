/// A service that resolves a textual address to geographic coordinates.
///
/// Implementations must not propagate faults of the underlying
/// capability: any transport error, error response, or empty result is
/// reported as `None`. This is the only network-dependent seam of the
/// system and the place where tests substitute a stub.
pub trait GeoCodingGateway {
    fn resolve_address_lat_lng(&self, address: &str) -> Option<(f64, f64)>;
}

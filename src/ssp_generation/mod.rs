/// Domain layer - OpenControl components, the OSCAL SSP model and the
/// services that map one onto the other. Free of I/O.
pub mod domain;
pub mod services;

//! Shared primitive types used across the generator.

/// Sequential identifier of a customer row.
pub type CustomerId = u32;

/// Sequential identifier of an asset row.
pub type AssetId = u32;

/// Sequential identifier of a technician row.
pub type TechnicianId = u32;

/// Globally unique, opaque ticket identifier (UUID v4 text).
pub type TicketId = String;

/// Ticket urgency level, 1..=3. 1 is the most urgent.
pub type Severity = u8;

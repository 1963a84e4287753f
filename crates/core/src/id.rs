//! Unique identifiers for Tasklane entities.
//!
//! Every identifier is a [`domain-key`](https://crates.io/crates/domain-key)
//! `Uuid<D>` wrapper parameterized by its own domain marker, so a [`TaskId`]
//! can never be passed where a [`ProcessId`] is expected.
//!
//! All ID types are `Copy` and support `new()` (random v4), `nil()`, `parse(&str)`,
//! `Display`, `FromStr` and serde as a plain UUID string.

use domain_key::define_uuid;

pub use domain_key::UuidParseError;

define_uuid!(pub TaskIdDomain => TaskId);
define_uuid!(pub ProcessIdDomain => ProcessId);
define_uuid!(pub PrincipalIdDomain => PrincipalId);
define_uuid!(pub TenantIdDomain => TenantId);
define_uuid!(pub TenantUserIdDomain => TenantUserId);
define_uuid!(pub DocumentIdDomain => DocumentId);

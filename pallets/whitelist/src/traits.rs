//! Read-only view of the whitelist registry for consuming pallets.

use frame_support::pallet_prelude::*;

/// Membership lookups against a registry of whitelist instances.
///
/// Consumers hold an instance id and resolve it on every check, so swapping
/// the held id takes effect for the next call without copying any members.
pub trait InspectWhitelist<AccountId> {
    /// Identifier of a single whitelist instance.
    type WhitelistId: Parameter + Member + MaxEncodedLen + Copy;

    /// Whether an instance with this id has been created.
    fn exists(id: &Self::WhitelistId) -> bool;

    /// Whether `who` is currently a member of instance `id`.
    ///
    /// Unknown instances have no members.
    fn is_whitelisted(id: &Self::WhitelistId, who: &AccountId) -> bool;

    /// Create an instance owned by `owner` holding `members`.
    #[cfg(feature = "runtime-benchmarks")]
    fn create_with_members(owner: &AccountId, members: &[AccountId]) -> Self::WhitelistId;
}

#![cfg_attr(not(feature = "std"), no_std)]
// Constant weights until benchmark output replaces `weights.rs`
#![allow(deprecated)]
#![allow(clippy::let_unit_value)]

//! Role-gated, whitelist-restricted fungible ledger.
//!
//! Every balance-changing call passes two gates before touching storage:
//! a role check (owner, minter or burner) and a membership check against the
//! whitelist instance currently held in [`ActiveWhitelist`]. The instance is
//! resolved on each call, so `set_whitelist` changes gating for every
//! following call without touching balances.
//!
//! Roles propagate: any minter may appoint another minter and any burner
//! another burner. The owner is a separate single account that can swap the
//! whitelist, revoke roles and reclaim balance held by the ledger's own account.

use frame_support::{dispatch::DispatchResult, ensure, pallet_prelude::*, PalletId};
use frame_system::{ensure_signed, pallet_prelude::*};
use pallet_whitelist::InspectWhitelist;
use sp_runtime::traits::AccountIdConversion;
use sp_std::prelude::*;

pub use pallet::*;
pub use weights::WeightInfo;

pub mod weights;

#[cfg(test)]
mod mock;


#[cfg(feature = "runtime-benchmarks")]
mod benchmarking;

const LOG_TARGET: &str = "pallet-leveraged-token";

/// The current storage version.
const STORAGE_VERSION: StorageVersion = StorageVersion::new(1);

/// Id type of the whitelist registry the ledger is wired to.
pub type WhitelistIdOf<T> = <<T as Config>::Whitelist as InspectWhitelist<
    <T as frame_system::Config>::AccountId,
>>::WhitelistId;

#[frame_support::pallet]
pub mod pallet {
    use super::*;

    #[pallet::config]
    pub trait Config: frame_system::Config {
        type RuntimeEvent: From<Event<Self>> + IsType<<Self as frame_system::Config>::RuntimeEvent>;

        /// Registry holding the whitelist instances this ledger can be pointed at.
        type Whitelist: InspectWhitelist<Self::AccountId>;

        /// Derives the ledger's own account, the target of `reclaim_token`.
        #[pallet::constant]
        type PalletId: Get<PalletId>;

        type WeightInfo: WeightInfo;
    }

    #[pallet::pallet]
    #[pallet::storage_version(STORAGE_VERSION)]
    pub struct Pallet<T>(_);

    /// Token name (e.g., "Leveraged Bitcoin")
    #[pallet::storage]
    #[pallet::getter(fn token_name)]
    pub type TokenName<T> = StorageValue<_, BoundedVec<u8, ConstU32<64>>, ValueQuery>;

    /// Token symbol (e.g., "LBTC")
    #[pallet::storage]
    #[pallet::getter(fn token_symbol)]
    pub type TokenSymbol<T> = StorageValue<_, BoundedVec<u8, ConstU32<16>>, ValueQuery>;

    /// Symbol of the tracked underlying asset (e.g., "BTC")
    #[pallet::storage]
    #[pallet::getter(fn underlying)]
    pub type Underlying<T> = StorageValue<_, BoundedVec<u8, ConstU32<16>>, ValueQuery>;

    #[pallet::storage]
    #[pallet::getter(fn decimals)]
    pub type Decimals<T> = StorageValue<_, u8, ValueQuery>;

    /// Total token supply, always equal to the sum of `Balances`
    #[pallet::storage]
    #[pallet::getter(fn total_supply)]
    pub type TotalSupply<T> = StorageValue<_, u128, ValueQuery>;

    /// Account balances
    #[pallet::storage]
    #[pallet::getter(fn balance_of)]
    pub type Balances<T: Config> = StorageMap<_, Blake2_128Concat, T::AccountId, u128, ValueQuery>;

    /// Remaining amount `spender` may move out of `owner`'s balance
    #[pallet::storage]
    #[pallet::getter(fn allowance)]
    pub type Allowances<T: Config> = StorageDoubleMap<
        _,
        Blake2_128Concat,
        T::AccountId,
        Blake2_128Concat,
        T::AccountId,
        u128,
        ValueQuery,
    >;

    #[pallet::storage]
    #[pallet::getter(fn owner)]
    pub type Owner<T: Config> = StorageValue<_, T::AccountId, OptionQuery>;

    #[pallet::storage]
    #[pallet::getter(fn is_minter)]
    pub type Minters<T: Config> = StorageMap<_, Blake2_128Concat, T::AccountId, bool, ValueQuery>;

    #[pallet::storage]
    #[pallet::getter(fn is_burner)]
    pub type Burners<T: Config> = StorageMap<_, Blake2_128Concat, T::AccountId, bool, ValueQuery>;

    /// Whitelist instance consulted by every gated call
    #[pallet::storage]
    #[pallet::getter(fn active_whitelist)]
    pub type ActiveWhitelist<T: Config> = StorageValue<_, WhitelistIdOf<T>, OptionQuery>;

    #[pallet::event]
    #[pallet::generate_deposit(pub(super) fn deposit_event)]
    pub enum Event<T: Config> {
        /// Tokens transferred from one account to another
        Transferred { from: T::AccountId, to: T::AccountId, amount: u128 },
        /// New tokens minted
        Minted { to: T::AccountId, amount: u128 },
        /// Tokens destroyed from a whitelisted holder (own balance or allowance)
        Burned { from: T::AccountId, amount: u128 },
        /// Tokens seized and destroyed from a holder outside the whitelist
        BlacklistedBurned { from: T::AccountId, burner: T::AccountId, amount: u128 },
        /// Allowance set
        Approval { owner: T::AccountId, spender: T::AccountId, amount: u128 },
        MinterAdded { account: T::AccountId },
        MinterRemoved { account: T::AccountId },
        BurnerAdded { account: T::AccountId },
        BurnerRemoved { account: T::AccountId },
        OwnershipTransferred { previous: T::AccountId, new: T::AccountId },
        /// Gated calls now consult a different whitelist instance
        WhitelistChanged { whitelist: WhitelistIdOf<T> },
        /// Balance held by the ledger's own account swept to the owner
        Reclaimed { to: T::AccountId, amount: u128 },
    }

    #[pallet::error]
    pub enum Error<T> {
        /// Caller lacks the required role or ownership.
        Unauthorized,
        /// Account is absent from the active whitelist.
        NotWhitelisted,
        /// Account is still on the active whitelist; use `burn_from` instead.
        StillWhitelisted,
        InsufficientBalance,
        InsufficientAllowance,
        Overflow,
        /// No whitelist has been set, every gated call is rejected.
        WhitelistNotSet,
        /// The registry has no whitelist under this id.
        UnknownWhitelist,
    }

    #[pallet::hooks]
    impl<T: Config> Hooks<BlockNumberFor<T>> for Pallet<T> {
        #[cfg(feature = "try-runtime")]
        fn try_state(_n: BlockNumberFor<T>) -> Result<(), sp_runtime::TryRuntimeError> {
            Self::do_try_state()
        }
    }

    #[pallet::call]
    impl<T: Config> Pallet<T> {
        /// Create `amount` new tokens for `to`. Caller must be a minter and `to` whitelisted.
        #[pallet::call_index(0)]
        #[pallet::weight(T::WeightInfo::mint())]
        pub fn mint(origin: OriginFor<T>, to: T::AccountId, amount: u128) -> DispatchResult {
            let who = ensure_signed(origin)?;
            ensure!(Minters::<T>::get(&who), Error::<T>::Unauthorized);
            Self::ensure_whitelisted(&to)?;

            let supply = TotalSupply::<T>::get().checked_add(amount).ok_or(Error::<T>::Overflow)?;
            let balance = Balances::<T>::get(&to).checked_add(amount).ok_or(Error::<T>::Overflow)?;
            TotalSupply::<T>::put(supply);
            Balances::<T>::insert(&to, balance);

            Self::deposit_event(Event::Minted { to, amount });
            Ok(())
        }

        /// Destroy tokens from the caller's own balance.
        ///
        /// Only the burner role is checked; the caller need not be whitelisted.
        #[pallet::call_index(1)]
        #[pallet::weight(T::WeightInfo::burn())]
        pub fn burn(origin: OriginFor<T>, amount: u128) -> DispatchResult {
            let who = ensure_signed(origin)?;
            ensure!(Burners::<T>::get(&who), Error::<T>::Unauthorized);
            Self::do_burn(&who, amount)?;
            Self::deposit_event(Event::Burned { from: who, amount });
            Ok(())
        }

        /// Destroy tokens from a whitelisted `owner` who approved the caller.
        #[pallet::call_index(2)]
        #[pallet::weight(T::WeightInfo::burn_from())]
        pub fn burn_from(origin: OriginFor<T>, owner: T::AccountId, amount: u128) -> DispatchResult {
            let who = ensure_signed(origin)?;
            ensure!(Burners::<T>::get(&who), Error::<T>::Unauthorized);
            Self::ensure_whitelisted(&owner)?;

            let remaining = Self::allowance_after_spend(&owner, &who, amount)?;
            Self::do_burn(&owner, amount)?;
            Self::set_allowance(&owner, &who, remaining);

            Self::deposit_event(Event::Burned { from: owner, amount });
            Ok(())
        }

        /// Destroy tokens held by an account outside the active whitelist.
        ///
        /// No allowance is needed. Fails for whitelisted holders, which go
        /// through `burn_from`.
        #[pallet::call_index(3)]
        #[pallet::weight(T::WeightInfo::burn_blacklisted())]
        pub fn burn_blacklisted(
            origin: OriginFor<T>,
            owner: T::AccountId,
            amount: u128,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;
            ensure!(Burners::<T>::get(&who), Error::<T>::Unauthorized);
            let whitelist = Self::current_whitelist()?;
            ensure!(
                !T::Whitelist::is_whitelisted(&whitelist, &owner),
                Error::<T>::StillWhitelisted
            );

            Self::do_burn(&owner, amount)?;

            log::info!(
                target: LOG_TARGET,
                "burner {who:?} destroyed {amount} from blacklisted {owner:?}"
            );
            Self::deposit_event(Event::BlacklistedBurned { from: owner, burner: who, amount });
            Ok(())
        }

        #[pallet::call_index(4)]
        #[pallet::weight(T::WeightInfo::transfer())]
        pub fn transfer(origin: OriginFor<T>, to: T::AccountId, amount: u128) -> DispatchResult {
            let sender = ensure_signed(origin)?;
            Self::ensure_transfer_allowed(&sender, &to)?;
            Self::do_transfer(&sender, &to, amount)?;
            Self::deposit_event(Event::Transferred { from: sender, to, amount });
            Ok(())
        }

        /// Move tokens out of `from` using the caller's allowance.
        #[pallet::call_index(5)]
        #[pallet::weight(T::WeightInfo::transfer_from())]
        pub fn transfer_from(
            origin: OriginFor<T>,
            from: T::AccountId,
            to: T::AccountId,
            amount: u128,
        ) -> DispatchResult {
            let spender = ensure_signed(origin)?;
            Self::ensure_transfer_allowed(&from, &to)?;

            let remaining = Self::allowance_after_spend(&from, &spender, amount)?;
            Self::do_transfer(&from, &to, amount)?;
            Self::set_allowance(&from, &spender, remaining);

            Self::deposit_event(Event::Transferred { from, to, amount });
            Ok(())
        }

        /// Set the allowance of `spender` over the caller's balance, replacing any previous value.
        #[pallet::call_index(6)]
        #[pallet::weight(T::WeightInfo::approve())]
        pub fn approve(origin: OriginFor<T>, spender: T::AccountId, amount: u128) -> DispatchResult {
            let owner = ensure_signed(origin)?;
            Self::set_allowance(&owner, &spender, amount);
            Self::deposit_event(Event::Approval { owner, spender, amount });
            Ok(())
        }

        /// Grant the minter role. Any existing minter may call this.
        #[pallet::call_index(7)]
        #[pallet::weight(T::WeightInfo::add_minter())]
        pub fn add_minter(origin: OriginFor<T>, account: T::AccountId) -> DispatchResult {
            let who = ensure_signed(origin)?;
            ensure!(Minters::<T>::get(&who), Error::<T>::Unauthorized);
            Minters::<T>::insert(&account, true);
            Self::deposit_event(Event::MinterAdded { account });
            Ok(())
        }

        /// Grant the burner role. Any existing burner may call this.
        #[pallet::call_index(8)]
        #[pallet::weight(T::WeightInfo::add_burner())]
        pub fn add_burner(origin: OriginFor<T>, account: T::AccountId) -> DispatchResult {
            let who = ensure_signed(origin)?;
            ensure!(Burners::<T>::get(&who), Error::<T>::Unauthorized);
            Burners::<T>::insert(&account, true);
            Self::deposit_event(Event::BurnerAdded { account });
            Ok(())
        }

        #[pallet::call_index(9)]
        #[pallet::weight(T::WeightInfo::remove_minter())]
        pub fn remove_minter(origin: OriginFor<T>, account: T::AccountId) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::ensure_owner(&who)?;
            Minters::<T>::remove(&account);
            Self::deposit_event(Event::MinterRemoved { account });
            Ok(())
        }

        #[pallet::call_index(10)]
        #[pallet::weight(T::WeightInfo::remove_burner())]
        pub fn remove_burner(origin: OriginFor<T>, account: T::AccountId) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::ensure_owner(&who)?;
            Burners::<T>::remove(&account);
            Self::deposit_event(Event::BurnerRemoved { account });
            Ok(())
        }

        #[pallet::call_index(11)]
        #[pallet::weight(T::WeightInfo::remove_minter())]
        pub fn renounce_minter(origin: OriginFor<T>) -> DispatchResult {
            let who = ensure_signed(origin)?;
            ensure!(Minters::<T>::get(&who), Error::<T>::Unauthorized);
            Minters::<T>::remove(&who);
            Self::deposit_event(Event::MinterRemoved { account: who });
            Ok(())
        }

        #[pallet::call_index(12)]
        #[pallet::weight(T::WeightInfo::remove_burner())]
        pub fn renounce_burner(origin: OriginFor<T>) -> DispatchResult {
            let who = ensure_signed(origin)?;
            ensure!(Burners::<T>::get(&who), Error::<T>::Unauthorized);
            Burners::<T>::remove(&who);
            Self::deposit_event(Event::BurnerRemoved { account: who });
            Ok(())
        }

        /// Hand ownership to `new_owner` in a single step.
        #[pallet::call_index(13)]
        #[pallet::weight(T::WeightInfo::transfer_ownership())]
        pub fn transfer_ownership(origin: OriginFor<T>, new_owner: T::AccountId) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::ensure_owner(&who)?;
            Owner::<T>::put(&new_owner);

            log::info!(target: LOG_TARGET, "ownership transferred from {who:?} to {new_owner:?}");
            Self::deposit_event(Event::OwnershipTransferred { previous: who, new: new_owner });
            Ok(())
        }

        /// Point all gated calls at another whitelist instance.
        ///
        /// Existing balances are left as they are; only later calls see the new set.
        #[pallet::call_index(14)]
        #[pallet::weight(T::WeightInfo::set_whitelist())]
        pub fn set_whitelist(origin: OriginFor<T>, whitelist: WhitelistIdOf<T>) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::ensure_owner(&who)?;
            ensure!(T::Whitelist::exists(&whitelist), Error::<T>::UnknownWhitelist);
            ActiveWhitelist::<T>::put(whitelist);

            log::info!(target: LOG_TARGET, "active whitelist set to {whitelist:?}");
            Self::deposit_event(Event::WhitelistChanged { whitelist });
            Ok(())
        }

        /// Sweep the ledger account's own balance to the owner.
        ///
        /// Bypasses the whitelist: neither the ledger account nor the owner
        /// needs to be a member.
        #[pallet::call_index(15)]
        #[pallet::weight(T::WeightInfo::reclaim_token())]
        pub fn reclaim_token(origin: OriginFor<T>) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::ensure_owner(&who)?;

            let vault = Self::account_id();
            let amount = Balances::<T>::get(&vault);
            if vault != who {
                let balance = Balances::<T>::get(&who).checked_add(amount).ok_or(Error::<T>::Overflow)?;
                Balances::<T>::remove(&vault);
                Balances::<T>::insert(&who, balance);
            }

            log::info!(target: LOG_TARGET, "owner {who:?} reclaimed {amount}");
            Self::deposit_event(Event::Reclaimed { to: who, amount });
            Ok(())
        }
    }

    impl<T: Config> Pallet<T> {
        /// Account holding balance sent to the ledger itself.
        pub fn account_id() -> T::AccountId {
            T::PalletId::get().into_account_truncating()
        }

        fn ensure_owner(who: &T::AccountId) -> DispatchResult {
            ensure!(Owner::<T>::get().as_ref() == Some(who), Error::<T>::Unauthorized);
            Ok(())
        }

        fn current_whitelist() -> Result<WhitelistIdOf<T>, DispatchError> {
            ActiveWhitelist::<T>::get().ok_or_else(|| Error::<T>::WhitelistNotSet.into())
        }

        fn ensure_whitelisted(who: &T::AccountId) -> DispatchResult {
            let whitelist = Self::current_whitelist()?;
            if !T::Whitelist::is_whitelisted(&whitelist, who) {
                log::debug!(target: LOG_TARGET, "rejected: {who:?} not on whitelist {whitelist:?}");
                return Err(Error::<T>::NotWhitelisted.into());
            }
            Ok(())
        }

        /// Both ends of a value transfer must be on the active whitelist.
        fn ensure_transfer_allowed(from: &T::AccountId, to: &T::AccountId) -> DispatchResult {
            let whitelist = Self::current_whitelist()?;
            if !T::Whitelist::is_whitelisted(&whitelist, from) {
                log::debug!(target: LOG_TARGET, "transfer rejected: sender {from:?} not whitelisted");
                return Err(Error::<T>::NotWhitelisted.into());
            }
            if !T::Whitelist::is_whitelisted(&whitelist, to) {
                log::debug!(target: LOG_TARGET, "transfer rejected: recipient {to:?} not whitelisted");
                return Err(Error::<T>::NotWhitelisted.into());
            }
            Ok(())
        }

        fn allowance_after_spend(
            owner: &T::AccountId,
            spender: &T::AccountId,
            amount: u128,
        ) -> Result<u128, DispatchError> {
            Allowances::<T>::get(owner, spender)
                .checked_sub(amount)
                .ok_or_else(|| Error::<T>::InsufficientAllowance.into())
        }

        fn set_allowance(owner: &T::AccountId, spender: &T::AccountId, amount: u128) {
            if amount == 0 {
                Allowances::<T>::remove(owner, spender);
            } else {
                Allowances::<T>::insert(owner, spender, amount);
            }
        }

        /// Debit `from` and shrink the supply. Writes nothing on failure.
        fn do_burn(from: &T::AccountId, amount: u128) -> DispatchResult {
            let balance =
                Balances::<T>::get(from).checked_sub(amount).ok_or(Error::<T>::InsufficientBalance)?;
            let supply = TotalSupply::<T>::get().checked_sub(amount).ok_or(Error::<T>::Overflow)?;
            Balances::<T>::insert(from, balance);
            TotalSupply::<T>::put(supply);
            Ok(())
        }

        /// Move `amount` between accounts. Writes nothing on failure.
        fn do_transfer(from: &T::AccountId, to: &T::AccountId, amount: u128) -> DispatchResult {
            let from_balance =
                Balances::<T>::get(from).checked_sub(amount).ok_or(Error::<T>::InsufficientBalance)?;
            if from == to {
                return Ok(());
            }
            let to_balance = Balances::<T>::get(to).checked_add(amount).ok_or(Error::<T>::Overflow)?;
            Balances::<T>::insert(from, from_balance);
            Balances::<T>::insert(to, to_balance);
            Ok(())
        }

        /// Check that the sum of all balances equals the total supply.
        #[cfg(any(feature = "try-runtime", test))]
        pub fn do_try_state() -> Result<(), sp_runtime::TryRuntimeError> {
            let sum = Balances::<T>::iter_values()
                .try_fold(0u128, |acc, balance| acc.checked_add(balance))
                .ok_or(sp_runtime::TryRuntimeError::Other("sum of balances overflows"))?;
            ensure!(sum == TotalSupply::<T>::get(), "total supply differs from sum of balances");
            Ok(())
        }
    }

    #[pallet::genesis_config]
    #[derive(frame_support::DefaultNoBound)]
    pub struct GenesisConfig<T: Config> {
        /// Initial owner
        pub owner: Option<T::AccountId>,
        /// Token name
        pub token_name: Vec<u8>,
        /// Token symbol
        pub token_symbol: Vec<u8>,
        /// Underlying asset symbol
        pub underlying: Vec<u8>,
        /// Token decimals
        pub decimals: u8,
        /// Accounts holding the minter role at genesis
        pub minters: Vec<T::AccountId>,
        /// Accounts holding the burner role at genesis
        pub burners: Vec<T::AccountId>,
        /// Initial token mints (account, amount), not subject to the whitelist
        pub initial_balances: Vec<(T::AccountId, u128)>,
    }

    #[pallet::genesis_build]
    impl<T: Config> BuildGenesisConfig for GenesisConfig<T> {
        fn build(&self) {
            let name: BoundedVec<u8, ConstU32<64>> =
                self.token_name.clone().try_into().expect("Token name too long (max 64 bytes)");
            TokenName::<T>::put(name);

            let symbol: BoundedVec<u8, ConstU32<16>> =
                self.token_symbol.clone().try_into().expect("Token symbol too long (max 16 bytes)");
            TokenSymbol::<T>::put(symbol);

            let underlying: BoundedVec<u8, ConstU32<16>> = self
                .underlying
                .clone()
                .try_into()
                .expect("Underlying symbol too long (max 16 bytes)");
            Underlying::<T>::put(underlying);

            Decimals::<T>::put(self.decimals);

            if let Some(ref owner) = self.owner {
                Owner::<T>::put(owner);
            }
            for account in &self.minters {
                Minters::<T>::insert(account, true);
            }
            for account in &self.burners {
                Burners::<T>::insert(account, true);
            }

            let mut total: u128 = 0;
            for (account, amount) in &self.initial_balances {
                Balances::<T>::mutate(account, |balance| {
                    *balance = balance.checked_add(*amount).expect("Initial balance overflows u128")
                });
                total = total.checked_add(*amount).expect("Initial supply overflows u128");
            }
            TotalSupply::<T>::put(total);
        }
    }
}

#![cfg_attr(not(feature = "std"), no_std)]
// Constant weights until benchmark output replaces `weights.rs`
#![allow(deprecated)]
#![allow(clippy::let_unit_value)]

//! Registry of approved participant sets.
//!
//! Each whitelist is an independent instance with its own members and admins.
//! Membership is binary and mutations are idempotent: adding a present account
//! or removing an absent one succeeds without error.

use frame_support::{dispatch::DispatchResult, ensure, pallet_prelude::*};
use frame_system::{ensure_signed, pallet_prelude::*};
use sp_std::prelude::*;

pub use pallet::*;
pub use traits::InspectWhitelist;
pub use weights::WeightInfo;

pub mod traits;
pub mod weights;

#[cfg(test)]
mod mock;


#[cfg(feature = "runtime-benchmarks")]
mod benchmarking;

const LOG_TARGET: &str = "pallet-whitelist";

/// The current storage version.
const STORAGE_VERSION: StorageVersion = StorageVersion::new(1);

/// Sequential identifier of a whitelist instance.
pub type WhitelistId = u32;

#[frame_support::pallet]
pub mod pallet {
    use super::*;

    #[pallet::config]
    pub trait Config: frame_system::Config {
        type RuntimeEvent: From<Event<Self>> + IsType<<Self as frame_system::Config>::RuntimeEvent>;

        /// Upper bound on accounts accepted by a single `batch_add_whitelisted` call.
        #[pallet::constant]
        type MaxBatchSize: Get<u32>;

        type WeightInfo: WeightInfo;
    }

    #[pallet::pallet]
    #[pallet::storage_version(STORAGE_VERSION)]
    pub struct Pallet<T>(_);

    /// Id handed to the next created whitelist
    #[pallet::storage]
    #[pallet::getter(fn next_whitelist_id)]
    pub type NextWhitelistId<T> = StorageValue<_, WhitelistId, ValueQuery>;

    /// Creator of each whitelist instance
    #[pallet::storage]
    #[pallet::getter(fn whitelist_owner)]
    pub type Owners<T: Config> = StorageMap<_, Twox64Concat, WhitelistId, T::AccountId, OptionQuery>;

    /// Accounts allowed to change membership of an instance
    #[pallet::storage]
    #[pallet::getter(fn is_whitelist_admin)]
    pub type Admins<T: Config> = StorageDoubleMap<
        _,
        Twox64Concat,
        WhitelistId,
        Blake2_128Concat,
        T::AccountId,
        bool,
        ValueQuery,
    >;

    /// Members of each instance
    #[pallet::storage]
    #[pallet::getter(fn is_member)]
    pub type Members<T: Config> = StorageDoubleMap<
        _,
        Twox64Concat,
        WhitelistId,
        Blake2_128Concat,
        T::AccountId,
        bool,
        ValueQuery,
    >;

    #[pallet::event]
    #[pallet::generate_deposit(pub(super) fn deposit_event)]
    pub enum Event<T: Config> {
        /// A new whitelist instance was created
        Created { whitelist: WhitelistId, owner: T::AccountId },
        /// Account added to a whitelist
        Whitelisted { whitelist: WhitelistId, account: T::AccountId },
        /// Account removed from a whitelist
        RemovedFromWhitelist { whitelist: WhitelistId, account: T::AccountId },
        /// Account granted admin rights over a whitelist
        AdminAdded { whitelist: WhitelistId, account: T::AccountId },
        /// Account gave up admin rights over a whitelist
        AdminRenounced { whitelist: WhitelistId, account: T::AccountId },
    }

    #[pallet::error]
    pub enum Error<T> {
        /// No whitelist exists under this id.
        UnknownWhitelist,
        /// Caller is not an admin of this whitelist.
        NotWhitelistAdmin,
        /// More accounts than `MaxBatchSize` in one batch.
        BatchTooLarge,
        /// Whitelist id space exhausted.
        Overflow,
    }

    #[pallet::call]
    impl<T: Config> Pallet<T> {
        /// Create an empty whitelist. The caller becomes its owner and first admin.
        #[pallet::call_index(0)]
        #[pallet::weight(T::WeightInfo::create_whitelist())]
        pub fn create_whitelist(origin: OriginFor<T>) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::do_create(&who)?;
            Ok(())
        }

        #[pallet::call_index(1)]
        #[pallet::weight(T::WeightInfo::add_whitelisted())]
        pub fn add_whitelisted(
            origin: OriginFor<T>,
            whitelist: WhitelistId,
            account: T::AccountId,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::ensure_admin(whitelist, &who)?;
            Self::do_add(whitelist, account);
            Ok(())
        }

        #[pallet::call_index(2)]
        #[pallet::weight(T::WeightInfo::remove_whitelisted())]
        pub fn remove_whitelisted(
            origin: OriginFor<T>,
            whitelist: WhitelistId,
            account: T::AccountId,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::ensure_admin(whitelist, &who)?;
            Members::<T>::remove(whitelist, &account);
            Self::deposit_event(Event::RemovedFromWhitelist { whitelist, account });
            Ok(())
        }

        /// Add every account in `accounts`. Duplicates and existing members are accepted.
        #[pallet::call_index(3)]
        #[pallet::weight(T::WeightInfo::batch_add_whitelisted(accounts.len() as u32))]
        pub fn batch_add_whitelisted(
            origin: OriginFor<T>,
            whitelist: WhitelistId,
            accounts: Vec<T::AccountId>,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;
            ensure!(
                accounts.len() <= T::MaxBatchSize::get() as usize,
                Error::<T>::BatchTooLarge
            );
            Self::ensure_admin(whitelist, &who)?;
            for account in accounts {
                Self::do_add(whitelist, account);
            }
            Ok(())
        }

        /// Grant admin rights. Any admin may appoint another.
        #[pallet::call_index(4)]
        #[pallet::weight(T::WeightInfo::add_whitelist_admin())]
        pub fn add_whitelist_admin(
            origin: OriginFor<T>,
            whitelist: WhitelistId,
            account: T::AccountId,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::ensure_admin(whitelist, &who)?;
            Admins::<T>::insert(whitelist, &account, true);
            Self::deposit_event(Event::AdminAdded { whitelist, account });
            Ok(())
        }

        #[pallet::call_index(5)]
        #[pallet::weight(T::WeightInfo::renounce_whitelist_admin())]
        pub fn renounce_whitelist_admin(
            origin: OriginFor<T>,
            whitelist: WhitelistId,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::ensure_admin(whitelist, &who)?;
            Admins::<T>::remove(whitelist, &who);
            log::info!(
                target: LOG_TARGET,
                "whitelist {whitelist}: admin {who:?} renounced"
            );
            Self::deposit_event(Event::AdminRenounced { whitelist, account: who });
            Ok(())
        }
    }

    impl<T: Config> Pallet<T> {
        pub(crate) fn do_create(owner: &T::AccountId) -> Result<WhitelistId, DispatchError> {
            let whitelist = NextWhitelistId::<T>::get();
            let next = whitelist.checked_add(1).ok_or(Error::<T>::Overflow)?;
            NextWhitelistId::<T>::put(next);
            Owners::<T>::insert(whitelist, owner);
            Admins::<T>::insert(whitelist, owner, true);
            Self::deposit_event(Event::Created { whitelist, owner: owner.clone() });
            Ok(whitelist)
        }

        pub(crate) fn do_add(whitelist: WhitelistId, account: T::AccountId) {
            Members::<T>::insert(whitelist, &account, true);
            Self::deposit_event(Event::Whitelisted { whitelist, account });
        }

        fn ensure_admin(whitelist: WhitelistId, who: &T::AccountId) -> DispatchResult {
            ensure!(Owners::<T>::contains_key(whitelist), Error::<T>::UnknownWhitelist);
            ensure!(Admins::<T>::get(whitelist, who), Error::<T>::NotWhitelistAdmin);
            Ok(())
        }
    }

    #[pallet::genesis_config]
    #[derive(frame_support::DefaultNoBound)]
    pub struct GenesisConfig<T: Config> {
        /// Whitelists created at genesis as (owner, members), ids assigned in order
        pub whitelists: Vec<(T::AccountId, Vec<T::AccountId>)>,
    }

    #[pallet::genesis_build]
    impl<T: Config> BuildGenesisConfig for GenesisConfig<T> {
        fn build(&self) {
            for (owner, members) in &self.whitelists {
                let whitelist = Pallet::<T>::do_create(owner)
                    .expect("Genesis whitelist count fits in the id space");
                for account in members {
                    Members::<T>::insert(whitelist, account, true);
                }
            }
        }
    }
}

impl<T: Config> InspectWhitelist<T::AccountId> for Pallet<T> {
    type WhitelistId = WhitelistId;

    fn exists(id: &WhitelistId) -> bool {
        Owners::<T>::contains_key(id)
    }

    fn is_whitelisted(id: &WhitelistId, who: &T::AccountId) -> bool {
        Members::<T>::get(id, who)
    }

    #[cfg(feature = "runtime-benchmarks")]
    fn create_with_members(owner: &T::AccountId, members: &[T::AccountId]) -> WhitelistId {
        let whitelist = Self::do_create(owner).expect("Benchmark id space is not exhausted");
        for account in members {
            Members::<T>::insert(whitelist, account, true);
        }
        whitelist
    }
}

//! Benchmarking setup for pallet-whitelist

use super::*;

#[allow(unused)]
use crate::Pallet as Whitelist;
use frame_benchmarking::v2::*;
use frame_system::RawOrigin;

fn whitelist_for<T: Config>(admin: &T::AccountId) -> WhitelistId {
    Pallet::<T>::do_create(admin).expect("Fresh id space")
}

#[benchmarks]
mod benchmarks {
    use super::*;

    #[benchmark]
    fn create_whitelist() {
        let caller: T::AccountId = whitelisted_caller();
        let whitelist = NextWhitelistId::<T>::get();

        #[extrinsic_call]
        _(RawOrigin::Signed(caller.clone()));

        assert_eq!(Owners::<T>::get(whitelist), Some(caller));
    }

    #[benchmark]
    fn add_whitelisted() {
        let caller: T::AccountId = whitelisted_caller();
        let account: T::AccountId = account("member", 0, 0);
        let whitelist = whitelist_for::<T>(&caller);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), whitelist, account.clone());

        assert_eq!(Members::<T>::get(whitelist, &account), true);
    }

    #[benchmark]
    fn remove_whitelisted() {
        let caller: T::AccountId = whitelisted_caller();
        let account: T::AccountId = account("member", 0, 0);
        let whitelist = whitelist_for::<T>(&caller);
        Members::<T>::insert(whitelist, &account, true);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), whitelist, account.clone());

        assert_eq!(Members::<T>::get(whitelist, &account), false);
    }

    #[benchmark]
    fn batch_add_whitelisted(n: Linear<1, { T::MaxBatchSize::get() }>) {
        let caller: T::AccountId = whitelisted_caller();
        let whitelist = whitelist_for::<T>(&caller);
        let accounts: Vec<T::AccountId> = (0..n).map(|i| account("member", i, 0)).collect();
        let last = accounts.last().cloned().expect("n >= 1");

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), whitelist, accounts);

        assert_eq!(Members::<T>::get(whitelist, &last), true);
    }

    #[benchmark]
    fn add_whitelist_admin() {
        let caller: T::AccountId = whitelisted_caller();
        let account: T::AccountId = account("admin", 0, 0);
        let whitelist = whitelist_for::<T>(&caller);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), whitelist, account.clone());

        assert_eq!(Admins::<T>::get(whitelist, &account), true);
    }

    #[benchmark]
    fn renounce_whitelist_admin() {
        let caller: T::AccountId = whitelisted_caller();
        let whitelist = whitelist_for::<T>(&caller);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller.clone()), whitelist);

        assert_eq!(Admins::<T>::get(whitelist, &caller), false);
    }

    impl_benchmark_test_suite!(Whitelist, crate::mock::new_test_ext(), crate::mock::Test);
}

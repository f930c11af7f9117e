//! Benchmarking setup for pallet-leveraged-token

use super::*;

#[allow(unused)]
use crate::Pallet as LeveragedToken;
use frame_benchmarking::v2::*;
use frame_system::RawOrigin;

const AMOUNT: u128 = 1_000_000;

/// Activate a fresh whitelist holding `members`, owned by `owner`.
fn activate_whitelist<T: Config>(owner: &T::AccountId, members: &[T::AccountId]) {
    let whitelist = T::Whitelist::create_with_members(owner, members);
    ActiveWhitelist::<T>::put(whitelist);
}

fn fund<T: Config>(who: &T::AccountId, amount: u128) {
    Balances::<T>::mutate(who, |balance| *balance += amount);
    TotalSupply::<T>::mutate(|supply| *supply += amount);
}

#[benchmarks]
mod benchmarks {
    use super::*;

    #[benchmark]
    fn mint() {
        let caller: T::AccountId = whitelisted_caller();
        let recipient: T::AccountId = account("recipient", 0, 0);
        Minters::<T>::insert(&caller, true);
        activate_whitelist::<T>(&caller, &[recipient.clone()]);
        let before = Balances::<T>::get(&recipient);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), recipient.clone(), AMOUNT);

        assert_eq!(Balances::<T>::get(&recipient), before + AMOUNT);
    }

    #[benchmark]
    fn burn() {
        let caller: T::AccountId = whitelisted_caller();
        Burners::<T>::insert(&caller, true);
        fund::<T>(&caller, AMOUNT);
        let before = Balances::<T>::get(&caller);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller.clone()), AMOUNT);

        assert_eq!(Balances::<T>::get(&caller), before - AMOUNT);
    }

    #[benchmark]
    fn burn_from() {
        let caller: T::AccountId = whitelisted_caller();
        let holder: T::AccountId = account("holder", 0, 0);
        Burners::<T>::insert(&caller, true);
        activate_whitelist::<T>(&caller, &[holder.clone()]);
        fund::<T>(&holder, AMOUNT);
        Allowances::<T>::insert(&holder, &caller, AMOUNT);
        let before = Balances::<T>::get(&holder);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), holder.clone(), AMOUNT);

        assert_eq!(Balances::<T>::get(&holder), before - AMOUNT);
    }

    #[benchmark]
    fn burn_blacklisted() {
        let caller: T::AccountId = whitelisted_caller();
        let holder: T::AccountId = account("holder", 0, 0);
        Burners::<T>::insert(&caller, true);
        activate_whitelist::<T>(&caller, &[]);
        fund::<T>(&holder, AMOUNT);
        let before = Balances::<T>::get(&holder);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), holder.clone(), AMOUNT);

        assert_eq!(Balances::<T>::get(&holder), before - AMOUNT);
    }

    #[benchmark]
    fn transfer() {
        let caller: T::AccountId = whitelisted_caller();
        let recipient: T::AccountId = account("recipient", 0, 0);
        activate_whitelist::<T>(&caller, &[caller.clone(), recipient.clone()]);
        fund::<T>(&caller, AMOUNT);
        let before = Balances::<T>::get(&recipient);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), recipient.clone(), AMOUNT);

        assert_eq!(Balances::<T>::get(&recipient), before + AMOUNT);
    }

    #[benchmark]
    fn transfer_from() {
        let caller: T::AccountId = whitelisted_caller();
        let holder: T::AccountId = account("holder", 0, 0);
        let recipient: T::AccountId = account("recipient", 0, 0);
        activate_whitelist::<T>(&caller, &[holder.clone(), recipient.clone()]);
        fund::<T>(&holder, AMOUNT);
        Allowances::<T>::insert(&holder, &caller, AMOUNT);
        let before = Balances::<T>::get(&recipient);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), holder, recipient.clone(), AMOUNT);

        assert_eq!(Balances::<T>::get(&recipient), before + AMOUNT);
    }

    #[benchmark]
    fn approve() {
        let caller: T::AccountId = whitelisted_caller();
        let spender: T::AccountId = account("spender", 0, 0);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller.clone()), spender.clone(), AMOUNT);

        assert_eq!(Allowances::<T>::get(&caller, &spender), AMOUNT);
    }

    #[benchmark]
    fn add_minter() {
        let caller: T::AccountId = whitelisted_caller();
        let account: T::AccountId = account("minter", 0, 0);
        Minters::<T>::insert(&caller, true);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), account.clone());

        assert_eq!(Minters::<T>::get(&account), true);
    }

    #[benchmark]
    fn add_burner() {
        let caller: T::AccountId = whitelisted_caller();
        let account: T::AccountId = account("burner", 0, 0);
        Burners::<T>::insert(&caller, true);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), account.clone());

        assert_eq!(Burners::<T>::get(&account), true);
    }

    #[benchmark]
    fn remove_minter() {
        let caller: T::AccountId = whitelisted_caller();
        let account: T::AccountId = account("minter", 0, 0);
        Owner::<T>::put(&caller);
        Minters::<T>::insert(&account, true);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), account.clone());

        assert_eq!(Minters::<T>::get(&account), false);
    }

    #[benchmark]
    fn remove_burner() {
        let caller: T::AccountId = whitelisted_caller();
        let account: T::AccountId = account("burner", 0, 0);
        Owner::<T>::put(&caller);
        Burners::<T>::insert(&account, true);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), account.clone());

        assert_eq!(Burners::<T>::get(&account), false);
    }

    #[benchmark]
    fn transfer_ownership() {
        let caller: T::AccountId = whitelisted_caller();
        let new_owner: T::AccountId = account("owner", 0, 0);
        Owner::<T>::put(&caller);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), new_owner.clone());

        assert_eq!(Owner::<T>::get(), Some(new_owner));
    }

    #[benchmark]
    fn set_whitelist() {
        let caller: T::AccountId = whitelisted_caller();
        Owner::<T>::put(&caller);
        let whitelist = T::Whitelist::create_with_members(&caller, &[]);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), whitelist);

        assert_eq!(ActiveWhitelist::<T>::get(), Some(whitelist));
    }

    #[benchmark]
    fn reclaim_token() {
        let caller: T::AccountId = whitelisted_caller();
        Owner::<T>::put(&caller);
        let vault = LeveragedToken::<T>::account_id();
        fund::<T>(&vault, AMOUNT);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller.clone()));

        assert_eq!(Balances::<T>::get(&vault), 0);
        assert!(Balances::<T>::get(&caller) >= AMOUNT);
    }

    impl_benchmark_test_suite!(LeveragedToken, crate::mock::new_test_ext(), crate::mock::Test);
}
